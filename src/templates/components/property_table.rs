use crate::domain::logic::{amenity_list, booking_link, or_placeholder, price_label};
use crate::domain::PropertyRecord;
use maud::{html, Markup};

/// Stats line plus table. This is the element the filter form swaps.
pub fn results_section(
    entries: &[(usize, &PropertyRecord)],
    total: usize,
    currency: &str,
) -> Markup {
    html! {
        section id="results" class="results" {
            div class="stats" {
                span { "Total: " strong id="totalProperties" { (total) } }
                span { "Showing: " strong id="filteredProperties" { (entries.len()) } }
            }
            (property_table(entries, currency))
        }
    }
}

pub fn property_table(entries: &[(usize, &PropertyRecord)], currency: &str) -> Markup {
    if entries.is_empty() {
        return html! {
            div class="no-data" {
                p { "🔍 No properties match your current filters. Try adjusting your search criteria." }
            }
        };
    }

    html! {
        div class="table-wrapper" {
            table class="properties-table" {
                thead {
                    tr {
                        th { "Property" }
                        th { "Type" }
                        th { "Location" }
                        th { "Price" }
                        th { "Amenities" }
                        th { "Actions" }
                    }
                }
                tbody {
                    @for (index, property) in entries {
                        (property_row(*index, property, currency))
                    }
                }
            }
        }
    }
}

fn property_row(index: usize, property: &PropertyRecord, currency: &str) -> Markup {
    html! {
        tr {
            td { div class="property-name" { (property.name) } }
            td { span class="property-type" { (or_placeholder(&property.property_type, "Property")) } }
            td { div class="property-location" { (or_placeholder(&property.location, "-")) } }
            td {
                div class="property-price" {
                    (price_label(property, currency).unwrap_or_else(|| "-".to_string()))
                }
            }
            td {
                div class="property-amenities" {
                    @for amenity in amenity_list(property) {
                        span class="amenity-tag" { (amenity) }
                    }
                }
            }
            td class="property-actions" {
                a href=(format!("/listings/{index}")) class="btn-details" { "📋 Details" }
                @if let Some(link) = booking_link(&property.url) {
                    a href=(link) target="_blank" rel="noopener" class="property-url" { "🔗 View" }
                } @else {
                    span class="property-url invalid" title=(property.url) { "No valid link" }
                }
            }
        }
    }
}
