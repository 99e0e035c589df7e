use crate::app::Notice;
use crate::domain::logic::{
    amenity_list, booking_link, coordinates, format_coordinate, or_placeholder, price_label,
};
use crate::domain::PropertyRecord;
use crate::templates::components::qr_code;
use crate::templates::{desktop_layout, Nav};
use maud::{html, Markup};

pub fn details_page(record: &PropertyRecord, currency: &str, notice: Option<&Notice>) -> Markup {
    let amenities = amenity_list(record);
    let full_coordinates = coordinates(record)
        .map(|(lat, lng)| format!("{}, {}", format_coordinate(lat), format_coordinate(lng)));

    desktop_layout(
        &record.name,
        Nav::None,
        notice,
        false,
        html! {
            section class="card property-details" {
                p { a href="/" { "← Back to listings" } }
                h2 id="detailsName" { (record.name) }

                div class="details-grid" {
                    div class="details-info" {
                        dl {
                            dt { "Type" }
                            dd { (or_placeholder(&record.property_type, "Not specified")) }
                            dt { "Location" }
                            dd { (or_placeholder(&record.location, "Not specified")) }
                            dt { "Price" }
                            dd { (price_label(record, currency).unwrap_or_else(|| "Not specified".to_string())) }
                            dt { "Latitude" }
                            dd { (or_placeholder(&record.latitude, "Not provided")) }
                            dt { "Longitude" }
                            dd { (or_placeholder(&record.longitude, "Not provided")) }
                            @if let Some(full) = &full_coordinates {
                                dt { "Coordinates" }
                                dd class="coordinates" { (full) }
                            }
                            dt { "Amenities" }
                            dd {
                                @if amenities.is_empty() {
                                    "No amenities listed"
                                } @else {
                                    @for amenity in &amenities {
                                        span class="amenity-tag" { (amenity) }
                                    }
                                }
                            }
                        }

                        @if !record.description.trim().is_empty() {
                            h3 { "Description" }
                            p class="description" { (record.description) }
                        }

                        @if let Some(link) = booking_link(&record.url) {
                            p {
                                a href=(link) target="_blank" rel="noopener" class="btn primary" {
                                    "🔗 Open booking page"
                                }
                            }
                        }
                        p class="booking-url" { (record.url) }
                    }

                    div class="details-qr" {
                        h3 { "Scan to book" }
                        (qr_code(&record.url))
                    }
                }
            }
        },
    )
}
