use crate::domain::logic::{AMENITIES, PROPERTY_TYPES};
use crate::domain::FilterCriteria;
use maud::{html, Markup};

/// Search box and the three dropdowns. Works as a plain GET form; with htmx
/// it swaps `#results` on every change.
pub fn filter_form(criteria: &FilterCriteria, locations: &[String]) -> Markup {
    let selected_type = criteria.property_type.trim().to_lowercase();
    let selected_amenity = criteria.amenity.trim().to_lowercase();
    let selected_location = criteria.location.trim().to_lowercase();

    html! {
        form
            id="filters"
            class="filters"
            method="get"
            action="/"
            hx-get="/listings"
            hx-target="#results"
            hx-swap="outerHTML"
            hx-trigger="input changed delay:250ms from:#searchInput, change"
        {
            input
                type="search"
                id="searchInput"
                name="q"
                placeholder="Search name, description or location"
                value=(criteria.search);

            select name="type" id="typeFilter" {
                option value="" { "All Types" }
                @for t in PROPERTY_TYPES {
                    option value=(t) selected[selected_type == t] { (capitalize(t)) }
                }
            }

            select name="amenity" id="amenityFilter" {
                option value="" { "All Amenities" }
                @for a in AMENITIES {
                    option value=(a) selected[selected_amenity == a] { (capitalize(a)) }
                }
            }

            select name="location" id="locationFilter" {
                option value="" { "All Locations" }
                @for location in locations {
                    @let value = location.to_lowercase();
                    option value=(value) selected[selected_location == value] { (location) }
                }
            }

            noscript { button type="submit" { "Apply" } }

            @if !criteria.is_blank() {
                a href="/?q=&type=&amenity=&location=" class="clear-filters" { "Clear filters" }
            }
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
