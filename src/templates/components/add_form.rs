use crate::domain::logic::PROPERTY_TYPES;
use maud::{html, Markup};

/// Manual entry form. `picked` pre-fills latitude/longitude coming back from
/// the coordinate picker.
pub fn add_property_form(picked: Option<&(String, String)>) -> Markup {
    let (lat, lng) = picked
        .map(|(lat, lng)| (lat.as_str(), lng.as_str()))
        .unwrap_or(("", ""));

    html! {
        form id="addPropertyForm" class="add-form" method="post" action="/listings" {
            div class="form-grid" {
                label {
                    "Name *"
                    input type="text" id="propName" name="name" required;
                }
                label {
                    "Booking URL *"
                    input type="url" id="propUrl" name="url" required;
                }
                label {
                    "Type *"
                    select id="propType" name="type" required {
                        option value="" { "Select type" }
                        @for t in PROPERTY_TYPES {
                            option value=(t) { (t) }
                        }
                    }
                }
                label {
                    "Location"
                    input type="text" id="propLocation" name="location";
                }
                label {
                    "Price per night"
                    input type="text" id="propPrice" name="price" inputmode="decimal";
                }
                label {
                    "Amenities"
                    input type="text" id="propAmenities" name="amenities" placeholder="wifi,parking,pool";
                }
                label {
                    "Latitude"
                    input type="text" id="propLatitude" name="latitude" value=(lat);
                }
                label {
                    "Longitude"
                    input type="text" id="propLongitude" name="longitude" value=(lng);
                }
            }
            label class="wide" {
                "Description"
                textarea id="propDescription" name="description" rows="3" {}
            }
            div class="form-actions" {
                a href="/coordinates" id="getCoordinatesBtn" class="btn secondary" { "📍 Pick on map" }
                button type="submit" class="btn primary" { "Add property" }
            }
        }
    }
}
