use crate::app::Notice;
use crate::templates::{desktop_layout, Nav};
use maud::{html, Markup, PreEscaped};

/// Click-to-pick map. The chosen point goes back to `/` as `lat`/`lng`.
pub fn coordinate_picker_page(center: (f64, f64), zoom: u8, notice: Option<&Notice>) -> Markup {
    let (lat, lng) = center;
    let init = format!(
        "document.addEventListener('DOMContentLoaded', function () {{ \
         initCoordinatePicker('coordinatesMap', [{lat}, {lng}], {zoom}); }});"
    );

    desktop_layout(
        "Pick coordinates",
        Nav::None,
        notice,
        true,
        html! {
            section class="card picker-card" {
                h2 { "📍 Pick coordinates" }
                p class="hint" { "Click the map where the property is." }
                div id="coordinatesMap" class="map" {}

                form id="coordinatesForm" method="get" action="/" {
                    input type="hidden" id="pickedLat" name="lat";
                    input type="hidden" id="pickedLng" name="lng";
                    p class="selected-coordinates" {
                        "Selected: " span id="selectedCoordinates" { "none" }
                    }
                    div class="form-actions" {
                        a href="/" class="btn secondary" { "Cancel" }
                        button type="submit" id="useCoordinatesBtn" class="btn primary" disabled {
                            "Use coordinates"
                        }
                    }
                }
            }
            script { (PreEscaped(init)) }
        },
    )
}
