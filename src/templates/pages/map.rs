use crate::app::Notice;
use crate::domain::logic::{type_color, type_icon, PROPERTY_TYPES};
use crate::templates::{desktop_layout, Nav};
use maud::{html, Markup, PreEscaped};

pub struct MapVm {
    pub notice: Option<Notice>,
    /// Already escaped for a `<script>` block.
    pub pins_json: String,
    pub shown: usize,
    pub plotted: usize,
    pub center: (f64, f64),
    pub zoom: u8,
}

pub fn map_page(vm: &MapVm) -> Markup {
    let (lat, lng) = vm.center;
    let init = format!(
        "document.addEventListener('DOMContentLoaded', function () {{ \
         initListingMap('map', {pins}, [{lat}, {lng}], {zoom}); }});",
        pins = vm.pins_json,
        zoom = vm.zoom,
    );

    desktop_layout(
        "Map",
        Nav::Map,
        vm.notice.as_ref(),
        true,
        html! {
            section class="card map-card" {
                div class="stats" {
                    span { "Showing: " strong id="filteredProperties" { (vm.shown) } }
                    span { "On map: " strong id="mappedProperties" { (vm.plotted) } }
                    @if vm.plotted < vm.shown {
                        span class="hint" { "Listings without valid coordinates are not plotted." }
                    }
                }
                div id="map" class="map" {}
                ul class="map-legend" {
                    @for t in PROPERTY_TYPES {
                        li {
                            span class="legend-swatch" style=(format!("background:{}", type_color(t))) {}
                            (type_icon(t)) " " (t)
                        }
                    }
                }
            }
            script { (PreEscaped(init)) }
        },
    )
}
