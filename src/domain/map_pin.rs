// src/domain/map_pin.rs

use crate::domain::logic::{
    amenity_list, booking_link, coordinates, or_placeholder, price_label, type_color, type_icon,
};
use crate::domain::property::PropertyRecord;
use serde::Serialize;
use tracing::debug;

/// Everything the browser-side map needs to draw one marker and its popup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPin {
    pub index: usize,
    pub lat: f64,
    pub lng: f64,
    pub name: String,
    pub location: String,
    pub price: String,
    pub property_type: String,
    pub amenities: String,
    /// `None` unless the listing URL is a plain http(s) link.
    pub url: Option<String>,
    pub color: &'static str,
    pub icon: &'static str,
}

/// One pin per entry whose coordinates parse. Entries without usable
/// coordinates are left off the map.
pub fn pins_for<'a>(
    entries: impl IntoIterator<Item = (usize, &'a PropertyRecord)>,
    currency: &str,
) -> Vec<MapPin> {
    entries
        .into_iter()
        .filter_map(|(index, record)| {
            let Some((lat, lng)) = coordinates(record) else {
                debug!(name = %record.name, "no usable coordinates, not plotting");
                return None;
            };

            let amenities = amenity_list(record);

            Some(MapPin {
                index,
                lat,
                lng,
                name: record.name.clone(),
                location: or_placeholder(&record.location, "Unknown Location").to_string(),
                price: price_label(record, currency)
                    .unwrap_or_else(|| "Price not available".to_string()),
                property_type: or_placeholder(&record.property_type, "Property").to_string(),
                amenities: if amenities.is_empty() {
                    "No amenities listed".to_string()
                } else {
                    amenities.join(", ")
                },
                url: booking_link(&record.url).map(str::to_string),
                color: type_color(&record.property_type),
                icon: type_icon(&record.property_type),
            })
        })
        .collect()
}

/// Serialize pins for inlining into a `<script>` block. `</` is escaped so a
/// listing name can never close the script element.
pub fn pins_json(pins: &[MapPin]) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(pins)?.replace("</", "<\\/"))
}
