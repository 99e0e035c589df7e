// src/domain/logic.rs
//
// Every place that needs a number or a list out of a text field goes through
// here, so the table, the details page and the map never disagree.

use crate::domain::property::PropertyRecord;
use url::Url;

/// Types offered in the add form and the type filter.
pub const PROPERTY_TYPES: [&str; 5] = ["apartment", "house", "villa", "hotel", "condo"];

/// Amenities offered in the amenity filter.
pub const AMENITIES: [&str; 5] = ["wifi", "parking", "kitchen", "pool", "gym"];

const DEFAULT_TYPE_COLOR: &str = "#95a5a6";
const DEFAULT_TYPE_ICON: &str = "🏠";

/// Parse a stored coordinate. Blank text, trailing garbage and non-finite
/// values (`NaN`, `inf`) are all `None`.
pub fn parse_coordinate(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Latitude/longitude pair, only when both parse.
pub fn coordinates(record: &PropertyRecord) -> Option<(f64, f64)> {
    let lat = parse_coordinate(&record.latitude)?;
    let lng = parse_coordinate(&record.longitude)?;
    Some((lat, lng))
}

/// A coordinate pair that can actually sit on a map.
pub fn is_valid_position(lat: f64, lng: f64) -> bool {
    lat.is_finite() && lng.is_finite() && lat.abs() <= 90.0 && lng.abs() <= 180.0
}

/// Six decimals, the precision the coordinate picker hands back.
pub fn format_coordinate(value: f64) -> String {
    format!("{value:.6}")
}

pub fn amenity_list(record: &PropertyRecord) -> Vec<&str> {
    record
        .amenities
        .split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .collect()
}

/// `£120/night`, or `None` when there is no price.
pub fn price_label(record: &PropertyRecord, currency: &str) -> Option<String> {
    let price = record.price.trim();
    if price.is_empty() {
        None
    } else {
        Some(format!("{currency}{price}/night"))
    }
}

pub fn type_color(property_type: &str) -> &'static str {
    match property_type.trim().to_lowercase().as_str() {
        "apartment" => "#667eea",
        "hotel" => "#e74c3c",
        "house" => "#27ae60",
        "villa" => "#f39c12",
        "condo" => "#9b59b6",
        _ => DEFAULT_TYPE_COLOR,
    }
}

pub fn type_icon(property_type: &str) -> &'static str {
    match property_type.trim().to_lowercase().as_str() {
        "apartment" => "🏢",
        "hotel" => "🏨",
        "house" => "🏠",
        "villa" => "🏖️",
        "condo" => "🏬",
        _ => DEFAULT_TYPE_ICON,
    }
}

/// The listing URL when it is safe to put in an `href`: absolute http(s) only.
/// Anything else (`javascript:`, relative paths, junk) is shown as text.
pub fn booking_link(raw: &str) -> Option<&str> {
    let raw = raw.trim();
    let url = Url::parse(raw).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(raw)
}

/// Fallback text for optional fields shown to the user.
pub fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}
