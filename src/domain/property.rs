// src/domain/property.rs

/// Column order used whenever records are written back out as CSV.
pub const FIELD_ORDER: [&str; 9] = [
    "name",
    "url",
    "type",
    "amenities",
    "description",
    "price",
    "location",
    "latitude",
    "longitude",
];

/// One rental listing, exactly as it was read.
///
/// Every field is kept as text. Numbers (price, coordinates) are only parsed
/// on the way to a renderer, see `domain::logic`. An empty string means the
/// field was absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyRecord {
    pub name: String,
    pub url: String,
    pub property_type: String,
    pub amenities: String,
    pub description: String,
    pub price: String,
    pub location: String,
    pub latitude: String,
    pub longitude: String,

    /// Columns we do not know about, in the order they appeared.
    /// Kept for display, never exported.
    pub extra: Vec<(String, String)>,
}

impl PropertyRecord {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    /// Look up a field by its (lowercase) CSV header name.
    pub fn field(&self, key: &str) -> Option<&str> {
        let value = match key {
            "name" => &self.name,
            "url" => &self.url,
            "type" => &self.property_type,
            "amenities" => &self.amenities,
            "description" => &self.description,
            "price" => &self.price,
            "location" => &self.location,
            "latitude" => &self.latitude,
            "longitude" => &self.longitude,
            _ => {
                return self
                    .extra
                    .iter()
                    .find(|(k, _)| k == key)
                    .map(|(_, v)| v.as_str())
            }
        };
        Some(value.as_str())
    }

    /// Set a field by header name. Unknown headers land in `extra`; a repeated
    /// header overwrites the earlier value.
    pub fn set_field(&mut self, key: &str, value: &str) {
        let slot = match key {
            "name" => &mut self.name,
            "url" => &mut self.url,
            "type" => &mut self.property_type,
            "amenities" => &mut self.amenities,
            "description" => &mut self.description,
            "price" => &mut self.price,
            "location" => &mut self.location,
            "latitude" => &mut self.latitude,
            "longitude" => &mut self.longitude,
            _ => {
                match self.extra.iter_mut().find(|(k, _)| k == key) {
                    Some((_, v)) => *v = value.to_string(),
                    None => self.extra.push((key.to_string(), value.to_string())),
                }
                return;
            }
        };
        *slot = value.to_string();
    }

    /// Name and url are the two fields a listing cannot live without.
    pub fn has_required_fields(&self) -> bool {
        !self.name.trim().is_empty() && !self.url.trim().is_empty()
    }
}
