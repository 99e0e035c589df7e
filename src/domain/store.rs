// src/domain/store.rs

use crate::domain::property::PropertyRecord;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// The four filter inputs. A blank value places no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,
    pub property_type: String,
    pub amenity: String,
    pub location: String,
}

impl FilterCriteria {
    /// Query/form parameter names, shared by the filter form and the router.
    pub const KEYS: [&'static str; 4] = ["q", "type", "amenity", "location"];

    /// Build criteria from decoded query parameters. Returns `None` when none
    /// of the filter keys are present, so a bare page load keeps the active
    /// criteria.
    pub fn from_params(params: &HashMap<String, String>) -> Option<Self> {
        if !Self::KEYS.iter().any(|k| params.contains_key(*k)) {
            return None;
        }

        let get = |key: &str| params.get(key).cloned().unwrap_or_default();
        Some(Self {
            search: get("q"),
            property_type: get("type"),
            amenity: get("amenity"),
            location: get("location"),
        })
    }

    pub fn is_blank(&self) -> bool {
        [
            &self.search,
            &self.property_type,
            &self.amenity,
            &self.location,
        ]
        .iter()
        .all(|v| v.trim().is_empty())
    }

    /// True when every non-blank criterion matches `record`.
    pub fn matches(&self, record: &PropertyRecord) -> bool {
        let search = needle(&self.search);
        let property_type = needle(&self.property_type);
        let amenity = needle(&self.amenity);
        let location = needle(&self.location);

        let matches_search = search.as_deref().map_or(true, |s| {
            contains(&record.name, s)
                || contains(&record.description, s)
                || contains(&record.location, s)
        });

        let matches_type = property_type
            .as_deref()
            .map_or(true, |t| record.property_type.trim().to_lowercase() == t);

        let matches_amenity = amenity
            .as_deref()
            .map_or(true, |a| contains(&record.amenities, a));

        let matches_location = location
            .as_deref()
            .map_or(true, |l| contains(&record.location, l));

        matches_search && matches_type && matches_amenity && matches_location
    }
}

/// Trimmed, lowercased criterion, or `None` when blank.
fn needle(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_lowercase())
}

fn contains(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

/// The full set of listings plus the view derived from the active criteria.
///
/// The view is stored as indices into the full set and rebuilt from scratch
/// after every change, so it can never drift from the records it points at.
#[derive(Debug, Default)]
pub struct ListingStore {
    records: Vec<PropertyRecord>,
    criteria: FilterCriteria,
    view: Vec<usize>,
}

impl ListingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a whole new full set. The active criteria stay.
    pub fn replace_all(&mut self, records: Vec<PropertyRecord>) {
        self.records = records;
        self.recompute();
    }

    pub fn append(&mut self, record: PropertyRecord) -> Result<(), ValidationError> {
        if record.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if record.url.trim().is_empty() {
            return Err(ValidationError::MissingField("url"));
        }

        self.records.push(record);
        self.recompute();
        Ok(())
    }

    pub fn set_filter(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.recompute();
    }

    fn recompute(&mut self) {
        let criteria = &self.criteria;
        self.view = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| criteria.matches(record))
            .map(|(index, _)| index)
            .collect();
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&PropertyRecord> {
        self.records.get(index)
    }

    /// Filtered records paired with their position in the full set.
    pub fn filtered_entries(&self) -> Vec<(usize, &PropertyRecord)> {
        self.view.iter().map(|&i| (i, &self.records[i])).collect()
    }

    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn filtered_count(&self) -> usize {
        self.view.len()
    }

    /// Non-blank locations, case-insensitively deduplicated (first spelling
    /// wins) and sorted by display text.
    pub fn distinct_locations(&self) -> Vec<String> {
        let mut seen = HashMap::new();
        for record in &self.records {
            let location = record.location.trim();
            if location.is_empty() {
                continue;
            }
            seen.entry(location.to_lowercase())
                .or_insert_with(|| location.to_string());
        }

        let mut locations: Vec<String> = seen.into_values().collect();
        locations.sort();
        locations
    }
}
