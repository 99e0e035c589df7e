// src/domain/codec.rs

use crate::domain::property::{PropertyRecord, FIELD_ORDER};
use thiserror::Error;
use tracing::debug;

/// Headers a file must carry before any row is looked at.
pub const REQUIRED_HEADERS: [&str; 3] = ["name", "url", "type"];

/// Structural problems that abort a whole decode. Row-level problems never
/// surface here, those rows are just dropped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("CSV file must have at least a header row and one data row")]
    TooFewLines,

    #[error("Missing required headers: {}", .0.join(", "))]
    MissingHeaders(Vec<String>),
}

/// Parse CSV text into listings.
///
/// The header row is split on plain commas, trimmed and lowercased. Data rows
/// go through [`split_line`]. A row is skipped (not an error) when its column
/// count differs from the header, or when `name` or `url` comes out blank.
pub fn decode(text: &str) -> Result<Vec<PropertyRecord>, ParseError> {
    let lines: Vec<&str> = text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect();

    if lines.len() < 2 {
        return Err(ParseError::TooFewLines);
    }

    let headers: Vec<String> = lines[0]
        .split(',')
        .map(|h| h.trim().to_lowercase())
        .collect();

    let missing: Vec<String> = REQUIRED_HEADERS
        .iter()
        .filter(|required| !headers.iter().any(|h| h == *required))
        .map(|required| required.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(ParseError::MissingHeaders(missing));
    }

    let mut records = Vec::with_capacity(lines.len() - 1);

    for (row, line) in lines.iter().enumerate().skip(1) {
        let values = split_line(line);
        if values.len() != headers.len() {
            debug!(
                row,
                expected = headers.len(),
                found = values.len(),
                "skipping row with wrong column count"
            );
            continue;
        }

        let mut record = PropertyRecord::default();
        for (header, value) in headers.iter().zip(&values) {
            record.set_field(header, value.trim());
        }

        if !record.has_required_fields() {
            debug!(row, "skipping row without name or url");
            continue;
        }

        records.push(record);
    }

    Ok(records)
}

/// Quote-aware comma splitter.
///
/// Each `"` flips the in-quotes flag and is dropped; commas only split outside
/// quotes. Inside a quoted section `""` stands for one literal quote, which is
/// what [`encode`] writes.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }

    fields.push(current);
    fields
}

/// Serialize listings with the fixed header and column order.
pub fn encode(records: &[PropertyRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(FIELD_ORDER.join(","));

    for record in records {
        let row: Vec<String> = FIELD_ORDER
            .iter()
            .map(|key| escape_field(record.field(key).unwrap_or_default()))
            .collect();
        lines.push(row.join(","));
    }

    lines.join("\n")
}

fn escape_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
