mod fetcher;
mod loader_error;
mod source;
mod upload;

pub use fetcher::CsvFetcher;
pub use loader_error::{FetchError, LoadError};
pub use source::CsvSource;
pub use upload::CsvUpload;

use crate::domain::{decode, PropertyRecord};

/// Ten New Zealand listings compiled into the binary.
pub const SAMPLE_CSV: &str = include_str!("../../data/sample_stays.csv");

/// Fetch and decode a user-supplied URL. Zero surviving rows is an error so a
/// bad link never wipes the current listings.
pub fn load_from_url(fetcher: &CsvFetcher, raw_url: &str) -> Result<Vec<PropertyRecord>, LoadError> {
    let url = CsvFetcher::validate_url(raw_url)?;
    let text = fetcher.fetch_text(&url)?;
    let records = decode(&text)?;

    if records.is_empty() {
        return Err(LoadError::NoRecords);
    }
    Ok(records)
}

/// Read and decode the default resource. Blank files count as empty.
pub fn load_from_source(
    fetcher: &CsvFetcher,
    source: &CsvSource,
) -> Result<Vec<PropertyRecord>, LoadError> {
    let text = source.read(fetcher)?;
    if text.trim().is_empty() {
        return Err(FetchError::EmptyBody.into());
    }
    Ok(decode(&text)?)
}

pub fn load_sample() -> Result<Vec<PropertyRecord>, LoadError> {
    Ok(decode(SAMPLE_CSV)?)
}
