use crate::domain::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Please enter a valid URL format ({0})")]
    InvalidUrl(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("The CSV file appears to be empty")]
    EmptyBody,

    #[error("{0} not found")]
    NotFound(String),

    #[error("Could not read {path}: {reason}")]
    Io { path: String, reason: String },
}

/// Anything that can go wrong between "here is a source" and "here are records".
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("No valid data found in the CSV file")]
    NoRecords,
}
