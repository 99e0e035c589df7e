use crate::loader::{CsvFetcher, FetchError};
use std::fmt;
use std::io::ErrorKind;
use std::path::PathBuf;
use url::Url;

/// Where the default listings file lives: next to the binary, or on a server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvSource {
    Local(PathBuf),
    Remote(Url),
}

impl CsvSource {
    /// An `http(s)` URL is fetched, anything else is treated as a file path.
    pub fn from_location(location: &str) -> Self {
        match CsvFetcher::validate_url(location) {
            Ok(url) => CsvSource::Remote(url),
            Err(_) => CsvSource::Local(PathBuf::from(location.trim())),
        }
    }

    /// Short name for user-facing messages, e.g. `stays.csv`.
    pub fn display_name(&self) -> String {
        let name = match self {
            CsvSource::Local(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned()),
            CsvSource::Remote(url) => url
                .path_segments()
                .and_then(|mut segments| segments.next_back())
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        };
        name.unwrap_or_else(|| self.to_string())
    }

    /// Read the raw text. Blank text is returned as-is; the caller decides
    /// whether that is an error.
    pub fn read(&self, fetcher: &CsvFetcher) -> Result<String, FetchError> {
        match self {
            CsvSource::Local(path) => std::fs::read_to_string(path).map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    FetchError::NotFound(path.display().to_string())
                } else {
                    FetchError::Io {
                        path: path.display().to_string(),
                        reason: e.to_string(),
                    }
                }
            }),
            CsvSource::Remote(url) => match fetcher.fetch_text(url) {
                Err(FetchError::EmptyBody) => Ok(String::new()),
                other => other,
            },
        }
    }
}

impl fmt::Display for CsvSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvSource::Local(path) => write!(f, "{}", path.display()),
            CsvSource::Remote(url) => write!(f, "{url}"),
        }
    }
}
