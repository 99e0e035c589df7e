// app.rs
use crate::config::AppConfig;
use crate::domain::ListingStore;
use crate::errors::ServerError;
use crate::loader::{self, CsvFetcher, CsvSource, FetchError, LoadError};
use std::sync::Mutex;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One-shot message shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Owns everything a request handler may touch.
pub struct App {
    pub config: AppConfig,
    store: Mutex<ListingStore>,
    notice: Mutex<Option<Notice>>,
    fetcher: CsvFetcher,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self, FetchError> {
        let fetcher = CsvFetcher::new(config.fetch_timeout)?;

        Ok(Self {
            config,
            store: Mutex::new(ListingStore::new()),
            notice: Mutex::new(None),
            fetcher,
        })
    }

    /// Run `f` with exclusive access to the store. Keep the closure short:
    /// no network or file I/O in here.
    pub fn with_store<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut ListingStore) -> T,
    {
        let mut store = self.store.lock().map_err(|_| {
            error!("listing store lock poisoned");
            ServerError::InternalError
        })?;
        Ok(f(&mut store))
    }

    pub fn fetcher(&self) -> &CsvFetcher {
        &self.fetcher
    }

    pub fn default_source(&self) -> CsvSource {
        CsvSource::from_location(&self.config.default_csv)
    }

    /// Replace any pending notice.
    pub fn notify(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Success => info!(message = %notice.message, "notice"),
            NoticeKind::Error => warn!(message = %notice.message, "notice"),
        }

        if let Ok(mut slot) = self.notice.lock() {
            *slot = Some(notice);
        }
    }

    pub fn take_notice(&self) -> Option<Notice> {
        self.notice.lock().ok().and_then(|mut slot| slot.take())
    }

    /// Try the default resource once at startup. Nothing here is fatal: a
    /// missing file just leaves an empty-state notice.
    pub fn load_default_on_startup(&self) -> Result<(), ServerError> {
        let source = self.default_source();
        let name = source.display_name();

        match loader::load_from_source(&self.fetcher, &source) {
            Ok(records) if records.is_empty() => {
                self.notify(Notice::error(format!(
                    "{name} file is empty or contains no valid properties"
                )));
            }
            Ok(records) => {
                let count = records.len();
                self.with_store(|store| store.replace_all(records))?;
                self.notify(Notice::success(format!(
                    "Loaded {count} properties from {name}"
                )));
            }
            Err(LoadError::Fetch(FetchError::NotFound(_))) => {
                self.notify(Notice::error(
                    "No data loaded. Please upload a CSV file or load sample data to get started.",
                ));
            }
            Err(LoadError::Fetch(FetchError::EmptyBody)) => {
                self.notify(Notice::error(format!("{name} file is empty")));
            }
            Err(e) => {
                self.notify(Notice::error(format!("Error loading {name}: {e}")));
            }
        }
        Ok(())
    }
}
