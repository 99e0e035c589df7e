// config.rs
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{key}={value:?} is not valid: {reason}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// File path or http(s) URL loaded at startup and by "load default".
    pub default_csv: String,
    pub fetch_timeout: Duration,
    pub currency_symbol: String,
    pub map_center: (f64, f64),
    pub map_zoom: u8,
    /// Used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            default_csv: "stays.csv".to_string(),
            fetch_timeout: Duration::from_secs(30),
            currency_symbol: "£".to_string(),
            // New Zealand
            map_center: (-40.9006, 174.8860),
            map_zoom: 6,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> (Self, Vec<ConfigError>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by `STAYS_*` variables. Values that do not parse are
    /// reported back and the default is kept.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        let mut errors = Vec::new();

        override_parsed(&lookup, "STAYS_BIND", &mut cfg.bind_addr, &mut errors);
        override_parsed(&lookup, "STAYS_WORKERS", &mut cfg.max_workers, &mut errors);
        override_parsed(&lookup, "STAYS_MAP_CENTER_LAT", &mut cfg.map_center.0, &mut errors);
        override_parsed(&lookup, "STAYS_MAP_CENTER_LNG", &mut cfg.map_center.1, &mut errors);
        override_parsed(&lookup, "STAYS_MAP_ZOOM", &mut cfg.map_zoom, &mut errors);

        let mut timeout_secs = cfg.fetch_timeout.as_secs();
        override_parsed(&lookup, "STAYS_FETCH_TIMEOUT_SECS", &mut timeout_secs, &mut errors);
        cfg.fetch_timeout = Duration::from_secs(timeout_secs);

        if cfg.max_workers == 0 {
            errors.push(ConfigError {
                key: "STAYS_WORKERS",
                value: "0".into(),
                reason: "need at least one worker".into(),
            });
            cfg.max_workers = Self::default().max_workers;
        }

        if let Some(v) = non_blank(&lookup, "STAYS_DEFAULT_CSV") {
            cfg.default_csv = v;
        }
        if let Some(v) = non_blank(&lookup, "STAYS_CURRENCY") {
            cfg.currency_symbol = v;
        }
        if let Some(v) = non_blank(&lookup, "STAYS_LOG") {
            cfg.log_filter = v;
        }

        (cfg, errors)
    }

    /// Log every rejected override. Call after tracing is up.
    pub fn report(errors: &[ConfigError]) {
        for err in errors {
            warn!(key = err.key, "ignoring config override: {err}");
        }
    }
}

fn non_blank<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn override_parsed<F, T>(lookup: &F, key: &'static str, slot: &mut T, errors: &mut Vec<ConfigError>)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(value) = non_blank(lookup, key) else {
        return;
    };

    match value.parse::<T>() {
        Ok(parsed) => *slot = parsed,
        Err(e) => errors.push(ConfigError {
            key,
            value,
            reason: e.to_string(),
        }),
    }
}
