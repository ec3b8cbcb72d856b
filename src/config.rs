//! Runtime configuration from the environment (and `.env`, loaded by the binary).

use std::env;
use std::str::FromStr;
use crate::{Result, VoucherError};

const LOG_ENV: &str = "VOUCHER_LOG";
const LIST_FORMAT_ENV: &str = "VOUCHER_LIST_FORMAT";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ListFormat {
    type Err = VoucherError;
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(VoucherError::InvalidConfig(format!("{LIST_FORMAT_ENV}={other}"))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Default tracing filter; `RUST_LOG` still wins when set.
    pub log_filter: String,
    pub list_format: ListFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { log_filter: DEFAULT_LOG_FILTER.to_string(), list_format: ListFormat::default() }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let log_filter = lookup(LOG_ENV).filter(|v| !v.trim().is_empty()).unwrap_or(defaults.log_filter);
        let list_format = match lookup(LIST_FORMAT_ENV) {
            Some(raw) => raw.parse()?,
            None => defaults.list_format,
        };
        Ok(Self { log_filter, list_format })
    }
}
