//! Environment configuration for the browse binary.

use storefront_catalog::CategorySelection;
use storefront_core::DomainError;
use storefront_observability::{LogFormat, ParseLogFormatError};
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

const ENV_API_URL: &str = "STOREFRONT_API_URL";
const ENV_AUTH_TOKEN: &str = "STOREFRONT_AUTH_TOKEN";
const ENV_CATEGORY: &str = "STOREFRONT_CATEGORY";
const ENV_LOG_FORMAT: &str = "STOREFRONT_LOG_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("STOREFRONT_API_URL must be an http(s) URL, got {0:?}")]
    InvalidApiUrl(String),
    #[error("STOREFRONT_CATEGORY must be \"all\" or a category id: {0}")]
    InvalidCategory(#[source] DomainError),
    #[error("STOREFRONT_LOG_FORMAT: {0}")]
    InvalidLogFormat(#[source] ParseLogFormatError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseConfig {
    /// Base URL of the catalog service, without trailing slash.
    pub api_url: String,
    pub auth_token: Option<String>,
    /// Selection applied once the page has loaded.
    pub initial_selection: CategorySelection,
    pub log_format: LogFormat,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            auth_token: None,
            initial_selection: CategorySelection::All,
            log_format: LogFormat::Pretty,
        }
    }
}

impl BrowseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_url = match get(ENV_API_URL) {
            Some(url) => {
                let url = url.trim().trim_end_matches('/').to_string();
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(ConfigError::InvalidApiUrl(url));
                }
                url
            }
            None => DEFAULT_API_URL.to_string(),
        };

        let initial_selection = get(ENV_CATEGORY)
            .map(|v| v.parse::<CategorySelection>())
            .transpose()
            .map_err(ConfigError::InvalidCategory)?
            .unwrap_or_default();

        let log_format = get(ENV_LOG_FORMAT)
            .map(|v| v.parse::<LogFormat>())
            .transpose()
            .map_err(ConfigError::InvalidLogFormat)?
            .unwrap_or_default();

        Ok(Self {
            api_url,
            auth_token: get(ENV_AUTH_TOKEN),
            initial_selection,
            log_format,
        })
    }
}
