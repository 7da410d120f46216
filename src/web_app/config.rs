// web_app/config.rs - Storefront configuration
//
// All settings come from environment variables. On the server a `.env`
// file is loaded first for local development.

use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::web_app::model::PriceSortStrategy;

pub const DEFAULT_CATALOG_API_URL: &str = "https://next-ecommerce-api.vercel.app";
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Configuration loading failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Settings of the listing state machine
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingConfig {
    pub page_size: u32,
    pub search_debounce: Duration,
    pub price_sort: PriceSortStrategy,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce: Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS),
            price_sort: PriceSortStrategy::Server,
        }
    }
}

/// Everything the storefront needs at startup
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub catalog_api_url: Url,
    pub request_timeout: Duration,
    pub listing: ListingConfig,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_api_url: Url::parse(DEFAULT_CATALOG_API_URL)
                .expect("default catalog URL should parse"),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            listing: ListingConfig::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unset keys take their defaults; set but unparseable keys are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let catalog_api_url = match lookup("CATALOG_API_URL") {
            Some(raw) => Url::parse(raw.trim()).map_err(|e| {
                ConfigError::InvalidValue("CATALOG_API_URL".to_string(), e.to_string())
            })?,
            None => defaults.catalog_api_url,
        };

        let page_size = match lookup("PAGE_SIZE") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n >= 1 => n,
                _ => {
                    return Err(ConfigError::InvalidValue(
                        "PAGE_SIZE".to_string(),
                        format!("'{}' is not a positive integer", raw),
                    ))
                }
            },
            None => DEFAULT_PAGE_SIZE,
        };

        let debounce_ms = parse_u64(&lookup, "SEARCH_DEBOUNCE_MS", DEFAULT_SEARCH_DEBOUNCE_MS)?;
        let timeout_secs =
            parse_u64(&lookup, "REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;

        let price_sort = match lookup("PRICE_SORT").as_deref().map(str::trim) {
            None | Some("server") => PriceSortStrategy::Server,
            Some("client") => PriceSortStrategy::Client,
            Some(other) => {
                return Err(ConfigError::InvalidValue(
                    "PRICE_SORT".to_string(),
                    format!("'{}' is neither 'server' nor 'client'", other),
                ))
            }
        };

        Ok(Self {
            catalog_api_url,
            request_timeout: Duration::from_secs(timeout_secs),
            listing: ListingConfig {
                page_size,
                search_debounce: Duration::from_millis(debounce_ms),
                price_sort,
            },
        })
    }
}

#[cfg(feature = "native")]
fn load_dotenv() {
    // Only load from .env outside tests to keep them hermetic.
    if !cfg!(test) {
        dotenv::dotenv().ok();
    }
}

#[cfg(not(feature = "native"))]
fn load_dotenv() {}

fn parse_u64<F>(lookup: &F, key: &str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
            ConfigError::InvalidValue(key.to_string(), format!("'{}' is not a number", raw))
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.catalog_api_url.as_str(), "https://next-ecommerce-api.vercel.app/");
        assert_eq!(config.listing.page_size, 20);
        assert_eq!(config.listing.search_debounce, Duration::from_millis(300));
        assert_eq!(config.listing.price_sort, PriceSortStrategy::Server);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = StorefrontConfig::from_lookup(|k| (k == "PAGE_SIZE").then(|| "0".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref key, _) if key == "PAGE_SIZE"));
    }
}
