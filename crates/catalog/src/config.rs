//! Catalog configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `AURIC_API_URL` - Base URL of the ornaments API
//!
//! ## Optional
//! - `AURIC_API_KEY` - API key sent as `X-Api-Key` (if the deployment requires one)
//! - `AURIC_API_TIMEOUT_SECS` - Request timeout in seconds (default: 30)
//! - `AURIC_DEFAULT_CURRENCY` - Initial display currency (default: INR)
//! - `AURIC_PAGE_LIMIT` - Listing page size, 1..=100 (default: 12)

use secrecy::SecretString;
use thiserror::Error;

use auric_core::CurrencyCode;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_PAGE_LIMIT: u32 = 12;
const MAX_PAGE_LIMIT: u32 = 100;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Catalog engine configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct CatalogConfig {
    /// Base URL of the ornaments API.
    pub api_url: String,
    /// Optional API key for the catalog service.
    pub api_key: Option<SecretString>,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
    /// Currency the store starts in.
    pub default_currency: CurrencyCode,
    /// Listing page size.
    pub page_limit: u32,
}

impl std::fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .field("default_currency", &self.default_currency)
            .field("page_limit", &self.page_limit)
            .finish()
    }
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = get_required_env("AURIC_API_URL")?;
        let api_key = get_optional_env("AURIC_API_KEY").map(SecretString::from);
        let timeout_secs = parse_timeout(
            "AURIC_API_TIMEOUT_SECS",
            get_optional_env("AURIC_API_TIMEOUT_SECS").as_deref(),
        )?;
        let default_currency = parse_currency(
            "AURIC_DEFAULT_CURRENCY",
            get_optional_env("AURIC_DEFAULT_CURRENCY").as_deref(),
        )?;
        let page_limit = parse_page_limit(
            "AURIC_PAGE_LIMIT",
            get_optional_env("AURIC_PAGE_LIMIT").as_deref(),
        )?;

        Ok(Self {
            api_url,
            api_key,
            timeout_secs,
            default_currency,
            page_limit,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_owned()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn parse_timeout(key: &str, value: Option<&str>) -> Result<u64, ConfigError> {
    value.map_or(Ok(DEFAULT_TIMEOUT_SECS), |s| {
        s.parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_owned(), e.to_string()))
    })
}

fn parse_currency(key: &str, value: Option<&str>) -> Result<CurrencyCode, ConfigError> {
    value.map_or(Ok(CurrencyCode::default()), |s| {
        s.parse::<CurrencyCode>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_owned(), e.to_string()))
    })
}

fn parse_page_limit(key: &str, value: Option<&str>) -> Result<u32, ConfigError> {
    let limit = value.map_or(Ok(DEFAULT_PAGE_LIMIT), |s| {
        s.parse::<u32>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_owned(), e.to_string()))
    })?;

    if limit == 0 || limit > MAX_PAGE_LIMIT {
        return Err(ConfigError::InvalidEnvVar(
            key.to_owned(),
            format!("must be between 1 and {MAX_PAGE_LIMIT} (got {limit})"),
        ));
    }
    Ok(limit)
}
