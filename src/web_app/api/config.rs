// web_app/api/config.rs - Pixabay configuration
//
// The API key is injected through the environment (optionally a .env file)
// and never compiled into the binary or shipped to the browser.

use std::env;

use thiserror::Error;
use url::Url;

pub const API_KEY_VAR: &str = "PIXABAY_API_KEY";
pub const BASE_URL_VAR: &str = "PIXABAY_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "https://pixabay.com/api/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PIXABAY_API_KEY must be set to a non-empty value")]
    MissingApiKey,

    #[error("invalid PIXABAY_BASE_URL '{value}': {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Clone, PartialEq, Eq)]
pub struct PixabayConfig {
    pub api_key: String,
    pub base_url: Url,
}

// Keep the key out of logs
impl std::fmt::Debug for PixabayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixabayConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl PixabayConfig {
    pub fn new(api_key: impl Into<String>, base_url: &str) -> Result<Self, ConfigError> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        let base_url = Url::parse(base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            value: base_url.to_string(),
            source,
        })?;
        Ok(Self { api_key, base_url })
    }

    /// Read `PIXABAY_API_KEY` and optional `PIXABAY_BASE_URL`
    ///
    /// Callers load `.env` first if they want one honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var(API_KEY_VAR).map_err(|_| ConfigError::MissingApiKey)?;
        let base_url = env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(api_key, &base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_key() {
        let config = PixabayConfig::new("  abc123 ", DEFAULT_BASE_URL).unwrap();
        assert_eq!(config.api_key, "abc123");
        assert_eq!(config.base_url.as_str(), "https://pixabay.com/api/");
    }

    #[test]
    fn test_blank_key_rejected() {
        assert!(matches!(
            PixabayConfig::new("   ", DEFAULT_BASE_URL),
            Err(ConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn test_bad_base_url_rejected() {
        let err = PixabayConfig::new("abc", "not a url").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = PixabayConfig::new("secret-key", DEFAULT_BASE_URL).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("redacted"));
    }
}
