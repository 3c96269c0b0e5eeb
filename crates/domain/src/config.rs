//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CACHE_TTL_MS;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub store: StoreConfig,
    pub cache: CacheSettings,
}

/// Remote document store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the document store REST endpoint
    pub base_url: String,
    /// Request timeout in seconds; retries are deliberately not configured
    pub timeout_seconds: u64,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

/// Client-side contact list cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSettings {
    /// Freshness window in milliseconds
    pub ttl_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreConfig {
                base_url: "http://localhost:8080/v1".to_string(),
                timeout_seconds: 30,
                api_key: None,
            },
            cache: CacheSettings { ttl_ms: DEFAULT_CACHE_TTL_MS },
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for config.
    use super::*;

    /// Tests that the default configuration carries the 30s cache window.
    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.cache.ttl_ms, 30_000);
        assert_eq!(config.store.timeout_seconds, 30);
        assert!(config.store.api_key.is_none());
    }

    /// Tests that the API key is never serialized back out.
    #[test]
    fn test_api_key_not_serialized() {
        let mut config = Config::default();
        config.store.api_key = Some("secret".into());
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
    }
}
