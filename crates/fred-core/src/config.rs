//! Configuration management for the FRED client

use std::env;

use dotenvy::dotenv;

use crate::auth::ApiKey;
use crate::error::{Error, Result};
use crate::{DEFAULT_TIMEOUT_SECS, FRED_BASE_URL};

/// Runtime configuration for the FRED client
#[derive(Debug, Clone)]
pub struct Config {
  /// Resolved FRED API key
  pub api_key: ApiKey,

  /// Base URL for the FRED API
  pub base_url: String,

  /// Default per-request timeout in seconds
  pub timeout_secs: u64,
}

impl Config {
  /// Load configuration from environment variables.
  ///
  /// Reads the API key from `GOVDATA_FRED_API_KEY`. `FRED_BASE_URL`
  /// and `FRED_TIMEOUT_SECS` override the defaults.
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let api_key = ApiKey::from_env("fred")?;

    let base_url = env::var("FRED_BASE_URL").unwrap_or_else(|_| FRED_BASE_URL.to_string());

    let timeout_secs = env::var("FRED_TIMEOUT_SECS")
      .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid FRED_TIMEOUT_SECS".to_string()))?;

    Ok(Config { api_key, base_url, timeout_secs })
  }

  /// Create a config with default values (for testing)
  pub fn with_key(api_key: ApiKey) -> Self {
    Config { api_key, base_url: FRED_BASE_URL.to_string(), timeout_secs: DEFAULT_TIMEOUT_SECS }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_config_defaults() {
    let config = Config::with_key(ApiKey::new("test_key").unwrap());
    assert_eq!(config.base_url, "https://api.stlouisfed.org/fred");
    assert_eq!(config.timeout_secs, 5);
  }

  #[test]
  fn test_config_from_env() {
    env::set_var("GOVDATA_FRED_API_KEY", "test_key");
    let config = Config::from_env().unwrap();
    assert_eq!(config.api_key.expose(), "test_key");
    assert_eq!(config.timeout_secs, 5);
  }
}
