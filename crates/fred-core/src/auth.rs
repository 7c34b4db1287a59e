//! API key resolution for government data providers

use std::env;
use std::fmt;

use dotenvy::dotenv;

use crate::error::{Error, Result};

/// Prefix of provider API key environment variables
pub const ENV_KEY_PREFIX: &str = "GOVDATA_";

/// Suffix of provider API key environment variables
pub const ENV_KEY_SUFFIX: &str = "_API_KEY";

/// A resolved API key.
///
/// Resolved exactly once at construction and immutable afterwards.
/// Cloning is cheap; every request descriptor owns its own copy.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
  /// Wrap a literal key.
  ///
  /// # Errors
  ///
  /// Returns [`Error::EmptyApiKey`] when the key is empty.
  pub fn new(key: impl Into<String>) -> Result<Self> {
    let key = key.into();
    if key.is_empty() {
      return Err(Error::EmptyApiKey);
    }
    Ok(Self(key))
  }

  /// Environment variable name for a provider, e.g. `fred` ->
  /// `GOVDATA_FRED_API_KEY`.
  pub fn env_var_name(provider: &str) -> String {
    format!("{ENV_KEY_PREFIX}{}{ENV_KEY_SUFFIX}", provider.to_uppercase())
  }

  /// Read the key for `provider` from the environment, loading `.env`
  /// first.
  ///
  /// # Errors
  ///
  /// Returns [`Error::MissingApiKey`] naming the variable when it is
  /// unset or empty.
  pub fn from_env(provider: &str) -> Result<Self> {
    dotenv().ok();
    Self::from_env_with(provider, |var| env::var(var).ok())
  }

  /// Read the key for `provider` through an injected lookup.
  ///
  /// Tests substitute a closure over a fixed map instead of touching
  /// process environment.
  pub fn from_env_with(provider: &str, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let var = Self::env_var_name(provider);
    let key = lookup(&var).filter(|key| !key.is_empty()).ok_or(Error::MissingApiKey(var))?;
    Ok(Self(key))
  }

  /// Resolve from exactly one of a provider name or a literal key.
  ///
  /// # Errors
  ///
  /// Returns [`Error::AmbiguousApiKey`] when both or neither are
  /// supplied.
  pub fn resolve(provider: Option<&str>, key: Option<&str>) -> Result<Self> {
    match (provider, key) {
      (Some(provider), None) => Self::from_env(provider),
      (None, Some(key)) => Self::new(key),
      _ => Err(Error::AmbiguousApiKey),
    }
  }

  /// The raw key, for URL composition.
  pub fn expose(&self) -> &str {
    &self.0
  }
}

// Keys must never land in logs or panic messages.
impl fmt::Debug for ApiKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("ApiKey(***)")
  }
}
