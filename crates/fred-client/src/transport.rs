//! HTTP transport layer for FRED API requests

use std::time::Duration;

use fred_core::{Error, Result};
use reqwest::{Client, StatusCode};
use tracing::debug;

/// HTTP transport for making requests to the FRED API.
///
/// One instance is shared (via `Arc`) by every request descriptor a
/// client hands out. No retries: a failed call is a reported failure.
#[derive(Debug)]
pub struct Transport {
  client: Client,
  base_url: String,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(base_url: impl Into<String>) -> Result<Self> {
    let client = Client::builder()
      .user_agent(concat!("fred-client/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {e}")))?;

    Ok(Self { client, base_url: base_url.into() })
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Perform a GET against `url`, enforcing `timeout`.
  ///
  /// 200 is the only success status; any other status fails with
  /// [`Error::RequestFailed`] carrying the status code and its reason
  /// text.
  pub async fn get(&self, url: &str, timeout: Duration) -> Result<String> {
    debug!("Making request to: {}", url);

    let response = self
      .client
      .get(url)
      .timeout(timeout)
      .send()
      .await
      .map_err(|e| Error::Http(format!("Request failed: {e}")))?;

    let status = response.status();
    if status != StatusCode::OK {
      let reason = status.canonical_reason().unwrap_or("Unknown").to_string();
      return Err(Error::RequestFailed { status: status.as_u16(), reason });
    }

    response
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {e}")))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use fred_core::FRED_BASE_URL;

  #[test]
  fn test_transport_creation() {
    let transport = Transport::new(FRED_BASE_URL).unwrap();
    assert_eq!(transport.base_url(), "https://api.stlouisfed.org/fred");
  }
}
