/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! The main FRED API client handle

use std::sync::Arc;

use fred_core::{ApiKey, Config, Endpoint, Result};

use crate::presets::SeriesPreset;
use crate::request::{FileType, FredRequest};
use crate::series::{SeriesClient, SeriesOptions};
use crate::transport::Transport;

/// Main FRED API client
///
/// Owns the shared transport and the resolved API key, and hands out
/// validated request descriptors and composite series clients.
///
/// # Examples
///
/// ```rust,no_run
/// use fred_client::{FredClient, SeriesOptions, SeriesPreset};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = FredClient::from_env()?;
///
///     // Unemployment rate with series metadata attached
///     let options = SeriesOptions { include_series_info: true, ..Default::default() };
///     let data = client.preset(SeriesPreset::UnemploymentRate, options)?.fetch().await?;
///     println!("{} observations in {}", data.observations.len(), data.units);
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct FredClient {
  transport: Arc<Transport>,
  api_key: ApiKey,
  timeout_secs: u64,
}

impl FredClient {
  /// Create a new FRED API client
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    let transport = Arc::new(Transport::new(config.base_url)?);
    Ok(Self { transport, api_key: config.api_key, timeout_secs: config.timeout_secs })
  }

  /// Create a client from environment variables
  ///
  /// Reads the API key from `GOVDATA_FRED_API_KEY`.
  pub fn from_env() -> Result<Self> {
    Self::new(Config::from_env()?)
  }

  /// Build a validated request for any catalogued endpoint.
  ///
  /// Uses the JSON format and the configured default timeout.
  pub fn request(&self, endpoint: Endpoint, params: Vec<(String, String)>) -> Result<FredRequest> {
    self.request_with(endpoint, params, FileType::default(), self.timeout_secs)
  }

  /// Build a validated request with an explicit format and timeout
  pub fn request_with(
    &self,
    endpoint: Endpoint,
    params: Vec<(String, String)>,
    file_type: FileType,
    timeout_secs: u64,
  ) -> Result<FredRequest> {
    FredRequest::new(
      self.transport.clone(),
      self.api_key.clone(),
      endpoint,
      params,
      file_type,
      timeout_secs,
    )
  }

  /// Composite client for one series
  pub fn series(&self, series_id: &str, options: SeriesOptions) -> Result<SeriesClient> {
    self.series_with_params(Some(series_id), Vec::new(), options)
  }

  /// Composite client with extra query parameters shared by all three
  /// sub-requests
  pub fn series_with_params(
    &self,
    series_id: Option<&str>,
    params: Vec<(String, String)>,
    options: SeriesOptions,
  ) -> Result<SeriesClient> {
    SeriesClient::new(self.transport.clone(), self.api_key.clone(), series_id, params, options)
  }

  /// Composite client for a well-known indicator
  pub fn preset(&self, preset: SeriesPreset, options: SeriesOptions) -> Result<SeriesClient> {
    self.series(preset.series_id(), options)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::time::Duration;

  fn test_client() -> FredClient {
    FredClient::new(Config::with_key(ApiKey::new("test_API_key").unwrap())).unwrap()
  }

  #[test]
  fn test_client_creation() {
    let client = test_client();
    assert_eq!(client.transport.base_url(), "https://api.stlouisfed.org/fred");
  }

  #[test]
  fn test_request_defaults() {
    let client = test_client();
    let request = client
      .request(Endpoint::Category, vec![("category_id".to_string(), "125".to_string())])
      .unwrap();
    assert_eq!(request.file_type(), FileType::Json);
    assert_eq!(request.timeout(), Duration::from_secs(5));
  }

  #[test]
  fn test_preset_grid() {
    let client = test_client();
    for preset in SeriesPreset::ALL {
      let series = client.preset(preset, SeriesOptions::default()).unwrap();
      let expected = vec![("series_id".to_string(), preset.series_id().to_string())];

      for descriptor in [series.observations(), series.information(), series.release()] {
        assert_eq!(descriptor.params(), expected.as_slice(), "{preset:?}");
        assert_eq!(descriptor.file_type(), FileType::Json);
        assert_eq!(descriptor.timeout(), Duration::from_secs(5));
      }
      assert!(!series.include_series_info());
      assert!(!series.include_series_release());
    }
  }
}
