//! Composite client for FRED series data
//!
//! Fans one series identifier out to `series/observations`, `series`,
//! and `series/release`, sequencing the calls with a fixed pacing
//! delay and attaching the metadata responses alongside the primary
//! observation records.

use std::sync::Arc;
use std::time::Duration;

use fred_core::{ApiKey, Endpoint, Error, Result, DEFAULT_TIMEOUT_SECS, PACING_DELAY_SECS};
use fred_models::{
  Observation, ObservationsResponse, Release, ReleasesResponse, SeriesInfo, SeriesResponse,
};
use tokio::time::sleep;
use tracing::{debug, instrument};

use crate::request::{FileType, FredRequest};
use crate::transport::Transport;

/// Options for a composite series request
#[derive(Debug, Clone)]
pub struct SeriesOptions {
  /// Fetch series metadata alongside the observations
  pub include_series_info: bool,

  /// Fetch release metadata alongside the observations
  pub include_series_release: bool,

  /// Response format for all three sub-requests
  pub file_type: FileType,

  /// Per-request timeout in seconds for all three sub-requests
  pub timeout_secs: u64,
}

impl Default for SeriesOptions {
  fn default() -> Self {
    Self {
      include_series_info: false,
      include_series_release: false,
      file_type: FileType::Json,
      timeout_secs: DEFAULT_TIMEOUT_SECS,
    }
  }
}

/// Result of a composite series fetch.
///
/// Metadata rides in the `Option` side-channels; the observation
/// records themselves are never altered by it.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesData {
  /// The typed observation records
  pub observations: Vec<Observation>,

  /// Units label from the observations envelope
  pub units: String,

  /// Series metadata, when requested
  pub series_info: Option<Vec<SeriesInfo>>,

  /// Release metadata, when requested
  pub series_release: Option<Vec<Release>>,
}

/// Composite client for one FRED series.
///
/// Owns three request descriptors built atomically from one parameter
/// set; descriptors are never shared across clients.
#[derive(Debug, Clone)]
pub struct SeriesClient {
  observations: FredRequest,
  information: FredRequest,
  release: FredRequest,
  include_series_info: bool,
  include_series_release: bool,
  pacing: Duration,
}

impl SeriesClient {
  /// Build the three sub-request descriptors from one parameter set.
  ///
  /// `series_id` is injected into the client's own copy of `params`
  /// unless the caller already supplied one there; an existing
  /// `series_id` parameter wins.
  ///
  /// # Errors
  ///
  /// Returns [`Error::MissingSeriesId`] when no series identifier is
  /// available anywhere, otherwise whatever [`FredRequest::new`]
  /// reports for any of the three endpoints.
  pub fn new(
    transport: Arc<Transport>,
    api_key: ApiKey,
    series_id: Option<&str>,
    mut params: Vec<(String, String)>,
    options: SeriesOptions,
  ) -> Result<Self> {
    if !params.iter().any(|(key, _)| key == "series_id") {
      match series_id {
        Some(id) => params.push(("series_id".to_string(), id.to_string())),
        None => return Err(Error::MissingSeriesId),
      }
    }

    let observations = FredRequest::new(
      transport.clone(),
      api_key.clone(),
      Endpoint::SeriesObservations,
      params.clone(),
      options.file_type,
      options.timeout_secs,
    )?;
    let information = FredRequest::new(
      transport.clone(),
      api_key.clone(),
      Endpoint::Series,
      params.clone(),
      options.file_type,
      options.timeout_secs,
    )?;
    let release = FredRequest::new(
      transport,
      api_key,
      Endpoint::SeriesRelease,
      params,
      options.file_type,
      options.timeout_secs,
    )?;

    Ok(Self {
      observations,
      information,
      release,
      include_series_info: options.include_series_info,
      include_series_release: options.include_series_release,
      pacing: Duration::from_secs(PACING_DELAY_SECS),
    })
  }

  /// Override the delay inserted before each metadata sub-call.
  ///
  /// Production keeps the fixed default; tests substitute
  /// `Duration::ZERO`.
  pub fn with_pacing(mut self, pacing: Duration) -> Self {
    self.pacing = pacing;
    self
  }

  /// The `series/observations` descriptor
  pub fn observations(&self) -> &FredRequest {
    &self.observations
  }

  /// The `series` (metadata) descriptor
  pub fn information(&self) -> &FredRequest {
    &self.information
  }

  /// The `series/release` descriptor
  pub fn release(&self) -> &FredRequest {
    &self.release
  }

  /// Whether `fetch` will pull series metadata
  pub fn include_series_info(&self) -> bool {
    self.include_series_info
  }

  /// Whether `fetch` will pull release metadata
  pub fn include_series_release(&self) -> bool {
    self.include_series_release
  }

  /// Fetch the observations, then any requested metadata.
  ///
  /// Sub-calls run strictly in order observations, series info,
  /// release; each optional call is preceded by the pacing delay. The
  /// first failure aborts the whole fetch with no partial result.
  #[instrument(skip(self))]
  pub async fn fetch(&self) -> Result<SeriesData> {
    let envelope: ObservationsResponse = self.observations.send().await?;

    let mut observations = Vec::with_capacity(envelope.observations.len());
    for raw in &envelope.observations {
      let date = raw.date()?;
      let value = raw.value_as_f64().map_err(|_| Error::ParseValue(raw.value.clone()))?;
      observations.push(Observation { date, value });
    }

    let mut data =
      SeriesData { observations, units: envelope.units, series_info: None, series_release: None };

    if self.include_series_info {
      debug!(delay_secs = self.pacing.as_secs(), "pacing before series info call");
      sleep(self.pacing).await;
      let response: SeriesResponse = self.information.send().await?;
      data.series_info = Some(response.seriess);
    }

    if self.include_series_release {
      debug!(delay_secs = self.pacing.as_secs(), "pacing before series release call");
      sleep(self.pacing).await;
      let response: ReleasesResponse = self.release.send().await?;
      data.series_release = Some(response.releases);
    }

    Ok(data)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use fred_core::FRED_BASE_URL;

  fn test_series(
    series_id: Option<&str>,
    params: Vec<(String, String)>,
    options: SeriesOptions,
  ) -> Result<SeriesClient> {
    let transport = Arc::new(Transport::new(FRED_BASE_URL).unwrap());
    let api_key = ApiKey::new("test_API_key").unwrap();
    SeriesClient::new(transport, api_key, series_id, params, options)
  }

  #[test]
  fn test_series_id_injected() {
    let client = test_series(Some("UNRATE"), Vec::new(), SeriesOptions::default()).unwrap();
    let expected = vec![("series_id".to_string(), "UNRATE".to_string())];
    assert_eq!(client.observations().params(), expected.as_slice());
    assert_eq!(client.information().params(), expected.as_slice());
    assert_eq!(client.release().params(), expected.as_slice());
  }

  #[test]
  fn test_existing_series_id_wins() {
    let params = vec![("series_id".to_string(), "GDP".to_string())];
    let client = test_series(Some("UNRATE"), params, SeriesOptions::default()).unwrap();
    let expected = vec![("series_id".to_string(), "GDP".to_string())];
    assert_eq!(client.observations().params(), expected.as_slice());
  }

  #[test]
  fn test_missing_series_id() {
    let err = test_series(None, Vec::new(), SeriesOptions::default()).unwrap_err();
    assert!(matches!(err, Error::MissingSeriesId));
  }

  #[test]
  fn test_descriptor_endpoints() {
    let client = test_series(Some("UNRATE"), Vec::new(), SeriesOptions::default()).unwrap();
    assert_eq!(client.observations().endpoint(), Endpoint::SeriesObservations);
    assert_eq!(client.information().endpoint(), Endpoint::Series);
    assert_eq!(client.release().endpoint(), Endpoint::SeriesRelease);
    assert!(!client.include_series_info());
    assert!(!client.include_series_release());
  }

  #[test]
  fn test_default_pacing() {
    let client = test_series(Some("UNRATE"), Vec::new(), SeriesOptions::default()).unwrap();
    assert_eq!(client.pacing, Duration::from_secs(2));
  }

  // The shared parameter set must satisfy all three endpoints;
  // `observation_start` is legal for series/observations but not for
  // the metadata endpoints.
  #[test]
  fn test_observation_window_rejected_by_metadata_endpoint() {
    let params = vec![("observation_start".to_string(), "2020-01-01".to_string())];
    let err = test_series(Some("UNRATE"), params, SeriesOptions::default()).unwrap_err();
    match err {
      Error::InvalidParameter { endpoint, name } => {
        assert_eq!(endpoint, "series");
        assert_eq!(name, "observation_start");
      }
      other => panic!("expected InvalidParameter, got {other:?}"),
    }
  }

  #[test]
  fn test_realtime_window_accepted_everywhere() {
    let params = vec![
      ("realtime_start".to_string(), "2024-01-01".to_string()),
      ("realtime_end".to_string(), "2024-12-31".to_string()),
    ];
    let client = test_series(Some("UNRATE"), params, SeriesOptions::default()).unwrap();
    assert_eq!(client.observations().params().len(), 3);
    assert_eq!(client.information().params().len(), 3);
  }
}
