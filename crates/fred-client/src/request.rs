//! Request descriptors for single FRED endpoint calls

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use fred_core::{ApiKey, Endpoint, Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::instrument;

use crate::transport::Transport;

/// Response formats FRED can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileType {
  /// JSON body, the only format [`FredRequest::send`] can parse
  #[default]
  Json,

  /// XML body, retrieved unparsed via [`FredRequest::send_raw`]
  Xml,
}

impl fmt::Display for FileType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      FileType::Json => f.write_str("json"),
      FileType::Xml => f.write_str("xml"),
    }
  }
}

impl FromStr for FileType {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "json" => Ok(FileType::Json),
      "xml" => Ok(FileType::Xml),
      other => Err(Error::InvalidFileType(other.to_string())),
    }
  }
}

/// Capability surface shared by government data API requests.
///
/// One concrete implementation exists ([`FredRequest`]); the trait
/// keeps the seam explicit for further providers.
pub trait GovDataApi {
  /// Base URL of the upstream service
  fn base_url(&self) -> &str;

  /// Compose the full request URL
  fn build_url(&self) -> String;

  /// Execute the request and return the parsed body
  async fn get_data(&self) -> Result<Value>;
}

/// A validated, immutable descriptor for one FRED endpoint call.
///
/// Construction validates every parameter key against the endpoint
/// schema, so a `FredRequest` that exists is fully valid; there is no
/// partially-valid state. Executing it never mutates the descriptor.
#[derive(Debug, Clone)]
pub struct FredRequest {
  transport: Arc<Transport>,
  api_key: ApiKey,
  endpoint: Endpoint,
  params: Vec<(String, String)>,
  file_type: FileType,
  timeout: Duration,
}

impl FredRequest {
  /// Create a request descriptor.
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidParameter`] naming the first parameter
  /// key (in input order) the endpoint does not accept.
  pub fn new(
    transport: Arc<Transport>,
    api_key: ApiKey,
    endpoint: Endpoint,
    params: Vec<(String, String)>,
    file_type: FileType,
    timeout_secs: u64,
  ) -> Result<Self> {
    for (key, _) in &params {
      if !endpoint.permits(key) {
        return Err(Error::InvalidParameter { endpoint: endpoint.as_path(), name: key.clone() });
      }
    }

    Ok(Self {
      transport,
      api_key,
      endpoint,
      params,
      file_type,
      timeout: Duration::from_secs(timeout_secs),
    })
  }

  /// The endpoint this request targets
  pub fn endpoint(&self) -> Endpoint {
    self.endpoint
  }

  /// The validated query parameters, in caller order
  pub fn params(&self) -> &[(String, String)] {
    &self.params
  }

  /// The response format
  pub fn file_type(&self) -> FileType {
    self.file_type
  }

  /// The per-request timeout
  pub fn timeout(&self) -> Duration {
    self.timeout
  }

  /// Execute the request and deserialize the JSON body.
  #[instrument(skip(self), fields(endpoint = %self.endpoint))]
  pub async fn send<T: DeserializeOwned>(&self) -> Result<T> {
    let body = self.transport.get(&self.build_url(), self.timeout).await?;
    Ok(serde_json::from_str(&body)?)
  }

  /// Execute the request and return the body unparsed.
  ///
  /// The escape hatch for [`FileType::Xml`] requests.
  #[instrument(skip(self), fields(endpoint = %self.endpoint))]
  pub async fn send_raw(&self) -> Result<String> {
    self.transport.get(&self.build_url(), self.timeout).await
  }
}

impl GovDataApi for FredRequest {
  fn base_url(&self) -> &str {
    self.transport.base_url()
  }

  /// Literal composition: `{base}/{endpoint}?api_key={key}&file_type={ft}`
  /// followed by `&{key}={value}` per parameter, in caller order.
  ///
  /// Values are not URL-encoded; that is what the upstream expects
  /// today, so values containing `&`, `=`, or spaces must not be
  /// passed.
  fn build_url(&self) -> String {
    let mut url = format!(
      "{}/{}?api_key={}&file_type={}",
      self.base_url(),
      self.endpoint.as_path(),
      self.api_key.expose(),
      self.file_type
    );
    for (key, value) in &self.params {
      url.push('&');
      url.push_str(key);
      url.push('=');
      url.push_str(value);
    }
    url
  }

  async fn get_data(&self) -> Result<Value> {
    self.send().await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use fred_core::FRED_BASE_URL;

  fn test_request(endpoint: Endpoint, params: Vec<(String, String)>) -> Result<FredRequest> {
    let transport = Arc::new(Transport::new(FRED_BASE_URL).unwrap());
    let api_key = ApiKey::new("test_API_key").unwrap();
    FredRequest::new(transport, api_key, endpoint, params, FileType::default(), 5)
  }

  fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
  }

  #[test]
  fn test_category_request() {
    let request = test_request(Endpoint::Category, params(&[("category_id", "125")])).unwrap();
    assert_eq!(request.endpoint(), Endpoint::Category);
    assert_eq!(request.params(), &[("category_id".to_string(), "125".to_string())]);
    assert_eq!(request.file_type(), FileType::Json);
    assert_eq!(request.timeout(), Duration::from_secs(5));
  }

  #[test]
  fn test_build_url() {
    let request = test_request(Endpoint::Category, params(&[("category_id", "125")])).unwrap();
    assert_eq!(
      request.build_url(),
      "https://api.stlouisfed.org/fred/category?api_key=test_API_key&file_type=json&category_id=125"
    );
  }

  #[test]
  fn test_build_url_preserves_param_order() {
    let request = test_request(
      Endpoint::SeriesObservations,
      params(&[
        ("series_id", "UNRATE"),
        ("observation_start", "2020-01-01"),
        ("observation_end", "2020-12-31"),
      ]),
    )
    .unwrap();
    assert_eq!(
      request.build_url(),
      "https://api.stlouisfed.org/fred/series/observations?api_key=test_API_key&file_type=json\
       &series_id=UNRATE&observation_start=2020-01-01&observation_end=2020-12-31"
    );
  }

  #[test]
  fn test_invalid_parameter_rejected() {
    let err = test_request(Endpoint::Category, params(&[("series_id", "UNRATE")])).unwrap_err();
    match err {
      Error::InvalidParameter { endpoint, name } => {
        assert_eq!(endpoint, "category");
        assert_eq!(name, "series_id");
      }
      other => panic!("expected InvalidParameter, got {other:?}"),
    }
  }

  #[test]
  fn test_first_offending_parameter_reported() {
    let err = test_request(
      Endpoint::Category,
      params(&[("category_id", "125"), ("bogus_one", "1"), ("bogus_two", "2")]),
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { ref name, .. } if name == "bogus_one"));
  }

  #[test]
  fn test_file_type_round_trip() {
    assert_eq!("json".parse::<FileType>().unwrap(), FileType::Json);
    assert_eq!("xml".parse::<FileType>().unwrap(), FileType::Xml);
    assert_eq!(FileType::Json.to_string(), "json");
    assert_eq!(FileType::Xml.to_string(), "xml");
  }

  #[test]
  fn test_unsupported_file_type() {
    let err = "csv".parse::<FileType>().unwrap_err();
    assert!(matches!(err, Error::InvalidFileType(ref ft) if ft == "csv"));
  }

  #[test]
  fn test_xml_file_type_in_url() {
    let transport = Arc::new(Transport::new(FRED_BASE_URL).unwrap());
    let api_key = ApiKey::new("test_API_key").unwrap();
    let request = FredRequest::new(
      transport,
      api_key,
      Endpoint::Releases,
      Vec::new(),
      FileType::Xml,
      5,
    )
    .unwrap();
    assert_eq!(
      request.build_url(),
      "https://api.stlouisfed.org/fred/releases?api_key=test_API_key&file_type=xml"
    );
  }
}
