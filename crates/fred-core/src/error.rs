use thiserror::Error;

/// The main error type for the fred-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Endpoint path not present in the FRED catalogue
  #[error("Invalid endpoint: {0}")]
  UnknownEndpoint(String),

  /// Parameter not accepted by the endpoint
  #[error("Invalid parameter for {endpoint}: {name}")]
  InvalidParameter {
    /// Endpoint path the parameter was rejected for
    endpoint: &'static str,
    /// The offending parameter name
    name: String,
  },

  /// Unsupported response file type
  #[error("Invalid file type: {0}")]
  InvalidFileType(String),

  /// API key environment variable not set
  #[error("Environment variable {0} not set")]
  MissingApiKey(String),

  /// API key resolved to an empty string
  #[error("API key must not be empty")]
  EmptyApiKey,

  /// Neither or both of a provider name and a literal key were supplied
  #[error("Exactly one of a provider name or a literal API key must be provided")]
  AmbiguousApiKey,

  /// Composite series request without a series id anywhere
  #[error("Series ID is required")]
  MissingSeriesId,

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Non-200 response from the API
  #[error("Request failed with status code: {status}: {reason}")]
  RequestFailed {
    /// Upstream HTTP status code
    status: u16,
    /// Reason text for the status
    reason: String,
  },

  /// HTTP transport error
  #[error("HTTP error: {0}")]
  Http(String),

  /// Serialization/Deserialization error
  #[error("Serialization error: {0}")]
  Serde(#[from] serde_json::Error),

  /// Date parsing error
  #[error("Date parsing error: {0}")]
  ParseDate(#[from] chrono::ParseError),

  /// Observation value that is not a number
  #[error("Non-numeric observation value: {0}")]
  ParseValue(String),
}

/// Result type alias for fred-* crates
pub type Result<T> = std::result::Result<T, Error>;
