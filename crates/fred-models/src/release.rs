//! Models for `series/release` (release metadata) responses

use serde::{Deserialize, Serialize};

/// Response envelope for the `series/release` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleasesResponse {
  /// Start of the real-time period the request resolved against
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub realtime_start: Option<String>,

  /// End of the real-time period the request resolved against
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub realtime_end: Option<String>,

  /// The release metadata records
  pub releases: Vec<Release>,
}

/// Metadata about one release
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
  /// Release identifier
  pub id: i64,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub realtime_start: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub realtime_end: Option<String>,

  /// Release name, e.g. `Employment Situation`
  pub name: String,

  /// Whether the release has an associated press release
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub press_release: Option<bool>,

  /// Link to the publishing agency's page
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub link: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub notes: Option<String>,
}
