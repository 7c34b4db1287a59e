//! Models for `series` (series metadata) responses

use serde::{Deserialize, Serialize};

/// Response envelope for the `series` endpoint.
///
/// The envelope key is `seriess`, not `series` — FRED's plural of
/// "series".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesResponse {
  /// Start of the real-time period the request resolved against
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub realtime_start: Option<String>,

  /// End of the real-time period the request resolved against
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub realtime_end: Option<String>,

  /// The series metadata records
  pub seriess: Vec<SeriesInfo>,
}

/// Metadata about one series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesInfo {
  /// Series identifier, e.g. `UNRATE`
  pub id: String,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub realtime_start: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub realtime_end: Option<String>,

  /// Human-readable series title
  pub title: String,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub observation_start: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub observation_end: Option<String>,

  /// Publication frequency, e.g. `Monthly`
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub frequency: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub frequency_short: Option<String>,

  /// Units label, e.g. `Percent`
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub units: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub units_short: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub seasonal_adjustment: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub seasonal_adjustment_short: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub last_updated: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub popularity: Option<i64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  const SERIES_JSON: &str = r#"{
    "realtime_start": "2025-06-02",
    "realtime_end": "2025-06-02",
    "seriess": [
      {
        "id": "UNRATE",
        "realtime_start": "2025-06-02",
        "realtime_end": "2025-06-02",
        "title": "Unemployment Rate",
        "observation_start": "1948-01-01",
        "observation_end": "2025-05-01",
        "frequency": "Monthly",
        "frequency_short": "M",
        "units": "Percent",
        "units_short": "%",
        "seasonal_adjustment": "Seasonally Adjusted",
        "seasonal_adjustment_short": "SA",
        "last_updated": "2025-06-01 07:44:03-05",
        "popularity": 94,
        "notes": "The unemployment rate represents the number of unemployed as a percentage of the labor force."
      }
    ]
  }"#;

  #[test]
  fn test_deserialize_series() {
    let response: SeriesResponse = serde_json::from_str(SERIES_JSON).unwrap();
    assert_eq!(response.seriess.len(), 1);
    let info = &response.seriess[0];
    assert_eq!(info.id, "UNRATE");
    assert_eq!(info.title, "Unemployment Rate");
    assert_eq!(info.frequency.as_deref(), Some("Monthly"));
    assert_eq!(info.popularity, Some(94));
  }
}
