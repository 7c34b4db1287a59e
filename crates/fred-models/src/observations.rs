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

//! Models for `series/observations` responses

use std::num::ParseFloatError;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Response envelope for the `series/observations` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationsResponse {
  /// Start of the real-time period the request resolved against
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub realtime_start: Option<String>,

  /// End of the real-time period the request resolved against
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub realtime_end: Option<String>,

  /// First observation date covered
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub observation_start: Option<String>,

  /// Last observation date covered
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub observation_end: Option<String>,

  /// Units label for the series values
  pub units: String,

  /// Total observations matching the request
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub count: Option<u64>,

  /// Paging offset
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub offset: Option<u64>,

  /// Paging limit
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub limit: Option<u64>,

  /// The observation records
  pub observations: Vec<RawObservation>,
}

/// One dated data point, as FRED sends it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawObservation {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub realtime_start: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub realtime_end: Option<String>,

  /// Observation date as an ISO `YYYY-MM-DD` string
  pub date: String,

  /// Observation value as a numeric string
  pub value: String,
}

impl RawObservation {
  /// Parse the observation date.
  pub fn date(&self) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
  }

  /// Parse the observation value.
  ///
  /// FRED encodes missing data points as `"."`, which fails here.
  pub fn value_as_f64(&self) -> Result<f64, ParseFloatError> {
    self.value.parse()
  }
}

/// A typed observation record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
  /// Observation date
  pub date: NaiveDate,

  /// Observation value
  pub value: f64,
}
