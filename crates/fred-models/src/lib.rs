//! # fred-models
//!
//! Serde data models for FRED API responses.
//!
//! Wire fields stay strings, the way FRED sends them; typed accessors
//! (`RawObservation::date`, `RawObservation::value_as_f64`) convert on
//! demand.

pub mod observations;
pub mod release;
pub mod series;

pub use observations::{Observation, ObservationsResponse, RawObservation};
pub use release::{Release, ReleasesResponse};
pub use series::{SeriesInfo, SeriesResponse};
