//! # fred-client
//!
//! A typed Rust client for the FRED (Federal Reserve Economic Data)
//! REST API.
//!
//! ## Features
//!
//! - **Schema-validated**: endpoint names and query parameters are
//!   checked against the FRED catalogue at construction time, never at
//!   request time
//! - **Composite series fetches**: one call pulls observations plus
//!   optional series and release metadata, paced to stay under FRED's
//!   throttling
//! - **Type safe**: strongly typed responses via fred-models
//! - **Configurable**: environment-based configuration via fred-core
//! - **Async/Await**: built on tokio and reqwest
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fred_client::{Endpoint, FredClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FredClient::from_env()?;
//!
//!     // Any catalogued endpoint
//!     let request = client.request(
//!         Endpoint::Category,
//!         vec![("category_id".to_string(), "125".to_string())],
//!     )?;
//!     let body = request.send::<serde_json::Value>().await?;
//!     println!("{body}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pacing
//!
//! The composite series client waits a fixed two seconds before each
//! optional metadata call; FRED throttles rapid sequential requests
//! from a single key.
//!
//! ## Error Handling
//!
//! All methods return `Result<T, fred_core::Error>`. Validation
//! failures surface at construction; a constructed request cannot be
//! invalid.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod presets;
pub mod request;
pub mod series;
pub mod transport;

// Re-export the main client and common types
pub use client::FredClient;
pub use fred_core::{ApiKey, Config, Endpoint, Error, Result};
pub use fred_models::*;
pub use presets::SeriesPreset;
pub use request::{FileType, FredRequest, GovDataApi};
pub use series::{SeriesClient, SeriesData, SeriesOptions};
pub use transport::Transport;
