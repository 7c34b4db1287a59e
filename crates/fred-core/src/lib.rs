pub mod auth;
pub mod config;
pub mod endpoint;
pub mod error;

pub use auth::ApiKey;
pub use config::Config;
pub use endpoint::Endpoint;
pub use error::{Error, Result};

/// Base URL for the FRED API
pub const FRED_BASE_URL: &str = "https://api.stlouisfed.org/fred";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Delay in seconds between dependent calls sharing one API key.
/// FRED does not document a hard limit but throttles rapid sequential
/// requests from a single key.
pub const PACING_DELAY_SECS: u64 = 2;
