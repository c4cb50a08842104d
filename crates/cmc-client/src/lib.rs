//! # cmc-client
//!
//! A CoinMarketCap Pro (v1) API client for Rust.
//!
//! ## Features
//!
//! - **Uniform results**: every received response becomes an [`ApiResult`] with
//!   `status`, `code`, `headers` and `body`, successful or not
//! - **Parameter normalization**: lists are comma-joined, strings trimmed, blanks dropped
//! - **Early validation**: missing identifying parameters fail before any request
//! - **Consistent shapes**: keyed maps and single objects are returned as lists
//!   where the provider is inconsistent
//! - **Configurable**: Environment-based configuration via cmc-core
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cmc_client::{CoinMarketProClient, Config, Params};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = CoinMarketProClient::new(config)?;
//!
//!     let result = client.cryptocurrency().quotes(Params::new().with("symbol", ["BTC", "ETH"])).await?;
//!     if result.is_success() {
//!         println!("{}", result.body());
//!     } else {
//!         println!("HTTP {}: {:?}", result.code(), result.status().error_message());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Methods return `Result<ApiResult, cmc_core::Error>`. `Err` is reserved for problems
//! where no response could be read: rejected parameters (`InvalidArgument`), timeouts
//! (`Timeout`), other transport failures (`Http`) and bodies that are not JSON
//! (`ResponseParse`). A 4xx/5xx from the provider is an `Ok` whose `is_failure()` is true.
//!
//! ## Logging
//!
//! Requests are traced with `tracing`. Nothing is printed unless the application installs
//! a subscriber.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod params;
pub mod response;
pub mod transport;

// Re-export the main client and common types
pub use client::CoinMarketProClient;
pub use cmc_core::{Config, Endpoint, Error, Identity, Reshape, Result, TimeoutKind};
pub use params::{ParamValue, Params};
pub use response::{ApiResult, Outcome, ResponseStatus};

// Re-export endpoint modules for direct access if needed
pub use endpoints::{
  cryptocurrency::CryptocurrencyEndpoints, exchange::ExchangeEndpoints,
  global_metrics::GlobalMetricsEndpoints, tools::ToolsEndpoints, EndpointBase,
};
