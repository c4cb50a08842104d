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

//! The client aggregate handing out endpoint groups

use crate::endpoints::{
  cryptocurrency::CryptocurrencyEndpoints, exchange::ExchangeEndpoints,
  global_metrics::GlobalMetricsEndpoints, tools::ToolsEndpoints,
};

use crate::transport::Transport;
use cmc_core::{Config, Result};
use std::sync::Arc;

/// Main CoinMarketCap Pro API client
///
/// Provides access to the API through one endpoint group per resource. The groups
/// are stateless views over a shared transport, so handing them out is cheap and
/// the client can be cloned freely across tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use cmc_client::{CoinMarketProClient, Config, Params};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CoinMarketProClient::new(Config::from_env()?)?;
///
///     let listings = client.cryptocurrency().listings(Params::new().with("limit", 10)).await?;
///     if listings.is_failure() {
///         eprintln!("provider said: {:?}", listings.status().error_message());
///     }
///
///     let global = client.global_metrics().quotes(Params::new()).await?;
///     println!("{}", global.body());
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CoinMarketProClient {
  transport: Arc<Transport>,
}

impl CoinMarketProClient {
  /// Create a new CoinMarketCap Pro API client
  ///
  /// # Arguments
  ///
  /// * `config` - Configuration containing API key, base URL and timeouts
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    let transport = Arc::new(Transport::new(&config)?);
    Ok(Self { transport })
  }

  /// Create a client from `COIN_MARKET_PRO_API_KEY` and the optional `CMC_*` variables
  pub fn from_env() -> Result<Self> {
    Self::new(Config::from_env()?)
  }

  /// Get access to cryptocurrency endpoints
  ///
  /// ```ignore
  /// let info = client.cryptocurrency().info(Params::new().with("id", [1, 1027])).await?;
  /// let pairs = client.cryptocurrency().market_pairs(Params::new().with("symbol", "BTC")).await?;
  /// ```
  pub fn cryptocurrency(&self) -> CryptocurrencyEndpoints {
    CryptocurrencyEndpoints::new(self.transport.clone())
  }

  /// Get access to exchange endpoints
  ///
  /// ```ignore
  /// let info = client.exchange().info(Params::new().with("slug", "binance")).await?;
  /// ```
  pub fn exchange(&self) -> ExchangeEndpoints {
    ExchangeEndpoints::new(self.transport.clone())
  }

  /// Get access to global metrics endpoints
  pub fn global_metrics(&self) -> GlobalMetricsEndpoints {
    GlobalMetricsEndpoints::new(self.transport.clone())
  }

  /// Get access to conversion tools
  pub fn tools(&self) -> ToolsEndpoints {
    ToolsEndpoints::new(self.transport.clone())
  }

  /// The shared transport, for calls outside the catalog
  pub fn transport(&self) -> &Arc<Transport> {
    &self.transport
  }

  /// Base URL requests are sent to
  pub fn base_url(&self) -> &str {
    self.transport.base_url()
  }
}

impl std::fmt::Debug for CoinMarketProClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CoinMarketProClient").field("transport", &self.transport).finish()
  }
}
