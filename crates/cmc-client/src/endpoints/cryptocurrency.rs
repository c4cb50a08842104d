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

//! Cryptocurrency endpoints (`/cryptocurrency/*`)
//!
//! Operations keyed by a coin accept `id` or `symbol`, either as a single value or a
//! list (`Params::new().with("id", [1, 1027])`).

use super::{impl_endpoint_base, EndpointBase};
use crate::params::Params;
use crate::response::ApiResult;
use crate::transport::Transport;
use cmc_core::{Endpoint, Result};
use std::sync::Arc;
use tracing::instrument;

/// Cryptocurrency endpoints
pub struct CryptocurrencyEndpoints {
  transport: Arc<Transport>,
}

impl CryptocurrencyEndpoints {
  /// Static metadata for one or more cryptocurrencies: name, symbol, logo, urls.
  ///
  /// Also known as `metadata`. At least one `id` or `symbol` is required. The
  /// provider's id-keyed map is returned as a list in provider order.
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use cmc_client::{CoinMarketProClient, Config, Params};
  /// # async fn run() -> cmc_client::Result<()> {
  /// let client = CoinMarketProClient::new(Config::from_env()?)?;
  /// let result = client.cryptocurrency().info(Params::new().with("symbol", ["BTC", "ETH"])).await?;
  /// if result.is_success() {
  ///     println!("{} coins", result.body().as_array().map_or(0, Vec::len));
  /// }
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip_all)]
  pub async fn info(&self, params: Params) -> Result<ApiResult> {
    self.fetch(Endpoint::CryptocurrencyInfo, params).await
  }

  /// Paginated list of all cryptocurrencies by CoinMarketCap id.
  ///
  /// Optional: `listing_status`, `start`, `limit`, `symbol`.
  #[instrument(skip_all)]
  pub async fn map(&self, params: Params) -> Result<ApiResult> {
    self.fetch(Endpoint::CryptocurrencyMap, params).await
  }

  /// All cryptocurrencies with latest market data. Also known as `listings_latest`.
  ///
  /// Optional: `start`, `limit`, `convert`, `sort`, `sort_dir`, `cryptocurrency_type`.
  #[instrument(skip_all)]
  pub async fn listings(&self, params: Params) -> Result<ApiResult> {
    self.fetch(Endpoint::CryptocurrencyListings, params).await
  }

  /// All cryptocurrencies with market data at a historical `timestamp`
  #[instrument(skip_all)]
  pub async fn listings_historical(&self, params: Params) -> Result<ApiResult> {
    self.fetch(Endpoint::CryptocurrencyListingsHistorical, params).await
  }

  /// Active market pairs for a cryptocurrency. Requires `id` or `symbol`.
  #[instrument(skip_all)]
  pub async fn market_pairs(&self, params: Params) -> Result<ApiResult> {
    self.fetch(Endpoint::CryptocurrencyMarketPairs, params).await
  }

  /// Latest OHLCV values for the current UTC day. Also known as `ohlcv_latest`.
  ///
  /// Requires `id` or `symbol`.
  #[instrument(skip_all)]
  pub async fn ohlcv(&self, params: Params) -> Result<ApiResult> {
    self.fetch(Endpoint::CryptocurrencyOhlcv, params).await
  }

  /// Historic OHLCV over `time_start`..`time_end`, sampled by `interval`.
  ///
  /// Requires `id` or `symbol`.
  #[instrument(skip_all)]
  pub async fn ohlcv_historical(&self, params: Params) -> Result<ApiResult> {
    self.fetch(Endpoint::CryptocurrencyOhlcvHistorical, params).await
  }

  /// Latest market quotes. Also known as `market_quotes` and `quotes_latest`.
  ///
  /// Requires `id` or `symbol`.
  #[instrument(skip_all)]
  pub async fn quotes(&self, params: Params) -> Result<ApiResult> {
    self.fetch(Endpoint::CryptocurrencyQuotes, params).await
  }

  /// Historic market quotes by time and interval. Also known as
  /// `market_quotes_historical`.
  ///
  /// Requires `id` or `symbol`.
  #[instrument(skip_all)]
  pub async fn quotes_historical(&self, params: Params) -> Result<ApiResult> {
    self.fetch(Endpoint::CryptocurrencyQuotesHistorical, params).await
  }
}

impl_endpoint_base!(CryptocurrencyEndpoints);
