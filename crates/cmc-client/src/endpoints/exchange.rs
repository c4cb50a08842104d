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

//! Exchange endpoints (`/exchange/*`)

use super::{impl_endpoint_base, EndpointBase};
use crate::params::Params;
use crate::response::ApiResult;
use crate::transport::Transport;
use cmc_core::{Endpoint, Result};
use std::sync::Arc;
use tracing::instrument;

/// Exchange endpoints
pub struct ExchangeEndpoints {
  transport: Arc<Transport>,
}

impl ExchangeEndpoints {
  /// Static metadata for one or more exchanges: logo, homepage, urls.
  ///
  /// Also known as `metadata`. At least one `id` or `slug` is required; the
  /// id-keyed map comes back as a list.
  #[instrument(skip_all)]
  pub async fn info(&self, params: Params) -> Result<ApiResult> {
    self.fetch(Endpoint::ExchangeInfo, params).await
  }

  /// Paginated list of all exchanges by CoinMarketCap id.
  ///
  /// Optional: `listing_status`, `start`, `limit`, `slug`.
  #[instrument(skip_all)]
  pub async fn map(&self, params: Params) -> Result<ApiResult> {
    self.fetch(Endpoint::ExchangeMap, params).await
  }

  /// All exchanges with 24 hour volume. Also known as `listings_latest`.
  ///
  /// Optional: `start`, `limit`, `convert`, `sort`, `sort_dir`, `market_type`.
  #[instrument(skip_all)]
  pub async fn listings(&self, params: Params) -> Result<ApiResult> {
    self.fetch(Endpoint::ExchangeListings, params).await
  }

  /// All exchanges with market data at a historical `timestamp`
  #[instrument(skip_all)]
  pub async fn listings_historical(&self, params: Params) -> Result<ApiResult> {
    self.fetch(Endpoint::ExchangeListingsHistorical, params).await
  }

  /// Active market pairs for an exchange, as a one-element list.
  ///
  /// Requires `id` or `slug`.
  #[instrument(skip_all)]
  pub async fn market_pairs(&self, params: Params) -> Result<ApiResult> {
    self.fetch(Endpoint::ExchangeMarketPairs, params).await
  }

  /// Latest aggregate quotes for one or more exchanges, as a list.
  ///
  /// Also known as `market_quotes` and `quotes_latest`. Requires `id` or `slug`.
  #[instrument(skip_all)]
  pub async fn quotes(&self, params: Params) -> Result<ApiResult> {
    self.fetch(Endpoint::ExchangeQuotes, params).await
  }

  /// Historic quotes for an exchange, as a one-element list.
  ///
  /// Also known as `market_quotes_historical`. Requires `id` or `slug`.
  #[instrument(skip_all)]
  pub async fn quotes_historical(&self, params: Params) -> Result<ApiResult> {
    self.fetch(Endpoint::ExchangeQuotesHistorical, params).await
  }
}

impl_endpoint_base!(ExchangeEndpoints);
