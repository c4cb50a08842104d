//! Global aggregate market metrics (`/global-metrics/*`)

use super::{impl_endpoint_base, EndpointBase};
use crate::params::Params;
use crate::response::ApiResult;
use crate::transport::Transport;
use cmc_core::{Endpoint, Result};
use std::sync::Arc;
use tracing::instrument;

/// Global metrics endpoints
pub struct GlobalMetricsEndpoints {
  transport: Arc<Transport>,
}

impl GlobalMetricsEndpoints {
  /// Latest aggregate market metrics, as a one-element list.
  ///
  /// Also known as `market_quotes` and `quotes_latest`. Optional: `convert`.
  #[instrument(skip_all)]
  pub async fn quotes(&self, params: Params) -> Result<ApiResult> {
    self.fetch(Endpoint::GlobalMetricsQuotes, params).await
  }

  /// Historic aggregate volume and market cap. The body is the provider's `quotes`
  /// list only.
  ///
  /// Also known as `market_quotes_historical`. Optional: `time_start`, `time_end`,
  /// `count`, `interval`, `convert`.
  #[instrument(skip_all)]
  pub async fn quotes_historical(&self, params: Params) -> Result<ApiResult> {
    self.fetch(Endpoint::GlobalMetricsQuotesHistorical, params).await
  }
}

impl_endpoint_base!(GlobalMetricsEndpoints);
