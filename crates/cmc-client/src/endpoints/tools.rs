//! Conversion tools (`/tools/*`)

use super::{impl_endpoint_base, EndpointBase};
use crate::params::Params;
use crate::response::ApiResult;
use crate::transport::Transport;
use cmc_core::{Endpoint, Result};
use std::sync::Arc;
use tracing::instrument;

/// Tools endpoints
pub struct ToolsEndpoints {
  transport: Arc<Transport>,
}

impl ToolsEndpoints {
  /// Convert an `amount` of one currency into up to 32 others using latest rates,
  /// or historic averages when `time` is given.
  ///
  /// `amount` is required and checked first, then `id` or `slug`. The conversion
  /// comes back as a one-element list.
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use cmc_client::{CoinMarketProClient, Config, Params};
  /// # async fn run() -> cmc_client::Result<()> {
  /// let client = CoinMarketProClient::new(Config::from_env()?)?;
  /// let params = Params::new().with("amount", 2.5).with("id", 1).with("convert", "EUR");
  /// let result = client.tools().price_conversion(params).await?;
  /// println!("{}", result.body());
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip_all)]
  pub async fn price_conversion(&self, params: Params) -> Result<ApiResult> {
    self.fetch(Endpoint::PriceConversion, params).await
  }
}

impl_endpoint_base!(ToolsEndpoints);
