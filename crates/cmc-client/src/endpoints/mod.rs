//! Endpoint groups, one per provider resource

pub mod cryptocurrency;
pub mod exchange;
pub mod global_metrics;
pub mod tools;

use crate::params::Params;
use crate::response::ApiResult;
use crate::transport::Transport;
use cmc_core::{Endpoint, Result};
use std::sync::Arc;

/// Base trait for endpoint implementations
///
/// Provides common functionality needed by all endpoint modules
pub trait EndpointBase {
  /// Get a reference to the transport layer
  fn transport(&self) -> &Arc<Transport>;

  /// Run a catalog operation: validate, normalize, send, reshape
  async fn fetch(&self, endpoint: Endpoint, params: Params) -> Result<ApiResult> {
    self.transport().execute(endpoint, params).await
  }
}

/// Macro to implement the EndpointBase trait for endpoint structs
macro_rules! impl_endpoint_base {
  ($struct_name:ident) => {
    impl EndpointBase for $struct_name {
      fn transport(&self) -> &Arc<Transport> {
        &self.transport
      }
    }

    impl $struct_name {
      /// Create a new endpoint group over a shared transport
      pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
      }
    }
  };
}

pub(crate) use impl_endpoint_base;
