//! Derivatives endpoints.

mod types;

pub use types::*;

use crate::error::CoinGeckoError;
use crate::rest::CoinGeckoClient;
use crate::rest::endpoints::{EndpointPath, derivatives};
use crate::types::NameId;

/// Derivatives endpoints.
#[derive(Debug, Clone, Copy)]
pub struct DerivativesEndpoints<'a> {
    client: &'a CoinGeckoClient,
}

impl CoinGeckoClient {
    /// Get the derivatives endpoints.
    pub fn derivatives(&self) -> DerivativesEndpoints<'_> {
        DerivativesEndpoints { client: self }
    }
}

impl DerivativesEndpoints<'_> {
    /// List derivative tickers.
    pub async fn all(&self, request: &DerivativesRequest) -> Result<Vec<Derivative>, CoinGeckoError> {
        let request = request.normalized();
        self.client
            .get_with_params(EndpointPath::new(derivatives::ALL), &request)
            .await
    }

    /// List derivative exchanges with open interest and volume.
    pub async fn exchanges(
        &self,
        request: &DerivativeExchangesRequest,
    ) -> Result<Vec<DerivativeExchange>, CoinGeckoError> {
        self.client
            .get_with_params(EndpointPath::new(derivatives::EXCHANGES), request)
            .await
    }

    /// List every derivative exchange id and name.
    pub async fn exchanges_list(&self) -> Result<Vec<NameId>, CoinGeckoError> {
        self.client
            .get(EndpointPath::new(derivatives::EXCHANGES_LIST))
            .await
    }

    /// Get one derivative exchange.
    ///
    /// # Arguments
    ///
    /// * `id` - Derivative exchange id, e.g. `binance_futures`.
    pub async fn exchange(
        &self,
        id: &str,
        request: &DerivativeExchangeRequest,
    ) -> Result<DerivativeExchange, CoinGeckoError> {
        let path = EndpointPath::new(derivatives::EXCHANGE).arg("id", id);
        self.client.get_with_params(path, request).await
    }
}
