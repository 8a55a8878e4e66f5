//! Exchange endpoints.

mod types;

pub use types::*;

use crate::error::CoinGeckoError;
use crate::rest::CoinGeckoClient;
use crate::rest::endpoints::{EndpointPath, exchanges};
use crate::rest::general::StatusUpdates;
use crate::types::{NameId, Pagination, VolumePoint};

/// Exchange endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ExchangesEndpoints<'a> {
    client: &'a CoinGeckoClient,
}

impl CoinGeckoClient {
    /// Get the exchange endpoints.
    pub fn exchanges(&self) -> ExchangesEndpoints<'_> {
        ExchangesEndpoints { client: self }
    }
}

impl ExchangesEndpoints<'_> {
    /// List exchanges with trading volumes.
    ///
    /// `per_page` defaults to 100 and `page` to 1.
    pub async fn all(&self, request: &Pagination) -> Result<Vec<Exchange>, CoinGeckoError> {
        let request = request.or_defaults(100, 1);
        self.client
            .get_with_params(EndpointPath::new(exchanges::ALL), &request)
            .await
    }

    /// List every exchange id and name.
    pub async fn list(&self) -> Result<Vec<NameId>, CoinGeckoError> {
        self.client.get(EndpointPath::new(exchanges::LIST)).await
    }

    /// Get volume, top tickers and status updates for an exchange.
    ///
    /// # Arguments
    ///
    /// * `id` - Exchange id, e.g. `binance`.
    pub async fn exchange(&self, id: &str) -> Result<ExchangeDetail, CoinGeckoError> {
        self.client
            .get(EndpointPath::new(exchanges::EXCHANGE).arg("id", id))
            .await
    }

    /// Get the tickers of an exchange, paginated to 100 items.
    pub async fn tickers(
        &self,
        id: &str,
        request: &ExchangeTickersRequest,
    ) -> Result<ExchangeTickers, CoinGeckoError> {
        let path = EndpointPath::new(exchanges::TICKERS).arg("id", id);
        self.client.get_with_params(path, request).await
    }

    /// List status updates posted by an exchange.
    pub async fn status_updates(
        &self,
        id: &str,
        request: &Pagination,
    ) -> Result<StatusUpdates, CoinGeckoError> {
        let path = EndpointPath::new(exchanges::STATUS_UPDATES).arg("id", id);
        self.client.get_with_params(path, request).await
    }

    /// Get the BTC volume series of an exchange.
    pub async fn volume_chart(
        &self,
        id: &str,
        request: &VolumeChartRequest,
    ) -> Result<Vec<VolumePoint>, CoinGeckoError> {
        let request = request.normalized();
        let path = EndpointPath::new(exchanges::VOLUME_CHART).arg("id", id);
        self.client.get_with_params(path, &request).await
    }
}
