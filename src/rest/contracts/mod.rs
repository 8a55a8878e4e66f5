//! Asset platform and token contract endpoints.
//!
//! Token lookups take the asset platform id (`ethereum`, `polygon-pos`, ...)
//! and the token's contract address. The address is sent as a single path
//! segment, so characters such as `/` or `?` are escaped, never interpreted.

mod types;

pub use types::*;

use crate::error::CoinGeckoError;
use crate::rest::CoinGeckoClient;
use crate::rest::coins::{CoinDetail, MarketChartRangeRequest, MarketChartRequest};
use crate::rest::endpoints::{EndpointPath, contracts};
use crate::types::{Days, MarketChart};

/// Asset platform and token contract endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ContractsEndpoints<'a> {
    client: &'a CoinGeckoClient,
}

impl CoinGeckoClient {
    /// Get the asset platform and token contract endpoints.
    pub fn contracts(&self) -> ContractsEndpoints<'_> {
        ContractsEndpoints { client: self }
    }
}

fn contract_path(template: &'static str, id: &str, contract_address: &str) -> EndpointPath {
    EndpointPath::new(template)
        .arg("id", id)
        .arg("contract_address", contract_address)
}

impl ContractsEndpoints<'_> {
    /// List every asset platform.
    pub async fn asset_platforms(&self) -> Result<Vec<AssetPlatform>, CoinGeckoError> {
        self.client
            .get(EndpointPath::new(contracts::ASSET_PLATFORMS))
            .await
    }

    /// Get coin data for a token contract.
    ///
    /// # Arguments
    ///
    /// * `id` - Asset platform id, e.g. `ethereum`.
    /// * `contract_address` - Token contract address.
    pub async fn contract(
        &self,
        id: &str,
        contract_address: &str,
    ) -> Result<CoinDetail, CoinGeckoError> {
        self.client
            .get(contract_path(contracts::CONTRACT, id, contract_address))
            .await
    }

    /// Get price, market cap and volume series for a token contract.
    ///
    /// `days` defaults to `max`.
    pub async fn market_chart(
        &self,
        id: &str,
        contract_address: &str,
        request: &MarketChartRequest,
    ) -> Result<MarketChart, CoinGeckoError> {
        let request = request.normalized(Days::Max);
        let path = contract_path(contracts::MARKET_CHART, id, contract_address);
        self.client.get_with_params(path, &request).await
    }

    /// Get price, market cap and volume series for a token contract between
    /// two Unix timestamps.
    pub async fn market_chart_range(
        &self,
        id: &str,
        contract_address: &str,
        request: &MarketChartRangeRequest,
    ) -> Result<MarketChart, CoinGeckoError> {
        let request = request.normalized()?;
        let path = contract_path(contracts::MARKET_CHART_RANGE, id, contract_address);
        self.client.get_with_params(path, &request).await
    }
}
