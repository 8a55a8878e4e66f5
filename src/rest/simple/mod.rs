//! Simple price endpoints.

mod types;

pub use types::*;

use crate::error::CoinGeckoError;
use crate::rest::CoinGeckoClient;
use crate::rest::endpoints::{EndpointPath, simple};

/// Simple price endpoints.
#[derive(Debug, Clone, Copy)]
pub struct SimpleEndpoints<'a> {
    client: &'a CoinGeckoClient,
}

impl CoinGeckoClient {
    /// Get the simple price endpoints.
    pub fn simple(&self) -> SimpleEndpoints<'_> {
        SimpleEndpoints { client: self }
    }
}

impl SimpleEndpoints<'_> {
    /// Get the current price of one or more coins.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coingecko_api_client::rest::CoinGeckoClient;
    /// use coingecko_api_client::rest::simple::SimplePriceRequest;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CoinGeckoClient::new();
    ///     let request = SimplePriceRequest::new(["bitcoin", "ethereum"]);
    ///     let prices = client.simple().price(&request).await?;
    ///     println!("BTC: {:?}", prices.get("bitcoin", "usd"));
    ///     Ok(())
    /// }
    /// ```
    pub async fn price(&self, request: &SimplePriceRequest) -> Result<SimplePrices, CoinGeckoError> {
        let request = request.normalized()?;
        self.client
            .get_with_params(EndpointPath::new(simple::PRICE), &request)
            .await
    }

    /// Get the current price of tokens by contract address.
    ///
    /// The response is keyed by contract address.
    pub async fn token_price(
        &self,
        request: &TokenPriceRequest,
    ) -> Result<SimplePrices, CoinGeckoError> {
        let request = request.normalized()?;
        let platform = request.asset_platform.clone().unwrap_or_default();
        let path = EndpointPath::new(simple::TOKEN_PRICE).arg("asset_platform", platform);
        self.client.get_with_params(path, &request).await
    }

    /// List the supported quote currencies.
    pub async fn supported_vs_currencies(&self) -> Result<Vec<String>, CoinGeckoError> {
        self.client
            .get(EndpointPath::new(simple::SUPPORTED_VS_CURRENCIES))
            .await
    }
}
