//! Server-wide endpoints: status, global market data, exchange rates,
//! trending searches and public treasuries.

mod types;

pub use types::*;

use crate::error::CoinGeckoError;
use crate::rest::CoinGeckoClient;
use crate::rest::endpoints::{EndpointPath, general};

impl CoinGeckoClient {
    /// Check API server status.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coingecko_api_client::rest::CoinGeckoClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CoinGeckoClient::new();
    ///     let pong = client.ping().await?;
    ///     println!("{}", pong.gecko_says);
    ///     Ok(())
    /// }
    /// ```
    pub async fn ping(&self) -> Result<Ping, CoinGeckoError> {
        self.get(EndpointPath::new(general::PING)).await
    }

    /// Get global cryptocurrency market data.
    pub async fn global(&self) -> Result<Global, CoinGeckoError> {
        self.get(EndpointPath::new(general::GLOBAL)).await
    }

    /// Get global decentralized finance data.
    pub async fn global_defi(&self) -> Result<GlobalDefi, CoinGeckoError> {
        self.get(EndpointPath::new(general::GLOBAL_DEFI)).await
    }

    /// List status updates across all coins and markets.
    ///
    /// Ordering is left to CoinGecko.
    pub async fn status_updates(
        &self,
        request: &StatusUpdatesRequest,
    ) -> Result<StatusUpdates, CoinGeckoError> {
        self.get_with_params(EndpointPath::new(general::STATUS_UPDATES), request)
            .await
    }

    /// Get BTC-relative exchange rates for every supported currency.
    pub async fn exchange_rates(&self) -> Result<ExchangeRates, CoinGeckoError> {
        self.get(EndpointPath::new(general::EXCHANGE_RATES)).await
    }

    /// Get the coins most searched in the last 24 hours.
    pub async fn trending(&self) -> Result<Trending, CoinGeckoError> {
        self.get(EndpointPath::new(general::TRENDING)).await
    }

    /// Get public companies' holdings of a coin, ordered by total holdings.
    ///
    /// # Arguments
    ///
    /// * `coin_id` - `bitcoin` or `ethereum`.
    pub async fn public_treasury(&self, coin_id: &str) -> Result<PublicTreasury, CoinGeckoError> {
        self.get(EndpointPath::new(general::PUBLIC_TREASURY).arg("coin_id", coin_id))
            .await
    }
}
