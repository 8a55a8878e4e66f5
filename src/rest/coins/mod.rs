//! Coin endpoints: listings, market data, charts and history.

mod types;

pub use types::*;

use crate::error::CoinGeckoError;
use crate::rest::CoinGeckoClient;
use crate::rest::endpoints::{EndpointPath, coins};
use crate::rest::general::StatusUpdates;
use crate::types::{Days, MarketChart, OhlcCandle, Pagination};

/// Coin endpoints.
#[derive(Debug, Clone, Copy)]
pub struct CoinsEndpoints<'a> {
    client: &'a CoinGeckoClient,
}

impl CoinGeckoClient {
    /// Get the coin endpoints.
    pub fn coins(&self) -> CoinsEndpoints<'_> {
        CoinsEndpoints { client: self }
    }
}

impl CoinsEndpoints<'_> {
    /// List all coins with price, market cap, volume and market related data.
    pub async fn all(&self, request: &AllCoinsRequest) -> Result<Vec<CoinDetail>, CoinGeckoError> {
        self.client
            .get_with_params(EndpointPath::new(coins::ALL), request)
            .await
    }

    /// List every supported coin with its id, name, symbol and contract
    /// addresses.
    pub async fn list(&self) -> Result<Vec<CoinListItem>, CoinGeckoError> {
        let request = CoinsListRequest {
            include_platform: true,
        };
        self.client
            .get_with_params(EndpointPath::new(coins::LIST), &request)
            .await
    }

    /// List coin prices, market caps and volumes in one quote currency.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coingecko_api_client::rest::CoinGeckoClient;
    /// use coingecko_api_client::rest::coins::MarketsRequest;
    /// use coingecko_api_client::types::Order;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CoinGeckoClient::new();
    ///     let request = MarketsRequest::new().order(Order::MarketCapDesc).per_page(10);
    ///     for coin in client.coins().markets(&request).await? {
    ///         println!("{}: {:?}", coin.name, coin.current_price);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn markets(&self, request: &MarketsRequest) -> Result<Vec<CoinMarket>, CoinGeckoError> {
        let request = request.normalized();
        self.client
            .get_with_params(EndpointPath::new(coins::MARKETS), &request)
            .await
    }

    /// Get current data for a coin.
    ///
    /// # Arguments
    ///
    /// * `id` - Coin id, e.g. `bitcoin`.
    pub async fn coin(&self, id: &str, request: &CoinRequest) -> Result<CoinDetail, CoinGeckoError> {
        let path = EndpointPath::new(coins::COIN).arg("id", id);
        self.client.get_with_params(path, request).await
    }

    /// Get the tickers of a coin, paginated to 100 items.
    pub async fn tickers(
        &self,
        id: &str,
        request: &TickersRequest,
    ) -> Result<CoinTickers, CoinGeckoError> {
        let path = EndpointPath::new(coins::TICKERS).arg("id", id);
        self.client.get_with_params(path, request).await
    }

    /// Get a snapshot of a coin at a past date (00:00 UTC).
    pub async fn history(
        &self,
        id: &str,
        request: &HistoryRequest,
    ) -> Result<CoinHistory, CoinGeckoError> {
        let request = request.normalized()?;
        let path = EndpointPath::new(coins::HISTORY).arg("id", id);
        self.client.get_with_params(path, &request).await
    }

    /// Get price, market cap and volume series for a coin.
    ///
    /// `days` defaults to 1.
    pub async fn market_chart(
        &self,
        id: &str,
        request: &MarketChartRequest,
    ) -> Result<MarketChart, CoinGeckoError> {
        let request = request.normalized(Days::Count(1));
        let path = EndpointPath::new(coins::MARKET_CHART).arg("id", id);
        self.client.get_with_params(path, &request).await
    }

    /// Get price, market cap and volume series for a coin between two Unix
    /// timestamps.
    pub async fn market_chart_range(
        &self,
        id: &str,
        request: &MarketChartRangeRequest,
    ) -> Result<MarketChart, CoinGeckoError> {
        let request = request.normalized()?;
        let path = EndpointPath::new(coins::MARKET_CHART_RANGE).arg("id", id);
        self.client.get_with_params(path, &request).await
    }

    /// List status updates posted by a coin.
    pub async fn status_updates(
        &self,
        id: &str,
        request: &Pagination,
    ) -> Result<StatusUpdates, CoinGeckoError> {
        let path = EndpointPath::new(coins::STATUS_UPDATES).arg("id", id);
        self.client.get_with_params(path, request).await
    }

    /// Get OHLC candles for a coin.
    pub async fn ohlc(
        &self,
        id: &str,
        request: &OhlcRequest,
    ) -> Result<Vec<OhlcCandle>, CoinGeckoError> {
        let request = request.normalized();
        let path = EndpointPath::new(coins::OHLC).arg("id", id);
        self.client.get_with_params(path, &request).await
    }
}
