//! CoinGecko REST API endpoint constants.
//!
//! Paths are templates relative to `/api/v3`. A `{name}` segment is a
//! placeholder bound through [`EndpointPath::arg`].

use std::time::Duration;

use crate::error::{CoinGeckoError, ValidationError};

/// Base URL for the CoinGecko REST API.
pub const COINGECKO_BASE_URL: &str = "https://api.coingecko.com";

/// API version spliced into every URL as `/api/v{API_VERSION}`.
pub const API_VERSION: &str = "3";

/// Bounded wait applied to every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Published request budget of the free tier. Not enforced by this client.
pub const REQUESTS_PER_SECOND: u32 = 10;

/// Server status and global market data.
pub mod general {
    /// Check API server status.
    pub const PING: &str = "/ping";
    /// Global cryptocurrency market data.
    pub const GLOBAL: &str = "/global";
    /// Global decentralized finance data.
    pub const GLOBAL_DEFI: &str = "/global/decentralized_finance_defi";
    /// Status updates across all projects.
    pub const STATUS_UPDATES: &str = "/status_updates";
    /// BTC-relative exchange rates.
    pub const EXCHANGE_RATES: &str = "/exchange_rates";
    /// Trending searches.
    pub const TRENDING: &str = "/search/trending";
    /// Public companies holding a coin.
    pub const PUBLIC_TREASURY: &str = "/companies/public_treasury/{coin_id}";
}

/// Simple price lookups.
pub mod simple {
    /// Prices by coin id.
    pub const PRICE: &str = "/simple/price";
    /// Prices by token contract address.
    pub const TOKEN_PRICE: &str = "/simple/token_price/{asset_platform}";
    /// Supported quote currencies.
    pub const SUPPORTED_VS_CURRENCIES: &str = "/simple/supported_vs_currencies";
}

/// Coin data.
pub mod coins {
    /// All coins with data.
    pub const ALL: &str = "/coins";
    /// Coin ids, names and symbols.
    pub const LIST: &str = "/coins/list";
    /// Coin market data.
    pub const MARKETS: &str = "/coins/markets";
    /// Current data for one coin.
    pub const COIN: &str = "/coins/{id}";
    /// Tickers for one coin.
    pub const TICKERS: &str = "/coins/{id}/tickers";
    /// Historical snapshot for one coin.
    pub const HISTORY: &str = "/coins/{id}/history";
    /// Market chart for one coin.
    pub const MARKET_CHART: &str = "/coins/{id}/market_chart";
    /// Market chart within a time range.
    pub const MARKET_CHART_RANGE: &str = "/coins/{id}/market_chart/range";
    /// Status updates for one coin.
    pub const STATUS_UPDATES: &str = "/coins/{id}/status_updates";
    /// OHLC candles for one coin.
    pub const OHLC: &str = "/coins/{id}/ohlc";
}

/// Asset platforms and token contracts.
pub mod contracts {
    /// Supported asset platforms.
    pub const ASSET_PLATFORMS: &str = "/asset_platforms";
    /// Coin data by token contract.
    pub const CONTRACT: &str = "/coins/{id}/contract/{contract_address}";
    /// Market chart by token contract.
    pub const MARKET_CHART: &str = "/coins/{id}/contract/{contract_address}/market_chart";
    /// Market chart by token contract within a time range.
    pub const MARKET_CHART_RANGE: &str =
        "/coins/{id}/contract/{contract_address}/market_chart/range";
}

/// Coin categories.
pub mod categories {
    /// Category ids and names.
    pub const LIST: &str = "/coins/categories/list";
    /// Categories with market data.
    pub const MARKETS: &str = "/coins/categories";
}

/// Exchanges.
pub mod exchanges {
    /// Exchanges with data.
    pub const ALL: &str = "/exchanges";
    /// Exchange ids and names.
    pub const LIST: &str = "/exchanges/list";
    /// One exchange.
    pub const EXCHANGE: &str = "/exchanges/{id}";
    /// Tickers for one exchange.
    pub const TICKERS: &str = "/exchanges/{id}/tickers";
    /// Status updates for one exchange.
    pub const STATUS_UPDATES: &str = "/exchanges/{id}/status_updates";
    /// BTC volume chart for one exchange.
    pub const VOLUME_CHART: &str = "/exchanges/{id}/volume_chart";
}

/// Finance platforms and products.
pub mod finance {
    /// Finance platforms.
    pub const PLATFORMS: &str = "/finance_platforms";
    /// Finance products.
    pub const PRODUCTS: &str = "/finance_products";
}

/// Market indexes.
pub mod indexes {
    /// Indexes with data.
    pub const ALL: &str = "/indexes";
    /// Index ids and names.
    pub const LIST: &str = "/indexes/list";
    /// One index of one market.
    pub const INDEX: &str = "/indexes/{market_id}/{id}";
}

/// Derivatives.
pub mod derivatives {
    /// Derivative tickers.
    pub const ALL: &str = "/derivatives";
    /// Derivative exchanges with data.
    pub const EXCHANGES: &str = "/derivatives/exchanges";
    /// Derivative exchange ids and names.
    pub const EXCHANGES_LIST: &str = "/derivatives/exchanges/list";
    /// One derivative exchange.
    pub const EXCHANGE: &str = "/derivatives/exchanges/{id}";
}

/// An endpoint path template together with the values bound to its placeholders.
///
/// ```rust
/// use coingecko_api_client::rest::{EndpointPath, endpoints::coins};
///
/// let path = EndpointPath::new(coins::MARKET_CHART).arg("id", "bitcoin");
/// assert_eq!(path.segments().unwrap(), ["coins", "bitcoin", "market_chart"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointPath {
    template: &'static str,
    args: Vec<(&'static str, String)>,
}

impl EndpointPath {
    /// Create a path from a template.
    pub fn new(template: &'static str) -> Self {
        Self {
            template,
            args: Vec::new(),
        }
    }

    /// Bind a value to the `{name}` placeholder.
    pub fn arg(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.args.push((name, value.into()));
        self
    }

    /// The unresolved template.
    pub fn template(&self) -> &'static str {
        self.template
    }

    /// Resolve the template into raw (not yet percent-encoded) path segments.
    ///
    /// Every placeholder must be bound to a non-empty value other than `.` or
    /// `..`, which URL normalization would collapse into a different route.
    pub fn segments(&self) -> Result<Vec<&str>, CoinGeckoError> {
        self.template
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| match placeholder_name(segment) {
                Some(name) => self.bound(name),
                None => Ok(segment),
            })
            .collect()
    }

    fn bound(&self, name: &'static str) -> Result<&str, CoinGeckoError> {
        let value = self
            .args
            .iter()
            .find(|(bound, _)| *bound == name)
            .map(|(_, value)| value.as_str());
        match value {
            None | Some("") => Err(ValidationError::new(name, "a non-empty path segment").into()),
            Some("." | "..") => {
                Err(ValidationError::new(name, "a path segment other than `.` or `..`").into())
            }
            Some(value) => Ok(value),
        }
    }
}

fn placeholder_name(segment: &str) -> Option<&str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_path_segments() {
        let path = EndpointPath::new(general::GLOBAL_DEFI);
        assert_eq!(
            path.segments().unwrap(),
            ["global", "decentralized_finance_defi"]
        );
    }

    #[test]
    fn test_placeholders_are_substituted() {
        let path = EndpointPath::new(contracts::MARKET_CHART_RANGE)
            .arg("id", "ethereum")
            .arg("contract_address", "0xabc");
        assert_eq!(
            path.segments().unwrap(),
            ["coins", "ethereum", "contract", "0xabc", "market_chart", "range"]
        );
    }

    #[test]
    fn test_unbound_placeholder_fails() {
        let path = EndpointPath::new(indexes::INDEX).arg("market_id", "binance");
        let err = path.segments().unwrap_err();
        match err {
            CoinGeckoError::Validation(inner) => assert_eq!(inner.field, "id"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_placeholder_fails() {
        let path = EndpointPath::new(coins::COIN).arg("id", "");
        assert!(path.segments().unwrap_err().is_validation());
    }

    #[test]
    fn test_dot_segments_fail() {
        let path = EndpointPath::new(indexes::INDEX)
            .arg("market_id", "..")
            .arg("id", "BTC");
        match path.segments().unwrap_err() {
            CoinGeckoError::Validation(inner) => assert_eq!(inner.field, "market_id"),
            other => panic!("unexpected error: {other:?}"),
        }

        let path = EndpointPath::new(contracts::CONTRACT)
            .arg("id", "ethereum")
            .arg("contract_address", "..");
        assert!(path.segments().unwrap_err().is_validation());

        let path = EndpointPath::new(coins::COIN).arg("id", ".");
        assert!(path.segments().unwrap_err().is_validation());

        let path = EndpointPath::new(coins::COIN).arg("id", "...");
        assert_eq!(path.segments().unwrap(), ["coins", "..."]);
    }

    #[test]
    fn test_default_timeout_is_thirty_seconds() {
        assert_eq!(DEFAULT_TIMEOUT.as_millis(), 30_000);
        assert_eq!(API_VERSION, "3");
    }
}
