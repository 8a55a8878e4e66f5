//! Types for the derivatives endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{DisplayFromStr, PickFirst, serde_as};

use crate::error::CoinGeckoError;
use crate::rest::params::RawParams;
use crate::types::serde_helpers::{default_on_error, empty_string_as_none};
use crate::types::{IncludeTickers, Order};

/// Request parameters for derivative tickers.
///
/// `include_tickers` defaults to `unexpired`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DerivativesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_tickers: Option<IncludeTickers>,
}

impl DerivativesRequest {
    /// Create a request with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose which tickers to include.
    pub fn include_tickers(mut self, include_tickers: IncludeTickers) -> Self {
        self.include_tickers = Some(include_tickers);
        self
    }

    pub(crate) fn normalized(&self) -> Self {
        Self {
            include_tickers: Some(self.include_tickers.unwrap_or_default()),
        }
    }
}

impl TryFrom<Value> for DerivativesRequest {
    type Error = CoinGeckoError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let raw = RawParams::try_from(value)?;
        Ok(Self {
            include_tickers: raw
                .parsed::<IncludeTickers>("include_tickers", "`all` or `unexpired`")
                .ok()
                .flatten(),
        })
    }
}

/// Request parameters for derivative exchanges.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DerivativeExchangesRequest {
    /// One of the `name_*`, `open_interest_btc_*` or `trade_volume_24h_btc_*`
    /// orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl DerivativeExchangesRequest {
    /// Create a request with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sort order.
    pub fn order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    /// Set the number of results per page.
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Set the page number.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}

impl TryFrom<Value> for DerivativeExchangesRequest {
    type Error = CoinGeckoError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let raw = RawParams::try_from(value)?;
        Ok(Self {
            order: raw.parsed("order", "a sort order")?,
            per_page: raw.number("per_page")?,
            page: raw.number("page")?,
        })
    }
}

/// Request parameters for one derivative exchange.
///
/// Tickers are left out unless `include_tickers` is set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DerivativeExchangeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_tickers: Option<IncludeTickers>,
}

impl DerivativeExchangeRequest {
    /// Create a request without tickers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Include tickers.
    pub fn include_tickers(mut self, include_tickers: IncludeTickers) -> Self {
        self.include_tickers = Some(include_tickers);
        self
    }
}

impl TryFrom<Value> for DerivativeExchangeRequest {
    type Error = CoinGeckoError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let raw = RawParams::try_from(value)?;
        Ok(Self {
            include_tickers: raw.parsed("include_tickers", "`all` or `unexpired`")?,
        })
    }
}

/// A derivative contract on one market.
#[derive(Debug, Clone, Deserialize)]
pub struct Derivative {
    /// Exchange name.
    pub market: String,
    pub symbol: String,
    #[serde(default)]
    pub index_id: Option<String>,
    /// Last price, sent as a decimal string.
    #[serde(default, deserialize_with = "default_on_error::deserialize")]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub price_percentage_change_24h: Option<f64>,
    /// `perpetual` or `futures`.
    pub contract_type: String,
    #[serde(default)]
    pub index: Option<f64>,
    #[serde(default)]
    pub basis: Option<f64>,
    #[serde(default)]
    pub spread: Option<f64>,
    #[serde(default)]
    pub funding_rate: Option<f64>,
    #[serde(default)]
    pub open_interest: Option<f64>,
    #[serde(default)]
    pub volume_24h: Option<f64>,
    /// Unix seconds.
    #[serde(default)]
    pub last_traded_at: Option<i64>,
    /// Unix seconds, `None` for perpetuals.
    #[serde(default)]
    pub expired_at: Option<i64>,
}

/// A derivative exchange.
///
/// Volumes come back as numbers or numeric strings.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct DerivativeExchange {
    pub name: String,
    /// Absent on the single-exchange endpoint.
    #[serde(default)]
    pub id: Option<String>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub open_interest_btc: Option<f64>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub trade_volume_24h_btc: Option<f64>,
    #[serde(default)]
    pub number_of_perpetual_pairs: Option<u32>,
    #[serde(default)]
    pub number_of_futures_pairs: Option<u32>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "default_on_error::deserialize")]
    pub year_established: Option<u32>,
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Present with `include_tickers`.
    #[serde(default)]
    pub tickers: Vec<DerivativeTicker>,
}

/// A contract listed on a derivative exchange.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct DerivativeTicker {
    pub symbol: String,
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub contract_type: Option<String>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub last: Option<f64>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub h24_percentage_change: Option<f64>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub index: Option<f64>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub funding_rate: Option<f64>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub open_interest_usd: Option<f64>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub h24_volume: Option<f64>,
    #[serde(default)]
    pub last_traded: Option<i64>,
    #[serde(default)]
    pub expired_at: Option<i64>,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use serde_json::json;

    use super::*;

    #[test]
    fn test_derivatives_request_default() {
        let request = DerivativesRequest::new().normalized();
        assert_eq!(
            serde_urlencoded::to_string(&request).unwrap(),
            "include_tickers=unexpired"
        );
        let request = DerivativesRequest::try_from(json!({"include_tickers": "all"}))
            .unwrap()
            .normalized();
        assert_eq!(request.include_tickers, Some(IncludeTickers::All));
        let request = DerivativesRequest::try_from(json!({"include_tickers": false}))
            .unwrap()
            .normalized();
        assert_eq!(request.include_tickers, Some(IncludeTickers::Unexpired));
    }

    #[test]
    fn test_derivative_exchange_request_omits_tickers() {
        assert_eq!(
            serde_urlencoded::to_string(DerivativeExchangeRequest::new()).unwrap(),
            ""
        );
        let request = DerivativeExchangeRequest::new().include_tickers(IncludeTickers::All);
        assert_eq!(
            serde_urlencoded::to_string(&request).unwrap(),
            "include_tickers=all"
        );
    }

    #[test]
    fn test_derivative_exchange_request_from_raw() {
        let request = DerivativeExchangeRequest::try_from(json!({"include_tickers": "unexpired"}))
            .unwrap();
        assert_eq!(request.include_tickers, Some(IncludeTickers::Unexpired));
        let request = DerivativeExchangeRequest::try_from(json!({})).unwrap();
        assert!(request.include_tickers.is_none());
        assert!(DerivativeExchangeRequest::try_from(json!({"include_tickers": 1})).is_err());
        assert!(DerivativeExchangeRequest::try_from(json!("all")).is_err());
    }

    #[test]
    fn test_derivative_parsing() {
        let derivatives: Vec<Derivative> = serde_json::from_value(json!([{
            "market": "Deepcoin (Derivatives)",
            "symbol": "ETHUSDT",
            "index_id": "ETH",
            "price": "3395.91",
            "price_percentage_change_24h": 1.5274,
            "contract_type": "perpetual",
            "index": 3393.5342,
            "basis": -0.0523,
            "spread": 0.01,
            "funding_rate": -0.007182,
            "open_interest": 9327998764.66,
            "volume_24h": 392642535.23,
            "last_traded_at": 1712467658,
            "expired_at": null
        }]))
        .unwrap();
        assert_eq!(derivatives[0].price, Some(Decimal::from_str("3395.91").unwrap()));
        assert!(derivatives[0].expired_at.is_none());
    }

    #[test]
    fn test_derivative_exchange_mixed_number_formats() {
        let exchange: DerivativeExchange = serde_json::from_value(json!({
            "name": "Binance (Futures)",
            "id": "binance_futures",
            "open_interest_btc": 279958.61,
            "trade_volume_24h_btc": "574366.94",
            "number_of_perpetual_pairs": 330,
            "number_of_futures_pairs": 44,
            "year_established": 2019,
            "country": null,
            "description": ""
        }))
        .unwrap();
        assert_eq!(exchange.open_interest_btc, Some(279958.61));
        assert_eq!(exchange.trade_volume_24h_btc, Some(574366.94));
        assert!(exchange.country.is_none());
        assert!(exchange.tickers.is_empty());
    }
}
