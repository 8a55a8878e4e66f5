//! Types for the exchange endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoinGeckoError;
use crate::rest::general::StatusUpdate;
use crate::rest::params::RawParams;
use crate::types::serde_helpers::{default_on_error, empty_string_as_none};
use crate::types::{Days, IdList, Order, Ticker};

/// Request parameters for exchange tickers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExchangeTickersRequest {
    /// Restrict to these coin ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coin_ids: Option<IdList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_exchange_logo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Include 2% order book depth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<bool>,
    /// `trust_score_desc` upstream when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
}

impl ExchangeTickersRequest {
    /// Create an unfiltered request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to these coin ids.
    pub fn coin_ids(mut self, coin_ids: impl Into<IdList>) -> Self {
        self.coin_ids = Some(coin_ids.into());
        self
    }

    /// Include exchange logos.
    pub fn include_exchange_logo(mut self, include: bool) -> Self {
        self.include_exchange_logo = Some(include);
        self
    }

    /// Set the page number.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Include 2% order book depth.
    pub fn depth(mut self, depth: bool) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Set the sort order.
    pub fn order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }
}

impl TryFrom<Value> for ExchangeTickersRequest {
    type Error = CoinGeckoError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let raw = RawParams::try_from(value)?;
        Ok(Self {
            coin_ids: raw.list("coin_ids")?,
            include_exchange_logo: raw.flag("include_exchange_logo")?,
            page: raw.number("page")?,
            depth: raw.flag("depth")?,
            order: raw.parsed("order", "a sort order")?,
        })
    }
}

/// Request parameters for an exchange volume chart.
///
/// `days` defaults to 1.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VolumeChartRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<Days>,
}

impl VolumeChartRequest {
    /// Create a request with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the look-back window.
    pub fn days(mut self, days: impl Into<Days>) -> Self {
        self.days = Some(days.into());
        self
    }

    pub(crate) fn normalized(&self) -> Self {
        Self {
            days: Some(self.days.unwrap_or_default()),
        }
    }
}

impl TryFrom<Value> for VolumeChartRequest {
    type Error = CoinGeckoError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let raw = RawParams::try_from(value)?;
        Ok(Self {
            days: raw.days("days"),
        })
    }
}

/// An exchange with its trading volume.
#[derive(Debug, Clone, Deserialize)]
pub struct Exchange {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "default_on_error::deserialize")]
    pub year_established: Option<u32>,
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub has_trading_incentive: Option<bool>,
    /// Trust score from 1 to 10.
    #[serde(default)]
    pub trust_score: Option<u32>,
    #[serde(default)]
    pub trust_score_rank: Option<u32>,
    #[serde(default)]
    pub trade_volume_24h_btc: Option<f64>,
    #[serde(default)]
    pub trade_volume_24h_btc_normalized: Option<f64>,
}

/// Exchange data with its top tickers and latest status updates.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeDetail {
    pub name: String,
    #[serde(default, deserialize_with = "default_on_error::deserialize")]
    pub year_established: Option<u32>,
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub centralized: Option<bool>,
    #[serde(default)]
    pub has_trading_incentive: Option<bool>,
    #[serde(default)]
    pub trust_score: Option<u32>,
    #[serde(default)]
    pub trust_score_rank: Option<u32>,
    #[serde(default)]
    pub trade_volume_24h_btc: Option<f64>,
    #[serde(default)]
    pub trade_volume_24h_btc_normalized: Option<f64>,
    /// Top 100 tickers.
    #[serde(default)]
    pub tickers: Vec<Ticker>,
    #[serde(default)]
    pub status_updates: Vec<StatusUpdate>,
}

/// Tickers of one exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeTickers {
    pub name: String,
    #[serde(default)]
    pub tickers: Vec<Ticker>,
}
