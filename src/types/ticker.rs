//! Spot market tickers, shared by the coin and exchange endpoints.

use std::collections::HashMap;

use serde::Deserialize;

use crate::types::serde_helpers::empty_string_as_none;

/// One trading pair on one market.
#[derive(Debug, Clone, Deserialize)]
pub struct Ticker {
    /// Base asset symbol.
    pub base: String,
    /// Quote asset symbol.
    pub target: String,
    pub market: TickerMarket,
    /// Last price in the quote asset.
    #[serde(default)]
    pub last: Option<f64>,
    /// 24h volume in the base asset.
    #[serde(default)]
    pub volume: Option<f64>,
    /// Last price converted to `btc`, `eth` and `usd`.
    #[serde(default)]
    pub converted_last: HashMap<String, f64>,
    /// 24h volume converted to `btc`, `eth` and `usd`.
    #[serde(default)]
    pub converted_volume: HashMap<String, f64>,
    /// `green`, `yellow` or `red`.
    #[serde(default)]
    pub trust_score: Option<String>,
    #[serde(default)]
    pub bid_ask_spread_percentage: Option<f64>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub last_traded_at: Option<String>,
    #[serde(default)]
    pub last_fetch_at: Option<String>,
    #[serde(default)]
    pub is_anomaly: bool,
    #[serde(default)]
    pub is_stale: bool,
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub trade_url: Option<String>,
    #[serde(default)]
    pub coin_id: Option<String>,
    #[serde(default)]
    pub target_coin_id: Option<String>,
    /// Cost to move the price up 2%, only with `depth=true`.
    #[serde(default)]
    pub cost_to_move_up_usd: Option<f64>,
    /// Cost to move the price down 2%, only with `depth=true`.
    #[serde(default)]
    pub cost_to_move_down_usd: Option<f64>,
}

impl Ticker {
    /// Trading pair as `BASE/TARGET`.
    pub fn pair(&self) -> String {
        format!("{}/{}", self.base, self.target)
    }
}

/// Market a ticker trades on.
#[derive(Debug, Clone, Deserialize)]
pub struct TickerMarket {
    pub name: String,
    /// Exchange id.
    pub identifier: String,
    #[serde(default)]
    pub has_trading_incentive: bool,
    /// Present with `include_exchange_logo=true`.
    #[serde(default)]
    pub logo: Option<String>,
}
