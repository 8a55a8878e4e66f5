//! Types for the server-wide endpoints.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoinGeckoError;
use crate::rest::params::RawParams;
use crate::types::serde_helpers::empty_string_as_none;
use crate::types::{Image, ProjectType, StatusUpdateCategory};

/// Server status.
#[derive(Debug, Clone, Deserialize)]
pub struct Ping {
    /// Status text, e.g. `(V3) To the Moon!`
    pub gecko_says: String,
}

/// Global market data wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct Global {
    pub data: GlobalData,
}

/// Global cryptocurrency market data.
#[derive(Debug, Clone, Deserialize)]
pub struct GlobalData {
    /// Number of active cryptocurrencies.
    pub active_cryptocurrencies: u64,
    #[serde(default)]
    pub upcoming_icos: u64,
    #[serde(default)]
    pub ongoing_icos: u64,
    #[serde(default)]
    pub ended_icos: u64,
    /// Number of tracked markets.
    pub markets: u64,
    /// Total market cap keyed by currency.
    pub total_market_cap: HashMap<String, f64>,
    /// Total 24h volume keyed by currency.
    pub total_volume: HashMap<String, f64>,
    /// Market cap dominance keyed by coin symbol.
    pub market_cap_percentage: HashMap<String, f64>,
    /// 24h market cap change in USD, percent.
    pub market_cap_change_percentage_24h_usd: f64,
    /// Unix timestamp in seconds.
    pub updated_at: i64,
}

impl GlobalData {
    /// Total market cap in one currency.
    pub fn total_market_cap_in(&self, currency: &str) -> Option<f64> {
        self.total_market_cap.get(currency).copied()
    }

    /// Market cap dominance of one coin, by symbol.
    pub fn dominance_of(&self, symbol: &str) -> Option<f64> {
        self.market_cap_percentage.get(symbol).copied()
    }
}

/// Global DeFi data wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct GlobalDefi {
    pub data: GlobalDefiData,
}

/// Decentralized finance market data.
///
/// Amounts are sent as decimal strings.
#[derive(Debug, Clone, Deserialize)]
pub struct GlobalDefiData {
    /// DeFi market cap in USD.
    pub defi_market_cap: Decimal,
    /// Ethereum market cap in USD.
    pub eth_market_cap: Decimal,
    /// DeFi to ETH market cap ratio, percent.
    pub defi_to_eth_ratio: Decimal,
    /// 24h DeFi trading volume in USD.
    pub trading_volume_24h: Decimal,
    /// DeFi share of the whole market, percent.
    pub defi_dominance: Decimal,
    /// Largest DeFi coin.
    pub top_coin_name: String,
    /// Dominance of the largest DeFi coin, percent.
    pub top_coin_defi_dominance: f64,
}

/// Request parameters for status updates.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatusUpdatesRequest {
    /// Filter by category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<StatusUpdateCategory>,
    /// Filter by project type. Both coins and markets when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<ProjectType>,
    /// Results per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl StatusUpdatesRequest {
    /// Create an unfiltered request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category.
    pub fn category(mut self, category: StatusUpdateCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Filter by project type.
    pub fn project_type(mut self, project_type: ProjectType) -> Self {
        self.project_type = Some(project_type);
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

impl TryFrom<Value> for StatusUpdatesRequest {
    type Error = CoinGeckoError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let raw = RawParams::try_from(value)?;
        Ok(Self {
            category: raw.parsed("category", "a status update category")?,
            project_type: raw.parsed("project_type", "`coin` or `market`")?,
            per_page: raw.number("per_page")?,
            page: raw.number("page")?,
        })
    }
}

/// A page of status updates.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusUpdates {
    #[serde(default)]
    pub status_updates: Vec<StatusUpdate>,
}

/// A single status update posted by a project.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusUpdate {
    pub description: String,
    pub category: String,
    /// ISO 8601 creation time.
    pub created_at: String,
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub user: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub user_title: Option<String>,
    #[serde(default)]
    pub pin: bool,
    pub project: StatusUpdateProject,
}

/// The coin or market that posted a status update.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusUpdateProject {
    /// `Coin` or `Market`.
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub image: Image,
}

/// BTC-relative exchange rates.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeRates {
    /// Rates keyed by currency code.
    pub rates: HashMap<String, ExchangeRate>,
}

/// Value of one BTC in a currency.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeRate {
    pub name: String,
    pub unit: String,
    pub value: f64,
    /// `crypto`, `fiat` or `commodity`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Trending searches of the last 24 hours.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Trending {
    #[serde(default)]
    pub coins: Vec<TrendingCoin>,
    #[serde(default)]
    pub exchanges: Vec<Value>,
}

/// Wrapper around a trending coin.
#[derive(Debug, Clone, Deserialize)]
pub struct TrendingCoin {
    pub item: TrendingCoinItem,
}

/// A trending coin.
#[derive(Debug, Clone, Deserialize)]
pub struct TrendingCoinItem {
    pub id: String,
    pub coin_id: u64,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    /// Price in BTC.
    #[serde(default)]
    pub price_btc: Option<f64>,
    /// Position in the trending list, starting at 0.
    pub score: u32,
}

/// Public companies holding a coin.
#[derive(Debug, Clone, Deserialize)]
pub struct PublicTreasury {
    pub total_holdings: f64,
    pub total_value_usd: f64,
    pub market_cap_dominance: f64,
    #[serde(default)]
    pub companies: Vec<TreasuryCompany>,
}

/// One company's holdings.
#[derive(Debug, Clone, Deserialize)]
pub struct TreasuryCompany {
    pub name: String,
    pub symbol: String,
    pub country: String,
    pub total_holdings: f64,
    pub total_entry_value_usd: f64,
    pub total_current_value_usd: f64,
    pub percentage_of_total_supply: f64,
}
