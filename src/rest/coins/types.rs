//! Types for the coin endpoints.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::error::{CoinGeckoError, ValidationError};
use crate::rest::params::{self, RawParams};
use crate::rest::simple::DEFAULT_VS_CURRENCY;
use crate::types::serde_helpers::empty_string_as_none;
use crate::types::{Days, IdList, Image, Order, Ticker};

// ============================================================================
// Requests
// ============================================================================

/// Request parameters for all coins with market data.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AllCoinsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    /// Results per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Include localized names, `true` upstream when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localization: Option<bool>,
    /// Include 7 day sparkline, `false` upstream when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sparkline: Option<bool>,
}

impl AllCoinsRequest {
    /// Create an empty request.
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

    /// Same as [`per_page`](Self::per_page).
    pub fn limit(self, limit: u32) -> Self {
        self.per_page(limit)
    }

    /// Set the page number.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Include localized names.
    pub fn localization(mut self, localization: bool) -> Self {
        self.localization = Some(localization);
        self
    }

    /// Include the 7 day sparkline.
    pub fn sparkline(mut self, sparkline: bool) -> Self {
        self.sparkline = Some(sparkline);
        self
    }
}

impl TryFrom<Value> for AllCoinsRequest {
    type Error = CoinGeckoError;

    /// `limit` is read as `per_page` when `per_page` is absent.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let raw = RawParams::try_from(value)?;
        let per_page = match raw.number("per_page")? {
            Some(per_page) => Some(per_page),
            None => raw.number("limit")?,
        };
        Ok(Self {
            order: raw.parsed("order", "a sort order")?,
            per_page,
            page: raw.number("page")?,
            localization: raw.flag("localization")?,
            sparkline: raw.flag("sparkline")?,
        })
    }
}

/// Always sent by [`list`](super::CoinsEndpoints::list).
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CoinsListRequest {
    pub include_platform: bool,
}

/// Request parameters for coin market data.
///
/// `vs_currency` defaults to `usd`.
///
/// ```rust
/// use coingecko_api_client::rest::coins::MarketsRequest;
/// use coingecko_api_client::types::Order;
///
/// let request = MarketsRequest::new()
///     .ids(["bitcoin", "ethereum"])
///     .order(Order::MarketCapDesc)
///     .price_change_percentage(["1h", "24h", "7d"]);
/// assert_eq!(request.ids.unwrap().as_str(), "bitcoin,ethereum");
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct MarketsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vs_currency: Option<String>,
    /// Restrict to these coin ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<IdList>,
    /// Restrict to a category, see `/coins/categories/list`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sparkline: Option<bool>,
    /// Extra price change windows, e.g. `1h`, `24h`, `7d`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_change_percentage: Option<IdList>,
}

impl MarketsRequest {
    /// Create a request with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quote currency.
    pub fn vs_currency(mut self, vs_currency: impl Into<String>) -> Self {
        self.vs_currency = Some(vs_currency.into());
        self
    }

    /// Restrict to these coin ids.
    pub fn ids(mut self, ids: impl Into<IdList>) -> Self {
        self.ids = Some(ids.into());
        self
    }

    /// Restrict to a category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
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

    /// Include the 7 day sparkline.
    pub fn sparkline(mut self, sparkline: bool) -> Self {
        self.sparkline = Some(sparkline);
        self
    }

    /// Request extra price change windows.
    pub fn price_change_percentage(mut self, windows: impl Into<IdList>) -> Self {
        self.price_change_percentage = Some(windows.into());
        self
    }

    /// Fill defaults.
    pub(crate) fn normalized(&self) -> Self {
        Self {
            vs_currency: Some(params::string_or_default(
                self.vs_currency.as_deref(),
                DEFAULT_VS_CURRENCY,
            )),
            ..self.clone()
        }
    }
}

impl TryFrom<Value> for MarketsRequest {
    type Error = CoinGeckoError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let raw = RawParams::try_from(value)?;
        Ok(Self {
            vs_currency: Some(raw.string_or_default("vs_currency", DEFAULT_VS_CURRENCY)),
            ids: raw.list("ids")?,
            category: raw.string("category")?,
            order: raw.parsed("order", "a sort order")?,
            per_page: raw.number("per_page")?,
            page: raw.number("page")?,
            sparkline: raw.flag("sparkline")?,
            price_change_percentage: raw.list("price_change_percentage")?,
        })
    }
}

/// Request parameters for current coin data.
///
/// Every section is included upstream unless switched off, except the
/// sparkline.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CoinRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localization: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_data: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub community_data: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer_data: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sparkline: Option<bool>,
}

impl CoinRequest {
    /// Create a request with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Include localized names and descriptions.
    pub fn localization(mut self, include: bool) -> Self {
        self.localization = Some(include);
        self
    }

    /// Include tickers.
    pub fn tickers(mut self, include: bool) -> Self {
        self.tickers = Some(include);
        self
    }

    /// Include market data.
    pub fn market_data(mut self, include: bool) -> Self {
        self.market_data = Some(include);
        self
    }

    /// Include community data.
    pub fn community_data(mut self, include: bool) -> Self {
        self.community_data = Some(include);
        self
    }

    /// Include developer data.
    pub fn developer_data(mut self, include: bool) -> Self {
        self.developer_data = Some(include);
        self
    }

    /// Include the 7 day sparkline.
    pub fn sparkline(mut self, include: bool) -> Self {
        self.sparkline = Some(include);
        self
    }

    /// Only the identity and description sections.
    pub fn minimal() -> Self {
        Self::new()
            .localization(false)
            .tickers(false)
            .market_data(false)
            .community_data(false)
            .developer_data(false)
    }
}

impl TryFrom<Value> for CoinRequest {
    type Error = CoinGeckoError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let raw = RawParams::try_from(value)?;
        Ok(Self {
            localization: raw.flag("localization")?,
            tickers: raw.flag("tickers")?,
            market_data: raw.flag("market_data")?,
            community_data: raw.flag("community_data")?,
            developer_data: raw.flag("developer_data")?,
            sparkline: raw.flag("sparkline")?,
        })
    }
}

/// Request parameters for coin tickers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TickersRequest {
    /// Restrict to these exchanges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_ids: Option<IdList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_exchange_logo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// `trust_score_desc` upstream when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    /// Include 2% order book depth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<bool>,
}

impl TickersRequest {
    /// Create an unfiltered request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to these exchanges.
    pub fn exchange_ids(mut self, exchange_ids: impl Into<IdList>) -> Self {
        self.exchange_ids = Some(exchange_ids.into());
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

    /// Set the sort order.
    pub fn order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    /// Include 2% order book depth.
    pub fn depth(mut self, depth: bool) -> Self {
        self.depth = Some(depth);
        self
    }
}

impl TryFrom<Value> for TickersRequest {
    type Error = CoinGeckoError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let raw = RawParams::try_from(value)?;
        Ok(Self {
            exchange_ids: raw.list("exchange_ids")?,
            include_exchange_logo: raw.flag("include_exchange_logo")?,
            page: raw.number("page")?,
            order: raw.parsed("order", "a sort order")?,
            depth: raw.flag("depth")?,
        })
    }
}

/// Request parameters for a historical snapshot.
///
/// ```rust
/// use coingecko_api_client::rest::coins::HistoryRequest;
/// use time::macros::date;
///
/// let request = HistoryRequest::on(date!(2020 - 03 - 01));
/// assert_eq!(request.date, "01-03-2020");
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct HistoryRequest {
    /// Snapshot date as `dd-mm-yyyy`.
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localization: Option<bool>,
}

impl HistoryRequest {
    /// Create a request from a `dd-mm-yyyy` date string.
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            localization: None,
        }
    }

    /// Create a request for a calendar date.
    pub fn on(date: Date) -> Self {
        let date = date
            .format(format_description!("[day]-[month]-[year]"))
            .unwrap_or_default();
        Self::new(date)
    }

    /// Include localized names.
    pub fn localization(mut self, include: bool) -> Self {
        self.localization = Some(include);
        self
    }

    /// The snapshot date, if it is a valid `dd-mm-yyyy` date.
    pub fn parsed_date(&self) -> Option<Date> {
        Date::parse(&self.date, format_description!("[day]-[month]-[year]")).ok()
    }

    /// Validate the date.
    pub(crate) fn normalized(&self) -> Result<Self, CoinGeckoError> {
        params::require("date", &self.date)?;
        if self.parsed_date().is_none() {
            return Err(ValidationError::new("date", "a date formatted as dd-mm-yyyy").into());
        }
        Ok(self.clone())
    }
}

impl TryFrom<Value> for HistoryRequest {
    type Error = CoinGeckoError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let raw = RawParams::try_from(value)?;
        Ok(Self {
            date: raw.required_string("date")?,
            localization: raw.flag("localization")?,
        })
    }
}

/// Request parameters for a market chart.
///
/// `vs_currency` defaults to `usd`. The `days` default depends on the
/// endpoint: 1 for coins, `max` for token contracts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MarketChartRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vs_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<Days>,
    /// Data granularity, e.g. `daily`. Picked automatically when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
}

impl MarketChartRequest {
    /// Create a request with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quote currency.
    pub fn vs_currency(mut self, vs_currency: impl Into<String>) -> Self {
        self.vs_currency = Some(vs_currency.into());
        self
    }

    /// Set the look-back window.
    pub fn days(mut self, days: impl Into<Days>) -> Self {
        self.days = Some(days.into());
        self
    }

    /// Set the data granularity.
    pub fn interval(mut self, interval: impl Into<String>) -> Self {
        self.interval = Some(interval.into());
        self
    }

    /// Fill defaults.
    pub(crate) fn normalized(&self, default_days: Days) -> Self {
        Self {
            vs_currency: Some(params::string_or_default(
                self.vs_currency.as_deref(),
                DEFAULT_VS_CURRENCY,
            )),
            days: Some(self.days.unwrap_or(default_days)),
            interval: self.interval.clone().filter(|interval| !interval.is_empty()),
        }
    }
}

impl TryFrom<Value> for MarketChartRequest {
    type Error = CoinGeckoError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let raw = RawParams::try_from(value)?;
        Ok(Self {
            vs_currency: raw.lenient_string("vs_currency"),
            days: raw.days("days"),
            interval: raw.string("interval")?,
        })
    }
}

/// Request parameters for a market chart between two Unix timestamps.
///
/// The bounds are passed through as given. `vs_currency` defaults to `usd`.
///
/// ```rust
/// use coingecko_api_client::rest::coins::MarketChartRangeRequest;
/// use time::macros::datetime;
///
/// let request = MarketChartRangeRequest::between(
///     datetime!(2014-02-16 18:00:32 UTC),
///     datetime!(2015-01-30 00:20:32 UTC),
/// );
/// assert_eq!(request.from, "1392573632");
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct MarketChartRangeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vs_currency: Option<String>,
    /// Start, Unix seconds.
    pub from: String,
    /// End, Unix seconds.
    pub to: String,
}

impl MarketChartRangeRequest {
    /// Create a request from literal Unix timestamps.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            vs_currency: None,
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create a request between two instants.
    pub fn between(from: OffsetDateTime, to: OffsetDateTime) -> Self {
        Self::new(
            from.unix_timestamp().to_string(),
            to.unix_timestamp().to_string(),
        )
    }

    /// Set the quote currency.
    pub fn vs_currency(mut self, vs_currency: impl Into<String>) -> Self {
        self.vs_currency = Some(vs_currency.into());
        self
    }

    /// Fill defaults and validate the bounds.
    pub(crate) fn normalized(&self) -> Result<Self, CoinGeckoError> {
        Ok(Self {
            vs_currency: Some(params::string_or_default(
                self.vs_currency.as_deref(),
                DEFAULT_VS_CURRENCY,
            )),
            from: params::require("from", &self.from)?,
            to: params::require("to", &self.to)?,
        })
    }
}

impl TryFrom<Value> for MarketChartRangeRequest {
    type Error = CoinGeckoError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let raw = RawParams::try_from(value)?;
        Ok(Self {
            vs_currency: raw.lenient_string("vs_currency"),
            from: raw.required_opaque("from")?,
            to: raw.required_opaque("to")?,
        })
    }
}

/// Request parameters for OHLC candles.
///
/// `vs_currency` defaults to `usd`, `days` to 1.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OhlcRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vs_currency: Option<String>,
    /// One of 1, 7, 14, 30, 90, 180, 365 or `max`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<Days>,
}

impl OhlcRequest {
    /// Create a request with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quote currency.
    pub fn vs_currency(mut self, vs_currency: impl Into<String>) -> Self {
        self.vs_currency = Some(vs_currency.into());
        self
    }

    /// Set the look-back window.
    pub fn days(mut self, days: impl Into<Days>) -> Self {
        self.days = Some(days.into());
        self
    }

    /// Fill defaults.
    pub(crate) fn normalized(&self) -> Self {
        Self {
            vs_currency: Some(params::string_or_default(
                self.vs_currency.as_deref(),
                DEFAULT_VS_CURRENCY,
            )),
            days: Some(self.days.unwrap_or_default()),
        }
    }
}

impl TryFrom<Value> for OhlcRequest {
    type Error = CoinGeckoError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let raw = RawParams::try_from(value)?;
        Ok(Self {
            vs_currency: raw.lenient_string("vs_currency"),
            days: raw.days("days"),
        })
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Entry of `/coins/list`.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinListItem {
    pub id: String,
    pub symbol: String,
    pub name: String,
    /// Contract address keyed by asset platform id.
    #[serde(default)]
    pub platforms: HashMap<String, Option<String>>,
}

/// Market data for one coin in one quote currency.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinMarket {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub fully_diluted_valuation: Option<f64>,
    #[serde(default)]
    pub total_volume: Option<f64>,
    #[serde(default)]
    pub high_24h: Option<f64>,
    #[serde(default)]
    pub low_24h: Option<f64>,
    #[serde(default)]
    pub price_change_24h: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub market_cap_change_24h: Option<f64>,
    #[serde(default)]
    pub market_cap_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub circulating_supply: Option<f64>,
    #[serde(default)]
    pub total_supply: Option<f64>,
    #[serde(default)]
    pub max_supply: Option<f64>,
    #[serde(default)]
    pub ath: Option<f64>,
    #[serde(default)]
    pub ath_change_percentage: Option<f64>,
    #[serde(default)]
    pub ath_date: Option<String>,
    #[serde(default)]
    pub atl: Option<f64>,
    #[serde(default)]
    pub atl_change_percentage: Option<f64>,
    #[serde(default)]
    pub atl_date: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
    /// Present with `sparkline=true`.
    #[serde(default)]
    pub sparkline_in_7d: Option<Sparkline>,
    #[serde(default)]
    pub price_change_percentage_1h_in_currency: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h_in_currency: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_7d_in_currency: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_30d_in_currency: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_1y_in_currency: Option<f64>,
}

/// Seven days of hourly prices.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sparkline {
    #[serde(default)]
    pub price: Vec<f64>,
}

/// Current data for one coin.
///
/// Sections switched off in the request are left empty.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinDetail {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub asset_platform_id: Option<String>,
    /// Contract address keyed by asset platform id.
    #[serde(default)]
    pub platforms: HashMap<String, Option<String>>,
    #[serde(default)]
    pub block_time_in_minutes: Option<u32>,
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub hashing_algorithm: Option<String>,
    #[serde(default)]
    pub categories: Vec<Option<String>>,
    /// Localized names keyed by language code.
    #[serde(default)]
    pub localization: HashMap<String, String>,
    /// Descriptions keyed by language code.
    #[serde(default)]
    pub description: HashMap<String, String>,
    #[serde(default)]
    pub links: Option<Value>,
    #[serde(default)]
    pub image: Image,
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub country_origin: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub genesis_date: Option<String>,
    /// Set when looked up by token contract.
    #[serde(default)]
    pub contract_address: Option<String>,
    #[serde(default)]
    pub sentiment_votes_up_percentage: Option<f64>,
    #[serde(default)]
    pub sentiment_votes_down_percentage: Option<f64>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub market_data: Option<CoinMarketData>,
    #[serde(default)]
    pub community_data: Option<Value>,
    #[serde(default)]
    pub developer_data: Option<Value>,
    #[serde(default)]
    pub tickers: Vec<Ticker>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

impl CoinDetail {
    /// English description, if any.
    pub fn description_en(&self) -> Option<&str> {
        self.description
            .get("en")
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Current price in one currency.
    pub fn price_in(&self, currency: &str) -> Option<f64> {
        self.market_data.as_ref()?.current_price.get(currency).copied()
    }
}

/// Market data section of a coin. Maps are keyed by currency code.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoinMarketData {
    #[serde(default)]
    pub current_price: HashMap<String, f64>,
    #[serde(default)]
    pub ath: HashMap<String, f64>,
    #[serde(default)]
    pub ath_change_percentage: HashMap<String, f64>,
    #[serde(default)]
    pub atl: HashMap<String, f64>,
    #[serde(default)]
    pub atl_change_percentage: HashMap<String, f64>,
    #[serde(default)]
    pub market_cap: HashMap<String, f64>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub fully_diluted_valuation: HashMap<String, f64>,
    #[serde(default)]
    pub total_volume: HashMap<String, f64>,
    #[serde(default)]
    pub high_24h: HashMap<String, f64>,
    #[serde(default)]
    pub low_24h: HashMap<String, f64>,
    #[serde(default)]
    pub price_change_24h: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_7d: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_14d: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_30d: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_60d: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_200d: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_1y: Option<f64>,
    #[serde(default)]
    pub market_cap_change_24h: Option<f64>,
    #[serde(default)]
    pub market_cap_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub total_supply: Option<f64>,
    #[serde(default)]
    pub max_supply: Option<f64>,
    #[serde(default)]
    pub circulating_supply: Option<f64>,
    #[serde(default)]
    pub sparkline_7d: Option<Sparkline>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// Tickers of one coin.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinTickers {
    pub name: String,
    #[serde(default)]
    pub tickers: Vec<Ticker>,
}

/// Snapshot of one coin at a past date.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinHistory {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub localization: HashMap<String, String>,
    #[serde(default)]
    pub image: Image,
    /// Missing for dates before the coin was listed.
    #[serde(default)]
    pub market_data: Option<HistoryMarketData>,
    #[serde(default)]
    pub community_data: Option<Value>,
    #[serde(default)]
    pub developer_data: Option<Value>,
    #[serde(default)]
    pub public_interest_stats: Option<Value>,
}

/// Market data at a past date, keyed by currency code.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryMarketData {
    #[serde(default)]
    pub current_price: HashMap<String, f64>,
    #[serde(default)]
    pub market_cap: HashMap<String, f64>,
    #[serde(default)]
    pub total_volume: HashMap<String, f64>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::{date, datetime};

    use super::*;

    fn query<T: Serialize>(request: &T) -> String {
        serde_urlencoded::to_string(request).unwrap()
    }

    #[test]
    fn test_all_coins_limit_alias() {
        let request = AllCoinsRequest::try_from(json!({"limit": 50, "page": 2})).unwrap();
        assert_eq!(query(&request), "per_page=50&page=2");
        assert_eq!(query(&AllCoinsRequest::new().limit(50)), "per_page=50");
        let request = AllCoinsRequest::try_from(json!({"limit": 50, "per_page": 10})).unwrap();
        assert_eq!(request.per_page, Some(10));
    }

    #[test]
    fn test_markets_request_defaults_currency() {
        assert_eq!(query(&MarketsRequest::new().normalized()), "vs_currency=usd");
        let request = MarketsRequest::new()
            .vs_currency("eur")
            .ids(vec!["bitcoin", "ethereum"])
            .order(Order::VolumeDesc)
            .per_page(50)
            .normalized();
        assert_eq!(
            query(&request),
            "vs_currency=eur&ids=bitcoin%2Cethereum&order=volume_desc&per_page=50"
        );
    }

    #[test]
    fn test_markets_request_from_raw() {
        let request = MarketsRequest::try_from(json!({
            "vs_currency": 3,
            "ids": ["bitcoin", "ethereum"],
            "price_change_percentage": "1h,24h"
        }))
        .unwrap();
        assert_eq!(
            query(&request),
            "vs_currency=usd&ids=bitcoin%2Cethereum&price_change_percentage=1h%2C24h"
        );
        assert!(MarketsRequest::try_from(json!({"order": "random"})).is_err());
        assert!(MarketsRequest::try_from(json!("bitcoin")).is_err());
    }

    #[test]
    fn test_market_chart_days_default_per_endpoint() {
        let request = MarketChartRequest::new();
        assert_eq!(query(&request.normalized(Days::Count(1))), "vs_currency=usd&days=1");
        assert_eq!(query(&request.normalized(Days::Max)), "vs_currency=usd&days=max");

        let request = MarketChartRequest::new().days(30).interval("daily");
        assert_eq!(
            query(&request.normalized(Days::Max)),
            "vs_currency=usd&days=30&interval=daily"
        );
    }

    #[test]
    fn test_market_chart_from_raw_falls_back_to_defaults() {
        let request = MarketChartRequest::try_from(json!({"vs_currency": "", "days": {"n": 1}})).unwrap();
        assert_eq!(query(&request.normalized(Days::Count(1))), "vs_currency=usd&days=1");

        let request = MarketChartRequest::try_from(json!({"days": "max"})).unwrap();
        assert_eq!(query(&request.normalized(Days::Count(1))), "vs_currency=usd&days=max");
    }

    #[test]
    fn test_market_chart_range_requires_bounds() {
        let request = MarketChartRangeRequest::new("1392577232", "1422577232")
            .normalized()
            .unwrap();
        assert_eq!(query(&request), "vs_currency=usd&from=1392577232&to=1422577232");

        let err = MarketChartRangeRequest::new("1392577232", "")
            .normalized()
            .unwrap_err();
        match err {
            CoinGeckoError::Validation(inner) => assert_eq!(inner.field, "to"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(MarketChartRangeRequest::try_from(json!({"from": "1"})).is_err());
    }

    #[test]
    fn test_market_chart_range_between() {
        let request = MarketChartRangeRequest::between(
            datetime!(2024-01-01 00:00 UTC),
            datetime!(2024-01-02 00:00 UTC),
        );
        assert_eq!(request.from, "1704067200");
        assert_eq!(request.to, "1704153600");
    }

    #[test]
    fn test_history_request_date_validation() {
        assert_eq!(HistoryRequest::on(date!(2021 - 12 - 05)).date, "05-12-2021");
        assert!(HistoryRequest::on(date!(2021 - 12 - 05)).normalized().is_ok());
        assert!(HistoryRequest::new("30-12-2017").normalized().is_ok());

        for bad in ["", "2017-12-30", "31-02-2020", "yesterday"] {
            let err = HistoryRequest::new(bad).normalized().unwrap_err();
            match err {
                CoinGeckoError::Validation(inner) => assert_eq!(inner.field, "date"),
                other => panic!("unexpected error: {other:?}"),
            }
        }
        assert!(HistoryRequest::try_from(json!({"localization": false})).is_err());
    }

    #[test]
    fn test_ohlc_request_defaults() {
        assert_eq!(query(&OhlcRequest::new().normalized()), "vs_currency=usd&days=1");
        assert_eq!(
            query(&OhlcRequest::new().days(Days::Max).vs_currency("eur").normalized()),
            "vs_currency=eur&days=max"
        );
    }

    #[test]
    fn test_coin_request_minimal() {
        assert_eq!(
            query(&CoinRequest::minimal()),
            "localization=false&tickers=false&market_data=false&community_data=false&developer_data=false"
        );
    }

    #[test]
    fn test_coin_detail_parsing() {
        let coin: CoinDetail = serde_json::from_value(json!({
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "asset_platform_id": null,
            "platforms": {"": ""},
            "hashing_algorithm": "SHA-256",
            "categories": ["Cryptocurrency", null],
            "description": {"en": "Bitcoin is the first..."},
            "genesis_date": "2009-01-03",
            "market_cap_rank": 1,
            "market_data": {
                "current_price": {"usd": 69000.0, "eur": 63500.5},
                "market_cap_rank": 1,
                "total_supply": 21000000.0,
                "max_supply": 21000000.0
            },
            "last_updated": "2024-04-07T16:49:31.736Z"
        }))
        .unwrap();
        assert_eq!(coin.description_en(), Some("Bitcoin is the first..."));
        assert_eq!(coin.price_in("eur"), Some(63500.5));
        assert_eq!(coin.hashing_algorithm.as_deref(), Some("SHA-256"));
        assert!(coin.tickers.is_empty());
    }

    #[test]
    fn test_coin_market_parsing() {
        let markets: Vec<CoinMarket> = serde_json::from_value(json!([{
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "current_price": 70187,
            "market_cap": 1381651251183u64,
            "market_cap_rank": 1,
            "max_supply": null,
            "roi": null,
            "price_change_percentage_1h_in_currency": 0.3
        }]))
        .unwrap();
        assert_eq!(markets[0].current_price, Some(70187.0));
        assert!(markets[0].max_supply.is_none());
        assert_eq!(markets[0].price_change_percentage_1h_in_currency, Some(0.3));
    }
}
