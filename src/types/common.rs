//! Common domain types for the CoinGecko API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::CoinGeckoError;
use crate::rest::params::RawParams;

/// Sort orders accepted by the listing endpoints.
///
/// Not every endpoint accepts every order: coin listings use the `gecko_*`,
/// `market_cap_*`, `volume_*`, `id_*` and `price_*` family, tickers use
/// `trust_score_desc` and `volume_desc`, derivatives use `name_*`,
/// `open_interest_btc_*` and `trade_volume_24h_btc_*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Order {
    GeckoAsc,
    GeckoDesc,
    MarketCapAsc,
    MarketCapDesc,
    VolumeAsc,
    VolumeDesc,
    CoinNameAsc,
    CoinNameDesc,
    PriceAsc,
    PriceDesc,
    #[serde(rename = "h24_change_asc")]
    Hour24Asc,
    #[serde(rename = "h24_change_desc")]
    Hour24Desc,
    TrustScoreDesc,
    NameAsc,
    NameDesc,
    OpenInterestBtcAsc,
    OpenInterestBtcDesc,
    #[serde(rename = "trade_volume_24h_btc_asc")]
    TradeVolume24hBtcAsc,
    #[serde(rename = "trade_volume_24h_btc_desc")]
    TradeVolume24hBtcDesc,
}

impl Order {
    /// Wire value of this order.
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::GeckoAsc => "gecko_asc",
            Order::GeckoDesc => "gecko_desc",
            Order::MarketCapAsc => "market_cap_asc",
            Order::MarketCapDesc => "market_cap_desc",
            Order::VolumeAsc => "volume_asc",
            Order::VolumeDesc => "volume_desc",
            Order::CoinNameAsc => "coin_name_asc",
            Order::CoinNameDesc => "coin_name_desc",
            Order::PriceAsc => "price_asc",
            Order::PriceDesc => "price_desc",
            Order::Hour24Asc => "h24_change_asc",
            Order::Hour24Desc => "h24_change_desc",
            Order::TrustScoreDesc => "trust_score_desc",
            Order::NameAsc => "name_asc",
            Order::NameDesc => "name_desc",
            Order::OpenInterestBtcAsc => "open_interest_btc_asc",
            Order::OpenInterestBtcDesc => "open_interest_btc_desc",
            Order::TradeVolume24hBtcAsc => "trade_volume_24h_btc_asc",
            Order::TradeVolume24hBtcDesc => "trade_volume_24h_btc_desc",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category filter for status updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusUpdateCategory {
    General,
    Milestone,
    Partnership,
    ExchangeListing,
    SoftwareRelease,
    FundMovement,
    NewListings,
    Event,
}

/// Project type filter for status updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    /// Updates published by coins
    Coin,
    /// Updates published by markets (exchanges)
    Market,
}

/// Kind of event listed by CoinGecko.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    Event,
    Conference,
    Meetup,
}

/// Which derivative tickers to include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncludeTickers {
    /// Every ticker, expired ones included
    All,
    /// Only tickers that have not expired
    #[default]
    Unexpired,
}

/// Look-back window for chart endpoints: a number of days, or the full history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Days {
    /// Data up to this many days ago
    Count(u32),
    /// All available data
    Max,
}

impl Default for Days {
    fn default() -> Self {
        Days::Count(1)
    }
}

impl From<u32> for Days {
    fn from(days: u32) -> Self {
        Days::Count(days)
    }
}

impl fmt::Display for Days {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Days::Count(days) => write!(f, "{}", days),
            Days::Max => f.write_str("max"),
        }
    }
}

impl FromStr for Days {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("max") {
            return Ok(Days::Max);
        }
        s.parse::<u32>()
            .map(Days::Count)
            .map_err(|_| format!("invalid days value: {}", s))
    }
}

impl Serialize for Days {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// A field that accepts one identifier or a list of them.
///
/// CoinGecko takes lists as a single comma-separated value. Building an
/// `IdList` from a list joins it with `,`; building it from a string keeps the
/// string as-is, so `["a", "b"]` and `"a,b"` are the same value.
///
/// ```rust
/// use coingecko_api_client::types::IdList;
///
/// assert_eq!(IdList::from(["bitcoin", "ethereum"]), IdList::from("bitcoin,ethereum"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct IdList(String);

impl IdList {
    /// The comma-separated wire value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the list carries no identifier at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the individual identifiers.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.split(',').filter(|id| !id.is_empty())
    }
}

impl fmt::Display for IdList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for IdList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl From<&str> for IdList {
    fn from(ids: &str) -> Self {
        IdList(ids.to_string())
    }
}

impl From<String> for IdList {
    fn from(ids: String) -> Self {
        IdList(ids)
    }
}

impl From<&String> for IdList {
    fn from(ids: &String) -> Self {
        IdList(ids.clone())
    }
}

impl<S: AsRef<str>> From<Vec<S>> for IdList {
    fn from(ids: Vec<S>) -> Self {
        ids.iter().collect()
    }
}

impl<S: AsRef<str>> From<&[S]> for IdList {
    fn from(ids: &[S]) -> Self {
        ids.iter().collect()
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for IdList {
    fn from(ids: [S; N]) -> Self {
        ids.iter().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for IdList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let joined = iter
            .into_iter()
            .filter(|id| !id.as_ref().is_empty())
            .map(|id| id.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(",");
        IdList(joined)
    }
}

/// Page selection shared by the listing endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// Results per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Page number, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl Pagination {
    /// Create an empty page selection.
    pub fn new() -> Self {
        Self::default()
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

    /// Fill unset fields.
    pub(crate) fn or_defaults(&self, per_page: u32, page: u32) -> Self {
        Self {
            per_page: Some(self.per_page.unwrap_or(per_page)),
            page: Some(self.page.unwrap_or(page)),
        }
    }
}

impl TryFrom<serde_json::Value> for Pagination {
    type Error = CoinGeckoError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        let raw = RawParams::try_from(value)?;
        Ok(Self {
            per_page: raw.number("per_page")?,
            page: raw.number("page")?,
        })
    }
}

/// Image URLs in the sizes CoinGecko serves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

/// An `{id, name}` pair returned by the `*/list` endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NameId {
    /// Identifier to pass to other endpoints.
    pub id: String,
    /// Display name.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_list_from_list_matches_string() {
        let from_list = IdList::from(vec!["bitcoin", "ethereum"]);
        let from_str = IdList::from("bitcoin,ethereum");
        assert_eq!(from_list, from_str);
        assert_eq!(from_list.as_str(), "bitcoin,ethereum");
        assert_eq!(from_list.iter().collect::<Vec<_>>(), ["bitcoin", "ethereum"]);
    }

    #[test]
    fn test_id_list_empty() {
        assert!(IdList::from(Vec::<String>::new()).is_empty());
        assert!(IdList::from("").is_empty());
        assert!(!IdList::from(["usd"]).is_empty());
        assert!(IdList::from(["", ""]).is_empty());
        assert_eq!(IdList::from(["bitcoin", "", "ethereum"]).as_str(), "bitcoin,ethereum");
    }

    #[test]
    fn test_order_serde() {
        let json = serde_json::to_string(&Order::Hour24Desc).unwrap();
        assert_eq!(json, "\"h24_change_desc\"");
        let json = serde_json::to_string(&Order::TradeVolume24hBtcAsc).unwrap();
        assert_eq!(json, "\"trade_volume_24h_btc_asc\"");
        let order: Order = serde_json::from_str("\"market_cap_desc\"").unwrap();
        assert_eq!(order, Order::MarketCapDesc);
        assert_eq!(order.to_string(), "market_cap_desc");
    }

    #[test]
    fn test_status_update_enums_serde() {
        let json = serde_json::to_string(&StatusUpdateCategory::ExchangeListing).unwrap();
        assert_eq!(json, "\"exchange_listing\"");
        let json = serde_json::to_string(&ProjectType::Market).unwrap();
        assert_eq!(json, "\"market\"");
        let json = serde_json::to_string(&EventType::Conference).unwrap();
        assert_eq!(json, "\"Conference\"");
    }

    #[test]
    fn test_pagination_defaults_keep_explicit_values() {
        let filled = Pagination::new().page(3).or_defaults(100, 1);
        assert_eq!(filled.per_page, Some(100));
        assert_eq!(filled.page, Some(3));
        assert_eq!(
            serde_urlencoded::to_string(&filled).unwrap(),
            "per_page=100&page=3"
        );
        assert_eq!(serde_urlencoded::to_string(Pagination::new()).unwrap(), "");
    }

    #[test]
    fn test_pagination_from_raw() {
        let pagination = Pagination::try_from(serde_json::json!({"page": 2})).unwrap();
        assert_eq!(pagination, Pagination::new().page(2));
        assert!(Pagination::try_from(serde_json::json!({"page": "two"})).is_err());
        assert!(Pagination::try_from(serde_json::json!([1, 2])).is_err());
    }

    #[test]
    fn test_days_conversion() {
        assert_eq!(Days::default().to_string(), "1");
        assert_eq!(Days::Max.to_string(), "max");
        assert_eq!("max".parse::<Days>().unwrap(), Days::Max);
        assert_eq!("14".parse::<Days>().unwrap(), Days::Count(14));
        assert!("fortnight".parse::<Days>().is_err());
    }
}
