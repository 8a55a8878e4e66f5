//! Types for the simple price endpoints.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoinGeckoError;
use crate::rest::params::{self, RawParams};
use crate::types::IdList;

/// Quote currency used when none is given.
pub const DEFAULT_VS_CURRENCY: &str = "usd";

/// Asset platform used for token lookups when none is given.
pub const DEFAULT_ASSET_PLATFORM: &str = "ethereum";

/// Request parameters for coin prices.
///
/// `vs_currencies` defaults to `usd`.
///
/// ```rust
/// use coingecko_api_client::rest::simple::SimplePriceRequest;
///
/// let request = SimplePriceRequest::new(["bitcoin", "ethereum"])
///     .vs_currencies(["usd", "eur"])
///     .include_24hr_change(true);
/// assert_eq!(request.ids.as_str(), "bitcoin,ethereum");
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct SimplePriceRequest {
    /// Coin ids, see `/coins/list`.
    pub ids: IdList,
    /// Quote currencies, see `/simple/supported_vs_currencies`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vs_currencies: Option<IdList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_market_cap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_24hr_vol: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_24hr_change: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_last_updated_at: Option<bool>,
    /// Decimal places in the returned prices, or `full`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<String>,
}

impl SimplePriceRequest {
    /// Create a request for one or more coin ids.
    pub fn new(ids: impl Into<IdList>) -> Self {
        Self {
            ids: ids.into(),
            ..Default::default()
        }
    }

    /// Set the quote currencies.
    pub fn vs_currencies(mut self, vs_currencies: impl Into<IdList>) -> Self {
        self.vs_currencies = Some(vs_currencies.into());
        self
    }

    /// Include market cap.
    pub fn include_market_cap(mut self, include: bool) -> Self {
        self.include_market_cap = Some(include);
        self
    }

    /// Include 24h volume.
    pub fn include_24hr_vol(mut self, include: bool) -> Self {
        self.include_24hr_vol = Some(include);
        self
    }

    /// Include 24h change.
    pub fn include_24hr_change(mut self, include: bool) -> Self {
        self.include_24hr_change = Some(include);
        self
    }

    /// Include the last update time of each price.
    pub fn include_last_updated_at(mut self, include: bool) -> Self {
        self.include_last_updated_at = Some(include);
        self
    }

    /// Set the price precision.
    pub fn precision(mut self, precision: impl Into<String>) -> Self {
        self.precision = Some(precision.into());
        self
    }

    /// Fill defaults and validate required fields.
    pub(crate) fn normalized(&self) -> Result<Self, CoinGeckoError> {
        Ok(Self {
            ids: params::require_list("ids", &self.ids)?,
            vs_currencies: Some(params::list_or_default(
                self.vs_currencies.as_ref(),
                DEFAULT_VS_CURRENCY,
            )),
            ..self.clone()
        })
    }
}

impl TryFrom<Value> for SimplePriceRequest {
    type Error = CoinGeckoError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let raw = RawParams::try_from(value)?;
        Ok(Self {
            ids: raw.required_list("ids")?,
            vs_currencies: Some(raw.list_or_default("vs_currencies", DEFAULT_VS_CURRENCY)),
            include_market_cap: raw.flag("include_market_cap")?,
            include_24hr_vol: raw.flag("include_24hr_vol")?,
            include_24hr_change: raw.flag("include_24hr_change")?,
            include_last_updated_at: raw.flag("include_last_updated_at")?,
            precision: raw.string("precision")?,
        })
    }
}

/// Request parameters for token prices by contract address.
///
/// The asset platform defaults to `ethereum`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TokenPriceRequest {
    /// Asset platform id, see `/asset_platforms`. Sent in the path.
    #[serde(skip)]
    pub asset_platform: Option<String>,
    /// Token contract addresses.
    pub contract_addresses: IdList,
    /// Quote currencies.
    pub vs_currencies: IdList,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_market_cap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_24hr_vol: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_24hr_change: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_last_updated_at: Option<bool>,
}

impl TokenPriceRequest {
    /// Create a request for one or more contract addresses.
    pub fn new(contract_addresses: impl Into<IdList>, vs_currencies: impl Into<IdList>) -> Self {
        Self {
            contract_addresses: contract_addresses.into(),
            vs_currencies: vs_currencies.into(),
            ..Default::default()
        }
    }

    /// Set the asset platform.
    pub fn asset_platform(mut self, asset_platform: impl Into<String>) -> Self {
        self.asset_platform = Some(asset_platform.into());
        self
    }

    /// Include market cap.
    pub fn include_market_cap(mut self, include: bool) -> Self {
        self.include_market_cap = Some(include);
        self
    }

    /// Include 24h volume.
    pub fn include_24hr_vol(mut self, include: bool) -> Self {
        self.include_24hr_vol = Some(include);
        self
    }

    /// Include 24h change.
    pub fn include_24hr_change(mut self, include: bool) -> Self {
        self.include_24hr_change = Some(include);
        self
    }

    /// Include the last update time of each price.
    pub fn include_last_updated_at(mut self, include: bool) -> Self {
        self.include_last_updated_at = Some(include);
        self
    }

    /// Fill defaults and validate required fields.
    pub(crate) fn normalized(&self) -> Result<Self, CoinGeckoError> {
        Ok(Self {
            asset_platform: Some(params::string_or_default(
                self.asset_platform.as_deref(),
                DEFAULT_ASSET_PLATFORM,
            )),
            contract_addresses: params::require_list(
                "contract_addresses",
                &self.contract_addresses,
            )?,
            vs_currencies: params::require_list("vs_currencies", &self.vs_currencies)?,
            ..self.clone()
        })
    }
}

impl TryFrom<Value> for TokenPriceRequest {
    type Error = CoinGeckoError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let raw = RawParams::try_from(value)?;
        Ok(Self {
            asset_platform: Some(raw.string_or_default("asset_platform", DEFAULT_ASSET_PLATFORM)),
            contract_addresses: raw.required_list("contract_addresses")?,
            vs_currencies: raw.required_list("vs_currencies")?,
            include_market_cap: raw.flag("include_market_cap")?,
            include_24hr_vol: raw.flag("include_24hr_vol")?,
            include_24hr_change: raw.flag("include_24hr_change")?,
            include_last_updated_at: raw.flag("include_last_updated_at")?,
        })
    }
}

/// Prices keyed by coin id (or contract address), then by field.
///
/// Fields are currency codes plus, when requested, `<currency>_market_cap`,
/// `<currency>_24h_vol`, `<currency>_24h_change` and `last_updated_at`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct SimplePrices(pub HashMap<String, HashMap<String, Option<f64>>>);

impl SimplePrices {
    /// Look up one field for one coin.
    pub fn get(&self, id: &str, field: &str) -> Option<f64> {
        self.0.get(id)?.get(field).copied().flatten()
    }

    /// Coin ids (or contract addresses) present in the response.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of coins in the response.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the response is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
