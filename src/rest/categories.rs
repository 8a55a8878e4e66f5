//! Coin category endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoinGeckoError;
use crate::rest::CoinGeckoClient;
use crate::rest::endpoints::{EndpointPath, categories};
use crate::rest::params::RawParams;
use crate::types::Order;

/// Request parameters for categories with market data.
///
/// `order` defaults to `market_cap_desc`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoriesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
}

impl CategoriesRequest {
    /// Create a request with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sort order.
    pub fn order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    pub(crate) fn normalized(&self) -> Self {
        Self {
            order: Some(self.order.unwrap_or(Order::MarketCapDesc)),
        }
    }
}

impl TryFrom<Value> for CategoriesRequest {
    type Error = CoinGeckoError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let raw = RawParams::try_from(value)?;
        Ok(Self {
            order: raw.parsed::<Order>("order", "a sort order").ok().flatten(),
        })
    }
}

/// Entry of `/coins/categories/list`.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryListItem {
    pub category_id: String,
    pub name: String,
}

/// A category with market data.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub market_cap_change_24h: Option<f64>,
    #[serde(default)]
    pub content: Option<String>,
    /// Image URLs of the three largest coins.
    #[serde(default)]
    pub top_3_coins: Vec<String>,
    #[serde(default)]
    pub volume_24h: Option<f64>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Coin category endpoints.
#[derive(Debug, Clone, Copy)]
pub struct CategoriesEndpoints<'a> {
    client: &'a CoinGeckoClient,
}

impl CoinGeckoClient {
    /// Get the coin category endpoints.
    pub fn categories(&self) -> CategoriesEndpoints<'_> {
        CategoriesEndpoints { client: self }
    }
}

impl CategoriesEndpoints<'_> {
    /// List every category id and name.
    pub async fn list(&self) -> Result<Vec<CategoryListItem>, CoinGeckoError> {
        self.client.get(EndpointPath::new(categories::LIST)).await
    }

    /// List categories with market data.
    pub async fn markets(&self, request: &CategoriesRequest) -> Result<Vec<Category>, CoinGeckoError> {
        let request = request.normalized();
        self.client
            .get_with_params(EndpointPath::new(categories::MARKETS), &request)
            .await
    }
}
