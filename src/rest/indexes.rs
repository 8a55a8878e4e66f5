//! Market index endpoints.

use serde::Deserialize;

use crate::error::CoinGeckoError;
use crate::rest::CoinGeckoClient;
use crate::rest::endpoints::{EndpointPath, indexes};
use crate::types::{NameId, Pagination};

/// A market index.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketIndex {
    pub name: String,
    /// Index id. Absent on the single-index endpoint.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub market: Option<String>,
    /// Last value of the index.
    #[serde(default)]
    pub last: Option<f64>,
    #[serde(default)]
    pub is_multi_asset_composite: Option<bool>,
}

/// Market index endpoints.
#[derive(Debug, Clone, Copy)]
pub struct IndexesEndpoints<'a> {
    client: &'a CoinGeckoClient,
}

impl CoinGeckoClient {
    /// Get the market index endpoints.
    pub fn indexes(&self) -> IndexesEndpoints<'_> {
        IndexesEndpoints { client: self }
    }
}

impl IndexesEndpoints<'_> {
    /// List market indexes.
    ///
    /// `per_page` defaults to 100 and `page` to 1.
    pub async fn all(&self, request: &Pagination) -> Result<Vec<MarketIndex>, CoinGeckoError> {
        let request = request.or_defaults(100, 1);
        self.client
            .get_with_params(EndpointPath::new(indexes::ALL), &request)
            .await
    }

    /// List every market index id and name.
    pub async fn list(&self) -> Result<Vec<NameId>, CoinGeckoError> {
        self.client.get(EndpointPath::new(indexes::LIST)).await
    }

    /// Get one index of one market.
    ///
    /// # Arguments
    ///
    /// * `market_id` - Market id, e.g. `binance_futures`.
    /// * `id` - Index id, e.g. `BTC`.
    pub async fn index(&self, market_id: &str, id: &str) -> Result<MarketIndex, CoinGeckoError> {
        let path = EndpointPath::new(indexes::INDEX)
            .arg("market_id", market_id)
            .arg("id", id);
        self.client.get(path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_index_parsing() {
        let index: MarketIndex = serde_json::from_str(
            r#"{"name": "Bitcoin", "market": "Binance Futures", "last": 69522.5, "is_multi_asset_composite": false}"#,
        )
        .unwrap();
        assert!(index.id.is_none());
        assert_eq!(index.last, Some(69522.5));

        let indexes: Vec<MarketIndex> =
            serde_json::from_str(r#"[{"name": "CME Bitcoin", "id": "BRR", "market": "CME", "last": null}]"#).unwrap();
        assert_eq!(indexes[0].id.as_deref(), Some("BRR"));
        assert!(indexes[0].last.is_none());
    }
}
