//! Finance platform and product endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{DisplayFromStr, PickFirst, serde_as};

use crate::error::CoinGeckoError;
use crate::rest::CoinGeckoClient;
use crate::rest::endpoints::{EndpointPath, finance};
use crate::rest::params::RawParams;
use crate::types::Pagination;

/// Request parameters for finance products.
///
/// `per_page` defaults to 100 and `page` to 1.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FinanceProductsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Start of the listing window, passed through as given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<String>,
    /// End of the listing window, passed through as given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at: Option<String>,
}

impl FinanceProductsRequest {
    /// Create a request with default settings.
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

    /// Set the start of the listing window.
    pub fn start_at(mut self, start_at: impl Into<String>) -> Self {
        self.start_at = Some(start_at.into());
        self
    }

    /// Set the end of the listing window.
    pub fn end_at(mut self, end_at: impl Into<String>) -> Self {
        self.end_at = Some(end_at.into());
        self
    }

    pub(crate) fn normalized(&self) -> Self {
        let pages = Pagination {
            per_page: self.per_page,
            page: self.page,
        }
        .or_defaults(100, 1);
        Self {
            per_page: pages.per_page,
            page: pages.page,
            ..self.clone()
        }
    }
}

impl TryFrom<Value> for FinanceProductsRequest {
    type Error = CoinGeckoError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let raw = RawParams::try_from(value)?;
        Ok(Self {
            per_page: raw.number("per_page")?,
            page: raw.number("page")?,
            start_at: raw.string("start_at")?,
            end_at: raw.string("end_at")?,
        })
    }
}

/// A lending or staking platform.
#[derive(Debug, Clone, Deserialize)]
pub struct FinancePlatform {
    pub name: String,
    #[serde(default)]
    pub facts: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub centralized: Option<bool>,
    #[serde(default)]
    pub website_url: Option<String>,
}

/// A product offered by a finance platform.
///
/// Rates are sent as numbers or numeric strings depending on the platform.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct FinanceProduct {
    pub platform: String,
    pub identifier: String,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub supply_rate_percentage: Option<f64>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub borrow_rate_percentage: Option<f64>,
    #[serde(default)]
    pub number_duration: Option<Value>,
    #[serde(default)]
    pub length_duration: Option<Value>,
    #[serde(default)]
    pub start_at: Option<i64>,
    #[serde(default)]
    pub end_at: Option<i64>,
    #[serde(default)]
    pub value_at: Option<i64>,
    #[serde(default)]
    pub redeem_at: Option<i64>,
}

/// Finance platform and product endpoints.
#[derive(Debug, Clone, Copy)]
pub struct FinanceEndpoints<'a> {
    client: &'a CoinGeckoClient,
}

impl CoinGeckoClient {
    /// Get the finance platform and product endpoints.
    pub fn finance(&self) -> FinanceEndpoints<'_> {
        FinanceEndpoints { client: self }
    }
}

impl FinanceEndpoints<'_> {
    /// List finance platforms.
    ///
    /// `per_page` defaults to 100 and `page` to 1.
    pub async fn platforms(&self, request: &Pagination) -> Result<Vec<FinancePlatform>, CoinGeckoError> {
        let request = request.or_defaults(100, 1);
        self.client
            .get_with_params(EndpointPath::new(finance::PLATFORMS), &request)
            .await
    }

    /// List finance products.
    pub async fn products(
        &self,
        request: &FinanceProductsRequest,
    ) -> Result<Vec<FinanceProduct>, CoinGeckoError> {
        let request = request.normalized();
        self.client
            .get_with_params(EndpointPath::new(finance::PRODUCTS), &request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_products_request_defaults() {
        let request = FinanceProductsRequest::new().normalized();
        assert_eq!(
            serde_urlencoded::to_string(&request).unwrap(),
            "per_page=100&page=1"
        );
        let request = FinanceProductsRequest::new()
            .page(4)
            .start_at("1609459200")
            .normalized();
        assert_eq!(
            serde_urlencoded::to_string(&request).unwrap(),
            "per_page=100&page=4&start_at=1609459200"
        );
    }

    #[test]
    fn test_product_rates_number_or_string() {
        let products: Vec<FinanceProduct> = serde_json::from_value(json!([
            {"platform": "Binance Savings", "identifier": "USDT", "supply_rate_percentage": "5.62", "borrow_rate_percentage": null},
            {"platform": "Celsius", "identifier": "BTC", "supply_rate_percentage": 3.51, "start_at": 0}
        ]))
        .unwrap();
        assert_eq!(products[0].supply_rate_percentage, Some(5.62));
        assert!(products[0].borrow_rate_percentage.is_none());
        assert_eq!(products[1].supply_rate_percentage, Some(3.51));
        assert!(products[1].borrow_rate_percentage.is_none());
    }
}
