//! CoinGecko REST API client.
//!
//! [`CoinGeckoClient`] is the single entry point. Server-wide endpoints are
//! methods on the client; the rest are grouped into narrow per-family handlers
//! that borrow it:
//!
//! ```rust,no_run
//! use coingecko_api_client::rest::CoinGeckoClient;
//! use coingecko_api_client::rest::coins::MarketChartRequest;
//! use coingecko_api_client::types::Days;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinGeckoClient::new();
//!
//!     let request = MarketChartRequest::new().vs_currency("eur").days(Days::Count(7));
//!     let chart = client.coins().market_chart("bitcoin", &request).await?;
//!     println!("{} price points", chart.prices.len());
//!     Ok(())
//! }
//! ```

mod client;
pub mod endpoints;
pub(crate) mod params;

pub mod categories;
pub mod coins;
pub mod contracts;
pub mod derivatives;
pub mod exchanges;
pub mod finance;
pub mod general;
pub mod indexes;
pub mod simple;

pub use client::{BuiltRequest, CoinGeckoClient, CoinGeckoClientBuilder};
pub use endpoints::EndpointPath;
