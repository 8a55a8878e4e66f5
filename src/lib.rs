//! # CoinGecko Client
//!
//! An async Rust client library for the CoinGecko v3 public REST API.
//!
//! ## Features
//!
//! - Every public v3 endpoint, grouped into per-family handlers
//! - Typed request builders with documented defaults filled in for you
//! - Lists accepted either as slices or comma-separated strings
//! - Validation before any network call
//! - Remote error bodies returned verbatim
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coingecko_api_client::rest::CoinGeckoClient;
//! use coingecko_api_client::rest::simple::SimplePriceRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinGeckoClient::new();
//!
//!     let pong = client.ping().await?;
//!     println!("{}", pong.gecko_says);
//!
//!     let request = SimplePriceRequest::new(["bitcoin", "ethereum"]).vs_currencies("usd");
//!     let prices = client.simple().price(&request).await?;
//!     println!("BTC: {:?}", prices.get("bitcoin", "usd"));
//!     Ok(())
//! }
//! ```
//!
//! ## Untyped parameters
//!
//! Request types also accept a JSON object through `TryFrom<serde_json::Value>`,
//! applying the same defaults and validation:
//!
//! ```rust
//! use coingecko_api_client::rest::simple::SimplePriceRequest;
//! use serde_json::json;
//!
//! let request = SimplePriceRequest::try_from(json!({"ids": ["bitcoin", "ethereum"]})).unwrap();
//! assert_eq!(request.vs_currencies.unwrap().as_str(), "usd");
//!
//! assert!(SimplePriceRequest::try_from(json!(["bitcoin"])).is_err());
//! ```

pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ApiError, CoinGeckoError, ValidationError};
pub use rest::{CoinGeckoClient, CoinGeckoClientBuilder};
pub use types::{Days, IdList, Order};

/// Result type alias using CoinGeckoError
pub type Result<T> = std::result::Result<T, CoinGeckoError>;
