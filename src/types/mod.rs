//! Common types used across the CoinGecko client library.

pub mod chart;
pub mod common;
pub mod serde_helpers;
pub mod ticker;

pub use chart::{ChartPoint, MarketChart, OhlcCandle, VolumePoint};
pub use common::*;
pub use ticker::{Ticker, TickerMarket};
