//! Positional time-series entries returned by the chart endpoints.
//!
//! CoinGecko encodes every series point as a JSON array, e.g.
//! `[1711843200000, 69702.31]`. Timestamps are Unix milliseconds and may come
//! back as integers or floats.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// Price, market cap and volume series for a coin or contract.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketChart {
    /// Price series.
    #[serde(default)]
    pub prices: Vec<ChartPoint>,
    /// Market capitalisation series.
    #[serde(default)]
    pub market_caps: Vec<ChartPoint>,
    /// Traded volume series.
    #[serde(default)]
    pub total_volumes: Vec<ChartPoint>,
}

/// A single `[timestamp, value]` point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    /// Unix timestamp in milliseconds.
    pub timestamp_ms: i64,
    /// Value at that time, `None` when CoinGecko has no data.
    pub value: Option<f64>,
}

impl<'de> Deserialize<'de> for ChartPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let arr: (f64, Option<f64>) = Deserialize::deserialize(deserializer)?;
        Ok(ChartPoint {
            timestamp_ms: arr.0 as i64,
            value: arr.1,
        })
    }
}

/// Single OHLC candle.
/// Format: [time, open, high, low, close]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OhlcCandle {
    /// Candle close time, Unix milliseconds.
    pub timestamp_ms: i64,
    /// Open price.
    pub open: f64,
    /// High price.
    pub high: f64,
    /// Low price.
    pub low: f64,
    /// Close price.
    pub close: f64,
}

impl<'de> Deserialize<'de> for OhlcCandle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let arr: (f64, f64, f64, f64, f64) = Deserialize::deserialize(deserializer)?;
        Ok(OhlcCandle {
            timestamp_ms: arr.0 as i64,
            open: arr.1,
            high: arr.2,
            low: arr.3,
            close: arr.4,
        })
    }
}

/// Exchange volume in BTC at a point in time.
/// Format: [time, volume], the volume being a decimal string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumePoint {
    /// Unix timestamp in milliseconds.
    pub timestamp_ms: i64,
    /// Volume in BTC.
    pub volume_btc: Decimal,
}

impl<'de> Deserialize<'de> for VolumePoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let arr: (f64, Decimal) = Deserialize::deserialize(deserializer)?;
        Ok(VolumePoint {
            timestamp_ms: arr.0 as i64,
            volume_btc: arr.1,
        })
    }
}
