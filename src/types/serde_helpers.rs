//! Custom serde helpers for CoinGecko's loosely typed payloads.
//!
//! CoinGecko fills missing text with `""`, mixes numbers and numeric strings,
//! and encodes time series as positional arrays. These modules keep the
//! response types strict without failing on those quirks.

use serde::{Deserialize, Deserializer};

/// Deserialize an empty string as `None`.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use coingecko_api_client::types::serde_helpers::empty_string_as_none;
///
/// #[derive(Deserialize, Debug)]
/// struct Exchange {
///     #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
///     country: Option<String>,
/// }
///
/// let exchange: Exchange = serde_json::from_str(r#"{"country":""}"#).unwrap();
/// assert!(exchange.country.is_none());
/// ```
pub mod empty_string_as_none {
    use super::*;

    /// Deserialize a string, mapping `""` and `null` to `None`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.filter(|s| !s.is_empty()))
    }
}

/// Deserialize to `None` instead of failing on invalid/unexpected data.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use coingecko_api_client::types::serde_helpers::default_on_error;
///
/// #[derive(Deserialize, Debug)]
/// struct Exchange {
///     #[serde(deserialize_with = "default_on_error::deserialize", default)]
///     year_established: Option<u32>,
/// }
///
/// let exchange: Exchange = serde_json::from_str(r#"{"year_established":"n/a"}"#).unwrap();
/// assert!(exchange.year_established.is_none());
/// ```
pub mod default_on_error {
    use super::*;

    /// Deserialize a value, returning None if deserialization fails.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(T::deserialize(value).ok())
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize, Debug)]
    struct Sample {
        #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
        text: Option<String>,
        #[serde(deserialize_with = "default_on_error::deserialize", default)]
        rank: Option<u32>,
    }

    #[test]
    fn test_empty_string_as_none() {
        let sample: Sample = serde_json::from_str(r#"{"text":"","rank":1}"#).unwrap();
        assert!(sample.text.is_none());
        let sample: Sample = serde_json::from_str(r#"{"text":"Binance","rank":1}"#).unwrap();
        assert_eq!(sample.text.as_deref(), Some("Binance"));
    }

    #[test]
    fn test_default_on_error() {
        let sample: Sample = serde_json::from_str(r#"{"rank":"first"}"#).unwrap();
        assert!(sample.rank.is_none());
        let sample: Sample = serde_json::from_str(r#"{}"#).unwrap();
        assert!(sample.rank.is_none());
        let sample: Sample = serde_json::from_str(r#"{"rank":7}"#).unwrap();
        assert_eq!(sample.rank, Some(7));
    }
}
