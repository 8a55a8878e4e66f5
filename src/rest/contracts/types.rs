//! Types for the asset platform and token contract endpoints.

use serde::Deserialize;

use crate::types::serde_helpers::empty_string_as_none;

/// A blockchain tokens are issued on.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetPlatform {
    /// Id to pass to the contract endpoints.
    pub id: String,
    /// EVM chain id, when the platform has one.
    #[serde(default)]
    pub chain_identifier: Option<i64>,
    pub name: String,
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub shortname: Option<String>,
    /// Id of the native coin.
    #[serde(default)]
    pub native_coin_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_platform_parsing() {
        let platforms: Vec<AssetPlatform> = serde_json::from_str(
            r#"[
                {"id": "polygon-pos", "chain_identifier": 137, "name": "Polygon POS", "shortname": "MATIC", "native_coin_id": "matic-network"},
                {"id": "sora", "chain_identifier": null, "name": "Sora", "shortname": ""}
            ]"#,
        )
        .unwrap();
        assert_eq!(platforms[0].chain_identifier, Some(137));
        assert_eq!(platforms[0].shortname.as_deref(), Some("MATIC"));
        assert!(platforms[1].chain_identifier.is_none());
        assert!(platforms[1].shortname.is_none());
    }
}
