//! Parameter normalization shared by every endpoint.
//!
//! Typed requests go through the `require_*` and `*_or_default` helpers before
//! a URL is built. Untyped input (a `serde_json::Value` handed over by a
//! caller) is checked by [`RawParams`], which applies the same rules: a field
//! with a default falls back to it when absent, empty or of the wrong type; a
//! field without one fails validation.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{CoinGeckoError, ValidationError};
use crate::types::{Days, IdList};

pub(crate) const NON_EMPTY_STRING: &str = "a non-empty string";
pub(crate) const NON_EMPTY_LIST: &str = "a non-empty string or list of strings";

/// Reject an empty required string.
pub(crate) fn require(field: &'static str, value: &str) -> Result<String, CoinGeckoError> {
    if value.is_empty() {
        return Err(ValidationError::new(field, NON_EMPTY_STRING).into());
    }
    Ok(value.to_string())
}

/// Reject an empty required list.
pub(crate) fn require_list(field: &'static str, value: &IdList) -> Result<IdList, CoinGeckoError> {
    if value.is_empty() {
        return Err(ValidationError::new(field, NON_EMPTY_LIST).into());
    }
    Ok(value.clone())
}

/// Use `value` unless it is absent or empty.
pub(crate) fn string_or_default(value: Option<&str>, default: &str) -> String {
    match value {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => default.to_string(),
    }
}

/// Use `value` unless it is absent or empty.
pub(crate) fn list_or_default(value: Option<&IdList>, default: &str) -> IdList {
    match value {
        Some(value) if !value.is_empty() => value.clone(),
        _ => IdList::from(default),
    }
}

/// Untyped caller input, validated field by field.
///
/// Only a JSON object is accepted; arrays, primitives and `null` are rejected
/// as a whole.
#[derive(Debug, Clone, Default)]
pub(crate) struct RawParams {
    fields: Map<String, Value>,
}

impl TryFrom<Value> for RawParams {
    type Error = CoinGeckoError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(ValidationError::new("params", "a key-value object").into()),
        }
    }
}

impl RawParams {
    fn present(&self, field: &str) -> Option<&Value> {
        self.fields.get(field).filter(|value| !value.is_null())
    }

    fn as_list(value: &Value) -> Option<IdList> {
        match value {
            Value::String(ids) => Some(IdList::from(ids.as_str())),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str())
                .collect::<Option<Vec<_>>>()
                .map(IdList::from),
            _ => None,
        }
    }

    /// An optional string-or-list field.
    pub(crate) fn list(&self, field: &'static str) -> Result<Option<IdList>, CoinGeckoError> {
        match self.present(field) {
            None => Ok(None),
            Some(value) => Self::as_list(value)
                .map(Some)
                .ok_or_else(|| ValidationError::new(field, NON_EMPTY_LIST).into()),
        }
    }

    /// A string-or-list field with a default.
    pub(crate) fn list_or_default(&self, field: &'static str, default: &str) -> IdList {
        let value = self.present(field).and_then(Self::as_list);
        list_or_default(value.as_ref(), default)
    }

    /// A required string-or-list field.
    pub(crate) fn required_list(&self, field: &'static str) -> Result<IdList, CoinGeckoError> {
        let value = self.list(field)?.unwrap_or_default();
        require_list(field, &value)
    }

    /// An optional string field.
    pub(crate) fn string(&self, field: &'static str) -> Result<Option<String>, CoinGeckoError> {
        match self.present(field) {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.clone())),
            Some(_) => Err(ValidationError::new(field, "a string").into()),
        }
    }

    /// A string field with a default.
    pub(crate) fn string_or_default(&self, field: &'static str, default: &str) -> String {
        let value = self.present(field).and_then(Value::as_str);
        string_or_default(value, default)
    }

    /// A required string field.
    pub(crate) fn required_string(&self, field: &'static str) -> Result<String, CoinGeckoError> {
        match self.present(field) {
            Some(Value::String(value)) => require(field, value),
            _ => Err(ValidationError::new(field, NON_EMPTY_STRING).into()),
        }
    }

    /// A required field passed through as literal text, such as a Unix
    /// timestamp. Numbers are kept as written, never reinterpreted.
    pub(crate) fn required_opaque(&self, field: &'static str) -> Result<String, CoinGeckoError> {
        match self.present(field) {
            Some(Value::String(value)) => require(field, value),
            Some(Value::Number(value)) => Ok(value.to_string()),
            _ => Err(ValidationError::new(field, "a non-empty string or number").into()),
        }
    }

    /// An optional boolean flag.
    pub(crate) fn flag(&self, field: &'static str) -> Result<Option<bool>, CoinGeckoError> {
        match self.present(field) {
            None => Ok(None),
            Some(Value::Bool(value)) => Ok(Some(*value)),
            Some(_) => Err(ValidationError::new(field, "a boolean").into()),
        }
    }

    /// An optional non-negative integer.
    pub(crate) fn number(&self, field: &'static str) -> Result<Option<u32>, CoinGeckoError> {
        match self.present(field) {
            None => Ok(None),
            Some(value) => value
                .as_u64()
                .and_then(|value| u32::try_from(value).ok())
                .map(Some)
                .ok_or_else(|| ValidationError::new(field, "a non-negative integer").into()),
        }
    }

    /// An optional field holding one of a fixed set of values.
    pub(crate) fn parsed<T>(
        &self,
        field: &'static str,
        expected: &'static str,
    ) -> Result<Option<T>, CoinGeckoError>
    where
        T: DeserializeOwned,
    {
        match self.present(field) {
            None => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|_| ValidationError::new(field, expected).into()),
        }
    }

    /// A look-back window given as a number or a string such as `"max"`.
    ///
    /// Anything else reads as absent so the endpoint default applies.
    pub(crate) fn days(&self, field: &'static str) -> Option<Days> {
        match self.present(field) {
            Some(Value::Number(days)) => days
                .as_u64()
                .and_then(|days| u32::try_from(days).ok())
                .map(Days::Count),
            Some(Value::String(days)) => days.parse().ok(),
            _ => None,
        }
    }

    /// A string field that reads as absent when empty or of the wrong type,
    /// so the endpoint default applies.
    pub(crate) fn lenient_string(&self, field: &'static str) -> Option<String> {
        self.present(field)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }
}
