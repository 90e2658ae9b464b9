//! Query parameter bags.
//!
//! Tools build a [`ParamBag`] where any entry may be absent. [`sanitize`]
//! drops the absent entries; only a clean bag is ever turned into a query
//! string.

use serde::Serialize;

use super::error::{ApiError, ApiResult};

/// A scalar query parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Text(String),
    Int(i64),
    Bool(bool),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Ordered key/value parameters, where a value may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamBag {
    entries: Vec<(String, Option<ParamValue>)>,
}

impl ParamBag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a present value.
    pub fn set(self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.set_opt(key, Some(value))
    }

    /// Add a value that may be absent.
    pub fn set_opt<V: Into<ParamValue>>(mut self, key: &str, value: Option<V>) -> Self {
        self.entries.push((key.to_string(), value.map(Into::into)));
        self
    }

    /// Look up the value for a key. Absent entries return `None`.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_ref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when no entry is absent.
    pub fn is_clean(&self) -> bool {
        self.entries.iter().all(|(_, v)| v.is_some())
    }

    /// Iterate over all entries, absent ones included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&ParamValue>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    /// Serialize the present entries as an `application/x-www-form-urlencoded`
    /// query string (without the leading `?`).
    pub fn to_query_string(&self) -> ApiResult<String> {
        let pairs: Vec<(&str, &ParamValue)> = self
            .entries
            .iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| (k.as_str(), v)))
            .collect();

        serde_urlencoded::to_string(pairs).map_err(|e| ApiError::invalid_request(e.to_string()))
    }
}

/// Return a copy of `bag` holding only the entries whose value is present.
pub fn sanitize(bag: &ParamBag) -> ParamBag {
    ParamBag {
        entries: bag
            .entries
            .iter()
            .filter(|(_, v)| v.is_some())
            .cloned()
            .collect(),
    }
}
