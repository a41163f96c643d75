//! Query-string options passed to API endpoints.
//!
//! Every endpoint accepts a [`RequestOptions`] map of string parameters
//! (`offset`, `limit`, `timespan`, ...). Wrappers merge caller options over
//! their own defaults; on a key collision the caller wins. The transport
//! forces `format=json` after merging, so that key cannot be overridden into
//! a non-JSON response format.

use std::collections::BTreeMap;

/// An ordered string-to-string map of query parameters.
///
/// Backed by a `BTreeMap` so encoded query strings are deterministic, which
/// keeps request logs and test fixtures stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    entries: BTreeMap<String, String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overlay `overrides` on top of `self`. Override values win on key
    /// collision; keys only present in `self` are preserved.
    pub fn merged(&self, overrides: &RequestOptions) -> RequestOptions {
        let mut entries = self.entries.clone();
        for (k, v) in &overrides.entries {
            entries.insert(k.clone(), v.clone());
        }
        RequestOptions { entries }
    }

    /// Key/value pairs in key order, ready for query-string serialization.
    pub(crate) fn pairs(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RequestOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        RequestOptions {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
