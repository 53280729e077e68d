// SPDX-License-Identifier: MIT OR Apache-2.0

//! Theme extensions and their merge rules.
//!
//! Theme values are arbitrary JSON values keyed by top-level theme section
//! (`colors`, `fontFamily`, ...). Composition is a shallow merge: for each
//! top-level key the later layer replaces the earlier one wholesale, and keys
//! present only in an earlier layer are kept.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Additive theme customizations.
///
/// Keys are kept in sorted order so that two equal inputs always produce
/// structurally identical output, including when serialized.
///
/// # Examples
///
/// ```
/// use sitecfg::domain::theme::ThemeExtensions;
/// use serde_json::json;
///
/// let base = ThemeExtensions::new()
///     .with("colors", json!({"base": "#fff"}))
///     .with("spacing", json!({"18": "4.5rem"}));
/// let local = ThemeExtensions::new().with("colors", json!({"brand": "#0af"}));
///
/// let merged = base.merge(&local);
/// assert_eq!(merged.get("colors"), Some(&json!({"brand": "#0af"})));
/// assert_eq!(merged.get("spacing"), Some(&json!({"18": "4.5rem"})));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeExtensions(BTreeMap<String, Value>);

impl ThemeExtensions {
    /// Creates an empty set of theme extensions.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns a copy with `key` set to `value`, replacing any previous value.
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    /// Returns the value for a top-level key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if the top-level key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of top-level keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no theme keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Shallow-merges `overlay` on top of `self`.
    ///
    /// Per top-level key the overlay wins. Keys present only in `self` are kept,
    /// so merging never drops inherited keys.
    pub fn merge(&self, overlay: &ThemeExtensions) -> ThemeExtensions {
        let mut merged = self.0.clone();
        for (key, value) in &overlay.0 {
            merged.insert(key.clone(), value.clone());
        }
        ThemeExtensions(merged)
    }

    /// Merges the layers in order, each one on top of the previous result.
    pub fn merge_all<'a, I>(layers: I) -> ThemeExtensions
    where
        I: IntoIterator<Item = &'a ThemeExtensions>,
    {
        layers
            .into_iter()
            .fold(ThemeExtensions::new(), |acc, layer| acc.merge(layer))
    }

    /// Returns the extensions as a JSON object.
    pub fn to_json(&self) -> Value {
        Value::Object(self.0.clone().into_iter().collect())
    }
}

impl From<BTreeMap<String, Value>> for ThemeExtensions {
    fn from(map: BTreeMap<String, Value>) -> Self {
        ThemeExtensions(map)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for ThemeExtensions {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        ThemeExtensions(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
