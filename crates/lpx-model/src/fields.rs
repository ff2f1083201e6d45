use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Field values already rendered into line protocol text, keyed by wire tag.
///
/// Produced by field extraction, or built directly by callers that supply
/// precomputed values. Values are written verbatim, so they must already be
/// valid line protocol (quoted strings, `i`-suffixed integers, ...).
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSet(pub BTreeMap<String, String>);

impl FieldSet {
    /// Create an empty field set.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Insert or overwrite a rendered value.
    pub fn insert<K, V>(&mut self, key: K, val: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.insert(key.into(), val.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    /// Iterate through `(key, rendered value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for FieldSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<BTreeMap<String, String>> for FieldSet {
    fn from(m: BTreeMap<String, String>) -> Self {
        Self(m)
    }
}

impl From<HashMap<String, String>> for FieldSet {
    fn from(m: HashMap<String, String>) -> Self {
        Self(m.into_iter().collect())
    }
}
