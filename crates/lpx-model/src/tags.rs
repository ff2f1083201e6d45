use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Tag set attached to a measurement, ordered by key.
///
/// Iteration order is the order tags appear on the line.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tags(pub BTreeMap<String, String>);

impl Tags {
    /// Create an empty tag set.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns `true` if no tags are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Insert or overwrite a tag.
    ///
    /// Returns `self` for chaining.
    pub fn insert<K, V>(&mut self, key: K, val: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.insert(key.into(), val.into());
        self
    }

    /// Get the value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    /// Iterate through all tags as `(&str, &str)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge two tag sets, where entries from `other` override those in `self`.
    pub fn merged(&self, other: &Tags) -> Tags {
        let mut out = self.0.clone();
        out.extend(other.0.iter().map(|(k, v)| (k.clone(), v.clone())));
        Tags(out)
    }
}

impl<K, V> FromIterator<(K, V)> for Tags
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<BTreeMap<String, String>> for Tags {
    fn from(m: BTreeMap<String, String>) -> Self {
        Self(m)
    }
}

impl From<HashMap<String, String>> for Tags {
    fn from(m: HashMap<String, String>) -> Self {
        Self(m.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::Tags;

    #[test]
    fn iterates_in_key_order() {
        let tags: Tags = [("foo", "bar"), ("baaz gogo", "gu,gu"), ("a", "1")]
            .into_iter()
            .collect();

        let keys: Vec<_> = tags.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "baaz gogo", "foo"]);
    }

    #[test]
    fn insert_overwrites_and_chains() {
        let mut tags = Tags::new();
        tags.insert("dc", "fra").insert("dc", "ams").insert("rack", "7");

        assert_eq!(tags.len(), 2);
        assert_eq!(tags.get("dc"), Some("ams"));
        assert!(tags.get("zone").is_none());
    }

    #[test]
    fn merged_other_overrides_base() {
        let base: Tags = [("env", "prod"), ("dc", "fra")].into_iter().collect();
        let call: Tags = [("env", "staging"), ("svc", "api")].into_iter().collect();

        let merged = base.merged(&call);
        assert_eq!(merged.get("env"), Some("staging"));
        assert_eq!(merged.get("dc"), Some("fra"));
        assert_eq!(merged.get("svc"), Some("api"));
    }

    #[test]
    fn serde_transparent_roundtrip_json() {
        let tags: Tags = [("foo", "bar")].into_iter().collect();

        let json = serde_json::to_string(&tags).unwrap();
        assert_eq!(json, r#"{"foo":"bar"}"#);

        let back: Tags = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tags);
    }
}
