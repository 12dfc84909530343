//! Core data types: article records, result sets, and the collection whitelist.

use ahash::AHashSet;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Identifier of a documentation collection.
///
/// The remote API and site configuration disagree on whether these are strings
/// or integers, so both JSON forms are accepted and normalized to the string
/// form for comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CollectionId(String);

impl CollectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CollectionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for CollectionId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for CollectionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(Self(s)),
            Value::Number(n) => Ok(Self(n.to_string())),
            other => Err(serde::de::Error::custom(format!(
                "expected string or number collection id, got {}",
                other
            ))),
        }
    }
}

/// A single article as returned by the documentation search API.
///
/// Immutable once received. Fields beyond the well-known ones are kept in
/// `extra` so that templates can reference any field the API happens to send.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub id: String,
    #[serde(rename = "collectionId")]
    pub collection_id: CollectionId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub preview: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ArticleRecord {
    /// All fields as a flat map, suitable for template substitution.
    pub fn fields(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

/// One completed request's worth of results, superseded wholesale by the next.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    pub items: Vec<ArticleRecord>,
    #[serde(default, rename = "totalAvailable")]
    pub total_available: usize,
}

/// Set of collection identifiers allowed for display.
///
/// Configured once at startup. An empty set means no filtering at all.
#[derive(Debug, Clone, Default)]
pub struct CollectionWhitelist(AHashSet<CollectionId>);

impl CollectionWhitelist {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether an article in this collection may be displayed.
    /// An empty whitelist allows everything.
    pub fn allows(&self, id: &CollectionId) -> bool {
        self.0.is_empty() || self.0.contains(id)
    }
}

impl FromIterator<CollectionId> for CollectionWhitelist {
    fn from_iter<I: IntoIterator<Item = CollectionId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
