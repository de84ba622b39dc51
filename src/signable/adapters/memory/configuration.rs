//! Static configuration provider.

use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::signable::ports::ConfigurationProvider;

/// Configuration provider serving a fixed set of keyed values.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use signable::signable::{
///     adapters::memory::StaticConfiguration, domain::columns_key, ports::ConfigurationProvider,
/// };
///
/// let config = StaticConfiguration::new()
///     .with_value(columns_key("Comment"), json!({ "created": "author" }));
/// assert!(config.get("signable.Comment.columns").is_some());
/// assert!(config.get("signable.Article.columns").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticConfiguration {
    values: HashMap<String, Value>,
}

impl StaticConfiguration {
    /// Creates an empty provider; every lookup falls back to defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider from a flat JSON object of keys to values.
    #[must_use]
    pub fn from_object(object: Map<String, Value>) -> Self {
        Self {
            values: object.into_iter().collect(),
        }
    }

    /// Stores `value` under `key`.
    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: Value) -> Self {
        self.values.insert(key.into(), value);
        self
    }
}

impl ConfigurationProvider for StaticConfiguration {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }
}
