//! Configuration provider port.

use serde_json::Value;

/// Keyed configuration lookup.
///
/// Keys are namespaced by component and mapped class, see
/// [`columns_key`](crate::signable::domain::columns_key) and
/// [`user_methods_key`](crate::signable::domain::user_methods_key).
pub trait ConfigurationProvider: Send + Sync {
    /// Returns the value stored under `key`, or `None` when unset.
    fn get(&self, key: &str) -> Option<Value>;
}
