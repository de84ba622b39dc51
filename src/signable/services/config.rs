//! Loading per-class configuration from a provider.

use super::{SignableError, SignableResult};
use crate::signable::{
    domain::{SignableClassConfig, columns_key, user_methods_key},
    ports::ConfigurationProvider,
};
use serde::de::DeserializeOwned;

/// Reads the signable configuration of `class_name`.
///
/// Unset keys fall back to the default column and accessor mappings.
///
/// # Errors
///
/// Returns [`SignableError::InvalidConfiguration`] when a configured value
/// does not deserialize into its mapping.
pub fn load_class_config<P>(provider: &P, class_name: &str) -> SignableResult<SignableClassConfig>
where
    P: ConfigurationProvider + ?Sized,
{
    Ok(SignableClassConfig {
        columns: load_or_default(provider, &columns_key(class_name))?,
        user_methods: load_or_default(provider, &user_methods_key(class_name))?,
    })
}

fn load_or_default<P, T>(provider: &P, key: &str) -> SignableResult<T>
where
    P: ConfigurationProvider + ?Sized,
    T: DeserializeOwned + Default,
{
    provider.get(key).map_or_else(
        || Ok(T::default()),
        |value| {
            serde_json::from_value(value).map_err(|source| SignableError::InvalidConfiguration {
                key: key.to_owned(),
                source,
            })
        },
    )
}
