//! Service-level errors for registration and lifecycle hooks.

use crate::signable::{
    domain::{ColumnIdentifier, ColumnType, SignableDomainError, SignatureRole},
    ports::{ActorError, CatalogError, RecordError},
};
use thiserror::Error;

/// Errors raised while registering a class or running a hook.
#[derive(Debug, Error)]
pub enum SignableError {
    /// The column bound to a role is neither integer- nor string-typed.
    #[error("column {column} for the {role} role must be integer or string typed, found {declared}")]
    UnsupportedColumnType {
        /// Role the column is bound to.
        role: SignatureRole,
        /// Offending column.
        column: ColumnIdentifier,
        /// Declared type reported by the catalog.
        declared: ColumnType,
    },

    /// A configuration value could not be deserialized.
    #[error("invalid configuration value at '{key}': {source}")]
    InvalidConfiguration {
        /// Configuration key holding the value.
        key: String,
        /// Deserialization failure.
        #[source]
        source: serde_json::Error,
    },

    /// A stampable column has no setter on the record type.
    #[error("no setter registered for column {column} bound to the {role} role")]
    MissingSetter {
        /// Role the column is bound to.
        role: SignatureRole,
        /// Column lacking a setter.
        column: ColumnIdentifier,
    },

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] SignableDomainError),

    /// Schema catalog lookup failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The actor could not produce a representation.
    #[error(transparent)]
    Actor(#[from] ActorError),

    /// The record refused a stamp value.
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Result type for signable service operations.
pub type SignableResult<T> = Result<T, SignableError>;
