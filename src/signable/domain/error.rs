//! Error types for signable domain validation and parsing.

use super::RepresentationKind;
use thiserror::Error;

/// Errors returned while constructing signable domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignableDomainError {
    /// The table name is empty or contains whitespace.
    #[error("invalid table name '{0}'")]
    InvalidTableName(String),
}

/// Error returned while parsing signature roles from configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown signature role: {0}")]
pub struct ParseSignatureRoleError(pub String);

/// Error returned when a stamp value does not carry the expected representation.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("expected {expected} stamp value, found {found}")]
pub struct StampValueError {
    /// Representation the setter expected.
    pub expected: RepresentationKind,
    /// Representation the value actually carries.
    pub found: RepresentationKind,
}
