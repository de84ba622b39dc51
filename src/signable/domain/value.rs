//! Values written into signature columns.

use super::StampValueError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Representation of the actor a signature column stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepresentationKind {
    /// The actor's numeric identifier, stored in integer-like columns.
    Id,
    /// The actor's display string, stored in string-like columns.
    String,
}

impl RepresentationKind {
    /// Returns the configuration key for this representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::String => "string",
        }
    }
}

impl fmt::Display for RepresentationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value extracted from the actor and handed to a record setter.
///
/// # Examples
///
/// ```rust
/// use signable::signable::domain::{RepresentationKind, StampValue};
///
/// let value = StampValue::Id(42);
/// assert_eq!(value.kind(), RepresentationKind::Id);
/// assert_eq!(value.into_id(), Ok(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum StampValue {
    /// Numeric actor identifier.
    Id(i64),
    /// Actor display string.
    Text(String),
}

impl StampValue {
    /// Returns the representation this value carries.
    #[must_use]
    pub const fn kind(&self) -> RepresentationKind {
        match self {
            Self::Id(_) => RepresentationKind::Id,
            Self::Text(_) => RepresentationKind::String,
        }
    }

    /// Unwraps a numeric identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StampValueError`] when the value is a display string.
    pub fn into_id(self) -> Result<i64, StampValueError> {
        match self {
            Self::Id(id) => Ok(id),
            Self::Text(_) => Err(StampValueError {
                expected: RepresentationKind::Id,
                found: RepresentationKind::String,
            }),
        }
    }

    /// Unwraps a display string.
    ///
    /// # Errors
    ///
    /// Returns [`StampValueError`] when the value is a numeric identifier.
    pub fn into_text(self) -> Result<String, StampValueError> {
        match self {
            Self::Text(text) => Ok(text),
            Self::Id(_) => Err(StampValueError {
                expected: RepresentationKind::String,
                found: RepresentationKind::Id,
            }),
        }
    }
}

impl fmt::Display for StampValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}
