//! Mapped record port: lifecycle flags and signature setters.

use crate::signable::domain::{ColumnIdentifier, StampValue, StampValueError};
use std::fmt;
use thiserror::Error;

/// Result type for record setters.
pub type RecordResult<T> = Result<T, RecordError>;

/// Setter writing a stamp value into one column of a record.
pub type Setter<R> = fn(&mut R, StampValue) -> RecordResult<()>;

/// A record type whose rows can be stamped with the acting user.
///
/// # Examples
///
/// ```rust
/// use signable::signable::ports::{SetterMap, SignableRecord};
///
/// #[derive(Default)]
/// struct Article {
///     created_by: Option<i64>,
///     persisted: bool,
/// }
///
/// impl SignableRecord for Article {
///     const CLASS_NAME: &'static str = "Article";
///     const TABLE_NAME: &'static str = "article";
///
///     fn is_new(&self) -> bool {
///         !self.persisted
///     }
///
///     fn is_modified(&self) -> bool {
///         false
///     }
///
///     fn setters() -> SetterMap<Self> {
///         SetterMap::new().with("created_by", |article: &mut Self, value| {
///             article.created_by = Some(value.into_id()?);
///             Ok(())
///         })
///     }
/// }
///
/// assert_eq!(Article::setters().columns().collect::<Vec<_>>(), ["CREATED_BY"]);
/// ```
pub trait SignableRecord: Sized {
    /// Class name used to namespace configuration keys.
    const CLASS_NAME: &'static str;

    /// Table the class persists to.
    const TABLE_NAME: &'static str;

    /// Returns `true` when the record has never been persisted.
    fn is_new(&self) -> bool;

    /// Returns `true` when the record changed since it was loaded.
    fn is_modified(&self) -> bool;

    /// Returns the setters of the columns that can hold a signature.
    fn setters() -> SetterMap<Self>;
}

/// Column name to setter registry of a record type.
///
/// Column names are stored upper-cased and matched case-insensitively.
pub struct SetterMap<R> {
    entries: Vec<(String, Setter<R>)>,
}

impl<R> SetterMap<R> {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registers `setter` for `column`, replacing any earlier registration.
    #[must_use]
    pub fn with(mut self, column: &str, setter: Setter<R>) -> Self {
        let name = column.to_uppercase();
        self.entries.retain(|(existing, _)| *existing != name);
        self.entries.push((name, setter));
        self
    }

    /// Returns the setter registered for `column`.
    #[must_use]
    pub fn get(&self, column: &ColumnIdentifier) -> Option<Setter<R>> {
        self.entries
            .iter()
            .find(|(name, _)| column.matches(name))
            .map(|(_, setter)| *setter)
    }

    /// Iterates over the registered column names.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl<R> Default for SetterMap<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for SetterMap<R> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<R> fmt::Debug for SetterMap<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.columns()).finish()
    }
}

/// Errors raised by record setters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    /// The stamp value carries the wrong representation for the field.
    #[error(transparent)]
    Value(#[from] StampValueError),

    /// The record refused the value.
    #[error("column {column} rejected the value: {reason}")]
    Rejected {
        /// Column the value was destined for.
        column: String,
        /// Human-readable explanation.
        reason: String,
    },
}
