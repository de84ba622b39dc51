//! Table and column identifiers, and declared column types.

use super::{RepresentationKind, SignableDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the table a mapped record class persists to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableName(String);

impl TableName {
    /// Creates a validated table name.
    ///
    /// # Errors
    ///
    /// Returns [`SignableDomainError::InvalidTableName`] when the value is
    /// empty after trimming or contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, SignableDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() || normalized.chars().any(char::is_whitespace) {
            return Err(SignableDomainError::InvalidTableName(raw));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the table name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fully qualified column identifier in `<table>.<COLUMN>` form.
///
/// Configuration may name a column bare (`created_by`) or already qualified
/// with the table prefix (`article.CREATED_BY`). Both normalize to the same
/// canonical shape: a bare name is prefixed with the table and upper-cased,
/// a qualified name is kept unchanged.
///
/// # Examples
///
/// ```rust
/// use signable::signable::domain::{ColumnIdentifier, TableName};
///
/// let table = TableName::new("article").expect("valid table");
/// let bare = ColumnIdentifier::resolve(&table, "created_by");
/// assert_eq!(bare.to_string(), "article.CREATED_BY");
///
/// let qualified = ColumnIdentifier::resolve(&table, "article.CREATED_BY");
/// assert_eq!(qualified, bare);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnIdentifier {
    table: TableName,
    column: String,
}

impl ColumnIdentifier {
    /// Resolves a configured column name against the owning table.
    #[must_use]
    pub fn resolve(table: &TableName, configured: &str) -> Self {
        let prefix = format!("{table}.");
        let column = configured
            .strip_prefix(prefix.as_str())
            .map_or_else(|| configured.to_uppercase(), ToOwned::to_owned);
        Self {
            table: table.clone(),
            column,
        }
    }

    /// Returns the owning table.
    #[must_use]
    pub const fn table(&self) -> &TableName {
        &self.table
    }

    /// Returns the column part, without the table prefix.
    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Returns `true` when `name` designates this column.
    ///
    /// SQL identifiers are compared case-insensitively, and `name` may carry
    /// the table prefix.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        let prefix = format!("{}.", self.table);
        let bare = name.strip_prefix(prefix.as_str()).unwrap_or(name);
        bare.eq_ignore_ascii_case(&self.column)
    }
}

impl fmt::Display for ColumnIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table, self.column)
    }
}

/// Declared scalar type of a column, as reported by a schema catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Integer-like column; stores the actor identifier.
    Integer,
    /// String-like column; stores the actor display string.
    Text,
    /// Any other declared type, kept by name for error reporting.
    Other(String),
}

impl ColumnType {
    /// Classifies a type name reported by a schema facility.
    ///
    /// Recognizes `PostgreSQL` `information_schema` names as well as the
    /// short aliases ORMs commonly use.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use signable::signable::domain::ColumnType;
    ///
    /// assert_eq!(ColumnType::from_sql_name("bigint"), ColumnType::Integer);
    /// assert_eq!(ColumnType::from_sql_name("character varying"), ColumnType::Text);
    /// assert_eq!(
    ///     ColumnType::from_sql_name("timestamp with time zone"),
    ///     ColumnType::Other("timestamp with time zone".to_owned())
    /// );
    /// ```
    #[must_use]
    pub fn from_sql_name(name: &str) -> Self {
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "int" | "integer" | "smallint" | "bigint" | "tinyint" | "int2" | "int4" | "int8"
            | "serial" | "bigserial" | "smallserial" => Self::Integer,
            "text" | "string" | "varchar" | "character varying" | "char" | "character"
            | "bpchar" | "citext" | "longvarchar" => Self::Text,
            _ => Self::Other(normalized),
        }
    }

    /// Returns the actor representation this column stores, if supported.
    #[must_use]
    pub const fn representation(&self) -> Option<RepresentationKind> {
        match self {
            Self::Integer => Some(RepresentationKind::Id),
            Self::Text => Some(RepresentationKind::String),
            Self::Other(_) => None,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => f.write_str("integer"),
            Self::Text => f.write_str("text"),
            Self::Other(name) => f.write_str(name),
        }
    }
}
