//! Per-class configuration of signature columns and actor accessors.

use super::{ColumnIdentifier, RepresentationKind, SignatureRole, TableName};
use serde::{Deserialize, Serialize};

/// Namespace prefixing every configuration key read by the behaviour.
pub const CONFIG_NAMESPACE: &str = "signable";

/// Accessor name resolving to the actor identifier.
pub const ID_ACCESSOR: &str = "id";

/// Accessor name resolving to the actor display string.
pub const DISPLAY_ACCESSOR: &str = "to_string";

/// Returns the configuration key holding the column mapping of `class_name`.
///
/// # Examples
///
/// ```rust
/// use signable::signable::domain::columns_key;
///
/// assert_eq!(columns_key("Article"), "signable.Article.columns");
/// ```
#[must_use]
pub fn columns_key(class_name: &str) -> String {
    format!("{CONFIG_NAMESPACE}.{class_name}.columns")
}

/// Returns the configuration key holding the accessor mapping of `class_name`.
#[must_use]
pub fn user_methods_key(class_name: &str) -> String {
    format!("{CONFIG_NAMESPACE}.{class_name}.user_methods")
}

/// Maps each signature role to a column name.
///
/// The default mapping binds `created_by`, `updated_by` and `deleted_by`. A
/// mapping read from configuration replaces the default wholesale: a role it
/// leaves out is unused for that class.
///
/// # Examples
///
/// ```rust
/// use signable::signable::domain::{ColumnRoleMapping, SignatureRole};
///
/// let mapping = ColumnRoleMapping::empty().with_column(SignatureRole::Created, "author");
/// assert_eq!(mapping.column_for(SignatureRole::Created), Some("author"));
/// assert_eq!(mapping.column_for(SignatureRole::Deleted), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRoleMapping {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    deleted: Option<String>,
}

impl ColumnRoleMapping {
    /// Creates a mapping with no role bound.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            created: None,
            updated: None,
            deleted: None,
        }
    }

    /// Binds `role` to `column`.
    #[must_use]
    pub fn with_column(mut self, role: SignatureRole, column: impl Into<String>) -> Self {
        *self.slot_mut(role) = Some(column.into());
        self
    }

    /// Returns the column name configured for `role`.
    #[must_use]
    pub fn column_for(&self, role: SignatureRole) -> Option<&str> {
        match role {
            SignatureRole::Created => self.created.as_deref(),
            SignatureRole::Updated => self.updated.as_deref(),
            SignatureRole::Deleted => self.deleted.as_deref(),
        }
    }

    const fn slot_mut(&mut self, role: SignatureRole) -> &mut Option<String> {
        match role {
            SignatureRole::Created => &mut self.created,
            SignatureRole::Updated => &mut self.updated,
            SignatureRole::Deleted => &mut self.deleted,
        }
    }
}

impl Default for ColumnRoleMapping {
    fn default() -> Self {
        Self::empty()
            .with_column(SignatureRole::Created, "created_by")
            .with_column(SignatureRole::Updated, "updated_by")
            .with_column(SignatureRole::Deleted, "deleted_by")
    }
}

/// Maps each actor representation to the accessor that produces it.
///
/// Fields missing from a configured mapping keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInfoMapping {
    /// Accessor producing the actor identifier.
    pub id: String,
    /// Accessor producing the actor display string.
    pub string: String,
}

impl UserInfoMapping {
    /// Returns the accessor configured for `kind`.
    #[must_use]
    pub fn accessor(&self, kind: RepresentationKind) -> &str {
        match kind {
            RepresentationKind::Id => &self.id,
            RepresentationKind::String => &self.string,
        }
    }
}

impl Default for UserInfoMapping {
    fn default() -> Self {
        Self {
            id: ID_ACCESSOR.to_owned(),
            string: DISPLAY_ACCESSOR.to_owned(),
        }
    }
}

/// Complete signable configuration of one mapped class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignableClassConfig {
    /// Role to column bindings.
    pub columns: ColumnRoleMapping,
    /// Representation to accessor bindings.
    pub user_methods: UserInfoMapping,
}

impl SignableClassConfig {
    /// Resolves the canonical column identifier bound to `role`.
    ///
    /// Returns `None` when the role is not configured for the class.
    #[must_use]
    pub fn resolve_column(&self, table: &TableName, role: SignatureRole) -> Option<ColumnIdentifier> {
        self.columns
            .column_for(role)
            .map(|configured| ColumnIdentifier::resolve(table, configured))
    }
}
