//! Audit roles a record column can be bound to.

use super::ParseSignatureRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic purpose of a signature column.
///
/// # Examples
///
/// ```rust
/// use signable::signable::domain::SignatureRole;
///
/// let role = SignatureRole::try_from("updated").expect("known role");
/// assert_eq!(role, SignatureRole::Updated);
/// assert_eq!(role.as_str(), "updated");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignatureRole {
    /// Stamped when a new record is first saved.
    Created,
    /// Stamped whenever a modified record is saved.
    Updated,
    /// Stamped immediately before a record is deleted.
    Deleted,
}

impl SignatureRole {
    /// Every role, in the order hooks evaluate them.
    pub const ALL: [Self; 3] = [Self::Created, Self::Updated, Self::Deleted];

    /// Returns the canonical configuration key for this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
        }
    }
}

impl fmt::Display for SignatureRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for SignatureRole {
    type Error = ParseSignatureRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "created" => Ok(Self::Created),
            "updated" => Ok(Self::Updated),
            "deleted" => Ok(Self::Deleted),
            _ => Err(ParseSignatureRoleError(value.to_owned())),
        }
    }
}
