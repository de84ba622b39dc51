//! Domain model for actor stamping.
//!
//! The domain describes audit roles, column identifiers and their declared
//! types, per-class configuration, and the values written into records. It
//! carries no knowledge of the host ORM or of any persistence engine.

mod column;
mod config;
mod context;
mod error;
mod role;
mod value;

pub use column::{ColumnIdentifier, ColumnType, TableName};
pub use config::{
    CONFIG_NAMESPACE, ColumnRoleMapping, DISPLAY_ACCESSOR, ID_ACCESSOR, SignableClassConfig,
    UserInfoMapping, columns_key, user_methods_key,
};
pub use context::{HookContext, HookOutcome};
pub use error::{ParseSignatureRoleError, SignableDomainError, StampValueError};
pub use role::SignatureRole;
pub use value::{RepresentationKind, StampValue};
