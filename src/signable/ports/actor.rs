//! Actor port: the principal an operation is attributed to.

use crate::signable::domain::{DISPLAY_ACCESSOR, ID_ACCESSOR, StampValue};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for actor lookups.
pub type ActorResult<T> = Result<T, ActorError>;

/// The acting principal.
///
/// Implementors provide a numeric identifier and a display string. Accessor
/// names other than [`ID_ACCESSOR`] and [`DISPLAY_ACCESSOR`] configured for
/// a class are served by [`Actor::representation`].
pub trait Actor: fmt::Display {
    /// Returns the actor's numeric identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError`] when the actor has no identity, for example an
    /// anonymous session.
    fn id(&self) -> ActorResult<i64>;

    /// Resolves a custom accessor.
    ///
    /// The default implementation knows no custom accessors.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::UnknownAccessor`] for accessors the actor does
    /// not provide.
    fn representation(&self, accessor: &str) -> ActorResult<StampValue> {
        Err(ActorError::UnknownAccessor(accessor.to_owned()))
    }

    /// Dispatches an accessor name to the matching representation.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`Actor::id`] and [`Actor::representation`].
    fn info(&self, accessor: &str) -> ActorResult<StampValue> {
        match accessor {
            ID_ACCESSOR => self.id().map(StampValue::Id),
            DISPLAY_ACCESSOR => Ok(StampValue::Text(self.to_string())),
            custom => self.representation(custom),
        }
    }
}

/// Errors raised while extracting actor representations.
#[derive(Debug, Clone, Error)]
pub enum ActorError {
    /// The actor does not provide the requested accessor.
    #[error("actor has no accessor named '{0}'")]
    UnknownAccessor(String),

    /// The actor carries no identity.
    #[error("actor has no identity")]
    MissingIdentity,

    /// The host failed to look the actor up.
    #[error("actor lookup failed: {0}")]
    Lookup(Arc<dyn std::error::Error + Send + Sync>),
}

impl ActorError {
    /// Wraps a host lookup error.
    pub fn lookup(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Lookup(Arc::new(err))
    }
}
