//! Schema catalog port: declared column types of mapped tables.

use crate::signable::domain::{ColumnIdentifier, ColumnType};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for schema catalog lookups.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Schema metadata contract.
#[async_trait]
pub trait SchemaCatalog: Send + Sync {
    /// Returns the declared type of `column`.
    ///
    /// Returns `None` when the table has no such column. Column names
    /// compare case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Persistence`] when the metadata source cannot
    /// be read.
    async fn column_type(&self, column: &ColumnIdentifier) -> CatalogResult<Option<ColumnType>>;
}

/// Errors returned by schema catalog implementations.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// Metadata source failure.
    #[error("schema catalog error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CatalogError {
    /// Wraps a metadata source error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
