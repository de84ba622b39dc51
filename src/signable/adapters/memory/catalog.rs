//! In-memory schema catalog for tests and statically described schemas.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::signable::{
    domain::{ColumnIdentifier, ColumnType},
    ports::{CatalogResult, SchemaCatalog},
};

/// Schema catalog backed by a static table of column declarations.
#[derive(Debug, Clone, Default)]
pub struct InMemorySchemaCatalog {
    columns: HashMap<CatalogKey, ColumnType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CatalogKey {
    table: String,
    column: String,
}

impl CatalogKey {
    fn new(table: &str, column: &str) -> Self {
        Self {
            table: table.to_owned(),
            column: column.to_uppercase(),
        }
    }
}

impl InMemorySchemaCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `column` of `table` with the given type.
    #[must_use]
    pub fn with_column(mut self, table: &str, column: &str, column_type: ColumnType) -> Self {
        self.columns
            .insert(CatalogKey::new(table, column), column_type);
        self
    }
}

#[async_trait]
impl SchemaCatalog for InMemorySchemaCatalog {
    async fn column_type(&self, column: &ColumnIdentifier) -> CatalogResult<Option<ColumnType>> {
        let key = CatalogKey::new(column.table().as_str(), column.column());
        Ok(self.columns.get(&key).cloned())
    }
}
