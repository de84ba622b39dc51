//! `PostgreSQL` schema catalog reading `information_schema.columns`.

use super::models::ColumnTypeRow;
use crate::signable::{
    domain::{ColumnIdentifier, ColumnType},
    ports::{CatalogError, CatalogResult, SchemaCatalog},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by the catalog.
pub type CatalogPgPool = Pool<ConnectionManager<PgConnection>>;

/// Schema catalog backed by the `PostgreSQL` information schema.
///
/// Table and column names match case-insensitively; when quoted identifiers
/// differ only by case, the exact spelling wins.
#[derive(Debug, Clone)]
pub struct PostgresSchemaCatalog {
    pool: CatalogPgPool,
    schema: String,
}

impl PostgresSchemaCatalog {
    /// Schema searched when none is configured.
    pub const DEFAULT_SCHEMA: &'static str = "public";

    /// Creates a catalog over the `public` schema.
    #[must_use]
    pub fn new(pool: CatalogPgPool) -> Self {
        Self {
            pool,
            schema: Self::DEFAULT_SCHEMA.to_owned(),
        }
    }

    /// Searches `schema` instead of `public`.
    #[must_use]
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    async fn run_blocking<F, T>(&self, f: F) -> CatalogResult<T>
    where
        F: FnOnce(&mut PgConnection) -> CatalogResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(CatalogError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(CatalogError::persistence)?
    }
}

#[async_trait]
impl SchemaCatalog for PostgresSchemaCatalog {
    async fn column_type(&self, column: &ColumnIdentifier) -> CatalogResult<Option<ColumnType>> {
        let schema = self.schema.clone();
        let table = column.table().as_str().to_owned();
        let name = column.column().to_owned();

        self.run_blocking(move |connection| {
            let row = diesel::sql_query(concat!(
                "SELECT data_type FROM information_schema.columns ",
                "WHERE table_schema = $1 ",
                "AND lower(table_name) = lower($2) ",
                "AND lower(column_name) = lower($3) ",
                "ORDER BY table_name = $2 DESC, column_name = $3 DESC ",
                "LIMIT 1",
            ))
            .bind::<diesel::sql_types::Text, _>(schema)
            .bind::<diesel::sql_types::Text, _>(table)
            .bind::<diesel::sql_types::Text, _>(name)
            .get_result::<ColumnTypeRow>(connection)
            .optional()
            .map_err(CatalogError::persistence)?;

            Ok(row.map(|found| ColumnType::from_sql_name(&found.data_type)))
        })
        .await
    }
}
