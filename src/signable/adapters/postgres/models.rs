//! Diesel row models for `information_schema` queries.

use diesel::prelude::*;

/// Declared type of one column, as listed by `information_schema.columns`.
#[derive(Debug, Clone, QueryableByName)]
pub struct ColumnTypeRow {
    /// SQL type name, for example `integer` or `character varying`.
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub data_type: String,
}
