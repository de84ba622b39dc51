//! `PostgreSQL` adapters for schema introspection.

mod catalog;
mod models;

pub use catalog::{CatalogPgPool, PostgresSchemaCatalog};
