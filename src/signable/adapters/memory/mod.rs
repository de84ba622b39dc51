//! In-memory catalog and configuration adapters.

mod catalog;
mod configuration;

pub use catalog::InMemorySchemaCatalog;
pub use configuration::StaticConfiguration;
