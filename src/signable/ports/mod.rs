//! Port contracts for actor stamping.
//!
//! Ports describe what the behaviour needs from its host: mapped records,
//! the acting principal, a schema catalog and a configuration source.

pub mod actor;
pub mod catalog;
pub mod config;
pub mod record;

pub use actor::{Actor, ActorError, ActorResult};
pub use catalog::{CatalogError, CatalogResult, SchemaCatalog};
pub use config::ConfigurationProvider;
pub use record::{RecordError, RecordResult, Setter, SetterMap, SignableRecord};
