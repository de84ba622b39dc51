//! Signable: stamps mapped records with the user acting on them.
//!
//! This crate provides a lifecycle hook for object-relational mapping layers.
//! Before a record is persisted or deleted, the hook resolves the column
//! configured for the audit role at hand (created, updated or deleted), checks
//! its declared type, and writes either the actor identifier or the actor
//! display string into it.
//!
//! # Architecture
//!
//! Signable follows hexagonal architecture principles:
//!
//! - **Domain**: Roles, column identifiers, configuration and hook outcomes
//! - **Ports**: Abstract trait interfaces for records, actors, schema
//!   catalogs and configuration sources
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`signable`]: Registration and the `before_save` / `before_delete` hooks

pub mod signable;
