//! Actor stamping for mapped records.
//!
//! The behaviour writes the acting user into configured audit columns when a
//! record is created, updated or deleted. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Lifecycle hook services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
