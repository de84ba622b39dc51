//! Adapter implementations of the signable ports.

pub mod memory;
pub mod postgres;
