//! Step definitions for signable hook scenarios.

pub mod world;
