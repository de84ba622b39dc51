//! Application services for actor stamping.

mod behavior;
mod config;
mod error;
mod latch;

pub use behavior::SignableBehavior;
pub use config::load_class_config;
pub use error::{SignableError, SignableResult};
pub use latch::SuppressionLatch;
