//! HTTP handlers for cafe-service.

pub mod cafe;
pub mod health;

pub use cafe::list_cafes;
pub use health::{health_check, readiness_check};
