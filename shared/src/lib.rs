//! Shared types for the Cafeteria Planner back office
//!
//! Data models, reject codes, and id/time utilities used by the
//! back-office managers.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{CoreResult, RejectReason};
pub use serde::{Deserialize, Serialize};
