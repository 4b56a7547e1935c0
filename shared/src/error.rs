//! Reject model for the back-office core
//!
//! Every rejected mutation surfaces a stable reason code so callers can tell
//! "created" from "rejected" instead of silently observing no state change.
//! Unknown-id lookups stay sentinels (`Option` / no-op `false`), not errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a create/add request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectReason {
    /// Name missing or whitespace-only
    #[error("name must not be empty")]
    EmptyName,

    /// Price must be strictly positive
    #[error("price must be greater than zero")]
    NonPositivePrice,

    /// An order needs at least one selected item
    #[error("order selection is empty")]
    EmptySelection,
}

impl RejectReason {
    /// Get the stable reason code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyName => "EMPTY_NAME",
            Self::NonPositivePrice => "NON_POSITIVE_PRICE",
            Self::EmptySelection => "EMPTY_SELECTION",
        }
    }
}

/// Result type for core mutations
pub type CoreResult<T> = Result<T, RejectReason>;
