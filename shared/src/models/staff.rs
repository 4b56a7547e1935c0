//! Staff Model

use serde::{Deserialize, Serialize};

/// Staff role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StaffRole {
    Chef,
    Server,
    Cashier,
    Manager,
}

/// Work shift slot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StaffShift {
    Morning,
    Afternoon,
    Evening,
}

/// Staff member entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StaffMember {
    pub id: i64,
    pub name: String,
    pub role: StaffRole,
    pub shift: StaffShift,
    /// Scheduled days, display-only
    #[serde(default)]
    pub schedule: Vec<String>,
}

/// Create staff member payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffMemberCreate {
    pub name: String,
    pub role: StaffRole,
    pub shift: StaffShift,
    #[serde(default)]
    pub schedule: Vec<String>,
}
