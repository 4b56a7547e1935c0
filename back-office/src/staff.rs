//! Staff roster - the staff schedule screen's collection
//!
//! Minimal collection contract: add/remove by identity plus a shift filter
//! for the schedule view.

use shared::error::{CoreResult, RejectReason};
use shared::models::{StaffMember, StaffMemberCreate, StaffShift};
use shared::util::snowflake_id;

/// Staff roster manager (insertion-ordered)
#[derive(Debug, Clone, Default)]
pub struct StaffRoster {
    members: Vec<StaffMember>,
}

impl StaffRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a staff member; rejects an empty name, nothing mutated on rejection.
    pub fn add_member(&mut self, data: StaffMemberCreate) -> CoreResult<StaffMember> {
        let name = data.name.trim();
        if name.is_empty() {
            return Err(RejectReason::EmptyName);
        }

        let member = StaffMember {
            id: snowflake_id(),
            name: name.to_string(),
            role: data.role,
            shift: data.shift,
            schedule: data.schedule,
        };
        self.members.push(member.clone());
        Ok(member)
    }

    /// Remove a member by id; no-op returning `false` when absent.
    pub fn remove_member(&mut self, id: i64) -> bool {
        let before = self.members.len();
        self.members.retain(|member| member.id != id);
        self.members.len() != before
    }

    /// Members working the given shift, in insertion order
    pub fn on_shift(&self, shift: StaffShift) -> Vec<&StaffMember> {
        self.members
            .iter()
            .filter(|member| member.shift == shift)
            .collect()
    }

    /// Members in insertion order
    pub fn members(&self) -> &[StaffMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
