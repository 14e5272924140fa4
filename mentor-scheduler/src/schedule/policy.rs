use serde::{Deserialize, Serialize};

/// Mentors are placed in blocks of this many consecutive slots
pub const SLOTS_PER_MENTOR: usize = 3;
/// At most this many mentors of one major may share a slot
pub const MAX_SAME_MAJOR: usize = 2;
pub const MIN_PER_SLOT: usize = 2;
/// Staffing the report marks as ideal
pub const TARGET_PER_SLOT: usize = 3;
pub const MAX_PER_SLOT: usize = 4;

/// Staffing and diversity limits used by the engine and the validator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePolicy {
    pub slots_per_mentor: usize,
    pub max_same_major: usize,
    pub min_per_slot: usize,
    pub target_per_slot: usize,
    pub max_per_slot: usize,
}

impl Default for SchedulePolicy {
    fn default() -> Self {
        Self {
            slots_per_mentor: SLOTS_PER_MENTOR,
            max_same_major: MAX_SAME_MAJOR,
            min_per_slot: MIN_PER_SLOT,
            target_per_slot: TARGET_PER_SLOT,
            max_per_slot: MAX_PER_SLOT,
        }
    }
}

impl SchedulePolicy {
    /// True when `count` mentors is outside [min_per_slot, max_per_slot]
    pub fn is_misstaffed(&self, count: usize) -> bool {
        count < self.min_per_slot || count > self.max_per_slot
    }
}
