use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::slot_utils::{TimeSlot, Weekday, CATALOG};
use crate::roster::{Major, Tier};

/// A mentor's snapshot stored in a schedule slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub mentor_id: String,
    pub name: String,
    pub major: Major,
    pub tier: Tier,
}

/// Weekly schedule: weekday -> slot -> assigned mentors
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schedule {
    days: BTreeMap<Weekday, BTreeMap<TimeSlot, Vec<Assignment>>>,
}

impl Schedule {
    /// Every weekday/slot pair present with no mentors assigned
    pub fn empty() -> Self {
        let days: BTreeMap<Weekday, BTreeMap<TimeSlot, Vec<Assignment>>> = Weekday::ALL
            .into_iter()
            .map(|day| (day, CATALOG.iter().map(|&slot| (slot, Vec::new())).collect()))
            .collect();
        Self { days }
    }

    pub fn assigned(&self, day: Weekday, slot: TimeSlot) -> &[Assignment] {
        self.days
            .get(&day)
            .and_then(|slots| slots.get(&slot))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub(crate) fn push(&mut self, day: Weekday, slot: TimeSlot, assignment: Assignment) {
        self.days
            .entry(day)
            .or_default()
            .entry(slot)
            .or_default()
            .push(assignment);
    }

    /// All weekday/slot pairs in weekday order, then catalog order
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, TimeSlot, &[Assignment])> {
        self.days.iter().flat_map(|(&day, slots)| {
            slots
                .iter()
                .map(move |(&slot, assigned)| (day, slot, assigned.as_slice()))
        })
    }

    /// Slots a mentor was assigned to
    pub fn slots_of(&self, mentor_id: &str) -> Vec<(Weekday, TimeSlot)> {
        self.iter()
            .filter(|(_, _, assigned)| assigned.iter().any(|a| a.mentor_id == mentor_id))
            .map(|(day, slot, _)| (day, slot))
            .collect()
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::empty()
    }
}

/// A weekday/slot whose staffing falls outside the allowed range
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub day: Weekday,
    pub slot: TimeSlot,
    pub assigned: usize,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {} mentors assigned", self.day, self.slot, self.assigned)
    }
}

/// What happened to one mentor during generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PlacementStatus {
    Placed { day: Weekday, slots: Vec<TimeSlot> },
    /// No declared day holds a full run of consecutive declared slots
    NoEligibleAvailability,
    /// Eligible runs existed but all were full or over the major limit
    Blocked,
}

impl PlacementStatus {
    pub fn is_placed(&self) -> bool {
        matches!(self, PlacementStatus::Placed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MentorPlacement {
    pub mentor_id: String,
    pub name: String,
    #[serde(flatten)]
    pub status: PlacementStatus,
}

/// Result of one schedule generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleOutcome {
    pub schedule: Schedule,
    pub issues: Vec<Issue>,
    /// One entry per roster mentor, in roster order
    pub placements: Vec<MentorPlacement>,
}

impl ScheduleOutcome {
    /// Staffing issues, or None when every slot is within bounds
    pub fn issues(&self) -> Option<&[Issue]> {
        if self.issues.is_empty() {
            None
        } else {
            Some(&self.issues)
        }
    }

    pub fn unplaced(&self) -> impl Iterator<Item = &MentorPlacement> {
        self.placements.iter().filter(|p| !p.status.is_placed())
    }
}
