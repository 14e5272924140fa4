use super::slot_utils::{consecutive_run, TimeSlot, Weekday};
use crate::roster::Availability;

/// One declared day with its slots sorted into catalog order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayAvailability {
    pub day: Weekday,
    slots: Vec<TimeSlot>,
}

impl DayAvailability {
    pub fn new(entry: &Availability) -> Self {
        let mut slots = entry.slots.clone();
        slots.sort();
        slots.dedup();
        Self {
            day: entry.day,
            slots,
        }
    }

    pub fn contains(&self, slot: TimeSlot) -> bool {
        self.slots.binary_search(&slot).is_ok()
    }

    /// Runs of `len` catalog slots that start at a declared slot and are fully
    /// declared, in ascending start order
    pub fn candidate_runs(&self, len: usize) -> impl Iterator<Item = &'static [TimeSlot]> + '_ {
        let starts = if len == 0 || self.slots.len() < len {
            &self.slots[..0]
        } else {
            &self.slots[..=self.slots.len() - len]
        };
        starts
            .iter()
            .map(move |&start| consecutive_run(start, len))
            .filter(move |run| run.len() == len && run.iter().all(|&slot| self.contains(slot)))
    }
}

/// A mentor's availability normalized for run lookups.
///
/// Entries keep the order the mentor declared them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityIndex {
    entries: Vec<DayAvailability>,
}

impl AvailabilityIndex {
    pub fn new(availability: &[Availability]) -> Self {
        Self {
            entries: availability.iter().map(DayAvailability::new).collect(),
        }
    }

    /// Every candidate run across all entries, entry by entry
    pub fn candidate_runs(&self, len: usize) -> impl Iterator<Item = (Weekday, &'static [TimeSlot])> + '_ {
        self.entries
            .iter()
            .flat_map(move |entry| entry.candidate_runs(len).map(move |run| (entry.day, run)))
    }

    /// True when at least one full run is declared somewhere in the week
    pub fn has_candidates(&self, len: usize) -> bool {
        self.candidate_runs(len).next().is_some()
    }
}
