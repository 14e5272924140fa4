use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::RosterError;

/// Start of the first slot, in minutes since midnight (10:00)
pub const DAY_START_MINUTES: u32 = 10 * 60;
/// Length of every slot in minutes
pub const SLOT_MINUTES: u32 = 30;
/// Number of slots in the daily catalog (10:00 to 16:00)
pub const SLOTS_PER_DAY: usize = 12;

/// Weekdays mentors can be scheduled on, in schedule order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Weekday::ALL
            .into_iter()
            .find(|day| day.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RosterError::UnknownWeekday(trimmed.to_string()))
    }
}

/// A half-hour slot from the daily catalog.
///
/// The wrapped value is the slot's position in [`CATALOG`], so ordering
/// follows the catalog and adjacent indices are consecutive slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot(u8);

/// The daily slot catalog, identical for every weekday
pub static CATALOG: [TimeSlot; SLOTS_PER_DAY] = [
    TimeSlot(0),
    TimeSlot(1),
    TimeSlot(2),
    TimeSlot(3),
    TimeSlot(4),
    TimeSlot(5),
    TimeSlot(6),
    TimeSlot(7),
    TimeSlot(8),
    TimeSlot(9),
    TimeSlot(10),
    TimeSlot(11),
];

impl TimeSlot {
    pub fn from_index(index: usize) -> Option<Self> {
        CATALOG.get(index).copied()
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn start_minutes(self) -> u32 {
        DAY_START_MINUTES + u32::from(self.0) * SLOT_MINUTES
    }

    /// Formats the slot the way availability is submitted, e.g. "10:00-10:30"
    pub fn label(self) -> String {
        let start = self.start_minutes();
        format!(
            "{}-{}",
            minutes_to_time_string(start),
            minutes_to_time_string(start + SLOT_MINUTES)
        )
    }

    /// Parses a label such as "10:00-10:30" back to its catalog slot.
    /// Returns None for anything that is not exactly one catalog slot.
    pub fn from_label(label: &str) -> Option<Self> {
        let (start, end) = label.trim().split_once('-')?;
        let start = parse_time_to_minutes(start.trim())?;
        let end = parse_time_to_minutes(end.trim())?;
        if start < DAY_START_MINUTES || end != start + SLOT_MINUTES {
            return None;
        }
        let offset = start - DAY_START_MINUTES;
        if offset % SLOT_MINUTES != 0 {
            return None;
        }
        Self::from_index((offset / SLOT_MINUTES) as usize)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for TimeSlot {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeSlot::from_label(s).ok_or_else(|| RosterError::UnknownSlot(s.trim().to_string()))
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        TimeSlot::from_label(&label)
            .ok_or_else(|| de::Error::custom(format!("unknown slot label: {label}")))
    }
}

/// Parses a time string (HH:MM) to minutes since midnight
pub fn parse_time_to_minutes(time_str: &str) -> Option<u32> {
    let (hours, minutes) = time_str.split_once(':')?;
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    if hours >= 24 || minutes >= 60 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Formats minutes since midnight to time string (HH:MM)
pub fn minutes_to_time_string(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    format!("{:02}:{:02}", hours % 24, mins)
}

/// Returns up to `count` consecutive catalog slots beginning at `start`.
///
/// The run comes from the global catalog, not from any mentor's declared
/// slots. When the catalog ends first the slice is short (possibly empty),
/// so callers must check its length.
pub fn consecutive_run(start: TimeSlot, count: usize) -> &'static [TimeSlot] {
    let from = start.index();
    let to = from.saturating_add(count).min(SLOTS_PER_DAY);
    &CATALOG[from..to]
}
