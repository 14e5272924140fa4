//! Weekly mentor scheduling.
//!
//! Mentors declare the weekday slots they can cover; the engine places each
//! of them in one block of consecutive half-hour slots, Team Leads first,
//! while keeping every slot under the staffing and major-diversity limits.
//! A validator then flags slots that ended up under- or over-staffed.
//!
//! ```text
//! roster -> AvailabilityIndex -> engine (greedy, first fit) -> Schedule
//!                                                           -> validator -> issues
//! ```

pub mod display;
pub mod error;
pub mod roster;
pub mod schedule;
pub mod seed;

pub use error::{RosterError, RosterResult};
pub use roster::{load_roster, Availability, Major, Mentor, Tier};
pub use schedule::{generate_schedule, generate_schedule_with_policy, Schedule, ScheduleOutcome, SchedulePolicy};
