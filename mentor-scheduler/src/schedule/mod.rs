pub mod types;
pub mod slot_utils;
pub mod policy;
pub mod availability;
pub mod engine;
pub mod validator;

pub use types::{Assignment, Issue, MentorPlacement, PlacementStatus, Schedule, ScheduleOutcome};
pub use slot_utils::{consecutive_run, TimeSlot, Weekday, CATALOG};
pub use policy::SchedulePolicy;
pub use availability::AvailabilityIndex;
pub use engine::{generate_schedule, generate_schedule_with_policy};
pub use validator::validate_schedule;
