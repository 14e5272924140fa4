use tracing::debug;

use super::policy::SchedulePolicy;
use super::types::{Issue, Schedule};

/// Lists every weekday/slot whose staffing is outside the policy bounds,
/// in weekday then catalog order. The schedule is left untouched.
pub fn validate_schedule(schedule: &Schedule, policy: &SchedulePolicy) -> Vec<Issue> {
    let issues: Vec<Issue> = schedule
        .iter()
        .filter(|(_, _, assigned)| policy.is_misstaffed(assigned.len()))
        .map(|(day, slot, assigned)| Issue {
            day,
            slot,
            assigned: assigned.len(),
        })
        .collect();

    debug!(issues = issues.len(), "schedule validated");
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{Major, Tier};
    use crate::schedule::slot_utils::{Weekday, CATALOG};
    use crate::schedule::types::Assignment;

    fn fill(schedule: &mut Schedule, day: Weekday, slot: usize, count: usize) {
        for i in 0..count {
            schedule.push(
                day,
                CATALOG[slot],
                Assignment {
                    mentor_id: format!("m{i}"),
                    name: format!("Mentor {i}"),
                    major: Major::Other,
                    tier: Tier::PeerMentor,
                },
            );
        }
    }

    fn fully_staffed() -> Schedule {
        let mut schedule = Schedule::empty();
        for day in Weekday::ALL {
            for slot in 0..CATALOG.len() {
                fill(&mut schedule, day, slot, 2);
            }
        }
        schedule
    }

    #[test]
    fn empty_schedule_reports_every_slot() {
        let issues = validate_schedule(&Schedule::empty(), &SchedulePolicy::default());
        assert_eq!(issues.len(), 60);
        assert_eq!(issues[0].to_string(), "Monday 10:00-10:30: 0 mentors assigned");
        assert_eq!(issues[59].to_string(), "Friday 15:30-16:00: 0 mentors assigned");
    }

    #[test]
    fn bounds_are_inclusive() {
        let mut schedule = fully_staffed();
        fill(&mut schedule, Weekday::Tuesday, 3, 2);
        assert!(validate_schedule(&schedule, &SchedulePolicy::default()).is_empty());
    }

    #[test]
    fn over_and_under_staffing_are_both_reported() {
        let mut schedule = fully_staffed();
        fill(&mut schedule, Weekday::Wednesday, 7, 3);
        let mut thin = Schedule::empty();
        fill(&mut thin, Weekday::Monday, 0, 1);

        let over = validate_schedule(&schedule, &SchedulePolicy::default());
        assert_eq!(
            over,
            vec![Issue {
                day: Weekday::Wednesday,
                slot: CATALOG[7],
                assigned: 5,
            }]
        );

        let under = validate_schedule(&thin, &SchedulePolicy::default());
        assert_eq!(under[0].assigned, 1);
    }
}
