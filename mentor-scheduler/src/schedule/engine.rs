use std::collections::HashMap;
use std::iter;

use tracing::{debug, info};

use super::availability::AvailabilityIndex;
use super::policy::SchedulePolicy;
use super::slot_utils::{TimeSlot, Weekday};
use super::types::{Assignment, MentorPlacement, PlacementStatus, Schedule, ScheduleOutcome};
use super::validator::validate_schedule;
use crate::roster::{Major, Mentor};

/// A run of slots the search settled on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub day: Weekday,
    pub slots: &'static [TimeSlot],
}

/// Generates a weekly schedule with the default policy
pub fn generate_schedule(mentors: &[Mentor]) -> ScheduleOutcome {
    generate_schedule_with_policy(mentors, &SchedulePolicy::default())
}

/// Places every mentor in one greedy pass, then validates staffing.
///
/// Team Leads go first; within a tier the roster order is kept. Each mentor
/// gets the first feasible run in declaration order, or nothing.
pub fn generate_schedule_with_policy(mentors: &[Mentor], policy: &SchedulePolicy) -> ScheduleOutcome {
    let mut schedule = Schedule::empty();
    let mut statuses = vec![PlacementStatus::NoEligibleAvailability; mentors.len()];

    for idx in priority_order(mentors) {
        let mentor = &mentors[idx];
        let index = AvailabilityIndex::new(&mentor.availability);

        statuses[idx] = match find_placement(&schedule, &index, mentor.major, policy) {
            Some(placement) => {
                commit(&mut schedule, placement, &mentor.assignment());
                debug!(
                    mentor = %mentor.id,
                    day = %placement.day,
                    start = %placement.slots[0],
                    "mentor placed"
                );
                PlacementStatus::Placed {
                    day: placement.day,
                    slots: placement.slots.to_vec(),
                }
            }
            None if index.has_candidates(policy.slots_per_mentor) => {
                debug!(mentor = %mentor.id, "every declared run is full or over the major limit");
                PlacementStatus::Blocked
            }
            None => {
                debug!(mentor = %mentor.id, "no declared run of consecutive slots");
                PlacementStatus::NoEligibleAvailability
            }
        };
    }

    let issues = validate_schedule(&schedule, policy);
    let placements: Vec<MentorPlacement> = mentors
        .iter()
        .zip(statuses)
        .map(|(mentor, status)| MentorPlacement {
            mentor_id: mentor.id.clone(),
            name: mentor.name.clone(),
            status,
        })
        .collect();

    info!(
        mentors = mentors.len(),
        placed = placements.iter().filter(|p| p.status.is_placed()).count(),
        issues = issues.len(),
        "schedule generated"
    );

    ScheduleOutcome {
        schedule,
        issues,
        placements,
    }
}

/// Roster indices with Team Leads first. The sort is stable, so ties keep
/// roster order.
pub fn priority_order(mentors: &[Mentor]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..mentors.len()).collect();
    order.sort_by_key(|&idx| mentors[idx].tier);
    order
}

/// First run, in declaration order, that every slot of can take the mentor
pub fn find_placement(
    schedule: &Schedule,
    index: &AvailabilityIndex,
    major: Major,
    policy: &SchedulePolicy,
) -> Option<Placement> {
    index
        .candidate_runs(policy.slots_per_mentor)
        .find(|&(day, run)| {
            run.iter()
                .all(|&slot| can_join(schedule.assigned(day, slot), major, policy))
        })
        .map(|(day, slots)| Placement { day, slots })
}

/// Whether a mentor of `major` fits next to `occupants` in one slot.
///
/// Major counts are rebuilt from the occupant list on every call.
pub fn can_join(occupants: &[Assignment], major: Major, policy: &SchedulePolicy) -> bool {
    if occupants.len() >= policy.max_per_slot {
        return false;
    }

    let mut counts: HashMap<Major, usize> = HashMap::new();
    for m in occupants.iter().map(|a| a.major).chain(iter::once(major)) {
        *counts.entry(m).or_insert(0) += 1;
    }
    counts.values().all(|&count| count <= policy.max_same_major)
}

/// Appends the mentor's snapshot to every slot of the run
pub fn commit(schedule: &mut Schedule, placement: Placement, assignment: &Assignment) {
    for &slot in placement.slots {
        schedule.push(placement.day, slot, assignment.clone());
    }
}
