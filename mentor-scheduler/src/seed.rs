//! Synthetic rosters for demos and load testing.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::roster::{Availability, Major, Mentor, Tier};
use crate::schedule::slot_utils::{Weekday, CATALOG, SLOTS_PER_DAY};

/// Builds `count` mentors, the first `team_leads` of them Team Leads.
///
/// Each mentor declares two random weekdays (rarely one), each with a run of
/// three consecutive slots (rarely six). Majors are drawn uniformly. The same
/// seed always yields the same roster.
pub fn generate_roster(count: usize, team_leads: usize, seed: u64) -> Vec<Mentor> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|i| {
            let tier = if i < team_leads {
                Tier::TeamLead
            } else {
                Tier::PeerMentor
            };
            let major = Major::ALL[rng.gen_range(0..Major::ALL.len())];

            let days_count = if rng.gen_bool(0.99) { 2 } else { 1 };
            let mut days = Weekday::ALL.to_vec();
            days.shuffle(&mut rng);
            days.truncate(days_count);

            let availability = days
                .into_iter()
                .map(|day| {
                    let len = if rng.gen_bool(0.99) { 3 } else { 6 };
                    let start = rng.gen_range(0..=SLOTS_PER_DAY - len);
                    Availability {
                        day,
                        slots: CATALOG[start..start + len].to_vec(),
                    }
                })
                .collect();

            Mentor {
                id: format!("mentor-{}", i + 1),
                name: format!("Mentor{} User{}", i + 1, i + 1),
                major,
                tier,
                availability,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_roster() {
        assert_eq!(generate_roster(30, 5, 42), generate_roster(30, 5, 42));
    }

    #[test]
    fn team_leads_come_first() {
        let roster = generate_roster(12, 4, 7);
        assert_eq!(roster.len(), 12);
        assert!(roster[..4].iter().all(|m| m.tier == Tier::TeamLead));
        assert!(roster[4..].iter().all(|m| m.tier == Tier::PeerMentor));
    }

    #[test]
    fn availability_is_consecutive_and_on_distinct_days() {
        for mentor in generate_roster(50, 10, 2024) {
            assert!(!mentor.availability.is_empty() && mentor.availability.len() <= 2);
            if let [a, b] = mentor.availability.as_slice() {
                assert_ne!(a.day, b.day);
            }
            for entry in &mentor.availability {
                assert!(entry.slots.len() == 3 || entry.slots.len() == 6);
                for pair in entry.slots.windows(2) {
                    assert_eq!(pair[0].index() + 1, pair[1].index());
                }
            }
        }
    }
}
