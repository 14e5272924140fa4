use std::io::{self, Write};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::schedule::{
    Assignment, MentorPlacement, PlacementStatus, Schedule, ScheduleOutcome, SchedulePolicy, Weekday, CATALOG,
};
use crate::roster::Tier;

/// Formats a mentor name with a marker for Team Leads
pub fn format_mentor_name(assignment: &Assignment) -> String {
    match assignment.tier {
        Tier::TeamLead => format!("[TL] {}", assignment.name),
        Tier::PeerMentor => assignment.name.clone(),
    }
}

/// Writes the schedule, unplaced mentors and issues as plain text
pub fn write_report<W: Write>(
    out: &mut W,
    outcome: &ScheduleOutcome,
    policy: &SchedulePolicy,
) -> io::Result<()> {
    for day in Weekday::ALL {
        write_day(out, day, &outcome.schedule, policy)?;
    }

    let unplaced: Vec<&MentorPlacement> = outcome.unplaced().collect();
    if !unplaced.is_empty() {
        writeln!(out, "\nUnplaced mentors ({}):", unplaced.len())?;
        for placement in unplaced {
            let reason = match placement.status {
                PlacementStatus::Blocked => "all declared runs full or over the major limit",
                _ => "no run of consecutive available slots",
            };
            writeln!(out, "  - {} (ID: {}): {}", placement.name, placement.mentor_id, reason)?;
        }
    }

    match outcome.issues() {
        Some(issues) => {
            writeln!(out, "\nSchedule generated with issues ({}):", issues.len())?;
            for issue in issues {
                writeln!(out, "  - {issue}")?;
            }
        }
        None => writeln!(out, "\nSchedule generated successfully")?,
    }

    Ok(())
}

fn write_day<W: Write>(out: &mut W, day: Weekday, schedule: &Schedule, policy: &SchedulePolicy) -> io::Result<()> {
    writeln!(out, "\n=== {day} ===")?;
    for slot in CATALOG {
        let assigned = schedule.assigned(day, slot);
        let marker = if policy.is_misstaffed(assigned.len()) {
            "!"
        } else if assigned.len() == policy.target_per_slot {
            "*"
        } else {
            " "
        };

        if assigned.is_empty() {
            writeln!(out, "{marker} {slot} (0/{}) [EMPTY]", policy.max_per_slot)?;
        } else {
            let names: Vec<String> = assigned
                .iter()
                .map(|a| format!("{} ({})", format_mentor_name(a), a.major))
                .collect();
            writeln!(
                out,
                "{marker} {slot} ({}/{}) {}",
                assigned.len(),
                policy.max_per_slot,
                names.join(", ")
            )?;
        }
    }
    Ok(())
}

/// Machine-readable form of one generation run
#[derive(Debug, Serialize)]
pub struct ScheduleReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub policy: &'a SchedulePolicy,
    pub schedule: &'a Schedule,
    pub issues: Option<Vec<String>>,
    pub placements: &'a [MentorPlacement],
}

impl<'a> ScheduleReport<'a> {
    pub fn new(outcome: &'a ScheduleOutcome, policy: &'a SchedulePolicy, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            policy,
            schedule: &outcome.schedule,
            issues: outcome
                .issues()
                .map(|issues| issues.iter().map(ToString::to_string).collect()),
            placements: &outcome.placements,
        }
    }
}
