use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::{info, warn};

use super::{Availability, Major, Mentor, Tier};
use crate::error::{RosterError, RosterResult};
use crate::schedule::slot_utils::{TimeSlot, Weekday};

/// One line of a roster export
#[derive(Debug, Deserialize)]
struct RosterRow {
    id: String,
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    role: String,
    #[serde(default)]
    user_role: String,
    major: String,
    #[serde(default)]
    availability: String,
}

/// Loads a roster, picking the format from the file extension.
/// `.json` files are read as JSON, everything else as CSV.
pub fn load_roster<P: AsRef<Path>>(path: P) -> RosterResult<Vec<Mentor>> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let mentors = if is_json {
        load_roster_json(path)?
    } else {
        load_roster_csv(path)?
    };
    info!(path = %path.display(), mentors = mentors.len(), "roster loaded");
    Ok(mentors)
}

/// Loads a JSON array of mentors
pub fn load_roster_json<P: AsRef<Path>>(path: P) -> RosterResult<Vec<Mentor>> {
    let reader = BufReader::new(File::open(path)?);
    let mentors: Vec<Mentor> = serde_json::from_reader(reader)?;
    for (idx, mentor) in mentors.iter().enumerate() {
        check_availability(&mentor.availability).map_err(|e| e.at_row(idx + 1))?;
    }
    Ok(dedup_by_id(mentors))
}

/// Loads a CSV roster export
pub fn load_roster_csv<P: AsRef<Path>>(path: P) -> RosterResult<Vec<Mentor>> {
    read_roster_csv(File::open(path)?)
}

/// Reads a CSV roster with the columns
/// `id,first_name,last_name,role,user_role,major,availability`.
///
/// Admin rows are skipped. Availability looks like
/// `Monday: 10:00-10:30, 10:30-11:00 | Wednesday: 12:00-12:30`.
pub fn read_roster_csv<R: io::Read>(reader: R) -> RosterResult<Vec<Mentor>> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut mentors = Vec::new();

    for (idx, result) in reader.deserialize::<RosterRow>().enumerate() {
        // Header is line 1
        let line = idx + 2;
        let row = result?;

        if row.role.eq_ignore_ascii_case("admin") {
            continue;
        }
        if row.id.is_empty() || row.first_name.is_empty() {
            warn!(line, "skipping roster row without id or name");
            continue;
        }

        mentors.push(mentor_from_row(row).map_err(|e| e.at_row(line))?);
    }

    Ok(dedup_by_id(mentors))
}

fn mentor_from_row(row: RosterRow) -> RosterResult<Mentor> {
    let name = if row.last_name.is_empty() {
        row.first_name
    } else {
        format!("{} {}", row.first_name, row.last_name)
    };

    Ok(Mentor {
        id: row.id,
        name,
        major: row.major.parse::<Major>()?,
        tier: row.user_role.parse::<Tier>()?,
        availability: parse_availability(&row.availability)?,
    })
}

/// Parses `Day: slot, slot | Day: slot` into availability entries
pub fn parse_availability(text: &str) -> RosterResult<Vec<Availability>> {
    let mut entries = Vec::new();

    for block in text.split('|').map(str::trim).filter(|b| !b.is_empty()) {
        // The day name runs up to the first colon; slot labels carry their own
        let (day, slots) = block
            .split_once(':')
            .filter(|(day, _)| day.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace()))
            .ok_or_else(|| RosterError::MalformedAvailability(block.to_string()))?;
        let day: Weekday = day.parse()?;
        let slots = slots
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse::<TimeSlot>)
            .collect::<RosterResult<Vec<_>>>()?;
        entries.push(Availability { day, slots });
    }

    check_availability(&entries)?;
    Ok(entries)
}

fn check_availability(entries: &[Availability]) -> RosterResult<()> {
    match entries.iter().find(|entry| entry.slots.is_empty()) {
        Some(entry) => Err(RosterError::MalformedAvailability(format!(
            "{} has no slots",
            entry.day
        ))),
        None => Ok(()),
    }
}

/// Later rows for the same id replace earlier ones, keeping the first position
fn dedup_by_id(mentors: Vec<Mentor>) -> Vec<Mentor> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut unique: Vec<Mentor> = Vec::with_capacity(mentors.len());

    for mentor in mentors {
        match positions.get(&mentor.id) {
            Some(&pos) => {
                warn!(id = %mentor.id, "duplicate mentor id, keeping the later entry");
                unique[pos] = mentor;
            }
            None => {
                positions.insert(mentor.id.clone(), unique.len());
                unique.push(mentor);
            }
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::slot_utils::CATALOG;

    const HEADER: &str = "id,first_name,last_name,role,user_role,major,availability\n";

    fn read(body: &str) -> RosterResult<Vec<Mentor>> {
        read_roster_csv(format!("{HEADER}{body}").as_bytes())
    }

    #[test]
    fn parses_availability_blocks() {
        let entries =
            parse_availability("Monday: 10:00-10:30, 10:30-11:00 | Wednesday: 12:00-12:30").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].day, Weekday::Monday);
        assert_eq!(entries[0].slots, CATALOG[0..2].to_vec());
        assert_eq!(entries[1].day, Weekday::Wednesday);
        assert_eq!(entries[1].slots, vec![CATALOG[4]]);
        assert!(parse_availability("").unwrap().is_empty());
    }

    #[test]
    fn rejects_bad_availability() {
        assert!(matches!(
            parse_availability("Monday 10:00-10:30"),
            Err(RosterError::MalformedAvailability(_))
        ));
        assert!(matches!(
            parse_availability("Monday: 10:00-10:30 | Tuesday 11:00-11:30"),
            Err(RosterError::MalformedAvailability(_))
        ));
        assert!(matches!(
            parse_availability("Sunday: 10:00-10:30"),
            Err(RosterError::UnknownWeekday(_))
        ));
        assert!(matches!(
            parse_availability("Monday: 16:00-16:30"),
            Err(RosterError::UnknownSlot(_))
        ));
        assert!(matches!(
            parse_availability("Monday: "),
            Err(RosterError::MalformedAvailability(_))
        ));
    }

    #[test]
    fn reads_mentors_and_skips_admins() {
        let roster = read(concat!(
            "1,Ada,Lovelace,user,Team Lead & Peer Mentor,Mathematics and Statistics,\"Monday: 10:00-10:30, 10:30-11:00, 11:00-11:30\"\n",
            "2,Root,Admin,admin,,,\n",
            "3,Alan,Turing,user,,Computer Science,\"Friday: 15:00-15:30 | Tuesday: 10:00-10:30\"\n",
        ))
        .unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].name, "Ada Lovelace");
        assert_eq!(roster[0].tier, Tier::TeamLead);
        assert_eq!(roster[0].availability[0].slots, CATALOG[0..3].to_vec());
        assert_eq!(roster[1].id, "3");
        assert_eq!(roster[1].tier, Tier::PeerMentor);
        assert_eq!(roster[1].availability[0].day, Weekday::Friday);
    }

    #[test]
    fn errors_carry_the_line_number() {
        let err = read("1,Ada,Lovelace,user,Peer Mentor,Alchemy,\n").unwrap_err();
        match err {
            RosterError::Row { row, source } => {
                assert_eq!(row, 2);
                assert!(matches!(*source, RosterError::UnknownMajor(_)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn later_rows_replace_earlier_ones() {
        let roster = read(concat!(
            "7,Grace,Hopper,user,,Physics,\n",
            "8,Barbara,Liskov,user,,Chemistry,\n",
            "7,Grace,Hopper,user,,Computer Science,\"Monday: 10:00-10:30\"\n",
        ))
        .unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].id, "7");
        assert_eq!(roster[0].major, Major::ComputerScience);
        assert_eq!(roster[0].availability.len(), 1);
    }

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("mentor-scheduler-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn load_roster_picks_format_from_extension() {
        let json = write_temp(
            "dispatch.json",
            r#"[{"id": "1", "name": "Ada", "major": "Other (enter manually below)",
                 "availability": [{"day": "Monday", "slots": ["10:00-10:30"]}]}]"#,
        );
        let csv = write_temp(
            "dispatch.csv",
            &format!("{HEADER}1,Ada,,user,,Other (enter manually below),\"Monday: 10:00-10:30\"\n"),
        );

        let from_json = load_roster(&json).unwrap();
        let from_csv = load_roster(&csv).unwrap();
        std::fs::remove_file(json).unwrap();
        std::fs::remove_file(csv).unwrap();

        assert_eq!(from_json, from_csv);
        assert_eq!(from_json[0].major, Major::Other);
        assert_eq!(from_json[0].availability[0].slots, vec![CATALOG[0]]);
    }

    #[test]
    fn json_roster_reports_the_entry_with_empty_slots() {
        let path = write_temp(
            "empty-slots.json",
            r#"[{"id": "1", "name": "Ada", "major": "Biology"},
                {"id": "2", "name": "Alan", "major": "Physics",
                 "availability": [{"day": "Tuesday", "slots": []}]}]"#,
        );
        let err = load_roster(&path).unwrap_err();
        std::fs::remove_file(path).unwrap();

        match err {
            RosterError::Row { row, source } => {
                assert_eq!(row, 2);
                assert!(matches!(*source, RosterError::MalformedAvailability(_)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn json_roster_keeps_the_later_duplicate() {
        let path = write_temp(
            "duplicates.json",
            r#"[{"id": "7", "name": "Grace", "major": "Physics"},
                {"id": "8", "name": "Barbara", "major": "Chemistry"},
                {"id": "7", "name": "Grace Hopper", "major": "Computer Science"}]"#,
        );
        let roster = load_roster_json(&path).unwrap();
        std::fs::remove_file(path).unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].name, "Grace Hopper");
        assert_eq!(roster[0].major, Major::ComputerScience);
        assert_eq!(roster[1].id, "8");
    }
}
