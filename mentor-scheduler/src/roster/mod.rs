pub mod parser;

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::RosterError;
use crate::schedule::slot_utils::{TimeSlot, Weekday};
use crate::schedule::types::Assignment;

pub use parser::{load_roster, load_roster_csv, load_roster_json, parse_availability, read_roster_csv};

/// Academic majors mentors can declare.
///
/// Serialized as the form label. CSV and JSON rosters both parse through
/// `FromStr`, so they accept the same spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Major {
    ComputerScience,
    Biology,
    Chemistry,
    Physics,
    MathematicsAndStatistics,
    EnvironmentalAndEarthScience,
    HealthScience,
    NeuroscienceAndMentalHealth,
    Psychology,
    Other,
}

impl Major {
    pub const ALL: [Major; 10] = [
        Major::ComputerScience,
        Major::Biology,
        Major::Chemistry,
        Major::Physics,
        Major::MathematicsAndStatistics,
        Major::EnvironmentalAndEarthScience,
        Major::HealthScience,
        Major::NeuroscienceAndMentalHealth,
        Major::Psychology,
        Major::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Major::ComputerScience => "Computer Science",
            Major::Biology => "Biology",
            Major::Chemistry => "Chemistry",
            Major::Physics => "Physics",
            Major::MathematicsAndStatistics => "Mathematics and Statistics",
            Major::EnvironmentalAndEarthScience => "Environmental and Earth Science",
            Major::HealthScience => "Health Science",
            Major::NeuroscienceAndMentalHealth => "Neuroscience and Mental Health",
            Major::Psychology => "Psychology",
            Major::Other => "Other",
        }
    }
}

impl fmt::Display for Major {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Major {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // The sign-up form offers "Other (enter manually below)"
        if trimmed.starts_with("Other") {
            return Ok(Major::Other);
        }
        Major::ALL
            .into_iter()
            .find(|major| major.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RosterError::UnknownMajor(trimmed.to_string()))
    }
}

impl Serialize for Major {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Major {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse::<Major>().map_err(de::Error::custom)
    }
}

/// Priority class. Team Leads are placed before Peer Mentors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[serde(alias = "Team Lead & Peer Mentor", alias = "Team Lead")]
    TeamLead,
    #[default]
    #[serde(alias = "Peer Mentor")]
    PeerMentor,
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::TeamLead => "Team Lead & Peer Mentor",
            Tier::PeerMentor => "Peer Mentor",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "TeamLead" | "Team Lead" | "Team Lead & Peer Mentor" => Ok(Tier::TeamLead),
            // Mentors who never picked a role are plain Peer Mentors
            "" | "PeerMentor" | "Peer Mentor" => Ok(Tier::PeerMentor),
            other => Err(RosterError::UnknownTier(other.to_string())),
        }
    }
}

/// Slots a mentor declared for one weekday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub day: Weekday,
    pub slots: Vec<TimeSlot>,
}

/// A mentor as handed over by the roster provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mentor {
    pub id: String,
    pub name: String,
    pub major: Major,
    #[serde(default)]
    pub tier: Tier,
    #[serde(default)]
    pub availability: Vec<Availability>,
}

impl Mentor {
    pub fn new(id: impl Into<String>, name: impl Into<String>, major: Major, tier: Tier) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            major,
            tier,
            availability: Vec::new(),
        }
    }

    /// Adds an availability entry for `day`
    pub fn available(mut self, day: Weekday, slots: impl IntoIterator<Item = TimeSlot>) -> Self {
        self.availability.push(Availability {
            day,
            slots: slots.into_iter().collect(),
        });
        self
    }

    /// Snapshot of this mentor as stored in a schedule slot
    pub fn assignment(&self) -> Assignment {
        Assignment {
            mentor_id: self.id.clone(),
            name: self.name.clone(),
            major: self.major,
            tier: self.tier,
        }
    }
}
