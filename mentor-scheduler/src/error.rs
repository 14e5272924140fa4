//! Roster loading error types.

use thiserror::Error;

/// Errors raised while reading a mentor roster. Schedule generation itself
/// cannot fail once a roster has been loaded.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed roster csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed roster json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown weekday: {0:?}")]
    UnknownWeekday(String),

    #[error("unknown slot label: {0:?}")]
    UnknownSlot(String),

    #[error("unknown major: {0:?}")]
    UnknownMajor(String),

    #[error("unknown mentor role: {0:?}")]
    UnknownTier(String),

    #[error("malformed availability: {0}")]
    MalformedAvailability(String),

    #[error("row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: Box<RosterError>,
    },
}

impl RosterError {
    pub(crate) fn at_row(self, row: usize) -> Self {
        RosterError::Row {
            row,
            source: Box::new(self),
        }
    }
}

pub type RosterResult<T> = Result<T, RosterError>;
