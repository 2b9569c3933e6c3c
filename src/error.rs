//! Error types for the sheet-to-calendar pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a generation run.
///
/// Permissive inputs (unrecognized attendance tokens, non-numeric game ids,
/// empty optional cells) are handled with total defaults and never surface
/// here.
#[derive(Debug, Error)]
pub enum CalendarError {
    /// Required credential env var is not set.
    #[error("missing env var: {var}")]
    MissingCredentials { var: &'static str },

    /// The sheet request itself failed (transport-level).
    #[error("sheet request failed: {0}")]
    Fetch(#[from] Box<ureq::Error>),

    /// The sheet endpoint answered with a non-success status.
    #[error("sheet request returned status {status}")]
    HttpStatus { status: u16 },

    /// The sheet response body was not the expected ValueRange JSON.
    #[error("failed to decode sheet response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The sheet tab came back with no rows at all.
    #[error("no data found in sheet")]
    EmptySheet,

    /// A required column is absent from the header row.
    #[error("missing required column '{label}' in sheet header")]
    MissingColumn { label: &'static str },

    /// A row has a game id but is missing date, time, or team.
    #[error("row for UID {uid} missing required fields")]
    MissingFields { uid: String },

    /// A row's date/time cells did not parse.
    #[error("row for UID {uid} has unparseable date/time '{value}'")]
    BadTimestamp { uid: String, value: String },

    /// Reading or writing the output file failed.
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<ureq::Error> for CalendarError {
    fn from(err: ureq::Error) -> Self {
        Self::Fetch(Box::new(err))
    }
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, CalendarError>;
