use chrono::{DateTime, Utc};

/// One calendar entry, derived from exactly one sheet row.
///
/// Constructed once during normalization and never mutated; only the rendered
/// ICS text is persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameEvent {
    /// Game number from the sheet; stable identity of the calendar entry.
    pub uid: String,
    pub start_utc: DateTime<Utc>,
    /// Always `start_utc` plus the fixed game duration.
    pub end_utc: DateTime<Utc>,
    pub summary: String,
    /// Present only when the row carries a giveaway note.
    pub description: Option<String>,
}
