use std::collections::HashMap;

use chrono::{Duration, NaiveDateTime};
use tracing::debug;

use crate::error::{CalendarError, Result};
use crate::model::event::GameEvent;
use crate::timezone::PacificClock;

/// The sheet stores month-day only; every date belongs to this season.
pub const SEASON_YEAR: i32 = 2026;

/// Calendar block reserved per game.
pub const GAME_DURATION_HOURS: i64 = 4;

/// Game numbers below this are home games (82-game regular season).
const HOME_GAME_CUTOFF: i64 = 82;

/// Required columns as (normalized key, human label for error messages).
const REQUIRED_COLUMNS: [(&str, &str); 5] = [
    ("id", "ID"),
    ("date", "Date"),
    ("time", "Time"),
    ("team", "team"),
    ("going", "Going?"),
];

/// Optional columns as (canonical key, display label); either form may
/// appear in the header.
const OPTIONAL_COLUMNS: [(&str, &str); 2] = [("giveaway", "Giveaway"), ("tix", "#Tix")];

/// Collapse a header cell to its lookup key: trimmed, lowercased, all
/// non-alphanumeric characters dropped. "Going?", "GOING", and "going " all
/// map to "going".
pub fn normalize_header(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Normalized column name -> column index, built from the sheet's first row.
#[derive(Debug)]
pub struct HeaderMap {
    indices: HashMap<String, usize>,
}

impl HeaderMap {
    /// Resolve the header row, verifying every required column is present.
    /// When duplicate headers normalize to the same key, the rightmost wins.
    pub fn from_header_row(header_row: &[String]) -> Result<Self> {
        let mut indices: HashMap<String, usize> = HashMap::new();
        for (idx, raw) in header_row.iter().enumerate() {
            let key = normalize_header(raw);
            if !key.is_empty() {
                indices.insert(key, idx);
            }
        }

        for (key, label) in REQUIRED_COLUMNS {
            if !indices.contains_key(key) {
                return Err(CalendarError::MissingColumn { label });
            }
        }

        Ok(Self { indices })
    }

    /// Cell for a required key. Indices past the end of a short row read as
    /// empty rather than faulting.
    fn cell<'a>(&self, row: &'a [String], key: &str) -> &'a str {
        self.indices
            .get(key)
            .and_then(|&idx| row.get(idx))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Cell for an optional key, trying the canonical name first and the
    /// display label second. Absent column reads as empty.
    fn optional_cell<'a>(&self, row: &'a [String], key: &str) -> &'a str {
        let label = OPTIONAL_COLUMNS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, label)| *label);
        std::iter::once(key)
            .chain(label)
            .find_map(|candidate| {
                self.indices
                    .get(&normalize_header(candidate))
                    .and_then(|&idx| row.get(idx))
                    .map(String::as_str)
            })
            .unwrap_or("")
    }
}

/// Total attendance parse: a fixed truthy token set means attending, any
/// other value (including empty) means not attending. Never fails.
pub fn parse_going(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "yes" | "y" | "1" | "checked"
    )
}

/// Derive the event title: attendance tag, optional ticket count, home/away
/// marker keyed off the game number, and the opposing team.
pub fn build_summary(uid: &str, team: &str, going: bool, tix: &str) -> String {
    let tag = if going { "PP" } else { "TV" };
    let tix = tix.trim();
    let prefix = if tix.is_empty() {
        tag.to_string()
    } else {
        format!("{tag} ({tix})")
    };

    let home_away = match uid.parse::<i64>() {
        Ok(n) if n < HOME_GAME_CUTOFF => "vs",
        // Season games past the cutoff and non-numeric ids both read as away.
        _ => "@",
    };

    format!("{prefix}: {home_away} {team}").trim().to_string()
}

/// Combine the sheet's `MM-DD` date and `HH:MM AM/PM` time into a UTC start
/// instant for the configured season year.
fn parse_game_start(
    uid: &str,
    date: &str,
    time: &str,
    clock: PacificClock,
) -> Result<chrono::DateTime<chrono::Utc>> {
    let combined = format!("{} {} {}", date, SEASON_YEAR, time.to_uppercase());
    let local = NaiveDateTime::parse_from_str(&combined, "%m-%d %Y %I:%M %p").map_err(|_| {
        CalendarError::BadTimestamp {
            uid: uid.to_string(),
            value: format!("{date} {time}"),
        }
    })?;
    Ok(clock.to_utc(local))
}

/// Normalize one data row.
///
/// Returns `Ok(None)` for rows with an empty id cell (blank trailing rows are
/// expected and silently skipped). A non-empty id with missing date, time, or
/// team is a fatal validation error naming the id.
pub fn event_from_row(
    row: &[String],
    headers: &HeaderMap,
    clock: PacificClock,
) -> Result<Option<GameEvent>> {
    let uid = headers.cell(row, "id").trim();
    if uid.is_empty() {
        return Ok(None);
    }

    let date = headers.cell(row, "date").trim();
    let time = headers.cell(row, "time").trim();
    let team = headers.cell(row, "team").trim();
    if date.is_empty() || time.is_empty() || team.is_empty() {
        return Err(CalendarError::MissingFields {
            uid: uid.to_string(),
        });
    }

    let going = parse_going(headers.cell(row, "going"));
    let giveaway = headers.optional_cell(row, "giveaway").trim();
    let tix = headers.optional_cell(row, "tix").trim();

    let start_utc = parse_game_start(uid, date, time, clock)?;
    let end_utc = start_utc + Duration::hours(GAME_DURATION_HOURS);
    let summary = build_summary(uid, team, going, tix);
    let description = if giveaway.is_empty() {
        None
    } else {
        Some(format!("Giveaway: {giveaway}"))
    };

    Ok(Some(GameEvent {
        uid: uid.to_string(),
        start_utc,
        end_utc,
        summary,
        description,
    }))
}

/// Sort key: numeric game id ascending, with non-numeric ids keyed at 0; the
/// raw id string breaks ties so the order is total and deterministic.
fn sort_key(uid: &str) -> (i64, &str) {
    (uid.parse::<i64>().unwrap_or(0), uid)
}

/// Normalize every data row (row 0 is the header) and return the events in
/// their deterministic calendar order. Any validation failure aborts the
/// whole batch; no partial collection is returned.
pub fn collect_events(rows: &[Vec<String>], clock: PacificClock) -> Result<Vec<GameEvent>> {
    let header_row = rows.first().ok_or(CalendarError::EmptySheet)?;
    let headers = HeaderMap::from_header_row(header_row)?;

    let mut events: Vec<GameEvent> = Vec::new();
    for row in &rows[1..] {
        if let Some(event) = event_from_row(row, &headers, clock)? {
            debug!(uid = %event.uid, summary = %event.summary, "normalized row");
            events.push(event);
        }
    }

    // Stable sort keeps input order for duplicated ids.
    events.sort_by(|a, b| sort_key(&a.uid).cmp(&sort_key(&b.uid)));
    Ok(events)
}
