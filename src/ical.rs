use chrono::{DateTime, Utc};

use crate::model::event::GameEvent;

const PRODID: &str = "-//padres-2026-calendar//EN";

/// Compact UTC timestamp form used by ICS properties.
pub fn format_dt_utc(dt: &DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Escape ICS text values. Backslash must go first so the later
/// replacements are not double-escaped.
pub fn escape_text(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}

/// Render the ordered events into a full VCALENDAR blob.
///
/// Every line, including the final one, is CRLF-terminated. DTSTAMP mirrors
/// the start time rather than wall-clock generation time so repeated runs
/// over the same data produce byte-identical output. No line folding; the
/// field values here stay well under the fold limit.
pub fn render_calendar(events: &[GameEvent]) -> String {
    let mut lines: Vec<String> = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{PRODID}"),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
    ];

    for event in events {
        lines.push("BEGIN:VEVENT".to_string());
        lines.push(format!("UID:{}", escape_text(&event.uid)));
        lines.push(format!("DTSTAMP:{}", format_dt_utc(&event.start_utc)));
        lines.push(format!("DTSTART:{}", format_dt_utc(&event.start_utc)));
        lines.push(format!("DTEND:{}", format_dt_utc(&event.end_utc)));
        lines.push(format!("SUMMARY:{}", escape_text(&event.summary)));
        if let Some(description) = &event.description {
            lines.push(format!("DESCRIPTION:{}", escape_text(description)));
        }
        lines.push("END:VEVENT".to_string());
    }

    lines.push("END:VCALENDAR".to_string());

    let mut out = lines.join("\r\n");
    out.push_str("\r\n");
    out
}
