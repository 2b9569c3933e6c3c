use chrono::{TimeZone, Utc};

use padres_calendar::error::CalendarError;
use padres_calendar::schedule::{
    HeaderMap, build_summary, collect_events, event_from_row, normalize_header, parse_going,
};
use padres_calendar::sheets::rows_from_json;
use padres_calendar::timezone::PacificClock;

fn to_row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|s| s.to_string()).collect()
}

fn sample_header() -> Vec<String> {
    to_row(&["ID", "Date", "Time", "team", "Going?", "Giveaway", "#Tix"])
}

#[test]
fn header_normalization_ignores_case_and_punctuation() {
    assert_eq!(normalize_header("Going?"), "going");
    assert_eq!(normalize_header("GOING"), "going");
    assert_eq!(normalize_header("going "), "going");
    assert_eq!(normalize_header("#Tix"), "tix");
    assert_eq!(normalize_header("  I D !"), "id");
}

#[test]
fn header_map_accepts_shuffled_and_decorated_columns() {
    // Arrange: same columns, different order and decoration
    let header = to_row(&["Team", "TIME", "date", "going?", "id."]);

    // Act
    let headers = HeaderMap::from_header_row(&header);

    // Assert
    assert!(headers.is_ok(), "header should resolve: {:?}", headers);
}

#[test]
fn missing_required_column_names_its_label() {
    // No attendance column at all
    let header = to_row(&["ID", "Date", "Time", "team"]);
    let err = HeaderMap::from_header_row(&header).unwrap_err();
    assert!(
        matches!(err, CalendarError::MissingColumn { label: "Going?" }),
        "error was: {err}"
    );
    assert!(err.to_string().contains("Going?"), "message was: {err}");
}

#[test]
fn parse_going_is_total_and_case_insensitive() {
    for token in ["true", "YES", "y", "1", "Checked", " yes "] {
        assert!(parse_going(token), "expected truthy: {token:?}");
    }
    for token in ["", "no", "false", "maybe", "2", "yess"] {
        assert!(!parse_going(token), "expected falsy: {token:?}");
    }
}

#[test]
fn summary_marks_home_and_away_games() {
    // Game numbers below 82 are home games
    assert_eq!(build_summary("5", "Dodgers", true, "2"), "PP (2): vs Dodgers");
    assert_eq!(build_summary("81", "Cubs", false, ""), "TV: vs Cubs");
    assert_eq!(build_summary("82", "Mets", false, ""), "TV: @ Mets");
    // Non-numeric ids read as away games
    assert_eq!(build_summary("abc", "Reds", true, ""), "PP: @ Reds");
}

#[test]
fn normalizes_full_row_to_event() {
    // Arrange
    let headers = HeaderMap::from_header_row(&sample_header()).expect("header");
    let row = to_row(&["5", "03-14", "07:10 PM", "Dodgers", "yes", "Bobblehead", "2"]);

    // Act
    let event = event_from_row(&row, &headers, PacificClock::detect())
        .expect("row should normalize")
        .expect("row should yield an event");

    // Assert: March 14 2026 19:10 is PDT (UTC-7)
    assert_eq!(event.uid, "5");
    assert_eq!(event.summary, "PP (2): vs Dodgers");
    assert_eq!(event.description.as_deref(), Some("Giveaway: Bobblehead"));
    assert_eq!(
        event.start_utc,
        Utc.with_ymd_and_hms(2026, 3, 15, 2, 10, 0).unwrap()
    );
    assert_eq!(
        event.end_utc,
        Utc.with_ymd_and_hms(2026, 3, 15, 6, 10, 0).unwrap()
    );
}

#[test]
fn short_row_reads_missing_cells_as_empty() {
    let headers = HeaderMap::from_header_row(&sample_header()).expect("header");
    // Row ends after the team column; going/giveaway/tix are absent
    let row = to_row(&["90", "06-20", "06:40 PM", "Giants"]);

    let event = event_from_row(&row, &headers, PacificClock::detect())
        .expect("row should normalize")
        .expect("row should yield an event");

    assert_eq!(event.summary, "TV: @ Giants");
    assert_eq!(event.description, None);
}

#[test]
fn empty_id_row_is_skipped_silently() {
    let headers = HeaderMap::from_header_row(&sample_header()).expect("header");
    // Populated cells but no id
    let row = to_row(&["  ", "03-14", "07:10 PM", "Dodgers", "yes", "", ""]);

    let result = event_from_row(&row, &headers, PacificClock::detect()).expect("not an error");
    assert!(result.is_none(), "row without id must be skipped");
}

#[test]
fn missing_required_field_fails_and_names_the_row() {
    let headers = HeaderMap::from_header_row(&sample_header()).expect("header");
    let row = to_row(&["7", "", "07:10 PM", "Dodgers", "yes", "", ""]);

    let err = event_from_row(&row, &headers, PacificClock::detect()).unwrap_err();
    assert!(
        matches!(&err, CalendarError::MissingFields { uid } if uid == "7"),
        "error was: {err}"
    );
    assert!(err.to_string().contains("7"), "message was: {err}");
}

#[test]
fn unparseable_datetime_fails_and_names_the_row() {
    let headers = HeaderMap::from_header_row(&sample_header()).expect("header");
    let row = to_row(&["9", "03-99", "07:10 PM", "Dodgers", "", "", ""]);

    let err = event_from_row(&row, &headers, PacificClock::detect()).unwrap_err();
    assert!(err.to_string().contains("9"), "message was: {err}");
}

#[test]
fn events_sort_numerically_with_non_numeric_ids_at_zero() {
    // Arrange: ids deliberately out of order
    let mut rows = vec![sample_header()];
    for uid in ["10", "2", "abc", "1"] {
        rows.push(to_row(&[uid, "05-01", "01:10 PM", "Cubs", "", "", ""]));
    }

    // Act
    let events = collect_events(&rows, PacificClock::detect()).expect("collect");

    // Assert: non-numeric ids carry integer key 0 and sort first
    let order: Vec<&str> = events.iter().map(|e| e.uid.as_str()).collect();
    assert_eq!(order, vec!["abc", "1", "2", "10"]);
}

#[test]
fn fixture_round_trip_collects_and_orders_events() {
    // Arrange: decode the same shape the Sheets API returns
    let rows = rows_from_json(include_str!("sample_values.json")).expect("fixture decodes");

    // Act
    let events = collect_events(&rows, PacificClock::detect()).expect("collect");

    // Assert: blank trailing row dropped, remaining rows ordered by game number
    let order: Vec<&str> = events.iter().map(|e| e.uid.as_str()).collect();
    assert_eq!(order, vec!["5", "12", "90"]);
    assert_eq!(events[1].summary, "PP (4): vs Rockies");
    assert_eq!(
        events[2].start_utc,
        Utc.with_ymd_and_hms(2026, 6, 21, 1, 40, 0).unwrap()
    );
}

#[test]
fn empty_value_range_is_an_error() {
    let err = rows_from_json(r#"{"range":"2026 Games!A1:G1","values":[]}"#).unwrap_err();
    assert!(matches!(err, CalendarError::EmptySheet), "error was: {err}");
}

#[test]
fn fallback_clock_uses_fixed_standard_offset() {
    // Arrange: 2026-03-14 19:10 is PDT (UTC-7) with tz data, UTC-8 without
    let headers = HeaderMap::from_header_row(&sample_header()).expect("header");
    let row = to_row(&["5", "03-14", "07:10 PM", "Dodgers", "", "", ""]);

    // Act
    let event = event_from_row(&row, &headers, PacificClock::standard_offset())
        .expect("row should normalize")
        .expect("row should yield an event");

    // Assert: one hour later than the DST-correct instant
    assert_eq!(
        event.start_utc,
        Utc.with_ymd_and_hms(2026, 3, 15, 3, 10, 0).unwrap()
    );
}
