use std::env;

use serde::Deserialize;
use tracing::{info, info_span};

use crate::error::{CalendarError, Result};

/// Spreadsheet holding the season schedule.
pub const SHEET_ID: &str = "1et9j0e0mSHjjGRXswuVB0bSHbOWPPvDOJREjqopxVtA";
/// Tab within the spreadsheet.
pub const SHEET_TAB_NAME: &str = "2026 Games";
/// Env var carrying the Sheets API key.
pub const API_KEY_ENV: &str = "SHEETS_API_KEY";

/// Response shape of the Sheets v4 `values.get` endpoint. Only the cells
/// matter here; range/majorDimension are ignored.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Fetch all rows of the schedule tab, header row first.
///
/// Reads the API key from the environment, performs one blocking GET, and
/// decodes the `ValueRange` body. Fails when credentials are absent, the
/// request does not succeed, or the tab has no rows.
pub fn fetch_rows() -> Result<Vec<Vec<String>>> {
    let api_key =
        env::var(API_KEY_ENV).map_err(|_| CalendarError::MissingCredentials { var: API_KEY_ENV })?;

    let range = format!("{}!A:Z", SHEET_TAB_NAME).replace(' ', "%20");
    let url = format!(
        "https://sheets.googleapis.com/v4/spreadsheets/{}/values/{}?key={}",
        SHEET_ID, range, api_key
    );

    let response = {
        // The key is a query parameter, so log the sheet id rather than the URL.
        let _span = info_span!("sheets_fetch", sheet_id = SHEET_ID, range = %range).entered();
        ureq::get(&url).call()?
    };

    let status = response.status().as_u16();
    if !(200..300).contains(&status) {
        return Err(CalendarError::HttpStatus { status });
    }

    let mut body = response.into_body();
    let text = body.read_to_string()?;
    let rows = rows_from_json(&text)?;
    info!(rows = rows.len(), "fetched sheet rows");
    Ok(rows)
}

/// Decode a `values.get` JSON body into rows (no network). Used by
/// `fetch_rows` and directly by tests.
pub fn rows_from_json(body: &str) -> Result<Vec<Vec<String>>> {
    let range: ValueRange = serde_json::from_str(body)?;
    if range.values.is_empty() {
        return Err(CalendarError::EmptySheet);
    }
    Ok(range.values)
}
