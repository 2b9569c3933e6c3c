use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info};

use padres_calendar::error::Result;
use padres_calendar::timezone::PacificClock;
use padres_calendar::{ical, schedule, sheets, writer};

/// Default output location; override with the first CLI argument.
const OUTPUT_PATH: &str = "docs/calendar.ics";

fn run() -> Result<bool> {
    let rows = sheets::fetch_rows()?;
    let clock = PacificClock::detect();
    let events = schedule::collect_events(&rows, clock)?;
    info!(events = events.len(), "normalized sheet rows");

    let ics = ical::render_calendar(&events);
    let output: PathBuf = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(OUTPUT_PATH));
    writer::write_if_changed(&output, &ics)
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .try_init();

    match run() {
        Ok(changed) => {
            println!("ICS updated: {changed}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "calendar generation failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
