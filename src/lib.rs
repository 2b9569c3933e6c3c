//! Turns a Google Sheet of the season's games into a static ICS calendar.
//!
//! One-shot pipeline: fetch the sheet rows, resolve the header, normalize
//! each row into a [`model::event::GameEvent`], sort, render ICS text, and
//! rewrite the output file only when its bytes changed.

pub mod error;
pub mod ical;
pub mod model;
pub mod schedule;
pub mod sheets;
pub mod timezone;
pub mod writer;
