use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::warn;

/// Zone all sheet times are written in.
const PACIFIC_ZONE: &str = "America/Los_Angeles";

/// Standard (non-DST) Pacific offset, hours west of UTC.
const PST_HOURS_WEST: i32 = 8;

/// Converts the sheet's Pacific wall-clock times to UTC.
///
/// `Zone` uses the bundled tz database and is DST-correct. `Fixed` assumes
/// the standard UTC-8 offset year-round; games near a DST transition may be
/// off by one hour in that mode. Conversion is total in both modes.
#[derive(Debug, Clone, Copy)]
pub enum PacificClock {
    Zone(Tz),
    Fixed(FixedOffset),
}

impl PacificClock {
    /// Probe the tz database for the Pacific zone; degrade to the fixed
    /// standard offset when it cannot be resolved.
    pub fn detect() -> Self {
        match PACIFIC_ZONE.parse::<Tz>() {
            Ok(tz) => PacificClock::Zone(tz),
            Err(_) => {
                warn!(
                    zone = PACIFIC_ZONE,
                    "timezone data unavailable, assuming fixed UTC-8; times near DST transitions may be off by an hour"
                );
                PacificClock::standard_offset()
            }
        }
    }

    /// The fallback clock at the fixed standard offset.
    pub fn standard_offset() -> Self {
        let offset =
            FixedOffset::west_opt(PST_HOURS_WEST * 3600).expect("static offset is in range");
        PacificClock::Fixed(offset)
    }

    /// Interpret a naive Pacific wall-clock time as a UTC instant.
    ///
    /// Ambiguous local times (fall-back hour) take the earliest mapping;
    /// nonexistent ones (spring-forward gap) use the fixed standard offset
    /// for that value instead of failing.
    pub fn to_utc(&self, local: NaiveDateTime) -> DateTime<Utc> {
        match self {
            PacificClock::Zone(tz) => tz
                .from_local_datetime(&local)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|| Self::standard_offset().to_utc(local)),
            PacificClock::Fixed(offset) => offset
                .from_local_datetime(&local)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc))
                // Fixed offsets map every local time exactly once.
                .unwrap_or_else(|| Utc.from_utc_datetime(&local)),
        }
    }
}
