//! Interval normalizer: turn raw ISO-8601 timestamp strings into
//! hour-fractions for plotting. Malformed input degrades to the 0.0
//! sentinel with a diagnostic; nothing in here panics or errors out
//! the draw pass.

use crate::render::sheet::ClockPolicy;
use chrono::{DateTime, Local, NaiveDateTime, NaiveTime, Utc};

/// Hour-fraction sentinel for unparsable timestamps: the grid's left edge.
pub const SENTINEL_HOUR: f64 = 0.0;

/// Naive formats accepted for stored/imported entries.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse one timestamp into a wall-clock time-of-day under the given
/// clock policy. Offset-carrying timestamps are converted; naive ones
/// are taken as wall clock as-is.
fn parse_wall_clock(raw: &str, clock: ClockPolicy) -> Option<NaiveTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(match clock {
            ClockPolicy::Local => dt.with_timezone(&Local).time(),
            ClockPolicy::Utc => dt.with_timezone(&Utc).time(),
        });
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt.time());
        }
    }

    None
}

/// Hour-fraction in [0,24) of a raw timestamp: hours plus minutes/60,
/// matching the minute resolution of the paper grid. Unparsable input
/// yields the sentinel and a diagnostic pushed onto `diagnostics`.
pub fn hour_fraction(raw: &str, clock: ClockPolicy, diagnostics: &mut Vec<String>) -> f64 {
    match parse_wall_clock(raw, clock) {
        Some(time) => {
            use chrono::Timelike;
            time.hour() as f64 + time.minute() as f64 / 60.0
        }
        None => {
            if raw.trim().is_empty() {
                diagnostics.push("missing timestamp, plotted at 00:00".to_string());
            } else {
                diagnostics.push(format!("invalid timestamp '{raw}', plotted at 00:00"));
            }
            SENTINEL_HOUR
        }
    }
}

/// "H:MM" display form of a raw timestamp, "0:00" when unparsable.
pub fn format_time(raw: &str, clock: ClockPolicy) -> String {
    match parse_wall_clock(raw, clock) {
        Some(time) => {
            use chrono::Timelike;
            format!("{}:{:02}", time.hour(), time.minute())
        }
        None => "0:00".to_string(),
    }
}
