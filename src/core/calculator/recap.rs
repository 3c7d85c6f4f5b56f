//! Rolling hours-of-service recap: the 6/7/8-day on-duty sums printed
//! at the bottom of the sheet and the hours still available tomorrow
//! under the trip's cycle rule.

use crate::models::trip::CycleRule;
use chrono::{Duration, NaiveDate};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Recap {
    pub on_duty_last_6_days: f64,
    pub on_duty_last_7_days: f64,
    pub on_duty_last_8_days: f64,
    pub available_hours_tomorrow: f64,
}

/// Sum of on-duty hours over the window ending at `date` (inclusive).
fn window_sum(history: &[(NaiveDate, f64)], date: NaiveDate, days: i64) -> f64 {
    let start = date - Duration::days(days - 1);
    history
        .iter()
        .filter(|(d, _)| *d >= start && *d <= date)
        .map(|(_, hours)| hours)
        .sum()
}

/// Compute the recap for `date` over the trip's per-day on-duty history.
/// Available hours follow the cycle rule: 70/8 drivers get
/// `70 − last 8 days`, 60/7 drivers `60 − last 7 days`, floored at zero.
pub fn rolling_recap(history: &[(NaiveDate, f64)], date: NaiveDate, cycle: CycleRule) -> Recap {
    let last6 = window_sum(history, date, 6);
    let last7 = window_sum(history, date, 7);
    let last8 = window_sum(history, date, 8);

    let cycle_sum = window_sum(history, date, cycle.window_days());
    let available = (cycle.cap_hours() - cycle_sum).max(0.0);

    Recap {
        on_duty_last_6_days: last6,
        on_duty_last_7_days: last7,
        on_duty_last_8_days: last8,
        available_hours_tomorrow: available,
    }
}
