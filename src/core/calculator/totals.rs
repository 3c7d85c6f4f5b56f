//! Per-status daily totals over one day's log entries. Open entries
//! (no end time yet) contribute nothing until they are closed.

use crate::models::duty_status::DutyStatus;
use crate::models::log_entry::LogEntry;
use crate::utils::time::minutes_to_hours;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DailyTotals {
    pub off_duty_hours: f64,
    pub sleeper_hours: f64,
    pub driving_hours: f64,
    pub on_duty_hours: f64,
    pub miles_driving: f64,
    pub miles_total: f64,
}

impl DailyTotals {
    /// Lines 3 & 4 of the form: driving plus on-duty-not-driving.
    pub fn on_duty_today(&self) -> f64 {
        self.driving_hours + self.on_duty_hours
    }
}

pub fn daily_totals(entries: &[LogEntry]) -> DailyTotals {
    let mut minutes = [0i64; 4];
    let mut totals = DailyTotals::default();

    for entry in entries {
        minutes[entry.status.row()] += entry.duration_minutes();

        totals.miles_total += entry.mileage;
        if entry.status.is_driving() {
            totals.miles_driving += entry.mileage;
        }
    }

    totals.off_duty_hours = minutes_to_hours(minutes[DutyStatus::OffDuty.row()]);
    totals.sleeper_hours = minutes_to_hours(minutes[DutyStatus::Sleeper.row()]);
    totals.driving_hours = minutes_to_hours(minutes[DutyStatus::Driving.row()]);
    totals.on_duty_hours = minutes_to_hours(minutes[DutyStatus::OnDuty.row()]);

    totals
}
