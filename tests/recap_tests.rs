use chrono::NaiveDate;
use eldlogger::core::calculator::recap::rolling_recap;
use eldlogger::core::calculator::totals::daily_totals;
use eldlogger::models::duty_status::DutyStatus;
use eldlogger::models::log_entry::LogEntry;
use eldlogger::models::trip::CycleRule;

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
}

fn entry(status: DutyStatus, start: (u32, u32), end: Option<(u32, u32)>, miles: f64) -> LogEntry {
    let date = d(10);
    LogEntry::new(
        1,
        date,
        status,
        date.and_hms_opt(start.0, start.1, 0).unwrap(),
        end.map(|(h, m)| date.and_hms_opt(h, m, 0).unwrap()),
        miles,
        String::new(),
        false,
    )
}

#[test]
fn daily_totals_sum_per_status() {
    let entries = vec![
        entry(DutyStatus::OffDuty, (0, 0), Some((6, 0)), 0.0),
        entry(DutyStatus::Driving, (6, 0), Some((14, 0)), 420.5),
        entry(DutyStatus::OnDuty, (14, 0), Some((15, 0)), 0.0),
        entry(DutyStatus::Sleeper, (15, 0), Some((23, 30)), 0.0),
    ];

    let totals = daily_totals(&entries);

    assert_eq!(totals.off_duty_hours, 6.0);
    assert_eq!(totals.driving_hours, 8.0);
    assert_eq!(totals.on_duty_hours, 1.0);
    assert_eq!(totals.sleeper_hours, 8.5);
    assert_eq!(totals.miles_driving, 420.5);
    assert_eq!(totals.miles_total, 420.5);
    assert_eq!(totals.on_duty_today(), 9.0);
}

#[test]
fn open_entries_contribute_nothing_until_closed() {
    let entries = vec![
        entry(DutyStatus::Driving, (6, 0), Some((10, 0)), 200.0),
        entry(DutyStatus::OnDuty, (10, 0), None, 0.0),
    ];

    let totals = daily_totals(&entries);
    assert_eq!(totals.driving_hours, 4.0);
    assert_eq!(totals.on_duty_hours, 0.0);
}

#[test]
fn quarter_hours_round_to_two_decimals() {
    let entries = vec![entry(DutyStatus::Driving, (6, 0), Some((6, 50)), 0.0)];
    let totals = daily_totals(&entries);
    assert_eq!(totals.driving_hours, 0.83);
}

#[test]
fn rolling_windows_include_only_their_days() {
    // Ten straight days of 8 on-duty hours.
    let history: Vec<(NaiveDate, f64)> = (1..=10).map(|day| (d(day), 8.0)).collect();

    let recap = rolling_recap(&history, d(10), CycleRule::SeventyEight);

    assert_eq!(recap.on_duty_last_6_days, 48.0);
    assert_eq!(recap.on_duty_last_7_days, 56.0);
    assert_eq!(recap.on_duty_last_8_days, 64.0);
}

#[test]
fn available_hours_follow_the_cycle_rule() {
    let history: Vec<(NaiveDate, f64)> = (1..=10).map(|day| (d(day), 8.0)).collect();

    let seventy = rolling_recap(&history, d(10), CycleRule::SeventyEight);
    assert_eq!(seventy.available_hours_tomorrow, 70.0 - 64.0);

    let sixty = rolling_recap(&history, d(10), CycleRule::SixtySeven);
    assert_eq!(sixty.available_hours_tomorrow, 60.0 - 56.0);
}

#[test]
fn available_hours_floor_at_zero() {
    let history: Vec<(NaiveDate, f64)> = (1..=10).map(|day| (d(day), 12.0)).collect();

    let recap = rolling_recap(&history, d(10), CycleRule::SixtySeven);
    assert_eq!(recap.available_hours_tomorrow, 0.0);
}

#[test]
fn days_outside_the_window_are_ignored() {
    let mut history: Vec<(NaiveDate, f64)> = vec![(d(1), 10.0)];
    history.extend((5..=10).map(|day| (d(day), 5.0)));

    let recap = rolling_recap(&history, d(10), CycleRule::SeventyEight);
    // 8-day window starts on day 3: the 10 hours on day 1 fall outside.
    assert_eq!(recap.on_duty_last_8_days, 30.0);
}
