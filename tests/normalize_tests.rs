use eldlogger::render::ClockPolicy;
use eldlogger::render::normalize::{SENTINEL_HOUR, format_time, hour_fraction};

#[test]
fn naive_timestamps_map_to_hour_fractions() {
    let mut diags = Vec::new();
    let h = hour_fraction("2025-03-10T13:30:00", ClockPolicy::Local, &mut diags);
    assert_eq!(h, 13.5);
    assert!(diags.is_empty());
}

#[test]
fn utc_policy_reads_offset_timestamps_in_utc() {
    let mut diags = Vec::new();
    let h = hour_fraction("2025-03-10T06:30:00Z", ClockPolicy::Utc, &mut diags);
    assert_eq!(h, 6.5);
    assert!(diags.is_empty());
}

#[test]
fn empty_timestamp_degrades_to_sentinel_with_diagnostic() {
    let mut diags = Vec::new();
    let h = hour_fraction("", ClockPolicy::Local, &mut diags);
    assert_eq!(h, SENTINEL_HOUR);
    assert_eq!(diags.len(), 1);
    assert!(diags[0].contains("missing timestamp"));
}

#[test]
fn garbage_timestamp_degrades_to_sentinel_with_diagnostic() {
    let mut diags = Vec::new();
    let h = hour_fraction("not-a-time", ClockPolicy::Local, &mut diags);
    assert_eq!(h, SENTINEL_HOUR);
    assert_eq!(diags.len(), 1);
    assert!(diags[0].contains("not-a-time"));
}

#[test]
fn format_time_degrades_to_zero_clock() {
    assert_eq!(format_time("2025-03-10T08:05:00", ClockPolicy::Local), "8:05");
    assert_eq!(format_time("", ClockPolicy::Local), "0:00");
    assert_eq!(format_time("garbage", ClockPolicy::Local), "0:00");
}

#[test]
fn seconds_do_not_shift_the_plotted_minute() {
    let mut diags = Vec::new();
    let h = hour_fraction("2025-03-10T10:15:59", ClockPolicy::Local, &mut diags);
    assert_eq!(h, 10.25);
}
