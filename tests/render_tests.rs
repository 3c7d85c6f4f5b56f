use chrono::NaiveDate;
use eldlogger::models::duty_status::DutyStatus;
use eldlogger::models::log_details::LogDetails;
use eldlogger::models::log_entry::LogEntryRecord;
use eldlogger::models::trip::TripDetails;
use eldlogger::render::annotate::{MISSING_FIELD, RECAP_COLUMNS, RECAP_SECTION_WIDTH, RECAP_START_X, recap_commands, recap_labels};
use eldlogger::render::geometry::GridGeometry;
use eldlogger::render::path::DUTY_LINE_WEIGHT;
use eldlogger::render::{Color, DrawCommand, RenderOptions, render_sheet};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

fn render(entries: &[LogEntryRecord]) -> eldlogger::render::Sheet {
    render_sheet(
        entries,
        &TripDetails::for_date(date()),
        &LogDetails::default(),
        "Chicago, IL",
        "Memphis, TN",
        &RenderOptions::default(),
    )
}

fn red_segments(sheet: &eldlogger::render::Sheet) -> Vec<(f64, f64, f64)> {
    sheet
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Line {
                x1,
                y1,
                x2,
                y2,
                color: Color::Red,
                ..
            } if y1 == y2 => Some((*x1, *x2, *y1)),
            _ => None,
        })
        .collect()
}

/// Vertical duty-line connectors (weight 3, x1 == x2).
fn connectors(sheet: &eldlogger::render::Sheet) -> Vec<(f64, f64, f64)> {
    sheet
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Line {
                x1,
                y1,
                x2,
                y2,
                weight,
                ..
            } if x1 == x2 && *weight == DUTY_LINE_WEIGHT => Some((*x1, *y1, *y2)),
            _ => None,
        })
        .collect()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn single_driving_entry_draws_one_red_segment() {
    let entries = vec![LogEntryRecord::new(
        DutyStatus::Driving,
        "2025-03-10T08:00:00",
        "2025-03-10T09:00:00",
    )];

    let sheet = render(&entries);
    let grid = GridGeometry::default();

    let reds = red_segments(&sheet);
    assert_eq!(reds.len(), 1);

    let (x1, x2, y) = reds[0];
    assert!(close(x1, grid.time_to_x(8.0)));
    assert!(close(x2, grid.time_to_x(9.0)));
    assert!(close(y, grid.lane_line_y(DutyStatus::Driving)));
}

#[test]
fn four_entry_day_draws_the_staircase() {
    let entries = vec![
        LogEntryRecord::new(DutyStatus::OffDuty, "2025-03-10T00:00:00", "2025-03-10T06:00:00"),
        LogEntryRecord::new(DutyStatus::Driving, "2025-03-10T06:00:00", "2025-03-10T14:00:00"),
        LogEntryRecord::new(DutyStatus::OnDuty, "2025-03-10T14:00:00", "2025-03-10T15:00:00"),
        LogEntryRecord::new(DutyStatus::Sleeper, "2025-03-10T15:00:00", "2025-03-10T23:45:00"),
    ];

    let sheet = render(&entries);
    let grid = GridGeometry::default();

    // One horizontal duty segment per entry, at its own lane line.
    for (status, start, end) in [
        (DutyStatus::OffDuty, 0.0, 6.0),
        (DutyStatus::Driving, 6.0, 14.0),
        (DutyStatus::OnDuty, 14.0, 15.0),
        (DutyStatus::Sleeper, 15.0, 23.75),
    ] {
        let y = grid.lane_line_y(status);
        let found = sheet.commands.iter().any(|c| match c {
            DrawCommand::Line {
                x1,
                y1,
                x2,
                y2,
                weight,
                ..
            } => {
                *weight == DUTY_LINE_WEIGHT
                    && close(*y1, y)
                    && close(*y2, y)
                    && close(*x1, grid.time_to_x(start))
                    && close(*x2, grid.time_to_x(end))
            }
            _ => false,
        });
        assert!(found, "missing duty segment for {status:?}");
    }

    // Transition connectors at 06:00, 14:00 and 15:00 join the lane lines.
    let conns = connectors(&sheet);
    for (hour, from, to) in [
        (6.0, DutyStatus::OffDuty, DutyStatus::Driving),
        (14.0, DutyStatus::Driving, DutyStatus::OnDuty),
        (15.0, DutyStatus::OnDuty, DutyStatus::Sleeper),
    ] {
        let x = grid.time_to_x(hour);
        let y_from = grid.lane_line_y(from);
        let y_to = grid.lane_line_y(to);
        assert!(
            conns
                .iter()
                .any(|(cx, y1, y2)| close(*cx, x) && close(*y1, y_from) && close(*y2, y_to)),
            "missing connector at hour {hour}"
        );
    }

    // First entry drops from the grid's top baseline.
    assert!(
        conns
            .iter()
            .any(|(cx, y1, y2)| close(*cx, grid.time_to_x(0.0))
                && close(*y1, grid.top)
                && close(*y2, grid.lane_line_y(DutyStatus::OffDuty))),
        "missing baseline connector for the first entry"
    );

    assert!(sheet.diagnostics.is_empty());
}

#[test]
fn rendering_is_idempotent() {
    let entries = vec![
        LogEntryRecord::new(DutyStatus::OffDuty, "2025-03-10T00:00:00", "2025-03-10T07:15:00"),
        LogEntryRecord::new(DutyStatus::Driving, "2025-03-10T07:15:00", "2025-03-10T12:00:00"),
    ];

    let first = render(&entries);
    let second = render(&entries);

    assert_eq!(first, second);
}

#[test]
fn malformed_timestamps_degrade_to_the_left_edge() {
    let entries = vec![LogEntryRecord::new(
        DutyStatus::Driving,
        "not a timestamp",
        "2025-03-10T09:00:00",
    )];

    let sheet = render(&entries);
    let grid = GridGeometry::default();

    let reds = red_segments(&sheet);
    assert_eq!(reds.len(), 1);
    assert!(close(reds[0].0, grid.time_to_x(0.0)));
    assert!(!sheet.diagnostics.is_empty());
}

#[test]
fn out_of_order_entries_are_reported_not_fatal() {
    let entries = vec![
        LogEntryRecord::new(DutyStatus::Driving, "2025-03-10T10:00:00", "2025-03-10T12:00:00"),
        LogEntryRecord::new(DutyStatus::OnDuty, "2025-03-10T08:00:00", "2025-03-10T09:00:00"),
    ];

    let sheet = render(&entries);
    assert!(
        sheet
            .diagnostics
            .iter()
            .any(|d| d.contains("overlaps")),
        "expected an overlap diagnostic, got {:?}",
        sheet.diagnostics
    );
}

#[test]
fn recap_panel_emits_eleven_equal_columns() {
    let details = LogDetails {
        total_on_duty_hours_today: Some(9.0),
        total_on_duty_hours_last_6_days: Some(48.0),
        total_on_duty_hours_last_7_days: Some(56.0),
        total_on_duty_hours_last_8_days: Some(64.0),
        available_hours_tomorrow: Some(6.0),
        ..LogDetails::default()
    };

    assert_eq!(recap_labels(&details).len(), RECAP_COLUMNS);

    let cmds = recap_commands(&details);
    let mut xs: Vec<f64> = cmds
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Text { x, .. } => Some(*x),
            _ => None,
        })
        .collect();
    xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
    xs.dedup();

    assert_eq!(xs.len(), RECAP_COLUMNS, "one x slot per recap column");

    let column_width = RECAP_SECTION_WIDTH / RECAP_COLUMNS as f64;
    for (idx, x) in xs.iter().enumerate() {
        assert!(close(*x, RECAP_START_X + idx as f64 * column_width));
    }
}

#[test]
fn recap_values_are_interpolated() {
    let details = LogDetails {
        total_on_duty_hours_last_7_days: Some(56.25),
        ..LogDetails::default()
    };

    let labels = recap_labels(&details);
    assert!(labels.iter().any(|l| l.contains("56.25")));
}

#[test]
fn missing_metadata_renders_the_explicit_placeholder() {
    let sheet = render(&[LogEntryRecord::new(
        DutyStatus::OffDuty,
        "2025-03-10T00:00:00",
        "2025-03-10T06:00:00",
    )]);

    let placeholder_texts = sheet
        .commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Text { text, .. } if text.contains(MISSING_FIELD)))
        .count();

    // carrier, truck/trailer, terminal, document, shipper/commodity ...
    assert!(placeholder_texts >= 4);
}

#[test]
fn resolved_addresses_appear_in_the_header() {
    let sheet = render(&[LogEntryRecord::new(
        DutyStatus::OffDuty,
        "2025-03-10T00:00:00",
        "2025-03-10T06:00:00",
    )]);

    let has = |needle: &str| {
        sheet
            .commands
            .iter()
            .any(|c| matches!(c, DrawCommand::Text { text, .. } if text == needle))
    };
    assert!(has("Chicago, IL"));
    assert!(has("Memphis, TN"));
}
