use eldlogger::models::duty_status::DutyStatus;
use eldlogger::render::geometry::{
    GRID_LEFT, GRID_TOP, GRID_WIDTH, GridGeometry, LANE_LINE_OFFSET, ROW_HEIGHT,
};

#[test]
fn time_to_x_is_monotone_and_bounded() {
    let grid = GridGeometry::default();

    let mut previous = f64::NEG_INFINITY;
    for step in 0..=(24 * 4) {
        let hour = step as f64 / 4.0;
        let x = grid.time_to_x(hour);

        assert!(x >= previous, "x regressed at hour {hour}");
        assert!(x >= GRID_LEFT && x <= GRID_LEFT + GRID_WIDTH);
        previous = x;
    }

    assert_eq!(grid.time_to_x(0.0), GRID_LEFT);
    assert_eq!(grid.time_to_x(24.0), GRID_LEFT + GRID_WIDTH);
    assert_eq!(grid.time_to_x(12.0), GRID_LEFT + GRID_WIDTH / 2.0);
}

#[test]
fn time_to_x_clamps_out_of_range_input() {
    let grid = GridGeometry::default();
    assert_eq!(grid.time_to_x(-3.0), GRID_LEFT);
    assert_eq!(grid.time_to_x(99.0), GRID_LEFT + GRID_WIDTH);
}

#[test]
fn status_rows_map_top_to_bottom() {
    let grid = GridGeometry::default();

    assert_eq!(grid.row_top(DutyStatus::OffDuty), GRID_TOP);
    assert_eq!(grid.row_top(DutyStatus::Sleeper), GRID_TOP + ROW_HEIGHT);
    assert_eq!(grid.row_top(DutyStatus::Driving), GRID_TOP + 2.0 * ROW_HEIGHT);
    assert_eq!(grid.row_top(DutyStatus::OnDuty), GRID_TOP + 3.0 * ROW_HEIGHT);

    assert_eq!(
        grid.lane_line_y(DutyStatus::OffDuty),
        GRID_TOP + LANE_LINE_OFFSET
    );
}

#[test]
fn hour_labels_use_twelve_hour_numerals() {
    assert_eq!(GridGeometry::hour_label(0), "0");
    assert_eq!(GridGeometry::hour_label(1), "1");
    assert_eq!(GridGeometry::hour_label(12), "12");
    assert_eq!(GridGeometry::hour_label(13), "1");
    assert_eq!(GridGeometry::hour_label(23), "11");
}

#[test]
fn grid_commands_are_pure() {
    let grid = GridGeometry::default();
    assert_eq!(grid.grid_commands(), grid.grid_commands());
}

#[test]
fn grid_commands_cover_all_hour_boundaries() {
    let grid = GridGeometry::default();
    let cmds = grid.grid_commands();

    // 25 hour boundary lines plus 24 cells * 4 lanes * 3 sub-ticks
    let lines = cmds
        .iter()
        .filter(|c| matches!(c, eldlogger::render::DrawCommand::Line { .. }))
        .count();
    assert_eq!(lines, 25 + 24 * 4 * 3);

    let labels = cmds
        .iter()
        .filter(|c| matches!(c, eldlogger::render::DrawCommand::Text { .. }))
        .count();
    assert_eq!(labels, 25);
}
