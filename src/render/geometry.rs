//! Grid geometry for the 24-hour duty grid: a fixed coordinate system
//! mapping time-of-day to x and duty status to lane y. Everything here
//! is pure arithmetic over constants; the same inputs always produce
//! the same coordinates.

use crate::models::duty_status::DutyStatus;
use crate::render::sheet::DrawCommand;

/// Logical sheet size in drawing units.
pub const SHEET_WIDTH: f64 = 1000.0;
pub const SHEET_HEIGHT: f64 = 1200.0;

pub const GRID_LEFT: f64 = 70.0;
pub const GRID_TOP: f64 = 330.0;
pub const GRID_WIDTH: f64 = 850.0;
pub const GRID_HEIGHT: f64 = 200.0;

pub const ROW_COUNT: usize = 4;
pub const ROW_HEIGHT: f64 = GRID_HEIGHT / ROW_COUNT as f64;
pub const COLUMN_WIDTH: f64 = GRID_WIDTH / 24.0;
pub const SUB_COLUMN_WIDTH: f64 = COLUMN_WIDTH / 4.0;

/// The duty line runs through the vertical middle of its lane.
pub const LANE_LINE_OFFSET: f64 = ROW_HEIGHT / 2.0;

/// Tall middle quarter-tick vs the two short ones, paper-form style.
const TICK_TALL: f64 = 15.0;
const TICK_SHORT: f64 = 10.0;

/// Hour numeral row sits just above the grid.
const HOUR_LABEL_Y: f64 = GRID_TOP - 30.0;
const HOUR_LABEL_SIZE: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            left: GRID_LEFT,
            top: GRID_TOP,
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
        }
    }
}

impl GridGeometry {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn row_height(&self) -> f64 {
        self.height / ROW_COUNT as f64
    }

    /// Map an hour-fraction in [0,24] onto the grid's x span. Inputs
    /// outside the day clamp to the grid edges instead of escaping the
    /// drawable area.
    pub fn time_to_x(&self, hour_fraction: f64) -> f64 {
        let h = hour_fraction.clamp(0.0, 24.0);
        self.left + (h / 24.0) * self.width
    }

    /// Top edge of a status lane.
    pub fn row_top(&self, status: DutyStatus) -> f64 {
        self.top + status.row() as f64 * self.row_height()
    }

    /// Y of the duty line within a status lane.
    pub fn lane_line_y(&self, status: DutyStatus) -> f64 {
        self.row_top(status) + self.row_height() / 2.0
    }

    /// 12-hour-clock numeral for an hour boundary (13 → "1", 0 → "0").
    pub fn hour_label(hour: u32) -> String {
        if hour > 12 {
            (hour - 12).to_string()
        } else {
            hour.to_string()
        }
    }

    /// Emit the fixed grid chrome: hour boundary lines with numeral
    /// labels, and per-lane quarter-hour sub-ticks with the tall middle
    /// tick.
    pub fn grid_commands(&self) -> Vec<DrawCommand> {
        let mut out = Vec::new();
        let column = self.width / 24.0;
        let sub = column / 4.0;

        for i in 0..=24u32 {
            let x = self.left + i as f64 * column;

            out.push(DrawCommand::text(
                Self::hour_label(i),
                x,
                HOUR_LABEL_Y,
                HOUR_LABEL_SIZE,
            ));
            out.push(DrawCommand::line(x, self.top, x, self.bottom()));

            if i < 24 {
                for row in 0..ROW_COUNT {
                    let row_y = self.top + row as f64 * self.row_height();
                    for k in 1..=3 {
                        let sub_x = x + k as f64 * sub;
                        let tick = if k == 2 { TICK_TALL } else { TICK_SHORT };
                        let tick_y = row_y - 1.0;
                        out.push(DrawCommand::line(sub_x, tick_y, sub_x, tick_y + tick));
                    }
                }
            }
        }

        out
    }
}
