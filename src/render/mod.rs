//! Daily-log sheet renderer.
//!
//! `render_sheet` is a pure function: duty-status intervals plus trip
//! metadata and derived totals in, an ordered draw-command list out.
//! Fixed chrome (grid, annotations) is laid out first, then the duty
//! line is drawn on top; re-rendering identical inputs yields an
//! identical sheet.

pub mod annotate;
pub mod geometry;
pub mod normalize;
pub mod path;
pub mod sheet;
pub mod svg;
pub mod text;

pub use sheet::{ClockPolicy, Color, DrawCommand, RenderOptions, Sheet};

use crate::models::log_details::LogDetails;
use crate::models::log_entry::LogEntryRecord;
use crate::models::trip::TripDetails;
use geometry::{GridGeometry, SHEET_HEIGHT, SHEET_WIDTH};

/// Render one driver daily log sheet.
///
/// `from_display` / `to_display` are the already-resolved location
/// strings (address resolution completes before the draw pass begins).
pub fn render_sheet(
    entries: &[LogEntryRecord],
    trip: &TripDetails,
    details: &LogDetails,
    from_display: &str,
    to_display: &str,
    options: &RenderOptions,
) -> Sheet {
    let grid = GridGeometry::default();
    let mut sheet = Sheet::new(SHEET_WIDTH, SHEET_HEIGHT);

    // Fixed chrome first, duty line on top.
    sheet.extend(annotate::annotation_commands(
        trip,
        from_display,
        to_display,
        details,
        &grid,
    ));
    sheet.extend(grid.grid_commands());

    let mut diagnostics = Vec::new();
    let duty = path::duty_line_commands(entries, &grid, options.clock, &mut diagnostics);
    sheet.extend(duty);
    for d in diagnostics {
        sheet.diagnose(d);
    }

    sheet
}
