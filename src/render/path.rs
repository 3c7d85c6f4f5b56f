//! Log path renderer: the duty-status timeline as a connected step
//! function across the grid. One horizontal segment per entry at its
//! lane line, one vertical connector per status change.

use crate::models::log_entry::LogEntryRecord;
use crate::render::geometry::GridGeometry;
use crate::render::normalize::hour_fraction;
use crate::render::sheet::{ClockPolicy, Color, DrawCommand};

/// Stroke weight of the duty line.
pub const DUTY_LINE_WEIGHT: f64 = 3.0;

/// Emit the duty line for an ordered entry sequence.
///
/// Connector semantics: each status change draws a single vertical
/// stroke at the current entry's start x, joining the previous lane
/// line to the current one. The first entry's connector drops from the
/// grid's top baseline, as on the paper form where the day starts at
/// the top edge.
///
/// Ordering is assumed, not enforced: a backwards entry is drawn where
/// its timestamps say and reported through `diagnostics`.
pub fn duty_line_commands(
    entries: &[LogEntryRecord],
    grid: &GridGeometry,
    clock: ClockPolicy,
    diagnostics: &mut Vec<String>,
) -> Vec<DrawCommand> {
    let mut out = Vec::new();
    let mut previous: Option<&LogEntryRecord> = None;
    let mut previous_end_hour = 0.0f64;

    for (idx, entry) in entries.iter().enumerate() {
        let y = grid.lane_line_y(entry.status);
        let start_hour = hour_fraction(&entry.start_time, clock, diagnostics);
        let end_hour = hour_fraction(&entry.end_time, clock, diagnostics);
        let x1 = grid.time_to_x(start_hour);
        let x2 = grid.time_to_x(end_hour);

        if end_hour < start_hour {
            diagnostics.push(format!(
                "entry {} ends before it starts ({} < {})",
                idx + 1,
                entry.end_time,
                entry.start_time
            ));
        }

        // Vertical transition connector at the entry's start.
        let connector_top = match previous {
            None => grid.top,
            Some(prev) => grid.lane_line_y(prev.status),
        };
        if (connector_top - y).abs() > f64::EPSILON {
            out.push(DrawCommand::Line {
                x1,
                y1: connector_top,
                x2: x1,
                y2: y,
                weight: DUTY_LINE_WEIGHT,
                color: Color::Black,
            });
        }

        if let Some(prev) = previous {
            if start_hour + f64::EPSILON < previous_end_hour {
                diagnostics.push(format!(
                    "entry {} overlaps the previous {} interval",
                    idx + 1,
                    prev.status.to_db_str()
                ));
            }
        }

        // Horizontal status segment.
        out.push(DrawCommand::Line {
            x1,
            y1: y,
            x2,
            y2: y,
            weight: DUTY_LINE_WEIGHT,
            color: if entry.status.is_driving() {
                Color::Red
            } else {
                Color::Black
            },
        });

        previous = Some(entry);
        previous_end_hour = end_hour;
    }

    out
}
