//! Annotation layer: the fixed textual and tabular chrome around the
//! duty grid. Positions are a static template of the paper form; only
//! the interpolated values change between sheets.

use crate::models::duty_status::DutyStatus;
use crate::models::log_details::LogDetails;
use crate::models::trip::TripDetails;
use crate::render::geometry::{GridGeometry, ROW_HEIGHT};
use crate::render::sheet::DrawCommand;
use crate::render::text::wrapped_text_commands;
use chrono::Datelike;

/// Explicit placeholder for absent metadata. One branch, one string,
/// asserted by tests.
pub const MISSING_FIELD: &str = "n/a";

const BODY_SIZE: f64 = 12.0;

/// Recap panel layout.
pub const RECAP_SECTION_WIDTH: f64 = 860.0;
pub const RECAP_COLUMNS: usize = 11;
pub const RECAP_START_X: f64 = 40.0;
pub const RECAP_START_Y: f64 = 900.0;

fn field(value: &Option<String>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => MISSING_FIELD,
    }
}

fn hours(value: &Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => MISSING_FIELD.to_string(),
    }
}

fn miles(value: &Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}"),
        None => MISSING_FIELD.to_string(),
    }
}

/// Header block: titles, split date, from/to boxes, mileage, carrier
/// and truck metadata. `from_display`/`to_display` are the already
/// resolved location strings.
pub fn header_commands(
    trip: &TripDetails,
    from_display: &str,
    to_display: &str,
    details: &LogDetails,
) -> Vec<DrawCommand> {
    let mut out = Vec::new();

    // Section titles
    out.push(DrawCommand::bold_text("Driver's Daily Log", 20.0, 40.0, BODY_SIZE));
    out.push(DrawCommand::text("(24 hours)", 20.0, 60.0, BODY_SIZE));
    out.push(DrawCommand::text("Original: File at home terminal.", 750.0, 40.0, BODY_SIZE));
    out.push(DrawCommand::text("Duplicate: Driver retains for 8 days.", 750.0, 60.0, BODY_SIZE));

    // Date fields
    out.push(DrawCommand::text(format!("Month: {:02}", trip.date.month()), 250.0, 40.0, BODY_SIZE));
    out.push(DrawCommand::text(format!("/ Day: {:02}", trip.date.day()), 350.0, 40.0, BODY_SIZE));
    out.push(DrawCommand::text(format!("/ Year: {}", trip.date.year()), 450.0, 40.0, BODY_SIZE));

    // From and to section
    out.push(DrawCommand::text("From:", 20.0, 100.0, BODY_SIZE));
    out.push(DrawCommand::text(from_display, 90.0, 100.0, BODY_SIZE));
    out.push(DrawCommand::Rect { x: 80.0, y: 80.0, w: 300.0, h: 30.0 });
    out.push(DrawCommand::text("To:", 400.0, 100.0, BODY_SIZE));
    out.push(DrawCommand::text(to_display, 450.0, 100.0, BODY_SIZE));
    out.push(DrawCommand::Rect { x: 440.0, y: 80.0, w: 300.0, h: 30.0 });

    // Mileage and carrier info
    out.push(DrawCommand::text("Total Miles Driving Today", 20.0, 160.0, BODY_SIZE));
    out.push(DrawCommand::text(miles(&details.total_miles_driving_today), 30.0, 190.0, BODY_SIZE));
    out.push(DrawCommand::Rect { x: 20.0, y: 170.0, w: 200.0, h: 30.0 });

    out.push(DrawCommand::text("Total Mileage Today", 250.0, 160.0, BODY_SIZE));
    out.push(DrawCommand::text(miles(&details.total_miles_today), 260.0, 190.0, BODY_SIZE));
    out.push(DrawCommand::Rect { x: 250.0, y: 170.0, w: 200.0, h: 30.0 });

    out.push(DrawCommand::text("Name of Carrier or Carriers", 500.0, 160.0, BODY_SIZE));
    out.push(DrawCommand::text(field(&trip.carrier_name), 510.0, 190.0, BODY_SIZE));
    out.push(DrawCommand::Rect { x: 500.0, y: 170.0, w: 400.0, h: 30.0 });

    // Truck and terminal
    out.push(DrawCommand::text("Truck/Tractor and Trailer Numbers", 20.0, 220.0, BODY_SIZE));
    out.push(DrawCommand::text(
        format!("{} / {}", field(&trip.truck_number), field(&trip.trailer_number)),
        30.0,
        250.0,
        BODY_SIZE,
    ));
    out.push(DrawCommand::Rect { x: 20.0, y: 230.0, w: 400.0, h: 30.0 });

    out.push(DrawCommand::text("Home Terminal Address", 500.0, 220.0, BODY_SIZE));
    out.push(DrawCommand::text(field(&trip.home_terminal_address), 510.0, 250.0, BODY_SIZE));
    out.push(DrawCommand::Rect { x: 500.0, y: 230.0, w: 400.0, h: 30.0 });

    out
}

/// Lane labels down the left margin plus the lane outline rectangles
/// and the per-status total-hours column on the right.
pub fn lanes_commands(grid: &GridGeometry, details: &LogDetails) -> Vec<DrawCommand> {
    let mut out = Vec::new();

    let labels = [
        "1. Off Duty",
        "2. Sleeper\nBerth",
        "3. Driving",
        "4. On Duty\n(not driving)",
    ];

    for (idx, label) in labels.iter().enumerate() {
        let row_y = grid.top + idx as f64 * ROW_HEIGHT;
        out.extend(wrapped_text_commands(label, 10.0, row_y + 20.0, 100.0, 20.0, BODY_SIZE, false));
        out.push(DrawCommand::Rect {
            x: grid.left,
            y: row_y,
            w: grid.width,
            h: ROW_HEIGHT,
        });
    }

    out.extend(wrapped_text_commands("Total\nHours", 950.0, 300.0, 100.0, 20.0, BODY_SIZE, false));

    let totals = [
        &details.total_off_duty_hours,
        &details.total_sleeper_hours,
        &details.total_driving_hours,
        &details.total_on_duty_hours,
    ];
    for (status, total) in DutyStatus::ALL.iter().zip(totals) {
        out.push(DrawCommand::text(
            hours(total),
            950.0,
            grid.lane_line_y(*status) + 5.0,
            BODY_SIZE,
        ));
    }

    out
}

/// Remarks block, shipping-document block, section rules and the two
/// instructional lines under the grid.
pub fn remarks_commands(trip: &TripDetails, details: &LogDetails) -> Vec<DrawCommand> {
    let mut out = Vec::new();
    let top = 550.0;

    out.push(DrawCommand::bold_text("Remarks", 40.0, top, 14.0));
    let remarks = details.remarks.clone().unwrap_or_default();
    out.extend(wrapped_text_commands(&remarks, 40.0, top + 30.0, 900.0, 18.0, BODY_SIZE, false));

    out.push(DrawCommand::bold_text("Shipping Documents:", 40.0, top + 150.0, BODY_SIZE));
    out.push(DrawCommand::text("DVIR or Manifest No.", 40.0, top + 170.0, BODY_SIZE));
    out.push(DrawCommand::bold_text(field(&trip.document_number), 40.0, top + 185.0, BODY_SIZE));
    out.push(DrawCommand::text("or", 40.0, top + 200.0, BODY_SIZE));
    out.push(DrawCommand::text("Shipper & Commodity", 40.0, top + 220.0, BODY_SIZE));
    out.push(DrawCommand::bold_text(
        format!("{} / {}", field(&trip.shipper), field(&trip.commodity)),
        40.0,
        top + 235.0,
        BODY_SIZE,
    ));

    // Section rules
    out.push(DrawCommand::line(20.0, 860.0, 20.0, top));
    out.push(DrawCommand::line(20.0, 860.0, 300.0, 860.0));
    out.push(DrawCommand::line(550.0, 860.0, 900.0, 860.0));

    // Instructional text
    out.extend(wrapped_text_commands(
        "Enter name of place you reported and where released from work and where each change of duty occurred.",
        175.0,
        850.0,
        800.0,
        20.0,
        BODY_SIZE,
        false,
    ));
    out.extend(wrapped_text_commands(
        "Use time standard of home terminal.",
        325.0,
        870.0,
        800.0,
        20.0,
        BODY_SIZE,
        false,
    ));

    out
}

/// The eleven recap labels in form order, values interpolated from
/// `LogDetails`.
pub fn recap_labels(details: &LogDetails) -> Vec<String> {
    vec![
        "Recap: Complete at end of day".to_string(),
        format!(
            "{}\nOn duty hours today (Lines 3 & 4)",
            hours(&details.total_on_duty_hours_today)
        ),
        "70 Hour / 8 Day Drivers".to_string(),
        format!(
            "A. {}\nTotal hours on duty last 7 days including today.",
            hours(&details.total_on_duty_hours_last_7_days)
        ),
        format!(
            "B. {}\nTotal hours available tomorrow.",
            hours(&details.available_hours_tomorrow)
        ),
        format!(
            "C. {}\nTotal hours on duty last 8 days including today.",
            hours(&details.total_on_duty_hours_last_8_days)
        ),
        "60 Hour / 7 Day Drivers".to_string(),
        format!(
            "A. {}\nTotal hours on duty last 6 days including today.",
            hours(&details.total_on_duty_hours_last_6_days)
        ),
        format!(
            "B. {}\nTotal hours available tomorrow.",
            hours(&details.available_hours_tomorrow)
        ),
        format!(
            "C. {}\nTotal hours on duty last 7 days including today.",
            hours(&details.total_on_duty_hours_last_7_days)
        ),
        "If you took 34 consecutive hours off duty, you have 60/70 hours available.".to_string(),
    ]
}

/// Recap panel: eleven equal-width columns across the fixed section.
pub fn recap_commands(details: &LogDetails) -> Vec<DrawCommand> {
    let labels = recap_labels(details);
    let column_width = RECAP_SECTION_WIDTH / labels.len() as f64;

    labels
        .iter()
        .enumerate()
        .flat_map(|(idx, label)| {
            let x = RECAP_START_X + idx as f64 * column_width;
            wrapped_text_commands(label, x, RECAP_START_Y, column_width - 10.0, 20.0, 10.0, false)
        })
        .collect()
}

/// Every annotation in one pass, grid chrome excluded.
pub fn annotation_commands(
    trip: &TripDetails,
    from_display: &str,
    to_display: &str,
    details: &LogDetails,
    grid: &GridGeometry,
) -> Vec<DrawCommand> {
    let mut out = header_commands(trip, from_display, to_display, details);
    out.extend(lanes_commands(grid, details));
    out.extend(remarks_commands(trip, details));
    out.extend(recap_commands(details));
    out
}
