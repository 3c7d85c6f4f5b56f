/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

use crate::models::duty_status::DutyStatus;

/// Status color used by the `list --entries` view: driving stands out
/// the same way it does on the sheet.
pub fn color_for_status(status: DutyStatus) -> &'static str {
    match status {
        DutyStatus::OffDuty => GREY,
        DutyStatus::Sleeper => BLUE,
        DutyStatus::Driving => RED,
        DutyStatus::OnDuty => YELLOW,
    }
}
