//! Formatting utilities used for CLI and export outputs.

/// Render decimal hours as "HHh MMm" (or "HH:MM" in short form).
pub fn hours2readable(hours: f64, short: bool) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    let h = total_minutes / 60;
    let m = total_minutes % 60;

    if short {
        format!("{:02}:{:02}", h, m)
    } else {
        format!("{:02}h {:02}m", h, m)
    }
}

/// Wrap long remark text for terminal display.
pub fn wrap_remarks(remarks: &str, width: usize) -> String {
    textwrap::fill(remarks, width)
}
