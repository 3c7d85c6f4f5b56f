//! Deterministic text measurement and word wrapping for the annotation
//! layer. Widths come from a per-character advance table approximating
//! the Helvetica metrics all three backends render with; the table IS
//! the renderer's width contract, so wrap decisions are identical on
//! every platform and in every output format.

use crate::render::sheet::DrawCommand;

/// Advance of one character in em units (fraction of the font size).
fn char_advance(c: char) -> f64 {
    match c {
        'i' | 'j' | 'l' | '\'' | '|' | '.' | ',' | ':' | ';' | '!' => 0.28,
        'f' | 't' | 'r' | 'I' | '(' | ')' | '[' | ']' | '/' | '\\' | ' ' => 0.36,
        'm' | 'w' | 'M' | 'W' | '@' => 0.92,
        'A'..='Z' | '&' | '%' => 0.70,
        '0'..='9' | '-' | '_' | '+' | '=' | '#' | '$' => 0.56,
        _ => 0.52,
    }
}

/// Width of a text run at the given font size, in sheet units.
pub fn text_width(text: &str, size: f64) -> f64 {
    text.chars().map(char_advance).sum::<f64>() * size
}

/// Break one paragraph on word boundaries, accumulating words until the
/// candidate line would exceed `max_width`. The first word of a line is
/// always kept even when it alone is overwide, so output never loses
/// content.
fn wrap_paragraph(paragraph: &str, max_width: f64, size: f64) -> Vec<String> {
    let words: Vec<&str> = paragraph.split_whitespace().collect();
    if words.is_empty() {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    let mut line = String::new();

    for word in words {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };

        if !line.is_empty() && text_width(&candidate, size) > max_width {
            lines.push(line);
            line = word.to_string();
        } else {
            line = candidate;
        }
    }

    lines.push(line);
    lines
}

/// Wrap text against a pixel max-width. Explicit `\n` characters force
/// line breaks independent of the width wrapping.
pub fn wrap_to_width(text: &str, max_width: f64, size: f64) -> Vec<String> {
    text.split('\n')
        .flat_map(|paragraph| wrap_paragraph(paragraph, max_width, size))
        .collect()
}

/// Emit one text command per wrapped line, stepping `line_height` per
/// line starting at baseline `y`.
pub fn wrapped_text_commands(
    text: &str,
    x: f64,
    y: f64,
    max_width: f64,
    line_height: f64,
    size: f64,
    bold: bool,
) -> Vec<DrawCommand> {
    wrap_to_width(text, max_width, size)
        .into_iter()
        .enumerate()
        .map(|(i, line)| DrawCommand::Text {
            x,
            y: y + i as f64 * line_height,
            size,
            bold,
            text: line,
        })
        .collect()
}
