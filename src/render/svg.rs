//! Serialize a rendered sheet into standalone SVG markup. The markup is
//! both an export format of its own and the input to the PNG rasterizer.

use crate::render::sheet::{DrawCommand, Sheet};
use std::fmt::Write;

const FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the command list to an SVG document string.
pub fn render_svg(sheet: &Sheet) -> String {
    let mut svg = String::new();

    let _ = writeln!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}' viewBox='0 0 {w} {h}'>",
        w = sheet.width,
        h = sheet.height
    );
    let _ = writeln!(
        svg,
        "  <rect width='{w}' height='{h}' fill='white'/>",
        w = sheet.width,
        h = sheet.height
    );

    for cmd in &sheet.commands {
        match cmd {
            DrawCommand::Line {
                x1,
                y1,
                x2,
                y2,
                weight,
                color,
            } => {
                let _ = writeln!(
                    svg,
                    "  <line x1='{x1}' y1='{y1}' x2='{x2}' y2='{y2}' stroke='{}' stroke-width='{weight}'/>",
                    color.svg_name()
                );
            }
            DrawCommand::Rect { x, y, w, h } => {
                let _ = writeln!(
                    svg,
                    "  <rect x='{x}' y='{y}' width='{w}' height='{h}' fill='none' stroke='black' stroke-width='1'/>"
                );
            }
            DrawCommand::Text {
                x,
                y,
                size,
                bold,
                text,
            } => {
                let weight = if *bold { " font-weight='bold'" } else { "" };
                let _ = writeln!(
                    svg,
                    "  <text x='{x}' y='{y}' font-family='{FONT_FAMILY}' font-size='{size}'{weight} fill='black'>{}</text>",
                    escape_xml(text)
                );
            }
        }
    }

    svg.push_str("</svg>\n");
    svg
}
