//! Value types for the daily-log sheet: a render pass is a pure function
//! from log data to an ordered list of draw commands plus diagnostics.
//! Backends (SVG, PDF, PNG) replay the commands; none of them feed state
//! back into the renderer.

use serde::{Deserialize, Serialize};

/// Stroke/fill color. The duty line is red while driving, black
/// otherwise; chrome is always black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
}

impl Color {
    pub fn svg_name(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
        }
    }

    pub fn rgb(&self) -> (f32, f32, f32) {
        match self {
            Color::Black => (0.0, 0.0, 0.0),
            Color::Red => (0.8, 0.0, 0.0),
        }
    }
}

/// One primitive of the sheet drawing. Coordinates are in sheet units,
/// origin top-left, y growing downward; text y is the baseline.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        weight: f64,
        color: Color,
    },
    /// Unfilled outline rectangle, 1-unit stroke.
    Rect { x: f64, y: f64, w: f64, h: f64 },
    Text {
        x: f64,
        y: f64,
        size: f64,
        bold: bool,
        text: String,
    },
}

impl DrawCommand {
    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        DrawCommand::Line {
            x1,
            y1,
            x2,
            y2,
            weight: 1.0,
            color: Color::Black,
        }
    }

    pub fn text(text: impl Into<String>, x: f64, y: f64, size: f64) -> Self {
        DrawCommand::Text {
            x,
            y,
            size,
            bold: false,
            text: text.into(),
        }
    }

    pub fn bold_text(text: impl Into<String>, x: f64, y: f64, size: f64) -> Self {
        DrawCommand::Text {
            x,
            y,
            size,
            bold: true,
            text: text.into(),
        }
    }
}

/// Which wall clock offset-carrying timestamps are read in. Stored
/// entries use naive timestamps and are unaffected; this only matters
/// for data imported with explicit offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockPolicy {
    #[default]
    Local,
    Utc,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub clock: ClockPolicy,
}

/// A fully rendered sheet: fixed logical size, ordered draw commands,
/// and the diagnostics collected along the way (malformed timestamps,
/// out-of-order entries). Diagnostics never abort a draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub width: f64,
    pub height: f64,
    pub commands: Vec<DrawCommand>,
    pub diagnostics: Vec<String>,
}

impl Sheet {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn push(&mut self, cmd: DrawCommand) {
        self.commands.push(cmd);
    }

    pub fn extend(&mut self, cmds: Vec<DrawCommand>) {
        self.commands.extend(cmds);
    }

    pub fn diagnose(&mut self, message: impl Into<String>) {
        self.diagnostics.push(message.into());
    }
}
