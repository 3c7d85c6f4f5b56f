mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
pub mod pdf;
pub mod png;
mod range;
mod xlsx;

pub use logic::ExportLogic;
pub use model::EntryExport;

pub(crate) use fs_utils::ensure_writable;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for all export paths.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

/// Tabular export formats for the raw entry data.
#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// Output formats of the rendered daily-log sheet.
#[derive(Clone, Debug, ValueEnum)]
pub enum SheetFormat {
    Pdf,
    Svg,
    Png,
}

impl SheetFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            SheetFormat::Pdf => "pdf",
            SheetFormat::Svg => "svg",
            SheetFormat::Png => "png",
        }
    }
}
