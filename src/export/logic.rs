use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{EntryExport, entries_to_table, get_headers};
use crate::export::pdf::PdfManager;
use crate::export::range::parse_range;
use crate::export::xlsx::export_xlsx;
use crate::export::notify_export_success;
use crate::ui::messages::warning;
use crate::utils::date::month_name;
use chrono::NaiveDate;
use rusqlite::{Row, params};
use std::io;
use std::path::Path;

/// High-level entry export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the raw entry table.
    ///
    /// - `format`: csv | json | xlsx | pdf
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"`, or one of
    ///   `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, `start:end`
    pub fn export(
        pool: &mut DbPool,
        format: &ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let entries = load_entries(pool, date_bounds)?;

        if entries.is_empty() {
            warning("No log entries found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&entries, path)?,
            ExportFormat::Json => export_json(&entries, path)?,
            ExportFormat::Xlsx => export_xlsx(&entries, path)?,
            ExportFormat::Pdf => {
                let title = build_pdf_title(range);
                let mut pdf = PdfManager::new();
                pdf.write_table(&title, &get_headers(), &entries_to_table(&entries));
                pdf.save(path)
                    .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;
                notify_export_success("PDF", path);
            }
        }

        Ok(())
    }
}

/// PDF title for the selected period.
fn build_pdf_title(period: &Option<String>) -> String {
    let p = match period {
        Some(p) if !p.eq_ignore_ascii_case("all") => p,
        _ => return "Duty log entries".to_string(),
    };

    match p.len() {
        // YYYY
        4 => format!("Duty log entries for year {}", p),

        // YYYY-MM
        7 => match p.split('-').collect::<Vec<_>>().as_slice() {
            [year, month] => {
                format!("Duty log entries for {} {}", month_name(month), year)
            }
            _ => "Duty log entries".to_string(),
        },

        // YYYY-MM-DD
        10 => format!("Duty log entries for {}", p),

        // YYYY-MM-DD:YYYY-MM-DD
        21 => match p.split(':').collect::<Vec<_>>().as_slice() {
            [start, end] => format!("Duty log entries from {} to {}", start, end),
            _ => "Duty log entries".to_string(),
        },

        _ => "Duty log entries".to_string(),
    }
}

/// Load the export rows, optionally bounded by date.
fn load_entries(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<EntryExport>> {
    let conn = &mut pool.conn;

    let mut entries = Vec::new();

    match bounds {
        None => {
            let mut stmt = conn.prepare(
                "SELECT id, trip_id, log_date, status, start_time, end_time,
                        mileage, automated, source
                 FROM log_entries
                 ORDER BY log_date ASC, start_time ASC",
            )?;

            let rows = stmt.query_map([], map_row)?;
            for r in rows {
                entries.push(r?);
            }
        }
        Some((start, end)) => {
            let start_str = start.format("%Y-%m-%d").to_string();
            let end_str = end.format("%Y-%m-%d").to_string();

            let mut stmt = conn.prepare(
                "SELECT id, trip_id, log_date, status, start_time, end_time,
                        mileage, automated, source
                 FROM log_entries
                 WHERE log_date BETWEEN ?1 AND ?2
                 ORDER BY log_date ASC, start_time ASC",
            )?;

            let rows = stmt.query_map(params![start_str, end_str], map_row)?;
            for r in rows {
                entries.push(r?);
            }
        }
    }

    Ok(entries)
}

/// Mapping DB → EntryExport (shared by both query paths).
fn map_row(row: &Row<'_>) -> rusqlite::Result<EntryExport> {
    Ok(EntryExport {
        id: row.get(0)?,
        trip_id: row.get(1)?,
        log_date: row.get(2)?,
        status: row.get(3)?,
        start_time: row.get(4)?,
        end_time: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
        mileage: row.get(6)?,
        automated: row.get::<_, i64>(7)? == 1,
        source: row.get(8)?,
    })
}
