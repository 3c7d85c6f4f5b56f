//! Sheet orchestration: load a trip day from the database, resolve the
//! location fields, assemble the renderer inputs, run the draw pass and
//! hand the command list to the requested backend.

use crate::core::calculator::recap::rolling_recap;
use crate::core::calculator::totals::daily_totals;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::export::pdf::PdfManager;
use crate::export::png::export_png;
use crate::export::{SheetFormat, ensure_writable, notify_export_success};
use crate::models::gps::{AddressResolver, resolve_display};
use crate::models::log_details::LogDetails;
use crate::models::log_entry::{LogEntry, LogEntryRecord};
use crate::models::trip::Trip;
use crate::render::svg::render_svg;
use crate::render::{RenderOptions, Sheet, render_sheet};
use crate::ui::messages::{info, warning};
use chrono::NaiveDate;
use std::fs;
use std::io;
use std::path::Path;

pub struct SheetLogic;

impl SheetLogic {
    /// Render the daily log sheet of one trip day and write it to `file`.
    pub fn render(
        pool: &mut DbPool,
        trip_id: i64,
        date: Option<NaiveDate>,
        format: &SheetFormat,
        file: &str,
        force: bool,
        options: &RenderOptions,
        resolver: &dyn AddressResolver,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let trip = queries::load_trip(pool, trip_id)?;
        let date = date.unwrap_or(trip.date);

        let entries = queries::load_entries_for_date(pool, trip_id, &date)?;
        if entries.is_empty() {
            return Err(AppError::NoEntriesForDate(date.format("%Y-%m-%d").to_string()));
        }

        let sheet = Self::build_sheet(pool, &trip, &date, &entries, options, resolver)?;

        for diag in &sheet.diagnostics {
            warning(format!("sheet: {diag}"));
        }

        info(format!(
            "Rendering daily log for trip {} on {} → {}",
            trip_id,
            date.format("%Y-%m-%d"),
            format.as_str()
        ));

        match format {
            SheetFormat::Pdf => {
                let mut pdf = PdfManager::new();
                pdf.draw_sheet(&sheet);
                pdf.save(path)
                    .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;
            }
            SheetFormat::Svg => {
                fs::write(path, render_svg(&sheet))?;
            }
            SheetFormat::Png => {
                export_png(&sheet, path)?;
            }
        }

        oplog(
            &pool.conn,
            "sheet_rendered",
            &trip_id.to_string(),
            &format!("{} sheet for {}", format.as_str(), date.format("%Y-%m-%d")),
        )?;
        notify_export_success("Sheet", path);

        Ok(())
    }

    /// Assemble renderer inputs for one trip day and run the draw pass.
    /// Address resolution happens here, before rendering begins.
    pub fn build_sheet(
        pool: &mut DbPool,
        trip: &Trip,
        date: &NaiveDate,
        entries: &[LogEntry],
        options: &RenderOptions,
        resolver: &dyn AddressResolver,
    ) -> AppResult<Sheet> {
        let records: Vec<LogEntryRecord> = entries.iter().map(LogEntry::to_record).collect();
        let details = Self::build_details(pool, trip, date, entries)?;

        let from_display = resolve_display(Some(trip.from_location.as_str()), resolver);
        let to_display = resolve_display(Some(trip.to_location.as_str()), resolver);

        let mut trip_details = trip.details();
        trip_details.date = *date;

        Ok(render_sheet(
            &records,
            &trip_details,
            &details,
            &from_display,
            &to_display,
            options,
        ))
    }

    /// Derived scalars for the recap panel and the totals column. The
    /// stored daily_logs row is authoritative when present; otherwise
    /// the totals are computed from the entries on the fly.
    fn build_details(
        pool: &mut DbPool,
        trip: &Trip,
        date: &NaiveDate,
        entries: &[LogEntry],
    ) -> AppResult<LogDetails> {
        let stored = queries::load_daily_log(&pool.conn, trip.id, date)?;
        let computed = daily_totals(entries);

        let (off, sleeper, driving, on_duty, miles_driving, miles_total, remarks) = match stored {
            Some(row) => (
                row.total_off_duty_hours,
                row.total_sleeper_hours,
                row.total_driving_hours,
                row.total_on_duty_hours,
                row.total_miles_driving,
                row.total_miles,
                row.remarks,
            ),
            None => (
                computed.off_duty_hours,
                computed.sleeper_hours,
                computed.driving_hours,
                computed.on_duty_hours,
                computed.miles_driving,
                computed.miles_total,
                trip.remarks.clone().unwrap_or_default(),
            ),
        };

        let history = queries::load_on_duty_history(&pool.conn, trip.id)?;
        let recap = rolling_recap(&history, *date, trip.cycle_rule);

        Ok(LogDetails {
            total_off_duty_hours: Some(off),
            total_sleeper_hours: Some(sleeper),
            total_driving_hours: Some(driving),
            total_on_duty_hours: Some(on_duty),
            total_miles_driving_today: Some(miles_driving),
            total_miles_today: Some(miles_total),
            total_on_duty_hours_today: Some(driving + on_duty),
            total_on_duty_hours_last_6_days: Some(recap.on_duty_last_6_days),
            total_on_duty_hours_last_7_days: Some(recap.on_duty_last_7_days),
            total_on_duty_hours_last_8_days: Some(recap.on_duty_last_8_days),
            available_hours_tomorrow: Some(recap.available_hours_tomorrow),
            remarks: if remarks.is_empty() { None } else { Some(remarks) },
        })
    }
}
