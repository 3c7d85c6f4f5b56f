use crate::core::calculator::totals::daily_totals;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries::{self, DailyLogRow};
use crate::errors::{AppError, AppResult};
use crate::models::duty_status::DutyStatus;
use crate::models::log_entry::LogEntry;
use crate::models::trip::Trip;
use crate::ui::messages::success;
use crate::utils::time::at_date;
use chrono::{NaiveDate, NaiveTime};

pub struct DutyLogic;

impl DutyLogic {
    /// Append a duty-status entry to a trip's day.
    ///
    /// A still-open previous entry is closed at the new start time, the
    /// way a status change on an ELD ends the previous status. The new
    /// entry must not start before the day's latest recorded time.
    #[allow(clippy::too_many_arguments)]
    pub fn add(
        pool: &mut DbPool,
        trip_id: i64,
        date: NaiveDate,
        status: DutyStatus,
        start: NaiveTime,
        end: Option<NaiveTime>,
        mileage: f64,
        remarks: Option<String>,
        automated: bool,
    ) -> AppResult<i64> {
        let trip = queries::load_trip(pool, trip_id)?;
        if trip.completed {
            return Err(AppError::TripCompleted(trip_id));
        }

        let start_ts = at_date(date, start);
        let end_ts = end.map(|t| at_date(date, t));

        if let Some(end_ts) = end_ts
            && end_ts < start_ts
        {
            return Err(AppError::EntrySequence(format!(
                "end {} is before start {}",
                end_ts.format("%H:%M"),
                start_ts.format("%H:%M")
            )));
        }

        //
        // 1. Sequencing against the existing day
        //
        let existing = queries::load_entries_for_date(pool, trip_id, &date)?;
        if let Some(last) = existing.last() {
            let last_known = last.end_time.unwrap_or(last.start_time);
            if start_ts < last_known {
                return Err(AppError::EntrySequence(format!(
                    "new entry at {} starts before the day's latest time {}",
                    start_ts.format("%H:%M"),
                    last_known.format("%H:%M")
                )));
            }
        }

        //
        // 2. Close a still-open previous entry at the new start
        //
        if let Some(open) = queries::open_entry(&pool.conn, trip_id, &date)? {
            queries::close_entry(&pool.conn, open.id, start_ts)?;
        }

        //
        // 3. Insert the new entry
        //
        let entry = LogEntry::new(
            trip_id,
            date,
            status,
            start_ts,
            end_ts,
            mileage,
            remarks.unwrap_or_default(),
            automated,
        );
        let id = queries::insert_entry(&pool.conn, &entry)?;

        //
        // 4. Refresh derived totals for the day
        //
        refresh_daily_log(pool, &trip, &date)?;

        oplog(
            &pool.conn,
            "entry_added",
            &id.to_string(),
            &format!("{} from {}", status.to_db_str(), start_ts.format("%H:%M")),
        )?;

        success(format!(
            "Entry {} recorded: {} at {}",
            id,
            status.label(),
            start_ts.format("%H:%M")
        ));
        Ok(id)
    }

    /// Delete one entry and refresh the day it belonged to.
    pub fn delete(pool: &mut DbPool, entry_id: i64) -> AppResult<()> {
        let entry = queries::entry_by_id(&pool.conn, entry_id)?
            .ok_or_else(|| AppError::Other(format!("No log entry with id {entry_id}")))?;

        queries::delete_entry(&pool.conn, entry_id)?;

        let trip = queries::load_trip(pool, entry.trip_id)?;
        refresh_daily_log(pool, &trip, &entry.log_date)?;

        oplog(
            &pool.conn,
            "entry_deleted",
            &entry_id.to_string(),
            &format!("{} on {}", entry.status.to_db_str(), entry.date_str()),
        )?;

        success(format!("Entry {} deleted", entry_id));
        Ok(())
    }
}

/// Recompute and store the daily totals row for one trip day.
pub fn refresh_daily_log(pool: &mut DbPool, trip: &Trip, date: &NaiveDate) -> AppResult<()> {
    let entries = queries::load_entries_for_date(pool, trip.id, date)?;
    let totals = daily_totals(&entries);

    let row = DailyLogRow {
        trip_id: trip.id,
        log_date: date.format("%Y-%m-%d").to_string(),
        total_off_duty_hours: totals.off_duty_hours,
        total_sleeper_hours: totals.sleeper_hours,
        total_driving_hours: totals.driving_hours,
        total_on_duty_hours: totals.on_duty_hours,
        total_miles_driving: totals.miles_driving,
        total_miles: totals.miles_total,
        remarks: trip.remarks.clone().unwrap_or_default(),
    };

    queries::upsert_daily_log(&pool.conn, &row)?;
    Ok(())
}
