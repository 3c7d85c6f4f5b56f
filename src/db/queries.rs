use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::duty_status::DutyStatus;
use crate::models::log_entry::LogEntry;
use crate::models::trip::{CycleRule, Trip};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Connection, Result, Row, params};

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

// ---------------------------------------------------------------------------
// Trips
// ---------------------------------------------------------------------------

pub fn map_trip_row(row: &Row) -> Result<Trip> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(AppError::InvalidDate(date_str.clone())))?;

    let cycle_str: String = row.get("cycle_rule")?;
    let cycle_rule = CycleRule::from_db_str(&cycle_str)
        .ok_or_else(|| conversion_error(AppError::InvalidCycleRule(cycle_str.clone())))?;

    Ok(Trip {
        id: row.get("id")?,
        date,
        from_location: row.get("from_location")?,
        to_location: row.get("to_location")?,
        carrier_name: row.get("carrier_name")?,
        main_office_address: row.get("main_office_address")?,
        truck_number: row.get("truck_number")?,
        trailer_number: row.get("trailer_number")?,
        home_terminal_address: row.get("home_terminal_address")?,
        cycle_rule,
        document_number: row.get("document_number")?,
        shipper: row.get("shipper")?,
        commodity: row.get("commodity")?,
        completed: row.get::<_, i64>("completed")? == 1,
        remarks: row.get("remarks")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_trip(conn: &Connection, trip: &Trip) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO trips (date, from_location, to_location, carrier_name,
                            main_office_address, truck_number, trailer_number,
                            home_terminal_address, cycle_rule, document_number,
                            shipper, commodity, completed, remarks, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
        params![
            trip.date.format("%Y-%m-%d").to_string(),
            trip.from_location,
            trip.to_location,
            trip.carrier_name,
            trip.main_office_address,
            trip.truck_number,
            trip.trailer_number,
            trip.home_terminal_address,
            trip.cycle_rule.to_db_str(),
            trip.document_number,
            trip.shipper,
            trip.commodity,
            if trip.completed { 1 } else { 0 },
            trip.remarks,
            trip.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_trip(pool: &mut DbPool, id: i64) -> AppResult<Trip> {
    let mut stmt = pool.conn.prepare("SELECT * FROM trips WHERE id = ?1")?;
    let mut rows = stmt.query_map([id], map_trip_row)?;

    match rows.next() {
        Some(r) => Ok(r?),
        None => Err(AppError::UnknownTrip(id)),
    }
}

pub fn load_trips(pool: &mut DbPool) -> AppResult<Vec<Trip>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM trips ORDER BY date ASC, id ASC")?;
    let rows = stmt.query_map([], map_trip_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn mark_trip_completed(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute("UPDATE trips SET completed = 1 WHERE id = ?1", [id])?;
    Ok(())
}

pub fn delete_trip(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM trips WHERE id = ?1", [id])?;
    Ok(n)
}

// ---------------------------------------------------------------------------
// Log entries
// ---------------------------------------------------------------------------

const TIMESTAMP_FMT: &str = "%Y-%m-%dT%H:%M:%S";

fn parse_timestamp(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FMT)
        .map_err(|_| conversion_error(AppError::InvalidTime(s.to_string())))
}

pub fn map_entry_row(row: &Row) -> Result<LogEntry> {
    let date_str: String = row.get("log_date")?;
    let log_date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(AppError::InvalidDate(date_str.clone())))?;

    let status_str: String = row.get("status")?;
    let status = DutyStatus::from_db_str(&status_str)
        .ok_or_else(|| conversion_error(AppError::InvalidDutyStatus(status_str.clone())))?;

    let start_str: String = row.get("start_time")?;
    let start_time = parse_timestamp(&start_str)?;

    let end_time = match row.get::<_, Option<String>>("end_time")? {
        Some(s) if !s.is_empty() => Some(parse_timestamp(&s)?),
        _ => None,
    };

    Ok(LogEntry {
        id: row.get("id")?,
        trip_id: row.get("trip_id")?,
        log_date,
        status,
        start_time,
        end_time,
        mileage: row.get("mileage")?,
        remarks: row.get("remarks")?,
        automated: row.get::<_, i64>("automated")? == 1,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_entry(conn: &Connection, entry: &LogEntry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO log_entries (trip_id, log_date, status, start_time, end_time,
                                  mileage, remarks, automated, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            entry.trip_id,
            entry.date_str(),
            entry.status.to_db_str(),
            entry.start_str(),
            entry.end_time.map(|t| t.format(TIMESTAMP_FMT).to_string()),
            entry.mileage,
            entry.remarks,
            if entry.automated { 1 } else { 0 },
            entry.source,
            entry.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Close an open entry at the given timestamp.
pub fn close_entry(conn: &Connection, id: i64, end: NaiveDateTime) -> AppResult<()> {
    conn.execute(
        "UPDATE log_entries SET end_time = ?1 WHERE id = ?2",
        params![end.format(TIMESTAMP_FMT).to_string(), id],
    )?;
    Ok(())
}

pub fn delete_entry(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM log_entries WHERE id = ?1", [id])?;
    Ok(n)
}

pub fn load_entries_for_date(
    pool: &mut DbPool,
    trip_id: i64,
    date: &NaiveDate,
) -> AppResult<Vec<LogEntry>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM log_entries
         WHERE trip_id = ?1 AND log_date = ?2
         ORDER BY start_time ASC, id ASC",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();
    let rows = stmt.query_map(params![trip_id, date_str], map_entry_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// The newest entry without an end time, if any.
pub fn open_entry(conn: &Connection, trip_id: i64, date: &NaiveDate) -> AppResult<Option<LogEntry>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM log_entries
         WHERE trip_id = ?1 AND log_date = ?2 AND (end_time IS NULL OR end_time = '')
         ORDER BY start_time DESC, id DESC
         LIMIT 1",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();
    let mut rows = stmt.query_map(params![trip_id, date_str], map_entry_row)?;

    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}

pub fn entry_by_id(conn: &Connection, id: i64) -> AppResult<Option<LogEntry>> {
    let mut stmt = conn.prepare("SELECT * FROM log_entries WHERE id = ?1")?;
    let mut rows = stmt.query_map([id], map_entry_row)?;

    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}

// ---------------------------------------------------------------------------
// Daily logs (derived totals)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyLogRow {
    pub trip_id: i64,
    pub log_date: String,
    pub total_off_duty_hours: f64,
    pub total_sleeper_hours: f64,
    pub total_driving_hours: f64,
    pub total_on_duty_hours: f64,
    pub total_miles_driving: f64,
    pub total_miles: f64,
    pub remarks: String,
}

pub fn upsert_daily_log(conn: &Connection, row: &DailyLogRow) -> AppResult<()> {
    conn.execute(
        "INSERT INTO daily_logs (trip_id, log_date, total_off_duty_hours,
                                 total_sleeper_hours, total_driving_hours,
                                 total_on_duty_hours, total_miles_driving,
                                 total_miles, remarks)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
         ON CONFLICT(trip_id, log_date) DO UPDATE SET
             total_off_duty_hours = excluded.total_off_duty_hours,
             total_sleeper_hours  = excluded.total_sleeper_hours,
             total_driving_hours  = excluded.total_driving_hours,
             total_on_duty_hours  = excluded.total_on_duty_hours,
             total_miles_driving  = excluded.total_miles_driving,
             total_miles          = excluded.total_miles,
             remarks              = excluded.remarks",
        params![
            row.trip_id,
            row.log_date,
            row.total_off_duty_hours,
            row.total_sleeper_hours,
            row.total_driving_hours,
            row.total_on_duty_hours,
            row.total_miles_driving,
            row.total_miles,
            row.remarks,
        ],
    )?;
    Ok(())
}

pub fn load_daily_log(
    conn: &Connection,
    trip_id: i64,
    date: &NaiveDate,
) -> AppResult<Option<DailyLogRow>> {
    let mut stmt = conn.prepare(
        "SELECT trip_id, log_date, total_off_duty_hours, total_sleeper_hours,
                total_driving_hours, total_on_duty_hours, total_miles_driving,
                total_miles, remarks
         FROM daily_logs WHERE trip_id = ?1 AND log_date = ?2",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();
    let mut rows = stmt.query_map(params![trip_id, date_str], |row| {
        Ok(DailyLogRow {
            trip_id: row.get(0)?,
            log_date: row.get(1)?,
            total_off_duty_hours: row.get(2)?,
            total_sleeper_hours: row.get(3)?,
            total_driving_hours: row.get(4)?,
            total_on_duty_hours: row.get(5)?,
            total_miles_driving: row.get(6)?,
            total_miles: row.get(7)?,
            remarks: row.get(8)?,
        })
    })?;

    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}

/// On-duty hour totals per day for a trip, oldest first. "On duty"
/// here is lines 3 & 4 of the form (driving plus on-duty-not-driving),
/// the quantity the rolling recap windows regulate.
pub fn load_on_duty_history(
    conn: &Connection,
    trip_id: i64,
) -> AppResult<Vec<(NaiveDate, f64)>> {
    let mut stmt = conn.prepare(
        "SELECT log_date, total_driving_hours + total_on_duty_hours FROM daily_logs
         WHERE trip_id = ?1
         ORDER BY log_date ASC",
    )?;

    let rows = stmt.query_map([trip_id], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        let (date_str, hours) = r?;
        let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(date_str.clone()))?;
        out.push((date, hours));
    }
    Ok(out)
}
