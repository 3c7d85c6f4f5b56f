//! Schema creation and upgrades. Every migration is idempotent; the
//! versioned ones leave a marker row in the internal `log` table so
//! they run exactly once per database.

use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn create_trips_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS trips (
            id                    INTEGER PRIMARY KEY AUTOINCREMENT,
            date                  TEXT NOT NULL,
            from_location         TEXT NOT NULL DEFAULT '',
            to_location           TEXT NOT NULL DEFAULT '',
            carrier_name          TEXT NOT NULL DEFAULT '',
            main_office_address   TEXT,
            truck_number          TEXT,
            trailer_number        TEXT,
            home_terminal_address TEXT,
            cycle_rule            TEXT NOT NULL DEFAULT '70/8' CHECK(cycle_rule IN ('70/8','60/7')),
            document_number       TEXT,
            shipper               TEXT,
            commodity             TEXT,
            completed             INTEGER NOT NULL DEFAULT 0,
            remarks               TEXT,
            created_at            TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_trips_date ON trips(date);
        "#,
    )?;
    Ok(())
}

fn create_log_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log_entries (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            trip_id    INTEGER NOT NULL REFERENCES trips(id) ON DELETE CASCADE,
            log_date   TEXT NOT NULL,
            status     TEXT NOT NULL CHECK(status IN ('off_duty','sleeper','driving','on_duty')),
            start_time TEXT NOT NULL,
            end_time   TEXT,
            mileage    REAL NOT NULL DEFAULT 0,
            remarks    TEXT NOT NULL DEFAULT '',
            automated  INTEGER NOT NULL DEFAULT 0,
            source     TEXT NOT NULL DEFAULT 'cli',
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entries_trip_date ON log_entries(trip_id, log_date);
        CREATE INDEX IF NOT EXISTS idx_entries_date_start ON log_entries(log_date, start_time);
        "#,
    )?;
    Ok(())
}

fn create_daily_logs_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS daily_logs (
            id                   INTEGER PRIMARY KEY AUTOINCREMENT,
            trip_id              INTEGER NOT NULL REFERENCES trips(id) ON DELETE CASCADE,
            log_date             TEXT NOT NULL,
            total_off_duty_hours REAL NOT NULL DEFAULT 0,
            total_sleeper_hours  REAL NOT NULL DEFAULT 0,
            total_driving_hours  REAL NOT NULL DEFAULT 0,
            total_on_duty_hours  REAL NOT NULL DEFAULT 0,
            total_miles_driving  REAL NOT NULL DEFAULT 0,
            total_miles          REAL NOT NULL DEFAULT 0,
            remarks              TEXT NOT NULL DEFAULT '',
            UNIQUE(trip_id, log_date)
        );
        "#,
    )?;
    Ok(())
}

/// Early databases stored only a single truck number; the trailer
/// column arrived with the sheet renderer.
fn migrate_add_trailer_number(conn: &Connection) -> Result<()> {
    let version = "20250514_0002_add_trailer_number";

    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    let mut cols = conn.prepare("PRAGMA table_info('trips')")?;
    let has_column = cols
        .query_map([], |row| row.get::<_, String>(1))?
        .filter_map(|c| c.ok())
        .any(|c| c == "trailer_number");

    if !has_column {
        conn.execute("ALTER TABLE trips ADD COLUMN trailer_number TEXT;", [])?;
    }

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added trailer_number to trips')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'trailer_number' to trips table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table (migration markers live there)
    ensure_log_table(conn)?;

    // 2) Base schema
    let trips_existed = table_exists(conn, "trips")?;
    create_trips_table(conn)?;
    create_log_entries_table(conn)?;
    create_daily_logs_table(conn)?;

    if !trips_existed {
        success("Created trips / log_entries / daily_logs tables.");
    }

    // 3) Versioned upgrades for databases created before the columns existed
    if trips_existed {
        migrate_add_trailer_number(conn)?;
    }

    Ok(())
}
