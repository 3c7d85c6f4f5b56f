use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::date;
use crate::utils::formatting::{hours2readable, wrap_remarks};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { trip, date, entries } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        if *entries {
            let trip_id =
                trip.ok_or_else(|| AppError::Other("--entries requires --trip".to_string()))?;
            return list_entries(&mut pool, trip_id, date.as_deref());
        }

        list_trips(&mut pool, date.as_deref())
    } else {
        Ok(())
    }
}

fn list_trips(pool: &mut DbPool, date_filter: Option<&str>) -> AppResult<()> {
    let mut trips = queries::load_trips(pool)?;

    if let Some(filter) = date_filter {
        let d = date::parse_date(filter).ok_or_else(|| AppError::InvalidDate(filter.to_string()))?;
        trips.retain(|t| t.date == d);
    }

    if trips.is_empty() {
        warning("No trips found.");
        return Ok(());
    }

    let mut table = Table::new(&["id", "date", "from", "to", "carrier", "cycle", "state"]);
    for t in &trips {
        table.add_row(vec![
            t.id.to_string(),
            t.date_str(),
            t.from_location.clone(),
            t.to_location.clone(),
            t.carrier_name.clone(),
            t.cycle_rule.to_db_str().to_string(),
            if t.completed { "completed" } else { "active" }.to_string(),
        ]);
    }
    println!("{}", table.render());
    Ok(())
}

fn list_entries(pool: &mut DbPool, trip_id: i64, date_filter: Option<&str>) -> AppResult<()> {
    let trip = queries::load_trip(pool, trip_id)?;
    let log_date = match date_filter {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
        None => trip.date,
    };

    let entries = queries::load_entries_for_date(pool, trip_id, &log_date)?;
    if entries.is_empty() {
        warning(format!(
            "No duty entries for trip {} on {}.",
            trip_id,
            log_date.format("%Y-%m-%d")
        ));
        return Ok(());
    }

    println!(
        "Trip {} on {} ({})\n",
        trip_id,
        log_date.format("%Y-%m-%d"),
        trip.cycle_rule.to_db_str()
    );

    let mut table = Table::new(&["id", "status", "start", "end", "hours", "miles", "src"]);
    for e in &entries {
        let end = match e.end_time {
            Some(t) => t.format("%H:%M").to_string(),
            None => "--:--".to_string(),
        };
        let status_cell = format!(
            "{}{}{}",
            color_for_status(e.status),
            e.status.label(),
            RESET
        );
        table.add_row(vec![
            e.id.to_string(),
            status_cell,
            e.start_time.format("%H:%M").to_string(),
            end,
            hours2readable(e.duration_minutes() as f64 / 60.0, true),
            format!("{:.1}", e.mileage),
            if e.automated {
                "auto".to_string()
            } else {
                e.source.clone()
            },
        ]);
    }
    println!("{}", table.render());

    if let Some(daily) = queries::load_daily_log(&pool.conn, trip_id, &log_date)?
        && !daily.remarks.is_empty()
    {
        println!("Remarks:\n{}", wrap_remarks(&daily.remarks, 78));
    }

    Ok(())
}
