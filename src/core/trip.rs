use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::trip::{CycleRule, Trip, now_rfc3339};
use crate::ui::messages::success;
use chrono::NaiveDate;

/// Metadata collected from the CLI when opening a trip.
#[derive(Debug, Clone, Default)]
pub struct NewTrip {
    pub from_location: String,
    pub to_location: String,
    pub carrier_name: String,
    pub main_office_address: Option<String>,
    pub truck_number: Option<String>,
    pub trailer_number: Option<String>,
    pub home_terminal_address: Option<String>,
    pub document_number: Option<String>,
    pub shipper: Option<String>,
    pub commodity: Option<String>,
    pub remarks: Option<String>,
}

pub struct TripLogic;

impl TripLogic {
    /// Open a new trip for `date`.
    pub fn create(
        pool: &mut DbPool,
        date: NaiveDate,
        cycle_rule: CycleRule,
        new: NewTrip,
    ) -> AppResult<i64> {
        let trip = Trip {
            id: 0,
            date,
            from_location: new.from_location,
            to_location: new.to_location,
            carrier_name: new.carrier_name,
            main_office_address: new.main_office_address,
            truck_number: new.truck_number,
            trailer_number: new.trailer_number,
            home_terminal_address: new.home_terminal_address,
            cycle_rule,
            document_number: new.document_number,
            shipper: new.shipper,
            commodity: new.commodity,
            completed: false,
            remarks: new.remarks,
            created_at: now_rfc3339(),
        };

        let id = queries::insert_trip(&pool.conn, &trip)?;
        oplog(
            &pool.conn,
            "trip_created",
            &id.to_string(),
            &format!("Trip on {} ({})", trip.date_str(), trip.cycle_rule.to_db_str()),
        )?;

        success(format!("Trip {} created for {}", id, trip.date_str()));
        Ok(id)
    }

    /// Complete a trip: close any still-open duty entry at end of day
    /// and mark the trip row completed.
    pub fn complete(pool: &mut DbPool, trip_id: i64) -> AppResult<()> {
        let trip = queries::load_trip(pool, trip_id)?;
        if trip.completed {
            return Err(AppError::TripCompleted(trip_id));
        }

        if let Some(open) = queries::open_entry(&pool.conn, trip_id, &trip.date)? {
            let end_of_day = trip
                .date
                .and_hms_opt(23, 59, 0)
                .expect("23:59 is always a valid time");
            queries::close_entry(&pool.conn, open.id, end_of_day)?;
            super::duty::refresh_daily_log(pool, &trip, &trip.date)?;
        }

        queries::mark_trip_completed(&pool.conn, trip_id)?;
        oplog(&pool.conn, "trip_completed", &trip_id.to_string(), "Trip completed")?;

        success(format!("Trip {} completed", trip_id));
        Ok(())
    }
}
