use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::trip::{NewTrip, TripLogic};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::trip::CycleRule;
use crate::utils::date;

/// Open a new trip, or complete an existing one with --complete.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Trip {
        date,
        from,
        to,
        carrier,
        office,
        truck,
        trailer,
        terminal,
        cycle,
        document,
        shipper,
        commodity,
        remarks,
        complete,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        //
        // Completion mode
        //
        if let Some(trip_id) = complete {
            return TripLogic::complete(&mut pool, *trip_id);
        }

        //
        // 1. Parse date (mandatory when creating)
        //
        let date_str = date
            .as_ref()
            .ok_or_else(|| AppError::InvalidDate("missing trip date".to_string()))?;
        let d = date::parse_date(date_str)
            .ok_or_else(|| AppError::InvalidDate(date_str.to_string()))?;

        //
        // 2. Parse cycle rule (config default when omitted)
        //
        let cycle_str = cycle.clone().unwrap_or_else(|| cfg.default_cycle_rule.clone());
        let cycle_rule = CycleRule::from_db_str(&cycle_str)
            .ok_or_else(|| AppError::InvalidCycleRule(cycle_str.clone()))?;

        //
        // 3. Assemble metadata, falling back to carrier defaults
        //
        let new = NewTrip {
            from_location: from.clone().unwrap_or_default(),
            to_location: to.clone().unwrap_or_default(),
            carrier_name: carrier
                .clone()
                .or_else(|| cfg.carrier_name.clone())
                .unwrap_or_default(),
            main_office_address: office.clone(),
            truck_number: truck.clone(),
            trailer_number: trailer.clone(),
            home_terminal_address: terminal
                .clone()
                .or_else(|| cfg.home_terminal_address.clone()),
            document_number: document.clone(),
            shipper: shipper.clone(),
            commodity: commodity.clone(),
            remarks: remarks.clone(),
        };

        TripLogic::create(&mut pool, d, cycle_rule, new)?;
    }

    Ok(())
}
