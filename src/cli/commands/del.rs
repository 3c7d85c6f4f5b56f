use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::duty::DutyLogic;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

/// Delete a trip (entries cascade) or one duty entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { trip, entry } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match (trip, entry) {
            (Some(trip_id), None) => {
                let deleted = queries::delete_trip(&pool.conn, *trip_id)?;
                if deleted == 0 {
                    return Err(AppError::UnknownTrip(*trip_id));
                }
                oplog(
                    &pool.conn,
                    "trip_deleted",
                    &trip_id.to_string(),
                    "Trip and its entries deleted",
                )?;
                success(format!("Trip {} deleted", trip_id));
            }
            (None, Some(entry_id)) => {
                DutyLogic::delete(&mut pool, *entry_id)?;
            }
            _ => {
                return Err(AppError::Other(
                    "Pass exactly one of --trip or --entry".to_string(),
                ));
            }
        }
    }
    Ok(())
}
