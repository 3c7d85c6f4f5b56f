use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::duty::DutyLogic;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::duty_status::DutyStatus;
use crate::utils::date;
use crate::utils::time::{parse_optional_time, parse_time};

/// Record a duty-status change.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Duty {
        status,
        trip,
        date,
        start,
        end,
        miles,
        remarks,
        automated,
    } = cmd
    {
        //
        // 1. Parse status (closed set, loud failure)
        //
        let duty_status = DutyStatus::from_code(status).ok_or_else(|| {
            AppError::InvalidDutyStatus(format!(
                "'{}'. Use one of: off, sb, d, on (or the full names)",
                status
            ))
        })?;

        //
        // 2. Parse times
        //
        let start_parsed =
            parse_time(start).ok_or_else(|| AppError::InvalidTime(start.to_string()))?;
        let end_parsed = parse_optional_time(end.as_ref())?;

        //
        // 3. Open DB, resolve log date (trip date when omitted)
        //
        let mut pool = DbPool::new(&cfg.database)?;

        let log_date = match date {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => queries::load_trip(&mut pool, *trip)?.date,
        };

        //
        // 4. Execute logic
        //
        DutyLogic::add(
            &mut pool,
            *trip,
            log_date,
            duty_status,
            start_parsed,
            end_parsed,
            miles.unwrap_or(0.0),
            remarks.clone(),
            *automated,
        )?;
    }

    Ok(())
}
