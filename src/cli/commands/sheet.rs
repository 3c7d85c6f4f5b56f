use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sheet::SheetLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::gps::OfflineResolver;
use crate::utils::date;

/// Render a driver daily log sheet.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sheet {
        trip,
        date,
        format,
        file,
        force,
    } = cmd
    {
        let log_date = match date {
            Some(s) => {
                Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?)
            }
            None => None,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        SheetLogic::render(
            &mut pool,
            *trip,
            log_date,
            format,
            file,
            *force,
            &cfg.render_options(),
            &OfflineResolver,
        )?;
    }
    Ok(())
}
