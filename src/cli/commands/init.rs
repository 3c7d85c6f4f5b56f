use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};

/// Initialize config file and database schema.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test).map_err(AppError::from)?;

    let cfg = if let Some(custom) = &cli.db {
        Config {
            database: custom.clone(),
            ..Config::default()
        }
    } else {
        Config::load()
    };

    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;

    Ok(())
}
