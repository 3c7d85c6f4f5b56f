use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if !*print {
            warning("Nothing to do: pass --print.");
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;
        let rows = load_log(&pool.conn)?;

        if rows.is_empty() {
            warning("The internal log is empty.");
            return Ok(());
        }

        let mut table = Table::new(&["date", "operation", "message"]);
        for (date, operation, message) in rows {
            table.add_row(vec![date, operation, message]);
        }
        println!("{}", table.render());
    }
    Ok(())
}
