use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::fs;
use std::process::Command as ProcessCommand;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                println!("{content}");
            } else {
                warning(format!("No configuration file at {}", path.display()));
            }
            return Ok(());
        }

        if *edit_config {
            let editor_cmd = editor
                .clone()
                .or_else(|| std::env::var("EDITOR").ok())
                .or_else(|| std::env::var("VISUAL").ok())
                .unwrap_or_else(|| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            info(format!("Opening {} with {}", path.display(), editor_cmd));

            let status = ProcessCommand::new(&editor_cmd)
                .arg(&path)
                .status()
                .map_err(|e| AppError::Config(format!("Failed to launch {editor_cmd}: {e}")))?;

            if !status.success() {
                return Err(AppError::Config(format!(
                    "Editor exited with status {status}"
                )));
            }
            return Ok(());
        }

        warning("Nothing to do: pass --print or --edit.");
    }
    Ok(())
}
