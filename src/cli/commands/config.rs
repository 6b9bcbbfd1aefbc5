use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                println!("{content}");
            } else {
                // No file yet: show the effective configuration
                let yaml =
                    serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
                info("No config file found, effective defaults:");
                println!("{yaml}");
            }
        }

        if *check {
            // Parse and validate the typed fields
            let loaded = Config::load();
            loaded.work_window()?;
            loaded.cutoff()?;
            success("Configuration is valid.");
        }
    }
    Ok(())
}
