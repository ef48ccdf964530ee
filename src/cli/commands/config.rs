use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        init,
        path,
    } = cmd
    {
        if *path {
            println!("{}", Config::config_file().display());
        }

        if *print_config {
            let yaml = serde_yaml::to_string(cfg)
                .map_err(|e| AppError::Config(e.to_string()))?;
            println!("{}", yaml);
        }

        if *check {
            let file = Config::config_file();
            let content = fs::read_to_string(&file)
                .map_err(|_| AppError::Config(format!("{} not found", file.display())))?;
            serde_yaml::from_str::<Config>(&content)
                .map_err(|e| AppError::Config(e.to_string()))?;
            success("Configuration file is valid");
        }

        if *init {
            Config::default().save()?;
            success(format!(
                "Default configuration written to {}",
                Config::config_file().display()
            ));
        }
    }
    Ok(())
}
