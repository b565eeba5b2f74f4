mod cli;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers;
use tandem::config::AppConfig;
use tandem::data;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = AppConfig::load().context("Loading config")?;

    match cli.command {
        // Remembering an export path needs no data load
        Commands::Use { file } => {
            handlers::handle_use(&mut config, file)?;
        }

        cmd => {
            let path = match cli.file.or_else(|| config.data_file.clone()) {
                Some(path) => path,
                None => AppConfig::default_data_file()?,
            };
            let habits = data::load_export(&path)
                .with_context(|| format!("Loading habit export {:?}", path))?;

            match cmd {
                Commands::Stats { habit, week } => {
                    handlers::handle_stats(&habits, &config, habit.as_deref(), week)?;
                }
                Commands::Week { habit } => {
                    handlers::handle_week(&habits, &config, habit.as_deref())?;
                }
                Commands::Export => {
                    handlers::handle_export(&habits, &config)?;
                }
                Commands::Use { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
