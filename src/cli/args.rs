use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tandem", version, author, about = "A shared habit accountability companion for couples")]
pub struct Cli {
    /// Habit export file (JSON); overrides the configured path
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show streaks, completion rate, best days and monthly trend
    Stats {
        /// Only this habit (by name, case-insensitive)
        #[arg(long)]
        habit: Option<String>,
        /// Show a dot grid for the current week
        #[arg(long)]
        week: bool,
    },
    /// Show this week's completions against each habit's weekly goal
    Week {
        /// Only this habit (by name, case-insensitive)
        #[arg(long)]
        habit: Option<String>,
    },
    /// Export a plain-text weekly summary to stdout
    Export,
    /// Remember an export file path for future runs
    Use {
        /// Habit export file (JSON)
        file: PathBuf,
    },
}
