use anyhow::{Context, Result};
use chrono::Weekday;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_week_start() -> String {
    "sunday".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Habit export file to read when --file is not given.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    /// First day of the week for weekly goals: "sunday" (default) or "monday".
    #[serde(default = "default_week_start")]
    pub week_start: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            week_start: default_week_start(),
        }
    }
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "tandem").context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn data_dir() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.data_dir().to_path_buf())
    }

    /// Where the app drops its export when the user has not pointed us
    /// anywhere else.
    pub fn default_data_file() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("export.json"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(&path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(&path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }

    pub fn week_start_day(&self) -> Weekday {
        match self.week_start.to_lowercase().as_str() {
            "monday" | "mon" => Weekday::Mon,
            _ => Weekday::Sun,
        }
    }
}
