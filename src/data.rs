//! Loading of the habit export produced by the app's document store. The
//! envelope is parsed strictly; individual status records are normalized
//! leniently (see `models::record`).

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::models::{DayStatus, Habit, RawDayStatus, normalize_records};

#[derive(Debug, Error)]
pub enum DataError {
    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// One habit as it appears in the export file.
#[derive(Debug, Deserialize)]
struct HabitExport {
    #[serde(flatten)]
    habit: Habit,
    #[serde(default)]
    records: Vec<RawDayStatus>,
}

#[derive(Debug, Default, Deserialize)]
struct Export {
    #[serde(default)]
    habits: Vec<HabitExport>,
}

/// A habit with its status records normalized to calendar days.
#[derive(Debug)]
pub struct HabitData {
    pub habit: Habit,
    pub records: Vec<DayStatus>,
}

impl HabitData {
    /// Whether a done record for `today` already exists. The CLI has no
    /// optimistic pending state of its own, so this stands in for the app's
    /// "marked complete today" flag.
    pub fn today_done(&self, today: NaiveDate) -> bool {
        self.records.iter().any(|r| r.date == today && r.done)
    }
}

pub fn load_export(path: &Path) -> Result<Vec<HabitData>, DataError> {
    let content = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let export: Export = serde_json::from_str(&content).map_err(|source| DataError::Json {
        path: path.display().to_string(),
        source,
    })?;

    log::debug!("loaded {} habits from {}", export.habits.len(), path.display());

    Ok(export
        .habits
        .into_iter()
        .map(|h| HabitData {
            records: normalize_records(&h.records),
            habit: h.habit,
        })
        .collect())
}
