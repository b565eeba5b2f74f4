use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day's completion marker for one habit, normalized to a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStatus {
    pub date: NaiveDate,
    pub done: bool,
}

impl DayStatus {
    pub fn new(date: NaiveDate, done: bool) -> Self {
        Self { date, done }
    }
}

/// A status record as the app's document store exports it. Either field may
/// be absent, and `date` may carry a time component.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDayStatus {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub done: Option<bool>,
}

impl RawDayStatus {
    /// Coerce to a `DayStatus`. A missing or unparseable date yields `None`;
    /// a missing `done` counts as not completed.
    pub fn normalize(&self) -> Option<DayStatus> {
        let date = parse_day(self.date.as_deref()?)?;
        Some(DayStatus {
            date,
            done: self.done.unwrap_or(false),
        })
    }
}

/// Parse a calendar day from an export date string. Any time component after
/// the day ("2026-08-04T09:30:00Z", "2026-08-04 09:30") is truncated so that
/// equality and ordering operate on whole days only.
pub fn parse_day(s: &str) -> Option<NaiveDate> {
    let day = s.trim();
    let day = day.split(|c| c == 'T' || c == ' ').next().unwrap_or(day);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Normalize a batch of raw records, dropping the unusable ones.
pub fn normalize_records(raw: &[RawDayStatus]) -> Vec<DayStatus> {
    let mut out = Vec::with_capacity(raw.len());
    for rec in raw {
        match rec.normalize() {
            Some(day) => out.push(day),
            None => log::warn!(
                "skipping status record with missing or invalid date: {:?}",
                rec.date
            ),
        }
    }
    out
}
