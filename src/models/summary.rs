use chrono::Weekday;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub current: u32,
    pub best: u32,
}

/// Completion count for one weekday, used for the best-days ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayCount {
    pub weekday: Weekday,
    pub count: u32,
}

/// Derived progress metrics for one habit. Recomputed on demand, never
/// persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub streak: Streak,
    /// Completed days over observed days in the trailing 30-day window, 0–100.
    pub completion_rate: u8,
    /// Up to three weekdays ranked by completion count.
    pub best_days: Vec<WeekdayCount>,
    /// Percentage-point delta, this month to date vs. the whole of last month.
    pub monthly_trend: i32,
}
