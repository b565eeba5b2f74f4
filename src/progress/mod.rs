//! The habit progress calculator: pure functions from per-day status records
//! to streaks, rates, and trends. No I/O and no hidden clock; callers pass
//! `today` explicitly, so every computation is deterministic and repeatable.

pub mod best_days;
pub mod rate;
pub mod streak;
pub mod weekly;

pub use best_days::best_days;
pub use rate::{completion_rate, monthly_trend};
pub use streak::compute_streak;
pub use weekly::{completions_in_week, week_bounds};

use chrono::NaiveDate;

use crate::models::{DayStatus, ProgressSummary};

/// One-call summary over a habit's full record list.
pub fn summarize(records: &[DayStatus], today: NaiveDate, today_done: bool) -> ProgressSummary {
    ProgressSummary {
        streak: compute_streak(records, today, today_done),
        completion_rate: completion_rate(records, today, today_done),
        best_days: best_days(records),
        monthly_trend: monthly_trend(records, today),
    }
}
