use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::models::DayStatus;

/// Completed days inside `[week_start, week_end]`, both inclusive. Compared
/// against a habit's weekly goal; granting the reward for a met goal is the
/// caller's concern.
pub fn completions_in_week(
    records: &[DayStatus],
    week_start: NaiveDate,
    week_end: NaiveDate,
) -> u32 {
    records
        .iter()
        .filter(|r| r.done && r.date >= week_start && r.date <= week_end)
        .count() as u32
}

/// The week containing `today`, for a given first day of the week (Sunday in
/// the default configuration).
pub fn week_bounds(today: NaiveDate, week_start: Weekday) -> (NaiveDate, NaiveDate) {
    let offset =
        (7 + today.weekday().num_days_from_sunday() - week_start.num_days_from_sunday()) % 7;
    let start = today - Duration::days(i64::from(offset));
    (start, start + Duration::days(6))
}
