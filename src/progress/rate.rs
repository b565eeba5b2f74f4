use chrono::{Datelike, NaiveDate};

use crate::models::DayStatus;

/// Completion rate over the trailing 30 days ending today, as a whole
/// percentage. When no record falls inside the window the full history is
/// used instead, so old-but-real history never reads as 0%. Today counts as
/// a virtual day (completed iff `today_done`) when it has no record yet.
pub fn completion_rate(records: &[DayStatus], today: NaiveDate, today_done: bool) -> u8 {
    let windowed: Vec<&DayStatus> = records
        .iter()
        .filter(|r| (0..30).contains(&(today - r.date).num_days()))
        .collect();

    let working: Vec<&DayStatus> = if windowed.is_empty() {
        records.iter().collect()
    } else {
        windowed
    };

    let mut total = working.len() as u32;
    let mut completed = working.iter().filter(|r| r.done).count() as u32;
    if !working.iter().any(|r| r.date == today) {
        total += 1;
        if today_done {
            completed += 1;
        }
    }

    let rate = f64::from(completed) / f64::from(total.max(1)) * 100.0;
    rate.round() as u8
}

/// Month-over-month completion trend in percentage points: this month to
/// date against the whole of last month, each normalized by the days elapsed
/// in that month. Months with no completions contribute 0%.
pub fn monthly_trend(records: &[DayStatus], today: NaiveDate) -> i32 {
    let month_start = today.with_day(1).unwrap_or(today);

    let current_done = completed_between(records, month_start, today);
    let current_rate = f64::from(current_done) / f64::from(today.day()) * 100.0;

    let last_rate = match month_start.pred_opt() {
        None => 0.0,
        Some(prev_end) => {
            let prev_start = prev_end.with_day(1).unwrap_or(prev_end);
            let done = completed_between(records, prev_start, prev_end);
            // prev_end.day() is the number of days in that month.
            f64::from(done) / f64::from(prev_end.day()) * 100.0
        }
    };

    (current_rate - last_rate).round() as i32
}

fn completed_between(records: &[DayStatus], start: NaiveDate, end: NaiveDate) -> u32 {
    records
        .iter()
        .filter(|r| r.done && r.date >= start && r.date <= end)
        .count() as u32
}
