use chrono::NaiveDate;

use crate::models::{DayStatus, Streak};

/// Current and best streak for one habit.
///
/// `today_done` is the optimistic "marked complete today" flag from the UI;
/// it counts toward the current streak even before a record for today lands
/// in the store. With no records at all the streak is zero regardless of the
/// flag.
pub fn compute_streak(records: &[DayStatus], today: NaiveDate, today_done: bool) -> Streak {
    if records.is_empty() {
        return Streak::default();
    }

    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let current = current_streak(&sorted, today, today_done);
    // The current streak may include the optimistic today flag, which has no
    // record yet; the best streak is never allowed to fall below it.
    let best = best_streak(&sorted).max(current);

    Streak { current, best }
}

/// Walk backward one calendar day at a time over descending-sorted records.
/// A record newer than the expected day is an out-of-order duplicate and is
/// skipped; a record older than the expected day means a day with no record
/// at all, which ends the streak.
fn current_streak(sorted_desc: &[DayStatus], today: NaiveDate, today_done: bool) -> u32 {
    let Some(yesterday) = today.pred_opt() else {
        return u32::from(today_done);
    };

    let mut count;
    let mut expected;
    if today_done {
        count = 1;
        expected = yesterday;
    } else {
        // Not marked today: the streak is still live only if yesterday was
        // completed, anchoring the count there.
        match sorted_desc.iter().find(|r| r.date == yesterday) {
            Some(rec) if rec.done => {
                count = 1;
                expected = match yesterday.pred_opt() {
                    Some(d) => d,
                    None => return count,
                };
            }
            _ => return 0,
        }
    }

    for rec in sorted_desc {
        if rec.date > expected {
            continue;
        }
        if rec.date < expected || !rec.done {
            break;
        }
        count += 1;
        expected = match expected.pred_opt() {
            Some(d) => d,
            None => break,
        };
    }

    count
}

/// Longest run of consecutive completed days anywhere in the history,
/// processed chronologically.
fn best_streak(records: &[DayStatus]) -> u32 {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|r| r.date);

    let mut best = 0u32;
    let mut run = 0u32;
    let mut last: Option<NaiveDate> = None;

    for rec in &sorted {
        if rec.done {
            let adjacent = match last {
                None => true,
                Some(prev) => prev.succ_opt() == Some(rec.date),
            };
            run = if adjacent { run + 1 } else { 1 };
            best = best.max(run);
        } else {
            run = 0;
        }
        last = Some(rec.date);
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 4).unwrap()
    }

    fn days_ago(n: i64) -> NaiveDate {
        today() - Duration::days(n)
    }

    fn rec(n: i64, done: bool) -> DayStatus {
        DayStatus::new(days_ago(n), done)
    }

    #[test]
    fn empty_records_mean_no_streak() {
        let streak = compute_streak(&[], today(), false);
        assert_eq!(streak, Streak { current: 0, best: 0 });
        // The early return applies even with the optimistic flag set.
        let streak = compute_streak(&[], today(), true);
        assert_eq!(streak, Streak { current: 0, best: 0 });
    }

    #[test]
    fn pending_today_extends_streak() {
        let records = vec![rec(1, true), rec(2, true)];
        let streak = compute_streak(&records, today(), true);
        assert_eq!(streak.current, 3);
        assert_eq!(streak.best, 3);
    }

    #[test]
    fn unmarked_today_anchors_at_yesterday() {
        let records = vec![rec(1, true)];
        let streak = compute_streak(&records, today(), false);
        assert_eq!(streak.current, 1);
    }

    #[test]
    fn gap_breaks_current_streak() {
        let records = vec![rec(3, true)];
        let streak = compute_streak(&records, today(), false);
        assert_eq!(streak.current, 0);
        assert_eq!(streak.best, 1);
    }

    #[test]
    fn not_done_yesterday_breaks_current_streak() {
        let records = vec![rec(1, false), rec(2, true), rec(3, true)];
        let streak = compute_streak(&records, today(), false);
        assert_eq!(streak.current, 0);
        assert_eq!(streak.best, 2);
    }

    #[test]
    fn not_done_record_stops_backward_walk() {
        let records = vec![rec(1, true), rec(2, false), rec(3, true)];
        let streak = compute_streak(&records, today(), false);
        assert_eq!(streak.current, 1);
    }

    #[test]
    fn duplicate_records_are_skipped_without_advancing() {
        let records = vec![rec(1, true), rec(1, true), rec(2, true)];
        let streak = compute_streak(&records, today(), false);
        assert_eq!(streak.current, 2);
    }

    #[test]
    fn contiguous_history_counts_in_full() {
        let records: Vec<DayStatus> = (1..=10).map(|n| rec(n, true)).collect();
        let streak = compute_streak(&records, today(), true);
        assert_eq!(streak.current, 11);
        assert_eq!(streak.best, 11);
    }

    #[test]
    fn best_streak_survives_broken_current() {
        // A 4-day run two weeks ago, nothing since.
        let records = vec![rec(14, true), rec(15, true), rec(16, true), rec(17, true)];
        let streak = compute_streak(&records, today(), false);
        assert_eq!(streak.current, 0);
        assert_eq!(streak.best, 4);
    }

    #[test]
    fn best_streak_resets_on_missed_day() {
        let records = vec![
            rec(1, true),
            rec(2, true),
            rec(4, true),
            rec(5, true),
            rec(6, true),
        ];
        let streak = compute_streak(&records, today(), false);
        assert_eq!(streak.current, 2);
        assert_eq!(streak.best, 3);
    }

    #[test]
    fn best_never_falls_below_current() {
        let records = vec![rec(1, true)];
        let streak = compute_streak(&records, today(), true);
        assert_eq!(streak.current, 2);
        assert!(streak.best >= streak.current);
    }

    #[test]
    fn unordered_input_is_sorted_first() {
        let records = vec![rec(2, true), rec(1, true), rec(3, true)];
        let streak = compute_streak(&records, today(), false);
        assert_eq!(streak.current, 3);
        assert_eq!(streak.best, 3);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let records = vec![rec(1, true), rec(2, false), rec(3, true)];
        let first = compute_streak(&records, today(), true);
        let second = compute_streak(&records, today(), true);
        assert_eq!(first, second);
    }
}
