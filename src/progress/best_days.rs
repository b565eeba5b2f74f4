use chrono::{Datelike, Weekday};

use crate::models::{DayStatus, WeekdayCount};

const WEEK: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Up to three weekdays ranked by historical completion count. Weekdays with
/// no completions are omitted; ties keep calendar order starting at Sunday.
pub fn best_days(records: &[DayStatus]) -> Vec<WeekdayCount> {
    let mut counts = [0u32; 7];
    for rec in records.iter().filter(|r| r.done) {
        counts[rec.date.weekday().num_days_from_sunday() as usize] += 1;
    }

    let mut ranked: Vec<WeekdayCount> = WEEK
        .iter()
        .map(|&weekday| WeekdayCount {
            weekday,
            count: counts[weekday.num_days_from_sunday() as usize],
        })
        .filter(|w| w.count > 0)
        .collect();
    // Stable sort: equal counts stay in Sunday-first order.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(3);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn on(y: i32, m: u32, d: u32, done: bool) -> DayStatus {
        DayStatus::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), done)
    }

    #[test]
    fn empty_history_has_no_best_days() {
        assert!(best_days(&[]).is_empty());
    }

    #[test]
    fn ranks_by_completion_count() {
        // July 2026: Mondays 6, 13, 20; Wednesdays 1, 8; Friday 3.
        let records = vec![
            on(2026, 7, 6, true),
            on(2026, 7, 13, true),
            on(2026, 7, 20, true),
            on(2026, 7, 1, true),
            on(2026, 7, 8, true),
            on(2026, 7, 3, true),
            on(2026, 7, 4, false),
        ];
        let ranked = best_days(&records);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0], WeekdayCount { weekday: Weekday::Mon, count: 3 });
        assert_eq!(ranked[1], WeekdayCount { weekday: Weekday::Wed, count: 2 });
        assert_eq!(ranked[2], WeekdayCount { weekday: Weekday::Fri, count: 1 });
    }

    #[test]
    fn ties_keep_sunday_first_order() {
        // One Tuesday and one Sunday completion each.
        let records = vec![on(2026, 7, 7, true), on(2026, 7, 5, true)];
        let ranked = best_days(&records);
        assert_eq!(ranked[0].weekday, Weekday::Sun);
        assert_eq!(ranked[1].weekday, Weekday::Tue);
    }

    #[test]
    fn returns_at_most_three_days() {
        let records = vec![
            on(2026, 7, 5, true),  // Sun
            on(2026, 7, 6, true),  // Mon
            on(2026, 7, 7, true),  // Tue
            on(2026, 7, 8, true),  // Wed
            on(2026, 7, 9, true),  // Thu
        ];
        assert_eq!(best_days(&records).len(), 3);
    }

    #[test]
    fn not_done_days_are_invisible() {
        let records = vec![on(2026, 7, 6, false), on(2026, 7, 13, false)];
        assert!(best_days(&records).is_empty());
    }
}
