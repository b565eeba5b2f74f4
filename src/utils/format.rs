use chrono::Weekday;

/// Create a simple ASCII progress bar
pub fn progress_bar(filled: u32, total: u32, width: usize) -> String {
    if total == 0 {
        return "░".repeat(width);
    }
    let ratio = (filled as f64 / total as f64).min(1.0);
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}

/// Format a percentage-point delta with an explicit sign
pub fn format_trend(delta: i32) -> String {
    if delta > 0 {
        format!("+{}pp", delta)
    } else {
        format!("{}pp", delta)
    }
}

/// Full weekday name for display
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_carries_its_sign() {
        assert_eq!(format_trend(12), "+12pp");
        assert_eq!(format_trend(-4), "-4pp");
        assert_eq!(format_trend(0), "0pp");
    }

    #[test]
    fn bar_handles_zero_total() {
        assert_eq!(progress_bar(3, 0, 4), "░░░░");
    }

    #[test]
    fn bar_caps_at_full_width() {
        assert_eq!(progress_bar(9, 5, 5), "█████");
    }
}
