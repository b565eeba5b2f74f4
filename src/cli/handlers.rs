use std::path::PathBuf;

use anyhow::{Result, anyhow};
use chrono::{Duration, Local, NaiveDate};

use tandem::config::AppConfig;
use tandem::data::HabitData;
use tandem::models::ProgressSummary;
use tandem::progress::{completions_in_week, summarize, week_bounds};
use tandem::utils::format::{format_trend, progress_bar, weekday_name};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

#[allow(unused_macros)]
macro_rules! print_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        print!("\x1b[0m");
    }};
}

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const ROSE: &str = "\x1b[38;2;219;112;147m";

// ─── Habit selection ─────────────────────────────────────────────────────────

fn select<'a>(habits: &'a [HabitData], filter: Option<&str>) -> Result<Vec<&'a HabitData>> {
    let selected: Vec<&HabitData> = match filter {
        None => habits.iter().collect(),
        Some(name) => habits
            .iter()
            .filter(|h| h.habit.name.eq_ignore_ascii_case(name))
            .collect(),
    };
    if selected.is_empty() {
        return match filter {
            Some(name) => Err(anyhow!("No habit named '{}'", name)),
            None => Err(anyhow!("No habits in the export file")),
        };
    }
    Ok(selected)
}

// ─── Stats ───────────────────────────────────────────────────────────────────

pub fn handle_stats(
    habits: &[HabitData],
    config: &AppConfig,
    habit: Option<&str>,
    week: bool,
) -> Result<()> {
    let today = Local::now().date_naive();
    let selected = select(habits, habit)?;

    println!();
    for data in selected {
        let summary = summarize(&data.records, today, data.today_done(today));
        match &data.habit.partner {
            Some(partner) => println_colored!(ROSE, "  {} — {}", data.habit.name, partner),
            None => println_colored!(ROSE, "  {}", data.habit.name),
        }
        print_summary(&summary);
        if week {
            print_week_grid(data, today, config);
        }
        println!();
    }
    Ok(())
}

fn print_summary(summary: &ProgressSummary) {
    println_colored!(
        BOLD,
        "  Streak:      {} days current  |  {} days best",
        summary.streak.current,
        summary.streak.best
    );
    println!("  30-day rate: {}%", summary.completion_rate);
    if !summary.best_days.is_empty() {
        let days: Vec<&str> = summary
            .best_days
            .iter()
            .map(|d| weekday_name(d.weekday))
            .collect();
        println!("  Best days:   {}", days.join(", "));
    }
    println!(
        "  Trend:       {} vs last month",
        format_trend(summary.monthly_trend)
    );
}

fn print_week_grid(data: &HabitData, today: NaiveDate, config: &AppConfig) {
    let (start, _) = week_bounds(today, config.week_start_day());
    print!("  This week:   ");
    for offset in 0..7 {
        let day = start + Duration::days(offset);
        let icon = if day > today {
            format!("{}·\x1b[0m ", DIM)
        } else if data.records.iter().any(|r| r.date == day && r.done) {
            format!("{}●\x1b[0m ", GREEN)
        } else {
            format!("{}○\x1b[0m ", DIM)
        };
        print!("{}", icon);
    }
    println!();
}

// ─── Weekly goals ────────────────────────────────────────────────────────────

pub fn handle_week(habits: &[HabitData], config: &AppConfig, habit: Option<&str>) -> Result<()> {
    let today = Local::now().date_naive();
    let (start, end) = week_bounds(today, config.week_start_day());
    let selected = select(habits, habit)?;

    println!();
    println_colored!(ROSE, "  Weekly goals — {} to {}", start, end);
    println!();
    for data in selected {
        let done = completions_in_week(&data.records, start, end);
        let goal = data.habit.weekly_goal;
        let bar = progress_bar(done, goal, 7);
        if data.habit.goal_met(done) {
            println_colored!(GREEN, "  {:<24} {}  {}/{} ✓", data.habit.name, bar, done, goal);
        } else {
            println_colored!(AMBER, "  {:<24} {}  {}/{}", data.habit.name, bar, done, goal);
        }
    }
    println!();
    Ok(())
}

// ─── Export ──────────────────────────────────────────────────────────────────

pub fn handle_export(habits: &[HabitData], config: &AppConfig) -> Result<()> {
    let today = Local::now().date_naive();
    let (start, end) = week_bounds(today, config.week_start_day());

    println!("# tandem — Weekly Summary");
    println!("# {}", today.format("%Y-%m-%d"));
    println!();
    for data in habits {
        let summary = summarize(&data.records, today, data.today_done(today));
        let done = completions_in_week(&data.records, start, end);
        match &data.habit.partner {
            Some(partner) => println!("## {} ({})", data.habit.name, partner),
            None => println!("## {}", data.habit.name),
        }
        println!(
            "  Streak:     {} days (best: {})",
            summary.streak.current, summary.streak.best
        );
        println!(
            "  This week:  {}/{} completions",
            done, data.habit.weekly_goal
        );
        println!("  30-day:     {}%", summary.completion_rate);
        println!("  Trend:      {}", format_trend(summary.monthly_trend));
        let mut grid = String::new();
        for offset in 0..7 {
            let day = start + Duration::days(offset);
            grid.push(if day > today {
                '·'
            } else if data.records.iter().any(|r| r.date == day && r.done) {
                '█'
            } else {
                '░'
            });
        }
        println!("  Week:       {}  ({} to {})", grid, start, end);
        println!();
    }
    Ok(())
}

// ─── Config ──────────────────────────────────────────────────────────────────

pub fn handle_use(config: &mut AppConfig, file: PathBuf) -> Result<()> {
    if !file.exists() {
        println_colored!(AMBER, "  Note: {:?} does not exist yet", file);
    }
    config.data_file = Some(file.clone());
    config.save()?;
    println_colored!(GREEN, "  ✓ Using export file {:?}", file);
    Ok(())
}
