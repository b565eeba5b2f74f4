pub mod habit;
pub mod record;
pub mod summary;

pub use habit::Habit;
pub use record::{DayStatus, RawDayStatus, normalize_records, parse_day};
pub use summary::{ProgressSummary, Streak, WeekdayCount};
