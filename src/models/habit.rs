use serde::{Deserialize, Serialize};

fn default_weekly_goal() -> u32 {
    7
}

/// A recurring shared task with a weekly completion target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub name: String,
    /// Target completions per week, typically 1–7.
    #[serde(default = "default_weekly_goal")]
    pub weekly_goal: u32,
    /// Which partner owns the habit. Display only.
    #[serde(default)]
    pub partner: Option<String>,
}

impl Habit {
    pub fn goal_met(&self, completions: u32) -> bool {
        completions >= self.weekly_goal
    }
}
