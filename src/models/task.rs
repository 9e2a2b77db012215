use std::fmt;

use chrono::{DateTime, Duration, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{ScheduleError, ScheduleResult};

/// Category a task belongs to; selects which availability windows apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Personal,
    Meeting,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Work, Category::Personal, Category::Meeting];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Personal => "personal",
            Category::Meeting => "meeting",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority tier, the primary scheduling sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Normal,
    Low,
}

impl Priority {
    /// Sort rank, ascending = scheduled first.
    pub fn rank(self) -> u8 {
        match self {
            Priority::Critical => 0,
            Priority::High => 1,
            Priority::Normal => 2,
            Priority::Low => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Normal => "normal",
            Priority::Low => "low",
        }
    }

    /// Infers a priority from deadline proximity for callers that seed tasks
    /// without an explicit tier: overdue or due within 24 hours is critical,
    /// within 48 hours high, later normal, and no deadline at all low.
    pub fn infer(deadline: Option<DateTime<FixedOffset>>, now: DateTime<FixedOffset>) -> Priority {
        match deadline {
            Some(due) => {
                let until = due.signed_duration_since(now);
                if until <= Duration::hours(24) {
                    Priority::Critical
                } else if until <= Duration::hours(48) {
                    Priority::High
                } else {
                    Priority::Normal
                }
            }
            None => Priority::Low,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit of work to be scheduled. Durations are integer minutes so that
/// duration conservation and determinism hold exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,
    pub duration_minutes: i64,
    pub min_session_minutes: i64,
    pub max_session_minutes: i64,
    pub category: Category,
    pub priority: Priority,
    #[serde(default)]
    pub deadline: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub allow_split: bool,
}

impl Task {
    /// True when the total duration cannot fit in a single session.
    pub fn needs_split(&self) -> bool {
        self.duration_minutes > self.max_session_minutes
    }

    pub fn validate(&self) -> ScheduleResult<()> {
        if self.duration_minutes <= 0 {
            return Err(ScheduleError::validation_with_details(
                format!("task \"{}\" has a non-positive duration", self.name),
                json!({ "taskId": self.id, "durationMinutes": self.duration_minutes }),
            ));
        }
        if self.min_session_minutes <= 0 {
            return Err(ScheduleError::validation_with_details(
                format!("task \"{}\" has a non-positive minimum session length", self.name),
                json!({ "taskId": self.id, "minSessionMinutes": self.min_session_minutes }),
            ));
        }
        if self.min_session_minutes > self.max_session_minutes {
            return Err(ScheduleError::validation_with_details(
                format!(
                    "task \"{}\" has minimum session length above its maximum",
                    self.name
                ),
                json!({
                    "taskId": self.id,
                    "minSessionMinutes": self.min_session_minutes,
                    "maxSessionMinutes": self.max_session_minutes,
                }),
            ));
        }
        Ok(())
    }
}
