use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::task::Category;

/// Half-open occupied interval `[start, end)`, invariant `end > start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

impl TimeRange {
    pub fn new(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> ScheduleResult<Self> {
        let range = TimeRange { start, end };
        range.ensure_valid()?;
        Ok(range)
    }

    pub fn ensure_valid(&self) -> ScheduleResult<()> {
        if self.end <= self.start {
            return Err(ScheduleError::validation_with_details(
                "time range end must be after its start",
                json!({ "start": self.start.to_rfc3339(), "end": self.end.to_rfc3339() }),
            ));
        }
        Ok(())
    }

    pub fn duration_minutes(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_minutes()
    }

    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A placed or pre-existing occupied interval on the calendar.
///
/// Events produced by the engine carry the owning task id; locked events come
/// from the caller, are treated purely as obstacles, and are never re-emitted
/// or modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    /// None for locked/non-task events.
    #[serde(default)]
    pub task_id: Option<String>,
    pub name: String,
    pub range: TimeRange,
    pub category: Category,
    #[serde(default)]
    pub locked: bool,
    /// 1-indexed; present only when the task was split into two or more
    /// sessions, together with `total_parts`.
    #[serde(default)]
    pub part_number: Option<u32>,
    #[serde(default)]
    pub total_parts: Option<u32>,
    /// True iff the owning task has a deadline and this event ends after it.
    #[serde(default)]
    pub is_past_deadline: bool,
}

impl Event {
    pub fn locked(
        id: impl Into<String>,
        name: impl Into<String>,
        range: TimeRange,
        category: Category,
    ) -> Self {
        Event {
            id: id.into(),
            task_id: None,
            name: name.into(),
            range,
            category,
            locked: true,
            part_number: None,
            total_parts: None,
            is_past_deadline: false,
        }
    }
}
