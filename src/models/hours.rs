use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::task::Category;

/// A recurring daily availability window expressed as time-of-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl DayWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> ScheduleResult<Self> {
        let window = DayWindow { start, end };
        window.ensure_valid()?;
        Ok(window)
    }

    pub fn ensure_valid(&self) -> ScheduleResult<()> {
        if self.end <= self.start {
            return Err(ScheduleError::validation_with_details(
                "availability window end must be after its start",
                json!({ "start": self.start.to_string(), "end": self.end.to_string() }),
            ));
        }
        Ok(())
    }
}

/// Recurring daily availability windows per category. A category may carry
/// multiple disjoint windows (e.g. morning and afternoon work blocks); a
/// category with no windows has no free time ever.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveHours {
    pub work: Vec<DayWindow>,
    pub personal: Vec<DayWindow>,
    pub meeting: Vec<DayWindow>,
}

impl ActiveHours {
    pub fn windows_for(&self, category: Category) -> &[DayWindow] {
        match category {
            Category::Work => &self.work,
            Category::Personal => &self.personal,
            Category::Meeting => &self.meeting,
        }
    }

    /// Rejects structurally invalid hours: inverted windows, or overlapping
    /// windows within one category.
    pub fn validate(&self) -> ScheduleResult<()> {
        for category in Category::ALL {
            let windows = self.windows_for(category);
            for window in windows {
                window.ensure_valid()?;
            }

            let mut sorted = windows.to_vec();
            sorted.sort_by_key(|w| w.start);
            for pair in sorted.windows(2) {
                if pair[1].start < pair[0].end {
                    return Err(ScheduleError::validation_with_details(
                        format!("overlapping {category} availability windows"),
                        json!({
                            "first": { "start": pair[0].start.to_string(), "end": pair[0].end.to_string() },
                            "second": { "start": pair[1].start.to_string(), "end": pair[1].end.to_string() },
                        }),
                    ));
                }
            }
        }
        Ok(())
    }
}

impl Default for ActiveHours {
    /// 07:00–23:00 for every category, matching the platform's default hour
    /// settings when a workspace has none configured.
    fn default() -> Self {
        let full_day = vec![DayWindow {
            start: NaiveTime::from_hms_opt(7, 0, 0).expect("07:00 must be valid"),
            end: NaiveTime::from_hms_opt(23, 0, 0).expect("23:00 must be valid"),
        }];
        ActiveHours {
            work: full_day.clone(),
            personal: full_day.clone(),
            meeting: full_day,
        }
    }
}
