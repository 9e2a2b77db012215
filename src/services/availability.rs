//! Availability calculator: turns a category's recurring daily windows into
//! concrete free intervals on a given date, with every occupied interval
//! subtracted.

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::error::ScheduleResult;
use crate::models::event::TimeRange;
use crate::models::hours::DayWindow;
use crate::services::schedule_utils;

/// Computes the ordered free sub-intervals of `windows` on `date`, after
/// subtracting `occupied` and clipping away everything before `not_before`.
///
/// Occupied intervals may overlap each other; the union of their coverage is
/// subtracted. Zero-length leftovers are dropped. Filtering intervals that
/// are too short for a particular session is the placement engine's job.
pub fn free_intervals(
    date: NaiveDate,
    offset: FixedOffset,
    windows: &[DayWindow],
    occupied: &[TimeRange],
    not_before: DateTime<FixedOffset>,
) -> ScheduleResult<Vec<TimeRange>> {
    let mut busy = occupied.to_vec();
    busy.sort_by_key(|range| range.start);

    let mut day_windows = windows.to_vec();
    day_windows.sort_by_key(|window| window.start);

    let mut free = Vec::new();
    for window in &day_windows {
        let window_start = schedule_utils::at_time_on_date(date, window.start, offset)?;
        let window_end = schedule_utils::at_time_on_date(date, window.end, offset)?;

        let mut cursor = window_start.max(not_before);
        if cursor >= window_end {
            continue;
        }

        for range in &busy {
            if range.end <= cursor || range.start >= window_end {
                continue;
            }
            if range.start > cursor {
                free.push(TimeRange {
                    start: cursor,
                    end: range.start.min(window_end),
                });
            }
            cursor = cursor.max(range.end);
            if cursor >= window_end {
                break;
            }
        }

        if cursor < window_end {
            free.push(TimeRange {
                start: cursor,
                end: window_end,
            });
        }
    }

    Ok(free)
}
