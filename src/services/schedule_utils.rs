use chrono::{DateTime, Duration, FixedOffset, LocalResult, NaiveDate, NaiveTime, TimeZone};
use serde_json::json;

use crate::error::{ScheduleError, ScheduleResult};

pub fn parse_datetime(value: &str) -> ScheduleResult<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value).map_err(|err| {
        ScheduleError::validation_with_details(
            "invalid datetime format",
            json!({ "value": value, "error": err.to_string() }),
        )
    })
}

pub fn format_datetime(dt: DateTime<FixedOffset>) -> String {
    dt.to_rfc3339()
}

pub fn add_minutes(dt: DateTime<FixedOffset>, minutes: i64) -> ScheduleResult<DateTime<FixedOffset>> {
    dt.checked_add_signed(Duration::minutes(minutes))
        .ok_or_else(|| ScheduleError::time_out_of_range("datetime addition overflowed"))
}

pub fn duration_minutes(
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
) -> ScheduleResult<i64> {
    let total = end.signed_duration_since(start).num_minutes();
    if total < 0 {
        Err(ScheduleError::validation("end time must not precede start"))
    } else {
        Ok(total)
    }
}

/// Anchors a time-of-day on a concrete date within the given offset.
pub fn at_time_on_date(
    date: NaiveDate,
    time: NaiveTime,
    offset: FixedOffset,
) -> ScheduleResult<DateTime<FixedOffset>> {
    match offset.from_local_datetime(&date.and_time(time)) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(first, _) => Ok(first),
        LocalResult::None => Err(ScheduleError::time_out_of_range(format!(
            "{date} {time} does not exist in offset {offset}"
        ))),
    }
}
