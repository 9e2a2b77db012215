//! Placement engine: greedy earliest-fit assignment of session requests to
//! free intervals.
//!
//! Requests are consumed in prioritized order. Every successful placement
//! immediately joins the occupied set, so availability is re-derived against
//! locked events plus everything placed so far. A request that fits nowhere
//! within the horizon fails without aborting the run; whatever sessions of a
//! task did succeed stay placed.

use chrono::{DateTime, Duration, FixedOffset};
use tracing::debug;

use crate::error::ScheduleResult;
use crate::models::event::{Event, TimeRange};
use crate::models::hours::ActiveHours;
use crate::models::log::LogEntry;
use crate::models::task::Task;
use crate::services::availability;
use crate::services::schedule_utils;
use crate::services::scheduler::SchedulerConfig;
use crate::services::splitter::SessionRequest;

pub fn place_sessions(
    tasks: &[Task],
    order: &[usize],
    requests: &[Vec<SessionRequest>],
    active_hours: &ActiveHours,
    locked_events: &[Event],
    now: DateTime<FixedOffset>,
    config: &SchedulerConfig,
    logs: &mut Vec<LogEntry>,
) -> ScheduleResult<Vec<Event>> {
    let mut occupied: Vec<TimeRange> = locked_events.iter().map(|event| event.range).collect();
    let mut events = Vec::new();

    for &task_idx in order {
        let task = &tasks[task_idx];
        let mut placed_minutes = 0i64;
        let mut split_disallowed = false;

        for request in &requests[task_idx] {
            if !request.viable {
                split_disallowed = !task.allow_split && task.needs_split();
                continue;
            }

            let Some(slot) = find_slot(task, request.minutes, active_hours, &occupied, now, config)?
            else {
                continue;
            };

            debug!(
                target: "scheduler::placement",
                task_id = %task.id,
                start = %slot.start.to_rfc3339(),
                minutes = request.minutes,
                "placed session"
            );

            occupied.push(slot);
            placed_minutes += request.minutes;
            events.push(Event {
                id: match request.part_number {
                    Some(part) => format!("evt-{}-{}", task.id, part),
                    None => format!("evt-{}", task.id),
                },
                task_id: Some(task.id.clone()),
                name: match (request.part_number, request.total_parts) {
                    (Some(part), Some(total)) => format!("{} ({part}/{total})", task.name),
                    _ => task.name.clone(),
                },
                range: slot,
                category: task.category,
                locked: false,
                part_number: request.part_number,
                total_parts: request.total_parts,
                is_past_deadline: false,
            });
        }

        if placed_minutes == 0 {
            if split_disallowed {
                logs.push(LogEntry::error(format!(
                    "task \"{}\" needs {} minutes but its sessions are capped at {} and splitting is disabled; cannot be scheduled",
                    task.name, task.duration_minutes, task.max_session_minutes
                )));
            } else if requests[task_idx].iter().any(|r| !r.viable) {
                logs.push(LogEntry::error(format!(
                    "task \"{}\" cannot be divided within its session length bounds; cannot be scheduled",
                    task.name
                )));
            } else {
                logs.push(LogEntry::error(format!(
                    "task \"{}\" could not be scheduled: no free {} interval fits within the {}-day horizon",
                    task.name, task.category, config.horizon_days
                )));
            }
        } else if placed_minutes < task.duration_minutes {
            logs.push(LogEntry::warning(format!(
                "task \"{}\" only partially scheduled: {} of {} minutes remain unplaced",
                task.name,
                task.duration_minutes - placed_minutes,
                task.duration_minutes
            )));
        }
    }

    Ok(events)
}

/// Earliest free interval long enough for `minutes`, scanning the horizon
/// day by day and each day's intervals chronologically. Sessions are placed
/// at the interval's start and never span a day boundary.
fn find_slot(
    task: &Task,
    minutes: i64,
    active_hours: &ActiveHours,
    occupied: &[TimeRange],
    now: DateTime<FixedOffset>,
    config: &SchedulerConfig,
) -> ScheduleResult<Option<TimeRange>> {
    let windows = active_hours.windows_for(task.category);
    let offset = *now.offset();

    for day_offset in 0..config.horizon_days {
        let date = now.date_naive() + Duration::days(day_offset);
        let free = availability::free_intervals(date, offset, windows, occupied, now)?;
        for interval in free {
            if interval.duration_minutes() >= minutes {
                return Ok(Some(TimeRange {
                    start: interval.start,
                    end: schedule_utils::add_minutes(interval.start, minutes)?,
                }));
            }
        }
    }

    Ok(None)
}
