//! Pipeline entry point: validate → prioritize → split → place → flag
//! deadline misses.
//!
//! The whole engine is one pure synchronous call. `now` is an explicit
//! parameter so callers and tests control the clock; nothing here reads the
//! system time. Given identical inputs the returned events and logs are
//! identical, down to ordering.

use std::collections::BTreeSet;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::event::Event;
use crate::models::hours::ActiveHours;
use crate::models::log::LogEntry;
use crate::models::task::Task;
use crate::services::{placement, prioritizer, splitter, validator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerConfig {
    /// Forward-looking scheduling horizon, in days from `now`.
    pub horizon_days: i64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        SchedulerConfig { horizon_days: 28 }
    }
}

/// Result of one scheduling run: newly placed task sessions plus the
/// diagnostic log stream. Locked events are *not* re-emitted; callers that
/// need the full calendar union the input locked events with `events`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleOutcome {
    pub events: Vec<Event>,
    pub logs: Vec<LogEntry>,
}

/// Schedules `tasks` into `active_hours` around `locked_events`, starting at
/// `now`. Greedy heuristic: tasks in priority-then-deadline order, each
/// session at the earliest free interval that fits. Domain infeasibility is
/// reported through the log stream; only structurally invalid input returns
/// an `Err`.
pub fn schedule(
    tasks: &[Task],
    active_hours: &ActiveHours,
    locked_events: &[Event],
    now: DateTime<FixedOffset>,
    config: &SchedulerConfig,
) -> ScheduleResult<ScheduleOutcome> {
    validate_inputs(tasks, active_hours, locked_events, config)?;

    let order = prioritizer::order_tasks(tasks);
    let requests: Vec<_> = tasks.iter().map(splitter::split_task).collect();

    let mut logs = Vec::new();
    for &task_idx in &order {
        let task = &tasks[task_idx];
        let task_requests = &requests[task_idx];
        if task_requests.len() >= 2 {
            logs.push(LogEntry::info(format!(
                "task \"{}\" split into {} sessions (total {}m, max {}m per session)",
                task.name,
                task_requests.len(),
                task.duration_minutes,
                task.max_session_minutes
            )));
        }
    }

    let mut events = placement::place_sessions(
        tasks,
        &order,
        &requests,
        active_hours,
        locked_events,
        now,
        config,
        &mut logs,
    )?;

    validator::flag_deadline_misses(tasks, &mut events, &mut logs);

    debug!(
        target: "scheduler::run",
        tasks = tasks.len(),
        placed = events.len(),
        logs = logs.len(),
        "scheduling run complete"
    );

    Ok(ScheduleOutcome { events, logs })
}

/// [`schedule`] with the default 28-day horizon.
pub fn schedule_with_defaults(
    tasks: &[Task],
    active_hours: &ActiveHours,
    locked_events: &[Event],
    now: DateTime<FixedOffset>,
) -> ScheduleResult<ScheduleOutcome> {
    schedule(tasks, active_hours, locked_events, now, &SchedulerConfig::default())
}

fn validate_inputs(
    tasks: &[Task],
    active_hours: &ActiveHours,
    locked_events: &[Event],
    config: &SchedulerConfig,
) -> ScheduleResult<()> {
    if config.horizon_days <= 0 {
        return Err(ScheduleError::validation_with_details(
            "scheduling horizon must cover at least one day",
            json!({ "horizonDays": config.horizon_days }),
        ));
    }

    let mut seen = BTreeSet::new();
    for task in tasks {
        task.validate()?;
        if !seen.insert(task.id.as_str()) {
            return Err(ScheduleError::validation_with_details(
                "duplicate task id",
                json!({ "taskId": task.id }),
            ));
        }
    }

    active_hours.validate()?;

    for event in locked_events {
        event.range.ensure_valid()?;
    }

    Ok(())
}
