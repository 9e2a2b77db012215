//! Deadline validator: a read-only pass over placed events that flags
//! sessions ending after their task's deadline. It never moves an event; the
//! earliest-fit placement in priority order already was the
//! deadline-respecting heuristic.

use crate::models::event::Event;
use crate::models::log::LogEntry;
use crate::models::task::Task;

/// Sets `is_past_deadline` on every placed event whose owning task has a
/// deadline the event overruns, and emits one warning per affected task.
pub fn flag_deadline_misses(tasks: &[Task], events: &mut [Event], logs: &mut Vec<LogEntry>) {
    for task in tasks {
        let Some(deadline) = task.deadline else {
            continue;
        };

        let mut missed = 0usize;
        for event in events.iter_mut() {
            if event.task_id.as_deref() == Some(task.id.as_str()) && event.range.end > deadline {
                event.is_past_deadline = true;
                missed += 1;
            }
        }

        if missed > 0 {
            logs.push(LogEntry::warning(format!(
                "task \"{}\": {missed} session(s) end after the deadline {}",
                task.name,
                deadline.to_rfc3339()
            )));
        }
    }
}
