//! Task prioritizer: a deterministic total order over the input tasks,
//! computed once before splitting.

use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset};

use crate::models::task::Task;

/// Returns the indices of `tasks` in scheduling order: ascending priority
/// rank, then deadline urgency (a deadline beats no deadline, earlier beats
/// later), then original input position as the stable tie-break.
pub fn order_tasks(tasks: &[Task]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..tasks.len()).collect();
    order.sort_by(|&a, &b| {
        let ta = &tasks[a];
        let tb = &tasks[b];
        ta.priority
            .rank()
            .cmp(&tb.priority.rank())
            .then_with(|| compare_deadlines(ta.deadline, tb.deadline))
            .then_with(|| a.cmp(&b))
    });
    order
}

fn compare_deadlines(
    a: Option<DateTime<FixedOffset>>,
    b: Option<DateTime<FixedOffset>>,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
