//! Splitter: decides how many sessions a task needs and how long each one is.
//!
//! Distribution policy: front-loaded — `k - 1` sessions at the maximum length
//! and the remainder in the final session. When that remainder would fall
//! below the minimum session length, the total is instead spread as evenly as
//! possible across the `k` sessions (which always respects the bounds when a
//! valid distribution exists at all).

use crate::models::task::Task;

/// One requested session of a task, in splitting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionRequest {
    pub minutes: i64,
    /// 1-indexed; present together with `total_parts` only when the task was
    /// split into two or more sessions.
    pub part_number: Option<u32>,
    pub total_parts: Option<u32>,
    /// False when the task's own constraints make the request impossible to
    /// place (needs splitting but forbids it, or cannot be divided within its
    /// session bounds). The placement engine fails such requests and logs an
    /// error.
    pub viable: bool,
}

/// Splits one task into session requests whose lengths sum to the task's
/// total duration. Tasks that cannot be split under their own constraints
/// yield a single non-viable request.
pub fn split_task(task: &Task) -> Vec<SessionRequest> {
    let duration = task.duration_minutes;
    let max = task.max_session_minutes;
    let min = task.min_session_minutes;

    if duration <= max {
        return vec![SessionRequest {
            minutes: duration,
            part_number: None,
            total_parts: None,
            viable: true,
        }];
    }

    if !task.allow_split {
        return vec![SessionRequest {
            minutes: duration,
            part_number: None,
            total_parts: None,
            viable: false,
        }];
    }

    // Minimum number of sessions that keeps each one within the maximum.
    let parts = (duration + max - 1) / max;
    if min.saturating_mul(parts) > duration {
        return vec![SessionRequest {
            minutes: duration,
            part_number: None,
            total_parts: None,
            viable: false,
        }];
    }

    let remainder = duration - (parts - 1) * max;
    let lengths: Vec<i64> = if remainder >= min {
        let mut lengths = vec![max; (parts - 1) as usize];
        lengths.push(remainder);
        lengths
    } else {
        let base = duration / parts;
        let extra = duration % parts;
        (0..parts)
            .map(|i| if i < extra { base + 1 } else { base })
            .collect()
    };

    lengths
        .into_iter()
        .enumerate()
        .map(|(i, minutes)| SessionRequest {
            minutes,
            part_number: Some(i as u32 + 1),
            total_parts: Some(parts as u32),
            viable: true,
        })
        .collect()
}
