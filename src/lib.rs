//! Task-to-calendar scheduling engine.
//!
//! Given a set of tasks (durations, deadlines, priorities, splittability
//! constraints), recurring daily availability windows per category, and a set
//! of immovable locked events, [`schedule`] produces a conflict-free placement
//! of task sessions onto a timeline together with a structured log stream
//! explaining every non-trivial decision.
//!
//! The engine is a pure synchronous function: it never reads the wall clock
//! (the caller passes `now`), performs no I/O, and holds no state between
//! calls. Identical inputs produce identical outputs.
//!
//! Returned events contain only newly placed task sessions; locked events are
//! respected as obstacles but never re-emitted. Callers that need the full
//! calendar must union the two lists themselves.

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{ScheduleError, ScheduleResult};
pub use models::event::{Event, TimeRange};
pub use models::hours::{ActiveHours, DayWindow};
pub use models::log::{LogEntry, LogLevel};
pub use models::task::{Category, Priority, Task};
pub use models::template::{TaskSeed, TemplateScenario};
pub use services::scheduler::{
    schedule, schedule_with_defaults, ScheduleOutcome, SchedulerConfig,
};
