pub mod event;
pub mod hours;
pub mod log;
pub mod task;
pub mod template;
