pub mod availability;
pub mod placement;
pub mod prioritizer;
pub mod schedule_utils;
pub mod scheduler;
pub mod splitter;
pub mod validator;
