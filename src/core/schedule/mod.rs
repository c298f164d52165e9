//! Study schedule generation
//!
//! Turns a [`Course`](crate::core::models::Course) and a set of
//! [`ScheduleParameters`] into a [`Schedule`]: an ordered list of calendar
//! days, each holding the lectures to study that day.
//!
//! Scheduling is pure: no I/O, no logging, no shared state.

pub mod distributor;
pub mod error;
pub mod model;
pub mod params;
pub mod summary;

pub use distributor::{
    budget_seconds, distribute, distribute_on, effective_seconds, PAUSING_BUFFER_RATIO,
    SECONDS_PER_HOUR,
};
pub use error::ScheduleError;
pub use model::{Schedule, ScheduleDay};
pub use params::{BudgetMode, ScheduleParameters, DEFAULT_VIDEO_SPEED};
pub use summary::{completion_info, format_decimal};
