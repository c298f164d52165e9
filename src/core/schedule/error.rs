//! Scheduling errors

use thiserror::Error;

/// Invalid scheduling parameters, reported before any lecture is bucketed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// Both budget modes were requested
    #[error("Choose either days until completion or hours per day, not both")]
    BudgetModeConflict,

    /// Neither budget mode was requested
    #[error("Either days until completion or hours per day is required")]
    MissingBudgetMode,

    /// Days-mode with zero days
    #[error("Days until completion must be a positive number")]
    NonPositiveDays,

    /// Hours-mode with zero hours
    #[error("Hours per day must be a positive number")]
    NonPositiveHours,

    /// Playback speed is zero, negative, or not finite
    #[error("Video speed must be a positive number, got {0}")]
    InvalidVideoSpeed(f64),

    /// The derived seconds-per-day budget is zero, negative, or not finite
    #[error("Daily time budget must be a positive number of seconds, got {0}")]
    InvalidBudget(f64),

    /// A day's calendar date cannot be represented
    #[error("Day {0} falls outside the supported calendar range")]
    DateOutOfRange(usize),
}
