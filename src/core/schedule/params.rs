//! Scheduling parameters

use super::error::ScheduleError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default playback speed
pub const DEFAULT_VIDEO_SPEED: f64 = 1.0;

const fn default_video_speed() -> f64 {
    DEFAULT_VIDEO_SPEED
}

/// How the daily time budget is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetMode {
    /// Finish in a fixed number of days; the daily budget is derived
    Days(u32),
    /// Study a fixed number of hours per day; the day count is derived
    Hours(u32),
}

impl fmt::Display for BudgetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Days(days) => write!(f, "{days} days until completion"),
            Self::Hours(hours) => write!(f, "{hours} hours per day"),
        }
    }
}

/// User-chosen inputs for building a schedule
///
/// Exactly one of `days_until_completion` and `hours_per_day` must be set;
/// [`budget_mode`](Self::budget_mode) checks this together with the other
/// numeric constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleParameters {
    /// Target number of days (days-mode)
    #[serde(default)]
    pub days_until_completion: Option<u32>,

    /// Daily study hours (hours-mode)
    #[serde(default)]
    pub hours_per_day: Option<u32>,

    /// First study day; tomorrow when unset
    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    /// Add the 1.5x pausing allowance to every lecture
    #[serde(default)]
    pub pausing_buffer: bool,

    /// Playback speed divisor (1.0 = normal)
    #[serde(default = "default_video_speed")]
    pub video_speed: f64,
}

impl Default for ScheduleParameters {
    /// No budget mode selected; [`budget_mode`](Self::budget_mode) rejects it
    fn default() -> Self {
        Self {
            days_until_completion: None,
            hours_per_day: None,
            start_date: None,
            pausing_buffer: false,
            video_speed: DEFAULT_VIDEO_SPEED,
        }
    }
}

impl ScheduleParameters {
    /// Days-mode parameters with default start, buffer, and speed
    #[must_use]
    pub const fn by_days(days: u32) -> Self {
        Self {
            days_until_completion: Some(days),
            hours_per_day: None,
            start_date: None,
            pausing_buffer: false,
            video_speed: DEFAULT_VIDEO_SPEED,
        }
    }

    /// Hours-mode parameters with default start, buffer, and speed
    #[must_use]
    pub const fn by_hours(hours: u32) -> Self {
        Self {
            days_until_completion: None,
            hours_per_day: Some(hours),
            start_date: None,
            pausing_buffer: false,
            video_speed: DEFAULT_VIDEO_SPEED,
        }
    }

    /// Set the first study day
    #[must_use]
    pub const fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Enable or disable the pausing buffer
    #[must_use]
    pub const fn with_pausing_buffer(mut self, pausing_buffer: bool) -> Self {
        self.pausing_buffer = pausing_buffer;
        self
    }

    /// Set the playback speed
    #[must_use]
    pub fn with_video_speed(mut self, video_speed: f64) -> Self {
        self.video_speed = video_speed;
        self
    }

    /// Validate the parameters and return the selected budget mode
    ///
    /// # Errors
    /// - [`ScheduleError::BudgetModeConflict`] / [`ScheduleError::MissingBudgetMode`]
    ///   unless exactly one mode is set
    /// - [`ScheduleError::NonPositiveDays`] / [`ScheduleError::NonPositiveHours`]
    ///   for a zero count
    /// - [`ScheduleError::InvalidVideoSpeed`] unless the speed is positive and finite
    pub fn budget_mode(&self) -> Result<BudgetMode, ScheduleError> {
        let mode = match (self.days_until_completion, self.hours_per_day) {
            (Some(_), Some(_)) => return Err(ScheduleError::BudgetModeConflict),
            (None, None) => return Err(ScheduleError::MissingBudgetMode),
            (Some(0), None) => return Err(ScheduleError::NonPositiveDays),
            (None, Some(0)) => return Err(ScheduleError::NonPositiveHours),
            (Some(days), None) => BudgetMode::Days(days),
            (None, Some(hours)) => BudgetMode::Hours(hours),
        };

        if !(self.video_speed.is_finite() && self.video_speed > 0.0) {
            return Err(ScheduleError::InvalidVideoSpeed(self.video_speed));
        }

        Ok(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_mode() {
        assert_eq!(
            ScheduleParameters::by_days(5).budget_mode(),
            Ok(BudgetMode::Days(5))
        );
        assert_eq!(
            ScheduleParameters::by_hours(2).budget_mode(),
            Ok(BudgetMode::Hours(2))
        );

        let mut both = ScheduleParameters::by_days(5);
        both.hours_per_day = Some(2);
        assert_eq!(both.budget_mode(), Err(ScheduleError::BudgetModeConflict));

        let mut neither = ScheduleParameters::by_days(5);
        neither.days_until_completion = None;
        assert_eq!(neither.budget_mode(), Err(ScheduleError::MissingBudgetMode));
    }

    #[test]
    fn test_zero_counts_rejected() {
        assert_eq!(
            ScheduleParameters::by_days(0).budget_mode(),
            Err(ScheduleError::NonPositiveDays)
        );
        assert_eq!(
            ScheduleParameters::by_hours(0).budget_mode(),
            Err(ScheduleError::NonPositiveHours)
        );
    }

    #[test]
    fn test_video_speed_rejected() {
        for speed in [0.0, -1.25, f64::NAN, f64::INFINITY] {
            let params = ScheduleParameters::by_hours(1).with_video_speed(speed);
            assert!(matches!(
                params.budget_mode(),
                Err(ScheduleError::InvalidVideoSpeed(_))
            ));
        }
    }

    #[test]
    fn test_deserialize_defaults() {
        let params: ScheduleParameters =
            serde_json::from_str(r#"{"hours_per_day": 3}"#).unwrap();
        assert_eq!(params.hours_per_day, Some(3));
        assert!(params.days_until_completion.is_none());
        assert!(params.start_date.is_none());
        assert!(!params.pausing_buffer);
        assert!((params.video_speed - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deserialize_start_date() {
        let params: ScheduleParameters = serde_json::from_str(
            r#"{"days_until_completion": 10, "start_date": "2024-03-01", "video_speed": 1.5}"#,
        )
        .unwrap();
        assert_eq!(
            params.start_date,
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        assert!((params.video_speed - 1.5).abs() < f64::EPSILON);
    }
}
