//! Schedule output types

use super::params::BudgetMode;
use crate::core::models::Lecture;
use chrono::NaiveDate;
use serde::Serialize;

/// One calendar day and the lectures assigned to it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleDay {
    number: usize,
    date: NaiveDate,
    lectures: Vec<Lecture>,
}

impl ScheduleDay {
    pub(crate) const fn new(number: usize, date: NaiveDate) -> Self {
        Self {
            number,
            date,
            lectures: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, lecture: Lecture) {
        self.lectures.push(lecture);
    }

    /// Day number, starting at 1
    #[must_use]
    pub const fn number(&self) -> usize {
        self.number
    }

    /// Calendar date of this day
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Lectures in assignment order
    #[must_use]
    pub fn lectures(&self) -> &[Lecture] {
        &self.lectures
    }

    /// Whether no lecture was assigned to this day
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lectures.is_empty()
    }

    /// Display label, e.g. `Day 3 (2024-03-03)`
    #[must_use]
    pub fn label(&self) -> String {
        format!("Day {} ({})", self.number, self.date.format("%Y-%m-%d"))
    }

    /// Unadjusted content duration of the day in seconds
    #[must_use]
    pub fn duration_seconds(&self) -> u64 {
        self.lectures
            .iter()
            .fold(0, |total, l| total.saturating_add(l.duration_seconds))
    }
}

/// A finished day-by-day study plan for one course
///
/// Built once by [`distribute`](super::distribute) and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schedule {
    pub(crate) course_id: String,
    pub(crate) course_title: String,
    pub(crate) total_duration_seconds: u64,
    pub(crate) mode: BudgetMode,
    pub(crate) start_date: NaiveDate,
    pub(crate) pausing_buffer: bool,
    pub(crate) video_speed: f64,
    pub(crate) seconds_per_day: f64,
    pub(crate) days: Vec<ScheduleDay>,
    pub(crate) completion_info: String,
}

impl Schedule {
    /// Identifier of the scheduled course
    #[must_use]
    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    /// Title of the scheduled course
    #[must_use]
    pub fn course_title(&self) -> &str {
        &self.course_title
    }

    /// Course length in seconds, before buffer and speed adjustments
    #[must_use]
    pub const fn total_duration_seconds(&self) -> u64 {
        self.total_duration_seconds
    }

    /// Budget mode the schedule was built with
    #[must_use]
    pub const fn mode(&self) -> BudgetMode {
        self.mode
    }

    /// Date of day 1
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Whether the pausing buffer was applied
    #[must_use]
    pub const fn pausing_buffer(&self) -> bool {
        self.pausing_buffer
    }

    /// Playback speed used
    #[must_use]
    pub const fn video_speed(&self) -> f64 {
        self.video_speed
    }

    /// Daily budget in seconds that triggered each rollover
    #[must_use]
    pub const fn seconds_per_day(&self) -> f64 {
        self.seconds_per_day
    }

    /// Days in calendar order, including empty ones
    #[must_use]
    pub fn days(&self) -> &[ScheduleDay] {
        &self.days
    }

    /// Number of day buckets
    #[must_use]
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Human-readable completion summary
    #[must_use]
    pub fn completion_info(&self) -> &str {
        &self.completion_info
    }

    /// All scheduled lectures, day by day
    pub fn lectures(&self) -> impl Iterator<Item = &Lecture> + '_ {
        self.days.iter().flat_map(|d| d.lectures.iter())
    }
}
