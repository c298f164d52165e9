//! Plain-text report generator
//!
//! Header with the course totals and chosen parameters, then one block per
//! day:
//!
//! ```text
//! Day 1 (2024-03-01)
//! *-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-
//! Welcome - 3:10 (lecture)
//! ```

use crate::core::report::{format_hh_mm, format_m_ss, ReportError, ScheduleReporter};
use crate::core::schedule::{format_decimal, BudgetMode, Schedule};
use std::fmt::Write;

/// Separator printed under each day label
const DAY_SEPARATOR: &str = "*-";
const DAY_SEPARATOR_REPEAT: usize = 20;

/// Plain-text report generator
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn write_header(out: &mut String, schedule: &Schedule) {
        let _ = writeln!(out, "{} Schedule", schedule.course_title());
        let _ = writeln!(
            out,
            "Total duration: {} (hh:mm)",
            format_hh_mm(schedule.total_duration_seconds())
        );
        match schedule.mode() {
            BudgetMode::Days(days) => {
                let _ = writeln!(out, "Days until completion: {days}");
            }
            BudgetMode::Hours(hours) => {
                let _ = writeln!(out, "Hours per day: {hours}");
            }
        }
        let _ = writeln!(out, "{}", schedule.completion_info());
        let _ = writeln!(
            out,
            "Start date: {}",
            schedule.start_date().format("%Y-%m-%d")
        );
        let buffer = if schedule.pausing_buffer() { "True" } else { "False" };
        let _ = writeln!(out, "Pausing buffer: {buffer}");
        let _ = writeln!(
            out,
            "Video speed: {}",
            format_decimal(schedule.video_speed())
        );
        out.push('\n');
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleReporter for TextReporter {
    fn render(&self, schedule: &Schedule) -> Result<String, ReportError> {
        let mut out = String::new();
        Self::write_header(&mut out, schedule);

        let separator = DAY_SEPARATOR.repeat(DAY_SEPARATOR_REPEAT);
        for day in schedule.days() {
            let _ = writeln!(out, "{}", day.label());
            let _ = writeln!(out, "{separator}");
            for lecture in day.lectures() {
                let _ = writeln!(
                    out,
                    "{} - {} ({})",
                    lecture.title,
                    format_m_ss(lecture.duration_seconds),
                    lecture.lecture_type
                );
            }
            out.push('\n');
        }

        Ok(out)
    }
}
