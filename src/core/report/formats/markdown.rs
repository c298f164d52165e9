//! Markdown report generator
//!
//! Renders one table per day. The output reads well on GitHub, GitLab, and in
//! VS Code previews.

use crate::core::report::{format_hh_mm, format_m_ss, ReportError, ScheduleReporter};
use crate::core::schedule::{effective_seconds, format_decimal, BudgetMode, Schedule};
use askama::Template;

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Template)]
#[template(path = "schedule.md")]
struct ScheduleTemplate {
    title: String,
    course_id: String,
    total_duration: String,
    mode_label: &'static str,
    mode_value: u32,
    start_date: String,
    pausing_buffer: bool,
    video_speed: String,
    completion_info: String,
    days: Vec<DayView>,
}

struct DayView {
    label: String,
    rows: Vec<LectureRow>,
}

struct LectureRow {
    position: usize,
    title: String,
    kind: &'static str,
    duration: String,
    study_time: String,
}

/// Escape characters that would break a table cell
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn study_time(duration_seconds: u64, schedule: &Schedule) -> String {
    let seconds = effective_seconds(
        duration_seconds,
        schedule.pausing_buffer(),
        schedule.video_speed(),
    )
    .round();
    format_m_ss(seconds.max(0.0) as u64)
}

impl ScheduleTemplate {
    fn from_schedule(schedule: &Schedule) -> Self {
        let (mode_label, mode_value) = match schedule.mode() {
            BudgetMode::Days(days) => ("Days until completion", days),
            BudgetMode::Hours(hours) => ("Hours per day", hours),
        };

        let days = schedule
            .days()
            .iter()
            .map(|day| DayView {
                label: day.label(),
                rows: day
                    .lectures()
                    .iter()
                    .enumerate()
                    .map(|(idx, lecture)| LectureRow {
                        position: idx + 1,
                        title: escape_cell(&lecture.title),
                        kind: lecture.lecture_type.as_str(),
                        duration: format_m_ss(lecture.duration_seconds),
                        study_time: study_time(lecture.duration_seconds, schedule),
                    })
                    .collect(),
            })
            .collect();

        Self {
            title: schedule.course_title().to_string(),
            course_id: schedule.course_id().to_string(),
            total_duration: format_hh_mm(schedule.total_duration_seconds()),
            mode_label,
            mode_value,
            start_date: schedule.start_date().format("%Y-%m-%d").to_string(),
            pausing_buffer: schedule.pausing_buffer(),
            video_speed: format_decimal(schedule.video_speed()),
            completion_info: schedule.completion_info().to_string(),
            days,
        }
    }
}

impl ScheduleReporter for MarkdownReporter {
    fn render(&self, schedule: &Schedule) -> Result<String, ReportError> {
        Ok(ScheduleTemplate::from_schedule(schedule).render()?)
    }
}
