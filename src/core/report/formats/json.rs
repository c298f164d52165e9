//! JSON report generator

use crate::core::models::Lecture;
use crate::core::report::{format_hh_mm, ReportError, ScheduleReporter};
use crate::core::schedule::{BudgetMode, Schedule};
use chrono::NaiveDate;
use serde::Serialize;

/// JSON report generator
///
/// Days are written as an ordered array.
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct ScheduleView<'a> {
    course_id: &'a str,
    course_title: &'a str,
    total_duration: String,
    total_duration_seconds: u64,
    start_date: NaiveDate,
    mode: BudgetMode,
    pausing_buffer: bool,
    video_speed: f64,
    seconds_per_day: f64,
    completion_info: &'a str,
    days: Vec<DayView<'a>>,
}

#[derive(Serialize)]
struct DayView<'a> {
    day: usize,
    label: String,
    date: NaiveDate,
    lectures: &'a [Lecture],
}

impl ScheduleReporter for JsonReporter {
    fn render(&self, schedule: &Schedule) -> Result<String, ReportError> {
        let view = ScheduleView {
            course_id: schedule.course_id(),
            course_title: schedule.course_title(),
            total_duration: format_hh_mm(schedule.total_duration_seconds()),
            total_duration_seconds: schedule.total_duration_seconds(),
            start_date: schedule.start_date(),
            mode: schedule.mode(),
            pausing_buffer: schedule.pausing_buffer(),
            video_speed: schedule.video_speed(),
            seconds_per_day: schedule.seconds_per_day(),
            completion_info: schedule.completion_info(),
            days: schedule
                .days()
                .iter()
                .map(|day| DayView {
                    day: day.number(),
                    label: day.label(),
                    date: day.date(),
                    lectures: day.lectures(),
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&view)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Course, LectureType, Section};
    use crate::core::schedule::{distribute_on, ScheduleParameters};
    use serde_json::Value;

    #[test]
    fn test_json_structure() {
        let mut course = Course::new("501".to_string(), "Databases".to_string());
        let mut section = Section::new("Intro".to_string());
        section.add_lecture(Lecture::new(10, "Tables".to_string(), LectureType::Lecture, 1_800));
        section.add_lecture(Lecture::new(11, "Keys".to_string(), LectureType::Article, 1_800));
        section.add_lecture(Lecture::new(12, "Joins".to_string(), LectureType::CodingExercise, 600));
        course.add_section(section);

        let start = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let params = ScheduleParameters::by_days(2).with_start_date(start);
        let schedule = distribute_on(&course, &params, start).unwrap();

        let json = JsonReporter::new().render(&schedule).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["course_id"], "501");
        assert_eq!(value["total_duration"], "1:10");
        assert_eq!(value["start_date"], "2024-01-15");
        assert_eq!(value["mode"]["days"], 2);
        assert_eq!(value["pausing_buffer"], false);

        let days = value["days"].as_array().unwrap();
        assert_eq!(days[0]["label"], "Day 1 (2024-01-15)");
        assert_eq!(days[0]["lectures"][0]["title"], "Tables");
        assert_eq!(days[0]["lectures"][0]["lecture_type"], "lecture");
        assert_eq!(days[1]["date"], "2024-01-16");
        assert_eq!(days[1]["lectures"][0]["lecture_type"], "coding_exercise");
    }
}
