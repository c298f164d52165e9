//! Integration tests for schedule export

use chrono::NaiveDate;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use study_planner::core::curriculum::{load_course, CourseIdentity};
use study_planner::core::report::{reporter_for, ReportFormat};
use study_planner::core::schedule::{distribute_on, Schedule, ScheduleParameters};
use tempfile::TempDir;

fn sample_schedule(params: ScheduleParameters) -> Schedule {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample_course.json");
    let course = load_course(path, &CourseIdentity::default()).expect("Failed to load fixture");
    let start = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
    distribute_on(&course, &params.with_start_date(start), start).expect("Failed to schedule")
}

#[test]
fn test_text_report_written_to_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let schedule = sample_schedule(ScheduleParameters::by_hours(1));
    let output = temp_dir
        .path()
        .join(format!("{}_schedule.txt", schedule.course_id()));

    reporter_for(ReportFormat::Text)
        .generate(&schedule, &output)
        .expect("Failed to write report");

    let content = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "Systems Programming with Rust Schedule");
    assert_eq!(lines[1], "Total duration: 1:47 (hh:mm)");
    assert_eq!(lines[2], "Hours per day: 1");
    assert!(content.contains("Day 1 (2024-04-01)\n*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-*-\nWelcome - 3:10 (lecture)\n"));
    assert!(content.contains("Borrowing quiz - 10:00 (quiz)"));
    assert!(content.contains("Fix the borrow checker - 10:00 (coding_exercise)"));
}

#[test]
fn test_every_lecture_appears_once_in_text() {
    let schedule = sample_schedule(ScheduleParameters::by_days(4));
    let text = reporter_for(ReportFormat::Text).render(&schedule).unwrap();

    for lecture in schedule.lectures() {
        let needle = format!("{} - ", lecture.title);
        assert_eq!(text.matches(&needle).count(), 1, "{}", lecture.title);
    }
    assert_eq!(text.matches("Day ").count(), schedule.day_count());
}

#[test]
fn test_json_days_keep_order() {
    let schedule = sample_schedule(ScheduleParameters::by_hours(1));
    let json = reporter_for(ReportFormat::Json).render(&schedule).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    let days = value["days"].as_array().expect("days should be an array");
    assert_eq!(days.len(), schedule.day_count());
    for (idx, day) in days.iter().enumerate() {
        assert_eq!(day["day"], idx + 1);
    }

    let ids: Vec<i64> = days
        .iter()
        .flat_map(|day| day["lectures"].as_array().unwrap().iter())
        .map(|lecture| lecture["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![101, 102, 103, 201, 202, 203, 204, 301]);
    assert_eq!(value["completion_info"], schedule.completion_info());
}

#[test]
fn test_markdown_report() {
    let schedule = sample_schedule(ScheduleParameters::by_days(2).with_pausing_buffer(true));
    let md = reporter_for(ReportFormat::Markdown).render(&schedule).unwrap();

    assert!(md.starts_with("# Systems Programming with Rust Schedule"));
    assert!(md.contains("- **Days until completion:** 2"));
    assert!(md.contains("- **Pausing buffer:** on"));
    assert!(md.contains("## Day 1 (2024-04-01)"));
    // 25:00 with the 1.5x buffer
    assert!(md.contains("| Moves and copies | lecture | 25:00 | 37:30 |"));
}
