//! Inspect command handler

use logger::error;
use study_planner::core::curriculum::{load_course, CourseIdentity};
use study_planner::core::models::Course;
use study_planner::core::report::format_hh_mm;
use std::fmt::Write;
use std::path::Path;

/// Print a course overview.
///
/// # Errors
/// Returns a `✗ ...` message when the curriculum cannot be loaded.
pub fn run(input_file: &Path, identity: &CourseIdentity) -> Result<(), String> {
    let course = load_course(input_file, identity).map_err(|e| {
        error!("Failed to load curriculum {}: {e}", input_file.display());
        format!("✗ {e}")
    })?;

    print!("{}", overview(&course));
    Ok(())
}

fn overview(course: &Course) -> String {
    let mut out = format!(
        "\n=== {} ===\nID: {}\nLectures: {}\nTotal duration: {} (hh:mm)\n\n",
        course.title,
        course.id,
        course.lecture_count(),
        format_hh_mm(course.total_duration_seconds())
    );
    for (idx, section) in course.sections.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {} ({} lectures, {})",
            idx + 1,
            section.title,
            section.lectures.len(),
            format_hh_mm(section.duration_seconds())
        );
    }
    out
}
