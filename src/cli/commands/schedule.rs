//! Schedule command handler
//!
//! Loads a curriculum, distributes it over days, and writes the report in
//! the requested format.

use crate::args::ScheduleArgs;
use logger::{error, info, verbose};
use study_planner::config::Config;
use study_planner::core::{
    curriculum::{load_course, CourseIdentity},
    models::Course,
    report::{reporter_for, ReportFormat},
    schedule::{distribute, Schedule, ScheduleParameters},
};
use std::path::PathBuf;

/// Run the schedule command.
///
/// # Errors
/// Returns a user-facing `✗ ...` message when loading, scheduling, or
/// writing fails.
pub fn run(args: &ScheduleArgs, config: &Config) -> Result<(), String> {
    let params = build_parameters(args, config);
    let format = match args.format {
        Some(format) => format,
        None => config
            .report_format()
            .map_err(|e| format!("✗ Invalid format in config: {e}"))?,
    };

    let course = load(args)?;
    let schedule = distribute(&course, &params).map_err(|e| {
        error!("Scheduling failed for {}: {e}", args.input_file.display());
        format!("✗ {e}")
    })?;

    info!(
        "Scheduled {} lectures over {} days ({:.0} s per day)",
        course.lecture_count(),
        schedule.day_count(),
        schedule.seconds_per_day()
    );

    let reporter = reporter_for(format);
    if args.stdout {
        let content = reporter
            .render(&schedule)
            .map_err(|e| format!("✗ Failed to render {format} report: {e}"))?;
        print!("{content}");
        return Ok(());
    }

    let output_path = output_path(args, config, &schedule, format)?;
    reporter.generate(&schedule, &output_path).map_err(|e| {
        error!("Report export failed: {e}");
        format!(
            "✗ Failed to write {format} report to {}: {e}",
            output_path.display()
        )
    })?;

    println!("✓ Schedule generated: {}", output_path.display());
    println!("{}", schedule.completion_info());
    info!("Schedule exported to: {}", output_path.display());
    Ok(())
}

/// Command-line options first, then config defaults
fn build_parameters(args: &ScheduleArgs, config: &Config) -> ScheduleParameters {
    let params = ScheduleParameters {
        days_until_completion: args.days,
        hours_per_day: args.hours,
        start_date: args.start,
        pausing_buffer: args
            .pausing_buffer_override()
            .unwrap_or(config.schedule.pausing_buffer),
        video_speed: args.speed.unwrap_or(config.schedule.video_speed),
    };
    verbose!(
        "Parameters: days={:?} hours={:?} start={:?} buffer={} speed={}",
        params.days_until_completion,
        params.hours_per_day,
        params.start_date,
        params.pausing_buffer,
        params.video_speed
    );
    params
}

fn load(args: &ScheduleArgs) -> Result<Course, String> {
    let identity = CourseIdentity {
        id: args.course_id.clone(),
        title: args.title.clone(),
    };
    load_course(&args.input_file, &identity).map_err(|e| {
        error!("Failed to load curriculum {}: {e}", args.input_file.display());
        format!("✗ {e}")
    })
}

fn output_path(
    args: &ScheduleArgs,
    config: &Config,
    schedule: &Schedule,
    format: ReportFormat,
) -> Result<PathBuf, String> {
    if let Some(output) = &args.output {
        return Ok(output.clone());
    }

    let schedules_dir = config.schedules_dir();
    std::fs::create_dir_all(&schedules_dir).map_err(|e| {
        format!(
            "✗ Failed to create schedules directory {}: {e}",
            schedules_dir.display()
        )
    })?;

    Ok(schedules_dir.join(format!(
        "{}_schedule.{}",
        schedule.course_id(),
        format.extension()
    )))
}
