//! Greedy day-by-day lecture distribution
//!
//! Lectures are walked in curriculum order and appended to the current day.
//! Each lecture adds its effective duration (pausing buffer applied, then
//! divided by video speed) to a running total; once the total reaches the
//! daily budget the day is closed and a new, empty day is opened. The lecture
//! that crosses the budget stays on the day it was added to, so a day may run
//! over budget.
//!
//! The daily budget depends on the mode:
//! - days-mode: `total / days / speed`, times the buffer ratio when enabled
//! - hours-mode: `hours * 3600`, with buffer and speed left to the per-lecture
//!   effective duration

use super::error::ScheduleError;
use super::model::{Schedule, ScheduleDay};
use super::params::{BudgetMode, ScheduleParameters};
use super::summary::completion_info;
use crate::core::models::Course;
use chrono::{Days, Local, NaiveDate};

/// Multiplier applied to a lecture's duration when the pausing buffer is on
pub const PAUSING_BUFFER_RATIO: f64 = 1.5;

/// Seconds in one hour
pub const SECONDS_PER_HOUR: u64 = 3600;

/// Distribute a course over days, starting tomorrow unless a start date is set
///
/// # Errors
/// Returns a [`ScheduleError`] when the parameters are invalid or the
/// derived daily budget is not a positive finite number.
pub fn distribute(course: &Course, params: &ScheduleParameters) -> Result<Schedule, ScheduleError> {
    distribute_on(course, params, Local::now().date_naive())
}

/// Distribute a course over days, treating `today` as the generation date
///
/// The result depends only on the arguments, so identical inputs always
/// give an identical schedule.
///
/// # Errors
/// See [`distribute`].
pub fn distribute_on(
    course: &Course,
    params: &ScheduleParameters,
    today: NaiveDate,
) -> Result<Schedule, ScheduleError> {
    let mode = params.budget_mode()?;
    let start_date = params
        .start_date
        .unwrap_or_else(|| today.checked_add_days(Days::new(1)).unwrap_or(today));
    let total_duration_seconds = course.total_duration_seconds();
    let seconds_per_day = budget_seconds(
        total_duration_seconds,
        mode,
        params.pausing_buffer,
        params.video_speed,
    );

    let days = if course.lecture_count() == 0 {
        vec![ScheduleDay::new(1, start_date)]
    } else {
        if !(seconds_per_day.is_finite() && seconds_per_day > 0.0) {
            return Err(ScheduleError::InvalidBudget(seconds_per_day));
        }
        bucket_lectures(course, params, seconds_per_day, start_date)?
    };

    let completion_info =
        completion_info(total_duration_seconds, mode, params.pausing_buffer, days.len());

    Ok(Schedule {
        course_id: course.id.clone(),
        course_title: course.title.clone(),
        total_duration_seconds,
        mode,
        start_date,
        pausing_buffer: params.pausing_buffer,
        video_speed: params.video_speed,
        seconds_per_day,
        days,
        completion_info,
    })
}

/// Seconds-per-day budget for a course of `total_duration_seconds`
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn budget_seconds(
    total_duration_seconds: u64,
    mode: BudgetMode,
    pausing_buffer: bool,
    video_speed: f64,
) -> f64 {
    match mode {
        BudgetMode::Days(days) => {
            let base = total_duration_seconds as f64 / f64::from(days) / video_speed;
            if pausing_buffer {
                base * PAUSING_BUFFER_RATIO
            } else {
                base
            }
        }
        BudgetMode::Hours(hours) => f64::from(hours) * SECONDS_PER_HOUR as f64,
    }
}

/// Time one lecture takes out of the daily budget
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn effective_seconds(duration_seconds: u64, pausing_buffer: bool, video_speed: f64) -> f64 {
    let mut seconds = duration_seconds as f64;
    if pausing_buffer {
        seconds *= PAUSING_BUFFER_RATIO;
    }
    seconds / video_speed
}

fn bucket_lectures(
    course: &Course,
    params: &ScheduleParameters,
    seconds_per_day: f64,
    start_date: NaiveDate,
) -> Result<Vec<ScheduleDay>, ScheduleError> {
    let mut days = Vec::new();
    let mut current = ScheduleDay::new(1, start_date);
    let mut cumulative_seconds = 0.0;

    for lecture in course.lectures() {
        cumulative_seconds += effective_seconds(
            lecture.duration_seconds,
            params.pausing_buffer,
            params.video_speed,
        );
        current.push(lecture.clone());

        if cumulative_seconds >= seconds_per_day {
            cumulative_seconds = 0.0;
            let number = current.number() + 1;
            let next = ScheduleDay::new(number, day_date(start_date, number)?);
            days.push(std::mem::replace(&mut current, next));
        }
    }

    // The last open day is kept even when nothing was added to it
    days.push(current);
    Ok(days)
}

/// Calendar date of day `number` (1-based)
fn day_date(start_date: NaiveDate, number: usize) -> Result<NaiveDate, ScheduleError> {
    let offset = u64::try_from(number - 1).map_err(|_| ScheduleError::DateOutOfRange(number))?;
    start_date
        .checked_add_days(Days::new(offset))
        .ok_or(ScheduleError::DateOutOfRange(number))
}
