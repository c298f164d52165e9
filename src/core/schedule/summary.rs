//! Completion summary text

use super::distributor::{PAUSING_BUFFER_RATIO, SECONDS_PER_HOUR};
use super::params::BudgetMode;

/// Build the completion message for a finished distribution
///
/// Days-mode reports the hours needed per day; this figure includes the
/// pausing buffer but ignores video speed. Hours-mode reports `day_count`,
/// the number of day buckets actually produced.
#[must_use]
pub fn completion_info(
    total_duration_seconds: u64,
    mode: BudgetMode,
    pausing_buffer: bool,
    day_count: usize,
) -> String {
    match mode {
        BudgetMode::Days(days) => {
            let hours = hours_per_day(total_duration_seconds, days, pausing_buffer);
            format!(
                "To complete the course in {days} days, you will need to spend about {} hours per day.",
                format_decimal(round2(hours))
            )
        }
        BudgetMode::Hours(hours) => format!(
            "If you spend {hours} hours per day, you will complete the course in {day_count} days."
        ),
    }
}

/// Hours per day shown to the user in days-mode (not rounded)
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn hours_per_day(total_duration_seconds: u64, days: u32, pausing_buffer: bool) -> f64 {
    let hours =
        total_duration_seconds as f64 / f64::from(days) / SECONDS_PER_HOUR as f64;
    if pausing_buffer {
        hours * PAUSING_BUFFER_RATIO
    } else {
        hours
    }
}

/// Round to two decimal places, ties to even (`1.125` becomes `1.12`)
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Format a number the way a decimal float reads: `2.0`, `1.5`, `1.23`
#[must_use]
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
