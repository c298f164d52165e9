//! Schedule export
//!
//! Renders a finished [`Schedule`] as plain text, Markdown, or JSON.

pub mod formats;

use crate::core::schedule::Schedule;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub use formats::{JsonReporter, MarkdownReporter, ReportFormat, TextReporter};

/// Errors raised while rendering or writing a report
#[derive(Error, Debug)]
pub enum ReportError {
    /// Writing the output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Template rendering failed
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// Trait for schedule exporters
pub trait ScheduleReporter {
    /// Render the schedule as a string
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn render(&self, schedule: &Schedule) -> Result<String, ReportError>;

    /// Render the schedule and write it to `output_path`
    ///
    /// # Errors
    /// Returns an error if rendering or writing fails
    fn generate(&self, schedule: &Schedule, output_path: &Path) -> Result<(), ReportError> {
        let content = self.render(schedule)?;
        fs::write(output_path, content)?;
        Ok(())
    }
}

/// Reporter for the given format
#[must_use]
pub fn reporter_for(format: ReportFormat) -> Box<dyn ScheduleReporter> {
    match format {
        ReportFormat::Text => Box::new(TextReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}

/// Course-length style `H:MM`
#[must_use]
pub fn format_hh_mm(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 3600, seconds % 3600 / 60)
}

/// Lecture-length style `M:SS`
#[must_use]
pub fn format_m_ss(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hh_mm() {
        assert_eq!(format_hh_mm(0), "0:00");
        assert_eq!(format_hh_mm(36_000), "10:00");
        assert_eq!(format_hh_mm(3_725), "1:02");
        assert_eq!(format_hh_mm(59), "0:00");
    }

    #[test]
    fn test_format_m_ss() {
        assert_eq!(format_m_ss(754), "12:34");
        assert_eq!(format_m_ss(5), "0:05");
        assert_eq!(format_m_ss(3_600), "60:00");
    }
}
