//! Core scheduling library: models, loading, distribution, and export

pub mod config;
pub mod curriculum;
pub mod duration;
pub mod models;
pub mod report;
pub mod schedule;

/// Returns the current version of the study planner crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
