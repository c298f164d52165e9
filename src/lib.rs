//! Study planner library
//!
//! Turns an online course curriculum into a day-by-day study schedule.
//! The CLI in `src/cli` is a thin layer over this crate.

pub mod core;

pub use core::config;
pub use core::get_version;
