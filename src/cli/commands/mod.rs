//! CLI command handlers for `studyplan`.
//!
//! Each subcommand lives in its own submodule and returns a printable
//! error message on failure.

pub mod config;
pub mod inspect;
pub mod schedule;
