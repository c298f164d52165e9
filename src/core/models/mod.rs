//! Data models for curricula

pub mod course;
pub mod lecture;

pub use course::{Course, Section};
pub use lecture::{Lecture, LectureType};
