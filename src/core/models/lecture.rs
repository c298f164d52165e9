//! Lecture model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of curriculum item; decides how its duration is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LectureType {
    /// Timed video lecture
    Lecture,
    /// Multiple-choice quiz, measured in questions
    Quiz,
    /// Coding exercise, measured in questions
    CodingExercise,
    /// Reading article with an estimated reading time
    Article,
}

/// Icon classes used by the content provider, mapped to item kinds
const ICON_CLASSES: [(&str, LectureType); 4] = [
    ("udi udi-video", LectureType::Lecture),
    ("udi udi-article", LectureType::Article),
    ("udi udi-quiz", LectureType::Quiz),
    ("udi udi-coding-exercise", LectureType::CodingExercise),
];

impl LectureType {
    /// Resolve a provider icon class (e.g. `"udi udi-video"`) to an item kind
    #[must_use]
    pub fn from_icon_class(icon_class: &str) -> Option<Self> {
        let icon_class = icon_class.trim();
        ICON_CLASSES
            .iter()
            .find(|(class, _)| *class == icon_class)
            .map(|(_, kind)| *kind)
    }

    /// Lowercase name used in exports (`lecture`, `coding_exercise`, ...)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lecture => "lecture",
            Self::Quiz => "quiz",
            Self::CodingExercise => "coding_exercise",
            Self::Article => "article",
        }
    }
}

impl fmt::Display for LectureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LectureType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lecture" | "video" => Ok(Self::Lecture),
            "quiz" => Ok(Self::Quiz),
            "coding_exercise" | "coding-exercise" => Ok(Self::CodingExercise),
            "article" => Ok(Self::Article),
            _ => Self::from_icon_class(s).ok_or_else(|| format!("Unknown lecture type: {s}")),
        }
    }
}

/// A single curriculum item with its normalized duration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lecture {
    /// Provider identifier
    pub id: i64,

    /// Display title
    pub title: String,

    /// Item kind
    pub lecture_type: LectureType,

    /// Duration in whole seconds
    pub duration_seconds: u64,
}

impl Lecture {
    /// Create a new lecture
    #[must_use]
    pub const fn new(
        id: i64,
        title: String,
        lecture_type: LectureType,
        duration_seconds: u64,
    ) -> Self {
        Self {
            id,
            title,
            lecture_type,
            duration_seconds,
        }
    }
}
