//! Duration normalization for curriculum items
//!
//! Every item kind is reduced to whole seconds:
//! - lectures and articles carry an `MM:SS` length in their content summary
//! - quizzes and coding exercises carry a question count, converted with a
//!   fixed per-question allowance
//!
//! Summaries that cannot be read normalize to zero.

use crate::core::models::LectureType;
use regex::Regex;
use std::sync::LazyLock;

/// Time allowed per quiz question (2 minutes)
pub const QUIZ_SECONDS_PER_QUESTION: u64 = 120;

/// Time allowed per coding-exercise question (5 minutes)
pub const CODING_EXERCISE_SECONDS_PER_QUESTION: u64 = 300;

static CLOCK_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+):(\d+)").unwrap());

static QUESTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+) question").unwrap());

/// Convert a content summary into a duration in seconds
///
/// # Examples
/// ```
/// use study_planner::core::duration::normalize;
/// use study_planner::core::models::LectureType;
///
/// assert_eq!(normalize("12:34", LectureType::Lecture), 754);
/// assert_eq!(normalize("3 questions", LectureType::Quiz), 360);
/// assert_eq!(normalize("garbage", LectureType::Lecture), 0);
/// ```
#[must_use]
pub fn normalize(content_summary: &str, lecture_type: LectureType) -> u64 {
    match lecture_type {
        LectureType::Lecture | LectureType::Article => clock_seconds(content_summary),
        LectureType::Quiz | LectureType::CodingExercise => {
            question_count(content_summary).saturating_mul(per_question_seconds(lecture_type))
        }
    }
}

/// Seconds allotted per question for question-based items, zero otherwise
#[must_use]
pub const fn per_question_seconds(lecture_type: LectureType) -> u64 {
    match lecture_type {
        LectureType::Quiz => QUIZ_SECONDS_PER_QUESTION,
        LectureType::CodingExercise => CODING_EXERCISE_SECONDS_PER_QUESTION,
        LectureType::Lecture | LectureType::Article => 0,
    }
}

/// First `MM:SS` group as seconds, or 0
fn clock_seconds(summary: &str) -> u64 {
    CLOCK_PATTERN
        .captures(summary)
        .and_then(|caps| {
            let minutes: u64 = caps[1].parse().ok()?;
            let seconds: u64 = caps[2].parse().ok()?;
            Some(minutes.saturating_mul(60).saturating_add(seconds))
        })
        .unwrap_or(0)
}

/// Integer directly before the word `question`, or 0
fn question_count(summary: &str) -> u64 {
    QUESTION_PATTERN
        .captures(summary)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lecture_clock() {
        assert_eq!(normalize("12:34", LectureType::Lecture), 754);
        assert_eq!(normalize("05:00", LectureType::Lecture), 300);
        assert_eq!(normalize("0:07", LectureType::Lecture), 7);
    }

    #[test]
    fn test_article_uses_clock_inside_text() {
        assert_eq!(normalize("Reading time 02:30 approx", LectureType::Article), 150);
    }

    #[test]
    fn test_first_clock_match_wins() {
        // An hour-bearing summary is read from its first two groups
        assert_eq!(normalize("01:02:03", LectureType::Lecture), 62);
        assert_eq!(normalize("03:00 then 09:00", LectureType::Lecture), 180);
    }

    #[test]
    fn test_questions() {
        assert_eq!(normalize("3 questions", LectureType::Quiz), 360);
        assert_eq!(normalize("1 question", LectureType::Quiz), 120);
        assert_eq!(normalize("4 questions", LectureType::CodingExercise), 1200);
    }

    #[test]
    fn test_question_word_is_case_sensitive() {
        assert_eq!(normalize("3 Questions", LectureType::Quiz), 0);
    }

    #[test]
    fn test_unparseable_degrades_to_zero() {
        assert_eq!(normalize("garbage", LectureType::Lecture), 0);
        assert_eq!(normalize("", LectureType::Article), 0);
        assert_eq!(normalize("12:34", LectureType::Quiz), 0);
        assert_eq!(normalize("3 questions", LectureType::Lecture), 0);
    }

    #[test]
    fn test_oversized_numbers_do_not_panic() {
        let huge = "99999999999999999999999:00";
        assert_eq!(normalize(huge, LectureType::Lecture), 0);

        let many = format!("{} questions", u64::MAX);
        assert_eq!(normalize(&many, LectureType::CodingExercise), u64::MAX);
    }

    #[test]
    fn test_per_question_seconds() {
        assert_eq!(per_question_seconds(LectureType::Quiz), 120);
        assert_eq!(per_question_seconds(LectureType::CodingExercise), 300);
        assert_eq!(per_question_seconds(LectureType::Lecture), 0);
    }
}
