//! Course model

use super::lecture::Lecture;
use serde::{Deserialize, Serialize};

/// A titled group of lectures in curriculum order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section title (e.g., "Introduction")
    pub title: String,

    /// Lectures in playback order
    pub lectures: Vec<Lecture>,
}

impl Section {
    /// Create an empty section
    #[must_use]
    pub const fn new(title: String) -> Self {
        Self {
            title,
            lectures: Vec::new(),
        }
    }

    /// Append a lecture at the end of the section
    pub fn add_lecture(&mut self, lecture: Lecture) {
        self.lectures.push(lecture);
    }

    /// Sum of lecture durations in this section, saturating at `u64::MAX`
    #[must_use]
    pub fn duration_seconds(&self) -> u64 {
        self.lectures
            .iter()
            .fold(0, |total, l| total.saturating_add(l.duration_seconds))
    }
}

/// A course: ordered sections of ordered lectures
///
/// Section order, then lecture order within a section, is the order in which
/// lectures are scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Provider course identifier
    pub id: String,

    /// Course title
    pub title: String,

    /// Sections in curriculum order
    pub sections: Vec<Section>,
}

impl Course {
    /// Create a course with no sections
    #[must_use]
    pub const fn new(id: String, title: String) -> Self {
        Self {
            id,
            title,
            sections: Vec::new(),
        }
    }

    /// Append a section at the end of the curriculum
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Iterate over every lecture in curriculum order
    pub fn lectures(&self) -> impl Iterator<Item = &Lecture> + '_ {
        self.sections.iter().flat_map(|s| s.lectures.iter())
    }

    /// Number of lectures across all sections
    #[must_use]
    pub fn lecture_count(&self) -> usize {
        self.sections.iter().map(|s| s.lectures.len()).sum()
    }

    /// Total duration in seconds, recomputed from the lectures on every call
    #[must_use]
    pub fn total_duration_seconds(&self) -> u64 {
        self.sections
            .iter()
            .fold(0, |total, s| total.saturating_add(s.duration_seconds()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::LectureType;

    fn lecture(id: i64, seconds: u64) -> Lecture {
        Lecture::new(id, format!("Lecture {id}"), LectureType::Lecture, seconds)
    }

    #[test]
    fn test_empty_course() {
        let course = Course::new("1".to_string(), "Empty".to_string());
        assert_eq!(course.lecture_count(), 0);
        assert_eq!(course.total_duration_seconds(), 0);
        assert!(course.lectures().next().is_none());
    }

    #[test]
    fn test_total_tracks_added_sections() {
        let mut course = Course::new("42".to_string(), "Rust Basics".to_string());

        let mut intro = Section::new("Intro".to_string());
        intro.add_lecture(lecture(1, 90));
        intro.add_lecture(lecture(2, 30));
        course.add_section(intro);
        assert_eq!(course.total_duration_seconds(), 120);

        let mut ownership = Section::new("Ownership".to_string());
        ownership.add_lecture(lecture(3, 600));
        course.add_section(ownership);

        assert_eq!(course.total_duration_seconds(), 720);
        assert_eq!(course.lecture_count(), 3);
    }

    #[test]
    fn test_totals_saturate() {
        let mut course = Course::new("9".to_string(), "Huge".to_string());
        for title in ["A", "B"] {
            let mut section = Section::new(title.to_string());
            section.add_lecture(lecture(1, u64::MAX));
            section.add_lecture(lecture(2, u64::MAX));
            assert_eq!(section.duration_seconds(), u64::MAX);
            course.add_section(section);
        }
        assert_eq!(course.total_duration_seconds(), u64::MAX);
    }

    #[test]
    fn test_lectures_follow_section_order() {
        let mut course = Course::new("7".to_string(), "Order".to_string());
        for (title, ids) in [("B", [3, 4]), ("A", [1, 2])] {
            let mut section = Section::new(title.to_string());
            for id in ids {
                section.add_lecture(lecture(id, 10));
            }
            course.add_section(section);
        }

        let ids: Vec<i64> = course.lectures().map(|l| l.id).collect();
        assert_eq!(ids, vec![3, 4, 1, 2]);
    }
}
