//! Course assembly from raw sections

use super::document::RawSection;
use super::CurriculumError;
use crate::core::duration::normalize;
use crate::core::models::{Course, Lecture, LectureType, Section};

/// Build a normalized [`Course`] from raw sections
///
/// Each item's icon class is resolved to a [`LectureType`] and its content
/// summary is normalized to seconds. Section and item order is preserved.
///
/// # Errors
/// Returns [`CurriculumError::UnknownItemType`] for an icon class the
/// lookup table does not know.
pub fn build_course(
    id: String,
    title: String,
    raw_sections: &[RawSection],
) -> Result<Course, CurriculumError> {
    let mut course = Course::new(id, title);

    for raw_section in raw_sections {
        let mut section = Section::new(raw_section.title.clone());
        for item in &raw_section.items {
            let lecture_type = LectureType::from_icon_class(&item.icon_class).ok_or_else(|| {
                CurriculumError::UnknownItemType {
                    section: raw_section.title.clone(),
                    title: item.title.clone(),
                    icon_class: item.icon_class.clone(),
                }
            })?;
            let summary = item.content_summary.as_deref().unwrap_or_default();
            section.add_lecture(Lecture::new(
                item.id,
                item.title.clone(),
                lecture_type,
                normalize(summary, lecture_type),
            ));
        }
        course.add_section(section);
    }

    Ok(course)
}
