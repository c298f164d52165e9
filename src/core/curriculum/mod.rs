//! Curriculum loading
//!
//! Reads a curriculum JSON file (either a self-describing course document or
//! the provider's landing-components payload) and assembles a normalized
//! [`Course`].

pub mod builder;
pub mod document;

pub use builder::build_course;
pub use document::{CourseDocument, CurriculumDocument, RawLecture, RawSection};

use crate::core::models::Course;
use logger::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a curriculum
#[derive(Error, Debug)]
pub enum CurriculumError {
    /// The file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The file is not a supported curriculum document
    #[error("Invalid curriculum document: {0}")]
    Json(#[from] serde_json::Error),

    /// An item's icon class has no known lecture type
    #[error("Unknown item type '{icon_class}' for \"{title}\" in section \"{section}\"")]
    UnknownItemType {
        /// Section holding the item
        section: String,
        /// Item title
        title: String,
        /// Unrecognised icon class
        icon_class: String,
    },

    /// A landing payload was given without a course id or title
    #[error("Course {0} is missing; pass it explicitly for landing-component payloads")]
    MissingCourseIdentity(&'static str),
}

/// Course id/title supplied by the caller
///
/// Values here take precedence over the ones found in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseIdentity {
    /// Course id override
    pub id: Option<String>,
    /// Course title override
    pub title: Option<String>,
}

/// Parse a curriculum JSON string into a course
///
/// # Errors
/// Returns an error for malformed JSON, unknown item types, or a landing
/// payload without an id and title in `identity`.
pub fn parse_course(json: &str, identity: &CourseIdentity) -> Result<Course, CurriculumError> {
    let document: CurriculumDocument = serde_json::from_str(json)?;
    course_from_document(&document, identity)
}

/// Assemble a course from an already parsed document
///
/// # Errors
/// See [`parse_course`].
pub fn course_from_document(
    document: &CurriculumDocument,
    identity: &CourseIdentity,
) -> Result<Course, CurriculumError> {
    let (doc_id, doc_title) = match document {
        CurriculumDocument::Course(doc) => (Some(doc.id.clone()), Some(doc.title.clone())),
        CurriculumDocument::Landing(_) => (None, None),
    };

    let id = identity
        .id
        .clone()
        .or(doc_id)
        .ok_or(CurriculumError::MissingCourseIdentity("id"))?;
    let title = identity
        .title
        .clone()
        .or(doc_title)
        .ok_or(CurriculumError::MissingCourseIdentity("title"))?;

    debug!(
        "Building course {id} from {} sections",
        document.sections().len()
    );
    build_course(id, title, document.sections())
}

/// Load a curriculum file into a course
///
/// For landing payloads without an explicit id, the file stem is used as the
/// course id.
///
/// # Errors
/// See [`parse_course`]; also fails when the file cannot be read.
pub fn load_course<P: AsRef<Path>>(
    path: P,
    identity: &CourseIdentity,
) -> Result<Course, CurriculumError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CurriculumError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document: CurriculumDocument = serde_json::from_str(&content)?;

    let mut identity = identity.clone();
    if identity.id.is_none() && matches!(document, CurriculumDocument::Landing(_)) {
        identity.id = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(str::to_string);
    }

    let course = course_from_document(&document, &identity)?;
    info!(
        "Loaded course \"{}\" ({} lectures, {} s) from {}",
        course.title,
        course.lecture_count(),
        course.total_duration_seconds(),
        path.display()
    );
    Ok(course)
}
