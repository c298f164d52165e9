//! Raw curriculum documents as delivered by the content provider

use serde::{Deserialize, Deserializer, Serialize};

/// One curriculum item before normalization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLecture {
    /// Provider identifier
    pub id: i64,
    /// Item title
    pub title: String,
    /// Provider icon class, e.g. `udi udi-video`
    pub icon_class: String,
    /// Length summary, e.g. `05:32` or `4 questions`
    #[serde(default)]
    pub content_summary: Option<String>,
}

/// A section of raw items in curriculum order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSection {
    /// Section title
    pub title: String,
    /// Items in playback order
    #[serde(default)]
    pub items: Vec<RawLecture>,
}

/// Self-describing course file: identity plus sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDocument {
    /// Course identifier (string or number in the file)
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Course title
    pub title: String,
    /// Sections in curriculum order
    pub sections: Vec<RawSection>,
}

/// Curriculum response of the provider's landing-components endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LandingComponents {
    /// `curriculum_context` component
    pub curriculum_context: CurriculumContext,
}

/// Wrapper around the curriculum payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurriculumContext {
    /// Curriculum payload
    pub data: CurriculumData,
}

/// Section list of the curriculum payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurriculumData {
    /// Sections in curriculum order
    pub sections: Vec<RawSection>,
}

/// Any supported curriculum file layout
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CurriculumDocument {
    /// `{ "id", "title", "sections" }`
    Course(CourseDocument),
    /// `{ "curriculum_context": { "data": { "sections" } } }`
    Landing(LandingComponents),
}

impl CurriculumDocument {
    /// Sections regardless of layout
    #[must_use]
    pub fn sections(&self) -> &[RawSection] {
        match self {
            Self::Course(doc) => &doc.sections,
            Self::Landing(landing) => &landing.curriculum_context.data.sections,
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    })
}
