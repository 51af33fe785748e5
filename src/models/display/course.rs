//! Catalog display models

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{Chapter, Course, Section};
use crate::output::formatters::format_duration_seconds;

/// Course row for table/JSON output.
///
/// Category and tag names are resolved against the reference-data cache
/// by the caller; the wire model only carries ids.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CourseDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "PRICE")]
    pub price: String,

    #[tabled(rename = "CATEGORY")]
    pub category: String,

    #[tabled(rename = "TAGS")]
    pub tags: String,

    #[tabled(rename = "CHAPTERS")]
    pub chapters: String,
}

impl CourseDisplay {
    pub fn new(course: Course, category: String, tags: String) -> Self {
        Self {
            id: course.id,
            title: course.title,
            status: course.status.unwrap_or_else(|| "-".to_string()),
            price: course.price.unwrap_or_else(|| "-".to_string()),
            category,
            tags,
            chapters: course
                .chapter_count
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Chapter row
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ChapterDisplay {
    #[tabled(rename = "#")]
    pub position: String,

    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "SECTIONS")]
    pub sections: String,
}

impl From<Chapter> for ChapterDisplay {
    fn from(chapter: Chapter) -> Self {
        Self {
            position: chapter
                .position
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string()),
            id: chapter.id,
            title: chapter.title,
            sections: chapter
                .section_count
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Section row
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct SectionDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "KIND")]
    pub kind: String,

    #[tabled(rename = "DURATION")]
    pub duration: String,

    #[tabled(rename = "FREE")]
    pub free: String,
}

impl From<Section> for SectionDisplay {
    fn from(section: Section) -> Self {
        Self {
            id: section.id,
            title: section.title,
            kind: section.kind.unwrap_or_else(|| "-".to_string()),
            duration: format_duration_seconds(section.duration_seconds),
            free: match section.free {
                Some(true) => "yes".to_string(),
                Some(false) => "no".to_string(),
                None => "-".to_string(),
            },
        }
    }
}
