//! Course catalog models

use serde::{Deserialize, Serialize};

/// Course resource
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Course ID
    pub id: String,

    /// Course title
    pub title: String,

    /// Publication status (DRAFT, PUBLISHED, ARCHIVED)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Listed price, as a decimal string from the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// Category the course is filed under
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,

    /// Tags attached to the course
    #[serde(default)]
    pub tag_ids: Vec<i64>,

    /// Number of chapters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter_count: Option<u32>,

    /// Creation timestamp (RFC 3339)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Chapter within a course
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: String,
    pub course_id: String,
    pub title: String,

    /// Ordering position within the course
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_count: Option<u32>,
}

/// Section within a chapter
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub chapter_id: String,
    pub title: String,

    /// Content kind (VIDEO, DOCUMENT, QUIZ)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Playback length for video sections
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,

    /// Whether the section is previewable without purchase
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free: Option<bool>,
}

/// A course the signed-in user has favorited
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: String,
    pub course_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Question bank resource
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionBank {
    pub id: String,
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_count: Option<u32>,
}

/// Course tag (reference data)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

/// Course category (reference data)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_optional_fields_default() {
        let json = r#"{"id": "c-1", "title": "Rust 101"}"#;
        let course: Course = serde_json::from_str(json).unwrap();

        assert_eq!(course.title, "Rust 101");
        assert!(course.tag_ids.is_empty());
        assert!(course.category_id.is_none());
        assert!(course.price.is_none());
    }

    #[test]
    fn test_course_camel_case_wire_names() {
        let json = r#"{
            "id": "c-2",
            "title": "Databases",
            "categoryId": 7,
            "tagIds": [1, 3],
            "chapterCount": 12,
            "createdAt": "2025-01-15T10:00:00Z"
        }"#;
        let course: Course = serde_json::from_str(json).unwrap();

        assert_eq!(course.category_id, Some(7));
        assert_eq!(course.tag_ids, vec![1, 3]);
        assert_eq!(course.chapter_count, Some(12));
    }

    #[test]
    fn test_section_kind_and_duration() {
        let json = r#"{
            "id": "s-1",
            "chapterId": "ch-1",
            "title": "Intro",
            "kind": "VIDEO",
            "durationSeconds": 420,
            "free": true
        }"#;
        let section: Section = serde_json::from_str(json).unwrap();

        assert_eq!(section.kind.as_deref(), Some("VIDEO"));
        assert_eq!(section.duration_seconds, Some(420));
        assert_eq!(section.free, Some(true));
    }

    #[test]
    fn test_category_parent_optional() {
        let root: Category = serde_json::from_str(r#"{"id": 1, "name": "IT"}"#).unwrap();
        assert!(root.parent_id.is_none());

        let child: Category =
            serde_json::from_str(r#"{"id": 2, "name": "Rust", "parentId": 1}"#).unwrap();
        assert_eq!(child.parent_id, Some(1));
    }
}
