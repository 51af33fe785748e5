//! Catalog API trait

use async_trait::async_trait;

use crate::client::models::{Category, Chapter, Course, Favorite, QuestionBank, Section, Tag};
use crate::client::pagination::{Page, PaginationParams};
use crate::error::Result;

/// Course catalog and reference-data operations
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// List courses with optional pagination
    async fn list_courses(&self, pagination: Option<&PaginationParams>) -> Result<Page<Course>>;

    /// Get a single course by ID
    async fn get_course(&self, course_id: &str) -> Result<Course>;

    /// List chapters of a course, in position order
    async fn list_chapters(&self, course_id: &str) -> Result<Vec<Chapter>>;

    /// List sections of a chapter, in position order
    async fn list_sections(&self, chapter_id: &str) -> Result<Vec<Section>>;

    /// List the signed-in user's favorited courses
    async fn list_favorites(&self, pagination: Option<&PaginationParams>)
    -> Result<Page<Favorite>>;

    /// List question banks
    async fn list_question_banks(
        &self,
        pagination: Option<&PaginationParams>,
    ) -> Result<Page<QuestionBank>>;

    /// List all course tags
    async fn list_tags(&self) -> Result<Vec<Tag>>;

    /// Create a course tag
    async fn create_tag(&self, name: &str) -> Result<Tag>;

    /// List all course categories
    async fn list_categories(&self) -> Result<Vec<Category>>;
}
