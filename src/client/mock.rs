//! Mock CourseHub API client for testing
//!
//! Configure responses via builder methods, then hand to the code under
//! test. No real network calls are made.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::api::{AdminApi, AuthApi, CatalogApi};
use super::models::{
    Captcha, Category, Chapter, Course, Favorite, LoginRequest, MediaAsset, Order, Permission,
    QuestionBank, Role, Section, Session, StorageQuota, Tag, User, UserAccount,
};
use super::pagination::{Page, PaginationParams};
use crate::error::{ApiError, Result};

/// Tracks API call counts for test verification
#[derive(Debug, Default, Clone)]
pub struct CallCounts {
    pub login: usize,
    pub refresh: usize,
    pub logout: usize,
    pub profile: usize,
    pub list_courses: usize,
    pub list_tags: usize,
    pub create_tag: usize,
}

/// Mock API client.
///
/// # Example
/// ```ignore
/// let mock = MockCourseClient::new().with_tags(vec![Tag { id: 1, name: "rust".into() }]);
/// let tags = mock.list_tags().await?;
/// ```
#[derive(Default)]
pub struct MockCourseClient {
    session: Mutex<Option<Session>>,
    courses: Mutex<Vec<Course>>,
    chapters: Mutex<Vec<Chapter>>,
    sections: Mutex<Vec<Section>>,
    favorites: Mutex<Vec<Favorite>>,
    question_banks: Mutex<Vec<QuestionBank>>,
    tags: Mutex<Vec<Tag>>,
    categories: Mutex<Vec<Category>>,
    users: Mutex<Vec<UserAccount>>,
    roles: Mutex<Vec<Role>>,
    permissions: Mutex<Vec<Permission>>,
    orders: Mutex<Vec<Order>>,
    media: Mutex<Vec<MediaAsset>>,
    quota: Mutex<Option<StorageQuota>>,
    /// Error to return, consumed on first use
    error: Mutex<Option<ApiError>>,
    refresh_delay: Mutex<Option<Duration>>,
    calls: Mutex<CallCounts>,
}

impl MockCourseClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(self, session: Session) -> Self {
        *self.session.lock().unwrap() = Some(session);
        self
    }

    pub fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().unwrap() = Some(error);
        self
    }

    pub fn with_refresh_delay(self, delay: Duration) -> Self {
        *self.refresh_delay.lock().unwrap() = Some(delay);
        self
    }

    pub fn with_tags(self, tags: Vec<Tag>) -> Self {
        *self.tags.lock().unwrap() = tags;
        self
    }

    pub fn refresh_calls(&self) -> usize {
        self.calls.lock().unwrap().refresh
    }

    pub fn login_calls(&self) -> usize {
        self.calls.lock().unwrap().login
    }

    pub fn list_tags_calls(&self) -> usize {
        self.calls.lock().unwrap().list_tags
    }

    pub fn list_courses_calls(&self) -> usize {
        self.calls.lock().unwrap().list_courses
    }

    fn take_error(&self) -> Option<ApiError> {
        self.error.lock().unwrap().take()
    }

    fn stored_session(&self) -> Result<Session> {
        self.session
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ApiError::InvalidResponse("mock has no session".to_string()).into())
    }
}

#[async_trait]
impl AuthApi for MockCourseClient {
    async fn captcha(&self) -> Result<Captcha> {
        if let Some(err) = self.take_error() {
            return Err(err.into());
        }
        Ok(Captcha {
            id: "cap-1".to_string(),
            question: "3 + 4 = ?".to_string(),
        })
    }

    async fn login(&self, _request: &LoginRequest) -> Result<Session> {
        self.calls.lock().unwrap().login += 1;
        if let Some(err) = self.take_error() {
            return Err(err.into());
        }
        self.stored_session()
    }

    async fn refresh(&self, _refresh_token: &str) -> Result<Session> {
        self.calls.lock().unwrap().refresh += 1;
        let delay = *self.refresh_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(err) = self.take_error() {
            return Err(err.into());
        }
        self.stored_session()
    }

    async fn logout(&self) -> Result<()> {
        self.calls.lock().unwrap().logout += 1;
        if let Some(err) = self.take_error() {
            return Err(err.into());
        }
        Ok(())
    }

    async fn profile(&self) -> Result<User> {
        self.calls.lock().unwrap().profile += 1;
        if let Some(err) = self.take_error() {
            return Err(err.into());
        }
        Ok(self.stored_session()?.user)
    }
}

#[async_trait]
impl CatalogApi for MockCourseClient {
    async fn list_courses(&self, _pagination: Option<&PaginationParams>) -> Result<Page<Course>> {
        self.calls.lock().unwrap().list_courses += 1;
        if let Some(err) = self.take_error() {
            return Err(err.into());
        }
        Ok(Page::of(self.courses.lock().unwrap().clone()))
    }

    async fn get_course(&self, course_id: &str) -> Result<Course> {
        if let Some(err) = self.take_error() {
            return Err(err.into());
        }
        self.courses
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == course_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(course_id.to_string()).into())
    }

    async fn list_chapters(&self, _course_id: &str) -> Result<Vec<Chapter>> {
        Ok(self.chapters.lock().unwrap().clone())
    }

    async fn list_sections(&self, _chapter_id: &str) -> Result<Vec<Section>> {
        Ok(self.sections.lock().unwrap().clone())
    }

    async fn list_favorites(
        &self,
        _pagination: Option<&PaginationParams>,
    ) -> Result<Page<Favorite>> {
        Ok(Page::of(self.favorites.lock().unwrap().clone()))
    }

    async fn list_question_banks(
        &self,
        _pagination: Option<&PaginationParams>,
    ) -> Result<Page<QuestionBank>> {
        Ok(Page::of(self.question_banks.lock().unwrap().clone()))
    }

    async fn list_tags(&self) -> Result<Vec<Tag>> {
        self.calls.lock().unwrap().list_tags += 1;
        if let Some(err) = self.take_error() {
            return Err(err.into());
        }
        Ok(self.tags.lock().unwrap().clone())
    }

    async fn create_tag(&self, name: &str) -> Result<Tag> {
        self.calls.lock().unwrap().create_tag += 1;
        if let Some(err) = self.take_error() {
            return Err(err.into());
        }
        let mut tags = self.tags.lock().unwrap();
        let id = tags.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let tag = Tag {
            id,
            name: name.to_string(),
        };
        tags.push(tag.clone());
        Ok(tag)
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        if let Some(err) = self.take_error() {
            return Err(err.into());
        }
        Ok(self.categories.lock().unwrap().clone())
    }
}

#[async_trait]
impl AdminApi for MockCourseClient {
    async fn list_users(
        &self,
        _pagination: Option<&PaginationParams>,
    ) -> Result<Page<UserAccount>> {
        Ok(Page::of(self.users.lock().unwrap().clone()))
    }

    async fn list_roles(&self) -> Result<Vec<Role>> {
        Ok(self.roles.lock().unwrap().clone())
    }

    async fn list_permissions(&self) -> Result<Vec<Permission>> {
        Ok(self.permissions.lock().unwrap().clone())
    }

    async fn list_orders(&self, _pagination: Option<&PaginationParams>) -> Result<Page<Order>> {
        Ok(Page::of(self.orders.lock().unwrap().clone()))
    }

    async fn list_media(&self, _pagination: Option<&PaginationParams>) -> Result<Page<MediaAsset>> {
        Ok(Page::of(self.media.lock().unwrap().clone()))
    }

    async fn storage_quota(&self) -> Result<StorageQuota> {
        self.quota
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ApiError::InvalidResponse("mock has no quota".to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_configured_tags() {
        let mock = MockCourseClient::new().with_tags(vec![Tag {
            id: 1,
            name: "rust".to_string(),
        }]);

        let tags = mock.list_tags().await.unwrap();
        assert_eq!(tags.len(), 1);
        assert_eq!(mock.list_tags_calls(), 1);
    }

    #[tokio::test]
    async fn test_mock_error_consumed_on_first_use() {
        let mock = MockCourseClient::new()
            .with_tags(vec![])
            .with_error(ApiError::Forbidden);

        assert!(mock.list_tags().await.is_err());
        assert!(mock.list_tags().await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_create_tag_assigns_ids() {
        let mock = MockCourseClient::new();
        let first = mock.create_tag("sql").await.unwrap();
        let second = mock.create_tag("nosql").await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(mock.list_tags().await.unwrap().len(), 2);
    }
}
