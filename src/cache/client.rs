//! Caching wrapper for the CourseHub API client
//!
//! Transparent read-through caching over the API traits. Auth
//! operations are never cached. Mutations invalidate the endpoints
//! they affect.

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::cache::{CacheStorage, CacheTtl, cache_key};
use crate::client::api::{AdminApi, AuthApi, CatalogApi, CourseHubApi};
use crate::client::models::{
    Captcha, Category, Chapter, Course, Favorite, LoginRequest, MediaAsset, Order, Permission,
    QuestionBank, Role, Section, Session, StorageQuota, Tag, User, UserAccount,
};
use crate::client::pagination::{Page, PaginationParams};
use crate::error::Result;

/// Caching wrapper for any [`CourseHubApi`] implementation.
///
/// Cache can be disabled via the `enabled` flag (for `--no-cache`).
pub struct CachedClient<C> {
    inner: Arc<C>,
    cache: Option<Mutex<CacheStorage>>,
}

impl<C> CachedClient<C> {
    /// Wrap `inner`, opening the cache at the default location.
    /// A cache that fails to open degrades to pass-through.
    pub fn new(inner: Arc<C>, enabled: bool) -> Self {
        let cache = if enabled {
            CacheStorage::open().ok().map(Mutex::new)
        } else {
            None
        };
        Self { inner, cache }
    }

    #[cfg(test)]
    fn with_storage(inner: Arc<C>, storage: CacheStorage) -> Self {
        Self {
            inner,
            cache: Some(Mutex::new(storage)),
        }
    }

    /// The wrapped client (for operations outside the API traits)
    #[allow(dead_code)]
    pub fn inner(&self) -> &C {
        &self.inner
    }

    fn get_cached<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let cache = self.cache.as_ref()?;
        let guard = cache.lock().ok()?;
        guard
            .get(key)
            .ok()
            .flatten()
            .and_then(|data| serde_json::from_slice(&data).ok())
    }

    fn set_cached<T: Serialize>(&self, key: &str, data: &T, endpoint: &str, ttl: Duration) {
        if let Some(ref cache) = self.cache
            && let Ok(guard) = cache.lock()
            && let Ok(json) = serde_json::to_vec(data)
        {
            let _ = guard.put(key, &json, endpoint, ttl);
        }
    }

    fn invalidate(&self, endpoint: &str) {
        if let Some(ref cache) = self.cache
            && let Ok(guard) = cache.lock()
        {
            let _ = guard.delete_by_endpoint(endpoint);
        }
    }
}

/// Convert pagination params to cache key params
fn pagination_params(pagination: Option<&PaginationParams>) -> Vec<(&'static str, String)> {
    pagination.map(|p| p.to_query_params()).unwrap_or_default()
}

#[async_trait]
impl<C: CourseHubApi> AuthApi for CachedClient<C> {
    async fn captcha(&self) -> Result<Captcha> {
        self.inner.captcha().await
    }

    async fn login(&self, request: &LoginRequest) -> Result<Session> {
        self.inner.login(request).await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Session> {
        self.inner.refresh(refresh_token).await
    }

    async fn logout(&self) -> Result<()> {
        self.inner.logout().await
    }

    async fn profile(&self) -> Result<User> {
        self.inner.profile().await
    }
}

#[async_trait]
impl<C: CourseHubApi> CatalogApi for CachedClient<C> {
    async fn list_courses(&self, pagination: Option<&PaginationParams>) -> Result<Page<Course>> {
        let key = cache_key("list_courses", &pagination_params(pagination));
        if let Some(hit) = self.get_cached(&key) {
            return Ok(hit);
        }

        let fresh = self.inner.list_courses(pagination).await?;
        self.set_cached(&key, &fresh, "list_courses", CacheTtl::COURSES);
        Ok(fresh)
    }

    async fn get_course(&self, course_id: &str) -> Result<Course> {
        let key = cache_key("get_course", &[("id", course_id.to_string())]);
        if let Some(hit) = self.get_cached(&key) {
            return Ok(hit);
        }

        let fresh = self.inner.get_course(course_id).await?;
        self.set_cached(&key, &fresh, "get_course", CacheTtl::COURSE_DETAIL);
        Ok(fresh)
    }

    async fn list_chapters(&self, course_id: &str) -> Result<Vec<Chapter>> {
        let key = cache_key("list_chapters", &[("course", course_id.to_string())]);
        if let Some(hit) = self.get_cached(&key) {
            return Ok(hit);
        }

        let fresh = self.inner.list_chapters(course_id).await?;
        self.set_cached(&key, &fresh, "list_chapters", CacheTtl::CHAPTERS);
        Ok(fresh)
    }

    async fn list_sections(&self, chapter_id: &str) -> Result<Vec<Section>> {
        let key = cache_key("list_sections", &[("chapter", chapter_id.to_string())]);
        if let Some(hit) = self.get_cached(&key) {
            return Ok(hit);
        }

        let fresh = self.inner.list_sections(chapter_id).await?;
        self.set_cached(&key, &fresh, "list_sections", CacheTtl::SECTIONS);
        Ok(fresh)
    }

    async fn list_favorites(
        &self,
        pagination: Option<&PaginationParams>,
    ) -> Result<Page<Favorite>> {
        let key = cache_key("list_favorites", &pagination_params(pagination));
        if let Some(hit) = self.get_cached(&key) {
            return Ok(hit);
        }

        let fresh = self.inner.list_favorites(pagination).await?;
        self.set_cached(&key, &fresh, "list_favorites", CacheTtl::FAVORITES);
        Ok(fresh)
    }

    async fn list_question_banks(
        &self,
        pagination: Option<&PaginationParams>,
    ) -> Result<Page<QuestionBank>> {
        let key = cache_key("list_question_banks", &pagination_params(pagination));
        if let Some(hit) = self.get_cached(&key) {
            return Ok(hit);
        }

        let fresh = self.inner.list_question_banks(pagination).await?;
        self.set_cached(&key, &fresh, "list_question_banks", CacheTtl::QUESTION_BANKS);
        Ok(fresh)
    }

    async fn list_tags(&self) -> Result<Vec<Tag>> {
        let key = cache_key("list_tags", &[]);
        if let Some(hit) = self.get_cached(&key) {
            return Ok(hit);
        }

        let fresh = self.inner.list_tags().await?;
        self.set_cached(&key, &fresh, "list_tags", CacheTtl::TAGS);
        Ok(fresh)
    }

    async fn create_tag(&self, name: &str) -> Result<Tag> {
        let tag = self.inner.create_tag(name).await?;
        // The cached tag list no longer reflects the server
        self.invalidate("list_tags");
        Ok(tag)
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        let key = cache_key("list_categories", &[]);
        if let Some(hit) = self.get_cached(&key) {
            return Ok(hit);
        }

        let fresh = self.inner.list_categories().await?;
        self.set_cached(&key, &fresh, "list_categories", CacheTtl::CATEGORIES);
        Ok(fresh)
    }
}

#[async_trait]
impl<C: CourseHubApi> AdminApi for CachedClient<C> {
    async fn list_users(&self, pagination: Option<&PaginationParams>) -> Result<Page<UserAccount>> {
        let key = cache_key("list_users", &pagination_params(pagination));
        if let Some(hit) = self.get_cached(&key) {
            return Ok(hit);
        }

        let fresh = self.inner.list_users(pagination).await?;
        self.set_cached(&key, &fresh, "list_users", CacheTtl::USERS);
        Ok(fresh)
    }

    async fn list_roles(&self) -> Result<Vec<Role>> {
        let key = cache_key("list_roles", &[]);
        if let Some(hit) = self.get_cached(&key) {
            return Ok(hit);
        }

        let fresh = self.inner.list_roles().await?;
        self.set_cached(&key, &fresh, "list_roles", CacheTtl::ROLES);
        Ok(fresh)
    }

    async fn list_permissions(&self) -> Result<Vec<Permission>> {
        let key = cache_key("list_permissions", &[]);
        if let Some(hit) = self.get_cached(&key) {
            return Ok(hit);
        }

        let fresh = self.inner.list_permissions().await?;
        self.set_cached(&key, &fresh, "list_permissions", CacheTtl::PERMISSIONS);
        Ok(fresh)
    }

    async fn list_orders(&self, pagination: Option<&PaginationParams>) -> Result<Page<Order>> {
        let key = cache_key("list_orders", &pagination_params(pagination));
        if let Some(hit) = self.get_cached(&key) {
            return Ok(hit);
        }

        let fresh = self.inner.list_orders(pagination).await?;
        self.set_cached(&key, &fresh, "list_orders", CacheTtl::ORDERS);
        Ok(fresh)
    }

    async fn list_media(&self, pagination: Option<&PaginationParams>) -> Result<Page<MediaAsset>> {
        let key = cache_key("list_media", &pagination_params(pagination));
        if let Some(hit) = self.get_cached(&key) {
            return Ok(hit);
        }

        let fresh = self.inner.list_media(pagination).await?;
        self.set_cached(&key, &fresh, "list_media", CacheTtl::MEDIA);
        Ok(fresh)
    }

    async fn storage_quota(&self) -> Result<StorageQuota> {
        let key = cache_key("storage_quota", &[]);
        if let Some(hit) = self.get_cached(&key) {
            return Ok(hit);
        }

        let fresh = self.inner.storage_quota().await?;
        self.set_cached(&key, &fresh, "storage_quota", CacheTtl::QUOTA);
        Ok(fresh)
    }
}
