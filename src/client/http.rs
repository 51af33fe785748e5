//! CourseHub HTTP client
//!
//! Wraps reqwest with the platform's `{code, message, data}` response
//! envelope. Attaches the bearer token from the shared [`TokenStore`]
//! when one is present, classifies transport failures by status, and
//! surfaces every failure as exactly one notification before rejecting.
//! Requests are single-attempt: no retry, no deduplication, no backoff.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use super::api::{AdminApi, AuthApi, CatalogApi};
use super::models::{
    Captcha, Category, Chapter, Course, Favorite, LoginRequest, MediaAsset, Order, Permission,
    QuestionBank, Role, Section, Session, StorageQuota, Tag, User, UserAccount,
};
use super::pagination::{Page, PaginationParams};
use super::rate_limit::{EndpointCategory, RateLimiterSet};
use crate::error::{ApiError, Error, Result};
use crate::notify::{Level, Notifier};
use crate::session::TokenStore;

/// Envelope code meaning success
pub const ENVELOPE_OK: i64 = 200;

/// Response envelope every CourseHub endpoint uses
#[derive(Debug, serde::Deserialize)]
struct Envelope {
    code: i64,
    #[serde(default)]
    message: String,
    #[serde(default)]
    data: serde_json::Value,
}

/// CourseHub API client
pub struct CourseClient {
    http: HttpClient,
    base_url: String,
    tokens: TokenStore,
    notifier: Arc<dyn Notifier>,
    rate_limiters: RateLimiterSet,
}

impl CourseClient {
    /// Create a new client against `base_url`, reading bearer tokens
    /// from `tokens`.
    pub fn new(
        base_url: impl Into<String>,
        tokens: TokenStore,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            tokens,
            notifier,
            rate_limiters: RateLimiterSet::new(),
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(Method::GET, path, &[], None::<&()>).await
    }

    pub async fn get_with<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T> {
        self.request(Method::GET, path, query, None::<&()>).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        self.request(Method::POST, path, &[], Some(body)).await
    }

    #[allow(dead_code)]
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        self.request(Method::PUT, path, &[], Some(body)).await
    }

    #[allow(dead_code)]
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        self.request(Method::PATCH, path, &[], Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(Method::DELETE, path, &[], None::<&()>).await
    }

    /// Send a request; on failure emit exactly one notification before
    /// rejecting. The success path emits none.
    async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        match self.request_inner(method, path, query, body).await {
            Ok(value) => Ok(value),
            Err(err) => {
                self.notifier.notify(Level::Error, &err.to_string());
                Err(err)
            }
        }
    }

    async fn request_inner<T, B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        let category = EndpointCategory::from_request(path, &method);
        self.rate_limiters.wait_for(category).await;

        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method, &url);

        if !query.is_empty() {
            request = request.query(query);
        }

        if let Some(token) = self.tokens.access_token().await {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        match status {
            s if s.is_success() => {
                let envelope: Envelope = response.json().await.map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
                })?;

                if envelope.code != ENVELOPE_OK {
                    return Err(ApiError::Business {
                        code: envelope.code,
                        message: envelope.message,
                    }
                    .into());
                }

                serde_json::from_value(envelope.data).map_err(|e| {
                    Error::from(ApiError::InvalidResponse(format!(
                        "Failed to parse payload: {}",
                        e
                    )))
                })
            }
            StatusCode::UNAUTHORIZED => {
                // Single attempt: the stored token is dead. Drop it and
                // send the user back to login.
                self.tokens.clear().await;
                Err(ApiError::Unauthorized.into())
            }
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden.into()),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(path.to_string()).into()),
            StatusCode::TOO_MANY_REQUESTS => {
                self.rate_limiters.activate(category).await;
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(60);
                Err(ApiError::RateLimit(Duration::from_secs(retry_after)).into())
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Bad request".to_string());
                Err(ApiError::BadRequest(error_msg).into())
            }
            s if s.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", s));
                Err(ApiError::ServerError(error_msg).into())
            }
            s => Err(ApiError::InvalidResponse(format!("Unexpected status code: {}", s)).into()),
        }
    }

    fn list_query(pagination: Option<&PaginationParams>) -> Vec<(&'static str, String)> {
        pagination.map(|p| p.to_query_params()).unwrap_or_default()
    }
}

#[async_trait]
impl AuthApi for CourseClient {
    async fn captcha(&self) -> Result<Captcha> {
        self.get("/auth/captcha").await
    }

    async fn login(&self, request: &LoginRequest) -> Result<Session> {
        self.post("/auth/login", request).await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Session> {
        self.post("/auth/refresh", &json!({ "refreshToken": refresh_token }))
            .await
    }

    async fn logout(&self) -> Result<()> {
        self.delete("/auth/logout").await
    }

    async fn profile(&self) -> Result<User> {
        self.get("/auth/profile").await
    }
}

#[async_trait]
impl CatalogApi for CourseClient {
    async fn list_courses(&self, pagination: Option<&PaginationParams>) -> Result<Page<Course>> {
        self.get_with("/courses", &Self::list_query(pagination))
            .await
    }

    async fn get_course(&self, course_id: &str) -> Result<Course> {
        self.get(&format!("/courses/{}", course_id)).await
    }

    async fn list_chapters(&self, course_id: &str) -> Result<Vec<Chapter>> {
        self.get(&format!("/courses/{}/chapters", course_id)).await
    }

    async fn list_sections(&self, chapter_id: &str) -> Result<Vec<Section>> {
        self.get(&format!("/chapters/{}/sections", chapter_id))
            .await
    }

    async fn list_favorites(
        &self,
        pagination: Option<&PaginationParams>,
    ) -> Result<Page<Favorite>> {
        self.get_with("/favorites", &Self::list_query(pagination))
            .await
    }

    async fn list_question_banks(
        &self,
        pagination: Option<&PaginationParams>,
    ) -> Result<Page<QuestionBank>> {
        self.get_with("/question-banks", &Self::list_query(pagination))
            .await
    }

    async fn list_tags(&self) -> Result<Vec<Tag>> {
        self.get("/tags").await
    }

    async fn create_tag(&self, name: &str) -> Result<Tag> {
        self.post("/tags", &json!({ "name": name })).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.get("/categories").await
    }
}

#[async_trait]
impl AdminApi for CourseClient {
    async fn list_users(&self, pagination: Option<&PaginationParams>) -> Result<Page<UserAccount>> {
        self.get_with("/users", &Self::list_query(pagination)).await
    }

    async fn list_roles(&self) -> Result<Vec<Role>> {
        self.get("/roles").await
    }

    async fn list_permissions(&self) -> Result<Vec<Permission>> {
        self.get("/permissions").await
    }

    async fn list_orders(&self, pagination: Option<&PaginationParams>) -> Result<Page<Order>> {
        self.get_with("/orders", &Self::list_query(pagination))
            .await
    }

    async fn list_media(&self, pagination: Option<&PaginationParams>) -> Result<Page<MediaAsset>> {
        self.get_with("/media", &Self::list_query(pagination)).await
    }

    async fn storage_quota(&self) -> Result<StorageQuota> {
        self.get("/storage/quota").await
    }
}
