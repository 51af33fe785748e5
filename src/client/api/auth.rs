//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{Captcha, LoginRequest, Session, User};
use crate::error::Result;

/// Authentication operations for the CourseHub API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Fetch a captcha challenge for the login form
    async fn captcha(&self) -> Result<Captcha>;

    /// Exchange credentials and captcha answer for a session
    async fn login(&self, request: &LoginRequest) -> Result<Session>;

    /// Exchange a refresh token for a new session
    async fn refresh(&self, refresh_token: &str) -> Result<Session>;

    /// Invalidate the session server-side
    async fn logout(&self) -> Result<()>;

    /// Fetch the signed-in user's profile
    async fn profile(&self) -> Result<User>;
}
