//! Authentication and session models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Signed-in platform user.
///
/// Role codes are advisory display data; authorization is enforced
/// server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User ID
    pub id: String,

    /// Sign-in name
    pub username: String,

    /// Role codes (e.g. `ROLE_TEACHER`)
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Captcha challenge issued before login
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Captcha {
    /// Challenge ID, echoed back with the answer
    pub id: String,

    /// Human-readable challenge text
    pub question: String,
}

/// Login request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub captcha_id: String,
    pub captcha_code: String,
}

/// Session issued by login/refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Bearer token attached to authenticated requests
    pub access_token: String,

    /// Token exchanged for a new session when the access token expires
    pub refresh_token: String,

    /// Access-token lifetime in seconds
    pub expires_in: u64,

    /// The signed-in user
    pub user: User,
}

impl Session {
    /// Convert the relative `expires_in` into an absolute token set
    /// anchored at `now`.
    pub fn token_set(&self, now: DateTime<Utc>) -> TokenSet {
        TokenSet {
            access_token: self.access_token.clone(),
            refresh_token: self.refresh_token.clone(),
            expires_at: now + chrono::Duration::seconds(self.expires_in as i64),
        }
    }
}

/// Tokens with an absolute expiry deadline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenSet {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
}

impl TokenSet {
    /// Whether the access token is past (or within `buffer` of) its
    /// deadline.
    pub fn is_expired_within(&self, buffer: chrono::Duration) -> bool {
        self.expires_at - buffer < Utc::now()
    }
}
