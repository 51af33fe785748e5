//! Client-side session state
//!
//! [`TokenStore`] is the shared handle the HTTP wrapper reads bearer
//! tokens from. [`SessionManager`] owns the login/refresh/logout
//! lifecycle around it. Refresh is serialized behind a single in-flight
//! guard so overlapping callers coalesce into one round trip.

use std::sync::Arc;

use chrono::Utc;
use log::{debug, warn};
use tokio::sync::{Mutex, RwLock};

use crate::client::api::AuthApi;
use crate::client::models::{LoginRequest, Session, TokenSet, User};
use crate::error::{ApiError, Result};

/// Requests made within this buffer of the token deadline refresh first.
const REFRESH_BUFFER_SECS: i64 = 60;

/// Shared handle to the current token set.
///
/// Cloned into the HTTP client at construction; at most one session
/// exists per process.
#[derive(Clone, Default)]
pub struct TokenStore {
    inner: Arc<RwLock<Option<TokenSet>>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self) -> Option<TokenSet> {
        self.inner.read().await.clone()
    }

    pub async fn access_token(&self) -> Option<String> {
        self.inner
            .read()
            .await
            .as_ref()
            .map(|t| t.access_token.clone())
    }

    pub async fn set(&self, tokens: TokenSet) {
        *self.inner.write().await = Some(tokens);
    }

    pub async fn clear(&self) {
        *self.inner.write().await = None;
    }
}

/// Session lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Anonymous,
    Loading,
    Authenticated,
}

struct SessionState {
    phase: SessionPhase,
    user: Option<User>,
}

/// Constructed session container (no global singleton); owns phase,
/// user, and the token store handed to the HTTP client.
pub struct SessionManager<C: AuthApi> {
    api: Arc<C>,
    tokens: TokenStore,
    state: RwLock<SessionState>,
    refresh_gate: Mutex<()>,
}

impl<C: AuthApi> SessionManager<C> {
    pub fn new(api: Arc<C>, tokens: TokenStore) -> Self {
        Self {
            api,
            tokens,
            state: RwLock::new(SessionState {
                phase: SessionPhase::Anonymous,
                user: None,
            }),
            refresh_gate: Mutex::new(()),
        }
    }

    #[allow(dead_code)]
    pub async fn phase(&self) -> SessionPhase {
        self.state.read().await.phase
    }

    pub async fn user(&self) -> Option<User> {
        self.state.read().await.user.clone()
    }

    pub async fn tokens(&self) -> Option<TokenSet> {
        self.tokens.get().await
    }

    /// Adopt a session persisted by an earlier run.
    pub async fn restore(&self, tokens: TokenSet, user: User) {
        self.tokens.set(tokens).await;
        let mut state = self.state.write().await;
        state.phase = SessionPhase::Authenticated;
        state.user = Some(user);
    }

    /// Exchange credentials for a session. On failure the store is left
    /// as it was: anonymous.
    pub async fn login(&self, request: &LoginRequest) -> Result<Session> {
        self.set_phase(SessionPhase::Loading).await;

        match self.api.login(request).await {
            Ok(session) => {
                self.tokens.set(session.token_set(Utc::now())).await;
                let mut state = self.state.write().await;
                state.phase = SessionPhase::Authenticated;
                state.user = Some(session.user.clone());
                Ok(session)
            }
            Err(err) => {
                self.set_phase(SessionPhase::Anonymous).await;
                Err(err)
            }
        }
    }

    /// Refresh if the access token is past (or near) its deadline.
    ///
    /// Serialized: concurrent callers queue on the in-flight guard and
    /// re-check the deadline, so only one performs the round trip.
    pub async fn ensure_fresh(&self) -> Result<()> {
        if !self.needs_refresh().await {
            return Ok(());
        }

        let _gate = self.refresh_gate.lock().await;
        if !self.needs_refresh().await {
            debug!("token already refreshed by concurrent caller");
            return Ok(());
        }

        self.do_refresh().await
    }

    /// Force a refresh round trip (still serialized).
    pub async fn refresh(&self) -> Result<()> {
        let _gate = self.refresh_gate.lock().await;
        self.do_refresh().await
    }

    /// Tear down the session. The local tokens are cleared even when the
    /// server-side call fails.
    pub async fn logout(&self) -> Result<()> {
        let server_result = self.api.logout().await;

        self.tokens.clear().await;
        {
            let mut state = self.state.write().await;
            state.phase = SessionPhase::Anonymous;
            state.user = None;
        }

        if let Err(err) = server_result {
            warn!("server-side logout failed: {err}");
        }
        Ok(())
    }

    async fn needs_refresh(&self) -> bool {
        match self.tokens.get().await {
            Some(tokens) => {
                tokens.is_expired_within(chrono::Duration::seconds(REFRESH_BUFFER_SECS))
            }
            None => false,
        }
    }

    async fn do_refresh(&self) -> Result<()> {
        let refresh_token = match self.tokens.get().await {
            Some(tokens) => tokens.refresh_token,
            None => return Err(ApiError::SessionExpired.into()),
        };

        self.set_phase(SessionPhase::Loading).await;

        match self.api.refresh(&refresh_token).await {
            Ok(session) => {
                self.tokens.set(session.token_set(Utc::now())).await;
                let mut state = self.state.write().await;
                state.phase = SessionPhase::Authenticated;
                state.user = Some(session.user);
                Ok(())
            }
            Err(err) => {
                // A dead refresh token means the session is over; the
                // caller sends the user back to login.
                self.tokens.clear().await;
                let mut state = self.state.write().await;
                state.phase = SessionPhase::Anonymous;
                state.user = None;
                Err(err)
            }
        }
    }

    async fn set_phase(&self, phase: SessionPhase) {
        self.state.write().await.phase = phase;
    }
}
