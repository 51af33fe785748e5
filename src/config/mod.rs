//! Configuration management for CourseOp
//!
//! The config file persists two independent keys: the `session` (tokens
//! plus signed-in user, restored across invocations) and the `ui`
//! preferences. Both live at `~/.courseop/config.yaml`, mode 600.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::client::models::{TokenSet, User};
use crate::error::{ConfigError, Result};

/// Production API base URL
pub const DEFAULT_API_BASE: &str = "https://api.coursehub.io/api";

/// Sessions within this many seconds of their deadline count as expired.
const EXPIRY_BUFFER_SECS: i64 = 60;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base API URL override (development/testing)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Persisted session
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<PersistedSession>,

    /// UI preferences, stored under their own key
    #[serde(default)]
    pub ui: UiPreferences,
}

/// Session tokens and user persisted between runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedSession {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
    pub user: User,
}

impl PersistedSession {
    pub fn from_parts(tokens: &TokenSet, user: &User) -> Self {
        Self {
            access_token: tokens.access_token.clone(),
            refresh_token: tokens.refresh_token.clone(),
            expires_at: tokens.expires_at,
            user: user.clone(),
        }
    }

    pub fn token_set(&self) -> TokenSet {
        TokenSet {
            access_token: self.access_token.clone(),
            refresh_token: self.refresh_token.clone(),
            expires_at: self.expires_at,
        }
    }
}

/// User-facing presentation preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Default output format (table, json)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Terminal color usage
    #[serde(default)]
    pub color: ColorChoice,

    /// Render tables without borders
    #[serde(default)]
    pub compact_tables: bool,
}

/// When to colorize output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".courseop").join("config.yaml"))
    }

    /// Resolve an optional override to a concrete path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an optional override path
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(path)?;
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to an optional override path
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        let path = Self::resolve_path(path)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // The session tokens are credentials
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Effective API base URL
    pub fn api_base(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    /// Whether a session token is stored (presence only; validity is
    /// the server's call)
    pub fn has_token(&self) -> bool {
        self.session.is_some()
    }

    /// Whether the stored session is past (or within a minute of) its
    /// deadline
    pub fn is_session_expired(&self) -> bool {
        match &self.session {
            None => true,
            Some(session) => {
                let buffer = chrono::Duration::seconds(EXPIRY_BUFFER_SECS);
                session.expires_at - buffer < Utc::now()
            }
        }
    }

    pub fn clear_session(&mut self) {
        self.session = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "u-1".to_string(),
            username: "alice".to_string(),
            roles: vec!["ROLE_TEACHER".to_string()],
        }
    }

    fn session_expiring_at(expires_at: DateTime<Utc>) -> PersistedSession {
        PersistedSession {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            expires_at,
            user: user(),
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.base_url.is_none());
        assert!(config.session.is_none());
        assert!(!config.has_token());
        assert_eq!(config.api_base(), DEFAULT_API_BASE);
        assert_eq!(config.ui.color, ColorChoice::Auto);
    }

    #[test]
    fn test_session_expiry() {
        let mut config = Config::default();

        // No session counts as expired
        assert!(config.is_session_expired());

        config.session = Some(session_expiring_at(Utc::now() - chrono::Duration::hours(1)));
        assert!(config.is_session_expired());

        config.session = Some(session_expiring_at(Utc::now() + chrono::Duration::hours(1)));
        assert!(!config.is_session_expired());

        // Within the one-minute buffer
        config.session = Some(session_expiring_at(
            Utc::now() + chrono::Duration::seconds(30),
        ));
        assert!(config.is_session_expired());
    }

    #[test]
    fn test_clear_session() {
        let mut config = Config::default();
        config.session = Some(session_expiring_at(Utc::now() + chrono::Duration::hours(1)));
        assert!(config.has_token());

        config.clear_session();
        assert!(!config.has_token());
    }

    #[test]
    fn test_session_and_ui_serialize_under_separate_keys() {
        let mut config = Config::default();
        config.session = Some(session_expiring_at(Utc::now() + chrono::Duration::hours(1)));
        config.ui.compact_tables = true;

        let yaml = serde_yaml::to_string(&config).unwrap();

        assert!(yaml.contains("session:"));
        assert!(yaml.contains("ui:"));
        assert!(yaml.contains("compact_tables: true"));
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let path_str = path.to_string_lossy().to_string();

        let mut config = Config::default();
        config.base_url = Some("http://localhost:9000/api".to_string());
        config.session = Some(session_expiring_at(Utc::now() + chrono::Duration::hours(1)));
        config.save_at(Some(&path_str)).unwrap();

        let loaded = Config::load_at(Some(&path_str)).unwrap();
        assert_eq!(loaded.api_base(), "http://localhost:9000/api");
        assert_eq!(loaded.session.unwrap().user.username, "alice");
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let err = Config::load_at(Some("/nonexistent/courseop/config.yaml")).unwrap_err();
        match err {
            crate::error::Error::Config(ConfigError::NotFound) => (),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_persisted_session_round_trips_token_set() {
        let tokens = TokenSet {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
            expires_at: Utc::now() + chrono::Duration::hours(2),
        };

        let persisted = PersistedSession::from_parts(&tokens, &user());
        let restored = persisted.token_set();

        assert_eq!(restored.access_token, "a");
        assert_eq!(restored.refresh_token, "r");
        assert_eq!(restored.expires_at, tokens.expires_at);
    }
}
