//! Command execution context
//!
//! A constructed container for everything a command needs: config,
//! API client, session, and reference-data cache. Built per invocation
//! and passed down explicitly; there is no global state.

use std::sync::Arc;

use crate::cache::{CachedClient, RefDataCache};
use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::{CatalogApi, CourseClient};
use crate::config::{Config, PersistedSession};
use crate::error::{ConfigError, Error, Result};
use crate::guard::{RouteDecision, RouteGuard};
use crate::notify::{Notifier, TermNotifier};
use crate::session::{SessionManager, TokenStore};

/// Context for command execution.
///
/// Construction restores the persisted session (refreshing a stale one
/// first), runs the route guard for the command's API path, and wires
/// the client stack: raw HTTP client, session manager, caching wrapper.
pub struct CommandContext {
    /// Loaded configuration
    pub config: Config,
    /// API client with response caching
    pub client: Arc<CachedClient<CourseClient>>,
    /// Session container shared with the client's token store
    pub session: Arc<SessionManager<CourseClient>>,
    /// In-memory reference-data cache for this invocation
    pub refdata: RefDataCache,
    /// Resolved output format
    pub format: OutputFormat,
    config_path: Option<String>,
}

impl CommandContext {
    /// Build a context for a command mapped to `route`.
    ///
    /// # Errors
    /// Returns `ConfigError::LoginRequired` when the guard redirects the
    /// command's route, and any config/client construction error.
    pub async fn new(opts: &GlobalOptions, route: &str) -> Result<Self> {
        let mut config = match Config::load_at(opts.config_ref()) {
            Ok(config) => config,
            Err(Error::Config(ConfigError::NotFound)) => Config::default(),
            Err(err) => return Err(err),
        };

        if let Some(host) = opts.api_host_ref() {
            config.base_url = Some(host.to_string());
        }

        apply_color_choice(&config);

        let notifier: Arc<dyn Notifier> = Arc::new(TermNotifier);
        let tokens = TokenStore::new();
        let raw = Arc::new(CourseClient::new(
            config.api_base().to_string(),
            tokens.clone(),
            notifier,
        )?);
        let session = Arc::new(SessionManager::new(raw.clone(), tokens));

        // Restore the persisted session. A stale one is refreshed before
        // the command runs; a dead one is dropped from the config so the
        // guard sends the user back to login.
        if let Some(persisted) = config.session.clone() {
            let was_stale = config.is_session_expired();
            session.restore(persisted.token_set(), persisted.user).await;

            match session.ensure_fresh().await {
                Ok(()) => {
                    if was_stale
                        && let (Some(tokens), Some(user)) =
                            (session.tokens().await, session.user().await)
                    {
                        config.session = Some(PersistedSession::from_parts(&tokens, &user));
                        config.save_at(opts.config_ref())?;
                    }
                }
                Err(_) => {
                    config.clear_session();
                    config.save_at(opts.config_ref())?;
                }
            }
        }

        let has_token = session.tokens().await.is_some();
        if let RouteDecision::Redirect { location } = RouteGuard::default().check(route, has_token)
        {
            return Err(ConfigError::LoginRequired(location).into());
        }

        let client = Arc::new(CachedClient::new(raw, !opts.no_cache));

        let format = opts
            .format
            .or_else(|| match config.ui.format.as_deref() {
                Some("json") => Some(OutputFormat::Json),
                Some("table") => Some(OutputFormat::Table),
                _ => None,
            })
            .unwrap_or_default();

        Ok(Self {
            config,
            client,
            session,
            refdata: RefDataCache::new(),
            format,
            config_path: opts.config.clone(),
        })
    }

    /// Whether tables render without borders
    pub fn compact(&self) -> bool {
        self.config.ui.compact_tables
    }

    /// Persist the current config (e.g. after login/logout)
    pub fn save_config(&self) -> Result<()> {
        self.config.save_at(self.config_path.as_deref())
    }

    /// Make sure the tag lookup is populated and valid.
    pub async fn ensure_tags(&self) -> Result<()> {
        if !self.refdata.is_tags_valid() {
            let tags = self.client.list_tags().await?;
            self.refdata.set_tags(tags);
        }
        Ok(())
    }

    /// Make sure the category lookup is populated and valid.
    pub async fn ensure_categories(&self) -> Result<()> {
        if !self.refdata.is_categories_valid() {
            let categories = self.client.list_categories().await?;
            self.refdata.set_categories(categories);
        }
        Ok(())
    }
}

fn apply_color_choice(config: &Config) {
    use crate::config::ColorChoice;

    match config.ui.color {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        ColorChoice::Auto => {}
    }
}
