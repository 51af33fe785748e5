//! Route guard for protected platform paths
//!
//! Pure decision over (path, token presence): protected paths without a
//! stored token are redirected to the login path with the original path
//! preserved in the `redirect` query parameter. Token presence is the
//! only check made here; validity is enforced server-side.

use reqwest::Url;

/// Login path used as the redirect target
pub const LOGIN_PATH: &str = "/auth/login";

/// API path prefixes commands map onto, consulted by the guard
pub mod routes {
    pub const COURSES: &str = "/courses";
    pub const CHAPTERS: &str = "/chapters";
    pub const ORDERS: &str = "/orders";
    pub const USERS: &str = "/users";
    pub const ROLES: &str = "/roles";
    pub const PERMISSIONS: &str = "/permissions";
    pub const MEDIA: &str = "/media";
    pub const STORAGE: &str = "/storage";
    pub const FAVORITES: &str = "/favorites";
    pub const QUESTION_BANKS: &str = "/question-banks";
    pub const TAGS: &str = "/tags";
    pub const CATEGORIES: &str = "/categories";
    pub const PROFILE: &str = "/auth/profile";
}

/// Outcome of a guard check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Request may proceed unmodified
    Allow,
    /// Request must be redirected to `location` before proceeding
    Redirect { location: String },
}

/// Path-prefix-based protection list
#[derive(Debug, Clone)]
pub struct RouteGuard {
    protected: Vec<&'static str>,
    login_path: &'static str,
}

impl Default for RouteGuard {
    fn default() -> Self {
        // Catalog browsing (/courses, /chapters) and the auth endpoints
        // themselves are public; everything else requires a session.
        Self {
            protected: vec![
                "/dashboard",
                routes::ORDERS,
                routes::USERS,
                routes::ROLES,
                routes::PERMISSIONS,
                routes::MEDIA,
                routes::STORAGE,
                routes::FAVORITES,
                routes::QUESTION_BANKS,
                routes::TAGS,
                routes::CATEGORIES,
                routes::PROFILE,
            ],
            login_path: LOGIN_PATH,
        }
    }
}

impl RouteGuard {
    /// Decide whether a request to `path` may proceed given token presence.
    pub fn check(&self, path: &str, has_token: bool) -> RouteDecision {
        if has_token || !self.is_protected(path) {
            return RouteDecision::Allow;
        }

        RouteDecision::Redirect {
            location: self.redirect_location(path),
        }
    }

    /// Whether `path` falls under a protected prefix
    pub fn is_protected(&self, path: &str) -> bool {
        self.protected.iter().any(|prefix| path.starts_with(prefix))
    }

    /// Build the login redirect, preserving the original path as a query
    /// parameter.
    fn redirect_location(&self, from: &str) -> String {
        let base = format!("http://guard.invalid{}", self.login_path);
        match Url::parse_with_params(&base, &[("redirect", from)]) {
            Ok(url) => match url.query() {
                Some(query) => format!("{}?{}", url.path(), query),
                None => url.path().to_string(),
            },
            Err(_) => self.login_path.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn redirect_target(decision: RouteDecision) -> String {
        match decision {
            RouteDecision::Redirect { location } => location,
            RouteDecision::Allow => panic!("expected redirect"),
        }
    }

    #[test]
    fn test_protected_path_without_token_redirects_to_login() {
        let guard = RouteGuard::default();
        let location = redirect_target(guard.check("/orders", false));

        assert!(location.starts_with(LOGIN_PATH));
    }

    #[test]
    fn test_redirect_preserves_original_path() {
        let guard = RouteGuard::default();
        let location = redirect_target(guard.check("/orders", false));

        let url = Url::parse(&format!("http://guard.invalid{}", location)).unwrap();
        let redirect = url
            .query_pairs()
            .find(|(k, _)| k == "redirect")
            .map(|(_, v)| v.to_string());

        assert_eq!(redirect.as_deref(), Some("/orders"));
    }

    #[test]
    fn test_redirect_preserves_nested_path() {
        let guard = RouteGuard::default();
        let location = redirect_target(guard.check("/media/uploads/recent", false));

        let url = Url::parse(&format!("http://guard.invalid{}", location)).unwrap();
        let redirect = url
            .query_pairs()
            .find(|(k, _)| k == "redirect")
            .map(|(_, v)| v.to_string());

        assert_eq!(redirect.as_deref(), Some("/media/uploads/recent"));
    }

    #[test]
    fn test_protected_path_with_token_allows() {
        let guard = RouteGuard::default();
        assert_eq!(guard.check("/orders", true), RouteDecision::Allow);
        assert_eq!(guard.check("/users", true), RouteDecision::Allow);
    }

    #[test]
    fn test_public_path_never_redirects() {
        let guard = RouteGuard::default();
        assert_eq!(guard.check("/courses", false), RouteDecision::Allow);
        assert_eq!(guard.check("/courses", true), RouteDecision::Allow);
        assert_eq!(guard.check("/auth/login", false), RouteDecision::Allow);
        assert_eq!(guard.check("/", false), RouteDecision::Allow);
    }

    #[test]
    fn test_all_dashboard_prefixes_protected() {
        let guard = RouteGuard::default();
        for path in [
            "/orders",
            "/users",
            "/roles",
            "/permissions",
            "/media",
            "/storage/quota",
            "/favorites",
            "/question-banks",
            "/tags",
            "/categories",
            "/auth/profile",
        ] {
            assert!(
                matches!(guard.check(path, false), RouteDecision::Redirect { .. }),
                "{path} should be protected"
            );
        }
    }
}
