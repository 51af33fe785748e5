//! Per-endpoint rate limiting for the CourseHub API
//!
//! Reactive: a limiter only starts pacing requests after the API has
//! answered 429 for its category. Pacing is applied before send; failed
//! requests are never retried here.

use std::collections::HashMap;
use std::num::NonZeroU32;
use std::sync::atomic::{AtomicBool, Ordering};

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;
use tokio::sync::RwLock;

/// Categories of API endpoints with their rate limits.
///
/// CourseHub throttles the auth endpoints far harder than catalog reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointCategory {
    /// /auth/login, /auth/refresh, /auth/captcha - 10/min
    Auth,
    /// /courses and /chapters reads - 30 req/sec
    Catalog,
    /// /media and /storage reads - 10 req/sec
    Media,
    /// Everything else - 6 req/sec
    Default,
}

impl EndpointCategory {
    /// All endpoint categories for initialization.
    pub const ALL: [EndpointCategory; 4] = [
        EndpointCategory::Auth,
        EndpointCategory::Catalog,
        EndpointCategory::Media,
        EndpointCategory::Default,
    ];

    /// Categorize a request based on path and method.
    ///
    /// The path is the API path without the base URL (e.g. "/courses").
    pub fn from_request(path: &str, method: &reqwest::Method) -> Self {
        let path = path.strip_prefix("/api").unwrap_or(path);

        if path.starts_with("/auth/login")
            || path.starts_with("/auth/refresh")
            || path.starts_with("/auth/captcha")
        {
            return EndpointCategory::Auth;
        }

        if (path.starts_with("/courses") || path.starts_with("/chapters"))
            && *method == reqwest::Method::GET
        {
            return EndpointCategory::Catalog;
        }

        if (path.starts_with("/media") || path.starts_with("/storage"))
            && *method == reqwest::Method::GET
        {
            return EndpointCategory::Media;
        }

        EndpointCategory::Default
    }

    /// Rate limit for this category (requests per second).
    pub fn rate_limit(&self) -> f64 {
        match self {
            EndpointCategory::Auth => 0.167, // 10 per minute
            EndpointCategory::Catalog => 30.0,
            EndpointCategory::Media => 10.0,
            EndpointCategory::Default => 6.0,
        }
    }
}

/// Rate limiter state for a single endpoint category.
pub struct EndpointRateLimiter {
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    active: AtomicBool,
    category: EndpointCategory,
}

impl EndpointRateLimiter {
    pub fn new(category: EndpointCategory) -> Self {
        let rate = category.rate_limit();

        // Sub-1 rates use per-minute quotas
        let quota = if rate >= 1.0 {
            Quota::per_second(NonZeroU32::new(rate as u32).unwrap_or(NonZeroU32::MIN))
        } else {
            let per_min = (rate * 60.0).round() as u32;
            Quota::per_minute(NonZeroU32::new(per_min).unwrap_or(NonZeroU32::MIN))
        };

        Self {
            limiter: RateLimiter::direct(quota),
            active: AtomicBool::new(false),
            category,
        }
    }

    /// Activate rate limiting for this category.
    pub fn activate(&self) {
        let was_active = self.active.swap(true, Ordering::SeqCst);
        if !was_active {
            debug!("Rate limiting activated for {:?}", self.category);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Wait for permission if rate limiting is active.
    pub async fn wait_if_active(&self) {
        if self.is_active() {
            debug!("Waiting for rate limiter {:?}", self.category);
            self.limiter.until_ready().await;
        }
    }
}

/// Collection of rate limiters for all endpoint categories.
pub struct RateLimiterSet {
    limiters: RwLock<HashMap<EndpointCategory, EndpointRateLimiter>>,
}

impl Default for RateLimiterSet {
    fn default() -> Self {
        Self::new()
    }
}

impl RateLimiterSet {
    pub fn new() -> Self {
        let mut map = HashMap::new();
        for category in EndpointCategory::ALL {
            map.insert(category, EndpointRateLimiter::new(category));
        }

        Self {
            limiters: RwLock::new(map),
        }
    }

    /// Wait for rate limit permission for a category (if active).
    pub async fn wait_for(&self, category: EndpointCategory) {
        let limiters = self.limiters.read().await;
        if let Some(limiter) = limiters.get(&category) {
            limiter.wait_if_active().await;
        }
    }

    /// Activate rate limiting for a category (called on 429).
    pub async fn activate(&self, category: EndpointCategory) {
        let limiters = self.limiters.read().await;
        if let Some(limiter) = limiters.get(&category) {
            limiter.activate();
        }
    }
}
