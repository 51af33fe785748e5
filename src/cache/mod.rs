//! Local caches for API responses
//!
//! Two layers: an in-memory reference-data store (tags/categories,
//! fixed 5-minute TTL) used within a single invocation, and a
//! SQLite-backed response cache that persists across invocations.

pub mod client;
pub mod key;
pub mod refdata;
pub mod storage;

use std::time::Duration;

/// Cache TTL configuration per data type
pub struct CacheTtl;

impl CacheTtl {
    // Reference data carries the platform's fixed 5-minute TTL
    pub const TAGS: Duration = Duration::from_secs(5 * 60);
    pub const CATEGORIES: Duration = Duration::from_secs(5 * 60);

    // Catalog - authors publish at any time
    pub const COURSES: Duration = Duration::from_secs(5 * 60);
    pub const COURSE_DETAIL: Duration = Duration::from_secs(10 * 60);
    pub const CHAPTERS: Duration = Duration::from_secs(10 * 60);
    pub const SECTIONS: Duration = Duration::from_secs(10 * 60);
    pub const QUESTION_BANKS: Duration = Duration::from_secs(60 * 60);

    // Per-user data changes frequently
    pub const FAVORITES: Duration = Duration::from_secs(2 * 60);
    pub const ORDERS: Duration = Duration::from_secs(2 * 60);

    // Administration data is relatively stable
    pub const USERS: Duration = Duration::from_secs(60 * 60);
    pub const ROLES: Duration = Duration::from_secs(60 * 60);
    pub const PERMISSIONS: Duration = Duration::from_secs(60 * 60);

    // Media
    pub const MEDIA: Duration = Duration::from_secs(10 * 60);
    pub const QUOTA: Duration = Duration::from_secs(60);
}

pub use client::CachedClient;
pub use key::cache_key;
pub use refdata::RefDataCache;
pub use storage::CacheStorage;
