//! In-memory reference-data cache
//!
//! A TTL gate over tag and category lookups: callers fetch the full
//! list once, store it here, and read by id afterwards. There is no
//! fetch-on-miss and no capacity bound; invalidation is wholesale, on
//! explicit clear, after mutations, or when the fixed TTL elapses.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::client::models::{Category, Tag};

/// Fixed time-to-live for reference data
pub const REFERENCE_TTL: Duration = Duration::from_secs(5 * 60);

struct Shelf<T> {
    by_id: HashMap<i64, T>,
    fetched_at: Instant,
}

impl<T: Clone> Shelf<T> {
    fn new(entries: impl IntoIterator<Item = (i64, T)>, now: Instant) -> Self {
        Self {
            by_id: entries.into_iter().collect(),
            fetched_at: now,
        }
    }

    fn get(&self, id: i64) -> Option<T> {
        self.by_id.get(&id).cloned()
    }

    fn is_valid_at(&self, now: Instant) -> bool {
        now.duration_since(self.fetched_at) < REFERENCE_TTL
    }
}

/// Reference-data lookups keyed by id, timestamped at fetch
#[derive(Default)]
pub struct RefDataCache {
    tags: Mutex<Option<Shelf<Tag>>>,
    categories: Mutex<Option<Shelf<Category>>>,
}

impl RefDataCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the tag lookup and timestamp the fetch. An empty list does
    /// not create a cache: nothing was fetched worth gating on.
    pub fn set_tags(&self, tags: Vec<Tag>) {
        self.set_tags_at(tags, Instant::now());
    }

    fn set_tags_at(&self, tags: Vec<Tag>, now: Instant) {
        if let Ok(mut shelf) = self.tags.lock() {
            *shelf = if tags.is_empty() {
                None
            } else {
                Some(Shelf::new(tags.into_iter().map(|t| (t.id, t)), now))
            };
        }
    }

    pub fn tag_by_id(&self, id: i64) -> Option<Tag> {
        self.tags
            .lock()
            .ok()
            .and_then(|shelf| shelf.as_ref().and_then(|s| s.get(id)))
    }

    /// Lookup several ids at once; unknown ids yield `None` in place.
    pub fn tags_by_ids(&self, ids: &[i64]) -> Vec<Option<Tag>> {
        ids.iter().map(|id| self.tag_by_id(*id)).collect()
    }

    pub fn is_tags_valid(&self) -> bool {
        self.is_tags_valid_at(Instant::now())
    }

    fn is_tags_valid_at(&self, now: Instant) -> bool {
        self.tags
            .lock()
            .ok()
            .map(|shelf| shelf.as_ref().is_some_and(|s| s.is_valid_at(now)))
            .unwrap_or(false)
    }

    pub fn clear_tags(&self) {
        if let Ok(mut shelf) = self.tags.lock() {
            *shelf = None;
        }
    }

    /// Store the category lookup and timestamp the fetch.
    pub fn set_categories(&self, categories: Vec<Category>) {
        self.set_categories_at(categories, Instant::now());
    }

    fn set_categories_at(&self, categories: Vec<Category>, now: Instant) {
        if let Ok(mut shelf) = self.categories.lock() {
            *shelf = if categories.is_empty() {
                None
            } else {
                Some(Shelf::new(categories.into_iter().map(|c| (c.id, c)), now))
            };
        }
    }

    pub fn category_by_id(&self, id: i64) -> Option<Category> {
        self.categories
            .lock()
            .ok()
            .and_then(|shelf| shelf.as_ref().and_then(|s| s.get(id)))
    }

    pub fn is_categories_valid(&self) -> bool {
        self.is_categories_valid_at(Instant::now())
    }

    fn is_categories_valid_at(&self, now: Instant) -> bool {
        self.categories
            .lock()
            .ok()
            .map(|shelf| shelf.as_ref().is_some_and(|s| s.is_valid_at(now)))
            .unwrap_or(false)
    }

    #[allow(dead_code)]
    pub fn clear_categories(&self) {
        if let Ok(mut shelf) = self.categories.lock() {
            *shelf = None;
        }
    }
}
