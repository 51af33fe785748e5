//! Administration API trait

use async_trait::async_trait;

use crate::client::models::{MediaAsset, Order, Permission, Role, StorageQuota, UserAccount};
use crate::client::pagination::{Page, PaginationParams};
use crate::error::Result;

/// Account, commerce, and media administration operations
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// List platform user accounts
    async fn list_users(&self, pagination: Option<&PaginationParams>) -> Result<Page<UserAccount>>;

    /// List role definitions
    async fn list_roles(&self) -> Result<Vec<Role>>;

    /// List the permission tree
    async fn list_permissions(&self) -> Result<Vec<Permission>>;

    /// List course purchase orders
    async fn list_orders(&self, pagination: Option<&PaginationParams>) -> Result<Page<Order>>;

    /// List uploaded media assets
    async fn list_media(&self, pagination: Option<&PaginationParams>) -> Result<Page<MediaAsset>>;

    /// Get the institution's media storage quota
    async fn storage_quota(&self) -> Result<StorageQuota>;
}
