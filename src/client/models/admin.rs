//! Administration models: accounts, commerce, media

use serde::{Deserialize, Serialize};

/// Platform user account as seen by administrators
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: String,
    pub username: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Role codes assigned to the account
    #[serde(default)]
    pub roles: Vec<String>,

    /// Account status (ACTIVE, DISABLED)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Role definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: i64,
    pub code: String,
    pub name: String,

    #[serde(default)]
    pub permission_ids: Vec<i64>,
}

/// Permission node; permissions form a tree in the admin console
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    pub id: i64,
    pub code: String,
    pub name: String,

    #[serde(default)]
    pub children: Vec<Permission>,
}

/// Course purchase order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,

    /// Human-facing order number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_no: Option<String>,

    pub course_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_title: Option<String>,

    /// Paid amount, as a decimal string from the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// Order status (PENDING, PAID, REFUNDED, CANCELLED)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Uploaded media asset
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAsset {
    pub id: String,
    pub filename: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Media storage quota for the signed-in institution
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageQuota {
    pub used_bytes: u64,
    pub total_bytes: u64,
}

impl StorageQuota {
    /// Used fraction in percent, saturating at 100
    pub fn used_percent(&self) -> u32 {
        if self.total_bytes == 0 {
            return 100;
        }
        let pct = (self.used_bytes as f64 / self.total_bytes as f64) * 100.0;
        (pct.round() as u32).min(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_tree_deserializes() {
        let json = r#"{
            "id": 1,
            "code": "course",
            "name": "Course management",
            "children": [
                {"id": 2, "code": "course:create", "name": "Create course"},
                {"id": 3, "code": "course:publish", "name": "Publish course"}
            ]
        }"#;
        let perm: Permission = serde_json::from_str(json).unwrap();

        assert_eq!(perm.children.len(), 2);
        assert_eq!(perm.children[0].code, "course:create");
        assert!(perm.children[0].children.is_empty());
    }

    #[test]
    fn test_order_camel_case_wire_names() {
        let json = r#"{
            "id": "o-1",
            "orderNo": "20250115-0001",
            "courseId": "c-1",
            "courseTitle": "Rust 101",
            "amount": "49.00",
            "status": "PAID",
            "createdAt": "2025-01-15T10:00:00Z"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();

        assert_eq!(order.order_no.as_deref(), Some("20250115-0001"));
        assert_eq!(order.status.as_deref(), Some("PAID"));
    }

    #[test]
    fn test_quota_used_percent() {
        let quota = StorageQuota {
            used_bytes: 25,
            total_bytes: 100,
        };
        assert_eq!(quota.used_percent(), 25);

        let full = StorageQuota {
            used_bytes: 200,
            total_bytes: 100,
        };
        assert_eq!(full.used_percent(), 100);

        let empty = StorageQuota {
            used_bytes: 0,
            total_bytes: 0,
        };
        assert_eq!(empty.used_percent(), 100);
    }
}
