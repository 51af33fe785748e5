//! Account display models

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{Permission, Role, UserAccount};

/// User account row
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct UserDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "USERNAME")]
    pub username: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "ROLES")]
    pub roles: String,

    #[tabled(rename = "STATUS")]
    pub status: String,
}

impl From<UserAccount> for UserDisplay {
    fn from(user: UserAccount) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email.unwrap_or_else(|| "-".to_string()),
            roles: if user.roles.is_empty() {
                "-".to_string()
            } else {
                user.roles.join(", ")
            },
            status: user.status.unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Role row
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RoleDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "CODE")]
    pub code: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "PERMISSIONS")]
    pub permissions: String,
}

impl From<Role> for RoleDisplay {
    fn from(role: Role) -> Self {
        Self {
            id: role.id.to_string(),
            code: role.code,
            name: role.name,
            permissions: role.permission_ids.len().to_string(),
        }
    }
}

/// Permission row, indented by depth in the tree
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PermissionDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "CODE")]
    pub code: String,

    #[tabled(rename = "NAME")]
    pub name: String,
}

/// Flatten the permission tree into rows, indenting children.
pub fn flatten_permissions(permissions: Vec<Permission>) -> Vec<PermissionDisplay> {
    let mut rows = Vec::new();
    for permission in permissions {
        push_permission(&mut rows, permission, 0);
    }
    rows
}

fn push_permission(rows: &mut Vec<PermissionDisplay>, permission: Permission, depth: usize) {
    rows.push(PermissionDisplay {
        id: permission.id.to_string(),
        code: permission.code,
        name: format!("{}{}", "  ".repeat(depth), permission.name),
    });
    for child in permission.children {
        push_permission(rows, child, depth + 1);
    }
}
