//! Reference-data display models

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{Category, Tag};

/// Tag row
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TagDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,
}

impl From<Tag> for TagDisplay {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id.to_string(),
            name: tag.name,
        }
    }
}

/// Category row
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CategoryDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "PARENT")]
    pub parent: String,
}

impl From<Category> for CategoryDisplay {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name,
            parent: category
                .parent_id
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}
