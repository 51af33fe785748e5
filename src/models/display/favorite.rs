//! Favorite display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Favorite;
use crate::output::formatters::format_timestamp;

/// Favorite row
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct FavoriteDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "COURSE")]
    pub course: String,

    #[tabled(rename = "SAVED")]
    pub saved: String,
}

impl From<Favorite> for FavoriteDisplay {
    fn from(favorite: Favorite) -> Self {
        Self {
            id: favorite.id,
            course: favorite.course_title.unwrap_or(favorite.course_id),
            saved: format_timestamp(favorite.created_at.as_deref()),
        }
    }
}
