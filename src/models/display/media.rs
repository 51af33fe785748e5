//! Media display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::MediaAsset;
use crate::output::formatters::format_bytes;

/// Media asset row
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct MediaDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "FILENAME")]
    pub filename: String,

    #[tabled(rename = "TYPE")]
    pub content_type: String,

    #[tabled(rename = "SIZE")]
    pub size: String,
}

impl From<MediaAsset> for MediaDisplay {
    fn from(asset: MediaAsset) -> Self {
        Self {
            id: asset.id,
            filename: asset.filename,
            content_type: asset.content_type.unwrap_or_else(|| "-".to_string()),
            size: asset
                .size_bytes
                .map(format_bytes)
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_display_formats_size() {
        let asset = MediaAsset {
            id: "m-1".to_string(),
            filename: "lecture.mp4".to_string(),
            content_type: Some("video/mp4".to_string()),
            size_bytes: Some(1536),
            url: None,
        };

        let display = MediaDisplay::from(asset);
        assert_eq!(display.size, "1.5 KiB");
    }
}
