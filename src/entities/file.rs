use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::photo::Photo;

#[cfg(feature = "postgres")]
use sqlx::FromRow;

/// A stored media file. Lookups by id or hash attach the owning photo.
#[cfg_attr(feature = "postgres", derive(FromRow))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    pub id: Uuid,
    pub photo_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub file_primary: bool,
    pub file_missing: bool,
    pub file_duplicate: bool,
    pub file_portrait: bool,
    pub file_name: String,
    pub file_hash: String,
    pub file_perceptual_hash: String,
    pub file_type: String,
    pub file_mime: String,
    pub file_width: i32,
    pub file_height: i32,
    pub file_orientation: i32,
    pub file_aspect_ratio: f64,
    pub file_main_color: String,
    pub file_colors: String,
    pub file_luminance: String,
    pub file_chroma: i32,
    #[cfg_attr(feature = "postgres", sqlx(skip))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<Photo>,
}

impl File {
    pub const COLUMNS: &'static str = "files.id, files.photo_id, files.created_at, \
        files.updated_at, files.deleted_at, files.file_primary, files.file_missing, \
        files.file_duplicate, files.file_portrait, files.file_name, files.file_hash, \
        files.file_perceptual_hash, files.file_type, files.file_mime, files.file_width, \
        files.file_height, files.file_orientation, files.file_aspect_ratio, \
        files.file_main_color, files.file_colors, files.file_luminance, files.file_chroma";

    pub fn with_photo(mut self, photo: Photo) -> Self {
        self.photo = Some(photo);
        self
    }
}
