use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "postgres")]
use sqlx::FromRow;

#[cfg_attr(feature = "postgres", derive(FromRow))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub taken_at: DateTime<Utc>,
    pub photo_title: String,
    pub photo_description: String,
    pub photo_notes: String,
    pub photo_artist: String,
    pub photo_keywords: String,
    pub photo_colors: String,
    pub photo_color: String,
    pub photo_canonical_name: String,
    pub photo_lat: f64,
    pub photo_long: f64,
    pub photo_favorite: bool,
    pub photo_aperture: f32,
    pub camera_id: Uuid,
    pub lens_id: Uuid,
    pub country_id: Option<String>,
    pub location_id: Option<Uuid>,
}

impl Photo {
    pub const COLUMNS: &'static str = "photos.id, photos.created_at, photos.updated_at, \
        photos.deleted_at, photos.taken_at, photos.photo_title, photos.photo_description, \
        photos.photo_notes, photos.photo_artist, photos.photo_keywords, photos.photo_colors, \
        photos.photo_color, photos.photo_canonical_name, photos.photo_lat, photos.photo_long, \
        photos.photo_favorite, photos.photo_aperture, photos.camera_id, photos.lens_id, \
        photos.country_id, photos.location_id";
}
