use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "postgres")]
use sqlx::FromRow;

/// One matching photo, flattened with its primary file, camera, lens,
/// country, location and the joined labels of all its tags.
#[cfg_attr(feature = "postgres", derive(FromRow))]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultRow {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub taken_at: DateTime<Utc>,
    pub photo_title: String,
    pub photo_description: String,
    pub photo_artist: String,
    pub photo_keywords: String,
    pub photo_colors: String,
    pub photo_color: String,
    pub photo_canonical_name: String,
    pub photo_lat: f64,
    pub photo_long: f64,
    pub photo_favorite: bool,

    pub camera_id: Uuid,
    pub camera_make: String,
    pub camera_model: String,

    pub lens_id: Uuid,
    pub lens_make: String,
    pub lens_model: String,

    pub country_id: Option<String>,
    pub country_name: Option<String>,

    pub location_id: Option<Uuid>,
    pub loc_display_name: Option<String>,
    pub loc_name: Option<String>,
    pub loc_city: Option<String>,
    pub loc_postcode: Option<String>,
    pub loc_county: Option<String>,
    pub loc_state: Option<String>,
    pub loc_country: Option<String>,
    pub loc_country_code: Option<String>,
    pub loc_category: Option<String>,
    pub loc_type: Option<String>,

    pub file_id: Uuid,
    pub file_primary: bool,
    pub file_missing: bool,
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

    pub tags: String,
}

impl SearchResultRow {
    pub fn tag_labels<'a>(&'a self, delimiter: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.tags
            .split(delimiter)
            .filter(|label| !label.is_empty())
    }
}

/// A page of search rows plus the number of matches ignoring the page
/// window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub rows: Vec<SearchResultRow>,
    pub total: i64,
}

impl SearchResults {
    pub fn new(rows: Vec<SearchResultRow>, total: i64) -> Self {
        Self { rows, total }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
