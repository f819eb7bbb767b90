use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::error::CriteriaError;
use crate::models::page_window::PageWindow;

/// A typed photo search request. Empty strings, `false`, zero numbers and
/// `None` all mean "not filtered on".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchCriteria {
    #[serde(alias = "q")]
    pub query: String,
    /// Restricts results to photos with a location and matches `query`
    /// against the location display name only.
    pub location: bool,
    pub camera: Option<Uuid>,
    pub color: String,
    pub favorites: bool,
    pub country: String,
    /// Exact tag label.
    pub tags: String,
    pub title: String,
    pub description: String,
    pub notes: String,
    pub hash: String,
    pub duplicate: bool,
    pub portrait: bool,
    pub mono: bool,
    pub chroma: i32,
    #[serde(alias = "fmin")]
    pub aperture_min: f32,
    #[serde(alias = "fmax")]
    pub aperture_max: f32,
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "long", alias = "lng")]
    pub longitude: f64,
    #[serde(alias = "dist")]
    pub distance_km: i32,
    #[serde(alias = "before")]
    pub taken_before: Option<NaiveDate>,
    #[serde(alias = "after")]
    pub taken_after: Option<NaiveDate>,
    pub order: SortOrder,
    pub count: i64,
    pub offset: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    Imported,
}

impl SortOrder {
    /// Unknown values fall back to `Newest`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "oldest" => Self::Oldest,
            "imported" => Self::Imported,
            _ => Self::Newest,
        }
    }
}

impl<'de> Deserialize<'de> for SortOrder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.as_deref().map(SortOrder::parse).unwrap_or_default())
    }
}

/// How the free-text query participates in the search. The location and
/// general modes never apply together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSearchMode<'a> {
    None,
    Location { query: Option<&'a str> },
    General { query: &'a str },
}

impl SearchCriteria {
    pub const DEFAULT_DISTANCE_KM: i32 = 20;
    pub const MAX_DISTANCE_KM: i32 = 1000;

    pub fn text_mode(&self) -> TextSearchMode<'_> {
        let query = Some(self.query.trim()).filter(|q| !q.is_empty());
        match (self.location, query) {
            (true, query) => TextSearchMode::Location { query },
            (false, Some(query)) => TextSearchMode::General { query },
            (false, None) => TextSearchMode::None,
        }
    }

    pub fn effective_distance_km(&self) -> i32 {
        if self.distance_km <= 0 {
            Self::DEFAULT_DISTANCE_KM
        } else {
            self.distance_km.min(Self::MAX_DISTANCE_KM)
        }
    }

    pub fn page_window(&self) -> PageWindow {
        PageWindow::from_request(self.count, self.offset)
    }

    pub fn validate(&self) -> Result<(), CriteriaError> {
        if PageWindow::honors(self.count) && self.offset < 0 {
            return Err(CriteriaError::NegativeOffset(self.offset));
        }

        if !self.latitude.is_finite() || self.latitude.abs() > 90.0 {
            return Err(CriteriaError::LatitudeOutOfRange(self.latitude));
        }

        if !self.longitude.is_finite() || self.longitude.abs() > 180.0 {
            return Err(CriteriaError::LongitudeOutOfRange(self.longitude));
        }

        if !self.mono && self.chroma < 0 {
            return Err(CriteriaError::NegativeChroma(self.chroma));
        }

        for bound in [self.aperture_min, self.aperture_max] {
            if bound.is_nan() || bound < 0.0 {
                return Err(CriteriaError::NegativeAperture(bound));
            }
        }

        if self.aperture_min > 0.0
            && self.aperture_max > 0.0
            && self.aperture_min > self.aperture_max
        {
            return Err(CriteriaError::ApertureRange {
                min: self.aperture_min,
                max: self.aperture_max,
            });
        }

        if let (Some(after), Some(before)) = (self.taken_after, self.taken_before) {
            if after > before {
                return Err(CriteriaError::DateRange { after, before });
            }
        }

        Ok(())
    }
}
