use thiserror::Error;

/// Malformed search input, rejected before any query is composed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CriteriaError {
    #[error("offset must not be negative, got {0}")]
    NegativeOffset(i64),

    #[error("latitude must be within [-90, 90], got {0}")]
    LatitudeOutOfRange(f64),

    #[error("longitude must be within [-180, 180], got {0}")]
    LongitudeOutOfRange(f64),

    #[error("chroma threshold must not be negative, got {0}")]
    NegativeChroma(i32),

    #[error("aperture bound must not be negative, got {0}")]
    NegativeAperture(f32),

    #[error("aperture minimum {min} exceeds maximum {max}")]
    ApertureRange { min: f32, max: f32 },

    #[error("date range is empty: after {after} is later than before {before}")]
    DateRange {
        after: chrono::NaiveDate,
        before: chrono::NaiveDate,
    },
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("invalid search criteria: {0}")]
    Criteria(#[from] CriteriaError),

    #[cfg(feature = "postgres")]
    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),

    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },
}

impl SearchError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
