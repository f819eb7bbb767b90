use chrono::NaiveDate;
use uuid::Uuid;

/// Every column of the search join a predicate may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    CameraId,
    LocationId,
    LocationDisplayName,
    LocationCountryCode,
    TagLabel,
    PhotoTitle,
    PhotoDescription,
    PhotoNotes,
    PhotoFavorite,
    PhotoAperture,
    PhotoLatitude,
    PhotoLongitude,
    TakenAt,
    FileMainColor,
    FileHash,
    FileDuplicate,
    FilePortrait,
    FileChroma,
}

impl Column {
    /// SQL expression for the column within the search join. `TagLabel` is
    /// only reachable through a correlated subquery and has no direct
    /// expression on the outer join.
    pub fn expression(&self) -> &'static str {
        match self {
            Column::CameraId => "photos.camera_id",
            Column::LocationId => "photos.location_id",
            Column::LocationDisplayName => "locations.loc_display_name",
            Column::LocationCountryCode => "locations.loc_country_code",
            Column::TagLabel => "t.tag_label",
            Column::PhotoTitle => "photos.photo_title",
            Column::PhotoDescription => "photos.photo_description",
            Column::PhotoNotes => "photos.photo_notes",
            Column::PhotoFavorite => "photos.photo_favorite",
            Column::PhotoAperture => "photos.photo_aperture",
            Column::PhotoLatitude => "photos.photo_lat",
            Column::PhotoLongitude => "photos.photo_long",
            Column::TakenAt => "CAST(photos.taken_at AT TIME ZONE 'UTC' AS DATE)",
            Column::FileMainColor => "files.file_main_color",
            Column::FileHash => "files.file_hash",
            Column::FileDuplicate => "files.file_duplicate",
            Column::FilePortrait => "files.file_portrait",
            Column::FileChroma => "files.file_chroma",
        }
    }

    pub fn is_tag(&self) -> bool {
        matches!(self, Column::TagLabel)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PredicateValue {
    Text(String),
    Bool(bool),
    Int(i32),
    Float(f64),
    Uuid(Uuid),
    Date(NaiveDate),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBound {
    AtLeast,
    AtMost,
    GreaterThan,
}

impl RangeBound {
    pub fn operator(&self) -> &'static str {
        match self {
            RangeBound::AtLeast => ">=",
            RangeBound::AtMost => "<=",
            RangeBound::GreaterThan => ">",
        }
    }
}

/// A single filter condition. A search applies the conjunction of its
/// predicates.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Exists {
        column: Column,
    },
    Equals {
        column: Column,
        value: PredicateValue,
    },
    /// Case-insensitive containment.
    Substring {
        column: Column,
        needle: String,
    },
    Range {
        column: Column,
        bound: RangeBound,
        value: PredicateValue,
    },
    /// Inclusive on both ends.
    Between {
        column: Column,
        low: f64,
        high: f64,
    },
    AnyOf(Vec<Predicate>),
}

impl Predicate {
    pub fn exists(column: Column) -> Self {
        Predicate::Exists { column }
    }

    pub fn equals(column: Column, value: PredicateValue) -> Self {
        Predicate::Equals { column, value }
    }

    pub fn substring(column: Column, needle: impl Into<String>) -> Self {
        Predicate::Substring {
            column,
            needle: needle.into(),
        }
    }

    pub fn range(column: Column, bound: RangeBound, value: PredicateValue) -> Self {
        Predicate::Range {
            column,
            bound,
            value,
        }
    }

    /// Columns this predicate reads, including nested alternatives.
    pub fn columns(&self) -> Vec<Column> {
        match self {
            Predicate::Exists { column }
            | Predicate::Equals { column, .. }
            | Predicate::Substring { column, .. }
            | Predicate::Range { column, .. }
            | Predicate::Between { column, .. } => vec![*column],
            Predicate::AnyOf(alternatives) => {
                alternatives.iter().flat_map(Predicate::columns).collect()
            }
        }
    }
}

/// Builds a `LIKE` pattern matching `needle` anywhere, with the LIKE
/// metacharacters escaped by backslash. Case is left to the store so both
/// sides of the comparison are folded by the same rules.
pub fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
