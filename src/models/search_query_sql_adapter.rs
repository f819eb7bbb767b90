use sqlx::{Postgres, QueryBuilder};

use crate::entities::search_criteria::SortOrder;
use crate::models::page_window::{PageWindow, SortOrderSqlAdapter};
use crate::models::search_predicate::{Column, Predicate, PredicateValue, contains_pattern};
use crate::services::tag_aggregation::TagAggregation;

const PROJECTION: &str = "photos.id, photos.created_at, photos.updated_at, photos.taken_at, \
    photos.photo_title, photos.photo_description, photos.photo_artist, photos.photo_keywords, \
    photos.photo_colors, photos.photo_color, photos.photo_canonical_name, \
    photos.photo_lat, photos.photo_long, photos.photo_favorite, \
    cameras.id AS camera_id, cameras.camera_make, cameras.camera_model, \
    lenses.id AS lens_id, lenses.lens_make, lenses.lens_model, \
    countries.id AS country_id, countries.country_name, \
    locations.id AS location_id, locations.loc_display_name, locations.loc_name, \
    locations.loc_city, locations.loc_postcode, locations.loc_county, locations.loc_state, \
    locations.loc_country, locations.loc_country_code, locations.loc_category, locations.loc_type, \
    files.id AS file_id, files.file_primary, files.file_missing, files.file_name, \
    files.file_hash, files.file_perceptual_hash, files.file_type, files.file_mime, \
    files.file_width, files.file_height, files.file_orientation, files.file_aspect_ratio, \
    files.file_main_color, files.file_colors, files.file_luminance, files.file_chroma";

const BASE_JOINS: &str = " FROM photos \
    JOIN files ON files.photo_id = photos.id AND files.file_primary AND files.deleted_at IS NULL \
    JOIN cameras ON cameras.id = photos.camera_id \
    JOIN lenses ON lenses.id = photos.lens_id \
    LEFT JOIN countries ON countries.id = photos.country_id \
    LEFT JOIN locations ON locations.id = photos.location_id";

const TAG_JOINS: &str = " LEFT JOIN photo_tags ON photo_tags.photo_id = photos.id \
    LEFT JOIN tags ON tags.id = photo_tags.tag_id";

const BASE_FILTER: &str = " WHERE photos.deleted_at IS NULL AND NOT files.file_missing";

const GROUP_BY: &str =
    " GROUP BY photos.id, files.id, cameras.id, lenses.id, countries.id, locations.id";

const TAG_EXISTS_PREFIX: &str = "EXISTS (SELECT 1 FROM photo_tags pt \
    JOIN tags t ON t.id = pt.tag_id WHERE pt.photo_id = photos.id";

/// Options controlling how the search projection is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQueryOptions {
    pub tag_aggregation: TagAggregation,
    pub tag_delimiter: String,
}

impl Default for SearchQueryOptions {
    fn default() -> Self {
        Self {
            tag_aggregation: TagAggregation::Store,
            tag_delimiter: ",".to_string(),
        }
    }
}

/// Renders composed predicates against the photo search join.
pub struct SearchQuerySqlAdapter<'a> {
    predicates: &'a [Predicate],
    options: &'a SearchQueryOptions,
}

impl<'a> SearchQuerySqlAdapter<'a> {
    pub fn new(predicates: &'a [Predicate], options: &'a SearchQueryOptions) -> Self {
        Self {
            predicates,
            options,
        }
    }

    /// The ordered, windowed page of result rows.
    pub fn select_query(&self, order: SortOrder, window: PageWindow) -> QueryBuilder<'a, Postgres> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT ");
        builder.push(PROJECTION);

        match self.options.tag_aggregation {
            TagAggregation::Store => {
                builder.push(", COALESCE(STRING_AGG(tags.tag_label, ");
                builder.push_bind(self.options.tag_delimiter.clone());
                builder.push(" ORDER BY tags.tag_label), '') AS tags");
                builder.push(BASE_JOINS);
                builder.push(TAG_JOINS);
            }
            TagAggregation::Application => {
                builder.push(", '' AS tags");
                builder.push(BASE_JOINS);
            }
        }

        self.push_filters(&mut builder);
        builder.push(GROUP_BY);
        builder.push(" ORDER BY ");
        builder.push(SortOrderSqlAdapter::order_clause(order));
        builder.push(" LIMIT ");
        builder.push_bind(window.limit);
        builder.push(" OFFSET ");
        builder.push_bind(window.offset);

        builder
    }

    /// Counts every match of the same filters, ignoring order and window.
    pub fn count_query(&self) -> QueryBuilder<'a, Postgres> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM (SELECT photos.id");
        builder.push(BASE_JOINS);
        self.push_filters(&mut builder);
        builder.push(GROUP_BY);
        builder.push(") AS matches");

        builder
    }

    fn push_filters(&self, builder: &mut QueryBuilder<'a, Postgres>) {
        builder.push(BASE_FILTER);
        for predicate in self.predicates {
            builder.push(" AND ");
            push_predicate(builder, predicate);
        }
    }
}

/// Tag labels live behind a one-to-many join, so tag predicates are checked
/// with a correlated subquery and never narrow the outer tag aggregation.
pub fn push_predicate(builder: &mut QueryBuilder<'_, Postgres>, predicate: &Predicate) {
    match predicate {
        Predicate::AnyOf(alternatives) => {
            if alternatives.is_empty() {
                builder.push("FALSE");
                return;
            }
            builder.push("(");
            for (index, alternative) in alternatives.iter().enumerate() {
                if index > 0 {
                    builder.push(" OR ");
                }
                push_predicate(builder, alternative);
            }
            builder.push(")");
        }
        Predicate::Exists {
            column: Column::TagLabel,
        } => {
            builder.push(TAG_EXISTS_PREFIX);
            builder.push(")");
        }
        simple if simple.columns().iter().any(Column::is_tag) => {
            builder.push(TAG_EXISTS_PREFIX);
            builder.push(" AND ");
            push_condition(builder, simple);
            builder.push(")");
        }
        simple => push_condition(builder, simple),
    }
}

fn push_condition(builder: &mut QueryBuilder<'_, Postgres>, predicate: &Predicate) {
    match predicate {
        Predicate::Exists { column } => {
            builder.push(column.expression());
            builder.push(" IS NOT NULL");
        }
        Predicate::Equals { column, value } => {
            builder.push(column.expression());
            builder.push(" = ");
            push_value(builder, value);
        }
        Predicate::Substring { column, needle } => {
            builder.push("LOWER(");
            builder.push(column.expression());
            builder.push(") LIKE LOWER(");
            builder.push_bind(contains_pattern(needle));
            builder.push(") ESCAPE '\\'");
        }
        Predicate::Range {
            column,
            bound,
            value,
        } => {
            builder.push(column.expression());
            builder.push(" ");
            builder.push(bound.operator());
            builder.push(" ");
            push_value(builder, value);
        }
        Predicate::Between { column, low, high } => {
            builder.push(column.expression());
            builder.push(" BETWEEN ");
            builder.push_bind(*low);
            builder.push(" AND ");
            builder.push_bind(*high);
        }
        Predicate::AnyOf(_) => push_predicate(builder, predicate),
    }
}

fn push_value(builder: &mut QueryBuilder<'_, Postgres>, value: &PredicateValue) {
    match value {
        PredicateValue::Text(text) => builder.push_bind(text.clone()),
        PredicateValue::Bool(flag) => builder.push_bind(*flag),
        PredicateValue::Int(number) => builder.push_bind(*number),
        PredicateValue::Float(number) => builder.push_bind(*number),
        PredicateValue::Uuid(id) => builder.push_bind(*id),
        PredicateValue::Date(date) => builder.push_bind(*date),
    };
}
