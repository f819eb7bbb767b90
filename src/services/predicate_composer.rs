use crate::entities::search_criteria::{SearchCriteria, TextSearchMode};
use crate::models::search_predicate::{Column, Predicate, PredicateValue, RangeBound};
use crate::services::geo_radius_filter::GeoRadiusFilter;

/// Turns a [`SearchCriteria`] into the ordered list of predicates a search
/// applies. Fields left at their empty value contribute nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PredicateComposer {
    geo: GeoRadiusFilter,
}

impl PredicateComposer {
    pub fn new(geo: GeoRadiusFilter) -> Self {
        Self { geo }
    }

    pub fn compose(&self, criteria: &SearchCriteria) -> Vec<Predicate> {
        let mut predicates = Vec::new();

        Self::push_text_search(&mut predicates, criteria.text_mode());
        Self::push_attribute_filters(&mut predicates, criteria);
        Self::push_file_flags(&mut predicates, criteria);
        Self::push_chroma(&mut predicates, criteria);
        Self::push_aperture(&mut predicates, criteria);
        Self::push_taken_range(&mut predicates, criteria);

        predicates.extend(self.geo.predicates(
            criteria.latitude,
            criteria.longitude,
            criteria.effective_distance_km(),
        ));

        predicates
    }

    fn push_text_search(predicates: &mut Vec<Predicate>, mode: TextSearchMode<'_>) {
        match mode {
            TextSearchMode::None => {}
            TextSearchMode::Location { query } => {
                predicates.push(Predicate::exists(Column::LocationId));
                if let Some(query) = query {
                    predicates.push(Predicate::substring(Column::LocationDisplayName, query));
                }
            }
            TextSearchMode::General { query } => {
                predicates.push(Predicate::AnyOf(vec![
                    Predicate::substring(Column::TagLabel, query),
                    Predicate::substring(Column::PhotoTitle, query),
                    Predicate::substring(Column::FileMainColor, query),
                ]));
            }
        }
    }

    fn push_attribute_filters(predicates: &mut Vec<Predicate>, criteria: &SearchCriteria) {
        if let Some(camera) = criteria.camera.filter(|id| !id.is_nil()) {
            predicates.push(Predicate::equals(
                Column::CameraId,
                PredicateValue::Uuid(camera),
            ));
        }

        if let Some(color) = non_empty(&criteria.color) {
            predicates.push(Predicate::equals(Column::FileMainColor, text(color)));
        }

        if criteria.favorites {
            predicates.push(Predicate::equals(
                Column::PhotoFavorite,
                PredicateValue::Bool(true),
            ));
        }

        if let Some(country) = non_empty(&criteria.country) {
            predicates.push(Predicate::equals(Column::LocationCountryCode, text(country)));
        }

        if let Some(tag) = non_empty(&criteria.tags) {
            predicates.push(Predicate::equals(Column::TagLabel, text(tag)));
        }

        if let Some(title) = non_empty(&criteria.title) {
            predicates.push(Predicate::substring(Column::PhotoTitle, title));
        }

        if let Some(description) = non_empty(&criteria.description) {
            predicates.push(Predicate::substring(Column::PhotoDescription, description));
        }

        if let Some(notes) = non_empty(&criteria.notes) {
            predicates.push(Predicate::substring(Column::PhotoNotes, notes));
        }

        if let Some(hash) = non_empty(&criteria.hash) {
            predicates.push(Predicate::equals(Column::FileHash, text(hash)));
        }
    }

    fn push_file_flags(predicates: &mut Vec<Predicate>, criteria: &SearchCriteria) {
        if criteria.duplicate {
            predicates.push(Predicate::equals(
                Column::FileDuplicate,
                PredicateValue::Bool(true),
            ));
        }

        if criteria.portrait {
            predicates.push(Predicate::equals(
                Column::FilePortrait,
                PredicateValue::Bool(true),
            ));
        }
    }

    fn push_chroma(predicates: &mut Vec<Predicate>, criteria: &SearchCriteria) {
        if criteria.mono {
            predicates.push(Predicate::equals(
                Column::FileChroma,
                PredicateValue::Int(0),
            ));
        } else if criteria.chroma > 0 {
            predicates.push(Predicate::range(
                Column::FileChroma,
                RangeBound::GreaterThan,
                PredicateValue::Int(criteria.chroma),
            ));
        }
    }

    fn push_aperture(predicates: &mut Vec<Predicate>, criteria: &SearchCriteria) {
        if criteria.aperture_min > 0.0 {
            predicates.push(Predicate::range(
                Column::PhotoAperture,
                RangeBound::AtLeast,
                PredicateValue::Float(f64::from(criteria.aperture_min)),
            ));
        }

        if criteria.aperture_max > 0.0 {
            predicates.push(Predicate::range(
                Column::PhotoAperture,
                RangeBound::AtMost,
                PredicateValue::Float(f64::from(criteria.aperture_max)),
            ));
        }
    }

    fn push_taken_range(predicates: &mut Vec<Predicate>, criteria: &SearchCriteria) {
        if let Some(after) = criteria.taken_after {
            predicates.push(Predicate::range(
                Column::TakenAt,
                RangeBound::AtLeast,
                PredicateValue::Date(after),
            ));
        }

        if let Some(before) = criteria.taken_before {
            predicates.push(Predicate::range(
                Column::TakenAt,
                RangeBound::AtMost,
                PredicateValue::Date(before),
            ));
        }
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

fn text(value: &str) -> PredicateValue {
    PredicateValue::Text(value.to_string())
}
