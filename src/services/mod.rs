pub mod geo_radius_filter;
pub mod predicate_composer;
pub mod search_service;
pub mod tag_aggregation;

pub use geo_radius_filter::GeoRadiusFilter;
pub use predicate_composer::PredicateComposer;
pub use search_service::SearchService;
pub use tag_aggregation::{TagAggregation, aggregate_tags};
