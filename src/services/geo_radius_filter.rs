use crate::models::search_predicate::{Column, Predicate};

/// Approximates a circular radius search with a latitude/longitude bounding
/// box, using a fixed number of degrees per kilometer on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoRadiusFilter {
    degrees_per_km: f64,
}

impl GeoRadiusFilter {
    /// Roughly one kilometer of latitude.
    pub const DEGREES_PER_KM: f64 = 0.009;

    pub fn new(degrees_per_km: f64) -> Self {
        Self { degrees_per_km }
    }

    pub fn degrees_per_km(&self) -> f64 {
        self.degrees_per_km
    }

    pub fn bounds(&self, center: f64, distance_km: i32) -> (f64, f64) {
        let delta = self.degrees_per_km * f64::from(distance_km);
        (center - delta, center + delta)
    }

    /// A zero center component leaves that axis unconstrained.
    pub fn predicates(&self, latitude: f64, longitude: f64, distance_km: i32) -> Vec<Predicate> {
        let mut predicates = Vec::new();

        if latitude != 0.0 {
            let (low, high) = self.bounds(latitude, distance_km);
            predicates.push(Predicate::Between {
                column: Column::PhotoLatitude,
                low,
                high,
            });
        }

        if longitude != 0.0 {
            let (low, high) = self.bounds(longitude, distance_km);
            predicates.push(Predicate::Between {
                column: Column::PhotoLongitude,
                low,
                high,
            });
        }

        predicates
    }
}

impl Default for GeoRadiusFilter {
    fn default() -> Self {
        Self::new(Self::DEGREES_PER_KM)
    }
}
