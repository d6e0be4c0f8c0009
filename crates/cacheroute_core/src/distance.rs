use serde::{Deserialize, Serialize};

use crate::geopoint::GeoPoint;

/// The two ranking metrics found in the wild for nearest-neighbor selection.
/// The engine orders with `Haversine`; `Euclidean` works on raw degrees and
/// can rank differently near the poles or over long spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceMethod {
    Haversine,
    Euclidean,
}

impl DistanceMethod {
    pub fn measure(&self, a: &GeoPoint, b: &GeoPoint) -> f64 {
        match self {
            DistanceMethod::Haversine => a.haversine_distance(b),
            DistanceMethod::Euclidean => a.euclidean_distance(b),
        }
    }
}
