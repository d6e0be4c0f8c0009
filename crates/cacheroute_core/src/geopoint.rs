use serde::{Deserialize, Serialize};
use thiserror::Error;

const EARTH_RADIUS: f64 = 6_371_000.0;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("coordinates out of range: lat = {lat}, lon = {lon}")]
pub struct CoordinateError {
    pub lat: f64,
    pub lon: f64,
}

/// A WGS-84 coordinate pair. Plain value type, no identity beyond the
/// coordinates themselves.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Rejects NaN as well: a NaN coordinate fails both range checks.
    pub fn validate(&self) -> Result<(), CoordinateError> {
        if (MIN_LATITUDE..=MAX_LATITUDE).contains(&self.lat)
            && (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&self.lon)
        {
            Ok(())
        } else {
            Err(CoordinateError {
                lat: self.lat,
                lon: self.lon,
            })
        }
    }

    /// Great-circle distance in meters on a spherical earth.
    pub fn haversine_distance(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lon1 = self.lon.to_radians();
        let lat2 = other.lat.to_radians();
        let lon2 = other.lon.to_radians();

        let dlat = lat2 - lat1;
        let dlon = lon2 - lon1;

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS * c
    }

    /// Planar distance on raw degrees. Only meaningful as a ranking value.
    pub fn euclidean_distance(&self, other: &GeoPoint) -> f64 {
        let dlat = self.lat - other.lat;
        let dlon = self.lon - other.lon;
        (dlat * dlat + dlon * dlon).sqrt()
    }
}

impl From<&GeoPoint> for geo_types::Point {
    fn from(point: &GeoPoint) -> Self {
        geo_types::Point::new(point.lon, point.lat)
    }
}
