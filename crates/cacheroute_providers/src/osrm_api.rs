use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use cacheroute_core::geopoint::GeoPoint;

pub const OSRM_PUBLIC_API_URL: &str = "https://router.project-osrm.org";

pub const OSRM_ROUTE_API_PATH: &str = "/route/v1/driving/";

#[derive(Debug, Error)]
pub enum OsrmError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("no route between the requested points")]
    NoRoute,

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct DirectionsResponse {
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Deserialize)]
struct OsrmRoute {
    geometry: OsrmGeometry,

    /// Distance in meters
    distance: f64,

    /// Travel time in seconds
    duration: f64,
}

#[derive(Deserialize)]
struct OsrmGeometry {
    /// GeoJSON linestring, so (longitude, latitude) pairs
    #[serde(default)]
    coordinates: Vec<[f64; 2]>,
}

pub struct OsrmDirectionsClientParams {
    pub osrm_url: String,
}

pub struct OsrmDirectionsClient {
    params: OsrmDirectionsClientParams,
    client: reqwest::Client,
}

impl OsrmDirectionsClient {
    pub fn new(params: OsrmDirectionsClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    /// Fetches the full driving path between two points, reordered into
    /// (latitude, longitude) points.
    pub async fn fetch_path<P>(&self, from: &P, to: &P) -> Result<Vec<GeoPoint>, OsrmError>
    where
        for<'a> &'a P: Into<geo_types::Point>,
    {
        let from: geo_types::Point = from.into();
        let to: geo_types::Point = to.into();

        let mut url = self.params.osrm_url.clone();
        url.push_str(OSRM_ROUTE_API_PATH);
        url.push_str(&format!(
            "{},{};{},{}",
            from.x(),
            from.y(),
            to.x(),
            to.y()
        ));

        let response = self
            .client
            .get(url)
            .query(&[("overview", "full"), ("geometries", "geojson")])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(OsrmError::Api { status, message });
        }

        let body = response.text().await?;
        let directions: DirectionsResponse = serde_json::from_str(&body)?;

        extract_path(directions)
    }
}

fn extract_path(directions: DirectionsResponse) -> Result<Vec<GeoPoint>, OsrmError> {
    let route = directions
        .routes
        .into_iter()
        .next()
        .ok_or(OsrmError::NoRoute)?;

    if route.geometry.coordinates.is_empty() {
        return Err(OsrmError::NoRoute);
    }

    debug!(
        "OsrmApi: route with {} points, {:.0} m, {:.0} s",
        route.geometry.coordinates.len(),
        route.distance,
        route.duration
    );

    Ok(route
        .geometry
        .coordinates
        .iter()
        .map(|coordinate| GeoPoint::new(coordinate[1], coordinate[0]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESPONSE: &str = r#"{
        "code": "Ok",
        "routes": [
            {
                "geometry": {
                    "coordinates": [[4.34878, 50.85045], [4.35, 50.86], [4.40346, 51.21989]],
                    "type": "LineString"
                },
                "legs": [],
                "distance": 44321.4,
                "duration": 2215.9
            }
        ],
        "waypoints": []
    }"#;

    #[test]
    fn decodes_and_reorders_coordinates() {
        let directions: DirectionsResponse = serde_json::from_str(SAMPLE_RESPONSE).unwrap();
        let path = extract_path(directions).unwrap();

        assert_eq!(path.len(), 3);
        assert_eq!(path[0], GeoPoint::new(50.85045, 4.34878));
        assert_eq!(path[2], GeoPoint::new(51.21989, 4.40346));
    }

    #[test]
    fn empty_route_list_is_no_route() {
        let directions: DirectionsResponse =
            serde_json::from_str(r#"{"code": "NoRoute", "routes": []}"#).unwrap();

        assert!(matches!(extract_path(directions), Err(OsrmError::NoRoute)));
    }

    #[test]
    fn missing_routes_field_is_no_route() {
        let directions: DirectionsResponse =
            serde_json::from_str(r#"{"code": "InvalidQuery"}"#).unwrap();

        assert!(matches!(extract_path(directions), Err(OsrmError::NoRoute)));
    }

    #[test]
    fn empty_geometry_is_no_route() {
        let directions: DirectionsResponse = serde_json::from_str(
            r#"{"routes": [{"geometry": {"type": "LineString"}, "distance": 0.0, "duration": 0.0}]}"#,
        )
        .unwrap();

        assert!(matches!(extract_path(directions), Err(OsrmError::NoRoute)));
    }

    #[test]
    fn malformed_payload_fails_to_decode() {
        let result = serde_json::from_str::<DirectionsResponse>(r#"{"routes": "not-a-list"}"#);
        assert!(result.is_err());
    }
}
