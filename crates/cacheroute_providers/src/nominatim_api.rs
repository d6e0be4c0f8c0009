use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use cacheroute_core::geopoint::GeoPoint;

pub const NOMINATIM_PUBLIC_API_URL: &str = "https://nominatim.openstreetmap.org";

pub const NOMINATIM_SEARCH_API_PATH: &str = "/search";

// The public Nominatim instance rejects requests without an identifying agent.
const USER_AGENT: &str = concat!("cacheroute/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("address not found: {0}")]
    NotFound(String),

    #[error("unparsable coordinates in geocoding response: {0}")]
    Parse(#[from] std::num::ParseFloatError),

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
}

/// Nominatim serializes coordinates as strings.
#[derive(Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
}

pub struct NominatimClientParams {
    pub base_url: String,
}

pub struct NominatimClient {
    params: NominatimClientParams,
    client: reqwest::Client,
}

impl NominatimClient {
    pub fn new(params: NominatimClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    /// Resolves a free-form address to the first matching coordinate pair.
    pub async fn geocode(&self, query: &str) -> Result<GeoPoint, GeocodeError> {
        let mut url = self.params.base_url.clone();
        url.push_str(NOMINATIM_SEARCH_API_PATH);

        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(&[("format", "json"), ("q", query), ("limit", "1")])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api { status, message });
        }

        let body = response.text().await?;
        let results: Vec<SearchResult> = serde_json::from_str(&body)?;

        let point = first_result_point(results, query)?;
        debug!(
            "NominatimApi: resolved \"{}\" to {}, {}",
            query, point.lat, point.lon
        );

        Ok(point)
    }
}

fn first_result_point(
    results: Vec<SearchResult>,
    query: &str,
) -> Result<GeoPoint, GeocodeError> {
    let first = results
        .into_iter()
        .next()
        .ok_or_else(|| GeocodeError::NotFound(query.to_string()))?;

    Ok(GeoPoint::new(first.lat.parse()?, first.lon.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_first_result_coordinates() {
        let results: Vec<SearchResult> = serde_json::from_str(
            r#"[
                {"place_id": 1, "lat": "50.8465573", "lon": "4.351697", "display_name": "Brussels"},
                {"place_id": 2, "lat": "50.0", "lon": "4.0", "display_name": "Elsewhere"}
            ]"#,
        )
        .unwrap();

        let point = first_result_point(results, "Brussels").unwrap();
        assert_eq!(point, GeoPoint::new(50.8465573, 4.351697));
    }

    #[test]
    fn empty_result_list_is_not_found() {
        let result = first_result_point(Vec::new(), "nowhere, atlantis");
        assert!(matches!(result, Err(GeocodeError::NotFound(_))));
    }

    #[test]
    fn unparsable_coordinates_are_reported() {
        let results: Vec<SearchResult> =
            serde_json::from_str(r#"[{"lat": "fifty", "lon": "4.0"}]"#).unwrap();

        let result = first_result_point(results, "Brussels");
        assert!(matches!(result, Err(GeocodeError::Parse(_))));
    }
}
