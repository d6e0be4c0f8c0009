use tracing::warn;

use cacheroute_core::geopoint::GeoPoint;
use cacheroute_core::optimize::SegmentRouter;

use crate::osrm_api::OsrmDirectionsClient;

/// The production `SegmentRouter`: one OSRM attempt per segment, and any
/// failure — network, non-2xx, empty or malformed response — degrades that
/// segment to the direct two-point line. No retries; every call is
/// independent and stateless.
pub struct SegmentClient {
    osrm: OsrmDirectionsClient,
}

impl SegmentClient {
    pub fn new(osrm: OsrmDirectionsClient) -> Self {
        Self { osrm }
    }
}

impl SegmentRouter for SegmentClient {
    async fn segment(&self, from: &GeoPoint, to: &GeoPoint) -> Vec<GeoPoint> {
        match self.osrm.fetch_path(from, to).await {
            Ok(path) => path,
            Err(err) => {
                warn!("segment routing failed, falling back to direct line: {err}");
                vec![*from, *to]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::osrm_api::OsrmDirectionsClientParams;

    #[tokio::test]
    async fn unreachable_service_falls_back_to_direct_line() {
        // Nothing listens on the discard port, so the request fails without
        // leaving the machine.
        let client = SegmentClient::new(OsrmDirectionsClient::new(OsrmDirectionsClientParams {
            osrm_url: String::from("http://127.0.0.1:9"),
        }));

        let from = GeoPoint::new(1.0, 1.0);
        let to = GeoPoint::new(2.0, 2.0);

        let path = client.segment(&from, &to).await;
        assert_eq!(path, vec![from, to]);
    }
}
