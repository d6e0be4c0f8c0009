use std::future::Future;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::distance::DistanceMethod;
use crate::error::OptimizeError;
use crate::geopoint::{CoordinateError, GeoPoint};
use crate::nearest_neighbor::nearest_neighbor_order;

/// A start location plus the unordered targets to visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub start: GeoPoint,
    pub waypoints: Vec<GeoPoint>,
}

impl RouteRequest {
    pub fn validate(&self) -> Result<(), CoordinateError> {
        self.start.validate()?;
        for waypoint in &self.waypoints {
            waypoint.validate()?;
        }
        Ok(())
    }
}

/// The result of an optimization: the visiting order as indices into the
/// request's waypoint list, and the stitched point-by-point path from the
/// start through every waypoint in that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizedRoute {
    pub order: Vec<usize>,
    pub path: Vec<GeoPoint>,
}

/// Resolves the detailed path between two consecutive route points.
///
/// Implementations must always produce a usable, non-empty path whose first
/// point is (or approximates) `from` and whose last point is `to`. An
/// implementation backed by an external service absorbs every failure of
/// that service by degrading to the direct line `[from, to]` instead of
/// returning an error.
pub trait SegmentRouter {
    fn segment(&self, from: &GeoPoint, to: &GeoPoint) -> impl Future<Output = Vec<GeoPoint>>;
}

/// Orders the waypoints with the nearest-neighbor heuristic (haversine
/// ranking) and stitches one detailed path through them.
///
/// Segments are requested strictly one at a time, in visiting order. Each
/// segment contributes all of its points except the last, which the next
/// segment re-produces as its first point; the final waypoint is appended
/// once at the end. An empty waypoint set yields `order = []` and
/// `path = []` — the path never contains a start point with nowhere to go.
pub async fn optimize_route<R: SegmentRouter>(
    request: &RouteRequest,
    router: &R,
) -> Result<OptimizedRoute, OptimizeError> {
    request.validate()?;

    if request.waypoints.is_empty() {
        return Ok(OptimizedRoute {
            order: Vec::new(),
            path: Vec::new(),
        });
    }

    let ordered = nearest_neighbor_order(
        &request.start,
        &request.waypoints,
        DistanceMethod::Haversine,
    );
    debug!("computed visiting order for {} waypoints", ordered.order.len());

    let mut path: Vec<GeoPoint> = Vec::new();
    let mut previous = request.start;

    for point in &ordered.points {
        let segment = router.segment(&previous, point).await;
        if let Some((_, head)) = segment.split_last() {
            path.extend_from_slice(head);
        }
        previous = *point;
    }

    // The last segment's endpoint was withheld above; close the path with it.
    let destination = ordered.points.last().copied().ok_or_else(|| {
        OptimizeError::Failed("visiting order is empty for a non-empty waypoint set".to_string())
    })?;
    path.push(destination);

    debug!("stitched route with {} path points", path.len());

    Ok(OptimizedRoute {
        order: ordered.order,
        path,
    })
}
