use crate::distance::DistanceMethod;
use crate::geopoint::GeoPoint;

/// A visiting order over a waypoint set: `order[k]` is the original index of
/// the k-th point to visit, and `points[k]` is that point. `order` is always
/// a permutation of `0..n`.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedWaypoints {
    pub order: Vec<usize>,
    pub points: Vec<GeoPoint>,
}

/// Greedy nearest-neighbor ordering: repeatedly move to the closest
/// not-yet-visited target. O(n²), which is fine for the waypoint counts a
/// single outing produces.
///
/// The scan over the remaining candidates runs left to right and only a
/// strictly smaller distance replaces the current best, so the
/// first-encountered point wins ties. Coincident duplicates are therefore
/// visited in their original relative order.
pub fn nearest_neighbor_order(
    start: &GeoPoint,
    targets: &[GeoPoint],
    method: DistanceMethod,
) -> OrderedWaypoints {
    let mut remaining: Vec<(usize, GeoPoint)> = targets.iter().copied().enumerate().collect();
    let mut order = Vec::with_capacity(targets.len());
    let mut points = Vec::with_capacity(targets.len());
    let mut current = *start;

    while !remaining.is_empty() {
        let mut nearest = 0;
        let mut min_distance = f64::INFINITY;

        for (slot, (_, candidate)) in remaining.iter().enumerate() {
            let distance = method.measure(&current, candidate);
            if distance < min_distance {
                min_distance = distance;
                nearest = slot;
            }
        }

        let (index, point) = remaining.remove(nearest);
        order.push(index);
        points.push(point);
        current = point;
    }

    OrderedWaypoints { order, points }
}
