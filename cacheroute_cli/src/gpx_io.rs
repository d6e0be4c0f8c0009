use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use gpx::{Gpx, GpxVersion, Metadata, Waypoint};

use cacheroute_core::geopoint::GeoPoint;

/// Collects every point of a GPX file: track-segment points first, then the
/// file's standalone waypoints, preserving document order within each group.
pub fn read_waypoints(path: &Path) -> anyhow::Result<Vec<GeoPoint>> {
    let file = File::open(path)?;
    let gpx = gpx::read(BufReader::new(file))?;

    let mut points = Vec::new();
    for track in &gpx.tracks {
        for segment in &track.segments {
            for waypoint in &segment.points {
                points.push(to_geopoint(waypoint));
            }
        }
    }
    for waypoint in &gpx.waypoints {
        points.push(to_geopoint(waypoint));
    }

    Ok(points)
}

/// Writes the start point followed by every stitched path point as named
/// waypoints of a GPX 1.1 document.
pub fn write_route_gpx(
    path: &Path,
    start: &GeoPoint,
    route_points: &[GeoPoint],
) -> anyhow::Result<()> {
    let metadata = Metadata {
        name: Some(String::from("Optimized Geocaching Route")),
        ..Metadata::default()
    };

    let mut gpx = Gpx {
        version: GpxVersion::Gpx11,
        creator: Some(String::from("cacheroute")),
        metadata: Some(metadata),
        ..Gpx::default()
    };

    for (index, point) in std::iter::once(start).chain(route_points.iter()).enumerate() {
        let mut waypoint = Waypoint::new(geo_types::Point::from(point));
        waypoint.name = Some(format!("Point {}", index + 1));
        gpx.waypoints.push(waypoint);
    }

    let file = File::create(path)?;
    gpx::write(&gpx, BufWriter::new(file))?;

    Ok(())
}

fn to_geopoint(waypoint: &Waypoint) -> GeoPoint {
    let point = waypoint.point();
    GeoPoint::new(point.y(), point.x())
}
