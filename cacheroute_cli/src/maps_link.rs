use cacheroute_core::geopoint::GeoPoint;

pub const GOOGLE_MAPS_DIR_URL: &str = "https://www.google.com/maps/dir/";

/// Builds a Google Maps directions link: origin, every intermediate path
/// point, then the destination, each as `lat,lon` joined by `/`. An empty
/// path has no destination, so no link.
pub fn google_maps_dir_url(start: &GeoPoint, path: &[GeoPoint]) -> Option<String> {
    let (destination, intermediates) = path.split_last()?;

    let mut url = String::from(GOOGLE_MAPS_DIR_URL);
    url.push_str(&format_point(start));
    for point in intermediates {
        url.push('/');
        url.push_str(&format_point(point));
    }
    url.push('/');
    url.push_str(&format_point(destination));

    Some(url)
}

fn format_point(point: &GeoPoint) -> String {
    format!("{},{}", point.lat, point.lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_has_no_link() {
        assert_eq!(google_maps_dir_url(&GeoPoint::new(1.0, 1.0), &[]), None);
    }

    #[test]
    fn single_point_path_links_origin_to_destination() {
        let url = google_maps_dir_url(&GeoPoint::new(1.0, 1.5), &[GeoPoint::new(2.0, 2.5)]);
        assert_eq!(
            url.as_deref(),
            Some("https://www.google.com/maps/dir/1,1.5/2,2.5")
        );
    }

    #[test]
    fn intermediates_appear_in_path_order() {
        let path = vec![
            GeoPoint::new(2.0, 2.0),
            GeoPoint::new(3.0, 3.0),
            GeoPoint::new(4.0, 4.0),
        ];
        let url = google_maps_dir_url(&GeoPoint::new(1.0, 1.0), &path);
        assert_eq!(
            url.as_deref(),
            Some("https://www.google.com/maps/dir/1,1/2,2/3,3/4,4")
        );
    }
}
