use std::path::PathBuf;

use clap::Args;
use tracing::info;

use cacheroute_core::geopoint::GeoPoint;
use cacheroute_core::optimize::{RouteRequest, optimize_route};
use cacheroute_providers::nominatim_api::{NominatimClient, NominatimClientParams};
use cacheroute_providers::osrm_api::{
    OSRM_PUBLIC_API_URL, OsrmDirectionsClient, OsrmDirectionsClientParams,
};
use cacheroute_providers::segment_client::SegmentClient;

use crate::{geocode, gpx_io, maps_link};

#[derive(Args)]
pub struct OptimizeArgs {
    /// GPX file with the waypoints to visit. Without an explicit start, the
    /// file's first point becomes the start location.
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Start latitude
    #[arg(long, requires = "start_lon", allow_hyphen_values = true)]
    start_lat: Option<f64>,

    /// Start longitude
    #[arg(long, requires = "start_lat", allow_hyphen_values = true)]
    start_lon: Option<f64>,

    /// Free-form address to geocode into the start location
    #[arg(long, conflicts_with_all = ["start_lat", "start_lon"])]
    start_address: Option<String>,

    /// Output GPX file for the optimized route
    #[arg(short = 'o', long)]
    out: Option<PathBuf>,

    /// Print a Google Maps directions link for the optimized route
    #[arg(long)]
    maps_link: bool,

    /// Base URL of the OSRM instance
    #[arg(long)]
    osrm_url: Option<String>,
}

pub async fn run(args: OptimizeArgs) -> anyhow::Result<()> {
    let mut points = gpx_io::read_waypoints(&args.input)?;

    let start = if let (Some(lat), Some(lon)) = (args.start_lat, args.start_lon) {
        GeoPoint::new(lat, lon)
    } else if let Some(address) = &args.start_address {
        let nominatim = NominatimClient::new(NominatimClientParams {
            base_url: geocode::nominatim_base_url(),
        });
        nominatim.geocode(address).await?
    } else if points.is_empty() {
        anyhow::bail!(
            "no start location: {} has no points and no --start-lat/--start-lon \
             or --start-address was given",
            args.input.display()
        );
    } else {
        points.remove(0)
    };

    if points.is_empty() {
        anyhow::bail!("no waypoints to visit in {}", args.input.display());
    }

    let request = RouteRequest {
        start,
        waypoints: points,
    };
    let router = SegmentClient::new(OsrmDirectionsClient::new(OsrmDirectionsClientParams {
        osrm_url: args.osrm_url.clone().unwrap_or_else(osrm_base_url),
    }));

    let route = optimize_route(&request, &router).await?;

    info!("visiting order: {:?}", route.order);
    info!("stitched path with {} points", route.path.len());

    if let Some(out) = &args.out {
        gpx_io::write_route_gpx(out, &request.start, &route.path)?;
        info!("wrote optimized route to {}", out.display());
    }

    if args.maps_link {
        if let Some(link) = maps_link::google_maps_dir_url(&request.start, &route.path) {
            println!("{link}");
        }
    }

    Ok(())
}

fn osrm_base_url() -> String {
    std::env::var("CACHEROUTE_OSRM_URL").unwrap_or_else(|_| String::from(OSRM_PUBLIC_API_URL))
}
