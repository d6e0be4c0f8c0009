use clap::Args;

use cacheroute_providers::nominatim_api::{
    NOMINATIM_PUBLIC_API_URL, NominatimClient, NominatimClientParams,
};

#[derive(Args)]
pub struct GeocodeArgs {
    /// Address to resolve
    address: String,

    /// Base URL of the Nominatim instance
    #[arg(long)]
    nominatim_url: Option<String>,
}

pub async fn run(args: GeocodeArgs) -> anyhow::Result<()> {
    let client = NominatimClient::new(NominatimClientParams {
        base_url: args.nominatim_url.clone().unwrap_or_else(nominatim_base_url),
    });

    let point = client.geocode(&args.address).await?;
    println!("{}, {}", point.lat, point.lon);

    Ok(())
}

pub fn nominatim_base_url() -> String {
    std::env::var("CACHEROUTE_NOMINATIM_URL")
        .unwrap_or_else(|_| String::from(NOMINATIM_PUBLIC_API_URL))
}
