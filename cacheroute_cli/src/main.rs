use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::geocode::GeocodeArgs;
use crate::optimize::OptimizeArgs;

mod geocode;
mod gpx_io;
mod maps_link;
mod optimize;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Order the waypoints of a GPX file and stitch a drivable route
    /// through them
    Optimize {
        #[command(flatten)]
        args: OptimizeArgs,
    },
    /// Resolve a free-form address to coordinates
    Geocode {
        #[command(flatten)]
        args: GeocodeArgs,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Optimize { args } => optimize::run(args).await?,
        Commands::Geocode { args } => geocode::run(args).await?,
    }

    Ok(())
}
