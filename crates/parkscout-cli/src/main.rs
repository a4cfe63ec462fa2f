use clap::{Parser, Subcommand};
use parkscout_core::SearchQuery;
use parkscout_search::SearchService;

#[derive(Debug, Parser)]
#[command(name = "parkscout-cli")]
#[command(about = "Parkscout command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one aggregated parking search and print the GeoJSON result.
    Search {
        #[arg(long, allow_hyphen_values = true)]
        latitude: f64,
        #[arg(long, allow_hyphen_values = true)]
        longitude: f64,
        /// Search radius in meters.
        #[arg(long)]
        distance: Option<f64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Search {
            latitude,
            longitude,
            distance,
        } => {
            let query = SearchQuery::new(latitude, longitude, distance)?;
            let config = parkscout_core::load_app_config()?;
            let service = SearchService::new(&config)?;
            tracing::info!(
                latitude = query.latitude(),
                longitude = query.longitude(),
                distance_m = query.distance_m(),
                "running search"
            );
            let collection = service.search(&query).await;
            println!("{}", serde_json::to_string_pretty(&collection)?);
        }
    }

    Ok(())
}
