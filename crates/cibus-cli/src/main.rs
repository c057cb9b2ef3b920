mod search;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "cibus-cli")]
#[command(about = "Search food vendors and preview their map markers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search vendors by food item
    Search {
        /// Food item to search for (e.g. tacos)
        query: String,
        /// Vendor name to highlight on the map, as if hovered in the list
        #[arg(long)]
        highlight: Option<String>,
        /// Show every food item instead of the collapsed preview
        #[arg(long)]
        expand: bool,
        /// Print the map sources as GeoJSON after the list
        #[arg(long)]
        geojson: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();
    let config = cibus_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Search {
            query,
            highlight,
            expand,
            geojson,
        } => {
            let options = search::SearchOptions {
                highlight,
                expand,
                geojson,
            };
            search::run_search(&config, &query, &options).await
        }
    }
}

#[cfg(test)]
mod tests;
