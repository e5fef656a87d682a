use clap::{Parser, Subcommand};

use crate::{
    order_map::OrderMapArgs, route_map::RouteMapArgs, show_routes::ShowRoutesArgs,
    solution_table::SolutionTableArgs,
};

mod order_map;
mod parsers;
mod route_map;
mod show_routes;
mod solution_table;
mod stops_file;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch driving legs between consecutive stops and write the map
    /// elements as GeoJSON
    RouteMap {
        #[command(flatten)]
        args: RouteMapArgs,
    },
    /// Plot category-coloured markers for a stop list, without routing
    OrderMap {
        #[command(flatten)]
        args: OrderMapArgs,
    },
    /// Flatten a solver response into a per-stop table
    SolutionTable {
        #[command(flatten)]
        args: SolutionTableArgs,
    },
    /// Print each vehicle's route as an arrow-joined path
    ShowRoutes {
        #[command(flatten)]
        args: ShowRoutesArgs,
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
        Some(Commands::RouteMap { args }) => route_map::run(args).await?,
        Some(Commands::OrderMap { args }) => order_map::run(args)?,
        Some(Commands::SolutionTable { args }) => solution_table::run(args)?,
        Some(Commands::ShowRoutes { args }) => show_routes::run(args)?,
        None => {}
    }

    Ok(())
}
