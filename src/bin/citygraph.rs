//! CLI entry point for the `citygraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use city_graph::cli::commands;
use city_graph::ErrorKind;

#[derive(Parser)]
#[command(
    name = "citygraph",
    about = "CityGraph CLI: query nearby cities and distances from a graph file"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List cities directly connected to a city
    Neighbors {
        /// Path to the graph JSON file
        file: PathBuf,
        /// City name
        city: String,
    },
    /// Show the distance between two cities
    Distance {
        /// Path to the graph JSON file
        file: PathBuf,
        /// First city
        city_a: String,
        /// Second city
        city_b: String,
    },
    /// Suggest neighbors within a maximum distance
    Suggest {
        /// Path to the graph JSON file
        file: PathBuf,
        /// Base city
        city: String,
        /// Maximum distance in kilometers (inclusive)
        #[arg(long, allow_negative_numbers = true)]
        max_distance: f64,
    },
    /// Summary statistics about the graph
    Stats {
        /// Path to the graph JSON file
        file: PathBuf,
    },
    /// Validate the graph file
    Check {
        /// Path to the graph JSON file
        file: PathBuf,
    },
    /// Print the normalized graph as JSON
    Export {
        /// Path to the graph JSON file
        file: PathBuf,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let result = match cli.command {
        Commands::Neighbors { file, city } => commands::cmd_neighbors(&file, &city, json),
        Commands::Distance {
            file,
            city_a,
            city_b,
        } => commands::cmd_distance(&file, &city_a, &city_b, json),
        Commands::Suggest {
            file,
            city,
            max_distance,
        } => commands::cmd_suggest(&file, &city, max_distance, json),
        Commands::Stats { file } => commands::cmd_stats(&file, json),
        Commands::Check { file } => commands::cmd_check(&file, json),
        Commands::Export { file, pretty } => commands::cmd_export(&file, pretty),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match e.kind() {
            ErrorKind::Io => 1,
            ErrorKind::Parse => 2,
            ErrorKind::InvalidArgument => 3,
            ErrorKind::NotFound => 4,
        };
        process::exit(code);
    }
}
