use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use flightpath_cli::output::OutputFormat;
use flightpath_lib::{
    load_dataset, CostKey, RankKey, SortKey, DATASET_ENV_VAR, DEFAULT_MAX_TRANSFERS,
};

mod commands;

use commands::paths::PathsCommandArgs;
use commands::route::RouteCommandArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "Flight route planning utilities")]
struct Cli {
    /// Load flights from this JSON or CSV file instead of the default dataset.
    #[arg(long, global = true, env = DATASET_ENV_VAR)]
    dataset: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List flights, optionally filtered by origin and destination.
    Flights {
        /// Origin city code or name.
        #[arg(long = "from")]
        from: Option<String>,
        /// Destination city code or name.
        #[arg(long = "to")]
        to: Option<String>,
        /// Sort by price, duration or airline.
        #[arg(long, default_value = "price")]
        sort: SortKey,
    },
    /// List the cities known to the dataset.
    Cities,
    /// Find the cheapest or fastest connection between two cities.
    Route {
        /// Starting city code or name.
        #[arg(long = "from")]
        from: String,
        /// Destination city code or name.
        #[arg(long = "to")]
        to: String,
        /// Minimise total price or total duration.
        #[arg(long, default_value = "price")]
        optimize: CostKey,
        /// Also list direct and one-stop alternatives.
        #[arg(long)]
        compare: bool,
    },
    /// Enumerate every connection within a transfer budget.
    Paths {
        /// Starting city code or name.
        #[arg(long = "from")]
        from: String,
        /// Destination city code or name.
        #[arg(long = "to")]
        to: String,
        /// Maximum number of plane changes.
        #[arg(long, default_value_t = DEFAULT_MAX_TRANSFERS)]
        max_transfers: usize,
        /// Rank by price, duration or transfers.
        #[arg(long, default_value = "price")]
        rank_by: RankKey,
        /// Show at most this many connections.
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let dataset = load_dataset(cli.dataset.as_deref()).context("failed to load flight dataset")?;

    match cli.command {
        Command::Flights { from, to, sort } => commands::flights::handle_flights_command(
            &dataset,
            cli.format,
            from.as_deref(),
            to.as_deref(),
            sort,
        ),
        Command::Cities => commands::cities::handle_cities_command(&dataset, cli.format),
        Command::Route {
            from,
            to,
            optimize,
            compare,
        } => commands::route::handle_route_command(
            &dataset,
            cli.format,
            &RouteCommandArgs {
                from,
                to,
                optimize,
                compare,
            },
        ),
        Command::Paths {
            from,
            to,
            max_transfers,
            rank_by,
            limit,
        } => commands::paths::handle_paths_command(
            &dataset,
            cli.format,
            &PathsCommandArgs {
                from,
                to,
                max_transfers,
                rank_by,
                limit,
            },
        ),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
