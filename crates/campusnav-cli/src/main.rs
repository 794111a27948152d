use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use campusnav_cli::commands::nearest::handle_nearest;
use campusnav_cli::commands::plan::{handle_plan, PlanCommandArgs};
use campusnav_cli::commands::route::{handle_route, RouteCommandArgs};
use campusnav_cli::commands::StrategyArg;
use campusnav_cli::output::OutputFormat;
use campusnav_lib::{CoordinateLayout, Coordinates, DEFAULT_NEAREST_MAX_DISTANCE, DEFAULT_WALKING_SPEED};

#[derive(Parser, Debug)]
#[command(author, version, about = "Campus Compass graph and pathfinding utilities")]
struct Cli {
    /// Output format for command results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Shortest path between two nodes of a graph file.
    Route {
        /// JSON graph file with `nodes` and `edges`.
        #[arg(long)]
        graph: PathBuf,
        /// Starting node id.
        #[arg(long = "from")]
        from: String,
        /// Destination node id.
        #[arg(long = "to")]
        to: String,
        /// Frontier used by the search.
        #[arg(long, value_enum, default_value_t = StrategyArg::Linear)]
        strategy: StrategyArg,
    },
    /// Node closest to a point, if any lies within the maximum distance.
    Nearest {
        /// JSON graph file with `nodes` and `edges`.
        #[arg(long)]
        graph: PathBuf,
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
        /// Exclusive search radius.
        #[arg(long, default_value_t = DEFAULT_NEAREST_MAX_DISTANCE)]
        max_distance: f64,
    },
    /// Plan a route over exported location, waypoint and step records.
    Plan {
        /// JSON file with `locations`, `waypoints` and `navigationSteps`.
        #[arg(long)]
        records: PathBuf,
        /// Starting location id.
        #[arg(long = "from")]
        from: String,
        /// Destination id.
        #[arg(long = "to")]
        to: String,
        /// Placement for records without coordinates (hashed or random).
        #[arg(long, default_value_t = CoordinateLayout::Hashed)]
        layout: CoordinateLayout,
        /// Walking speed in distance units per second.
        #[arg(long, default_value_t = DEFAULT_WALKING_SPEED)]
        walking_speed: f64,
        #[arg(long, value_enum, default_value_t = StrategyArg::Linear)]
        strategy: StrategyArg,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let output = match &cli.command {
        Command::Route {
            graph,
            from,
            to,
            strategy,
        } => handle_route(&RouteCommandArgs {
            graph,
            from,
            to,
            strategy: *strategy,
            format: cli.format,
        })?,
        Command::Nearest {
            graph,
            x,
            y,
            max_distance,
        } => handle_nearest(graph, Coordinates::new(*x, *y), *max_distance, cli.format)?,
        Command::Plan {
            records,
            from,
            to,
            layout,
            walking_speed,
            strategy,
        } => handle_plan(&PlanCommandArgs {
            records,
            from,
            to,
            layout: *layout,
            walking_speed: *walking_speed,
            strategy: *strategy,
            format: cli.format,
        })?,
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
