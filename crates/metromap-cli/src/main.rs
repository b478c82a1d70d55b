use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use metromap_lib::{
    load_map, plan_route, MetroMap, RouteRequest, RouteSummary, StationRef,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Metro map routing utilities")]
struct Cli {
    /// Path to the metro map description file.
    #[arg(long)]
    map: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a route between two stations.
    Route {
        /// Starting station name.
        #[arg(long = "from", required_unless_present = "from_id", conflicts_with = "from_id")]
        from: Option<String>,
        /// Destination station name.
        #[arg(long = "to", required_unless_present = "to_id", conflicts_with = "to_id")]
        to: Option<String>,
        /// Starting station identifier, for names shared by several stations.
        #[arg(long)]
        from_id: Option<String>,
        /// Destination station identifier.
        #[arg(long)]
        to_id: Option<String>,
    },
    /// List every station in the map in declaration order.
    Stations,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Route {
            from,
            to,
            from_id,
            to_id,
        } => {
            let request = RouteRequest {
                from: station_ref(from, from_id),
                to: station_ref(to, to_id),
            };
            handle_route(&cli.map, cli.format, &request)
        }
        Command::Stations => handle_stations(&cli.map, cli.format),
    }
}

/// Clap guarantees exactly one of the pair is present.
fn station_ref(name: Option<String>, id: Option<String>) -> StationRef {
    match (name, id) {
        (Some(name), _) => StationRef::Name(name),
        (None, Some(id)) => StationRef::Id(id),
        (None, None) => unreachable!("clap enforces one endpoint argument"),
    }
}

fn load(path: &Path) -> Result<MetroMap> {
    load_map(path).with_context(|| format!("failed to load metro map from {}", path.display()))
}

fn handle_route(path: &Path, format: OutputFormat, request: &RouteRequest) -> Result<()> {
    let map = load(path)?;
    let plan = plan_route(&map, request)?;
    let summary = RouteSummary::from_path(&map, &plan.steps)?;

    match format {
        OutputFormat::Text => print!("{}", summary.render_plain()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    Ok(())
}

fn handle_stations(path: &Path, format: OutputFormat) -> Result<()> {
    let map = load(path)?;

    match format {
        OutputFormat::Text => {
            for station in map.stations() {
                let lines = station.lines().join(", ");
                println!("{:>4}  {}  [{}]", station.id, station.name, lines);
            }
        }
        OutputFormat::Json => {
            let rows: Vec<_> = map
                .stations()
                .iter()
                .map(|station| {
                    serde_json::json!({
                        "id": station.id,
                        "name": station.name,
                        "lines": station.lines(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
