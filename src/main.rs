//! CLI entry point for the bikeflow tool.
//!
//! Provides subcommands for computing a station traffic snapshot, sweeping
//! the time-of-day filter across a whole day, and listing the busiest
//! stations. The CLI stands in for the map renderer: it loads the station
//! and trip datasets from disk and writes the snapshots the renderer draws.

use anyhow::Result;
use bikeflow::format::label;
use bikeflow::loader::{load_stations, load_trips};
use bikeflow::output::{append_rows, print_pretty, write_snapshot};
use bikeflow::traffic::filter::TimeFilter;
use bikeflow::traffic::recompute::recompute;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeflow")]
#[command(about = "A tool to compute bike-share station traffic", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a traffic snapshot for one time-of-day selection
    Compute {
        /// Path to the station information JSON file
        #[arg(long, default_value = "data/stations.json")]
        stations: String,

        /// Path to the trip history CSV file
        #[arg(long, default_value = "data/trips.csv")]
        trips: String,

        /// Minute of day to filter around (-1 = any time)
        #[arg(short, long, default_value_t = -1, allow_hyphen_values = true)]
        at: i32,

        /// JSON file to write the snapshot to
        #[arg(short, long, default_value = "snapshot.json")]
        output: String,

        /// Optional CSV file to append per-station rows to
        #[arg(long)]
        csv: Option<String>,
    },
    /// Recompute traffic at every step of the day and append rows to a CSV
    Sweep {
        /// Path to the station information JSON file
        #[arg(long, default_value = "data/stations.json")]
        stations: String,

        /// Path to the trip history CSV file
        #[arg(long, default_value = "data/trips.csv")]
        trips: String,

        /// Minutes between filter positions
        #[arg(short, long, default_value_t = 60)]
        step: u16,

        /// CSV file to append per-station rows to
        #[arg(short, long, default_value = "sweep.csv")]
        output: String,
    },
    /// List the busiest stations for a time-of-day selection
    Top {
        /// Path to the station information JSON file
        #[arg(long, default_value = "data/stations.json")]
        stations: String,

        /// Path to the trip history CSV file
        #[arg(long, default_value = "data/trips.csv")]
        trips: String,

        /// Minute of day to filter around (-1 = any time)
        #[arg(short, long, default_value_t = -1, allow_hyphen_values = true)]
        at: i32,

        /// Number of stations to list
        #[arg(short, long, default_value_t = 10)]
        count: usize,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/bikeflow.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeflow.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compute {
            stations,
            trips,
            at,
            output,
            csv,
        } => {
            let filter = TimeFilter::from_raw(at)?;
            let stations = load_stations(&stations)?;
            let trips = load_trips(&trips)?;

            let snapshot = recompute(&stations, &trips, filter);
            print_pretty(&snapshot);
            info!(
                time = %label(filter),
                stations = snapshot.stations.len(),
                "Snapshot computed"
            );

            write_snapshot(&output, &snapshot)?;
            if let Some(csv_path) = csv {
                append_rows(&csv_path, &snapshot)?;
            }
        }
        Commands::Sweep {
            stations,
            trips,
            step,
            output,
        } => {
            sweep(&stations, &trips, step, &output)?;
        }
        Commands::Top {
            stations,
            trips,
            at,
            count,
        } => {
            let filter = TimeFilter::from_raw(at)?;
            let stations = load_stations(&stations)?;
            let trips = load_trips(&trips)?;

            let snapshot = recompute(&stations, &trips, filter);

            let mut ranked = snapshot.stations;
            ranked.sort_by(|a, b| b.total_traffic.cmp(&a.total_traffic));

            for station in ranked.iter().take(count) {
                info!(
                    short_name = %station.short_name,
                    name = station.name.as_deref().unwrap_or("-"),
                    departures = station.departures,
                    arrivals = station.arrivals,
                    total = station.total_traffic,
                    "Station"
                );
            }

            let total: u32 = ranked.iter().map(|s| s.total_traffic).sum();
            let active = ranked.iter().filter(|s| s.total_traffic > 0).count();
            info!(
                time = %label(filter),
                stations = ranked.len(),
                active,
                total_traffic = total,
                "Top stations summary"
            );
        }
    }

    Ok(())
}

/// Re-runs the full pipeline at every `step`-minute mark of the day, the same
/// recomputation the slider triggers, appending one CSV row per station per
/// position.
fn sweep(stations_path: &str, trips_path: &str, step: u16, output: &str) -> Result<()> {
    if step == 0 || step > 1439 {
        anyhow::bail!("sweep step must be between 1 and 1439 minutes");
    }

    let stations = load_stations(stations_path)?;
    let trips = load_trips(trips_path)?;

    let mut positions = 0;
    let mut minute = 0u16;
    while minute <= 1439 {
        let filter = TimeFilter::from_raw(i32::from(minute))?;
        let snapshot = recompute(&stations, &trips, filter);
        append_rows(output, &snapshot)?;
        positions += 1;
        minute = match minute.checked_add(step) {
            Some(next) => next,
            None => break,
        };
    }

    info!(output, positions, step, "Sweep complete");
    Ok(())
}
