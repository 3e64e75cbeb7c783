//! oneday — plays one day of `ozone_express` headlessly.
//!
//! Loads the solver's suggested assignment, dispatches each loaded vehicle,
//! draws an obstacle-avoiding route through its stops, records the trip and
//! prints the end-of-day report.  Trips and the day summary are written to
//! `output/oneday/`.
//!
//! Usage: `oneday [CONFIG.json] [--seed N] [-v]`

mod route;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::{LevelFilter, info, warn};
use simple_logger::SimpleLogger;

use oc_core::{GameConfig, Parcel};
use oc_day::{DayBuilder, DayEvent, DayObserver, DaySummary, EventOutcome, LogObserver, TripRecord};
use oc_output::{CsvWriter, DayOutputObserver, OutputWriter};
use oc_spatial::ObstacleMap;

const OUTPUT_DIR: &str = "output/oneday";

// ── Arguments ─────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Args {
    config:  Option<String>,
    seed:    Option<u64>,
    verbose: bool,
}

impl Args {
    fn parse(mut raw: impl Iterator<Item = String>) -> Result<Self> {
        let mut args = Args::default();
        while let Some(arg) = raw.next() {
            match arg.as_str() {
                "-v" | "--verbose" => args.verbose = true,
                "--seed" => {
                    let value = raw.next().context("--seed needs a value")?;
                    args.seed = Some(value.parse().with_context(|| format!("bad seed {value:?}"))?);
                }
                flag if flag.starts_with('-') => bail!("unknown flag {flag}"),
                path => args.config = Some(path.to_owned()),
            }
        }
        Ok(args)
    }
}

fn load_config(path: Option<&str>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let file = File::open(path).with_context(|| format!("opening {path}"))?;
    let config: GameConfig =
        serde_json::from_reader(BufReader::new(file)).with_context(|| format!("parsing {path}"))?;
    Ok(config)
}

// ── Observer fan-out ──────────────────────────────────────────────────────────

struct DemoObserver<W: OutputWriter> {
    log:    LogObserver,
    output: DayOutputObserver<W>,
}

impl<W: OutputWriter> DayObserver for DemoObserver<W> {
    fn on_day_start(&mut self, seed: u64, parcels: &[Parcel], obstacles: &ObstacleMap, max_segments: u32) {
        self.log.on_day_start(seed, parcels, obstacles, max_segments);
    }

    fn on_event(&mut self, event: &DayEvent, outcome: &EventOutcome) {
        self.log.on_event(event, outcome);
    }

    fn on_trip_recorded(&mut self, trip: &TripRecord) {
        self.log.on_trip_recorded(trip);
        self.output.on_trip_recorded(trip);
    }

    fn on_day_complete(&mut self, summary: &DaySummary) {
        self.log.on_day_complete(summary);
        self.output.on_day_complete(summary);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse(std::env::args().skip(1))?;

    SimpleLogger::new()
        .with_level(if args.verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .init()?;

    let config = load_config(args.config.as_deref())?;
    let mut builder = DayBuilder::new(config);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    let mut day = builder.build()?;

    println!("=== oneday — ozone_express ===");
    println!(
        "Seed: {}  |  Parcels: {}  |  Obstacles: {}  |  Segment limit: {}",
        day.seed(),
        day.parcels().len(),
        day.obstacles().len(),
        day.max_path_segments(),
    );
    println!();

    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = DemoObserver { log: LogObserver, output: DayOutputObserver::new(writer) };

    // 1. Load the fleet.
    let suggestion = day.suggest();
    if !suggestion.is_available() {
        println!("No loading fits the fleet today; nothing to deliver.");
        return Ok(());
    }
    info!("suggested loading scores {} tiles", suggestion.score);
    day.apply_observed(DayEvent::ApplySuggestion(suggestion), &mut obs);

    // 2. Dispatch and drive each loaded vehicle.
    let loaded: Vec<_> = day.undispatched_vehicles().iter().map(|v| v.id).collect();
    for vehicle in loaded {
        day.apply_observed(DayEvent::DispatchVehicle(vehicle), &mut obs);

        let stops = day.destinations_for(vehicle);
        let edges = route::plan(day.grid(), day.obstacles(), day.depot(), &stops);
        for (a, b) in edges {
            if day.current_path().contains_segment(a, b) {
                continue;
            }
            let outcome = day.apply_observed(DayEvent::DrawSegment { a, b }, &mut obs);
            if !outcome.changed() {
                break;
            }
        }

        let report = day.check_connectivity(&stops);
        if !report.solved {
            warn!("{vehicle}: route reaches {} of {} stops", report.connected, report.total);
        }
        let segments = day.current_path().len() as u32;
        day.apply_observed(DayEvent::RecordTrip { vehicle, segments }, &mut obs);
    }

    obs.output.finish();
    if let Some(e) = obs.output.take_error() {
        eprintln!("output error: {e}");
    }

    // 3. Report.
    let summary = day.summary();
    let goals = day.config().goals;
    let progress = summary.totals.progress(&goals);
    println!();
    println!("{:<8} {:<6} {:>8} {:>8} {:>6} {:>10}", "Trip", "Class", "Segments", "Metres", "Time", "Emissions");
    println!("{}", "-".repeat(52));
    for trip in day.trips() {
        println!(
            "{:<8} {:<6} {:>8} {:>8} {:>6} {:>10}",
            trip.vehicle.to_string(),
            trip.class.as_str(),
            trip.segments,
            trip.metres,
            trip.cost.time,
            trip.cost.emissions,
        );
    }
    println!();
    println!(
        "Time: {} / {} min ({}%)  |  Emissions: {} / {} ({}%)",
        summary.totals.time,
        goals.time_limit_min,
        progress.time_pct,
        summary.totals.emissions,
        goals.emission_limit,
        progress.emission_pct,
    );
    println!("Day complete: {}  |  Rank: {}", day.is_day_finished(), summary.rank);

    Ok(())
}
