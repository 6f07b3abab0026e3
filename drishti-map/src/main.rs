//! Headless runner: loads a map, drives the tick loop from a scenario and
//! writes the final belief map as PNG.
//!
//! # Usage
//!
//! ```bash
//! # Default config (configs/config.yaml if present); without a scenario the
//! # agent stays put for one full beam revolution
//! cargo run --release -- --map maps/room.png --ticks 600
//!
//! # Scripted movement
//! cargo run --release -- --map maps/room.png --scenario scenarios/sweep.yaml
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use image::DynamicImage;
use log::{error, info};

use drishti_map::io::{self, Scenario};
use drishti_map::grid::world_to_pixel;
use drishti_map::{DrishtiConfig, Result, Session, TickResult};

/// Single-beam occupancy mapping simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path (defaults to configs/config.yaml, then built-in defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ground-truth map image (black pixels are obstacles)
    #[arg(short, long)]
    map: PathBuf,

    /// Scenario YAML with scripted movement
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Number of ticks (overrides the scenario)
    #[arg(short, long)]
    ticks: Option<usize>,

    /// Output directory for rendered images
    #[arg(short, long, default_value = "./output")]
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => DrishtiConfig::load(path)?,
        None => DrishtiConfig::load_default()?,
    };

    let mut scenario = match &args.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::default(),
    };
    if let Some(start) = scenario.start_px {
        config.agent.start_px = Some(start);
    }
    if let Some(dt) = scenario.dt {
        config.sim.dt = dt;
    }
    if let Some(ticks) = args.ticks {
        scenario.ticks = Some(ticks);
    } else if scenario.total_ticks() == 0 {
        scenario.ticks = Some(one_revolution(&config));
    }
    config.validate()?;

    let world = io::load_map(&args.map, &config.map)?;
    let mut session = Session::from_config(world, &config)?;

    let total = scenario.total_ticks();
    info!("Running {} ticks at dt={:.4} s", total, config.sim.dt);

    let mut last = None;
    let mut hits = 0usize;
    for command in scenario.commands() {
        let result = session.tick(config.sim.dt, command);
        if result.hit {
            hits += 1;
        }
        last = Some(result);
    }

    let counts = session.belief().count_states();
    info!(
        "Done: {} ticks, {} hits, belief occupied={} free={} unknown={}",
        session.tick_count(),
        hits,
        counts.occupied,
        counts.free,
        counts.unknown
    );

    write_outputs(&args.output, &session, last.as_ref())
}

/// Ticks for one full beam turn, at least one.
fn one_revolution(config: &DrishtiConfig) -> usize {
    let rps = config.sensor.revolutions_per_second.abs();
    if rps > 0.0 {
        ((1.0 / (rps * config.sim.dt)).ceil() as usize).max(1)
    } else {
        1
    }
}

fn write_outputs(
    dir: &Path,
    session: &Session,
    last: Option<&TickResult>,
) -> Result<()> {
    std::fs::create_dir_all(dir)?;

    let belief = io::belief_image(session.belief());
    let belief_path = dir.join("belief.png");
    io::save_png(&DynamicImage::ImageLuma8(belief), &belief_path)?;
    info!("Wrote {}", belief_path.display());

    if let Some(result) = last {
        let base = io::obstacle_image(session.world());
        let mut overlay = io::overlay_classification(&base, &result.classification);
        let world = session.world();
        let sensed_at =
            world_to_pixel(result.position_m, world.center_px(), world.pixels_per_meter());
        io::mark_agent(&mut overlay, sensed_at);
        let overlay_path = dir.join("last_tick.png");
        io::save_png(&DynamicImage::ImageRgb8(overlay), &overlay_path)?;
        info!("Wrote {}", overlay_path.display());
    }

    Ok(())
}
