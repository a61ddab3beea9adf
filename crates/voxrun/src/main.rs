//! voxrun - run the voxel side-runner simulation in a terminal

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use voxrun::{Runner, RunnerConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RON config file (default: ./voxrun.ron if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(long)]
    frames: Option<u32>,

    /// Simulated frames per second
    #[arg(long)]
    fps: Option<u32>,

    /// Seed for terrain and particles (reproducible runs)
    #[arg(long)]
    seed: Option<u64>,

    /// Let the player idle instead of running the autopilot
    #[arg(long)]
    no_autopilot: bool,

    /// Pace frames against the wall clock
    #[arg(long)]
    realtime: bool,

    /// Print a text snapshot every N frames
    #[arg(long)]
    snapshot: Option<u32>,

    /// Print the effective game configuration as RON and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config =
        RunnerConfig::load(args.config.as_deref()).context("Failed to load configuration")?;

    // CLI flags override every other layer
    if let Some(frames) = args.frames {
        config.run.frames = frames;
    }
    if let Some(fps) = args.fps {
        config.run.fps = fps;
    }
    if args.seed.is_some() {
        config.run.seed = args.seed;
    }
    if args.no_autopilot {
        config.run.autopilot = false;
    }
    if args.realtime {
        config.run.realtime = true;
    }
    if let Some(every) = args.snapshot {
        config.snapshot.every = every;
    }
    config.validate()?;

    if args.dump_config {
        println!("{}", config.game.to_ron_string());
        return Ok(());
    }

    log::info!(
        "Starting voxrun: {} frames at {} fps, seed {:?}, autopilot {}",
        config.run.frames,
        config.run.fps,
        config.run.seed,
        config.run.autopilot
    );

    let mut runner = Runner::new(&config);
    let report = runner.run();

    println!("{}", runner.snapshot());
    log::info!(
        "Finished after {} frames: {} session(s), {} death(s), best score {:.0}, distance {:.1}",
        report.frames,
        report.sessions,
        report.deaths,
        report.best_score,
        report.distance
    );

    Ok(())
}
