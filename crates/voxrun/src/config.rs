//! Runner configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `voxrun.ron` in the working directory, or the file given on the command line
//! 3. Environment variables prefixed with `VOXRUN_`
//!
//! Example environment variable: `VOXRUN_GAME__PLAYER__SPRINT_SPEED=12.0`
//!
//! Command-line flags are applied on top by `main`.

use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use voxrun_core::GameConfig;

/// Everything the headless runner needs
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RunnerConfig {
    /// Simulation tunables, passed to the engine as-is
    #[serde(default)]
    pub game: GameConfig,

    #[serde(default)]
    pub run: RunConfig,

    #[serde(default)]
    pub snapshot: SnapshotConfig,
}

/// How long and how fast to drive the engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Frames to simulate before exiting
    pub frames: u32,
    /// Simulated frames per second (timestamps fed to the engine)
    pub fps: u32,
    /// Terrain/particle seed; None draws from OS entropy
    pub seed: Option<u64>,
    /// Let the built-in autopilot steer; otherwise the player idles
    pub autopilot: bool,
    /// Pace frames against the wall clock instead of running flat out
    pub realtime: bool,
    /// Start a new session after a fall death instead of stopping
    pub restart_on_death: bool,
    /// Seconds of play between progress log lines
    pub report_interval_secs: f32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frames: 1800,
            fps: 60,
            seed: None,
            autopilot: true,
            realtime: false,
            restart_on_death: true,
            report_interval_secs: 5.0,
        }
    }
}

/// Text snapshots of the strip around the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// Print a snapshot every N frames (0 = only at the end)
    pub every: u32,
    /// Columns shown, centered on the player
    pub width: u32,
    /// Rows shown, centered on the player
    pub height: u32,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            every: 0,
            width: 64,
            height: 16,
        }
    }
}

impl RunnerConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. `explicit` if given (must exist), otherwise `voxrun.ron` (if exists)
    /// 3. Environment variables prefixed with `VOXRUN_` (highest priority)
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let file = match explicit {
            Some(path) => File::from(path).format(FileFormat::Ron).required(true),
            None => File::with_name("voxrun")
                .format(FileFormat::Ron)
                .required(false),
        };

        let builder = Config::builder()
            // Layer 1: Compiled defaults
            .set_default("run.frames", 1800_i64)?
            .set_default("run.fps", 60_i64)?
            .set_default("run.autopilot", true)?
            .set_default("run.realtime", false)?
            .set_default("run.restart_on_death", true)?
            .set_default("run.report_interval_secs", 5.0)?
            .set_default("snapshot.every", 0_i64)?
            .set_default("snapshot.width", 64_i64)?
            .set_default("snapshot.height", 16_i64)?
            // Layer 2: Config file
            .add_source(file)
            // Layer 3: Environment variables (VOXRUN_RUN__FPS, etc.)
            .add_source(Environment::with_prefix("VOXRUN").separator("__"));

        let config = builder.build().context("Failed to build configuration")?;

        let runner: RunnerConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        runner.validate()?;
        Ok(runner)
    }

    /// Reject settings the runner or the engine cannot work with
    pub fn validate(&self) -> Result<()> {
        self.game
            .validate()
            .context("Invalid game configuration")?;
        anyhow::ensure!(self.run.fps > 0, "run.fps must be positive");
        anyhow::ensure!(
            self.snapshot.width > 0 && self.snapshot.height > 0,
            "snapshot size must be positive"
        );
        Ok(())
    }
}
