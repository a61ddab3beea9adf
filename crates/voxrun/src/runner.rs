//! Headless frame loop: feeds timestamps and intents to the engine

use voxrun_core::Engine;
use voxrun_core::simulation::Stats;
use web_time::{Duration, Instant};

use crate::ascii::render_strip;
use crate::autopilot::Autopilot;
use crate::config::{RunConfig, RunnerConfig, SnapshotConfig};
use crate::host::LoggingHost;

/// Outcome of a finished run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    pub frames: u32,
    pub sessions: u32,
    pub deaths: u32,
    /// Highest score reached by any session
    pub best_score: f32,
    /// Stats of the last session when the run ended
    pub final_stats: Stats,
    /// Distance covered along X by the last session
    pub distance: f32,
}

/// Drives one engine for a fixed number of frames
pub struct Runner {
    engine: Engine,
    autopilot: Option<Autopilot>,
    run: RunConfig,
    snapshot: SnapshotConfig,
}

impl Runner {
    pub fn new(config: &RunnerConfig) -> Self {
        let host = Box::new(LoggingHost::new(config.run.report_interval_secs));
        let engine = Engine::with_config(config.game.clone(), host, config.run.seed);

        Self {
            engine,
            autopilot: config.run.autopilot.then(|| Autopilot::new(true)),
            run: config.run.clone(),
            snapshot: config.snapshot.clone(),
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Current strip around the player as text
    pub fn snapshot(&self) -> String {
        render_strip(
            self.engine.grid(),
            self.engine.player(),
            self.engine.particles(),
            self.snapshot.width,
            self.snapshot.height,
        )
    }

    /// Run every configured frame, then dispose the engine
    pub fn run(&mut self) -> RunReport {
        let frame_ms = 1000.0 / f64::from(self.run.fps);
        let started = Instant::now();
        let mut report = RunReport::default();
        let mut spawn_x = self.engine.player().position.x;

        self.engine.lock();

        for frame in 0..self.run.frames {
            if let Some(pilot) = self.autopilot.as_mut() {
                let command = pilot.decide(self.engine.grid(), self.engine.player());
                self.engine.set_input(command.input);
                if command.jump {
                    self.engine.trigger_jump();
                }
                if let Some(direction) = command.aim {
                    let origin = self.engine.player().position;
                    self.engine.destroy_at_aim(origin, direction);
                }
            }

            self.engine.frame(f64::from(frame) * frame_ms);
            report.frames += 1;
            report.best_score = report.best_score.max(self.engine.stats().score);

            if self.snapshot.every > 0 && (frame + 1) % self.snapshot.every == 0 {
                println!("{}", self.snapshot());
            }

            if self.engine.is_dead() {
                report.deaths += 1;
                if !self.run.restart_on_death {
                    break;
                }
                self.engine.lock();
                spawn_x = self.engine.player().position.x;
            }

            if self.run.realtime {
                pace(started, frame + 1, frame_ms);
            }
        }

        report.sessions = self.engine.sessions();
        report.final_stats = *self.engine.stats();
        report.distance = self.engine.player().position.x - spawn_x;
        self.engine.dispose();
        report
    }
}

/// Sleep until `frames` frames' worth of wall time have passed since `started`
fn pace(started: Instant, frames: u32, frame_ms: f64) {
    let target = started + Duration::from_secs_f64(f64::from(frames) * frame_ms / 1000.0);
    let now = Instant::now();
    if target > now {
        std::thread::sleep(target - now);
    }
}
