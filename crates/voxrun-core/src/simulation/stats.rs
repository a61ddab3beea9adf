//! Session score and play time

use serde::{Deserialize, Serialize};

/// Score and elapsed time of the current session. Never decreases while the
/// session is active; a new session starts from zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub score: f32,
    /// Active seconds
    pub time: f32,
    pub blocks_destroyed: u32,
}

impl Stats {
    /// Accumulate one active frame
    pub fn tick(&mut self, dt: f32, points_per_second: f32) {
        self.time += dt;
        self.score += dt * points_per_second;
    }

    pub fn award_block(&mut self, points: f32) {
        self.score += points;
        self.blocks_destroyed += 1;
    }
}
