//! Player input intents
//!
//! Device-independent: whoever captures keyboard/mouse/gamepad translates it
//! into these values. Discrete actions (jump, destroy) are not held state and
//! go straight to the [`Engine`](crate::Engine).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Three-state input axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Negative,
    #[default]
    Neutral,
    Positive,
}

impl Axis {
    /// Combine two opposing keys; both held cancels out
    pub fn from_keys(negative: bool, positive: bool) -> Self {
        match (negative, positive) {
            (true, false) => Axis::Negative,
            (false, true) => Axis::Positive,
            _ => Axis::Neutral,
        }
    }

    pub fn value(self) -> f32 {
        match self {
            Axis::Negative => -1.0,
            Axis::Neutral => 0.0,
            Axis::Positive => 1.0,
        }
    }

    pub fn is_neutral(self) -> bool {
        self == Axis::Neutral
    }
}

/// Held movement intents, sampled every frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputState {
    /// Forward/back. Accepted for completeness; the strip has no depth to walk in.
    pub forward: Axis,
    /// Left/right along the running axis
    pub lateral: Axis,
    pub sprint: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Holding right, optionally sprinting
    pub fn running(sprint: bool) -> Self {
        Self {
            lateral: Axis::Positive,
            sprint,
            ..Self::default()
        }
    }
}

/// Accumulated pointer movement, clamped to half the viewport on each axis.
/// Presentation uses it to place the crosshair.
#[derive(Debug, Clone, PartialEq)]
pub struct LookState {
    delta: Vec2,
    bounds: Vec2,
}

impl LookState {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            delta: Vec2::ZERO,
            bounds: viewport * 0.5,
        }
    }

    /// Add raw pointer movement
    pub fn accumulate(&mut self, movement: Vec2) {
        self.delta = (self.delta + movement).clamp(-self.bounds, self.bounds);
    }

    /// Resize the clamp window, pulling the current delta inside it
    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.bounds = viewport.abs() * 0.5;
        self.delta = self.delta.clamp(-self.bounds, self.bounds);
    }

    pub fn delta(&self) -> Vec2 {
        self.delta
    }

    pub fn reset(&mut self) {
        self.delta = Vec2::ZERO;
    }
}

impl Default for LookState {
    fn default() -> Self {
        Self::new(Vec2::new(1280.0, 720.0))
    }
}
