use glam::Vec3;
use serde::{Deserialize, Serialize};

/// The player entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Center of the bounding box
    pub position: Vec3,
    pub velocity: Vec3,
    pub on_ground: bool,
    /// Set by a grounded jump, spent by the airborne one
    pub can_double_jump: bool,
}

impl Player {
    /// Half-extents of the bounding box (x and z share the horizontal value)
    pub const HALF_WIDTH: f32 = 0.35;
    pub const HALF_HEIGHT: f32 = 0.4;

    /// Double jumps are weaker than grounded ones
    pub const DOUBLE_JUMP_FACTOR: f32 = 0.8;

    /// Create a new player at the specified position
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            on_ground: false, // Start in air
            can_double_jump: false,
        }
    }

    pub fn half_extents() -> Vec3 {
        Vec3::new(Self::HALF_WIDTH, Self::HALF_HEIGHT, Self::HALF_WIDTH)
    }

    /// Lowest point of the bounding box
    pub fn feet(&self) -> Vec3 {
        self.position - Vec3::Y * Self::HALF_HEIGHT
    }
}
