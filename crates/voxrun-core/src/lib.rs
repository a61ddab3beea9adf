//! # voxrun-core - voxel side-runner simulation
//!
//! Owns everything that changes from frame to frame: the sparse block grid,
//! chunk streaming, player kinematics and collision, particles and score.
//! Rendering and input capture live outside this crate.

pub mod config;
pub mod engine;
pub mod entity;
pub mod error;
pub mod simulation;
pub mod world;

pub use config::GameConfig;
pub use engine::{Engine, HostEvents, NoopHost};
pub use error::ConfigError;

/// Common imports for internal use
pub mod prelude {
    pub use glam::{IVec3, Vec2, Vec3};

    pub use crate::entity::{InputState, Player};
    pub use crate::simulation::{Particle, ParticleSystem, Stats};
    pub use crate::world::{BlockType, CHUNK_SIZE, VoxelGrid};
}
