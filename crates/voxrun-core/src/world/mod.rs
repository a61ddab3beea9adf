//! World module - block storage and the systems that query it

pub mod block;
mod chunk_manager;
mod collision;
pub mod generation;
mod grid;
mod player_physics;
mod raycasting;
pub mod rng_trait;

pub use block::{BlockType, cell_at, cell_center};
pub use chunk_manager::ChunkManager;
pub use collision::{CollisionResolver, PLAYFIELD_Z, SKIN};
pub use generation::{CHUNK_SIZE, TerrainGenerator};
pub use grid::VoxelGrid;
pub use player_physics::{JumpOutcome, PlayerPhysicsSystem};
pub use raycasting::{RayHit, Raycasting};
pub use rng_trait::{WorldRng, session_rng};
