//! Per-frame systems layered on top of the world

pub mod destroy;
pub mod particles;
pub mod stats;

pub use destroy::{DestroyOutcome, DestroySystem};
pub use particles::{Particle, ParticleSystem};
pub use stats::Stats;
