//! Callbacks from the simulation to whoever presents it

use crate::simulation::Stats;

/// Synchronous notifications raised by the [`Engine`](super::Engine).
///
/// Every method defaults to doing nothing, so a host only overrides the
/// events it cares about.
pub trait HostEvents {
    /// Called after every active frame
    fn on_stats_update(&mut self, _stats: &Stats) {}

    /// Called exactly once per session when the player falls out of the world
    fn on_death(&mut self) {}

    /// Called when input capture was lost while the player is alive
    fn on_unlock(&mut self) {}
}

/// A no-op host for headless runs and tests
#[derive(Debug, Default)]
pub struct NoopHost;

impl HostEvents for NoopHost {}
