//! Everything one session owns

use glam::Vec3;

use crate::config::GameConfig;
use crate::entity::Player;
use crate::simulation::{ParticleSystem, Stats};
use crate::world::{ChunkManager, TerrainGenerator, VoxelGrid, WorldRng};

/// Mutable world state of a single session. A restart throws the whole
/// value away and builds a new one.
pub struct GameState {
    pub grid: VoxelGrid,
    pub chunks: ChunkManager,
    /// Terrain decorations and particle spread
    pub rng: Box<dyn WorldRng>,
    pub player: Player,
    pub particles: ParticleSystem,
    pub stats: Stats,
}

impl GameState {
    /// Fresh state with the player at spawn and the window around it generated
    pub fn new(config: &GameConfig, rng: Box<dyn WorldRng>) -> Self {
        let mut state = Self {
            grid: VoxelGrid::new(),
            chunks: ChunkManager::new(config.world.view_distance, config.world.evict_behind),
            rng,
            player: Player::new(Vec3::from_array(config.player.spawn)),
            particles: ParticleSystem::new(config.particles.max_particles),
            stats: Stats::default(),
        };
        state.stream_terrain();
        state
    }

    /// Chunk index the player currently stands in
    pub fn player_chunk(&self) -> i32 {
        TerrainGenerator::chunk_index(self.player.position.x)
    }

    /// Make sure the streaming window around the player exists.
    /// Returns the number of chunks generated.
    pub fn stream_terrain(&mut self) -> usize {
        let chunk = self.player_chunk();
        self.chunks
            .ensure_window(&mut self.grid, self.rng.as_mut(), chunk)
    }
}
