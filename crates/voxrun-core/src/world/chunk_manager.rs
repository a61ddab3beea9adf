//! Chunk streaming - which chunk indices have been generated

use ahash::AHashSet;

use super::generation::{CHUNK_SIZE, TerrainGenerator};
use super::grid::VoxelGrid;
use super::rng_trait::WorldRng;

/// Ledger of generated chunks and the streaming window around the player.
///
/// Chunks are generation units, not containers: their blocks live in the
/// [`VoxelGrid`]. The ledger only prevents regeneration.
#[derive(Debug, Clone)]
pub struct ChunkManager {
    generated: AHashSet<i32>,

    /// Chunks kept generated ahead of the player's chunk
    pub view_distance: i32,

    /// Forget chunks more than this many indices behind the player
    pub evict_behind: Option<i32>,
}

impl ChunkManager {
    /// Chunks kept generated behind the player's chunk
    pub const TRAILING_CHUNKS: i32 = 1;

    pub fn new(view_distance: i32, evict_behind: Option<i32>) -> Self {
        Self {
            generated: AHashSet::new(),
            view_distance,
            evict_behind,
        }
    }

    /// Inclusive range of chunk indices the window covers for a player chunk
    pub fn window(&self, player_chunk: i32) -> std::ops::RangeInclusive<i32> {
        (player_chunk - Self::TRAILING_CHUNKS)..=(player_chunk + self.view_distance)
    }

    /// Generate every chunk in the window that has not been generated yet.
    /// Returns the number of chunks generated by this call.
    pub fn ensure_window(
        &mut self,
        grid: &mut VoxelGrid,
        rng: &mut dyn WorldRng,
        player_chunk: i32,
    ) -> usize {
        let mut generated = 0;

        for index in self.window(player_chunk) {
            if self.generated.insert(index) {
                TerrainGenerator::generate_chunk(grid, rng, index);
                generated += 1;
            }
        }

        if let Some(behind) = self.evict_behind {
            self.evict(grid, player_chunk - behind);
        }

        generated
    }

    /// Forget every chunk below `keep_from` and drop its blocks
    fn evict(&mut self, grid: &mut VoxelGrid, keep_from: i32) {
        let stale: Vec<i32> = self
            .generated
            .iter()
            .copied()
            .filter(|index| *index < keep_from)
            .collect();

        for index in stale {
            self.generated.remove(&index);
            let min_x = index * CHUNK_SIZE;
            let removed = grid.remove_columns(min_x, min_x + CHUNK_SIZE);
            log::debug!("Evicted chunk {} ({} blocks)", index, removed);
        }
    }

    pub fn is_generated(&self, index: i32) -> bool {
        self.generated.contains(&index)
    }

    /// Number of chunks in the ledger
    pub fn generated_count(&self) -> usize {
        self.generated.len()
    }
}
