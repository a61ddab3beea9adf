//! Procedural column synthesis
//!
//! Surface height is a pure function of the world column. Decorations
//! (floating fragile blocks, stone platforms) are drawn from the session rng,
//! so two runs only match when both use the same seed.

use glam::IVec3;

use super::block::BlockType;
use super::grid::VoxelGrid;
use super::rng_trait::WorldRng;

/// Width of a chunk along X, in blocks
pub const CHUNK_SIZE: i32 = 16;

/// Lowest filled layer
pub const BEDROCK_Y: i32 = -4;

/// Surface never dips below this
pub const MIN_SURFACE_Y: i32 = -2;

/// Chance that a column past the first few gets a floating fragile block
const FRAGILE_THRESHOLD: f32 = 0.7;
/// Chance threshold for a stone platform above the column
const PLATFORM_THRESHOLD: f32 = 0.85;
/// Local columns `0..=FRAGILE_MIN_LOCAL_X` never get a fragile block
const FRAGILE_MIN_LOCAL_X: i32 = 2;
/// Platform height above the surface
const PLATFORM_LIFT: i32 = 4;

/// Stateless terrain generator
pub struct TerrainGenerator;

impl TerrainGenerator {
    /// Surface height of a world column
    pub fn column_height(world_x: i32) -> i32 {
        let x = world_x as f32;
        let height = ((x * 0.1).sin() * 2.0).floor() as i32 + (x * 0.5).cos().floor() as i32;
        height.max(MIN_SURFACE_Y)
    }

    /// Chunk index containing a world x coordinate
    pub fn chunk_index(world_x: f32) -> i32 {
        (world_x.floor() as i32).div_euclid(CHUNK_SIZE)
    }

    /// Fill one chunk's columns into the grid. Returns the number of blocks
    /// placed (cells already occupied are left alone).
    pub fn generate_chunk(grid: &mut VoxelGrid, rng: &mut dyn WorldRng, chunk_index: i32) -> usize {
        let mut placed = 0;

        for local_x in 0..CHUNK_SIZE {
            let world_x = chunk_index * CHUNK_SIZE + local_x;
            let height = Self::column_height(world_x);

            for y in BEDROCK_Y..=height {
                let block = if y == height {
                    BlockType::Grass
                } else {
                    BlockType::Dirt
                };
                placed += grid.put(IVec3::new(world_x, y, 0), block) as usize;
            }

            if rng.gen_f32() > FRAGILE_THRESHOLD && local_x > FRAGILE_MIN_LOCAL_X {
                let lift = 1 + (rng.gen_f32() * 3.0).floor() as i32;
                let y = height + lift;
                placed += grid.put(IVec3::new(world_x, y, 0), BlockType::Fragile) as usize;
                if rng.gen_bool() {
                    placed +=
                        grid.put(IVec3::new(world_x, y + 1, 0), BlockType::Fragile) as usize;
                }
            }

            if rng.gen_f32() > PLATFORM_THRESHOLD {
                let y = height + PLATFORM_LIFT;
                for dx in 0..2 {
                    placed +=
                        grid.put(IVec3::new(world_x + dx, y, 0), BlockType::Stone) as usize;
                }
            }
        }

        log::debug!("Generated chunk {} ({} blocks)", chunk_index, placed);
        placed
    }
}
