//! Destroy action - remove an aimed-at block for score and debris

use glam::IVec3;

use super::particles::ParticleSystem;
use super::stats::Stats;
use crate::config::GameConfig;
use crate::world::{BlockType, RayHit, VoxelGrid, WorldRng, cell_center};

/// What a successful destroy removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DestroyOutcome {
    pub block: IVec3,
    pub block_type: BlockType,
}

/// Destroy system - static utility methods for block removal
pub struct DestroySystem;

impl DestroySystem {
    /// Destroy the block named by `hit` if it is in reach and still present.
    ///
    /// Awards the configured score and spawns a debris burst colored like the
    /// block at its center. Returns `None` when nothing was removed.
    pub fn destroy(
        grid: &mut VoxelGrid,
        particles: &mut ParticleSystem,
        stats: &mut Stats,
        rng: &mut dyn WorldRng,
        hit: RayHit,
        config: &GameConfig,
    ) -> Option<DestroyOutcome> {
        // NaN distances fail this comparison too
        let in_reach = hit.distance < config.world.max_destroy_distance;
        if !in_reach {
            log::trace!(
                "[DESTROY] {:?} out of reach ({:.2})",
                hit.block,
                hit.distance
            );
            return None;
        }

        let block_type = grid.remove(hit.block)?;

        stats.award_block(config.scoring.block_destroyed);
        particles.spawn(
            cell_center(hit.block),
            config.particles.destroy_burst,
            block_type.color(),
            rng,
        );

        log::debug!(
            "[DESTROY] {:?} at {:?} (distance {:.2})",
            block_type,
            hit.block,
            hit.distance
        );

        Some(DestroyOutcome {
            block: hit.block,
            block_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    struct Fixture {
        grid: VoxelGrid,
        particles: ParticleSystem,
        stats: Stats,
        rng: Xoshiro256StarStar,
        config: GameConfig,
    }

    impl Fixture {
        fn new() -> Self {
            let mut grid = VoxelGrid::new();
            grid.put(IVec3::new(4, 1, 0), BlockType::Fragile);
            Self {
                grid,
                particles: ParticleSystem::default(),
                stats: Stats::default(),
                rng: Xoshiro256StarStar::seed_from_u64(8),
                config: GameConfig::default(),
            }
        }

        fn destroy(&mut self, distance: f32) -> Option<DestroyOutcome> {
            let hit = RayHit {
                block: IVec3::new(4, 1, 0),
                distance,
            };
            DestroySystem::destroy(
                &mut self.grid,
                &mut self.particles,
                &mut self.stats,
                &mut self.rng,
                hit,
                &self.config,
            )
        }
    }

    #[test]
    fn test_destroy_in_reach() {
        let mut f = Fixture::new();

        let outcome = f.destroy(19.9).expect("block in reach");

        assert_eq!(outcome.block_type, BlockType::Fragile);
        assert!(!f.grid.has(IVec3::new(4, 1, 0)));
        assert_eq!(f.stats.score, 10.0);
        assert_eq!(f.stats.blocks_destroyed, 1);
        assert_eq!(f.particles.len(), 8);
        for p in f.particles.iter() {
            assert_eq!(p.color, BlockType::Fragile.color());
            assert_eq!(p.position, cell_center(IVec3::new(4, 1, 0)));
        }
    }

    #[test]
    fn test_destroy_out_of_reach() {
        let mut f = Fixture::new();

        assert!(f.destroy(20.1).is_none());
        assert!(f.destroy(20.0).is_none());

        assert!(f.grid.has(IVec3::new(4, 1, 0)));
        assert_eq!(f.stats.score, 0.0);
        assert!(f.particles.is_empty());
    }

    #[test]
    fn test_destroy_twice_is_noop() {
        let mut f = Fixture::new();

        assert!(f.destroy(3.0).is_some());
        assert!(f.destroy(3.0).is_none());

        assert_eq!(f.stats.score, 10.0);
        assert_eq!(f.particles.len(), 8);
    }

    #[test]
    fn test_nan_distance_is_out_of_reach() {
        let mut f = Fixture::new();
        assert!(f.destroy(f32::NAN).is_none());
    }
}
