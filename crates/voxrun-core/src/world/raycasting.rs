//! Voxel ray casting for the destroy action

use glam::{IVec3, Vec3};

use super::block::{BlockType, cell_at};
use super::grid::VoxelGrid;

/// First block hit by a ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub block: IVec3,
    /// Distance from the ray origin to the entry point
    pub distance: f32,
}

/// Raycasting utilities - stateless methods for line-of-sight queries
pub struct Raycasting;

impl Raycasting {
    /// Walk the cells a ray passes through (Amanatides-Woo traversal) and
    /// return the first occupied one within `max_distance`.
    ///
    /// A ray starting inside a block hits it at distance 0. A non-finite
    /// origin or range never hits anything.
    pub fn raycast(
        grid: &VoxelGrid,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
    ) -> Option<(RayHit, BlockType)> {
        let dir = direction.normalize_or_zero();
        if dir == Vec3::ZERO
            || !origin.is_finite()
            || !max_distance.is_finite()
            || max_distance < 0.0
        {
            return None;
        }

        let mut cell = cell_at(origin);
        let step = dir.signum().as_ivec3();

        // Ray distance to the first boundary on each axis, and between boundaries
        let next_boundary = |axis: usize| -> f32 {
            if dir[axis] > 0.0 {
                (cell[axis] as f32 + 1.0 - origin[axis]) / dir[axis]
            } else if dir[axis] < 0.0 {
                (cell[axis] as f32 - origin[axis]) / dir[axis]
            } else {
                f32::INFINITY
            }
        };
        let mut t_max = Vec3::new(next_boundary(0), next_boundary(1), next_boundary(2));
        let t_delta = Vec3::new(
            (1.0 / dir.x).abs(),
            (1.0 / dir.y).abs(),
            (1.0 / dir.z).abs(),
        );

        // Each step crosses one boundary; a unit of travel crosses at most
        // one per axis.
        let max_steps = (3.0 * (max_distance + 1.0)).ceil() as usize;

        let mut distance = 0.0;
        for _ in 0..=max_steps {
            if distance > max_distance {
                break;
            }
            if let Some(block) = grid.get(cell) {
                return Some((RayHit { block: cell, distance }, block));
            }

            let axis = if t_max.x < t_max.y {
                if t_max.x < t_max.z { 0 } else { 2 }
            } else if t_max.y < t_max.z {
                1
            } else {
                2
            };

            distance = t_max[axis];
            cell[axis] += step[axis];
            t_max[axis] += t_delta[axis];
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(cells: &[IVec3]) -> VoxelGrid {
        let mut grid = VoxelGrid::new();
        for cell in cells {
            grid.put(*cell, BlockType::Stone);
        }
        grid
    }

    #[test]
    fn test_straight_hit_distance() {
        let grid = grid_with(&[IVec3::new(5, 0, 0)]);
        let (hit, block) =
            Raycasting::raycast(&grid, Vec3::new(0.5, 0.5, 0.5), Vec3::X, 20.0).unwrap();
        assert_eq!(hit.block, IVec3::new(5, 0, 0));
        assert!((hit.distance - 4.5).abs() < 1e-5);
        assert_eq!(block, BlockType::Stone);
    }

    #[test]
    fn test_first_block_wins() {
        let grid = grid_with(&[IVec3::new(3, 0, 0), IVec3::new(6, 0, 0)]);
        let (hit, _) =
            Raycasting::raycast(&grid, Vec3::new(0.5, 0.5, 0.5), Vec3::X, 20.0).unwrap();
        assert_eq!(hit.block, IVec3::new(3, 0, 0));
    }

    #[test]
    fn test_out_of_range() {
        let grid = grid_with(&[IVec3::new(30, 0, 0)]);
        assert!(Raycasting::raycast(&grid, Vec3::new(0.5, 0.5, 0.5), Vec3::X, 20.0).is_none());
    }

    #[test]
    fn test_diagonal_downward() {
        let grid = grid_with(&[IVec3::new(3, -3, 0)]);
        let origin = Vec3::new(0.5, 0.5, 0.5);
        let (hit, _) =
            Raycasting::raycast(&grid, origin, Vec3::new(1.0, -1.0, 0.0), 20.0).unwrap();
        assert_eq!(hit.block, IVec3::new(3, -3, 0));
        assert!(hit.distance > 3.0 && hit.distance < 4.5);
    }

    #[test]
    fn test_zero_direction() {
        let grid = grid_with(&[IVec3::ZERO]);
        assert!(Raycasting::raycast(&grid, Vec3::new(5.5, 0.5, 0.5), Vec3::ZERO, 20.0).is_none());
    }

    #[test]
    fn test_unbounded_range_returns_none() {
        let grid = grid_with(&[IVec3::new(3, 0, 0)]);
        let origin = Vec3::new(0.5, 0.5, 0.5);
        assert!(Raycasting::raycast(&grid, origin, Vec3::X, f32::INFINITY).is_none());
        assert!(Raycasting::raycast(&grid, origin, Vec3::X, f32::NAN).is_none());
        assert!(Raycasting::raycast(&grid, origin, Vec3::X, -1.0).is_none());
        assert!(Raycasting::raycast(&grid, Vec3::new(f32::NAN, 0.5, 0.5), Vec3::X, 20.0).is_none());
    }

    #[test]
    fn test_sky_ray_stops_at_range() {
        let grid = grid_with(&[IVec3::new(0, -1, 0)]);
        let origin = Vec3::new(0.5, 0.5, 0.5);
        assert!(Raycasting::raycast(&grid, origin, Vec3::new(0.3, 1.0, -0.2), 1_000.0).is_none());
    }

    #[test]
    fn test_long_diagonal_reaches_far_block() {
        // Every boundary crossing on all three axes fits in the step budget
        let grid = grid_with(&[IVec3::new(40, 40, 40)]);
        let origin = Vec3::new(0.5, 0.5, 0.5);
        let (hit, _) = Raycasting::raycast(&grid, origin, Vec3::ONE, 70.0).unwrap();
        assert_eq!(hit.block, IVec3::new(40, 40, 40));
    }

    #[test]
    fn test_origin_inside_block() {
        let grid = grid_with(&[IVec3::ZERO]);
        let (hit, _) =
            Raycasting::raycast(&grid, Vec3::new(0.5, 0.5, 0.5), Vec3::Y, 20.0).unwrap();
        assert_eq!(hit.block, IVec3::ZERO);
        assert_eq!(hit.distance, 0.0);
    }
}
