//! Axis-separated collision between the player box and occupied cells
//!
//! Position is advanced on X and corrected, then advanced on Y and corrected.
//! Discrete and after the fact: a very fast diagonal move can clip a corner.

use glam::{IVec3, Vec3};
use smallvec::SmallVec;

use super::grid::VoxelGrid;
use crate::entity::player::Player;

/// Shrink applied to the box before computing overlapped cells, so a player
/// resting exactly on a face does not count as overlapping it.
pub const SKIN: f32 = 1e-3;

/// The only populated depth layer
pub const PLAYFIELD_Z: i32 = 0;

type Cells = SmallVec<[IVec3; 8]>;

/// Stateless collision resolver
pub struct CollisionResolver;

impl CollisionResolver {
    /// Occupied cells overlapped by a box centered at `center`
    pub fn overlapping_cells(grid: &VoxelGrid, center: Vec3, half: Vec3) -> Cells {
        let min = (center - half + Vec3::splat(SKIN)).floor().as_ivec3();
        let max = (center + half - Vec3::splat(SKIN)).floor().as_ivec3();

        let mut cells = Cells::new();
        for y in min.y..=max.y {
            for x in min.x..=max.x {
                let cell = IVec3::new(x, y, PLAYFIELD_Z);
                if grid.has(cell) {
                    cells.push(cell);
                }
            }
        }
        cells
    }

    /// Advance and correct on both axes, X first
    pub fn integrate(player: &mut Player, grid: &VoxelGrid, dt: f32) {
        Self::move_x(player, grid, dt);
        Self::move_y(player, grid, dt);
    }

    /// Advance along X and push out of any block entered
    pub fn move_x(player: &mut Player, grid: &VoxelGrid, dt: f32) {
        player.position.x += player.velocity.x * dt;

        let cells = Self::overlapping_cells(grid, player.position, Player::half_extents());
        if cells.is_empty() {
            return;
        }

        let hx = Player::HALF_WIDTH;
        let nearest_left = cells.iter().map(|c| c.x).min().unwrap_or_default();
        let nearest_right = cells.iter().map(|c| c.x).max().unwrap_or_default();

        let push_left = if player.velocity.x > 0.0 {
            true
        } else if player.velocity.x < 0.0 {
            false
        } else {
            // Not moving: leave through whichever face is closer
            let blocks_center = (nearest_left + nearest_right + 1) as f32 * 0.5;
            player.position.x < blocks_center
        };

        player.position.x = if push_left {
            nearest_left as f32 - hx
        } else {
            (nearest_right + 1) as f32 + hx
        };
        player.velocity.x = 0.0;
    }

    /// Advance along Y, land on or bump into blocks, and refresh `on_ground`
    pub fn move_y(player: &mut Player, grid: &VoxelGrid, dt: f32) {
        player.on_ground = false;
        player.position.y += player.velocity.y * dt;

        let cells = Self::overlapping_cells(grid, player.position, Player::half_extents());
        let hy = Player::HALF_HEIGHT;

        if cells.is_empty() {
            if player.velocity.y <= 0.0 && Self::is_supported(player, grid) {
                player.on_ground = true;
            }
            return;
        }

        if player.velocity.y > 0.0 {
            // Head hit the lowest bottom face
            let lowest = cells.iter().map(|c| c.y).min().unwrap_or_default();
            player.position.y = lowest as f32 - hy;
        } else {
            // Land on the highest top face
            let highest = cells.iter().map(|c| c.y).max().unwrap_or_default();
            player.position.y = (highest + 1) as f32 + hy;
            player.on_ground = true;
        }
        player.velocity.y = 0.0;
    }

    /// Whether a block sits directly under the player's feet
    pub fn is_supported(player: &Player, grid: &VoxelGrid) -> bool {
        let probe = player.position - Vec3::Y * (2.0 * SKIN);
        !Self::overlapping_cells(grid, probe, Player::half_extents()).is_empty()
    }
}
