//! Scripted intent source standing in for a human at the keyboard
//!
//! Runs right, hops over steps and holes, and shoots fragile blocks that come
//! within reach. It only sees what a player would: the grid and its own body.

use glam::{IVec3, Vec3};
use voxrun_core::entity::{InputState, Player};
use voxrun_core::world::{BlockType, PLAYFIELD_Z, SKIN, TerrainGenerator, VoxelGrid, cell_center};

/// One frame's worth of decisions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Command {
    pub input: InputState,
    pub jump: bool,
    /// Direction to fire the destroy action in, from the player's position
    pub aim: Option<Vec3>,
}

/// Stateful autopilot: remembers when it last fired
pub struct Autopilot {
    sprint: bool,
    frames_since_shot: u32,
}

impl Autopilot {
    /// Distance past the leading edge at which obstacles are considered
    const LOOKAHEAD: f32 = 0.6;
    /// Rows below the feet that still count as ground ahead
    const GAP_DEPTH: i32 = 3;
    /// Columns ahead scanned for fragile blocks
    const SHOT_RANGE: i32 = 4;
    /// Frames between two shots
    const SHOT_COOLDOWN: u32 = 30;

    pub fn new(sprint: bool) -> Self {
        Self {
            sprint,
            frames_since_shot: Self::SHOT_COOLDOWN,
        }
    }

    pub fn decide(&mut self, grid: &VoxelGrid, player: &Player) -> Command {
        let feet = player.feet().y;
        let feet_row = (feet + SKIN).floor() as i32;
        let head_row = (feet + 2.0 * Player::HALF_HEIGHT - SKIN).floor() as i32;
        let ahead_x = (player.position.x + Player::HALF_WIDTH + Self::LOOKAHEAD).floor() as i32;

        let blocked = (feet_row..=head_row).any(|y| grid.has(IVec3::new(ahead_x, y, PLAYFIELD_Z)));

        let jump = if player.on_ground {
            let step_up = TerrainGenerator::column_height(ahead_x) >= feet_row;
            let gap = !((feet_row - Self::GAP_DEPTH)..feet_row)
                .any(|y| grid.has(IVec3::new(ahead_x, y, PLAYFIELD_Z)));
            blocked || step_up || gap
        } else {
            // Still short of the ledge on the way down: spend the second jump
            blocked && player.can_double_jump && player.velocity.y < 0.0
        };

        let input = InputState::running(self.sprint && !blocked);

        self.frames_since_shot = self.frames_since_shot.saturating_add(1);
        let aim = if self.frames_since_shot >= Self::SHOT_COOLDOWN {
            self.find_target(grid, player, feet_row).map(|cell| {
                self.frames_since_shot = 0;
                cell_center(cell) - player.position
            })
        } else {
            None
        };

        Command { input, jump, aim }
    }

    /// Nearest fragile block ahead, between the feet and a few rows above them
    fn find_target(&self, grid: &VoxelGrid, player: &Player, feet_row: i32) -> Option<IVec3> {
        let x0 = player.position.x.floor() as i32;
        (x0..=x0 + Self::SHOT_RANGE)
            .flat_map(|x| (feet_row..=feet_row + 4).map(move |y| IVec3::new(x, y, PLAYFIELD_Z)))
            .find(|cell| grid.get(*cell) == Some(BlockType::Fragile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxrun_core::entity::Axis;

    fn floor() -> VoxelGrid {
        let mut grid = VoxelGrid::new();
        for x in -5..10 {
            grid.put(IVec3::new(x, 0, 0), BlockType::Grass);
        }
        grid
    }

    fn standing() -> Player {
        let mut player = Player::new(Vec3::new(0.5, 1.0 + Player::HALF_HEIGHT, 0.5));
        player.on_ground = true;
        player
    }

    #[test]
    fn test_runs_right_on_flat_ground() {
        let mut pilot = Autopilot::new(true);
        let command = pilot.decide(&floor(), &standing());

        assert_eq!(command.input.lateral, Axis::Positive);
        assert!(command.input.sprint);
        assert!(!command.jump);
        assert!(command.aim.is_none());
    }

    #[test]
    fn test_jumps_at_wall() {
        let mut grid = floor();
        grid.put(IVec3::new(1, 1, 0), BlockType::Dirt);
        let mut pilot = Autopilot::new(true);

        let command = pilot.decide(&grid, &standing());

        assert!(command.jump);
        assert!(!command.input.sprint);
    }

    #[test]
    fn test_jumps_over_hole() {
        let mut grid = floor();
        grid.remove(IVec3::new(1, 0, 0));
        let mut pilot = Autopilot::new(false);

        assert!(pilot.decide(&grid, &standing()).jump);
    }

    #[test]
    fn test_double_jumps_when_falling_short() {
        let mut grid = floor();
        grid.put(IVec3::new(1, 2, 0), BlockType::Stone);
        let mut player = Player::new(Vec3::new(0.5, 2.5, 0.5));
        player.velocity.y = -1.0;
        player.can_double_jump = true;
        let mut pilot = Autopilot::new(false);

        assert!(pilot.decide(&grid, &player).jump);

        player.can_double_jump = false;
        assert!(!pilot.decide(&grid, &player).jump);
    }

    #[test]
    fn test_shoots_fragile_with_cooldown() {
        let mut grid = floor();
        grid.put(IVec3::new(3, 3, 0), BlockType::Fragile);
        let player = standing();
        let mut pilot = Autopilot::new(false);

        let aim = pilot.decide(&grid, &player).aim.expect("target in range");
        assert_eq!(aim, cell_center(IVec3::new(3, 3, 0)) - player.position);

        // Cooling down
        assert!(pilot.decide(&grid, &player).aim.is_none());
    }

    #[test]
    fn test_ignores_fragile_out_of_range() {
        let mut grid = floor();
        grid.put(IVec3::new(8, 1, 0), BlockType::Fragile);
        let mut pilot = Autopilot::new(false);

        assert!(pilot.decide(&grid, &standing()).aim.is_none());
    }
}
