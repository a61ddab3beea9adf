//! Player kinematics and the jump state machine

use crate::config::PlayerConfig;
use crate::entity::input::InputState;
use crate::entity::player::Player;

/// Result of a jump trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    /// Jumped off the ground
    Grounded,
    /// Spent the airborne jump; callers spawn the puff effect
    Double,
    /// Airborne with the double jump already used
    Ignored,
}

/// Player kinematics. Only touches velocity; position is integrated by the
/// collision resolver one axis at a time.
pub struct PlayerPhysicsSystem;

impl PlayerPhysicsSystem {
    /// Lateral acceleration as a multiple of the speed cap
    const ACCELERATION_FACTOR: f32 = 5.0;

    /// Update player velocity for one frame
    ///
    /// # Arguments
    /// * `player` - Mutable reference to player state
    /// * `input` - Held movement intents
    /// * `dt` - Delta time in seconds
    /// * `config` - Speeds, gravity and drag
    pub fn update(player: &mut Player, input: &InputState, dt: f32, config: &PlayerConfig) {
        let speed = if input.sprint {
            config.sprint_speed
        } else {
            config.move_speed
        };

        // 1. Horizontal: accelerate toward input, otherwise exponential drag
        if input.lateral.is_neutral() {
            player.velocity.x -= player.velocity.x * config.drag * dt;
        } else {
            player.velocity.x += input.lateral.value() * speed * dt * Self::ACCELERATION_FACTOR;
        }
        player.velocity.x = player.velocity.x.clamp(-speed, speed);

        // 2. Gravity, no terminal velocity
        player.velocity.y -= config.gravity * dt;
    }

    /// Apply a jump trigger
    pub fn jump(player: &mut Player, config: &PlayerConfig) -> JumpOutcome {
        if player.on_ground {
            player.velocity.y = config.jump_force;
            player.on_ground = false;
            player.can_double_jump = true;
            log::debug!("Player jumped at {:?}", player.position);
            JumpOutcome::Grounded
        } else if player.can_double_jump {
            player.velocity.y = config.jump_force * Player::DOUBLE_JUMP_FACTOR;
            player.can_double_jump = false;
            log::debug!("Player double jumped at {:?}", player.position);
            JumpOutcome::Double
        } else {
            JumpOutcome::Ignored
        }
    }
}
