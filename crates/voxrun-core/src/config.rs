//! Tunable simulation parameters
//!
//! Every section has compiled defaults, so a RON document only needs the
//! fields it wants to change:
//!
//! ```ron
//! (player: (sprint_speed: 12.0), world: (view_distance: 5))
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Complete simulation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub player: PlayerConfig,

    #[serde(default)]
    pub world: WorldConfig,

    #[serde(default)]
    pub scoring: ScoringConfig,

    #[serde(default)]
    pub particles: ParticleConfig,
}

/// Player kinematics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Walking speed cap in units/sec
    pub move_speed: f32,
    /// Speed cap while sprinting in units/sec
    pub sprint_speed: f32,
    /// Downward acceleration in units/sec^2
    pub gravity: f32,
    /// Upward velocity applied by a grounded jump
    pub jump_force: f32,
    /// Exponential horizontal drag factor when no lateral input is held
    pub drag: f32,
    /// Where a fresh session places the player
    pub spawn: [f32; 3],
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: 6.0,
            sprint_speed: 10.0,
            gravity: 25.0,
            jump_force: 10.0,
            drag: 10.0,
            spawn: [0.5, 5.0, 0.5],
        }
    }
}

/// Terrain streaming and world bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Chunks kept generated ahead of the player's chunk
    pub view_distance: i32,
    /// Forget chunks this many indices behind the player (None = keep everything)
    pub evict_behind: Option<i32>,
    /// Falling below this height ends the session
    pub fall_death_y: f32,
    /// Maximum ray length for the destroy action
    pub max_destroy_distance: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            view_distance: 3,
            evict_behind: None,
            fall_death_y: -10.0,
            max_destroy_distance: 20.0,
        }
    }
}

/// Score accounting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Awarded per destroyed block
    pub block_destroyed: f32,
    /// Awarded per second while the session is active
    pub per_second: f32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            block_destroyed: 10.0,
            per_second: 10.0,
        }
    }
}

/// Cosmetic particle effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Live particle cap; the oldest particle is dropped when exceeded
    pub max_particles: usize,
    /// Debris spawned by a destroyed block
    pub destroy_burst: usize,
    /// Puff spawned by a double jump
    pub double_jump_burst: usize,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            max_particles: 512,
            destroy_burst: 8,
            double_jump_burst: 5,
        }
    }
}

impl GameConfig {
    /// Parse a RON document and validate it
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty RON (used to dump the effective config)
    pub fn to_ron_string(&self) -> String {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .unwrap_or_else(|e| format!("/* failed to serialize config: {e} */"))
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.player;
        positive("player.move_speed", p.move_speed)?;
        positive("player.sprint_speed", p.sprint_speed)?;
        if p.sprint_speed < p.move_speed {
            return Err(ConfigError::invalid(
                "player.sprint_speed",
                format!("{} is slower than move_speed {}", p.sprint_speed, p.move_speed),
            ));
        }
        positive("player.gravity", p.gravity)?;
        positive("player.jump_force", p.jump_force)?;
        non_negative("player.drag", p.drag)?;
        if !p.spawn.iter().all(|c| c.is_finite()) {
            return Err(ConfigError::invalid("player.spawn", "must be finite"));
        }

        let w = &self.world;
        if w.view_distance < 0 {
            return Err(ConfigError::invalid("world.view_distance", "must not be negative"));
        }
        if let Some(behind) = w.evict_behind {
            // The window keeps one chunk behind the player; evicting inside it
            // would regenerate that chunk every frame.
            if behind < 2 {
                return Err(ConfigError::invalid(
                    "world.evict_behind",
                    format!("{behind} would evict chunks inside the streaming window"),
                ));
            }
        }
        if !w.fall_death_y.is_finite() {
            return Err(ConfigError::invalid("world.fall_death_y", "must be finite"));
        }
        positive("world.max_destroy_distance", w.max_destroy_distance)?;

        non_negative("scoring.block_destroyed", self.scoring.block_destroyed)?;
        non_negative("scoring.per_second", self.scoring.per_second)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{value} is not a positive finite number")))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{value} is not a finite, non-negative number")))
    }
}
