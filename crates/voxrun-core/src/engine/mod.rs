//! Engine - the frame-driven simulation loop and its session lifecycle
//!
//! The host drives everything: it feeds timestamps to [`Engine::frame`],
//! forwards input intents, and reads the world back for rendering.

mod clock;
mod host;
mod state;

pub use clock::FrameClock;
pub use host::{HostEvents, NoopHost};
pub use state::GameState;

use glam::{Vec2, Vec3};

use crate::config::GameConfig;
use crate::entity::{InputState, LookState, Player};
use crate::simulation::particles::PUFF_COLOR;
use crate::simulation::{DestroyOutcome, DestroySystem, ParticleSystem, Stats};
use crate::world::{
    ChunkManager, CollisionResolver, JumpOutcome, PlayerPhysicsSystem, RayHit, Raycasting,
    VoxelGrid, session_rng,
};

/// Owns the session state and runs it frame by frame
pub struct Engine {
    config: GameConfig,

    /// Fixed seed for every session's rng (None = OS entropy)
    seed: Option<u64>,

    /// Sessions started so far; zero until the first `lock`
    sessions: u32,

    state: GameState,

    /// Dropped on dispose
    host: Option<Box<dyn HostEvents>>,

    active: bool,
    dead: bool,
    disposed: bool,

    input: InputState,
    look: LookState,
    clock: FrameClock,
}

impl Engine {
    /// Create an engine with an entropy-seeded world
    pub fn new(config: GameConfig, host: Box<dyn HostEvents>) -> Self {
        Self::with_config(config, host, None)
    }

    /// Create an engine whose sessions draw from `seed` (None = OS entropy).
    /// With a fixed seed every session replays the same world. The first
    /// session's terrain is generated immediately so it can be drawn before
    /// `lock`.
    pub fn with_config(config: GameConfig, host: Box<dyn HostEvents>, seed: Option<u64>) -> Self {
        let state = GameState::new(&config, session_rng(seed));
        Self {
            config,
            seed,
            sessions: 0,
            state,
            host: Some(host),
            active: false,
            dead: false,
            disposed: false,
            input: InputState::default(),
            look: LookState::default(),
            clock: FrameClock::new(),
        }
    }

    /// Begin or resume play. Starts a fresh session after a death.
    pub fn lock(&mut self) {
        if self.disposed {
            return;
        }

        if self.sessions == 0 {
            self.sessions = 1;
            log::info!("Session {} started (seed {:?})", self.sessions, self.seed);
        } else if self.dead {
            self.restart();
        } else if !self.active {
            log::info!("Session {} resumed", self.sessions);
        }

        self.active = true;
    }

    /// Input capture was lost. Pauses a live session and tells the host.
    pub fn unlock(&mut self) {
        if self.disposed || self.dead || self.sessions == 0 {
            return;
        }

        self.active = false;
        log::info!("Session {} paused", self.sessions);
        if let Some(host) = self.host.as_mut() {
            host.on_unlock();
        }
    }

    fn restart(&mut self) {
        self.state = GameState::new(&self.config, session_rng(self.seed));
        self.dead = false;
        self.input = InputState::default();
        self.look.reset();
        self.sessions += 1;
        log::info!("Session {} started (seed {:?})", self.sessions, self.seed);
    }

    /// Stop for good: later calls do nothing and the host is released
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.active = false;
        self.host = None;
        log::info!(
            "Engine disposed after {} session(s), score {:.0}",
            self.sessions,
            self.state.stats.score
        );
    }

    /// Run one frame at host timestamp `now_ms`
    pub fn frame(&mut self, now_ms: f64) {
        if self.disposed {
            return;
        }
        let dt = self.clock.tick(now_ms);
        if self.active {
            self.step(dt);
        }
    }

    /// Run one active iteration with an explicit delta (clamped like `frame`)
    pub fn step(&mut self, dt: f32) {
        if !self.is_running() {
            return;
        }
        let dt = FrameClock::clamp(dt);
        let state = &mut self.state;

        // 1. Kinematics, then position integration interleaved with collision
        PlayerPhysicsSystem::update(&mut state.player, &self.input, dt, &self.config.player);
        CollisionResolver::integrate(&mut state.player, &state.grid, dt);
        log::trace!(
            "player pos={:?} vel={:?} ground={}",
            state.player.position,
            state.player.velocity,
            state.player.on_ground
        );

        // 2. Fall death ends the frame
        if state.player.position.y < self.config.world.fall_death_y {
            self.die();
            return;
        }

        // 3. Effects and terrain streaming
        state.particles.tick(dt, self.config.player.gravity);
        state.stream_terrain();

        // 4. Score
        state.stats.tick(dt, self.config.scoring.per_second);
        if let Some(host) = self.host.as_mut() {
            host.on_stats_update(&state.stats);
        }
    }

    fn die(&mut self) {
        self.dead = true;
        self.active = false;
        log::info!(
            "Session {} over at x={:.1}: score {:.0}, time {:.1}s",
            self.sessions,
            self.state.player.position.x,
            self.state.stats.score,
            self.state.stats.time
        );
        if let Some(host) = self.host.as_mut() {
            host.on_death();
        }
    }

    /// Replace the held movement intents
    pub fn set_input(&mut self, input: InputState) {
        if !self.disposed {
            self.input = input;
        }
    }

    /// Jump trigger: grounded jump, else the one airborne jump
    pub fn trigger_jump(&mut self) -> JumpOutcome {
        if !self.is_running() {
            return JumpOutcome::Ignored;
        }

        let state = &mut self.state;
        let outcome = PlayerPhysicsSystem::jump(&mut state.player, &self.config.player);
        if outcome == JumpOutcome::Double {
            state.particles.spawn(
                state.player.position,
                self.config.particles.double_jump_burst,
                PUFF_COLOR,
                state.rng.as_mut(),
            );
        }
        outcome
    }

    /// Destroy a block the caller already resolved a hit for
    pub fn destroy_block(&mut self, hit: RayHit) -> Option<DestroyOutcome> {
        if !self.is_running() {
            return None;
        }

        let state = &mut self.state;
        DestroySystem::destroy(
            &mut state.grid,
            &mut state.particles,
            &mut state.stats,
            state.rng.as_mut(),
            hit,
            &self.config,
        )
    }

    /// Cast a ray from `origin` along `direction` and destroy the first block hit
    pub fn destroy_at_aim(&mut self, origin: Vec3, direction: Vec3) -> Option<DestroyOutcome> {
        if !self.is_running() {
            return None;
        }

        let (hit, _) = Raycasting::raycast(
            &self.state.grid,
            origin,
            direction,
            self.config.world.max_destroy_distance,
        )?;
        self.destroy_block(hit)
    }

    /// Accumulate pointer movement
    pub fn add_look_delta(&mut self, movement: Vec2) {
        if !self.disposed {
            self.look.accumulate(movement);
        }
    }

    /// Current look delta, clamped to half the viewport
    pub fn mouse(&self) -> Vec2 {
        self.look.delta()
    }

    pub fn set_viewport(&mut self, viewport: Vec2) {
        if !self.disposed {
            self.look.set_viewport(viewport);
        }
    }

    fn is_running(&self) -> bool {
        self.active && !self.dead && !self.disposed
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Sessions started so far
    pub fn sessions(&self) -> u32 {
        self.sessions
    }

    pub fn grid(&self) -> &VoxelGrid {
        &self.state.grid
    }

    pub fn chunks(&self) -> &ChunkManager {
        &self.state.chunks
    }

    pub fn player(&self) -> &Player {
        &self.state.player
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.state.particles
    }

    pub fn stats(&self) -> &Stats {
        &self.state.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Engine {
        Engine::with_config(GameConfig::default(), Box::new(NoopHost), Some(7))
    }

    #[test]
    fn test_world_exists_before_lock() {
        let engine = Engine::new(GameConfig::default(), Box::new(NoopHost));
        assert!(!engine.is_active());
        assert_eq!(engine.sessions(), 0);
        assert!(!engine.grid().is_empty());
    }

    #[test]
    fn test_frames_before_lock_do_nothing() {
        let mut engine = engine();
        let start = engine.player().position;

        for i in 0..10 {
            engine.frame(i as f64 * 16.0);
        }

        assert_eq!(engine.player().position, start);
        assert_eq!(engine.stats().time, 0.0);
    }

    #[test]
    fn test_first_frame_after_lock_has_zero_dt() {
        let mut engine = engine();
        engine.lock();
        engine.frame(10_000.0);
        assert_eq!(engine.stats().time, 0.0);

        engine.frame(10_050.0);
        assert!((engine.stats().time - 0.05).abs() < 1e-5);
    }

    #[test]
    fn test_step_clamps_delta() {
        let mut engine = engine();
        engine.lock();
        engine.step(3.0);
        assert!((engine.stats().time - FrameClock::MAX_DT).abs() < 1e-6);
    }

    #[test]
    fn test_actions_ignored_while_inactive() {
        let mut engine = engine();
        assert_eq!(engine.trigger_jump(), JumpOutcome::Ignored);
        assert!(engine.destroy_at_aim(Vec3::new(0.5, 5.0, 0.5), Vec3::NEG_Y).is_none());
    }

    #[test]
    fn test_seeded_engines_share_terrain() {
        let a = engine();
        let b = engine();
        assert_eq!(a.grid().len(), b.grid().len());
        for (pos, block) in a.grid().iter() {
            assert_eq!(b.grid().get(pos), Some(block));
        }
    }

    #[test]
    fn test_seeded_restart_replays_construction_world() {
        let mut engine = engine();
        let initial: Vec<_> = engine.grid().iter().collect();

        engine.lock();
        engine.step(0.0);
        engine.die();
        engine.lock();

        assert_eq!(engine.sessions(), 2);
        assert_eq!(engine.grid().len(), initial.len());
        for (pos, block) in initial {
            assert_eq!(engine.grid().get(pos), Some(block));
        }
    }

    #[test]
    fn test_look_delta_clamped_to_viewport() {
        let mut engine = engine();
        engine.set_viewport(Vec2::new(200.0, 100.0));
        engine.add_look_delta(Vec2::new(500.0, -20.0));
        assert_eq!(engine.mouse(), Vec2::new(100.0, -20.0));

        engine.set_viewport(Vec2::new(100.0, 100.0));
        assert_eq!(engine.mouse(), Vec2::new(50.0, -20.0));
    }
}
