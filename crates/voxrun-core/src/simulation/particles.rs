//! Visual-only particle system for block debris and jump puffs.
//! Particles never collide and nothing else reads them.

use glam::Vec3;

use crate::world::WorldRng;

/// White puff left behind by a double jump
pub const PUFF_COLOR: [u8; 3] = [0xff, 0xff, 0xff];

/// A single visual particle
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub color: [u8; 3],
    /// Starts at 1.0; the particle is gone once it reaches zero
    pub life: f32,
    /// Euler angles, purely cosmetic
    pub rotation: Vec3,
}

impl Particle {
    pub fn new(position: Vec3, velocity: Vec3, color: [u8; 3]) -> Self {
        Self {
            position,
            velocity,
            color,
            life: 1.0,
            rotation: Vec3::ZERO,
        }
    }

    /// Render scale, shrinking with remaining life
    pub fn scale(&self) -> f32 {
        self.life.max(0.0)
    }

    /// Check if particle is still alive
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

/// Manages a collection of visual particles
pub struct ParticleSystem {
    particles: Vec<Particle>,
    max_particles: usize,
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_PARTICLES)
    }
}

impl ParticleSystem {
    const DEFAULT_MAX_PARTICLES: usize = 512;

    /// Life lost per second
    const DECAY_RATE: f32 = 2.0;
    /// Fraction of world gravity applied to particles
    const GRAVITY_SCALE: f32 = 0.5;
    /// Radians per second on x and y
    const SPIN_RATE: f32 = 6.0;

    /// Horizontal velocity spread, per axis
    const SPREAD: f32 = 2.5;
    /// Upward bias of the initial vertical velocity
    const LIFT: f32 = 2.0;

    pub fn new(max_particles: usize) -> Self {
        Self {
            particles: Vec::with_capacity(max_particles.min(Self::DEFAULT_MAX_PARTICLES)),
            max_particles,
        }
    }

    /// Spawn `count` particles at `position` with randomized, upward-biased velocity
    pub fn spawn(&mut self, position: Vec3, count: usize, color: [u8; 3], rng: &mut dyn WorldRng) {
        for _ in 0..count {
            let velocity = Vec3::new(
                rng.gen_spread(Self::SPREAD),
                Self::LIFT + rng.gen_spread(Self::SPREAD),
                rng.gen_spread(Self::SPREAD),
            );
            self.push(Particle::new(position, velocity, color));
        }
    }

    /// Add one particle, dropping the oldest when at capacity
    pub fn push(&mut self, particle: Particle) {
        if self.max_particles == 0 {
            return;
        }
        if self.particles.len() >= self.max_particles {
            self.particles.remove(0);
        }
        self.particles.push(particle);
    }

    /// Age, move and spin every particle, then drop the expired ones
    pub fn tick(&mut self, dt: f32, gravity: f32) {
        for particle in &mut self.particles {
            particle.life -= Self::DECAY_RATE * dt;
            particle.velocity.y -= gravity * Self::GRAVITY_SCALE * dt;
            particle.position += particle.velocity * dt;
            particle.rotation.x += Self::SPIN_RATE * dt;
            particle.rotation.y += Self::SPIN_RATE * dt;
        }

        self.particles.retain(Particle::is_alive);
    }

    /// Iterate over all active particles
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    const GRAVITY: f32 = 25.0;

    #[test]
    fn test_spawn_velocity_bounds() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(5);
        let mut system = ParticleSystem::default();

        system.spawn(Vec3::new(1.0, 2.0, 0.0), 200, PUFF_COLOR, &mut rng);

        assert_eq!(system.len(), 200);
        for p in system.iter() {
            assert_eq!(p.life, 1.0);
            assert_eq!(p.position, Vec3::new(1.0, 2.0, 0.0));
            assert!(p.velocity.x.abs() <= 2.5);
            assert!(p.velocity.z.abs() <= 2.5);
            assert!(p.velocity.y >= -0.5 && p.velocity.y <= 4.5);
        }
    }

    #[test]
    fn test_particle_expires_after_two_large_ticks() {
        let mut system = ParticleSystem::default();
        system.push(Particle::new(Vec3::ZERO, Vec3::ZERO, PUFF_COLOR));

        system.tick(0.6, GRAVITY);
        system.tick(0.6, GRAVITY);

        assert!(system.is_empty());
    }

    #[test]
    fn test_particle_lifecycle() {
        let mut system = ParticleSystem::default();
        system.push(Particle::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), PUFF_COLOR));

        system.tick(0.3, GRAVITY);
        assert_eq!(system.len(), 1);
        let p = system.iter().next().unwrap();
        assert!((p.life - 0.4).abs() < 1e-6);
        assert!((p.scale() - 0.4).abs() < 1e-6);
        assert!(p.velocity.y < 0.0);
        assert!(p.position.x > 0.0);
        assert!(p.rotation.x > 0.0);

        system.tick(0.3, GRAVITY);
        assert!(system.is_empty());
    }

    #[test]
    fn test_life_exactly_zero_is_removed() {
        let mut system = ParticleSystem::default();
        system.push(Particle::new(Vec3::ZERO, Vec3::ZERO, PUFF_COLOR));
        system.tick(0.5, GRAVITY);
        assert!(system.is_empty());
    }

    #[test]
    fn test_max_capacity() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(5);
        let mut system = ParticleSystem::new(16);

        system.spawn(Vec3::ZERO, 10, PUFF_COLOR, &mut rng);
        system.spawn(Vec3::ONE, 10, [1, 2, 3], &mut rng);

        assert_eq!(system.len(), 16);
        // The oldest ones went first
        assert_eq!(system.iter().filter(|p| p.color == PUFF_COLOR).count(), 6);
    }
}
