//! Particle pool and gameplay effect presets
//!
//! The pool is bounded; emit requests past capacity are dropped, never queued.
//! Randomness comes from a seeded PCG stream so effects replay identically.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::particle::{Particle, ParticleKind};
use crate::consts::{MAX_PARTICLES, TILE_SIZE};
use crate::renderer::ParticleRenderer;

/// Offset from a one-tile entity's top-left corner to its center
const HALF_TILE: Vec2 = Vec2::splat(TILE_SIZE / 2.0);

/// Gameplay events that have a particle effect bound to them.
/// Positions are the top-left corner of the entity involved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    CoinCollected { pos: Vec2 },
    EnemyDefeated { pos: Vec2 },
    PlayerLanded { pos: Vec2 },
    BlockBroken { pos: Vec2 },
    PowerUpCollected { pos: Vec2 },
    BossHit { pos: Vec2 },
}

/// Owns every live particle
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    capacity: usize,
    rng: Pcg32,
}

impl ParticleSystem {
    /// Pool with the default capacity
    pub fn new(seed: u64) -> Self {
        Self::with_capacity(seed, MAX_PARTICLES)
    }

    /// Pool limited to `capacity`, clamped to `MAX_PARTICLES`
    pub fn with_capacity(seed: u64, capacity: usize) -> Self {
        let capacity = capacity.min(MAX_PARTICLES);
        Self {
            particles: Vec::with_capacity(capacity),
            capacity,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the pool limit (clamped to `MAX_PARTICLES`).
    /// Shrinking drops the newest particles.
    pub fn set_capacity(&mut self, capacity: usize) {
        let capacity = capacity.min(MAX_PARTICLES);
        self.capacity = capacity;
        self.particles.truncate(capacity);
    }

    /// Live particles in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Spawn up to `count` particles of `kind` jittered within a square of side
    /// `spread * TILE_SIZE` centered on `pos`. Returns how many were spawned.
    pub fn emit(&mut self, pos: Vec2, count: usize, kind: ParticleKind, spread: f32) -> usize {
        let available = self.capacity.saturating_sub(self.particles.len());
        let spawned = count.min(available);
        if spawned < count {
            log::debug!(
                "Particle pool full: dropped {} of {} {:?}",
                count - spawned,
                count,
                kind
            );
        }

        let side = spread * TILE_SIZE;
        for _ in 0..spawned {
            let jitter = Vec2::new(
                (self.rng.random::<f32>() - 0.5) * side,
                (self.rng.random::<f32>() - 0.5) * side,
            );
            let mut particle = Particle::spawn(pos + jitter, kind, &mut self.rng);
            particle.apply_profile();
            self.particles.push(particle);
        }
        spawned
    }

    /// Advance every particle one frame and drop the dead ones.
    /// Survivors keep their relative order.
    pub fn update(&mut self, dt: f32) {
        self.particles.retain_mut(|p| p.update(dt));
        log::trace!("{} particles live", self.particles.len());
    }

    pub fn render<R: ParticleRenderer + ?Sized>(&self, renderer: &mut R) {
        for particle in &self.particles {
            renderer.draw_particle(particle);
        }
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn coin_collected(&mut self, pos: Vec2) {
        let center = pos + HALF_TILE;
        self.emit(center, 8, ParticleKind::Coin, 1.0);
        self.emit(center, 3, ParticleKind::Spark, 0.5);
    }

    pub fn enemy_defeated(&mut self, pos: Vec2) {
        let center = pos + HALF_TILE;
        self.emit(center, 10, ParticleKind::Enemy, 1.0);
        self.emit(center, 5, ParticleKind::Dust, 0.75);
    }

    /// Dust puff at the feet
    pub fn player_land(&mut self, pos: Vec2) {
        let feet = pos + Vec2::new(TILE_SIZE / 2.0, TILE_SIZE);
        self.emit(feet, 5, ParticleKind::Dust, 0.75);
    }

    pub fn block_break(&mut self, pos: Vec2) {
        let center = pos + HALF_TILE;
        self.emit(center, 12, ParticleKind::Break, 1.0);
        self.emit(center, 4, ParticleKind::Dust, 0.5);
    }

    pub fn power_up_collected(&mut self, pos: Vec2) {
        let center = pos + HALF_TILE;
        self.emit(center, 15, ParticleKind::PowerUp, 1.5);
        self.emit(center, 5, ParticleKind::Spark, 1.0);
    }

    /// Bosses are two tiles square
    pub fn boss_hit(&mut self, pos: Vec2) {
        let center = pos + Vec2::splat(TILE_SIZE);
        self.emit(center, 20, ParticleKind::Spark, 2.0);
        self.emit(center, 10, ParticleKind::Enemy, 1.5);
    }

    /// Play the effect bound to a gameplay event
    pub fn handle_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::CoinCollected { pos } => self.coin_collected(pos),
            GameEvent::EnemyDefeated { pos } => self.enemy_defeated(pos),
            GameEvent::PlayerLanded { pos } => self.player_land(pos),
            GameEvent::BlockBroken { pos } => self.block_break(pos),
            GameEvent::PowerUpCollected { pos } => self.power_up_collected(pos),
            GameEvent::BossHit { pos } => self.boss_hit(pos),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAME_MS;
    use crate::renderer::RecordingRenderer;
    use proptest::prelude::*;

    fn count_kind(system: &ParticleSystem, kind: ParticleKind) -> usize {
        system.iter().filter(|p| p.kind == kind).count()
    }

    #[test]
    fn test_emit_spark_forced_upward() {
        let mut system = ParticleSystem::new(1);
        assert_eq!(system.emit(Vec2::ZERO, 5, ParticleKind::Spark, 1.0), 5);
        assert_eq!(system.len(), 5);
        for p in system.iter() {
            assert_eq!(p.gravity, 0.2);
            assert!(p.vel.y <= 0.0);
            assert!(p.vel.x.abs() <= 4.0);
            // Jitter stays inside the spread square
            assert!(p.pos.x.abs() <= 8.0 && p.pos.y.abs() <= 8.0);
        }
    }

    #[test]
    fn test_emit_respects_capacity() {
        let mut system = ParticleSystem::new(2);
        assert_eq!(system.emit(Vec2::ZERO, 150, ParticleKind::Dust, 1.0), 150);
        assert_eq!(system.emit(Vec2::ZERO, 150, ParticleKind::Dust, 1.0), 50);
        assert_eq!(system.len(), MAX_PARTICLES);
        assert_eq!(system.emit(Vec2::ZERO, 1, ParticleKind::Dust, 1.0), 0);
        assert_eq!(system.len(), MAX_PARTICLES);
    }

    #[test]
    fn test_capacity_never_above_pool_cap() {
        let mut system = ParticleSystem::with_capacity(1, 1000);
        assert_eq!(system.capacity(), MAX_PARTICLES);
        assert_eq!(system.emit(Vec2::ZERO, 350, ParticleKind::Dust, 1.0), MAX_PARTICLES);
        assert_eq!(system.len(), MAX_PARTICLES);

        system.clear();
        system.set_capacity(usize::MAX);
        assert_eq!(system.capacity(), MAX_PARTICLES);
        system.emit(Vec2::ZERO, 500, ParticleKind::Spark, 1.0);
        assert_eq!(system.len(), MAX_PARTICLES);
    }

    #[test]
    fn test_coin_collected_preset() {
        let mut system = ParticleSystem::new(3);
        system.coin_collected(Vec2::ZERO);
        assert_eq!(system.len(), 11);
        assert_eq!(count_kind(&system, ParticleKind::Coin), 8);
        assert_eq!(count_kind(&system, ParticleKind::Spark), 3);
        // Centered on the tile
        for p in system.iter() {
            assert!((0.0..=16.0).contains(&p.pos.x));
            assert!((0.0..=16.0).contains(&p.pos.y));
        }
    }

    #[test]
    fn test_presets_emit_expected_counts() {
        let cases: [(GameEvent, usize); 6] = [
            (GameEvent::CoinCollected { pos: Vec2::ZERO }, 11),
            (GameEvent::EnemyDefeated { pos: Vec2::ZERO }, 15),
            (GameEvent::PlayerLanded { pos: Vec2::ZERO }, 5),
            (GameEvent::BlockBroken { pos: Vec2::ZERO }, 16),
            (GameEvent::PowerUpCollected { pos: Vec2::ZERO }, 20),
            (GameEvent::BossHit { pos: Vec2::ZERO }, 30),
        ];
        for (event, expected) in cases {
            let mut system = ParticleSystem::new(4);
            system.handle_event(event);
            assert_eq!(system.len(), expected, "{:?}", event);
        }
    }

    #[test]
    fn test_dead_particles_removed_and_not_rendered() {
        let mut system = ParticleSystem::new(5);
        system.emit(Vec2::ZERO, 3, ParticleKind::Default, 1.0);
        system.particles[1].life = 0.0;
        let survivors: Vec<Vec2> = [0, 2].iter().map(|&i| system.particles[i].pos).collect();

        system.update(FRAME_MS);
        assert_eq!(system.len(), 2);

        // Order of survivors is preserved
        let mut renderer = RecordingRenderer::new();
        system.render(&mut renderer);
        assert_eq!(renderer.drawn.len(), 2);
        for (drawn, before) in renderer.drawn.iter().zip(&survivors) {
            assert!((drawn.pos - *before).length() < 10.0);
        }
        assert_eq!(renderer.drawn[0].pos, system.particles[0].pos);
    }

    #[test]
    fn test_adjacent_dead_particles_all_removed() {
        let mut system = ParticleSystem::new(6);
        system.emit(Vec2::ZERO, 6, ParticleKind::Default, 1.0);
        for i in [1, 2, 3] {
            system.particles[i].size = 0.05;
        }
        system.update(FRAME_MS);
        assert_eq!(system.len(), 3);
        assert!(system.iter().all(|p| p.size > 0.1));
    }

    #[test]
    fn test_particles_expire() {
        let mut system = ParticleSystem::new(7);
        system.power_up_collected(Vec2::ZERO);
        // PowerUp particles live two seconds
        for _ in 0..200 {
            system.update(FRAME_MS);
        }
        assert!(system.is_empty());
    }

    #[test]
    fn test_clear_and_set_capacity() {
        let mut system = ParticleSystem::new(8);
        system.emit(Vec2::ZERO, 50, ParticleKind::Break, 1.0);
        system.set_capacity(20);
        assert_eq!(system.len(), 20);
        assert_eq!(system.capacity(), 20);
        system.clear();
        assert!(system.is_empty());
    }

    #[test]
    fn test_same_seed_same_effects() {
        let mut a = ParticleSystem::new(99);
        let mut b = ParticleSystem::new(99);
        a.block_break(Vec2::new(32.0, 48.0));
        b.block_break(Vec2::new(32.0, 48.0));
        for _ in 0..10 {
            a.update(FRAME_MS);
            b.update(FRAME_MS);
        }
        assert!(a.iter().eq(b.iter()));
    }

    proptest! {
        #[test]
        fn pool_never_exceeds_capacity(
            requests in proptest::collection::vec((0usize..120, 0usize..7), 1..30),
        ) {
            let mut system = ParticleSystem::new(11);
            for (count, kind) in requests {
                system.emit(Vec2::ZERO, count, ParticleKind::ALL[kind], 1.0);
                prop_assert!(system.len() <= MAX_PARTICLES);
                system.update(FRAME_MS);
                prop_assert!(system.len() <= MAX_PARTICLES);
            }
        }
    }
}
