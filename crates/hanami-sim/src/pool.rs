//! Particle pool: owns the live petal and lava collections

use crate::lava::LavaParticle;
use crate::petal::Petal;
use crate::rand::SimRng;
use crate::scene::RegionBounds;
use hanami_core::Vec2;

/// Petals created per tree click
pub const PETAL_BATCH: usize = 10;
/// Lava particles created per volcano click
pub const LAVA_BATCH: usize = 20;

/// Owns both particle collections. Insertion order is irrelevant to
/// correctness; removal is a single compaction pass after all collision
/// checks for the frame, never removal mid-iteration.
#[derive(Default)]
pub struct ParticlePool {
    pub petals: Vec<Petal>,
    pub lava: Vec<LavaParticle>,
}

impl ParticlePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a batch of petals inside a tree region
    pub fn spawn_petals(
        &mut self,
        region: &RegionBounds,
        pink: bool,
        count: usize,
        rng: &mut SimRng,
    ) {
        self.petals.reserve(count);
        for _ in 0..count {
            self.petals.push(Petal::spawn(region, pink, rng));
        }
    }

    /// Spawn a batch of lava particles at the vent
    pub fn spawn_lava(&mut self, vent: Vec2, count: usize, rng: &mut SimRng) {
        self.lava.reserve(count);
        for _ in 0..count {
            self.lava.push(LavaParticle::spawn(vent, rng));
        }
    }

    /// Apply one kinematics step to every live particle
    pub fn advance_all(&mut self) {
        for petal in &mut self.petals {
            petal.advance();
        }
        for particle in &mut self.lava {
            particle.advance();
        }
    }

    /// Compact out consumed and expired particles. Must run after the
    /// frame's collision checks so a particle expiring and being struck
    /// in the same frame still registers its outcome.
    pub fn reap(&mut self, playfield_height: f32) {
        self.petals
            .retain(|p| !p.consumed && !p.expired(playfield_height));
        self.lava.retain(|p| !p.expired(playfield_height));
    }

    pub fn is_empty(&self) -> bool {
        self.petals.is_empty() && self.lava.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::petal::{PETAL_PINK, PETAL_WHITE};

    fn region() -> RegionBounds {
        RegionBounds::new(0.0, 266.0, 0.0, 300.0)
    }

    #[test]
    fn spawn_batch_counts() {
        let mut rng = SimRng::new(3);
        let mut pool = ParticlePool::new();
        pool.spawn_petals(&region(), true, PETAL_BATCH, &mut rng);
        pool.spawn_lava(Vec2::new(415.0, 280.0), LAVA_BATCH, &mut rng);
        assert_eq!(pool.petals.len(), 10);
        assert_eq!(pool.lava.len(), 20);
        assert!(pool.petals.iter().all(|p| p.color == PETAL_PINK));
    }

    #[test]
    fn white_batch() {
        let mut rng = SimRng::new(4);
        let mut pool = ParticlePool::new();
        pool.spawn_petals(&region(), false, PETAL_BATCH, &mut rng);
        assert!(pool.petals.iter().all(|p| p.color == PETAL_WHITE));
    }

    #[test]
    fn reap_removes_expired_and_consumed() {
        let mut rng = SimRng::new(9);
        let mut pool = ParticlePool::new();
        pool.spawn_petals(&region(), true, 4, &mut rng);

        pool.petals[0].y = 700.0; // below the playfield
        pool.petals[1].opacity = 0.0; // fully faded
        pool.petals[2].consumed = true; // caught this frame
        let survivor_x = pool.petals[3].base_x;

        pool.reap(600.0);
        assert_eq!(pool.petals.len(), 1);
        assert_eq!(pool.petals[0].base_x, survivor_x);
    }

    #[test]
    fn reap_keeps_survivors_in_order() {
        let mut rng = SimRng::new(10);
        let mut pool = ParticlePool::new();
        pool.spawn_petals(&region(), true, 6, &mut rng);
        let keep: Vec<f32> = pool
            .petals
            .iter()
            .enumerate()
            .filter(|(i, _)| i % 2 == 0)
            .map(|(_, p)| p.base_x)
            .collect();
        for (i, p) in pool.petals.iter_mut().enumerate() {
            if i % 2 != 0 {
                p.consumed = true;
            }
        }
        pool.reap(600.0);
        let survivors: Vec<f32> = pool.petals.iter().map(|p| p.base_x).collect();
        assert_eq!(survivors, keep);
    }

    #[test]
    fn advance_all_touches_every_particle() {
        let mut rng = SimRng::new(12);
        let mut pool = ParticlePool::new();
        pool.spawn_petals(&region(), true, 5, &mut rng);
        pool.spawn_lava(Vec2::new(415.0, 280.0), 5, &mut rng);
        let petal_ys: Vec<f32> = pool.petals.iter().map(|p| p.y).collect();
        let lava_ys: Vec<f32> = pool.lava.iter().map(|p| p.y).collect();
        pool.advance_all();
        for (before, p) in petal_ys.iter().zip(&pool.petals) {
            assert!(p.y > *before);
        }
        for (before, p) in lava_ys.iter().zip(&pool.lava) {
            assert!(p.y > *before);
        }
    }
}
