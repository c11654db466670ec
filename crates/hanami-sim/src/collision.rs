//! Per-frame catcher/particle intersection pass

use crate::catcher::Catcher;
use crate::pool::ParticlePool;

/// Everything the collision pass decided this frame. Collected first,
/// applied afterwards, so every particle is tested before any removal.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CollisionOutcome {
    /// Indices into the pool's petal collection, in pool order
    pub petals_caught: Vec<usize>,
    /// At least one lava particle hit the basket
    pub basket_struck: bool,
}

/// Test the catcher against every live particle. Only evaluated while the
/// catcher is alive; afterwards nothing collides with it. The lava
/// particles themselves are untouched here — a strike does not consume
/// them, they expire on their own.
pub fn resolve(pool: &ParticlePool, catcher: &Catcher) -> CollisionOutcome {
    let mut outcome = CollisionOutcome::default();
    if !catcher.alive {
        return outcome;
    }

    let basket = catcher.bounding_box();

    for (index, petal) in pool.petals.iter().enumerate() {
        if petal.bounding_box().intersects(&basket) {
            outcome.petals_caught.push(index);
        }
    }

    for particle in &pool.lava {
        if particle.bounding_box().intersects(&basket) {
            outcome.basket_struck = true;
            break;
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::SimRng;
    use crate::scene::{RegionBounds, SceneConfig};
    use hanami_core::Vec2;

    fn setup() -> (ParticlePool, Catcher) {
        let scene = SceneConfig::default();
        (
            ParticlePool::new(),
            Catcher::new(&scene.basket, &scene.playfield),
        )
    }

    fn region() -> RegionBounds {
        RegionBounds::new(0.0, 266.0, 0.0, 300.0)
    }

    #[test]
    fn petal_on_basket_is_caught() {
        let (mut pool, catcher) = setup();
        let mut rng = SimRng::new(2);
        pool.spawn_petals(&region(), true, 1, &mut rng);
        pool.petals[0].x = catcher.x + 10.0;
        pool.petals[0].y = catcher.y + 5.0;

        let outcome = resolve(&pool, &catcher);
        assert_eq!(outcome.petals_caught, vec![0]);
        assert!(!outcome.basket_struck);
    }

    #[test]
    fn distant_petal_is_not_caught() {
        let (mut pool, catcher) = setup();
        let mut rng = SimRng::new(2);
        pool.spawn_petals(&region(), true, 1, &mut rng);
        pool.petals[0].x = 0.0;
        pool.petals[0].y = 0.0;

        let outcome = resolve(&pool, &catcher);
        assert!(outcome.petals_caught.is_empty());
    }

    #[test]
    fn lava_on_basket_strikes() {
        let (mut pool, catcher) = setup();
        let mut rng = SimRng::new(2);
        pool.spawn_lava(Vec2::new(415.0, 280.0), 1, &mut rng);
        pool.lava[0].x = catcher.x + 10.0;
        pool.lava[0].y = catcher.y + 5.0;

        let outcome = resolve(&pool, &catcher);
        assert!(outcome.basket_struck);
    }

    #[test]
    fn dead_catcher_collides_with_nothing() {
        let (mut pool, mut catcher) = setup();
        let mut rng = SimRng::new(2);
        pool.spawn_petals(&region(), true, 1, &mut rng);
        pool.petals[0].x = catcher.x;
        pool.petals[0].y = catcher.y;
        pool.spawn_lava(Vec2::new(415.0, 280.0), 1, &mut rng);
        pool.lava[0].x = catcher.x;
        pool.lava[0].y = catcher.y;

        catcher.kill();
        let outcome = resolve(&pool, &catcher);
        assert_eq!(outcome, CollisionOutcome::default());
    }

    #[test]
    fn multiple_catches_in_one_frame() {
        let (mut pool, catcher) = setup();
        let mut rng = SimRng::new(2);
        pool.spawn_petals(&region(), true, 3, &mut rng);
        for petal in &mut pool.petals {
            petal.x = catcher.x + 20.0;
            petal.y = catcher.y + 10.0;
        }
        let outcome = resolve(&pool, &catcher);
        assert_eq!(outcome.petals_caught, vec![0, 1, 2]);
    }
}
