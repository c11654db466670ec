//! Frame orchestration: input → spawn → advance → collide → reap

use crate::catcher::Catcher;
use crate::collision;
use crate::events::{EventQueue, GameEvent};
use crate::pool::{ParticlePool, LAVA_BATCH, PETAL_BATCH};
use crate::rand::SimRng;
use crate::scene::SceneConfig;
use crate::spawn::{resolve_click, SpawnAction};
use hanami_core::{Result, Vec2};

/// Everything the simulation consumes for one fixed step
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Pointer clicks since the last step, in playfield coordinates
    pub clicks: Vec<Vec2>,
    pub move_left: bool,
    pub move_right: bool,
}

/// The whole mutable game state. Owned exclusively by the caller of
/// `advance_frame`; nothing else writes it.
pub struct GameWorld {
    scene: SceneConfig,
    pub pool: ParticlePool,
    pub catcher: Catcher,
    score: u32,
    rng: SimRng,
    events: EventQueue,
}

impl GameWorld {
    /// Build a world from a validated scene. Validation failures are
    /// configuration errors and abort startup.
    pub fn new(scene: SceneConfig, seed: u32) -> Result<Self> {
        scene.validate()?;
        let catcher = Catcher::new(&scene.basket, &scene.playfield);
        Ok(Self {
            scene,
            pool: ParticlePool::new(),
            catcher,
            score: 0,
            rng: SimRng::new(seed),
            events: EventQueue::new(),
        })
    }

    pub fn scene(&self) -> &SceneConfig {
        &self.scene
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Drain the events emitted since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    /// Advance the simulation by one fixed step. Runs to completion —
    /// no suspension points, no recoverable errors.
    pub fn advance_frame(&mut self, input: &FrameInput) {
        for &click in &input.clicks {
            self.handle_click(click);
        }

        self.catcher
            .handle_input(input.move_left, input.move_right);

        self.pool.advance_all();

        let outcome = collision::resolve(&self.pool, &self.catcher);
        for &index in &outcome.petals_caught {
            let petal = &mut self.pool.petals[index];
            petal.consumed = true;
            self.score += 1;
            self.events.push(GameEvent::PetalCaught { color: petal.color });
        }
        if outcome.basket_struck {
            self.catcher.kill();
            self.events.push(GameEvent::BasketDestroyed);
        }

        // Removal happens last, after every collision has been recorded
        self.pool.reap(self.scene.playfield.height);
    }

    fn handle_click(&mut self, click: Vec2) {
        match resolve_click(&self.scene, click) {
            Some(SpawnAction::Petals { region }) => {
                let pink = region == self.scene.petals.pink_tree;
                let bounds = self.scene.trees[region].bounds;
                self.pool
                    .spawn_petals(&bounds, pink, PETAL_BATCH, &mut self.rng);
                self.events.push(GameEvent::PetalsSpawned {
                    region,
                    count: PETAL_BATCH,
                });
            }
            Some(SpawnAction::Lava) => {
                self.pool
                    .spawn_lava(self.scene.volcano.vent(), LAVA_BATCH, &mut self.rng);
                self.events.push(GameEvent::LavaSpawned { count: LAVA_BATCH });
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::petal::{Petal, PETAL_PINK, PETAL_WHITE};
    use crate::scene::RegionBounds;

    fn world() -> GameWorld {
        GameWorld::new(SceneConfig::default(), 0xDEAD_BEEF).unwrap()
    }

    fn idle() -> FrameInput {
        FrameInput::default()
    }

    fn click(x: f32, y: f32) -> FrameInput {
        FrameInput {
            clicks: vec![Vec2::new(x, y)],
            ..Default::default()
        }
    }

    /// A petal pinned to a fixed spot with no sway or fall
    fn pinned_petal(x: f32, y: f32, size: f32) -> Petal {
        let mut rng = SimRng::new(1);
        let mut p = Petal::spawn(&RegionBounds::new(0.0, 266.0, 0.0, 300.0), true, &mut rng);
        p.base_x = x;
        p.x = x;
        p.y = y;
        p.size = size;
        p.fall_speed = 0.0;
        p.sway_amplitude = 0.0;
        p
    }

    #[test]
    fn tree_click_spawns_ten_petals_of_region_color() {
        let mut w = world();
        w.advance_frame(&click(100.0, 100.0));
        assert_eq!(w.pool.petals.len(), 10);
        assert!(w.pool.petals.iter().all(|p| p.color == PETAL_PINK));

        w.advance_frame(&click(600.0, 200.0));
        assert_eq!(w.pool.petals.len(), 20);
        assert!(w.pool.petals[10..].iter().all(|p| p.color == PETAL_WHITE));
    }

    #[test]
    fn volcano_click_spawns_twenty_lava_at_vent() {
        let mut w = world();
        // Click position inside the volcano region but away from the vent
        w.advance_frame(&click(392.0, 298.0));
        assert_eq!(w.pool.lava.len(), 20);
        for p in &w.pool.lava {
            // Anchored to the vent (plus jitter and one advance), not the click
            assert!((p.x - 415.0).abs() <= 6.0);
        }
    }

    #[test]
    fn miss_click_spawns_nothing() {
        let mut w = world();
        w.advance_frame(&click(350.0, 500.0));
        assert!(w.pool.is_empty());
        assert!(w.drain_events().is_empty());
    }

    #[test]
    fn movement_and_clamping_through_frames() {
        let mut w = world();
        let input = FrameInput {
            move_right: true,
            ..Default::default()
        };
        for _ in 0..200 {
            w.advance_frame(&input);
        }
        assert_eq!(w.catcher.x, 800.0 - 100.0);
    }

    #[test]
    fn caught_petal_scores_once_and_is_removed() {
        let mut w = world();
        let (bx, by) = (w.catcher.x, w.catcher.y);
        w.pool.petals.push(pinned_petal(bx + 10.0, by + 5.0, 6.0));

        w.advance_frame(&idle());
        assert_eq!(w.score(), 1);
        assert!(w.pool.petals.is_empty());
        assert!(w
            .drain_events()
            .contains(&GameEvent::PetalCaught { color: PETAL_PINK }));
    }

    #[test]
    fn expiring_petal_is_removed_without_score() {
        let mut w = world();
        let mut p = pinned_petal(10.0, 599.0, 6.0);
        p.fall_speed = 2.0;
        w.pool.petals.push(p);

        w.advance_frame(&idle());
        assert_eq!(w.score(), 0);
        assert!(w.pool.petals.is_empty());
    }

    #[test]
    fn lava_strike_kills_basket_once() {
        let mut w = world();
        let (bx, by) = (w.catcher.x, w.catcher.y);
        let mut rng = SimRng::new(1);
        let mut lava = crate::lava::LavaParticle::spawn(Vec2::new(415.0, 280.0), &mut rng);
        lava.x = bx + 10.0;
        lava.y = by + 5.0;
        lava.drift = 0.0;
        lava.fall_speed = 0.0;
        w.pool.lava.push(lava);

        w.advance_frame(&idle());
        assert!(!w.catcher.alive);
        let events = w.drain_events();
        assert_eq!(
            events
                .iter()
                .filter(|e| **e == GameEvent::BasketDestroyed)
                .count(),
            1
        );
        // The striking particle is not consumed by the strike
        assert_eq!(w.pool.lava.len(), 1);

        // A second overlapping particle changes nothing further
        let mut second = crate::lava::LavaParticle::spawn(Vec2::new(415.0, 280.0), &mut rng);
        second.x = bx + 20.0;
        second.y = by + 5.0;
        second.drift = 0.0;
        second.fall_speed = 0.0;
        w.pool.lava.push(second);
        w.advance_frame(&idle());
        assert_eq!(w.score(), 0);
        assert!(!w.catcher.alive);
        assert!(w.drain_events().is_empty());
    }

    #[test]
    fn dead_basket_catches_nothing_and_ignores_input() {
        let mut w = world();
        w.catcher.kill();
        let x0 = w.catcher.x;
        let (bx, by) = (w.catcher.x, w.catcher.y);
        w.pool.petals.push(pinned_petal(bx + 10.0, by + 5.0, 6.0));

        let input = FrameInput {
            move_left: true,
            ..Default::default()
        };
        w.advance_frame(&input);
        assert_eq!(w.catcher.x, x0);
        assert_eq!(w.score(), 0);
        // The petal was not consumed; it is still falling (pinned here)
        assert_eq!(w.pool.petals.len(), 1);
    }

    #[test]
    fn multiple_catches_in_one_frame_all_score() {
        let mut w = world();
        let (bx, by) = (w.catcher.x, w.catcher.y);
        for i in 0..3 {
            w.pool
                .petals
                .push(pinned_petal(bx + 10.0 + i as f32, by + 5.0, 6.0));
        }
        w.advance_frame(&idle());
        assert_eq!(w.score(), 3);
        assert!(w.pool.petals.is_empty());
    }

    #[test]
    fn score_is_monotonic() {
        let mut w = world();
        let mut last = 0;
        w.advance_frame(&click(100.0, 100.0));
        for _ in 0..600 {
            w.advance_frame(&idle());
            assert!(w.score() >= last);
            last = w.score();
        }
    }

    #[test]
    fn invalid_scene_rejected_at_construction() {
        let mut scene = SceneConfig::default();
        scene.trees[0].bounds.min_x = 500.0; // inverted
        assert!(GameWorld::new(scene, 1).is_err());
    }

    #[test]
    fn simulation_drains_after_a_burst() {
        let mut w = world();
        w.advance_frame(&click(100.0, 100.0));
        w.advance_frame(&click(400.0, 270.0));
        assert!(!w.pool.is_empty());
        // Petals fade at 0.3/frame from at most 255, lava at 2/frame;
        // everything is gone well inside 900 frames.
        for _ in 0..900 {
            w.advance_frame(&idle());
        }
        assert!(w.pool.is_empty());
    }
}
