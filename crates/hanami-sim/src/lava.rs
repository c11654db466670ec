//! Ejected lava particle: drifts, falls fast, fades quickly

use crate::rand::SimRng;
use hanami_core::{Color, Rect, Vec2};

pub const LAVA_COLOR: Color = Color::new(255, 50, 0);

const FADE_PER_FRAME: f32 = 2.0;

/// A lava particle. Motion is purely additive; no sway, no rotation.
#[derive(Debug, Clone)]
pub struct LavaParticle {
    pub x: f32,
    pub y: f32,
    /// Small signed horizontal drift
    pub drift: f32,
    pub fall_speed: f32,
    pub size: f32,
    /// 0..=255, monotonically non-increasing
    pub opacity: f32,
    pub color: Color,
}

impl LavaParticle {
    /// Draw a fully-populated particle at the vent, with horizontal jitter
    pub fn spawn(vent: Vec2, rng: &mut SimRng) -> Self {
        Self {
            x: vent.x + rng.range_i32(-5, 5) as f32,
            y: vent.y,
            drift: rng.range(-1.0, 1.0),
            fall_speed: rng.range(3.0, 6.0),
            size: rng.range_i32(4, 8) as f32,
            opacity: 255.0,
            color: LAVA_COLOR,
        }
    }

    /// One simulation step: drift, fall, fade. Always succeeds.
    pub fn advance(&mut self) {
        self.x += self.drift;
        self.y += self.fall_speed;
        self.opacity = (self.opacity - FADE_PER_FRAME).max(0.0);
    }

    pub fn bounding_box(&self) -> Rect {
        Rect::new(self.x, self.y, self.size, self.size)
    }

    /// Natural expiry: fell past the playfield or faded out entirely
    pub fn expired(&self, playfield_height: f32) -> bool {
        self.y > playfield_height || self.opacity <= 0.0
    }
}
