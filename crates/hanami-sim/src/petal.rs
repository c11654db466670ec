//! Falling petal: swaying, rotating, slowly fading

use crate::rand::SimRng;
use crate::scene::RegionBounds;
use hanami_core::{Color, Rect};

pub const PETAL_PINK: Color = Color::new(255, 182, 193);
pub const PETAL_WHITE: Color = Color::new(255, 255, 255);

/// Opacity lost per frame. Fractional so a petal outlives several hundred
/// frames; the composited value floors at zero.
const FADE_PER_FRAME: f32 = 0.3;

/// A single petal. Everything except `x`, `y`, `phase`, `rotation` and
/// `opacity` is fixed at spawn time.
#[derive(Debug, Clone)]
pub struct Petal {
    /// Horizontal anchor the sway oscillates around
    pub base_x: f32,
    /// Current position, `x` derived from the sway each frame
    pub x: f32,
    pub y: f32,
    pub fall_speed: f32,
    pub size: f32,
    /// 0..=255, fades toward zero
    pub opacity: f32,
    /// Degrees
    pub rotation: f32,
    /// Degrees per frame, may be negative
    pub rotation_speed: f32,
    pub sway_amplitude: f32,
    pub sway_frequency: f32,
    /// Radians, advanced by `sway_frequency` each frame
    pub phase: f32,
    pub color: Color,
    /// Set by the frame loop when the basket catches this petal
    pub consumed: bool,
}

impl Petal {
    /// Draw a fully-populated petal inside a tree region
    pub fn spawn(region: &RegionBounds, pink: bool, rng: &mut SimRng) -> Self {
        let base_x = rng.range(region.min_x, region.max_x);
        let phase = rng.range(0.0, std::f32::consts::TAU);
        let sway_amplitude = rng.range(15.0, 35.0);
        Self {
            base_x,
            x: base_x + sway_amplitude * phase.sin(),
            y: rng.range(region.min_y, region.max_y),
            fall_speed: rng.range(1.0, 3.0),
            size: rng.range_i32(4, 7) as f32,
            opacity: rng.range_i32(180, 255) as f32,
            rotation: rng.range(0.0, 360.0),
            rotation_speed: rng.range(-2.0, 2.0),
            sway_amplitude,
            sway_frequency: rng.range(0.01, 0.03),
            phase,
            color: if pink { PETAL_PINK } else { PETAL_WHITE },
            consumed: false,
        }
    }

    /// One simulation step: fall, sway, rotate, fade. Always succeeds.
    pub fn advance(&mut self) {
        self.y += self.fall_speed;
        self.x = self.base_x + self.sway_amplitude * self.phase.sin();
        self.phase += self.sway_frequency;
        self.rotation += self.rotation_speed;
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
