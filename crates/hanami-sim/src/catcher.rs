//! Player-controlled basket

use crate::scene::{BasketConfig, Playfield};
use hanami_core::{Color, Rect};

pub const BASKET_COLOR: Color = Color::new(139, 69, 19);

/// The basket. Moves horizontally along the bottom of the playfield while
/// alive; the first lava strike kills it for good.
#[derive(Debug, Clone)]
pub struct Catcher {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub color: Color,
    pub alive: bool,
    max_x: f32,
}

impl Catcher {
    pub fn new(config: &BasketConfig, playfield: &Playfield) -> Self {
        let max_x = playfield.width - config.width;
        Self {
            x: config.start_x.clamp(0.0, max_x),
            y: playfield.height - config.height - config.bottom_margin,
            width: config.width,
            height: config.height,
            speed: config.speed,
            color: BASKET_COLOR,
            alive: true,
            max_x,
        }
    }

    /// Apply one input tick of movement, then clamp to the playfield.
    /// No-op once dead.
    pub fn handle_input(&mut self, left: bool, right: bool) {
        if !self.alive {
            return;
        }
        if left {
            self.x -= self.speed;
        }
        if right {
            self.x += self.speed;
        }
        self.x = self.x.clamp(0.0, self.max_x);
    }

    /// One-way transition; there is no resurrection
    pub fn kill(&mut self) {
        self.alive = false;
    }

    pub fn bounding_box(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}
