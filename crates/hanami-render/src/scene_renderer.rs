//! Composites the game state over the background into a frame

use crate::circle::fill_circle;
use crate::frame::Frame;
use crate::petal_shape::petal_points;
use crate::polygon::fill_polygon;
use hanami_core::{HanamiError, Result};
use hanami_sim::GameWorld;

/// Owns the frame buffer and the prepared background
pub struct SceneRenderer {
    frame: Frame,
    background: Vec<u8>,
}

impl SceneRenderer {
    /// `background` must be RGBA8 at exactly `width` x `height`
    pub fn new(width: u32, height: u32, background: Vec<u8>) -> Result<Self> {
        let expected = (width * height * 4) as usize;
        if background.len() != expected {
            return Err(HanamiError::RenderError(format!(
                "background buffer is {} bytes, expected {expected}",
                background.len()
            )));
        }
        Ok(Self {
            frame: Frame::new(width, height),
            background,
        })
    }

    /// Rasterize the world: background, basket, petals, lava — in that
    /// order, matching how the scene layers visually.
    pub fn render(&mut self, world: &GameWorld) -> &Frame {
        self.frame.copy_from(&self.background);

        let catcher = &world.catcher;
        if catcher.alive {
            self.frame.fill_rect(catcher.bounding_box(), catcher.color);
        }

        for petal in &world.pool.petals {
            let outline = petal_points(petal.x, petal.y, petal.size, petal.rotation);
            fill_polygon(&mut self.frame, &outline, petal.color, petal.opacity as u8);
        }

        for particle in &world.pool.lava {
            fill_circle(
                &mut self.frame,
                particle.x,
                particle.y,
                particle.size,
                particle.color,
                particle.opacity as u8,
            );
        }

        &self.frame
    }
}
