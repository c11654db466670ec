//! Hanami Render - drawing services and presentation
//!
//! The scene is rasterized on the CPU into an RGBA frame:
//! - Background image blit (decoded and resized once at startup)
//! - Alpha-blended scanline polygon fill for petal silhouettes
//! - Alpha-blended filled circles for lava
//! - Opaque rect fill for the basket
//!
//! The finished frame is uploaded to a wgpu texture every redraw and
//! blitted to the window surface with a fullscreen triangle; text is
//! drawn on top by the player's egui overlay.

mod background;
mod blit;
mod circle;
mod context;
mod frame;
mod petal_shape;
mod polygon;
mod scene_renderer;

pub use background::load_background;
pub use blit::BlitPipeline;
pub use circle::fill_circle;
pub use context::{RenderContext, RenderError};
pub use frame::Frame;
pub use petal_shape::petal_points;
pub use polygon::fill_polygon;
pub use scene_renderer::SceneRenderer;
