//! Filled circle rasterization

use crate::frame::Frame;
use hanami_core::Color;

/// Fill a circle by horizontal spans, one blended write per pixel
pub fn fill_circle(frame: &mut Frame, cx: f32, cy: f32, radius: f32, color: Color, alpha: u8) {
    if radius <= 0.0 || alpha == 0 {
        return;
    }
    let cx_i = cx.round() as i32;
    let cy_i = cy.round() as i32;
    let r = radius.round() as i32;
    for dy in -r..=r {
        let half = ((r * r - dy * dy) as f32).sqrt() as i32;
        frame.blend_hline(cx_i - half, cx_i + half, cy_i + dy, color, alpha);
    }
}
