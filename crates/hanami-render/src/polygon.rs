//! Scanline polygon fill

use crate::frame::Frame;
use hanami_core::{Color, Vec2};

/// Fill a closed polygon with an even-odd scanline pass, alpha blended.
/// Handles concave outlines; each covered pixel is blended exactly once.
pub fn fill_polygon(frame: &mut Frame, points: &[Vec2], color: Color, alpha: u8) {
    if points.len() < 3 || alpha == 0 {
        return;
    }

    let min_y = points.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
    let max_y = points.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);
    let y_start = (min_y.floor() as i32).max(0);
    let y_end = (max_y.ceil() as i32).min(frame.height() as i32 - 1);

    let mut crossings: Vec<f32> = Vec::with_capacity(points.len());

    for y in y_start..=y_end {
        // Sample at the pixel-row center
        let sy = y as f32 + 0.5;
        crossings.clear();

        for i in 0..points.len() {
            let a = points[i];
            let b = points[(i + 1) % points.len()];
            // Half-open span so a vertex on the scanline counts once
            if (a.y <= sy && sy < b.y) || (b.y <= sy && sy < a.y) {
                let t = (sy - a.y) / (b.y - a.y);
                crossings.push(a.x + t * (b.x - a.x));
            }
        }

        crossings.sort_by(|p, q| p.partial_cmp(q).unwrap_or(std::cmp::Ordering::Equal));

        for pair in crossings.chunks_exact(2) {
            // Pixels whose centers fall inside the span
            let x0 = (pair[0] - 0.5).ceil() as i32;
            let x1 = ((pair[1] - 0.5).ceil() as i32) - 1;
            if x1 >= x0 {
                frame.blend_hline(x0, x1, y, color, alpha);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit_count(frame: &Frame) -> usize {
        frame.pixels().chunks(4).filter(|p| p[0] > 0).count()
    }

    #[test]
    fn axis_aligned_square_covers_exact_pixels() {
        let mut frame = Frame::new(12, 12);
        let square = [
            Vec2::new(2.0, 2.0),
            Vec2::new(8.0, 2.0),
            Vec2::new(8.0, 8.0),
            Vec2::new(2.0, 8.0),
        ];
        fill_polygon(&mut frame, &square, Color::WHITE, 255);
        // Pixel centers (2.5..7.5) x (2.5..7.5): a 6x6 block
        assert_eq!(lit_count(&frame), 36);
        assert_eq!(frame.pixel(2, 2)[0], 255);
        assert_eq!(frame.pixel(7, 7)[0], 255);
        assert_eq!(frame.pixel(8, 8)[0], 0);
    }

    #[test]
    fn triangle_interior_and_exterior() {
        let mut frame = Frame::new(30, 30);
        let tri = [
            Vec2::new(15.0, 2.0),
            Vec2::new(27.0, 26.0),
            Vec2::new(3.0, 26.0),
        ];
        fill_polygon(&mut frame, &tri, Color::WHITE, 255);
        assert_eq!(frame.pixel(15, 15)[0], 255);
        assert_eq!(frame.pixel(2, 3)[0], 0);
        assert_eq!(frame.pixel(27, 3)[0], 0);
    }

    #[test]
    fn concave_polygon_leaves_notch_empty() {
        let mut frame = Frame::new(20, 20);
        // A "U" shape: the notch between the arms must stay unfilled
        let shape = [
            Vec2::new(2.0, 2.0),
            Vec2::new(6.0, 2.0),
            Vec2::new(6.0, 12.0),
            Vec2::new(12.0, 12.0),
            Vec2::new(12.0, 2.0),
            Vec2::new(16.0, 2.0),
            Vec2::new(16.0, 16.0),
            Vec2::new(2.0, 16.0),
        ];
        fill_polygon(&mut frame, &shape, Color::WHITE, 255);
        assert_eq!(frame.pixel(9, 5)[0], 0); // inside the notch
        assert_eq!(frame.pixel(4, 5)[0], 255); // left arm
        assert_eq!(frame.pixel(14, 5)[0], 255); // right arm
        assert_eq!(frame.pixel(9, 14)[0], 255); // base
    }

    #[test]
    fn off_screen_polygon_is_clipped_not_panicking() {
        let mut frame = Frame::new(10, 10);
        let tri = [
            Vec2::new(-20.0, -20.0),
            Vec2::new(40.0, -20.0),
            Vec2::new(5.0, 40.0),
        ];
        fill_polygon(&mut frame, &tri, Color::WHITE, 255);
        assert!(lit_count(&frame) > 0);
    }

    #[test]
    fn degenerate_inputs_are_ignored() {
        let mut frame = Frame::new(10, 10);
        fill_polygon(&mut frame, &[Vec2::new(1.0, 1.0)], Color::WHITE, 255);
        fill_polygon(
            &mut frame,
            &[Vec2::new(1.0, 1.0), Vec2::new(5.0, 5.0)],
            Color::WHITE,
            255,
        );
        assert_eq!(lit_count(&frame), 0);
    }
}
