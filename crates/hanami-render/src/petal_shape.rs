//! Petal silhouette geometry

use hanami_core::Vec2;

/// The five-point asymmetric petal outline for a given position, size and
/// rotation. Local points are rotated about the silhouette's center, then
/// translated to the petal position.
pub fn petal_points(x: f32, y: f32, size: f32, rotation_deg: f32) -> [Vec2; 5] {
    let w = size;
    let h = size * 1.8;
    let local = [
        Vec2::new(0.5 * w, 0.0),
        Vec2::new(1.1 * w, 0.3 * h),
        Vec2::new(0.7 * w, h),
        Vec2::new(0.3 * w, h),
        Vec2::new(-0.1 * w, 0.3 * h),
    ];

    let (cx, cy) = (w / 2.0, h / 2.0);
    let rad = rotation_deg.to_radians();
    let (sin, cos) = rad.sin_cos();

    local.map(|p| {
        let dx = p.x - cx;
        let dy = p.y - cy;
        Vec2::new(
            dx * cos - dy * sin + cx + x,
            dx * sin + dy * cos + cy + y,
        )
    })
}
