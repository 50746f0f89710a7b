use crate::point2d::{Point2D, dot2, length, nperp};

/// Default step for the central-difference gradient.
pub const GRADIENT_STEP: f32 = 0.01;

/// Signed area of triangle (a, b, c); positive when counter-clockwise in a y-up frame.
pub fn signed_triangle_area(a: Point2D, b: Point2D, c: Point2D) -> f32 {
    dot2(c - a, nperp(b - a)) / 2.0
}

/// True when the triangle's area is negligible relative to the lengths of
/// the two edges leaving `a`.
pub fn is_collinear(a: Point2D, b: Point2D, c: Point2D) -> bool {
    let scale = length(b - a) * length(c - a);
    let area2 = 2.0 * signed_triangle_area(a, b, c);
    !(area2.abs() > f32::EPSILON * scale)
}

/// Central-difference gradient of a scalar field at `p` with step `h`.
pub fn gradient<F>(field: F, p: Point2D, h: f32) -> Point2D
where
    F: Fn(Point2D) -> f32,
{
    let dx = (field(Point2D { x: p.x + h, y: p.y }) - field(Point2D { x: p.x - h, y: p.y })) / (2.0 * h);
    let dy = (field(Point2D { x: p.x, y: p.y + h }) - field(Point2D { x: p.x, y: p.y - h })) / (2.0 * h);
    Point2D { x: dx, y: dy }
}
