use crate::error::{SdfError, SdfResult};
use crate::point2d::{Point2D, dot2, length, perp};

/// Directed line through two points, stored as the signed distance
/// functional `n . p + d` with `n` a unit vector.
///
/// The normal is the direction of travel `a -> b` rotated by -90 degrees,
/// so for a counter-clockwise triangle it points out of the interior.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HalfPlane {
    pub normal: Point2D,
    pub offset: f32,
}

impl HalfPlane {
    /// Fails with `CoincidentPoints` when `a == b`, since the normal is undefined.
    pub fn new(a: Point2D, b: Point2D) -> SdfResult<Self> {
        let dir = b - a;
        let len = length(dir);
        if !(len > 0.0) {
            return Err(SdfError::CoincidentPoints { x: a.x, y: a.y });
        }
        let normal = perp(dir) / len;
        let offset = -dot2(a, normal);
        Ok(HalfPlane { normal, offset })
    }

    #[inline(always)]
    pub fn signed_distance(&self, p: Point2D) -> f32 {
        dot2(self.normal, p) + self.offset
    }
}
