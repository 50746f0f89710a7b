use serde::{Deserialize, Serialize};

use crate::error::{SdfError, SdfResult};
use crate::geometry::{GRADIENT_STEP, gradient, is_collinear, signed_triangle_area};
use crate::plane2d::HalfPlane;
use crate::point2d::{Point2D, distance, dot2, length, nperp, perp};

/// Which distance formula to evaluate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SdfVariant {
    /// Max of the three edge distances. Underestimates near the corners.
    Simple,
    /// Euclidean vertex distance inside a corner region, edge max elsewhere.
    #[default]
    Refined,
}

/// Immutable triangle with precomputed edge planes and corner tests.
///
/// Vertices are counter-clockwise (y-up), so every edge normal points
/// outward and the field is negative inside.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle2D {
    vertices: [Point2D; 3],
    edges: [HalfPlane; 3],
    // Per vertex: the incoming edge's normal rotated +90 and the outgoing
    // edge's normal rotated -90. Both positive against (p - v) means p is in
    // that vertex's exterior corner region.
    corners: [[Point2D; 2]; 3],
}

impl Triangle2D {
    pub fn new(v0: Point2D, v1: Point2D, v2: Point2D) -> SdfResult<Self> {
        let vertices = [v0, v1, v2];
        if let Some(i) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(SdfError::NonFiniteCoordinate(i));
        }
        if is_collinear(v0, v1, v2) {
            return Err(SdfError::CollinearVertices);
        }
        let area = signed_triangle_area(v0, v1, v2);
        if area < 0.0 {
            return Err(SdfError::ClockwiseWinding(area));
        }

        let edges = [
            HalfPlane::new(v0, v1)?,
            HalfPlane::new(v1, v2)?,
            HalfPlane::new(v2, v0)?,
        ];
        let corners = std::array::from_fn(|i| {
            let incoming = edges[(i + 2) % 3];
            let outgoing = edges[i];
            [nperp(incoming.normal), perp(outgoing.normal)]
        });

        Ok(Triangle2D { vertices, edges, corners })
    }

    pub fn from_points(points: [Point2D; 3]) -> SdfResult<Self> {
        Self::new(points[0], points[1], points[2])
    }

    pub fn vertices(&self) -> [Point2D; 3] {
        self.vertices
    }

    pub fn edges(&self) -> [HalfPlane; 3] {
        self.edges
    }

    pub fn corner_tests(&self) -> [[Point2D; 2]; 3] {
        self.corners
    }

    #[inline(always)]
    pub fn edge_distances(&self, p: Point2D) -> [f32; 3] {
        [
            self.edges[0].signed_distance(p),
            self.edges[1].signed_distance(p),
            self.edges[2].signed_distance(p),
        ]
    }

    #[inline(always)]
    pub fn distance_simple(&self, p: Point2D) -> f32 {
        let [f0, f1, f2] = self.edge_distances(p);
        f0.max(f1).max(f2)
    }

    #[inline(always)]
    fn in_corner(&self, i: usize, p: Point2D) -> bool {
        let vp = p - self.vertices[i];
        let [c0, c1] = self.corners[i];
        // Strict, no epsilon. The field is continuous across the region boundary.
        dot2(c0, vp) > 0.0 && dot2(c1, vp) > 0.0
    }

    /// Index of the vertex whose exterior corner region contains `p`.
    /// Tested in order v0, v1, v2; the first hit wins.
    pub fn vertex_region(&self, p: Point2D) -> Option<usize> {
        (0..3).find(|&i| self.in_corner(i, p))
    }

    /// Refined field. Inside a corner region this is the (always positive)
    /// Euclidean distance to that vertex; elsewhere it is the signed edge max.
    #[inline(always)]
    pub fn distance(&self, p: Point2D) -> f32 {
        match self.vertex_region(p) {
            Some(i) => distance(self.vertices[i], p),
            None => self.distance_simple(p),
        }
    }

    pub fn evaluate(&self, p: Point2D, variant: SdfVariant) -> f32 {
        match variant {
            SdfVariant::Simple => self.distance_simple(p),
            SdfVariant::Refined => self.distance(p),
        }
    }

    /// Central-difference gradient of the refined field.
    pub fn gradient(&self, p: Point2D) -> Point2D {
        gradient(|q| self.distance(q), p, GRADIENT_STEP)
    }

    /// Estimated nearest boundary point: step against the gradient by the field value.
    pub fn project_to_boundary(&self, p: Point2D) -> Point2D {
        let g = self.gradient(p);
        let len = length(g);
        if !(len > 0.0) {
            return p;
        }
        p - (g / len) * self.distance(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    const EPS: f32 = 1e-5;

    fn reference() -> Triangle2D {
        Triangle2D::new(
            Point2D::new(0.2, 0.4),
            Point2D::new(0.8, 0.2),
            Point2D::new(0.5, 0.8),
        )
        .unwrap()
    }

    fn outward_bisector(tri: &Triangle2D, i: usize) -> Point2D {
        let v = tri.vertices();
        let a = v[(i + 1) % 3] - v[i];
        let b = v[(i + 2) % 3] - v[i];
        let dir = -(a / length(a) + b / length(b));
        dir / length(dir)
    }

    #[test]
    fn interior_points_are_negative() {
        let tri = reference();
        let [v0, v1, v2] = tri.vertices();
        let mut rng = rand::thread_rng();
        for _ in 0..2000 {
            let mut w = [rng.gen_range(0.01..1.0f32), rng.gen_range(0.01..1.0f32), rng.gen_range(0.01..1.0f32)];
            let sum: f32 = w.iter().sum();
            w.iter_mut().for_each(|x| *x /= sum);
            let p = v0 * w[0] + v1 * w[1] + v2 * w[2];
            assert_eq!(tri.vertex_region(p), None, "interior point {p:?} hit a corner region");
            assert!(tri.distance(p) < 0.0, "interior point {p:?} evaluated non-negative");
        }
    }

    #[test]
    fn edge_points_are_zero() {
        let tri = reference();
        let v = tri.vertices();
        for i in 0..3 {
            let a = v[i];
            let b = v[(i + 1) % 3];
            for step in 1..10 {
                let t = step as f32 / 10.0;
                let p = a + (b - a) * t;
                assert_eq!(tri.vertex_region(p), None);
                assert!(tri.distance(p).abs() < EPS, "edge {i} t={t}: {}", tri.distance(p));
            }
        }
    }

    #[test]
    fn vertices_are_zero() {
        let tri = reference();
        for v in tri.vertices() {
            assert!(tri.distance(v).abs() < EPS);
            assert!(tri.distance_simple(v).abs() < EPS);
        }
    }

    #[test]
    fn corner_regions_use_euclidean_distance() {
        let tri = reference();
        let v = tri.vertices();
        for i in 0..3 {
            let p = v[i] + outward_bisector(&tri, i) * 0.5;
            assert_eq!(tri.vertex_region(p), Some(i));
            let expected = ((p.x - v[i].x).powi(2) + (p.y - v[i].y).powi(2)).sqrt();
            assert!((tri.distance(p) - expected).abs() < EPS);
            assert!(tri.distance_simple(p) < expected - 1e-3, "simple variant should underestimate at vertex {i}");
            assert_eq!(tri.evaluate(p, SdfVariant::Refined), tri.distance(p));
            assert_eq!(tri.evaluate(p, SdfVariant::Simple), tri.distance_simple(p));
        }
    }

    #[test]
    fn outside_single_edge_matches_simple() {
        let tri = reference();
        let v = tri.vertices();
        let edges = tri.edges();
        for i in 0..3 {
            let mid = (v[i] + v[(i + 1) % 3]) / 2.0;
            let p = mid + edges[i].normal * 0.25;
            assert_eq!(tri.vertex_region(p), None);
            assert!((tri.distance(p) - 0.25).abs() < EPS);
            assert_eq!(tri.distance(p), tri.distance_simple(p));
        }
    }

    #[test]
    fn corner_regions_are_disjoint() {
        let tri = reference();
        let mut rng = rand::thread_rng();
        for _ in 0..5000 {
            let p = Point2D::new(rng.gen_range(-1.0..2.0), rng.gen_range(-1.0..2.0));
            let hits = (0..3).filter(|&i| tri.in_corner(i, p)).count();
            assert!(hits <= 1, "{p:?} is in {hits} corner regions");
        }
    }

    #[test]
    fn field_is_continuous_across_region_boundary() {
        let tri = reference();
        let v0 = tri.vertices()[0];
        let edge0 = tri.edges()[0];
        let along = perp(edge0.normal);
        let on_boundary = v0 + edge0.normal * 0.3;
        let inside = on_boundary + along * 1e-4;
        let outside = on_boundary - along * 1e-4;
        assert_eq!(tri.vertex_region(inside), Some(0));
        assert_eq!(tri.vertex_region(outside), None);
        assert!((tri.distance(inside) - tri.distance(outside)).abs() < 1e-3);
    }

    #[test]
    fn corner_tests_are_skewed_normals() {
        let tri = reference();
        let edges = tri.edges();
        let corners = tri.corner_tests();
        assert_eq!(corners[0], [nperp(edges[2].normal), perp(edges[0].normal)]);
        assert_eq!(corners[1], [nperp(edges[0].normal), perp(edges[1].normal)]);
        assert_eq!(corners[2], [nperp(edges[1].normal), perp(edges[2].normal)]);
    }

    #[test]
    fn gradient_points_away_from_nearest_feature() {
        let tri = reference();
        let v0 = tri.vertices()[0];
        let dir = outward_bisector(&tri, 0);
        let p = v0 + dir * 0.4;
        let g = tri.gradient(p);
        assert!((length(g) - 1.0).abs() < 1e-2);
        assert!(dot2(g, dir) > 0.99);

        let projected = tri.project_to_boundary(p);
        assert!(distance(projected, v0) < 1e-2, "projected to {projected:?}");
    }

    #[test]
    fn projection_lands_on_edge() {
        let tri = reference();
        let v = tri.vertices();
        let edge1 = tri.edges()[1];
        let mid = (v[1] + v[2]) / 2.0;
        let projected = tri.project_to_boundary(mid + edge1.normal * 0.2);
        assert!(distance(projected, mid) < 1e-3);
    }

    #[test]
    fn degenerate_input_is_rejected() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(0.5, 0.5);
        let c = Point2D::new(1.0, 1.0);
        assert!(matches!(Triangle2D::new(a, b, c), Err(SdfError::CollinearVertices)));
        assert!(matches!(Triangle2D::new(a, a, c), Err(SdfError::CollinearVertices)));
        assert!(matches!(
            Triangle2D::new(a, Point2D::new(f32::NAN, 0.0), c),
            Err(SdfError::NonFiniteCoordinate(1))
        ));
    }

    #[test]
    fn clockwise_winding_is_rejected() {
        let err = Triangle2D::new(
            Point2D::new(0.2, 0.4),
            Point2D::new(0.5, 0.8),
            Point2D::new(0.8, 0.2),
        )
        .unwrap_err();
        assert!(matches!(err, SdfError::ClockwiseWinding(area) if area < 0.0));
    }
}
