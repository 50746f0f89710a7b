use std::ops::{Add, Sub, Mul, Div, Neg};

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    pub const fn new(x: f32, y: f32) -> Self {
        Point2D { x, y }
    }
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f32; 2]> for Point2D {
    fn from(xy: [f32; 2]) -> Point2D {
        Point2D { x: xy[0], y: xy[1] }
    }
}

impl Add for Point2D {
    type Output = Point2D;
    fn add(self, other: Point2D) -> Point2D {
        Point2D { x: self.x + other.x, y: self.y + other.y }
    }
}

impl Sub for Point2D {
    type Output = Point2D;
    fn sub(self, other: Point2D) -> Point2D {
        Point2D { x: self.x - other.x, y: self.y - other.y }
    }
}

impl Mul<f32> for Point2D {
    type Output = Point2D;
    fn mul(self, scalar: f32) -> Point2D {
        Point2D { x: self.x * scalar, y: self.y * scalar }
    }
}

impl Div<f32> for Point2D {
    type Output = Point2D;
    fn div(self, scalar: f32) -> Point2D {
        Point2D { x: self.x / scalar, y: self.y / scalar }
    }
}

impl Neg for Point2D {
    type Output = Point2D;
    fn neg(self) -> Point2D {
        Point2D { x: -self.x, y: -self.y }
    }
}

#[inline(always)]
pub fn dot2(a: Point2D, b: Point2D) -> f32 {
    a.x * b.x + a.y * b.y
}

/// Rotate by -90 degrees: (x, y) -> (y, -x).
#[inline(always)]
pub fn perp(vec: Point2D) -> Point2D {
    Point2D { x: vec.y, y: -vec.x }
}

/// Rotate by +90 degrees: (x, y) -> (-y, x).
#[inline(always)]
pub fn nperp(vec: Point2D) -> Point2D {
    Point2D { x: -vec.y, y: vec.x }
}

#[inline(always)]
pub fn length(vec: Point2D) -> f32 {
    dot2(vec, vec).sqrt()
}

#[inline(always)]
pub fn distance(a: Point2D, b: Point2D) -> f32 {
    length(b - a)
}
