//! Regions used to split a bounding box into "in" and "out" points.
//!
//! A `Region` is a closed shape with a membership test and an axis-aligned
//! bounding box. It has no lifecycle: build one per generation call, sample
//! against it, drop it.
//!
//! - Circles test squared distance to the centre.
//! - Polygons are convex and tested against their outward half-spaces, which
//!   agrees with ray casting away from the (measure-zero) boundary.

mod hull;
mod types;

pub use hull::ConvexPolygon;
pub use types::{Bounds2, Circle, Hs2};

use nalgebra::Vector2;

use crate::Point;

/// Shape tested for containment.
#[derive(Clone, Debug)]
pub enum Region {
    Circle(Circle),
    Polygon(ConvexPolygon),
}

impl Region {
    /// Closed disc of radius `r` around `(cx, cy)`.
    pub fn circle(cx: f64, cy: f64, r: f64) -> Self {
        Self::Circle(Circle::new(Vector2::new(cx, cy), r))
    }

    /// Convex polygon through the given `(x, y)` vertices (any order; a closing
    /// duplicate of the first vertex is allowed). `None` if the vertices span
    /// no area.
    pub fn polygon(vertices: &[(f64, f64)]) -> Option<Self> {
        let pts: Vec<Point> = vertices.iter().map(|&(x, y)| Vector2::new(x, y)).collect();
        ConvexPolygon::from_points(&pts).map(Self::Polygon)
    }

    /// Triangle through three `(x, y)` corners, in either orientation.
    pub fn triangle(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Self {
        let v = |(x, y): (f64, f64)| Vector2::new(x, y);
        Self::Polygon(ConvexPolygon::triangle(v(a), v(b), v(c)))
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        match self {
            Self::Circle(c) => c.contains(p),
            Self::Polygon(poly) => poly.contains(p),
        }
    }

    pub fn bounds(&self) -> Bounds2 {
        match self {
            Self::Circle(c) => c.bounds(),
            Self::Polygon(poly) => poly.bounds(),
        }
    }

    pub fn area(&self) -> f64 {
        match self {
            Self::Circle(c) => std::f64::consts::PI * c.r * c.r,
            Self::Polygon(poly) => poly.area(),
        }
    }
}

#[cfg(test)]
mod tests;
