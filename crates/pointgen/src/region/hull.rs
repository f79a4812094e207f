use nalgebra::Vector2;

use super::types::{Bounds2, Hs2};
use crate::Point;

/// Convex polygon kept in both representations: CCW vertices for bounds and
/// drawing, outward half-spaces for membership.
#[derive(Clone, Debug)]
pub struct ConvexPolygon {
    pub vertices: Vec<Point>,
    pub hs: Vec<Hs2>,
}

impl ConvexPolygon {
    /// Build from an arbitrary vertex list via the convex hull.
    ///
    /// A closing vertex equal to the first one (a ring) is accepted and dropped
    /// by dedup. Returns `None` when fewer than three distinct hull vertices remain.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let hull = convex_hull(points)?;
        if hull.len() < 3 {
            return None;
        }
        Some(Self::from_ccw(hull))
    }

    /// Triangle through `a`, `b`, `c` in either orientation. Collinear corners
    /// give a zero-area polygon that contains only its segment.
    pub fn triangle(a: Point, b: Point, c: Point) -> Self {
        if cross(a, b, c) >= 0.0 {
            Self::from_ccw(vec![a, b, c])
        } else {
            Self::from_ccw(vec![a, c, b])
        }
    }

    fn from_ccw(vertices: Vec<Point>) -> Self {
        let mut hs = Vec::with_capacity(vertices.len());
        for k in 0..vertices.len() {
            let p = vertices[k];
            let q = vertices[(k + 1) % vertices.len()];
            let edge = q - p;
            // CCW order: outward normal is the edge turned 90° clockwise.
            let n = Vector2::new(edge.y, -edge.x);
            hs.push(Hs2::new(n, n.dot(&p)));
        }
        Self { vertices, hs }
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.hs.iter().all(|h| h.satisfies(p))
    }

    pub fn bounds(&self) -> Bounds2 {
        // every constructor yields at least three vertices
        Bounds2::enclosing(&self.vertices).unwrap_or_else(|| Bounds2::square(0.0, 0.0))
    }

    /// Shoelace area (positive for CCW).
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        let twice: f64 = (0..n)
            .map(|i| {
                let p = self.vertices[i];
                let q = self.vertices[(i + 1) % n];
                p.x * q.y - q.x * p.y
            })
            .sum();
        0.5 * twice
    }
}

/// Andrew’s monotone chain convex hull (returns hull in CCW order).
fn convex_hull(points: &[Point]) -> Option<Vec<Point>> {
    if points.len() < 3 {
        return None;
    }
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(|a, b| {
        match a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal) {
            std::cmp::Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal),
            o => o,
        }
    });
    pts.dedup_by(|a, b| (*a - *b).norm() < 1e-12);
    if pts.len() < 3 {
        return None;
    }
    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    Some(hull)
}

#[inline]
fn cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}
