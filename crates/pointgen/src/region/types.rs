//! Basic 2D region primitives.
//!
//! - `Hs2`: closed half-space `n·x <= c` used by convex polygons.
//! - `Bounds2`: axis-aligned bounding box, the sampling domain of a region.
//! - `Circle`: closed disc, containment by squared distance.

use nalgebra::Vector2;
use rand::Rng;

use crate::Point;

/// Closed half-space `n · x <= c` (no normalization required here).
#[derive(Clone, Copy, Debug)]
pub struct Hs2 {
    pub n: Vector2<f64>,
    pub c: f64,
}

impl Hs2 {
    #[inline]
    pub fn new(n: Vector2<f64>, c: f64) -> Self {
        Self { n, c }
    }
    #[inline]
    pub fn satisfies(&self, p: Point) -> bool {
        self.n.dot(&p) <= self.c
    }
}

/// Axis-aligned box `[min.x, max.x] × [min.y, max.y]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: Point,
    pub max: Point,
}

impl Bounds2 {
    #[inline]
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Square box `[lo, hi]²`.
    #[inline]
    pub fn square(lo: f64, hi: f64) -> Self {
        Self::new(Vector2::new(lo, lo), Vector2::new(hi, hi))
    }

    /// Smallest box containing all `points`; `None` for an empty slice.
    pub fn enclosing(points: &[Point]) -> Option<Self> {
        let first = *points.first()?;
        Some(points.iter().fold(Self::new(first, first), |b, p| {
            Self::new(b.min.inf(p), b.max.sup(p))
        }))
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Uniform draw from the box. A zero-width axis yields its single coordinate.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Point {
        Vector2::new(
            uniform(rng, self.min.x, self.max.x),
            uniform(rng, self.min.y, self.max.y),
        )
    }
}

#[inline]
fn uniform<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// Closed disc of radius `r` around `center`.
#[derive(Clone, Copy, Debug)]
pub struct Circle {
    pub center: Point,
    pub r: f64,
}

impl Circle {
    #[inline]
    pub fn new(center: Point, r: f64) -> Self {
        Self { center, r }
    }
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        (p - self.center).norm_squared() <= self.r * self.r
    }
    #[inline]
    pub fn bounds(&self) -> Bounds2 {
        let d = Vector2::new(self.r, self.r);
        Bounds2::new(self.center - d, self.center + d)
    }
}
