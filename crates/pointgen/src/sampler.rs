//! Uniform point sources.
//!
//! - `rejection_sample`: fill an inside and an outside set against a region by
//!   drawing from its bounding box. There is no draw cap; a region with
//!   (near-)zero area never fills `inside` and the loop does not return.
//! - `sample_flat`: `n` draws from a box with no acceptance test.

use rand::Rng;
use tracing::debug;

use crate::region::{Bounds2, Region};
use crate::Point;

/// Result of a rejection-sampling run.
#[derive(Clone, Debug)]
pub struct Split {
    pub inside: Vec<Point>,
    pub outside: Vec<Point>,
    /// Total candidates drawn, accepted or not.
    pub draws: u64,
}

/// Expected fraction of box draws that land inside `region`.
pub fn acceptance(region: &Region) -> f64 {
    let box_area = region.bounds().area();
    if box_area > 0.0 {
        region.area() / box_area
    } else {
        0.0
    }
}

/// Draw uniformly in `region.bounds()` until `n_in` contained and `n_out`
/// non-contained points are collected. Each draw lands in at most one set, and
/// is discarded once its set is full. Both sets keep draw order.
pub fn rejection_sample<R: Rng>(region: &Region, n_in: usize, n_out: usize, rng: &mut R) -> Split {
    let bounds = region.bounds();
    let mut inside = Vec::with_capacity(n_in);
    let mut outside = Vec::with_capacity(n_out);
    let mut draws = 0u64;
    while inside.len() < n_in || outside.len() < n_out {
        let p = bounds.sample(rng);
        draws += 1;
        if region.contains(p) {
            if inside.len() < n_in {
                inside.push(p);
            }
        } else if outside.len() < n_out {
            outside.push(p);
        }
    }
    debug!(n_in, n_out, draws, acceptance = acceptance(region), "rejection_sample");
    Split {
        inside,
        outside,
        draws,
    }
}

/// `n` independent uniform draws from `bounds`.
pub fn sample_flat<R: Rng>(bounds: Bounds2, n: usize, rng: &mut R) -> Vec<Point> {
    (0..n).map(|_| bounds.sample(rng)).collect()
}
