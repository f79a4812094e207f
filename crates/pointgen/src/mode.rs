//! The five generation modes and their fixed geometry.
//!
//! Region modes (circle, triangle, diagonal split) rejection-sample 500 points
//! inside and 500 outside their region. Flat modes (rectangle, squares) draw
//! 1000 points from `[0,100)²` into a single group and label each row by a
//! threshold rule.

use rand::Rng;

use crate::dataset::{Dataset, Label, LabelRule};
use crate::region::{Bounds2, Region};
use crate::sampler::{rejection_sample, sample_flat};
use crate::Point;

/// Points per side for region modes.
pub const REGION_HALF: usize = 500;
/// Points for flat modes.
pub const FLAT_COUNT: usize = 1000;
/// Shared split coordinate of the threshold and checkerboard rules.
pub const MID: f64 = 50.0;

const TRIANGLE: [(f64, f64); 3] = [(1.0, 1.0), (50.0, 100.0), (100.0, 1.0)];
// Closed ring (1,1)-(1,100)-(100,100)-(1,1): the upper-left half of the box.
const DIAGONAL: [(f64, f64); 3] = [(1.0, 1.0), (1.0, 100.0), (100.0, 100.0)];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    CircleBounded,
    TriangleBounded,
    RectangleBounded,
    DiagonalSplit,
    SquaresBounded,
}

impl Mode {
    /// Order used by `Generator::generate_all`.
    pub const ALL: [Mode; 5] = [
        Mode::CircleBounded,
        Mode::TriangleBounded,
        Mode::RectangleBounded,
        Mode::DiagonalSplit,
        Mode::SquaresBounded,
    ];

    /// Default output file name (`data1.csv` .. `data5.csv`).
    pub fn file_name(self) -> &'static str {
        match self {
            Mode::CircleBounded => "data1.csv",
            Mode::TriangleBounded => "data2.csv",
            Mode::RectangleBounded => "data3.csv",
            Mode::DiagonalSplit => "data4.csv",
            Mode::SquaresBounded => "data5.csv",
        }
    }

    /// Human-readable name used in progress lines.
    pub fn describe(self) -> &'static str {
        match self {
            Mode::CircleBounded => "circle bounded",
            Mode::TriangleBounded => "triangle bounded",
            Mode::RectangleBounded => "rectangle bounded",
            Mode::DiagonalSplit => "diagonal split",
            Mode::SquaresBounded => "square bounded",
        }
    }

    /// Whether `generate_all` plots this mode.
    pub fn plots_in_batch(self) -> bool {
        matches!(self, Mode::DiagonalSplit)
    }

    /// How this mode produces and labels its points.
    pub fn source(self) -> Source {
        match self {
            Mode::CircleBounded => Source::Region(Region::circle(MID, MID, 50.0)),
            Mode::TriangleBounded => {
                Source::Region(Region::triangle(TRIANGLE[0], TRIANGLE[1], TRIANGLE[2]))
            }
            Mode::DiagonalSplit => {
                Source::Region(Region::triangle(DIAGONAL[0], DIAGONAL[1], DIAGONAL[2]))
            }
            Mode::RectangleBounded => Source::Flat(LabelRule::YThreshold { at: MID }),
            Mode::SquaresBounded => Source::Flat(LabelRule::checkerboard(MID, MID)),
        }
    }

    /// Region for rejection-sampled modes; `None` for flat modes.
    pub fn region(self) -> Option<Region> {
        match self.source() {
            Source::Region(region) => Some(region),
            Source::Flat(_) => None,
        }
    }

    /// The classification every written row of this mode satisfies.
    pub fn classify(self, p: Point) -> Label {
        match self.source() {
            Source::Region(region) => Label::from_bool(region.contains(p)),
            Source::Flat(rule) => rule.resolve(p),
        }
    }

    /// Sample a fresh dataset for this mode.
    pub fn build_dataset<R: Rng>(self, rng: &mut R) -> Dataset {
        match self.source() {
            Source::Region(region) => {
                Dataset::from_split(rejection_sample(&region, REGION_HALF, REGION_HALF, rng))
            }
            Source::Flat(rule) => {
                Dataset::single(sample_flat(Bounds2::square(0.0, 100.0), FLAT_COUNT, rng), rule)
            }
        }
    }
}

/// Point source of a mode: rejection sampling against a region, or flat
/// sampling with a per-row rule.
#[derive(Clone, Debug)]
pub enum Source {
    Region(Region),
    Flat(LabelRule),
}
