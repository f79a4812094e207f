//! Labeled synthetic 2D point datasets for classifier testing.
//!
//! Points are sampled in a bounding box, labeled "in"/"out" by a geometric
//! rule (circle, triangle, y-threshold, diagonal split, quadrant checkerboard),
//! written as CSV and optionally rendered as a scatter PNG.
//!
//! Layout
//! - `region`: circle and convex-polygon containment plus bounding boxes.
//! - `sampler`: rejection sampling against a region, flat sampling in a box.
//! - `dataset`: labels, label rules, the two-group dataset.
//! - `mode`: the five fixed generation modes.
//! - `writer` / `plot`: CSV and PNG outputs.
//! - `generator`: configuration and orchestration.

pub mod dataset;
pub mod error;
pub mod generator;
pub mod mode;
pub mod plot;
pub mod region;
pub mod sampler;
pub mod writer;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A 2D point `(x, y)`.
pub type Point = nalgebra::Vector2<f64>;

pub use dataset::{ClassMap, Dataset, Label, LabelRule};
pub use error::GenError;
pub use generator::{Generated, Generator, GeneratorCfg};
pub use mode::{Mode, Source};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::dataset::{ClassMap, Dataset, Group, Label, LabelRule};
    pub use crate::generator::{generate_all_in, Generated, Generator, GeneratorCfg};
    pub use crate::mode::{Mode, Source};
    pub use crate::plot::PlotCfg;
    pub use crate::region::{Bounds2, Region};
    pub use crate::sampler::{acceptance, rejection_sample, sample_flat, Split};
    pub use crate::writer::{default_header, write_csv, Header};
    pub use crate::{GenError, Point};
}
