//! Dataset generator: sample, classify, optionally plot, write.
//!
//! `Generator` owns the configuration and one seeded RNG. Each `generate_*`
//! call builds its region and points locally, so calls share nothing but the
//! RNG stream. `generate_all` runs the five modes in order and stops at the
//! first error.

use std::io::Write;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::dataset::{ClassMap, Dataset};
use crate::error::GenError;
use crate::mode::Mode;
use crate::plot::{save_scatter, PlotCfg};
use crate::writer::{default_header, validate_header, write_csv, Header};

/// Generator configuration. The output directory must already exist.
#[derive(Clone, Debug)]
pub struct GeneratorCfg {
    /// Column names (default `x,y,class`). Written verbatim as the header row,
    /// but they also name the frame columns, so they must be non-empty and
    /// distinct; `Generator::new` rejects anything else.
    pub header: Header,
    /// Label strings (default `black` / `white`).
    pub class_map: ClassMap,
    /// Output directory (default `data`).
    pub dir: PathBuf,
    /// RNG seed; drawn from entropy when `None`.
    pub seed: Option<u64>,
    pub plot: PlotCfg,
}

impl Default for GeneratorCfg {
    fn default() -> Self {
        Self {
            header: default_header(),
            class_map: ClassMap::default(),
            dir: PathBuf::from("data"),
            seed: None,
            plot: PlotCfg::default(),
        }
    }
}

/// Outcome of one generation call.
#[derive(Clone, Debug, PartialEq)]
pub struct Generated {
    pub mode: Mode,
    pub csv: PathBuf,
    /// Data rows written (header excluded).
    pub rows: usize,
    /// Scatter image, when one was requested and the dataset was plottable.
    pub plot: Option<PathBuf>,
}

pub struct Generator {
    cfg: GeneratorCfg,
    seed: u64,
    rng: StdRng,
}

impl Generator {
    pub fn new(cfg: GeneratorCfg) -> Result<Self, GenError> {
        validate_header(&cfg.header)?;
        let seed = cfg.seed.unwrap_or_else(rand::random);
        Ok(Self {
            cfg,
            seed,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn cfg(&self) -> &GeneratorCfg {
        &self.cfg
    }

    /// Seed the RNG started from; pass it back via `GeneratorCfg::seed` to replay.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Path of `file_name` inside the output directory.
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.cfg.dir.join(file_name)
    }

    /// Sample a dataset for `mode` without writing it.
    pub fn dataset(&mut self, mode: Mode) -> Dataset {
        mode.build_dataset(&mut self.rng)
    }

    /// Sample `mode`, plot it next to the CSV if asked, then write the CSV.
    pub fn generate(&mut self, mode: Mode, file_name: &str, plot: bool) -> Result<Generated, GenError> {
        let data = self.dataset(mode);
        let csv = self.output_path(file_name);
        let plot = if plot {
            let png = csv.with_extension("png");
            save_scatter(&png, &data, self.cfg.plot)?.then_some(png)
        } else {
            None
        };
        let rows = write_csv(&csv, &self.cfg.header, &self.cfg.class_map, &data)?;
        info!(mode = mode.describe(), path = %csv.display(), rows, "generated");
        Ok(Generated {
            mode,
            csv,
            rows,
            plot,
        })
    }

    pub fn generate_circle_bounded(&mut self, file_name: &str, plot: bool) -> Result<Generated, GenError> {
        self.generate(Mode::CircleBounded, file_name, plot)
    }

    pub fn generate_triangle_bounded(&mut self, file_name: &str, plot: bool) -> Result<Generated, GenError> {
        self.generate(Mode::TriangleBounded, file_name, plot)
    }

    /// Flat `[0,100)²` sampling labeled by `y >= 50`; single group.
    pub fn generate_rectangle_bounded(&mut self, file_name: &str, plot: bool) -> Result<Generated, GenError> {
        self.generate(Mode::RectangleBounded, file_name, plot)
    }

    pub fn generate_linear_diagonal_split(&mut self, file_name: &str, plot: bool) -> Result<Generated, GenError> {
        self.generate(Mode::DiagonalSplit, file_name, plot)
    }

    /// Flat `[0,100)²` sampling labeled by the quadrant checkerboard; single group.
    pub fn generate_squares_bounded(&mut self, file_name: &str, plot: bool) -> Result<Generated, GenError> {
        self.generate(Mode::SquaresBounded, file_name, plot)
    }

    /// All five modes to `data1.csv` .. `data5.csv`, printing progress to stdout.
    pub fn generate_all(&mut self) -> Result<Vec<Generated>, GenError> {
        let stdout = std::io::stdout();
        self.generate_all_to(&mut stdout.lock())
    }

    /// `generate_all` with progress lines written to `out`.
    pub fn generate_all_to<W: Write>(&mut self, out: &mut W) -> Result<Vec<Generated>, GenError> {
        let mut done = Vec::with_capacity(Mode::ALL.len());
        for mode in Mode::ALL {
            self.progress(out, format_args!("Start generating {} data...", mode.describe()))?;
            done.push(self.generate(mode, mode.file_name(), mode.plots_in_batch())?);
            self.progress(out, format_args!("Finished generating {} data.", mode.describe()))?;
        }
        Ok(done)
    }

    fn progress<W: Write>(&self, out: &mut W, line: std::fmt::Arguments<'_>) -> Result<(), GenError> {
        writeln!(out, "{line}").map_err(|source| GenError::Io {
            path: self.cfg.dir.clone(),
            source,
        })
    }
}

/// Convenience: `Generator::new(cfg)?.generate_all()`.
pub fn generate_all_in(dir: &Path, seed: Option<u64>) -> Result<Vec<Generated>, GenError> {
    let cfg = GeneratorCfg {
        dir: dir.to_path_buf(),
        seed,
        ..GeneratorCfg::default()
    };
    Generator::new(cfg)?.generate_all()
}
