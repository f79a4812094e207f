//! Scatter rendering of a two-group dataset to PNG.
//!
//! Group "in" is drawn blue, group "out" green, on a white canvas framed by the
//! data bounds. Datasets without an "out" group are not plotted.

use std::path::Path;

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;
use tracing::{debug, warn};

use crate::dataset::Dataset;
use crate::error::GenError;
use crate::region::Bounds2;
use crate::Point;

const IN_COLOR: Rgb<u8> = Rgb([0, 0, 255]);
const OUT_COLOR: Rgb<u8> = Rgb([0, 128, 0]);
const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const FRAME: Rgb<u8> = Rgb([0, 0, 0]);

/// Canvas settings.
#[derive(Clone, Copy, Debug)]
pub struct PlotCfg {
    pub width: u32,
    pub height: u32,
    /// Pixels between the frame and the canvas edge.
    pub margin: u32,
    pub marker_radius: i32,
}

impl Default for PlotCfg {
    fn default() -> Self {
        Self {
            width: 640,
            height: 640,
            margin: 32,
            marker_radius: 2,
        }
    }
}

/// Maps data coordinates to pixels (y axis pointing up).
struct Frame {
    bounds: Bounds2,
    cfg: PlotCfg,
}

impl Frame {
    fn pixel(&self, p: Point) -> (i32, i32) {
        let w = (self.cfg.width - 2 * self.cfg.margin) as f64;
        let h = (self.cfg.height - 2 * self.cfg.margin) as f64;
        let sx = if self.bounds.width() > 0.0 { w / self.bounds.width() } else { 0.0 };
        let sy = if self.bounds.height() > 0.0 { h / self.bounds.height() } else { 0.0 };
        let px = self.cfg.margin as f64 + (p.x - self.bounds.min.x) * sx;
        let py = self.cfg.margin as f64 + h - (p.y - self.bounds.min.y) * sy;
        (px.round() as i32, py.round() as i32)
    }
}

/// Render `data` to an image, or `None` when a group is missing or empty.
pub fn render(data: &Dataset, cfg: PlotCfg) -> Option<RgbImage> {
    let outside = data.outside.as_ref()?;
    if data.inside.points.is_empty() || outside.points.is_empty() {
        return None;
    }
    if cfg.width <= 2 * cfg.margin || cfg.height <= 2 * cfg.margin {
        return None;
    }
    let all: Vec<Point> = data
        .inside
        .points
        .iter()
        .chain(outside.points.iter())
        .copied()
        .collect();
    let frame = Frame {
        bounds: Bounds2::enclosing(&all)?,
        cfg,
    };
    let mut img = RgbImage::from_pixel(cfg.width, cfg.height, BACKGROUND);
    draw_hollow_rect_mut(
        &mut img,
        Rect::at(cfg.margin as i32, cfg.margin as i32)
            .of_size(cfg.width - 2 * cfg.margin, cfg.height - 2 * cfg.margin),
        FRAME,
    );
    for (points, color) in [(&data.inside.points, IN_COLOR), (&outside.points, OUT_COLOR)] {
        for &p in points {
            draw_filled_circle_mut(&mut img, frame.pixel(p), cfg.marker_radius, color);
        }
    }
    Some(img)
}

/// Render and save as PNG. Returns `false` when the dataset was not plottable.
pub fn save_scatter(path: &Path, data: &Dataset, cfg: PlotCfg) -> Result<bool, GenError> {
    let Some(img) = render(data, cfg) else {
        warn!(path = %path.display(), "plot skipped: dataset lacks an out group");
        return Ok(false);
    };
    img.save(path).map_err(|err| match err {
        image::ImageError::IoError(source) => GenError::Io {
            path: path.to_path_buf(),
            source,
        },
        source => GenError::Plot {
            path: path.to_path_buf(),
            source,
        },
    })?;
    debug!(path = %path.display(), "save_scatter");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::LabelRule;
    use crate::sampler::Split;
    use nalgebra::vector;
    use tempfile::tempdir;

    fn corners() -> Dataset {
        Dataset::from_split(Split {
            inside: vec![vector![0.0, 0.0]],
            outside: vec![vector![100.0, 100.0]],
            draws: 2,
        })
    }

    #[test]
    fn groups_get_their_colors() {
        let cfg = PlotCfg::default();
        let img = render(&corners(), cfg).unwrap();
        let m = cfg.margin;
        // (0,0) maps to the bottom-left frame corner, (100,100) to the top-right.
        assert_eq!(*img.get_pixel(m, cfg.height - m), IN_COLOR);
        assert_eq!(*img.get_pixel(cfg.width - m, m), OUT_COLOR);
        assert_eq!(*img.get_pixel(cfg.width / 2, cfg.height / 2), BACKGROUND);
    }

    #[test]
    fn single_group_is_not_plotted() {
        let data = Dataset::single(vec![vector![1.0, 1.0]], LabelRule::YThreshold { at: 50.0 });
        assert!(render(&data, PlotCfg::default()).is_none());
        let dir = tempdir().unwrap();
        let path = dir.path().join("s.png");
        assert!(!save_scatter(&path, &data, PlotCfg::default()).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn saves_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("c.png");
        assert!(save_scatter(&path, &corners(), PlotCfg::default()).unwrap());
        let back = image::open(&path).unwrap().to_rgb8();
        assert_eq!(back.dimensions(), (640, 640));
    }

    #[test]
    fn missing_directory_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent").join("c.png");
        let err = save_scatter(&path, &corners(), PlotCfg::default()).unwrap_err();
        assert!(matches!(err, GenError::Io { .. }), "{err}");
        assert_eq!(err.path(), Some(&path));
    }
}
