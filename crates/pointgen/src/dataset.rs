//! Labeled point groups.
//!
//! A `Dataset` is an "in" group followed by an optional "out" group. Each group
//! carries its own `LabelRule`, so writer and plotter only ever see
//! `(Point, Label)` pairs and never how the points were sampled.

use nalgebra::Vector2;

use crate::sampler::Split;
use crate::Point;

/// Binary class of a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    In,
    Out,
}

impl Label {
    #[inline]
    pub fn from_bool(inside: bool) -> Self {
        if inside {
            Self::In
        } else {
            Self::Out
        }
    }
}

/// Output strings for each label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassMap {
    pub inside: String,
    pub outside: String,
}

impl Default for ClassMap {
    fn default() -> Self {
        Self {
            inside: "black".to_string(),
            outside: "white".to_string(),
        }
    }
}

impl ClassMap {
    #[inline]
    pub fn resolve(&self, label: Label) -> &str {
        match label {
            Label::In => &self.inside,
            Label::Out => &self.outside,
        }
    }
}

/// How a group turns a point into a label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LabelRule {
    /// Every point gets the same label (rejection-sampled groups).
    Fixed(Label),
    /// `In` iff `y >= at`.
    YThreshold { at: f64 },
    /// `In` on the lower-left and upper-right quadrants around `pivot`.
    Checkerboard { pivot: Point },
}

impl LabelRule {
    pub fn resolve(&self, p: Point) -> Label {
        match *self {
            Self::Fixed(label) => label,
            Self::YThreshold { at } => Label::from_bool(p.y >= at),
            Self::Checkerboard { pivot } => {
                let right = p.x >= pivot.x;
                let top = p.y >= pivot.y;
                Label::from_bool(right == top)
            }
        }
    }

    /// Checkerboard around `(x, y)`.
    pub fn checkerboard(x: f64, y: f64) -> Self {
        Self::Checkerboard {
            pivot: Vector2::new(x, y),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Group {
    pub points: Vec<Point>,
    pub rule: LabelRule,
}

impl Group {
    pub fn labeled(&self) -> impl Iterator<Item = (Point, Label)> + '_ {
        self.points.iter().map(move |&p| (p, self.rule.resolve(p)))
    }
}

#[derive(Clone, Debug)]
pub struct Dataset {
    pub inside: Group,
    pub outside: Option<Group>,
}

impl Dataset {
    /// Two fixed-label groups from a rejection-sampling run.
    pub fn from_split(split: Split) -> Self {
        Self {
            inside: Group {
                points: split.inside,
                rule: LabelRule::Fixed(Label::In),
            },
            outside: Some(Group {
                points: split.outside,
                rule: LabelRule::Fixed(Label::Out),
            }),
        }
    }

    /// A single "in" group whose labels come from `rule` row by row.
    pub fn single(points: Vec<Point>, rule: LabelRule) -> Self {
        Self {
            inside: Group { points, rule },
            outside: None,
        }
    }

    pub fn len(&self) -> usize {
        self.inside.points.len() + self.outside.as_ref().map_or(0, |g| g.points.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// "in" group rows in order, then "out" group rows in order.
    pub fn labeled(&self) -> impl Iterator<Item = (Point, Label)> + '_ {
        self.inside
            .labeled()
            .chain(self.outside.iter().flat_map(|g| g.labeled()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn threshold_rule() {
        let r = LabelRule::YThreshold { at: 50.0 };
        assert_eq!(r.resolve(vector![0.0, 50.0]), Label::In);
        assert_eq!(r.resolve(vector![99.0, 49.999]), Label::Out);
    }

    #[test]
    fn checkerboard_quadrants() {
        let r = LabelRule::checkerboard(50.0, 50.0);
        assert_eq!(r.resolve(vector![10.0, 10.0]), Label::In);
        assert_eq!(r.resolve(vector![60.0, 60.0]), Label::In);
        assert_eq!(r.resolve(vector![60.0, 10.0]), Label::Out);
        assert_eq!(r.resolve(vector![10.0, 60.0]), Label::Out);
        // pivot lines belong to the upper/right side
        assert_eq!(r.resolve(vector![50.0, 50.0]), Label::In);
        assert_eq!(r.resolve(vector![50.0, 49.0]), Label::Out);
    }

    #[test]
    fn labeled_keeps_group_order() {
        let split = Split {
            inside: vec![vector![1.0, 1.0], vector![2.0, 2.0]],
            outside: vec![vector![3.0, 3.0]],
            draws: 3,
        };
        let ds = Dataset::from_split(split);
        let rows: Vec<_> = ds.labeled().collect();
        assert_eq!(ds.len(), 3);
        assert_eq!(
            rows,
            vec![
                (vector![1.0, 1.0], Label::In),
                (vector![2.0, 2.0], Label::In),
                (vector![3.0, 3.0], Label::Out),
            ]
        );
    }

    #[test]
    fn class_map_defaults() {
        let m = ClassMap::default();
        assert_eq!(m.resolve(Label::In), "black");
        assert_eq!(m.resolve(Label::Out), "white");
    }
}
