//! Stroke median paths at the classifier boundary.

use kurbo::Point;

use crate::config::Orientation;

/// One stroke's median line, normalized to y-up.
///
/// Immutable once built. May hold fewer than two points; classifiers
/// treat such paths as degenerate and answer 点.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePath {
    points: Vec<Point>,
}

impl StrokePath {
    /// Build a path from raw points, flipping the vertical axis for `YDown` input.
    pub fn new(points: Vec<Point>, orientation: Orientation) -> Self {
        let points = match orientation {
            Orientation::YUp => points,
            Orientation::YDown => points.into_iter().map(|p| Point::new(p.x, -p.y)).collect(),
        };
        Self { points }
    }

    /// Build a path from `[x, y]` pairs as found in hanzi-writer medians.
    pub fn from_pairs(pairs: &[[f64; 2]], orientation: Orientation) -> Self {
        let points = pairs.iter().map(|&[x, y]| Point::new(x, y)).collect();
        Self::new(points, orientation)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Fewer than two points: no direction can be read from it.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }
}
