//! Path length, chord and curvature measurements.

use kurbo::{Point, Vec2};

use crate::geom::arc_length;

/// Whole-path measurements shared by every stage of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathMetrics {
    /// Sum of consecutive segment lengths.
    pub length: f64,
    /// Start-to-end distance, floored at 1.
    pub chord: f64,
    /// length / chord; 1 for straight strokes, larger for bent ones.
    pub curvature: f64,
    /// End minus start.
    pub delta: Vec2,
    pub point_count: usize,
}

impl PathMetrics {
    /// Measure a path. Defined for any input; an empty slice measures zero.
    pub fn measure(points: &[Point]) -> Self {
        let length = arc_length(points);
        let delta = match (points.first(), points.last()) {
            (Some(&first), Some(&last)) => last - first,
            _ => Vec2::ZERO,
        };
        let chord = delta.hypot().max(1.0);
        Self {
            length,
            chord,
            curvature: length / chord,
            delta,
            point_count: points.len(),
        }
    }
}

/// Curvature ratio of a sub-range, used for hooked bodies.
pub fn curvature(points: &[Point]) -> f64 {
    PathMetrics::measure(points).curvature
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn straight_path_has_unit_curvature() {
        let pts = [Point::new(0.0, 0.0), Point::new(30.0, 40.0), Point::new(60.0, 80.0)];
        let m = PathMetrics::measure(&pts);
        assert_relative_eq!(m.length, 100.0, epsilon = 1e-9);
        assert_relative_eq!(m.chord, 100.0, epsilon = 1e-9);
        assert_relative_eq!(m.curvature, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn bent_path_has_curvature_above_one() {
        let pts = [Point::new(0.0, 0.0), Point::new(100.0, 0.0), Point::new(100.0, -100.0)];
        let m = PathMetrics::measure(&pts);
        assert_relative_eq!(m.curvature, 200.0 / 2f64.sqrt() / 100.0, epsilon = 1e-9);
    }

    #[test]
    fn closed_loop_chord_is_floored() {
        let pts = [Point::new(5.0, 5.0), Point::new(15.0, 5.0), Point::new(5.0, 5.0)];
        let m = PathMetrics::measure(&pts);
        assert_relative_eq!(m.chord, 1.0);
        assert_relative_eq!(m.curvature, 20.0);
    }
}
