//! Shared geometry utilities.

use kurbo::{Point, Vec2};

/// Sum of consecutive segment lengths over `points`.
pub fn arc_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Distance from point P to the line through A→B.
///
/// Falls back to |AP| when A and B coincide.
pub fn point_to_line_dist(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let ap = p - a;
    let len = ab.hypot();
    if len < 1e-10 {
        return ap.hypot();
    }
    ab.cross(ap).abs() / len
}

/// Direction of `v` in degrees, normalized to [0, 360).
pub fn direction_deg(v: Vec2) -> f64 {
    let deg = v.atan2().to_degrees();
    if deg < 0.0 {
        deg + 360.0
    } else if deg >= 360.0 {
        deg - 360.0
    } else {
        deg
    }
}

/// Unsigned angle between two vectors, in degrees [0, 180].
pub fn angle_between_deg(a: Vec2, b: Vec2) -> f64 {
    a.cross(b).atan2(a.dot(b)).abs().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn perpendicular_distance_to_horizontal_chord() {
        let d = point_to_line_dist(
            Point::new(5.0, 3.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
        );
        assert_relative_eq!(d, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn degenerate_chord_uses_point_distance() {
        let a = Point::new(1.0, 1.0);
        let d = point_to_line_dist(Point::new(4.0, 5.0), a, a);
        assert_relative_eq!(d, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn directions_wrap_into_positive_range() {
        assert_relative_eq!(direction_deg(Vec2::new(0.0, -1.0)), 270.0, epsilon = 1e-9);
        assert_relative_eq!(direction_deg(Vec2::new(-1.0, 0.0)), 180.0, epsilon = 1e-9);
        assert_relative_eq!(angle_between_deg(Vec2::new(1.0, 0.0), Vec2::new(-1.0, 1.0)), 135.0, epsilon = 1e-9);
    }
}
