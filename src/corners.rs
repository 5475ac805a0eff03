//! Corner detection by recursive max-deviation splitting.
//!
//! Between a start and end index, the interior point farthest from the
//! chord becomes a corner if its distance exceeds the threshold, and both
//! halves are searched again. Ranges are processed from an explicit stack,
//! so depth is bounded by the heap, not the call stack.

use kurbo::Point;

use crate::geom::point_to_line_dist;

/// Find corner indices in `points`.
///
/// Returned indices are strictly increasing and lie in `[1, len - 2]`.
/// Ranges holding fewer than `min_span` points are not split.
pub fn find_corners(points: &[Point], threshold: f64, min_span: usize) -> Vec<usize> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }
    let min_span = min_span.max(3);

    let mut corners = Vec::new();
    let mut stack = vec![(0usize, n - 1)];
    while let Some((start, end)) = stack.pop() {
        if end + 1 - start < min_span {
            continue;
        }
        let Some((index, distance)) = farthest_from_chord(points, start, end) else {
            continue;
        };
        if distance > threshold {
            tracing::trace!(index, distance, threshold, "corner");
            corners.push(index);
            stack.push((start, index));
            stack.push((index, end));
        }
    }

    corners.sort_unstable();
    corners.dedup();
    corners
}

/// Interior point of `start..=end` farthest from the chord, with its distance.
pub(crate) fn farthest_from_chord(points: &[Point], start: usize, end: usize) -> Option<(usize, f64)> {
    let a = points[start];
    let b = points[end];
    let mut best: Option<(usize, f64)> = None;
    for (i, &p) in points.iter().enumerate().take(end).skip(start + 1) {
        let d = point_to_line_dist(p, a, b);
        if best.map_or(true, |(_, max)| d > max) {
            best = Some((i, d));
        }
    }
    best
}
