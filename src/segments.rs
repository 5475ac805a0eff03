//! Split a path at its corners, quantize each piece, and merge runs.

use kurbo::{Point, Vec2};

use crate::config::ClassifierConfig;
use crate::direction::{quantize, Direction};

/// A maximal run of the path sharing one direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Run {
    pub direction: Direction,
    /// First point index, inclusive.
    pub start: usize,
    /// Last point index, inclusive.
    pub end: usize,
}

impl Run {
    /// Start-to-end displacement of the run.
    pub fn delta(&self, points: &[Point]) -> Vec2 {
        points[self.end] - points[self.start]
    }
}

/// Build direction runs over `points` split at `corners`.
///
/// `total_length` is the arc length of the whole stroke (hook included);
/// drift and merge thresholds are relative to it.
pub fn build_runs(
    points: &[Point],
    corners: &[usize],
    total_length: f64,
    config: &ClassifierConfig,
) -> Vec<Run> {
    if points.len() < 2 {
        return vec![Run { direction: Direction::Dian, start: 0, end: 0 }];
    }
    let last = points.len() - 1;
    let mut bounds = Vec::with_capacity(corners.len() + 2);
    bounds.push(0);
    bounds.extend(corners.iter().copied().filter(|&c| c > 0 && c < last));
    bounds.push(last);

    let runs: Vec<Run> = bounds
        .windows(2)
        .map(|w| Run {
            direction: quantize(points[w[1]] - points[w[0]], total_length, config),
            start: w[0],
            end: w[1],
        })
        .collect();

    merge_runs(runs, points, total_length, config)
}

/// Collapse equal neighbours, then apply the diagonal repairs until stable.
///
/// Repairs, only in these orders: 竖→撇 becomes 撇 and 横→捺 becomes 捺,
/// when the pair spans more than `merge_span_ratio` of the path.
pub fn merge_runs(runs: Vec<Run>, points: &[Point], total_length: f64, config: &ClassifierConfig) -> Vec<Run> {
    let prefix = prefix_lengths(points);
    let span = |start: usize, end: usize| prefix[end] - prefix[start];

    let mut runs = collapse(runs);
    loop {
        let repair = runs.windows(2).position(|w| {
            matches!(
                (w[0].direction, w[1].direction),
                (Direction::Shu, Direction::Pie) | (Direction::Heng, Direction::Na)
            )
                && span(w[0].start, w[1].end) > total_length * config.merge_span_ratio
        });
        let Some(i) = repair else { break };
        let second = runs.remove(i + 1);
        tracing::trace!(first = %runs[i].direction, second = %second.direction, "merge diagonal runs");
        runs[i] = Run {
            direction: second.direction,
            start: runs[i].start,
            end: second.end,
        };
        runs = collapse(runs);
    }
    runs
}

fn collapse(runs: Vec<Run>) -> Vec<Run> {
    let mut out: Vec<Run> = Vec::with_capacity(runs.len());
    for run in runs {
        match out.last_mut() {
            Some(prev) if prev.direction == run.direction => prev.end = run.end,
            _ => out.push(run),
        }
    }
    out
}

/// Cumulative arc length at each point index.
fn prefix_lengths(points: &[Point]) -> Vec<f64> {
    let mut acc = 0.0;
    let mut out = Vec::with_capacity(points.len());
    out.push(0.0);
    for w in points.windows(2) {
        acc += w[0].distance(w[1]);
        out.push(acc);
    }
    out
}
