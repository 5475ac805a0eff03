//! Single-fold classifier.
//!
//! Looks for at most one turning point (the point farthest from the
//! chord) and reads the stroke from the two legs around it. Coarser than
//! the corner/run pipeline, but useful as a baseline to compare against.

use kurbo::{Point, Vec2};

use crate::config::ClassifierConfig;
use crate::corners::farthest_from_chord;
use crate::direction::Direction;
use crate::geom::angle_between_deg;
use crate::label::StrokeLabel;
use crate::metrics::{curvature, PathMetrics};
use crate::path::StrokePath;
use crate::resolve::length_gate;
use crate::{StrokeClassifier, StrokeInput};

/// Fold when the turning point sits farther than this share of the chord.
const FOLD_DEVIATION: f64 = 0.25;
/// ... and the legs differ by more than this many degrees.
const FOLD_MIN_DEG: f64 = 65.0;

/// Hooks are searched from this share of the point indices onward.
const HOOK_SCAN_FROM: f64 = 0.6;
const HOOK_MIN_DEG: f64 = 100.0;
const HOOK_MIN_RISE: f64 = 10.0;
const HOOK_MIN_LENGTH: f64 = 20.0;

/// Leading share of points used for body curvature.
const BODY_SHARE: f64 = 0.7;

/// Leg direction: horizontal wins only when clearly wider than tall.
const LEG_HORIZONTAL_RATIO: f64 = 1.1;

/// Stroke classification from one fold and one optional hook.
#[derive(Debug, Clone, Default)]
pub struct FoldClassifier {
    config: ClassifierConfig,
}

impl FoldClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn classify_path(&self, path: &StrokePath) -> StrokeLabel {
        if path.is_degenerate() {
            return StrokeLabel::Dian;
        }
        let points = path.points();
        let metrics = PathMetrics::measure(points);
        if let Some(label) = length_gate(&metrics, &self.config) {
            return label;
        }

        let hooked = has_hook(points);
        let last = points.len() - 1;
        let (turn, deviation) = farthest_from_chord(points, 0, last).unwrap_or((0, 0.0));
        let v1 = points[turn] - points[0];
        let v2 = points[last] - points[turn];
        let is_fold = deviation > metrics.chord * FOLD_DEVIATION
            && angle_between_deg(v1, v2) > FOLD_MIN_DEG;

        let label = if is_fold {
            folded(v1, v2, hooked)
        } else {
            straight(points, &metrics, hooked)
        };
        tracing::debug!(is_fold, hooked, %label, "fold classifier");
        label
    }
}

impl StrokeClassifier for FoldClassifier {
    fn name(&self) -> &'static str {
        "fold"
    }

    fn classify(&self, input: &StrokeInput<'_>) -> StrokeLabel {
        self.classify_path(input.path)
    }
}

/// A short tail near the end that doubles back upward against the body.
fn has_hook(points: &[Point]) -> bool {
    let n = points.len();
    if n < 5 {
        return false;
    }
    let first = points[0];
    let last = points[n - 1];
    let from = (n as f64 * HOOK_SCAN_FROM).floor() as usize;
    (from..n - 1).any(|i| {
        let tail = last - points[i];
        angle_between_deg(points[i] - first, tail) > HOOK_MIN_DEG
            && tail.y > HOOK_MIN_RISE
            && tail.hypot() > HOOK_MIN_LENGTH
    })
}

/// Four-way leg direction; 撇 here means "leftward", 提 "upward".
fn leg(v: Vec2) -> Direction {
    if v.x.abs() > v.y.abs() * LEG_HORIZONTAL_RATIO {
        if v.x > 0.0 {
            Direction::Heng
        } else {
            Direction::Pie
        }
    } else if v.y < 0.0 {
        Direction::Shu
    } else {
        Direction::Ti
    }
}

fn folded(v1: Vec2, v2: Vec2, hooked: bool) -> StrokeLabel {
    match leg(v1) {
        Direction::Heng if v2.x < -30.0 => StrokeLabel::HengPie,
        Direction::Heng if hooked => StrokeLabel::HengZheGou,
        Direction::Heng => StrokeLabel::HengZhe,
        Direction::Shu if v2.x > 40.0 => {
            if hooked || v2.y > v2.x * 0.4 {
                StrokeLabel::ShuWanGou
            } else {
                StrokeLabel::ShuZhe
            }
        }
        Direction::Shu if v2.x < -30.0 => StrokeLabel::WanGou,
        Direction::Shu if hooked => StrokeLabel::ShuGou,
        Direction::Shu => StrokeLabel::ShuZhe,
        _ if v1.x > 0.0 && v2.y > 10.0 => StrokeLabel::WoGou,
        _ => StrokeLabel::HengZhe,
    }
}

fn straight(points: &[Point], metrics: &PathMetrics, hooked: bool) -> StrokeLabel {
    let Vec2 { x: dx, y: dy } = metrics.delta;
    let (ax, ay) = (dx.abs(), dy.abs());

    if hooked {
        if ay > ax {
            let share = (points.len() as f64 * BODY_SHARE).floor() as usize;
            let body = &points[..share.max(1)];
            let body_curvature = if body.len() < 2 { 1.0 } else { curvature(body) };
            return if body_curvature < 1.08 {
                StrokeLabel::ShuGou
            } else {
                StrokeLabel::WanGou
            };
        }
        if dx > 0.0 {
            return StrokeLabel::WoGou;
        }
    }
    if dx > 0.0 && dy > 40.0 && dy > ax * 0.3 {
        return StrokeLabel::Ti;
    }
    if ay > ax * 1.5 {
        if dx < -40.0 || metrics.curvature > 1.1 {
            return StrokeLabel::Pie;
        }
        return if dy < 0.0 { StrokeLabel::Shu } else { StrokeLabel::Pie };
    }
    if ax > ay * 2.0 {
        return if dx > 0.0 { StrokeLabel::Heng } else { StrokeLabel::Pie };
    }
    if dx > 0.0 && dy < 0.0 {
        return StrokeLabel::Na;
    }
    if dx < 0.0 && dy < 0.0 {
        return StrokeLabel::Pie;
    }
    if ax > ay {
        StrokeLabel::Heng
    } else {
        StrokeLabel::Shu
    }
}
