//! First-generation endpoint classifier.
//!
//! Reads the stroke from a handful of sampled points: the endpoints, the
//! index thirds, the midpoint and the final segment. No corner search and
//! no merging, so it is the weakest strategy, and the one every later
//! change is measured from.

use kurbo::{Point, Vec2};

use crate::label::StrokeLabel;
use crate::path::StrokePath;
use crate::{StrokeClassifier, StrokeInput};

/// Endpoint distance below which any stroke is a dot.
const DOT_LENGTH: f64 = 100.0;
/// Short sparse strokes inside this box are dots too.
const SMALL_LENGTH: f64 = 260.0;
const SMALL_MAX_POINTS: usize = 5;
const SMALL_MAX_DX: f64 = 200.0;
const SMALL_MAX_DY: f64 = 280.0;

/// Compound shapes need this many points and this endpoint distance.
const COMPOUND_MIN_POINTS: usize = 6;
const COMPOUND_MIN_LENGTH: f64 = 350.0;
/// A leg is "mainly" horizontal or vertical past this axis ratio.
const MAINLY: f64 = 1.5;

const HENG_PIE_MIN_LENGTH: f64 = 250.0;
const HENG_PIE_DX: f64 = 50.0;

/// The final segment counts as a hook when longer than this and rising.
const HOOK_MIN_LENGTH: f64 = 60.0;
const HOOK_MIN_RISE: f64 = 20.0;
/// Share of point indices measuring the body before the hook.
const HOOK_BODY_SHARE: f64 = 0.7;

/// Stroke classification from sampled endpoints and fixed ratio ladders.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyClassifier;

impl LegacyClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_path(&self, path: &StrokePath) -> StrokeLabel {
        if path.is_degenerate() {
            return StrokeLabel::Dian;
        }
        let p = path.points();
        let n = p.len();
        let delta = p[n - 1] - p[0];
        let length = delta.hypot();

        if length < DOT_LENGTH
            || (length < SMALL_LENGTH
                && n <= SMALL_MAX_POINTS
                && delta.x.abs() < SMALL_MAX_DX
                && delta.y.abs() < SMALL_MAX_DY)
        {
            return StrokeLabel::Dian;
        }

        let label = compound(p, length)
            .or_else(|| heng_pie(p, length))
            .or_else(|| hooked(p))
            .unwrap_or_else(|| basic(delta));
        tracing::debug!(length, points = n, %label, "legacy classifier");
        label
    }
}

impl StrokeClassifier for LegacyClassifier {
    fn name(&self) -> &'static str {
        "legacy"
    }

    fn classify(&self, input: &StrokeInput<'_>) -> StrokeLabel {
        self.classify_path(input.path)
    }
}

fn mainly_horizontal(v: Vec2) -> bool {
    v.x.abs() > v.y.abs() * MAINLY
}

fn mainly_vertical(v: Vec2) -> bool {
    v.y.abs() > v.x.abs() * MAINLY
}

/// Two-leg shapes read from the first and last thirds of the points.
fn compound(p: &[Point], length: f64) -> Option<StrokeLabel> {
    let n = p.len();
    if n < COMPOUND_MIN_POINTS || length <= COMPOUND_MIN_LENGTH {
        return None;
    }
    let first = p[n / 3] - p[0];
    let last = p[n - 1] - p[2 * n / 3];

    if mainly_horizontal(first) && first.x > 0.0 && mainly_vertical(last) && last.y < 0.0 {
        let tail = p[n - 1] - p[n - 2];
        return Some(if tail.x < -HENG_PIE_DX && tail.y > 0.0 {
            StrokeLabel::HengZheGou
        } else {
            StrokeLabel::HengZhe
        });
    }
    if mainly_vertical(first) && first.y < 0.0 && mainly_horizontal(last) && last.x > 0.0 && last.y > -HENG_PIE_DX {
        return Some(StrokeLabel::ShuZhe);
    }
    if first.x > 0.0 && mainly_horizontal(first) && last.x < 0.0 && last.y < 0.0 {
        return Some(StrokeLabel::HengPie);
    }
    None
}

/// Rightward then down-left around the middle point.
fn heng_pie(p: &[Point], length: f64) -> Option<StrokeLabel> {
    let n = p.len();
    if n < 5 || length <= HENG_PIE_MIN_LENGTH {
        return None;
    }
    let mid = n / 2;
    let first_dx = p[mid].x - p[0].x;
    let last = p[n - 1] - p[mid];
    (first_dx > HENG_PIE_DX && last.x < -HENG_PIE_DX && last.y < 0.0).then_some(StrokeLabel::HengPie)
}

/// A long rising final segment, read against the body up to 70% of the points.
fn hooked(p: &[Point]) -> Option<StrokeLabel> {
    let n = p.len();
    if n < 5 {
        return None;
    }
    let hook = p[n - 1] - p[n - 2];
    if hook.hypot() <= HOOK_MIN_LENGTH || hook.y <= HOOK_MIN_RISE {
        return None;
    }
    let body_end = ((n as f64 * HOOK_BODY_SHARE).floor() as usize).min(n - 1);
    let body = p[body_end] - p[0];

    if body.y < -body.x.abs() * 2.0 && hook.x < 0.0 {
        Some(StrokeLabel::ShuGou)
    } else if body.x > 0.0 && body.y < 0.0 {
        Some(StrokeLabel::XieGou)
    } else if body.y < 0.0 && hook.x > 0.0 {
        Some(StrokeLabel::ShuWanGou)
    } else if body.x.abs() > body.y.abs() && hook.y > 30.0 {
        Some(StrokeLabel::WoGou)
    } else if body.y < 0.0 && hook.x < 0.0 {
        Some(StrokeLabel::WanGou)
    } else {
        None
    }
}

/// Ratio ladder on the endpoint vector. Anything it cannot place is 横折.
fn basic(delta: Vec2) -> StrokeLabel {
    let Vec2 { x: dx, y: dy } = delta;
    let (ax, ay) = (dx.abs(), dy.abs());
    if dx > 0.0 && ax > ay * 3.0 {
        StrokeLabel::Heng
    } else if dx > 0.0 && dy > 0.0 && ay > ax * 0.25 {
        StrokeLabel::Ti
    } else if dx > 0.0 && ax > ay * 2.0 {
        StrokeLabel::Heng
    } else if dy < 0.0 && ay > ax * 4.0 {
        StrokeLabel::Shu
    } else if dx < 0.0 && dy < 0.0 {
        StrokeLabel::Pie
    } else if dy < 0.0 && ay > ax * 2.0 {
        StrokeLabel::Shu
    } else if dx > 0.0 && dy < 0.0 {
        StrokeLabel::Na
    } else {
        StrokeLabel::HengZhe
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Orientation;

    fn classify(coords: &[[f64; 2]]) -> StrokeLabel {
        LegacyClassifier.classify_path(&StrokePath::from_pairs(coords, Orientation::YUp))
    }

    #[test]
    fn basic_strokes() {
        assert_eq!(classify(&[[150.0, 500.0], [500.0, 510.0], [870.0, 515.0]]), StrokeLabel::Heng);
        assert_eq!(classify(&[[512.0, 850.0], [512.0, 500.0], [512.0, 120.0]]), StrokeLabel::Shu);
        assert_eq!(classify(&[[450.0, 880.0], [330.0, 830.0], [180.0, 780.0]]), StrokeLabel::Pie);
        assert_eq!(classify(&[[500.0, 600.0], [700.0, 400.0], [900.0, 200.0]]), StrokeLabel::Na);
        assert_eq!(classify(&[[170.0, 330.0], [300.0, 400.0], [430.0, 470.0]]), StrokeLabel::Ti);
    }

    #[test]
    fn small_strokes_are_dots() {
        assert_eq!(classify(&[]), StrokeLabel::Dian);
        assert_eq!(classify(&[[500.0, 500.0], [560.0, 440.0]]), StrokeLabel::Dian);
        assert_eq!(classify(&[[300.0, 600.0], [230.0, 480.0]]), StrokeLabel::Dian);
    }

    #[test]
    fn thirds_read_heng_zhe() {
        let label = classify(&[
            [200.0, 700.0],
            [400.0, 700.0],
            [600.0, 700.0],
            [600.0, 500.0],
            [600.0, 300.0],
            [600.0, 100.0],
        ]);
        assert_eq!(label, StrokeLabel::HengZhe);
    }

    #[test]
    fn thirds_with_a_left_flick_read_heng_zhe_gou() {
        let label = classify(&[
            [200.0, 700.0],
            [350.0, 700.0],
            [500.0, 700.0],
            [650.0, 700.0],
            [650.0, 550.0],
            [650.0, 400.0],
            [650.0, 250.0],
            [650.0, 100.0],
            [590.0, 110.0],
        ]);
        assert_eq!(label, StrokeLabel::HengZheGou);
    }

    #[test]
    fn rising_final_segment_is_a_hook() {
        let label = classify(&[
            [512.0, 850.0],
            [512.0, 650.0],
            [512.0, 450.0],
            [512.0, 250.0],
            [512.0, 180.0],
            [440.0, 240.0],
        ]);
        assert_eq!(label, StrokeLabel::ShuGou);
    }

    #[test]
    fn unplaceable_direction_reads_heng_zhe() {
        // Up and to the left matches no rung of the ladder.
        assert_eq!(classify(&[[800.0, 200.0], [500.0, 500.0]]), StrokeLabel::HengZhe);
    }
}
