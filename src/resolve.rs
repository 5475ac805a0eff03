//! Taxonomy resolution: direction runs + hook + length class → stroke name.
//!
//! Rules apply in priority order:
//! 1. short strokes are dots unless curvature or direction clearly say otherwise
//! 2. single runs read the body vector, refined by the hook
//! 3. multi-run profiles are looked up by their direction key
//! 4. anything unmatched falls back on the first direction
//!
//! Every reachable state ends in rule 4 at the latest, so resolution is total.

use kurbo::Point;

use crate::config::ClassifierConfig;
use crate::direction::{sequence_key, Direction};
use crate::hook::HookInfo;
use crate::label::StrokeLabel;
use crate::metrics::{curvature, PathMetrics};
use crate::segments::Run;

/// Everything the resolver reads about one stroke.
#[derive(Debug, Clone)]
pub struct StrokeShape<'a> {
    /// The full path, hook included.
    pub points: &'a [Point],
    pub metrics: PathMetrics,
    pub hook: Option<HookInfo>,
    /// Direction runs over the body (the path up to the hook).
    pub runs: Vec<Run>,
}

impl StrokeShape<'_> {
    fn body_end(&self) -> usize {
        self.hook
            .map(|h| h.start_index)
            .unwrap_or(self.points.len().saturating_sub(1))
    }

    fn body(&self) -> &[Point] {
        &self.points[..=self.body_end()]
    }

    /// Whether the hook tail moves upward.
    fn hook_rises(&self) -> bool {
        match (self.hook, self.points.last()) {
            (Some(h), Some(&last)) => last.y > self.points[h.start_index].y,
            _ => false,
        }
    }
}

/// Rule 1: the short-stroke gate. `None` means the stroke is long enough
/// for directional analysis.
pub fn length_gate(metrics: &PathMetrics, config: &ClassifierConfig) -> Option<StrokeLabel> {
    if !config.is_short(metrics.length, metrics.point_count) {
        return None;
    }
    let (dx, dy) = (metrics.delta.x, metrics.delta.y);
    let label = if metrics.curvature > config.short_pie_curvature && dx < 0.0 {
        StrokeLabel::Pie
    } else if dx > 0.0 && dx.abs() > dy.abs() * config.short_heng_ratio {
        StrokeLabel::Heng
    } else {
        StrokeLabel::Dian
    };
    tracing::debug!(length = metrics.length, %label, "short stroke");
    Some(label)
}

/// Rules 2-4.
pub fn resolve(shape: &StrokeShape<'_>, config: &ClassifierConfig) -> StrokeLabel {
    let dirs: Vec<Direction> = shape.runs.iter().map(|r| r.direction).collect();
    let key = sequence_key(&dirs);
    let label = match dirs.len() {
        0 => StrokeLabel::Dian,
        1 => single_run(shape, dirs[0], config),
        _ => profile(shape, &key, config).unwrap_or_else(|| fallback(shape, dirs[0])),
    };
    tracing::debug!(sequence = %key, hooked = shape.hook.is_some(), %label, "resolved stroke");
    label
}

/// Rule 2: one direction over the whole body.
fn single_run(shape: &StrokeShape<'_>, dir: Direction, config: &ClassifierConfig) -> StrokeLabel {
    let body = shape.body();
    let delta = match (body.first(), body.last()) {
        (Some(&first), Some(&last)) => last - first,
        _ => return StrokeLabel::Dian,
    };

    if shape.hook.is_none() {
        return match dir {
            Direction::Shu if delta.x < 0.0 && shape.metrics.curvature > config.curved_pie_curvature => {
                StrokeLabel::Pie
            }
            d => d.label(),
        };
    }

    match dir {
        Direction::Shu => {
            if curvature(body) < config.straight_body_curvature {
                StrokeLabel::ShuGou
            } else {
                StrokeLabel::WanGou
            }
        }
        Direction::Na => {
            if delta.x.abs() > delta.y.abs() {
                StrokeLabel::WoGou
            } else {
                StrokeLabel::XieGou
            }
        }
        Direction::Heng => {
            if shape.hook_rises() {
                StrokeLabel::WoGou
            } else {
                StrokeLabel::HengGou
            }
        }
        // A hook on a falling-left stroke is a rendering artifact.
        Direction::Pie => StrokeLabel::Pie,
        Direction::Ti => StrokeLabel::Ti,
        Direction::Dian => StrokeLabel::Dian,
    }
}

/// Rule 3: fixed profiles for two to four runs.
fn profile(shape: &StrokeShape<'_>, key: &str, config: &ClassifierConfig) -> Option<StrokeLabel> {
    let hooked = shape.hook.is_some();
    let second = shape.runs.get(1)?.delta(shape.points);

    let label = match key {
        "横-竖" if hooked => StrokeLabel::HengZheGou,
        "横-竖" if second.x < -config.heng_pie_dx => StrokeLabel::HengPie,
        "横-竖" => StrokeLabel::HengZhe,
        "横-撇" if hooked => StrokeLabel::HengZheGou,
        "横-撇" => StrokeLabel::HengPie,
        "横-捺" if hooked => StrokeLabel::HengXieGou,

        "竖-横" if hooked => StrokeLabel::ShuWanGou,
        "竖-横" if second.y > second.x.abs() * config.tail_rise_slope => StrokeLabel::ShuWanGou,
        "竖-横" => StrokeLabel::ShuZhe,
        "竖-提" if hooked => StrokeLabel::ShuWanGou,
        "竖-提" => StrokeLabel::ShuTi,
        "竖-捺" if hooked => StrokeLabel::ShuWanGou,
        "竖-捺" => StrokeLabel::ShuWan,
        "竖-撇" => StrokeLabel::Pie,

        "撇-点" | "撇-捺" => StrokeLabel::PieDian,
        "撇-横" | "撇-提" => StrokeLabel::PieZhe,

        "捺-横" if hooked => StrokeLabel::WoGou,
        "捺-横" => StrokeLabel::Na,

        "横-竖-横" if is_flat_rightward(shape, config) => StrokeLabel::WoGou,
        "横-竖-横" if hooked && shape.hook_rises() => StrokeLabel::HengZheWanGou,
        "横-竖-横" if hooked => StrokeLabel::HengZheZheGou,
        "横-竖-横" => StrokeLabel::HengZheWan,
        "横-竖-提" => StrokeLabel::HengZheTi,
        "横-撇-竖" | "横-撇-捺" if hooked => StrokeLabel::HengPieWanGou,
        "竖-横-竖" if hooked => StrokeLabel::ShuZheZheGou,
        "竖-横-竖" => StrokeLabel::ShuZheZhe,
        "竖-横-撇" => StrokeLabel::ShuZhePie,

        "横-撇-横-撇" => StrokeLabel::HengZheZhePie,
        "横-竖-横-竖" if hooked => StrokeLabel::HengZheZheZheGou,
        _ => return None,
    };
    Some(label)
}

fn is_flat_rightward(shape: &StrokeShape<'_>, config: &ClassifierConfig) -> bool {
    let d = shape.metrics.delta;
    d.x > 0.0 && d.x.abs() > d.y.abs() * config.flat_ratio
}

/// Rule 4: first direction plus hook flag.
fn fallback(shape: &StrokeShape<'_>, first: Direction) -> StrokeLabel {
    let hooked = shape.hook.is_some();
    match (first, hooked) {
        (Direction::Heng, true) => StrokeLabel::HengZheGou,
        (Direction::Heng, false) => StrokeLabel::HengZhe,
        (Direction::Shu, true) => StrokeLabel::ShuGou,
        (Direction::Shu, false) => StrokeLabel::ShuZhe,
        (_, true) => StrokeLabel::WanGou,
        (_, false) => StrokeLabel::HengZhe,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn run(direction: Direction, start: usize, end: usize) -> Run {
        Run { direction, start, end }
    }

    fn shape<'a>(points: &'a [Point], hook: Option<usize>, runs: Vec<Run>) -> StrokeShape<'a> {
        StrokeShape {
            points,
            metrics: PathMetrics::measure(points),
            hook: hook.map(|start_index| HookInfo { start_index }),
            runs,
        }
    }

    #[test]
    fn short_strokes_are_dots_unless_clearly_shaped() {
        let config = ClassifierConfig::default();
        let dot = PathMetrics::measure(&pts(&[(0.0, 0.0), (60.0, -80.0)]));
        assert_eq!(length_gate(&dot, &config), Some(StrokeLabel::Dian));

        let flat = PathMetrics::measure(&pts(&[(0.0, 0.0), (150.0, 10.0)]));
        assert_eq!(length_gate(&flat, &config), Some(StrokeLabel::Heng));

        let curled = PathMetrics::measure(&pts(&[(0.0, 0.0), (-20.0, -80.0), (-100.0, -100.0)]));
        assert_eq!(length_gate(&curled, &config), Some(StrokeLabel::Pie));

        let long = PathMetrics::measure(&pts(&[(0.0, 0.0), (0.0, -300.0)]));
        assert_eq!(length_gate(&long, &config), None);
    }

    #[test]
    fn bowed_vertical_is_pie() {
        let p = pts(&[(400.0, 800.0), (300.0, 600.0), (390.0, 400.0)]);
        let s = shape(&p, None, vec![run(Direction::Shu, 0, 2)]);
        assert_eq!(resolve(&s, &ClassifierConfig::default()), StrokeLabel::Pie);
    }

    #[test]
    fn hooked_pie_stays_pie() {
        let p = pts(&[(500.0, 800.0), (350.0, 550.0), (200.0, 300.0), (230.0, 340.0)]);
        let s = shape(&p, Some(2), vec![run(Direction::Pie, 0, 2)]);
        assert_eq!(resolve(&s, &ClassifierConfig::default()), StrokeLabel::Pie);
    }

    #[test]
    fn hooked_horizontal_depends_on_hook_direction() {
        let config = ClassifierConfig::default();
        let down = pts(&[(100.0, 600.0), (400.0, 600.0), (700.0, 600.0), (640.0, 540.0)]);
        let s = shape(&down, Some(2), vec![run(Direction::Heng, 0, 2)]);
        assert_eq!(resolve(&s, &config), StrokeLabel::HengGou);

        let up = pts(&[(100.0, 600.0), (400.0, 600.0), (700.0, 600.0), (640.0, 660.0)]);
        let s = shape(&up, Some(2), vec![run(Direction::Heng, 0, 2)]);
        assert_eq!(resolve(&s, &config), StrokeLabel::WoGou);
    }

    #[test]
    fn heng_shu_profiles() {
        let config = ClassifierConfig::default();
        let fold = pts(&[(100.0, 700.0), (500.0, 700.0), (480.0, 200.0)]);
        let runs = vec![run(Direction::Heng, 0, 1), run(Direction::Shu, 1, 2)];
        assert_eq!(resolve(&shape(&fold, None, runs.clone()), &config), StrokeLabel::HengZhe);

        let leaning = pts(&[(100.0, 700.0), (500.0, 700.0), (400.0, 200.0)]);
        assert_eq!(resolve(&shape(&leaning, None, runs.clone()), &config), StrokeLabel::HengPie);

        let hooked = pts(&[(100.0, 700.0), (500.0, 700.0), (480.0, 200.0), (420.0, 250.0)]);
        let hooked_runs = vec![run(Direction::Heng, 0, 1), run(Direction::Shu, 1, 2)];
        assert_eq!(resolve(&shape(&hooked, Some(2), hooked_runs), &config), StrokeLabel::HengZheGou);
    }

    #[test]
    fn shu_heng_rising_tail_is_shu_wan_gou() {
        let config = ClassifierConfig::default();
        let runs = vec![run(Direction::Shu, 0, 1), run(Direction::Heng, 1, 2)];
        let flat = pts(&[(300.0, 700.0), (300.0, 300.0), (700.0, 300.0)]);
        assert_eq!(resolve(&shape(&flat, None, runs.clone()), &config), StrokeLabel::ShuZhe);
        let rising = pts(&[(300.0, 700.0), (300.0, 300.0), (700.0, 420.0)]);
        assert_eq!(resolve(&shape(&rising, None, runs), &config), StrokeLabel::ShuWanGou);
    }

    #[test]
    fn flat_three_run_path_is_wo_gou() {
        let p = pts(&[(100.0, 400.0), (300.0, 410.0), (310.0, 330.0), (800.0, 340.0), (760.0, 400.0)]);
        let runs = vec![
            run(Direction::Heng, 0, 1),
            run(Direction::Shu, 1, 2),
            run(Direction::Heng, 2, 3),
        ];
        assert_eq!(resolve(&shape(&p, Some(3), runs), &ClassifierConfig::default()), StrokeLabel::WoGou);
    }

    /// Resolve a run profile over a steep zigzag: one point per run
    /// boundary, plus an optional hook point offset from the body end.
    fn profile_label(dirs: &[Direction], hook: Option<(f64, f64)>) -> StrokeLabel {
        let n = dirs.len();
        let mut coords: Vec<(f64, f64)> = (0..=n)
            .map(|i| (100.0 + 10.0 * i as f64, 800.0 - 100.0 * i as f64))
            .collect();
        if let Some((dx, dy)) = hook {
            let (x, y) = coords[n];
            coords.push((x + dx, y + dy));
        }
        let p = pts(&coords);
        let runs = dirs.iter().enumerate().map(|(i, &d)| run(d, i, i + 1)).collect();
        resolve(&shape(&p, hook.map(|_| n), runs), &ClassifierConfig::default())
    }

    #[test]
    fn every_profile_row() {
        use Direction::*;
        use StrokeLabel as L;
        let down = Some((-20.0, -30.0));
        let up = Some((-20.0, 30.0));
        let cases: &[(&[Direction], Option<(f64, f64)>, StrokeLabel)] = &[
            (&[Heng, Shu], down, L::HengZheGou),
            (&[Heng, Shu], None, L::HengZhe),
            (&[Heng, Pie], down, L::HengZheGou),
            (&[Heng, Pie], None, L::HengPie),
            (&[Heng, Na], down, L::HengXieGou),
            (&[Shu, Heng], down, L::ShuWanGou),
            (&[Shu, Heng], None, L::ShuZhe),
            (&[Shu, Ti], down, L::ShuWanGou),
            (&[Shu, Ti], None, L::ShuTi),
            (&[Shu, Na], down, L::ShuWanGou),
            (&[Shu, Na], None, L::ShuWan),
            (&[Shu, Pie], None, L::Pie),
            (&[Pie, Dian], None, L::PieDian),
            (&[Pie, Na], None, L::PieDian),
            (&[Pie, Heng], None, L::PieZhe),
            (&[Pie, Ti], None, L::PieZhe),
            (&[Na, Heng], down, L::WoGou),
            (&[Na, Heng], None, L::Na),
            (&[Heng, Shu, Heng], up, L::HengZheWanGou),
            (&[Heng, Shu, Heng], down, L::HengZheZheGou),
            (&[Heng, Shu, Heng], None, L::HengZheWan),
            (&[Heng, Shu, Ti], None, L::HengZheTi),
            (&[Heng, Pie, Shu], down, L::HengPieWanGou),
            (&[Heng, Pie, Na], down, L::HengPieWanGou),
            (&[Shu, Heng, Shu], down, L::ShuZheZheGou),
            (&[Shu, Heng, Shu], None, L::ShuZheZhe),
            (&[Shu, Heng, Pie], None, L::ShuZhePie),
            (&[Heng, Pie, Heng, Pie], None, L::HengZheZhePie),
            (&[Heng, Shu, Heng, Shu], down, L::HengZheZheZheGou),
        ];
        for &(dirs, hook, expected) in cases {
            assert_eq!(
                profile_label(dirs, hook),
                expected,
                "{} hooked={}",
                sequence_key(dirs),
                hook.is_some()
            );
        }
    }

    #[test]
    fn unhooked_rows_without_an_entry_fall_back() {
        use Direction::*;
        assert_eq!(profile_label(&[Heng, Na], None), StrokeLabel::HengZhe);
        assert_eq!(profile_label(&[Heng, Pie, Shu], None), StrokeLabel::HengZhe);
        assert_eq!(profile_label(&[Heng, Shu, Heng, Shu], None), StrokeLabel::HengZhe);
    }

    #[test]
    fn unmatched_sequences_fall_back_on_first_direction() {
        let config = ClassifierConfig::default();
        let p = pts(&[(0.0, 0.0), (100.0, 100.0), (200.0, 0.0), (100.0, -100.0), (0.0, -120.0)]);
        let runs = vec![
            run(Direction::Ti, 0, 1),
            run(Direction::Na, 1, 2),
            run(Direction::Pie, 2, 3),
            run(Direction::Heng, 3, 4),
        ];
        assert_eq!(resolve(&shape(&p, None, runs.clone()), &config), StrokeLabel::HengZhe);
        assert_eq!(resolve(&shape(&p, Some(3), runs), &config), StrokeLabel::WanGou);
    }
}
