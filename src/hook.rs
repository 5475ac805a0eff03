//! Terminal hook detection.
//!
//! A hook is a short tail that sharply reverses the body direction.
//! Gradual curvature fails the angle band; pen-lift flicks fail the
//! length floor; long reversals fail the length ceiling.

use kurbo::Point;

use crate::config::ClassifierConfig;
use crate::geom::angle_between_deg;

/// Where the terminal hook begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookInfo {
    /// Index of the last body point; the hook runs from here to the end.
    pub start_index: usize,
}

/// Scan the tail of `points` for a hook.
///
/// Candidates are scanned from the end backward; the earliest qualifying
/// split wins, so a hook sampled with several points is cut where it starts.
pub fn detect_hook(points: &[Point], total_length: f64, config: &ClassifierConfig) -> Option<HookInfo> {
    let n = points.len();
    if n < 4 {
        return None;
    }
    let last = n - 1;
    let window_start = ((n as f64 * (1.0 - config.hook_tail_fraction)).floor() as usize).clamp(1, n - 2);
    let max_length = total_length * config.hook_max_ratio;

    let mut found = None;
    for i in (window_start..=n - 2).rev() {
        let body = points[i] - points[0];
        let hook = points[last] - points[i];
        if body.hypot() < 1e-9 {
            continue;
        }
        let turn = angle_between_deg(body, hook);
        let hook_length = hook.hypot();
        if (config.hook_min_deg..=config.hook_max_deg).contains(&turn)
            && hook_length > config.hook_min_length
            && hook_length < max_length
        {
            tracing::trace!(index = i, turn, hook_length, "hook candidate");
            found = Some(HookInfo { start_index: i });
        }
    }
    found
}
