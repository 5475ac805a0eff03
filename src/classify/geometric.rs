//! The corner/hook/run pipeline.
//!
//! Per stroke:
//! 1. Measure length, chord and curvature
//! 2. Gate short strokes
//! 3. Find the terminal hook and cut it off the body
//! 4. Split the body at max-deviation corners
//! 5. Quantize and merge direction runs
//! 6. Resolve the run profile into a stroke name

use crate::config::ClassifierConfig;
use crate::corners::find_corners;
use crate::hook::detect_hook;
use crate::label::StrokeLabel;
use crate::metrics::PathMetrics;
use crate::path::StrokePath;
use crate::resolve::{length_gate, resolve, StrokeShape};
use crate::segments::build_runs;
use crate::{StrokeClassifier, StrokeInput};

/// Stroke classification from median geometry alone.
#[derive(Debug, Clone, Default)]
pub struct GeometricClassifier {
    config: ClassifierConfig,
}

impl GeometricClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Classify one median. Total: degenerate paths answer 点.
    pub fn classify_path(&self, path: &StrokePath) -> StrokeLabel {
        if path.is_degenerate() {
            return StrokeLabel::Dian;
        }
        let config = &self.config;
        let points = path.points();
        let metrics = PathMetrics::measure(points);

        if let Some(label) = length_gate(&metrics, config) {
            return label;
        }

        let hook = detect_hook(points, metrics.length, config);
        let body_end = hook.map_or(points.len() - 1, |h| h.start_index);
        let body = &points[..=body_end];
        let corners = find_corners(
            body,
            config.corner_threshold(metrics.length),
            config.min_corner_span,
        );
        let runs = build_runs(body, &corners, metrics.length, config);

        resolve(
            &StrokeShape {
                points,
                metrics,
                hook,
                runs,
            },
            config,
        )
    }
}

impl StrokeClassifier for GeometricClassifier {
    fn name(&self) -> &'static str {
        "geometric"
    }

    fn classify(&self, input: &StrokeInput<'_>) -> StrokeLabel {
        self.classify_path(input.path)
    }
}
