//! hanzi-strokes: stroke median → calligraphic stroke name.
//!
//! Classifies each stroke of a Chinese character, given as a median
//! polyline in the hanzi-writer coordinate box, into the traditional
//! stroke taxonomy (横, 竖, 横折钩, 卧钩, ...).
//!
//! # Example
//!
//! ```
//! use hanzi_strokes::{GeometricClassifier, Orientation, StrokeLabel, StrokePath};
//!
//! let classifier = GeometricClassifier::default();
//! let path = StrokePath::from_pairs(
//!     &[[150.0, 500.0], [500.0, 510.0], [870.0, 515.0]],
//!     Orientation::YUp,
//! );
//! assert_eq!(classifier.classify_path(&path), StrokeLabel::Heng);
//! ```

#![forbid(unsafe_code)]

mod corners;
mod geom;
mod hook;
mod metrics;
mod resolve;
mod segments;

pub mod classify;
pub mod config;
pub mod direction;
pub mod error;
pub mod eval;
pub mod glyph;
pub mod label;
pub mod path;

// Re-export kurbo so callers build points with the same version.
pub use kurbo;

pub use classify::{FoldClassifier, GeometricClassifier, LegacyClassifier, StrokeTable, TableClassifier};
pub use config::{ClassifierConfig, Orientation};
pub use direction::Direction;
pub use error::StrokeError;
pub use label::{normalize, relaxed_eq, StrokeFamily, StrokeLabel};
pub use path::StrokePath;

/// One stroke to classify, with the character context some strategies use.
#[derive(Debug, Clone, Copy)]
pub struct StrokeInput<'a> {
    pub path: &'a StrokePath,
    /// The character this stroke belongs to, when known.
    pub hanzi: Option<char>,
    /// Zero-based stroke order within the character.
    pub index: usize,
}

impl<'a> StrokeInput<'a> {
    /// A stroke with no character context.
    pub fn new(path: &'a StrokePath) -> Self {
        Self { path, hanzi: None, index: 0 }
    }

    pub fn in_character(path: &'a StrokePath, hanzi: char, index: usize) -> Self {
        Self { path, hanzi: Some(hanzi), index }
    }
}

/// A stroke classification strategy.
///
/// Implementations are total: every input gets a label, and degenerate
/// input gets 点. They are stateless after construction, so one instance
/// may be shared across threads.
pub trait StrokeClassifier: Send + Sync {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    fn classify(&self, input: &StrokeInput<'_>) -> StrokeLabel;
}

/// Classify every stroke of one character, in stroke order.
pub fn classify_character(
    classifier: &dyn StrokeClassifier,
    hanzi: char,
    paths: &[StrokePath],
) -> Vec<StrokeLabel> {
    let labels: Vec<StrokeLabel> = paths
        .iter()
        .enumerate()
        .map(|(index, path)| classifier.classify(&StrokeInput::in_character(path, hanzi, index)))
        .collect();
    tracing::debug!(%hanzi, classifier = classifier.name(), strokes = labels.len(), "classified character");
    labels
}
