//! hanzi-writer character data.
//!
//! One JSON file per character, `<dir>/<char>.json`, holding SVG outlines
//! under `strokes` and one median polyline per stroke under `medians`.
//! Only the medians are used for classification.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::Orientation;
use crate::error::StrokeError;
use crate::path::StrokePath;

/// The parts of a hanzi-writer character file the classifier reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GlyphData {
    /// SVG outline per stroke. Carried for completeness.
    #[serde(default)]
    pub strokes: Vec<String>,
    pub medians: Vec<Vec<[f64; 2]>>,
}

impl GlyphData {
    pub fn from_json(json: &str) -> Result<Self, StrokeError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, StrokeError> {
        let json = fs::read_to_string(path).map_err(|source| StrokeError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// One path per stroke, in stroke order.
    pub fn paths(&self, orientation: Orientation) -> Vec<StrokePath> {
        self.medians
            .iter()
            .map(|median| StrokePath::from_pairs(median, orientation))
            .collect()
    }

    pub fn stroke_count(&self) -> usize {
        self.medians.len()
    }
}

/// A directory of per-character glyph files.
#[derive(Debug, Clone)]
pub struct GlyphSource {
    dir: PathBuf,
    orientation: Orientation,
}

impl GlyphSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            orientation: Orientation::YUp,
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn path_for(&self, hanzi: char) -> PathBuf {
        self.dir.join(format!("{}.json", hanzi))
    }

    /// Load a character's stroke paths. A missing file is `MissingGlyph`.
    pub fn load(&self, hanzi: char) -> Result<Vec<StrokePath>, StrokeError> {
        let path = self.path_for(hanzi);
        if !path.is_file() {
            return Err(StrokeError::MissingGlyph(hanzi));
        }
        let glyph = GlyphData::load(&path)?;
        tracing::trace!(%hanzi, strokes = glyph.stroke_count(), "loaded glyph");
        Ok(glyph.paths(self.orientation))
    }
}
