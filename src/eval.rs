//! Corpus evaluation for stroke classifiers.
//!
//! Classifies every character of a corpus from its glyph medians and
//! compares the result against the expected stroke names, per character
//! and per stroke. Misreads are tallied as `expected ➔ actual` pairs.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;
use serde::Deserialize;

use crate::classify_character;
use crate::error::StrokeError;
use crate::glyph::GlyphSource;
use crate::label::{relaxed_eq, StrokeLabel};
use crate::StrokeClassifier;

/// One character and its expected stroke names, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    pub hanzi: char,
    pub strokes: Vec<StrokeLabel>,
}

/// A list of characters with known stroke names.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub entries: Vec<CorpusEntry>,
}

#[derive(Deserialize)]
struct RawEntry {
    #[serde(rename = "char")]
    hanzi: char,
    strokes: Vec<String>,
}

impl Corpus {
    /// Parse `[{"char": "十", "strokes": ["横", "竖"]}, ...]`.
    pub fn from_json(json: &str) -> Result<Self, StrokeError> {
        let raw: Vec<RawEntry> = serde_json::from_str(json)?;
        let entries = raw
            .into_iter()
            .map(|e| {
                let strokes = e
                    .strokes
                    .iter()
                    .map(|s| s.parse::<StrokeLabel>())
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(CorpusEntry { hanzi: e.hanzi, strokes })
            })
            .collect::<Result<Vec<_>, StrokeError>>()?;
        Ok(Self { entries })
    }

    pub fn load(path: &Path) -> Result<Self, StrokeError> {
        let json = fs::read_to_string(path).map_err(|source| StrokeError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The 48-character stroke-order reference corpus.
    pub fn standard() -> Self {
        use StrokeLabel::*;
        let table: &[(char, &[StrokeLabel])] = &[
            ('一', &[Heng]),
            ('十', &[Heng, Shu]),
            ('二', &[Heng, Heng]),
            ('三', &[Heng, Heng, Heng]),
            ('土', &[Heng, Shu, Heng]),
            ('王', &[Heng, Heng, Shu, Heng]),
            ('口', &[Shu, HengZhe, Heng]),
            ('日', &[Shu, HengZhe, Heng, Heng]),
            ('月', &[Pie, HengZheGou, Heng, Heng]),
            ('目', &[Shu, HengZhe, Heng, Heng, Heng]),
            ('山', &[Shu, ShuZhe, Shu]),
            ('川', &[Pie, Shu, Shu]),
            ('工', &[Heng, Shu, Heng]),
            ('大', &[Heng, Pie, Na]),
            ('木', &[Heng, Shu, Pie, Na]),
            ('人', &[Pie, Na]),
            ('八', &[Pie, Na]),
            ('小', &[ShuGou, Dian, Dian]),
            ('水', &[ShuGou, HengPie, Pie, Na]),
            ('火', &[Dian, Pie, Pie, Na]),
            ('心', &[Dian, WoGou, Dian, Dian]),
            ('中', &[Shu, HengZhe, Heng, Shu]),
            ('了', &[HengPie, ShuWanGou]),
            ('子', &[HengPie, WanGou, Heng]),
            ('上', &[Shu, Heng, Heng]),
            ('下', &[Heng, Shu, Dian]),
            ('田', &[Shu, HengZhe, Heng, Shu, Heng]),
            ('我', &[Pie, Heng, ShuGou, Ti, XieGou, Pie, Dian]),
            ('他', &[Pie, Shu, HengZheGou, Shu, ShuWanGou]),
            ('河', &[Dian, Dian, Ti, Heng, Shu, HengZhe, Heng, ShuGou]),
            ('花', &[Heng, Shu, Shu, Pie, Shu, Pie, ShuWanGou]),
            ('字', &[Dian, Dian, HengGou, HengPie, WanGou, Heng]),
            ('过', &[Heng, ShuGou, Dian, Dian, HengZheZhePie, Na]),
            ('打', &[Heng, ShuGou, Ti, Heng, ShuGou]),
            ('吃', &[Shu, HengZhe, Heng, Pie, Heng, HengZheWanGou]),
            ('林', &[Heng, Shu, Pie, Na, Heng, Shu, Pie, Na]),
            ('明', &[Shu, HengZhe, Heng, Heng, Pie, HengZheGou, Heng, Heng]),
            ('妈', &[PieDian, Pie, Heng, HengZhe, ShuZheZheGou, Heng]),
            ('们', &[Pie, Shu, Dian, Shu, HengZheGou]),
            ('清', &[Dian, Dian, Ti, Heng, Heng, Shu, Heng, Shu, HengZheGou, Heng, Heng]),
            ('草', &[Heng, Shu, Shu, Shu, HengZhe, Heng, Heng, Heng, Shu]),
            ('家', &[Dian, Dian, HengGou, Heng, Pie, WanGou, Pie, Pie, Pie, Na]),
            ('远', &[Heng, Heng, Pie, ShuWanGou, Dian, HengZheZhePie, Na]),
            ('把', &[Heng, ShuGou, Ti, HengZhe, Shu, Heng, ShuWanGou]),
            ('听', &[Shu, HengZhe, Heng, Pie, Pie, Heng, Shu]),
            ('休', &[Pie, Shu, Heng, Shu, Pie, Na]),
            ('线', &[PieZhe, PieZhe, Ti, Heng, Heng, XieGou, Pie, Dian]),
            ('丝', &[PieZhe, PieZhe, PieZhe, PieZhe, Heng]),
        ];
        Self {
            entries: table
                .iter()
                .map(|&(hanzi, strokes)| CorpusEntry { hanzi, strokes: strokes.to_vec() })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// How a recognized label is compared with the expected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Exact label.
    #[default]
    Strict,
    /// Same family; see [`crate::label::StrokeFamily`].
    Relaxed,
}

impl MatchMode {
    pub fn matches(self, expected: StrokeLabel, actual: StrokeLabel) -> bool {
        match self {
            MatchMode::Strict => expected == actual,
            MatchMode::Relaxed => relaxed_eq(expected, actual),
        }
    }
}

/// An expected label read as something else, or not read at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Misread {
    pub expected: StrokeLabel,
    /// `None` when the glyph had fewer strokes than expected.
    pub actual: Option<StrokeLabel>,
}

impl fmt::Display for Misread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.actual {
            Some(actual) => write!(f, "{} \u{2794} {}", self.expected, actual),
            None => write!(f, "{} \u{2794} 无法识别", self.expected),
        }
    }
}

/// Result for one character.
#[derive(Debug, Clone)]
pub struct CharOutcome {
    pub hanzi: char,
    pub expected: Vec<StrokeLabel>,
    pub actual: Vec<StrokeLabel>,
    /// Load failure, if the glyph could not be read.
    pub error: Option<String>,
    pub passed: bool,
}

/// Aggregate evaluation report.
#[derive(Debug, Clone)]
pub struct EvalReport {
    pub classifier: &'static str,
    pub mode: MatchMode,
    pub outcomes: Vec<CharOutcome>,
    pub chars_passed: usize,
    pub strokes_total: usize,
    pub strokes_correct: usize,
    /// Misread pairs with counts, fewest first.
    pub misreads: Vec<(Misread, usize)>,
    pub missing: Vec<char>,
    pub elapsed_ms: u128,
}

impl EvalReport {
    pub fn chars_total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn all_passed(&self) -> bool {
        self.chars_passed == self.outcomes.len()
    }

    pub fn char_rate(&self) -> f64 {
        ratio(self.chars_passed, self.outcomes.len())
    }

    pub fn stroke_rate(&self) -> f64 {
        ratio(self.strokes_correct, self.strokes_total)
    }
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

/// Run `classifier` over every corpus character found in `source`.
///
/// Characters are classified in parallel; the report keeps corpus order.
/// A glyph that cannot be loaded fails its character without aborting
/// the run.
pub fn evaluate(
    classifier: &dyn StrokeClassifier,
    corpus: &Corpus,
    source: &GlyphSource,
    mode: MatchMode,
) -> Result<EvalReport, StrokeError> {
    if corpus.is_empty() {
        return Err(StrokeError::EmptyCorpus);
    }
    let t_start = Instant::now();

    let outcomes: Vec<CharOutcome> = corpus
        .entries
        .par_iter()
        .map(|entry| evaluate_char(classifier, entry, source, mode))
        .collect();

    let mut chars_passed = 0;
    let mut strokes_total = 0;
    let mut strokes_correct = 0;
    let mut counts: HashMap<Misread, usize> = HashMap::new();
    let mut missing = Vec::new();

    for outcome in &outcomes {
        if outcome.passed {
            chars_passed += 1;
        }
        if outcome.error.is_some() {
            missing.push(outcome.hanzi);
            continue;
        }
        strokes_total += outcome.expected.len();
        for (i, &expected) in outcome.expected.iter().enumerate() {
            let actual = outcome.actual.get(i).copied();
            match actual {
                Some(a) if mode.matches(expected, a) => strokes_correct += 1,
                _ => *counts.entry(Misread { expected, actual }).or_default() += 1,
            }
        }
    }

    let mut misreads: Vec<(Misread, usize)> = counts.into_iter().collect();
    misreads.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));

    let report = EvalReport {
        classifier: classifier.name(),
        mode,
        outcomes,
        chars_passed,
        strokes_total,
        strokes_correct,
        misreads,
        missing,
        elapsed_ms: t_start.elapsed().as_millis(),
    };
    tracing::info!(
        classifier = report.classifier,
        chars = report.chars_passed,
        strokes = report.strokes_correct,
        "evaluation finished"
    );
    Ok(report)
}

fn evaluate_char(
    classifier: &dyn StrokeClassifier,
    entry: &CorpusEntry,
    source: &GlyphSource,
    mode: MatchMode,
) -> CharOutcome {
    let paths = match source.load(entry.hanzi) {
        Ok(paths) => paths,
        Err(err) => {
            tracing::warn!(hanzi = %entry.hanzi, error = %err, "skipping character");
            return CharOutcome {
                hanzi: entry.hanzi,
                expected: entry.strokes.clone(),
                actual: Vec::new(),
                error: Some(err.to_string()),
                passed: false,
            };
        }
    };
    let actual = classify_character(classifier, entry.hanzi, &paths);
    let passed = actual.len() == entry.strokes.len()
        && entry
            .strokes
            .iter()
            .zip(&actual)
            .all(|(&e, &a)| mode.matches(e, a));
    CharOutcome {
        hanzi: entry.hanzi,
        expected: entry.strokes.clone(),
        actual,
        error: None,
        passed,
    }
}

// ── Display ──────────────────────────────────────────────────────

fn join(labels: &[StrokeLabel]) -> String {
    labels.iter().map(|l| l.as_str()).collect::<Vec<_>>().join(", ")
}

impl fmt::Display for CharOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.passed { "ok  " } else { "FAIL" };
        if let Some(err) = &self.error {
            return write!(f, "  {} {}  {}", mark, self.hanzi, err);
        }
        write!(f, "  {} {}  [{}]", mark, self.hanzi, join(&self.actual))?;
        if !self.passed {
            write!(f, "\n         expected [{}]", join(&self.expected))?;
        }
        Ok(())
    }
}

impl fmt::Display for EvalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match self.mode {
            MatchMode::Strict => "strict",
            MatchMode::Relaxed => "relaxed",
        };
        writeln!(f)?;
        writeln!(f, "  Eval        {} classifier, {} match", self.classifier, mode)?;
        writeln!(f)?;
        for outcome in &self.outcomes {
            writeln!(f, "{}", outcome)?;
        }

        if !self.misreads.is_empty() {
            writeln!(f)?;
            writeln!(f, "  Misreads")?;
            for (misread, count) in &self.misreads {
                writeln!(f, "  {:>5}x     {}", count, misread)?;
            }
        }
        if !self.missing.is_empty() {
            writeln!(f)?;
            let chars: String = self.missing.iter().collect();
            writeln!(f, "  Missing     {}", chars)?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "  Characters  {}/{}  ({:.1}%)",
            self.chars_passed,
            self.chars_total(),
            self.char_rate() * 100.0,
        )?;
        writeln!(
            f,
            "  Strokes     {}/{}  ({:.1}%)  ({}ms)",
            self.strokes_correct,
            self.strokes_total,
            self.stroke_rate() * 100.0,
            self.elapsed_ms,
        )?;
        Ok(())
    }
}
