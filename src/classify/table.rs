//! Per-character stroke-name lookup.
//!
//! Ignores geometry: answers whatever a stroke-order dictionary says the
//! `index`-th stroke of the character is called.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::StrokeError;
use crate::label::StrokeLabel;
use crate::{StrokeClassifier, StrokeInput};

/// Character → ordered stroke names.
#[derive(Debug, Clone, Default)]
pub struct StrokeTable {
    entries: HashMap<char, Vec<StrokeLabel>>,
}

impl StrokeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `{"字": ["点", "点", "横撇|横钩", ...], ...}`.
    ///
    /// Names are cleaned before parsing; see [`clean_name`]. Keys must be a
    /// single character.
    pub fn from_json(json: &str) -> Result<Self, StrokeError> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_str(json)?;
        let mut table = Self::new();
        for (key, names) in raw {
            let mut chars = key.chars();
            let (Some(hanzi), None) = (chars.next(), chars.next()) else {
                tracing::warn!(key = %key, "skipping table key that is not one character");
                continue;
            };
            let labels = names
                .iter()
                .map(|name| clean_name(name).parse::<StrokeLabel>())
                .collect::<Result<Vec<_>, _>>()?;
            table.insert(hanzi, labels);
        }
        Ok(table)
    }

    pub fn load(path: &Path) -> Result<Self, StrokeError> {
        let json = fs::read_to_string(path).map_err(|source| StrokeError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn insert(&mut self, hanzi: char, labels: Vec<StrokeLabel>) {
        self.entries.insert(hanzi, labels);
    }

    pub fn get(&self, hanzi: char) -> Option<&[StrokeLabel]> {
        self.entries.get(&hanzi).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Strip a trailing ordinal ("点2" → "点") and keep the last of several
/// alternatives ("斜钩|卧钩" → "卧钩").
pub fn clean_name(name: &str) -> &str {
    let name = name.trim().trim_end_matches(|c: char| c.is_ascii_digit());
    name.rsplit('|').next().unwrap_or(name).trim()
}

/// Stroke classification by dictionary lookup.
#[derive(Debug, Clone, Default)]
pub struct TableClassifier {
    table: StrokeTable,
}

impl TableClassifier {
    pub fn new(table: StrokeTable) -> Self {
        Self { table }
    }

    /// Missing hint, unknown character or out-of-range index all give 点.
    pub fn lookup(&self, hanzi: Option<char>, index: usize) -> StrokeLabel {
        hanzi
            .and_then(|c| self.table.get(c))
            .and_then(|labels| labels.get(index).copied())
            .unwrap_or_default()
    }
}

impl StrokeClassifier for TableClassifier {
    fn name(&self) -> &'static str {
        "table"
    }

    fn classify(&self, input: &StrokeInput<'_>) -> StrokeLabel {
        self.lookup(input.hanzi, input.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_cleaned() {
        assert_eq!(clean_name("点2"), "点");
        assert_eq!(clean_name("斜钩|卧钩"), "卧钩");
        assert_eq!(clean_name("横折钩"), "横折钩");
        assert_eq!(clean_name(" 撇 "), "撇");
    }

    #[test]
    fn loads_json_and_looks_up_by_index() {
        let table = StrokeTable::from_json(r#"{"小": ["竖钩", "点1", "点2"], "心": ["点", "斜钩|卧钩", "点", "点"]}"#)
            .expect("valid table");
        assert_eq!(table.len(), 2);
        let classifier = TableClassifier::new(table);
        assert_eq!(classifier.lookup(Some('小'), 0), StrokeLabel::ShuGou);
        assert_eq!(classifier.lookup(Some('小'), 2), StrokeLabel::Dian);
        assert_eq!(classifier.lookup(Some('心'), 1), StrokeLabel::WoGou);
    }

    #[test]
    fn misses_fall_back_to_dot() {
        let mut table = StrokeTable::new();
        table.insert('一', vec![StrokeLabel::Heng]);
        let classifier = TableClassifier::new(table);
        assert_eq!(classifier.lookup(None, 0), StrokeLabel::Dian);
        assert_eq!(classifier.lookup(Some('二'), 0), StrokeLabel::Dian);
        assert_eq!(classifier.lookup(Some('一'), 1), StrokeLabel::Dian);
        assert_eq!(classifier.lookup(Some('一'), 0), StrokeLabel::Heng);
    }

    #[test]
    fn unknown_names_fail_to_load() {
        let err = StrokeTable::from_json(r#"{"一": ["折"]}"#).unwrap_err();
        assert!(matches!(err, StrokeError::UnknownLabel(name) if name == "折"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(StrokeTable::from_json("[1, 2"), Err(StrokeError::Json(_))));
    }
}
