use thiserror::Error;

/// Errors from the data-loading surface around the classifier.
///
/// Classification itself never fails; these cover reading glyph files,
/// stroke tables and corpora.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StrokeError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown stroke name: {0}")]
    UnknownLabel(String),

    #[error("no glyph data for {0}")]
    MissingGlyph(char),

    #[error("corpus is empty")]
    EmptyCorpus,
}
