use thiserror::Error;

/// Failures that abort a run because a submission row is not shaped the
/// way the renderers need it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TalkError {
    /// The row has no cell for `column`. Rows shorter than the header are
    /// truncated when rotated, so this also reports short rows.
    #[error("row {row}: missing column '{column}'")]
    MissingColumn { column: String, row: usize },

    /// Index mode needs a two-character session such as `3A`.
    #[error("talk '{title}': session '{value}' is not a <session><track> pair")]
    MalformedSession { value: String, title: String },
}
