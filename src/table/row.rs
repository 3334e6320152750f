use std::collections::HashMap;

use crate::error::TalkError;

/// One talk submission, keyed by header name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based position among the data records of the export.
    index: usize,
    fields: HashMap<String, String>,
}

impl Row {
    pub fn new(index: usize, fields: HashMap<String, String>) -> Self {
        Self { index, fields }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn get(&self, column: &str) -> Result<&str, TalkError> {
        self.fields
            .get(column)
            .map(String::as_str)
            .ok_or_else(|| TalkError::MissingColumn {
                column: column.to_string(),
                row: self.index,
            })
    }

    /// Field value with surrounding whitespace removed.
    pub fn trimmed(&self, column: &str) -> Result<&str, TalkError> {
        self.get(column).map(str::trim)
    }
}
