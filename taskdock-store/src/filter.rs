//! Field-equality query filters over task records.

use crate::record::TaskRecord;

/// A query expression matching records by exact field equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Match records whose title equals the given string exactly.
    Title(String),
    /// Match records whose completion flag equals the given value.
    Completed(bool),
}

impl Filter {
    /// Convenience constructor for a title filter.
    pub fn title(title: impl Into<String>) -> Self {
        Self::Title(title.into())
    }

    /// Returns whether `record` satisfies this filter.
    #[must_use]
    pub fn matches(&self, record: &TaskRecord) -> bool {
        match self {
            Self::Title(title) => record.title == *title,
            Self::Completed(completed) => record.completed == *completed,
        }
    }
}
