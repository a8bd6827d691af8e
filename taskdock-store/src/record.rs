//! Task record and partial-update types.

use serde::{Deserialize, Serialize};

/// A single task document: a title and a completion flag.
///
/// Titles are intended as loose identifiers but are not enforced unique;
/// the only validation anywhere is the non-empty-title check on the
/// create path. Missing JSON fields deserialize to their defaults so a
/// bare `{"title": "x"}` body yields `completed = false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskRecord {
    /// Task title, matched exactly by title filters.
    pub title: String,
    /// Completion flag.
    pub completed: bool,
}

impl TaskRecord {
    /// Creates a record from a title and completion flag.
    pub fn new(title: impl Into<String>, completed: bool) -> Self {
        Self {
            title: title.into(),
            completed,
        }
    }
}

/// A partial update applied by bulk update operations.
///
/// Unset fields leave the target record untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskPatch {
    /// New title, if the update changes it.
    pub title: Option<String>,
    /// New completion flag, if the update changes it.
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// A patch that only sets the completion flag.
    #[must_use]
    pub const fn completed(value: bool) -> Self {
        Self {
            title: None,
            completed: Some(value),
        }
    }

    /// Applies the set fields onto `record` in place.
    pub fn apply(&self, record: &mut TaskRecord) {
        if let Some(title) = &self.title {
            record.title.clone_from(title);
        }
        if let Some(completed) = self.completed {
            record.completed = completed;
        }
    }
}
