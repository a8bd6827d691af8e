//! In-memory document collection for task records.
//!
//! The [`TaskCollection`] is the single store instance shared by every
//! request handler. It exposes the six operations the HTTP surface is
//! built on: insert, find, update-one, update-many, remove-one and
//! remove-many, all filtered by field equality.

use tokio::sync::RwLock;

use crate::filter::Filter;
use crate::record::{TaskPatch, TaskRecord};

/// Default cap on the number of stored documents.
pub const DEFAULT_MAX_DOCUMENTS: usize = 10_000;

/// Errors produced by collection operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The collection has reached its configured document cap.
    #[error("collection is full ({limit} document cap reached)")]
    CapacityExceeded {
        /// The configured cap that was hit.
        limit: usize,
    },
}

/// In-memory task collection with a configurable document cap.
///
/// Thread-safe via [`RwLock`]; a single instance is constructed at
/// process start and shared across all in-flight requests. Ordering
/// between concurrent writers is last-write-wins.
pub struct TaskCollection {
    documents: RwLock<Vec<TaskRecord>>,
    max_documents: usize,
}

impl Default for TaskCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskCollection {
    /// Creates an empty collection with the default document cap.
    #[must_use]
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
            max_documents: DEFAULT_MAX_DOCUMENTS,
        }
    }

    /// Creates an empty collection with a custom document cap.
    #[must_use]
    pub fn with_max_documents(max_documents: usize) -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
            max_documents,
        }
    }

    /// Inserts one record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CapacityExceeded`] when the collection
    /// already holds the configured maximum number of documents.
    pub async fn insert(&self, record: TaskRecord) -> Result<(), StoreError> {
        let mut documents = self.documents.write().await;
        if documents.len() >= self.max_documents {
            return Err(StoreError::CapacityExceeded {
                limit: self.max_documents,
            });
        }
        documents.push(record);
        Ok(())
    }

    /// Returns all records matching `filter`, in insertion order.
    pub async fn find(&self, filter: &Filter) -> Result<Vec<TaskRecord>, StoreError> {
        let documents = self.documents.read().await;
        Ok(documents
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect())
    }

    /// Replaces the first record matching `filter` with `replacement`.
    ///
    /// Returns the number of records replaced (0 or 1). A zero-match
    /// update is a silent success, not an error.
    pub async fn update_one(
        &self,
        filter: &Filter,
        replacement: TaskRecord,
    ) -> Result<u64, StoreError> {
        let mut documents = self.documents.write().await;
        match documents.iter_mut().find(|record| filter.matches(record)) {
            Some(record) => {
                *record = replacement;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    /// Applies `patch` to every record matching `filter`.
    ///
    /// Returns the number of records patched (possibly 0).
    pub async fn update_many(&self, filter: &Filter, patch: &TaskPatch) -> Result<u64, StoreError> {
        let mut documents = self.documents.write().await;
        let mut patched = 0;
        for record in documents.iter_mut().filter(|record| filter.matches(record)) {
            patch.apply(record);
            patched += 1;
        }
        Ok(patched)
    }

    /// Removes the first record matching `filter`.
    ///
    /// Returns the number of records removed (0 or 1).
    pub async fn remove_one(&self, filter: &Filter) -> Result<u64, StoreError> {
        let mut documents = self.documents.write().await;
        match documents.iter().position(|record| filter.matches(record)) {
            Some(index) => {
                documents.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    /// Removes every record matching `filter`.
    ///
    /// Returns the number of records removed.
    pub async fn remove_many(&self, filter: &Filter) -> Result<u64, StoreError> {
        let mut documents = self.documents.write().await;
        let before = documents.len();
        documents.retain(|record| !filter.matches(record));
        Ok((before - documents.len()) as u64)
    }

    /// Returns the total number of stored records.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    /// Returns whether the collection holds no records.
    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}
