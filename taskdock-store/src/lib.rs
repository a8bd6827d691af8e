//! Task record model and document collection for `taskdock`.
//!
//! Exposes the task record type, field-equality query filters, and the
//! in-memory [`TaskCollection`] the HTTP layer issues its operations
//! against. A managed document database would sit behind the same
//! operation set; connection details live outside this crate.

pub mod collection;
pub mod filter;
pub mod record;

pub use collection::{DEFAULT_MAX_DOCUMENTS, StoreError, TaskCollection};
pub use filter::Filter;
pub use record::{TaskPatch, TaskRecord};
