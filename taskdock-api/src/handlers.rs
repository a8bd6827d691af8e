//! Request handlers: one handler per route, one collection operation
//! per handler.
//!
//! Every handler is a single-shot transaction against the shared
//! [`TaskCollection`] with no retries and no cross-request state. All
//! failures (decode, validation, path parameter, store) surface as 400
//! responses with a JSON `{message}` body; store failures additionally
//! carry an `error` detail field.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;
use taskdock_store::{Filter, StoreError, TaskPatch, TaskRecord};

use crate::server::AppState;

/// Errors a handler can produce, all mapped to 400 responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body was not a decodable JSON task object.
    #[error("request body must be a JSON task object")]
    InvalidBody(#[from] JsonRejection),

    /// The create path requires a non-empty title.
    #[error("post body must be a JSON object with at least a title")]
    EmptyTitle,

    /// A `{completed}` path segment was not `true` or `false`.
    #[error("path parameter {0:?} is not a boolean (expected \"true\" or \"false\")")]
    NotABool(String),

    /// A collection operation failed.
    #[error("store operation failed: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// JSON body for the error response. Store errors carry the
    /// underlying detail in a separate `error` field; everything else
    /// is a bare `{message}`.
    fn body(&self) -> serde_json::Value {
        match self {
            Self::Store(err) => json!({
                "message": "store operation failed",
                "error": err.to_string(),
            }),
            other => json!({ "message": other.to_string() }),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Store(err) => tracing::error!(error = %err, "store operation failed"),
            other => tracing::warn!(error = %other, "request rejected"),
        }
        (StatusCode::BAD_REQUEST, Json(self.body())).into_response()
    }
}

/// Success body for the find routes: an array of matches, possibly empty.
#[derive(Debug, Serialize)]
pub struct FindResults {
    /// Records matching the query filter, in insertion order.
    pub results: Vec<TaskRecord>,
}

/// Body accepted by `PUT /completed/{completed}`; only the completion
/// flag is used, any other fields are ignored.
#[derive(Debug, Deserialize)]
pub struct CompletionChange {
    /// Target value for the completion flag of every matching record.
    pub completed: bool,
}

/// Parses a `{completed}` path segment strictly.
///
/// Malformed segments are an explicit 400, never coerced to a default.
fn parse_completed(raw: &str) -> Result<bool, ApiError> {
    raw.parse::<bool>()
        .map_err(|_| ApiError::NotABool(raw.to_string()))
}

/// `POST /addOne` — insert one record.
///
/// Rejects malformed bodies and empty titles with 400; responds 201
/// with the created record.
pub async fn create(
    State(state): State<Arc<AppState>>,
    body: Result<Json<TaskRecord>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskRecord>), ApiError> {
    let Json(record) = body?;
    if record.title.is_empty() {
        return Err(ApiError::EmptyTitle);
    }

    state.collection.insert(record.clone()).await?;
    tracing::debug!(title = %record.title, completed = record.completed, "record created");
    Ok((StatusCode::CREATED, Json(record)))
}

/// `GET /title/{title}` — find all records with an exact title match.
pub async fn find_by_title(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
) -> Result<Json<FindResults>, ApiError> {
    let results = state.collection.find(&Filter::Title(title)).await?;
    Ok(Json(FindResults { results }))
}

/// `GET /completed/{completed}` — find all records by completion flag.
pub async fn find_by_completed(
    State(state): State<Arc<AppState>>,
    Path(raw): Path<String>,
) -> Result<Json<FindResults>, ApiError> {
    let completed = parse_completed(&raw)?;
    let results = state.collection.find(&Filter::Completed(completed)).await?;
    Ok(Json(FindResults { results }))
}

/// `PUT /title/{title}` — replace the first record with a matching title.
///
/// Zero matches is a silent success; the store is left unchanged.
pub async fn update_by_title(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
    body: Result<Json<TaskRecord>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(replacement) = body?;
    let replaced = state
        .collection
        .update_one(&Filter::Title(title.clone()), replacement)
        .await?;
    tracing::debug!(title = %title, replaced, "update by title");
    Ok(StatusCode::NO_CONTENT)
}

/// `PUT /completed/{completed}` — bulk-set the completion flag on every
/// record matching the path parameter, to the value in the body.
pub async fn update_by_completed(
    State(state): State<Arc<AppState>>,
    Path(raw): Path<String>,
    body: Result<Json<CompletionChange>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let completed = parse_completed(&raw)?;
    let Json(change) = body?;
    let patched = state
        .collection
        .update_many(&Filter::Completed(completed), &TaskPatch::completed(change.completed))
        .await?;
    tracing::debug!(completed, to = change.completed, patched, "bulk update by completed");
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /title/{title}` — remove the first record with a matching title.
pub async fn remove_by_title(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
) -> Result<StatusCode, ApiError> {
    let removed = state
        .collection
        .remove_one(&Filter::Title(title.clone()))
        .await?;
    tracing::debug!(title = %title, removed, "remove by title");
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /completed/{completed}` — remove every record matching the flag.
pub async fn remove_by_completed(
    State(state): State<Arc<AppState>>,
    Path(raw): Path<String>,
) -> Result<StatusCode, ApiError> {
    let completed = parse_completed(&raw)?;
    let removed = state
        .collection
        .remove_many(&Filter::Completed(completed))
        .await?;
    tracing::debug!(completed, removed, "bulk remove by completed");
    Ok(StatusCode::NO_CONTENT)
}
