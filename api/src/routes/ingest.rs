//! Log ingestion endpoint.
//!
//! `POST /ingest` accepts one log record as a JSON object and appends it to the store.

use super::error::JsonBody;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Router};
use shared::models::LogRecord;

/// Creates the log ingestion routes.
pub fn ingest_routes(state: AppState) -> Router {
    Router::new()
        .route("/ingest", post(ingest_log))
        .with_state(state)
}

/// Handler for log ingestion.
///
/// Returns 200 with an empty body on success and 400 if the body is not a
/// valid record (bad JSON, wrong field types, or a non-RFC 3339 timestamp).
async fn ingest_log(
    State(state): State<AppState>,
    JsonBody(record): JsonBody<LogRecord>,
) -> StatusCode {
    tracing::debug!(
        level = %record.level,
        resource_id = %record.resource_id,
        "Ingesting log record"
    );

    state.log_store().ingest(record);
    StatusCode::OK
}
