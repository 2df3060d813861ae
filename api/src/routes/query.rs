//! Log query endpoint.
//!
//! `POST /query` accepts a filter set as a JSON object of string values and
//! responds with the matching records as a JSON array, in insertion order.

use super::error::JsonBody;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use shared::models::LogRecord;
use shared::query::FilterSet;

/// Creates the query routes with application state.
pub fn query_routes(state: AppState) -> Router {
    Router::new()
        .route("/query", post(query_logs))
        .with_state(state)
}

/// Handler for filtered log retrieval.
///
/// Unknown filter keys are ignored. A query that matches nothing yields `[]`.
async fn query_logs(
    State(state): State<AppState>,
    JsonBody(filters): JsonBody<FilterSet>,
) -> Json<Vec<LogRecord>> {
    if !filters.ignored_keys().is_empty() {
        tracing::debug!(ignored = ?filters.ignored_keys(), "Ignoring unknown filter keys");
    }

    let logs = state.log_store().query(&filters);

    tracing::debug!(
        filters = filters.len(),
        matched = logs.len(),
        "Executed log query"
    );

    Json(logs)
}
