//! Integration tests for health check and general API functionality.
//!
//! Tests cover:
//! - Health check endpoint
//! - Empty store behavior
//! - Method filtering

use axum::http::StatusCode;
use serde_json::json;

use super::common::{ingest, query, record, send_empty, test_app};

#[tokio::test]
async fn test_health_check() {
    let (app, _state) = test_app();

    let (status, response) = send_empty(app, "GET", "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["status"], "healthy");
    assert_eq!(response["service"], "logbook-api");
    assert_eq!(response["records"], 0);
}

#[tokio::test]
async fn test_health_reports_record_count() {
    let (app, _state) = test_app();

    ingest(&app, record("info", "a", "r1", "2023-09-10T00:00:00Z")).await;
    ingest(&app, record("info", "b", "r1", "2023-09-10T00:00:00Z")).await;

    let (_, response) = send_empty(app, "GET", "/health").await;
    assert_eq!(response["records"], 2);
}

#[tokio::test]
async fn test_empty_store_returns_empty_array() {
    let (app, _state) = test_app();

    assert!(query(&app, json!({})).await.is_empty());
    assert!(query(&app, json!({"level": "error"})).await.is_empty());
}

#[tokio::test]
async fn test_non_post_methods_are_rejected() {
    let (app, state) = test_app();

    for uri in ["/ingest", "/query"] {
        for method in ["GET", "PUT", "DELETE", "PATCH"] {
            let (status, _) = send_empty(app.clone(), method, uri).await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method} {uri}");
        }
    }

    assert_eq!(state.log_store().count(), 0);
}
