//! Integration tests for filtered log queries.
//!
//! Tests cover:
//! - Exact, substring and timestamp-window filters
//! - Conjunction of filters and unknown keys
//! - The three-record reference scenario

use axum::http::StatusCode;
use axum::Router;
use serde_json::json;

use super::common::{ingest, messages, post_json, post_raw, query, record, test_app};

/// Ingests the three-record scenario: two errors and one info entry.
async fn seed_scenario(app: &Router) {
    ingest(app, record("error", "disk full", "r1", "2023-09-10T01:00:00Z")).await;
    ingest(app, record("info", "ok", "r1", "2023-09-10T02:00:00Z")).await;
    ingest(
        app,
        record("error", "Failed to connect", "r2", "2023-09-20T00:00:00Z"),
    )
    .await;
}

#[tokio::test]
async fn test_scenario_by_level() {
    let (app, _state) = test_app();
    seed_scenario(&app).await;

    let logs = query(&app, json!({"level": "error"})).await;
    assert_eq!(messages(&logs), ["disk full", "Failed to connect"]);
}

#[tokio::test]
async fn test_scenario_by_message() {
    let (app, _state) = test_app();
    seed_scenario(&app).await;

    let logs = query(&app, json!({"message": "Failed to connect"})).await;
    assert_eq!(messages(&logs), ["Failed to connect"]);
}

#[tokio::test]
async fn test_scenario_by_resource_id() {
    let (app, _state) = test_app();
    seed_scenario(&app).await;

    let logs = query(&app, json!({"resourceId": "r1"})).await;
    assert_eq!(messages(&logs), ["disk full", "ok"]);
}

#[tokio::test]
async fn test_scenario_by_timestamp() {
    let (app, _state) = test_app();
    seed_scenario(&app).await;

    let logs = query(&app, json!({"timestamp": "2023-09-10T00:00:00Z"})).await;
    assert_eq!(messages(&logs), ["disk full", "ok"]);
}

#[tokio::test]
async fn test_empty_filter_returns_everything_in_order() {
    let (app, _state) = test_app();
    seed_scenario(&app).await;

    let logs = query(&app, json!({})).await;
    assert_eq!(messages(&logs), ["disk full", "ok", "Failed to connect"]);
}

#[tokio::test]
async fn test_exact_match_fields() {
    let (app, _state) = test_app();
    seed_scenario(&app).await;

    for (key, value, expected) in [
        ("traceId", "trace-r1", vec!["disk full", "ok"]),
        ("spanId", "span-r2", vec!["Failed to connect"]),
        ("commit", "5e5342f", vec!["disk full", "ok", "Failed to connect"]),
        ("metadata.parentResourceId", "parent-r2", vec!["Failed to connect"]),
        ("resourceId", "r", vec![]),
        ("level", "ERROR", vec![]),
    ] {
        let logs = query(&app, json!({ key: value })).await;
        assert_eq!(messages(&logs), expected, "{key}={value}");
    }
}

#[tokio::test]
async fn test_message_substring_is_case_sensitive() {
    let (app, _state) = test_app();
    seed_scenario(&app).await;

    assert_eq!(
        messages(&query(&app, json!({"message": "connect"})).await),
        ["Failed to connect"]
    );
    assert!(query(&app, json!({"message": "failed"})).await.is_empty());
    assert_eq!(query(&app, json!({"message": ""})).await.len(), 3);
}

#[tokio::test]
async fn test_timestamp_window_edges() {
    let (app, _state) = test_app();

    ingest(&app, record("info", "before", "r", "2023-09-14T23:59:59Z")).await;
    ingest(&app, record("info", "start", "r", "2023-09-15T00:00:00Z")).await;
    ingest(&app, record("info", "end", "r", "2023-09-16T00:00:00Z")).await;
    ingest(&app, record("info", "after", "r", "2023-09-16T00:00:01Z")).await;

    let logs = query(&app, json!({"timestamp": "2023-09-15T00:00:00Z"})).await;
    assert_eq!(messages(&logs), ["start", "end"]);
}

#[tokio::test]
async fn test_timestamp_window_respects_offsets() {
    let (app, _state) = test_app();

    ingest(&app, record("info", "utc", "r", "2023-09-15T00:30:00Z")).await;

    let logs = query(&app, json!({"timestamp": "2023-09-15T02:00:00+02:00"})).await;
    assert_eq!(messages(&logs), ["utc"]);

    let logs = query(&app, json!({"timestamp": "2023-09-15T03:00:00+02:00"})).await;
    assert!(logs.is_empty());
}

#[tokio::test]
async fn test_invalid_timestamp_filter_matches_nothing() {
    let (app, _state) = test_app();
    seed_scenario(&app).await;

    let (status, body) = post_json(app, "/query", json!({"timestamp": "last tuesday"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_relaxed_timestamp_filter_matches_nothing() {
    let (app, _state) = test_app();
    seed_scenario(&app).await;

    for relaxed in ["2023-09-10 00:00:00Z", "2023-09-10t00:00:00z"] {
        let logs = query(&app, json!({ "timestamp": relaxed })).await;
        assert!(logs.is_empty(), "{relaxed:?}");
    }
}

#[tokio::test]
async fn test_conjunction() {
    let (app, _state) = test_app();
    seed_scenario(&app).await;

    let logs = query(&app, json!({"level": "error", "resourceId": "r1"})).await;
    assert_eq!(messages(&logs), ["disk full"]);

    let logs = query(
        &app,
        json!({"level": "error", "timestamp": "2023-09-19T12:00:00Z", "message": "Failed"}),
    )
    .await;
    assert_eq!(messages(&logs), ["Failed to connect"]);

    let logs = query(&app, json!({"level": "info", "resourceId": "r2"})).await;
    assert!(logs.is_empty());
}

#[tokio::test]
async fn test_unknown_keys_are_ignored() {
    let (app, _state) = test_app();
    seed_scenario(&app).await;

    let all = query(&app, json!({})).await;
    let bogus = query(&app, json!({"bogus": "v"})).await;
    assert_eq!(all, bogus);

    let logs = query(&app, json!({"level": "error", "severity": "info"})).await;
    assert_eq!(messages(&logs), ["disk full", "Failed to connect"]);
}

#[tokio::test]
async fn test_query_rejects_malformed_filters() {
    let (app, _state) = test_app();

    let (status, body) = post_raw(app.clone(), "/query", "not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_json");

    let (status, _) = post_json(app.clone(), "/query", json!({"level": 1})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_json(app, "/query", json!(["level", "error"])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_query_sees_later_ingests() {
    let (app, _state) = test_app();
    seed_scenario(&app).await;

    assert_eq!(query(&app, json!({"resourceId": "r3"})).await.len(), 0);

    ingest(&app, record("warn", "late", "r3", "2023-09-21T00:00:00Z")).await;

    let logs = query(&app, json!({"resourceId": "r3"})).await;
    assert_eq!(messages(&logs), ["late"]);
}
