//! Tests for the explore_stays tool.

use serde_json::json;
use std::fs;
use std::path::PathBuf;
use stays_mcp::tools::{ExploreStaysTool, McpTool, ToolRegistry};
use stays_mcp::McpError;
use tempfile::TempDir;

fn write_dataset(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("stays.json");
    fs::write(
        &path,
        r#"[
            {"id": "a", "city": "Paris", "rating": 4.5, "price_per_night": 120, "name": "Hotel Lumiere"},
            {"id": "b", "city": "paris", "rating": 3.0, "price_per_night": 80},
            {"id": "c", "city": "Rome", "rating": 5.0, "price_per_night": 200}
        ]"#,
    )
    .expect("write dataset");
    path
}

#[tokio::test]
async fn test_filters_by_city_and_sorts_by_rating() {
    let dir = TempDir::new().expect("temp dir");
    let tool = ExploreStaysTool::with_data_path(write_dataset(&dir));

    let output = tool.execute(json!({ "city": "Paris" })).await.expect("executes");

    assert_eq!(output.summary, "Found 2 stays in Paris.");
    let results = output.structured["results"].as_array().expect("results array");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["id"], "a");
    assert_eq!(results[1]["id"], "b");
    assert!(output.structured["selected"].is_null());
    assert_eq!(output.structured["applied_filters"]["sort"], "rating");
}

#[tokio::test]
async fn test_min_rating_and_price_sort() {
    let dir = TempDir::new().expect("temp dir");
    let tool = ExploreStaysTool::with_data_path(write_dataset(&dir));

    let output = tool
        .execute(json!({ "city": "paris", "min_rating": 4.0, "sort": "price" }))
        .await
        .expect("executes");

    let results = output.structured["results"].as_array().expect("results array");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["id"], "a");
    assert_eq!(output.structured["applied_filters"]["min_rating"], 4.0);
    assert_eq!(output.structured["applied_filters"]["sort"], "price");
}

#[tokio::test]
async fn test_selection_is_returned_with_price_sort() {
    let dir = TempDir::new().expect("temp dir");
    let tool = ExploreStaysTool::with_data_path(write_dataset(&dir));

    let output = tool
        .execute(json!({ "city": "Paris", "sort": "price", "selected_id": "b" }))
        .await
        .expect("executes");

    let results = output.structured["results"].as_array().expect("results array");
    assert_eq!(results[0]["id"], "b");
    assert_eq!(results[1]["id"], "a");
    assert_eq!(output.structured["selected"]["id"], "b");
}

#[tokio::test]
async fn test_unknown_selection_is_not_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let tool = ExploreStaysTool::with_data_path(write_dataset(&dir));

    let output = tool
        .execute(json!({ "city": "Rome", "selected_id": "nope" }))
        .await
        .expect("executes");

    assert_eq!(output.summary, "Found 1 stays in Rome.");
    assert!(output.structured["selected"].is_null());
}

#[tokio::test]
async fn test_passthrough_fields_survive_the_query() {
    let dir = TempDir::new().expect("temp dir");
    let tool = ExploreStaysTool::with_data_path(write_dataset(&dir));

    let output = tool.execute(json!({ "city": "Paris" })).await.expect("executes");

    assert_eq!(output.structured["results"][0]["name"], "Hotel Lumiere");
}

#[tokio::test]
async fn test_missing_city_is_invalid_input() {
    let dir = TempDir::new().expect("temp dir");
    let tool = ExploreStaysTool::with_data_path(write_dataset(&dir));

    let err = tool.execute(json!({})).await.expect_err("missing city fails");
    assert!(matches!(err, McpError::InvalidInput(_)));
}

#[tokio::test]
async fn test_non_string_city_is_invalid_input() {
    let dir = TempDir::new().expect("temp dir");
    let tool = ExploreStaysTool::with_data_path(write_dataset(&dir));

    let err = tool
        .execute(json!({ "city": 7 }))
        .await
        .expect_err("numeric city fails");
    assert!(matches!(err, McpError::InvalidInput(_)));
    assert!(format!("{}", err).contains("must be a string"));
}

#[tokio::test]
async fn test_summary_keeps_caller_casing() {
    let dir = TempDir::new().expect("temp dir");
    let tool = ExploreStaysTool::with_data_path(write_dataset(&dir));

    let output = tool
        .execute(json!({ "city": "  PaRiS  " }))
        .await
        .expect("executes");

    assert_eq!(output.summary, "Found 2 stays in PaRiS.");
    assert_eq!(output.structured["city"], "paris");
}

#[tokio::test]
async fn test_unknown_sort_key_is_invalid_input() {
    let dir = TempDir::new().expect("temp dir");
    let tool = ExploreStaysTool::with_data_path(write_dataset(&dir));

    let err = tool
        .execute(json!({ "city": "Paris", "sort": "stars" }))
        .await
        .expect_err("unknown sort fails");
    assert!(matches!(err, McpError::InvalidInput(_)));
}

#[tokio::test]
async fn test_missing_dataset_is_execution_failure() {
    let dir = TempDir::new().expect("temp dir");
    let tool = ExploreStaysTool::with_data_path(dir.path().join("absent.json"));

    let err = tool
        .execute(json!({ "city": "Paris" }))
        .await
        .expect_err("missing dataset fails");
    assert!(matches!(err, McpError::ToolExecutionFailed(_)));
}

#[tokio::test]
async fn test_repeated_calls_are_identical() {
    let dir = TempDir::new().expect("temp dir");
    let tool = ExploreStaysTool::with_data_path(write_dataset(&dir));
    let input = json!({ "city": "paris", "min_rating": 2.0, "sort": "price", "selected_id": "a" });

    let first = tool.execute(input.clone()).await.expect("executes");
    let second = tool.execute(input).await.expect("executes");

    assert_eq!(first.summary, second.summary);
    assert_eq!(first.structured, second.structured);
}

#[tokio::test]
async fn test_registry_includes_explore_stays() {
    let registry = ToolRegistry::default();
    let tool = registry.get("explore_stays");
    assert!(tool.is_some());
    assert_eq!(tool.unwrap().name(), "explore_stays");
}

#[tokio::test]
async fn test_registry_rejects_unknown_tool() {
    let registry = ToolRegistry::default();
    let err = registry
        .execute("book_stay", json!({}))
        .await
        .expect_err("unknown tool fails");
    assert!(matches!(err, McpError::ToolNotFound(_)));
}
