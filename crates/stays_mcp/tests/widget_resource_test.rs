//! Tests for the widget bundle resource.

use std::fs;
use std::sync::Arc;
use stays_mcp::resources::{McpResource, ResourceRegistry, WidgetResource};
use stays_mcp::{McpError, WIDGET_URI};
use tempfile::TempDir;

#[tokio::test]
async fn test_widget_inlines_newest_assets() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("index-aaa.js"), "console.log('old');").expect("write js");
    fs::write(dir.path().join("index-bbb.js"), "console.log('new');").expect("write js");
    fs::write(dir.path().join("index-aaa.css"), ".root { color: red; }").expect("write css");

    let resource = WidgetResource::with_directory(dir.path());
    let html = resource.read(WIDGET_URI).await.expect("reads");

    assert!(html.contains("<div id=\"root\"></div>"));
    assert!(html.contains("<script type=\"module\">"));
    assert!(html.contains("console.log('new');"));
    assert!(!html.contains("console.log('old');"));
    assert!(html.contains(".root { color: red; }"));
}

#[tokio::test]
async fn test_missing_js_bundle_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("index-aaa.css"), ".root {}").expect("write css");

    let resource = WidgetResource::with_directory(dir.path());
    let err = resource.read(WIDGET_URI).await.expect_err("missing js fails");

    assert!(matches!(err, McpError::ResourceNotFound(_)));
    assert!(format!("{}", err).contains(".js"));
}

#[tokio::test]
async fn test_missing_dist_dir_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let resource = WidgetResource::with_directory(dir.path().join("no-such-dir"));

    let err = resource.read(WIDGET_URI).await.expect_err("missing dir fails");
    assert!(matches!(err, McpError::ResourceNotFound(_)));
}

#[tokio::test]
async fn test_registry_routes_only_the_widget_uri() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("index.js"), "export {};").expect("write js");
    fs::write(dir.path().join("index.css"), ".root {}").expect("write css");

    let mut registry = ResourceRegistry::new();
    registry.register(Arc::new(WidgetResource::with_directory(dir.path())));

    assert!(registry.read(WIDGET_URI).await.is_ok());

    let err = registry
        .read("ui://widget/other.html")
        .await
        .expect_err("unhandled URI fails");
    assert!(matches!(err, McpError::ResourceNotFound(_)));
}

#[test]
fn test_registry_lists_the_widget() {
    let registry = ResourceRegistry::default();
    let infos = registry.list_all();

    assert_eq!(infos.len(), 1);
    assert_eq!(infos[0].uri, WIDGET_URI);
}
