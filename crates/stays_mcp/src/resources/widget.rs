//! Widget bundle resource.
//!
//! An external build step drops hashed `.js` and `.css` bundles under the
//! dist directory; this resource inlines the newest of each into a small
//! HTML wrapper served at a fixed URI. The hosting shell loads it when a
//! tool response points at that URI.

use super::{McpResource, ResourceInfo};
use crate::{McpError, McpResult};
use async_trait::async_trait;
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use stays_error::{AssetError, AssetErrorKind};
use tracing::{debug, instrument};

/// Fixed URI the widget bundle is served under.
pub const WIDGET_URI: &str = "ui://widget/stays.html";

/// MIME type the hosting shell expects for inlineable widget HTML.
pub const WIDGET_MIME_TYPE: &str = "text/html+skybridge";

/// Resource serving the prebuilt stays widget bundle.
pub struct WidgetResource {
    dist_dir: PathBuf,
}

impl WidgetResource {
    /// Creates a widget resource with the default dist directory
    /// (`web/dist/assets`).
    pub fn new() -> Self {
        Self {
            dist_dir: PathBuf::from("web/dist/assets"),
        }
    }

    /// Creates a widget resource with a custom dist directory.
    pub fn with_directory(dist_dir: impl Into<PathBuf>) -> Self {
        Self {
            dist_dir: dist_dir.into(),
        }
    }

    /// Finds the newest built asset ending with `suffix` and reads it as
    /// text.
    ///
    /// Build output carries a content hash in the filename, so the last
    /// match in sorted order is the newest bundle.
    #[instrument(skip(self))]
    fn find_built_asset(&self, suffix: &str) -> McpResult<String> {
        let entries = fs::read_dir(&self.dist_dir).map_err(|e| {
            AssetError::new(AssetErrorKind::NotFound {
                suffix: suffix.to_string(),
                dir: format!("{} ({})", self.dist_dir.display(), e),
            })
        })?;

        let mut candidates: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.ends_with(suffix))
            })
            .collect();
        candidates.sort();

        let newest = candidates.pop().ok_or_else(|| {
            AssetError::new(AssetErrorKind::NotFound {
                suffix: suffix.to_string(),
                dir: self.dist_dir.display().to_string(),
            })
        })?;

        debug!(path = %newest.display(), "Inlining built asset");
        Ok(fs::read_to_string(&newest).map_err(|e| {
            AssetError::new(AssetErrorKind::FileRead(format!(
                "{}: {}",
                newest.display(),
                e
            )))
        })?)
    }

    /// Builds the widget HTML document with the JS and CSS bundles inlined.
    fn build_html(&self) -> McpResult<String> {
        let js = self.find_built_asset(".js")?;
        let css = self.find_built_asset(".css")?;

        Ok(format!(
            "<div id=\"root\"></div>\n<style>{}</style>\n<script type=\"module\">\n{}\n</script>",
            css, js
        ))
    }
}

impl Default for WidgetResource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl McpResource for WidgetResource {
    fn uri_pattern(&self) -> &'static str {
        "ui://"
    }

    fn description(&self) -> &'static str {
        "UI bundle for the stays widget."
    }

    // Only the fixed widget URI is served, not the whole ui:// scheme.
    fn matches(&self, uri: &str) -> bool {
        uri == WIDGET_URI
    }

    #[instrument(skip(self), fields(uri))]
    async fn read(&self, uri: &str) -> McpResult<String> {
        if uri != WIDGET_URI {
            return Err(McpError::ResourceNotFound(format!(
                "Unknown widget URI: {}",
                uri
            )));
        }
        self.build_html()
    }

    fn list(&self) -> Vec<ResourceInfo> {
        vec![ResourceInfo {
            uri: WIDGET_URI.to_string(),
            name: "Stays Widget".to_string(),
            description: self.description().to_string(),
            mime_type: Some(WIDGET_MIME_TYPE.to_string()),
            meta: Some(json!({ "openai/widgetPrefersBorder": true })),
        }]
    }
}
