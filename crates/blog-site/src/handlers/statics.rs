//! Static Asset Handler
//!
//! Serves files under the configured static root. Anything that is not a
//! plain relative path to a regular file degrades to the standard 404 page;
//! traversal attempts are indistinguishable from missing files on purpose.

use std::path::{Component, Path as FsPath};

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use tokio::fs;

use crate::error::SiteError;
use crate::state::SiteState;

const CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

/// Handler for `/static/{*path}`.
pub async fn serve_static(State(state): State<SiteState>, Path(path): Path<String>) -> Response {
    match read_asset(state.static_root(), &path).await {
        Some((content_type, body)) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, content_type),
                (header::CACHE_CONTROL, CACHE_CONTROL),
            ],
            body,
        )
            .into_response(),
        None => SiteError::NotFound {
            path: format!("/static/{path}"),
        }
        .into_response(),
    }
}

async fn read_asset(root: &FsPath, rel: &str) -> Option<(&'static str, Vec<u8>)> {
    if !is_safe_path(rel) {
        return None;
    }
    let full = root.join(rel);
    let meta = fs::metadata(&full).await.ok()?;
    if !meta.is_file() {
        return None;
    }
    let body = fs::read(&full).await.ok()?;
    Some((content_type_for(rel), body))
}

/// Accepts only plain relative paths: every component must be a normal
/// segment, so `..`, roots and prefixes are all rejected.
fn is_safe_path(rel: &str) -> bool {
    !rel.is_empty()
        && FsPath::new(rel)
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
}

fn content_type_for(path: &str) -> &'static str {
    let extension = path.rsplit('.').next().unwrap_or("");
    match extension {
        "css" => "text/css; charset=utf-8",
        "js" => "application/javascript; charset=utf-8",
        "html" => "text/html; charset=utf-8",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "ico" => "image/x-icon",
        "woff2" => "font/woff2",
        "woff" => "font/woff",
        "ttf" => "font/ttf",
        "txt" => "text/plain; charset=utf-8",
        "json" => "application/json",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traversal_components_are_rejected() {
        assert!(!is_safe_path("../secret"));
        assert!(!is_safe_path("css/../../etc/passwd"));
        assert!(!is_safe_path("/etc/passwd"));
        assert!(!is_safe_path(""));
        assert!(is_safe_path("css/site.css"));
        assert!(is_safe_path("js/theme.js"));
    }

    #[test]
    fn content_types_match_extensions() {
        assert_eq!(content_type_for("css/site.css"), "text/css; charset=utf-8");
        assert_eq!(
            content_type_for("js/theme.js"),
            "application/javascript; charset=utf-8"
        );
        assert_eq!(content_type_for("img/logo.svg"), "image/svg+xml");
        assert_eq!(content_type_for("mystery.bin"), "application/octet-stream");
        assert_eq!(content_type_for("no-extension"), "application/octet-stream");
    }

    #[tokio::test]
    async fn missing_file_reads_as_none() {
        let result = read_asset(FsPath::new("static"), "does/not/exist.css").await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn traversal_reads_as_none() {
        let result = read_asset(FsPath::new("static"), "../Cargo.toml").await;
        assert!(result.is_none());
    }
}
