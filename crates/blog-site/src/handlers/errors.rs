//! Error Page Handlers
//!
//! The catch-all fallback plus the explicit `/404` and `/500` pages.

use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::error::SiteError;

/// Routine browser probes that should not produce a noisy 404 page.
const IGNORED_PROBE_PATHS: &[&str] = &[
    "/favicon.ico",
    "/apple-touch-icon.png",
    "/apple-touch-icon-precomposed.png",
];

/// Catch-all for any path no other route matched.
///
/// Probe paths get an empty 200; everything else gets the 404 page naming
/// the requested path.
pub async fn fallback(uri: Uri) -> Response {
    let path = uri.path();
    if IGNORED_PROBE_PATHS.contains(&path) {
        return StatusCode::OK.into_response();
    }
    SiteError::NotFound {
        path: path.to_owned(),
    }
    .into_response()
}

/// Explicit `/404` page for direct linking and testing.
pub async fn not_found_page() -> Response {
    SiteError::NotFound {
        path: "/404".to_owned(),
    }
    .into_response()
}

/// Explicit `/500` page for direct linking and testing.
pub async fn internal_error_page() -> Response {
    SiteError::Internal.into_response()
}
