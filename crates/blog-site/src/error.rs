//! Site error taxonomy.
//!
//! Two cases only: the resource was not found, or a handler failed
//! unexpectedly. Both render the error shell; path-traversal attempts on
//! static files are deliberately reported as plain not-found.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::templates::ErrorTemplate;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("page not found: {path}")]
    NotFound { path: String },

    #[error("internal server error")]
    Internal,
}

impl SiteError {
    pub fn status(&self) -> StatusCode {
        match self {
            SiteError::NotFound { .. } => StatusCode::NOT_FOUND,
            SiteError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn template(&self) -> ErrorTemplate {
        match self {
            SiteError::NotFound { path } => ErrorTemplate::new(
                404,
                "Page Not Found",
                format!("The requested path {path} does not exist on this site."),
            ),
            SiteError::Internal => ErrorTemplate::new(
                500,
                "Internal Server Error",
                "Something went wrong while producing this page.",
            ),
        }
    }
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        (self.status(), self.template()).into_response()
    }
}
