//! Health Check Handler
//!
//! Liveness endpoint: a minimal machine-readable payload with no layout.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct Health {
    status: &'static str,
    service: &'static str,
}

/// Handler for `/health`.
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        service: "blog-site",
    })
}
