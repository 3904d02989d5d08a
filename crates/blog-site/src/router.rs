//! Router Configuration
//!
//! Route table for the site. Registration order is deliberate: literal page
//! routes first, the `/static` wildcard second, and the catch-all fallback
//! last, so the fallback can never shadow a more specific route.

use axum::http::{header, HeaderValue};
use axum::routing::get;
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::SiteState;

const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
    script-src 'self' https://cdnjs.cloudflare.com https://cdn.jsdelivr.net; \
    style-src 'self' https://cdnjs.cloudflare.com https://cdn.jsdelivr.net; \
    font-src 'self' https://cdn.jsdelivr.net; \
    img-src 'self' data:";

/// Create the main router with all routes.
pub fn create_router(state: SiteState) -> Router {
    Router::new()
        // Literal page routes, in registration order.
        .route("/", get(handlers::home::home))
        .route("/about/", get(handlers::about::about))
        .route("/topics/", get(handlers::topics::topics_index))
        .route("/demo/", get(handlers::demo::components_demo))
        .route("/rbe/", get(handlers::rbe::rbe_index))
        .route("/rbe/foundations/", get(handlers::rbe::foundations))
        .route("/rbe/implementation/", get(handlers::rbe::implementation))
        .route("/rbe/cybersecurity/", get(handlers::rbe::cybersecurity))
        .route("/health", get(handlers::health::health))
        .route("/404", get(handlers::errors::not_found_page))
        .route("/500", get(handlers::errors::internal_error_page))
        // Static assets under their fixed prefix.
        .route("/static/{*path}", get(handlers::statics::serve_static))
        // Catch-all, lowest priority.
        .fallback(handlers::errors::fallback)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static(CONTENT_SECURITY_POLICY),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=63072000; includeSubDomains"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state)
}
