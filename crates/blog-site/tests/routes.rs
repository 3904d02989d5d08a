//! In-process router tests.
//!
//! Each test drives the full router through `tower::ServiceExt::oneshot`,
//! so no listening socket is needed.

use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use blog_site::config::SiteConfig;
use blog_site::router::create_router;
use blog_site::state::SiteState;

fn app() -> Router {
    create_router(SiteState::new(&SiteConfig::default()))
}

async fn get(path: &str) -> (StatusCode, HeaderMap, String) {
    let response = app()
        .oneshot(
            Request::builder()
                .uri(path)
                .body(Body::empty())
                .expect("valid request"),
        )
        .await
        .expect("router is infallible");
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body collects");
    (status, headers, String::from_utf8(body.to_vec()).expect("utf-8 body"))
}

#[tokio::test]
async fn literal_routes_return_200_with_their_titles() {
    let cases = [
        ("/", "Technical Blog - Ramblings on AI &amp; Cybersecurity"),
        ("/about/", "About - Technical Blog"),
        ("/topics/", "Future Topics - Technical Blog"),
        ("/demo/", "Blog Components Demo"),
        ("/rbe/", "Recursive Bayesian Estimators in Cybersecurity"),
        ("/rbe/foundations/", "RBE: Mathematical Foundations"),
        ("/rbe/implementation/", "RBE: Implementation Strategies"),
        ("/rbe/cybersecurity/", "RBE: Cybersecurity Applications"),
    ];
    for (path, title) in cases {
        let (status, _, body) = get(path).await;
        assert_eq!(status, StatusCode::OK, "{path} should return 200");
        assert!(
            body.contains(&format!("<title>{title}</title>")),
            "{path} should carry title {title:?}"
        );
    }
}

#[tokio::test]
async fn unknown_path_returns_404_naming_the_path() {
    let (status, _, body) = get("/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("/does-not-exist"));
    assert!(body.contains("Page Not Found"));
}

#[tokio::test]
async fn ignored_probe_path_returns_empty_200() {
    let (status, _, body) = get("/favicon.ico").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn explicit_error_pages_return_their_codes() {
    let (status, _, body) = get("/404").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Error 404"));

    let (status, _, body) = get("/500").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("Error 500"));
}

#[tokio::test]
async fn health_returns_exact_payload_without_layout() {
    let (status, headers, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"status":"ok","service":"blog-site"}"#);
    assert!(!body.contains("main-navigation"));
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .expect("content type present")
        .to_str()
        .expect("ascii");
    assert!(content_type.starts_with("application/json"));
}

#[tokio::test]
async fn about_marks_only_about_active() {
    let (_, _, body) = get("/about/").await;
    assert_eq!(body.matches("nav-link active").count(), 1);
    assert!(body.contains("class=\"nav-link active\" href=\"/about/\""));
}

#[tokio::test]
async fn static_route_not_shadowed_by_fallback() {
    let (status, headers, body) = get("/static/css/site.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get(header::CONTENT_TYPE).expect("content type"),
        "text/css; charset=utf-8"
    );
    assert!(body.contains(".main-navigation"));
}

#[tokio::test]
async fn static_traversal_returns_404_not_file_contents() {
    let (status, _, body) = get("/static/../../etc/passwd").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(!body.contains("root:"));
}

#[tokio::test]
async fn missing_static_file_returns_404_page() {
    let (status, _, body) = get("/static/css/nope.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page Not Found"));
}

#[tokio::test]
async fn security_headers_are_present() {
    let (_, headers, _) = get("/").await;
    for name in [
        "content-security-policy",
        "strict-transport-security",
        "x-frame-options",
        "x-content-type-options",
        "referrer-policy",
    ] {
        assert!(headers.contains_key(name), "missing header {name}");
    }
    assert_eq!(headers.get("x-frame-options").expect("xfo"), "DENY");
}

#[tokio::test]
async fn coming_soon_cards_are_not_links() {
    let (_, _, body) = get("/topics/").await;
    // Six future topics, none clickable.
    assert_eq!(body.matches("topic-card--coming-soon").count(), 6);
    assert!(!body.contains("href=\"/quantum/\""));
    assert!(!body.contains("href=\"/neural/\""));
}

#[tokio::test]
async fn demo_loads_component_scripts_once() {
    let (_, _, body) = get("/demo/").await;
    assert_eq!(body.matches("highlight.min.js").count(), 1);
    assert_eq!(body.matches("katex.min.js").count(), 1);
    // Shared by the code and math head bundles, still loaded once.
    assert_eq!(body.matches("/static/js/components.js").count(), 1);
    assert!(body.contains("language-python"));
    assert!(body.contains("data-math=\"display\""));
    assert!(body.contains("data-math=\"inline\""));
}

#[tokio::test]
async fn rendering_is_deterministic_across_requests() {
    let (_, _, first) = get("/topics/").await;
    let (_, _, second) = get("/topics/").await;
    assert_eq!(first, second);
}
