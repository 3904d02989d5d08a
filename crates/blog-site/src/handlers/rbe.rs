//! RBE (Recursive Bayesian Estimators) Series Handlers

use axum::response::IntoResponse;

use crate::components::{math_typeset_head, Section};
use crate::fragment::{card, h, link, link_button, p, text, Node};
use crate::templates::{PageConfig, PageTemplate};

fn series_page(title: impl Into<String>, body: &[Node]) -> PageTemplate {
    PageTemplate::new(
        PageConfig::new(title)
            .section(Section::Rbe)
            .head(math_typeset_head()),
        body,
    )
}

fn part_card(heading: &str, summary: &str, href: &str, label: &str) -> Node {
    card(
        Some("series-part"),
        vec![
            h(4, heading),
            p(vec![text(summary)]),
            p(vec![link(label, href)]),
        ],
    )
}

/// Handler for the series index page.
pub async fn rbe_index() -> impl IntoResponse {
    let body = vec![
        h(1, "Recursive Bayesian Estimators"),
        h(2, "A Comprehensive Guide to RBE Theory and Implementation"),
        p(vec![text(
            "This series provides a deep dive into Recursive Bayesian Estimators (RBE), \
             covering everything from mathematical foundations to practical cybersecurity \
             applications.",
        )]),
        h(3, "Series Overview"),
        part_card(
            "Part 1: Mathematical Foundations",
            "Introduction to Bayesian inference, probability theory, and the recursive \
             framework.",
            "/rbe/foundations/",
            "Read Part 1 \u{2192}",
        ),
        part_card(
            "Part 2: Implementation Strategies",
            "Practical implementations with performance optimizations.",
            "/rbe/implementation/",
            "Read Part 2 \u{2192}",
        ),
        part_card(
            "Part 3: Cybersecurity Applications",
            "Real-world applications in network anomaly detection and threat assessment.",
            "/rbe/cybersecurity/",
            "Read Part 3 \u{2192}",
        ),
        link_button("\u{2190} Back to Home", "/", false),
    ];

    series_page("Recursive Bayesian Estimators in Cybersecurity", &body)
}

fn placeholder_part(heading: &str) -> Vec<Node> {
    vec![
        h(1, heading),
        p(vec![text(
            "Content for this part of the series is being written and will appear here.",
        )]),
        link_button("\u{2190} Back to RBE Series", "/rbe/", false),
    ]
}

/// Handler for part 1: mathematical foundations.
pub async fn foundations() -> impl IntoResponse {
    series_page(
        "RBE: Mathematical Foundations",
        &placeholder_part("Mathematical Foundations of RBE"),
    )
}

/// Handler for part 2: implementation strategies.
pub async fn implementation() -> impl IntoResponse {
    series_page(
        "RBE: Implementation Strategies",
        &placeholder_part("Implementation Strategies"),
    )
}

/// Handler for part 3: cybersecurity applications.
pub async fn cybersecurity() -> impl IntoResponse {
    series_page(
        "RBE: Cybersecurity Applications",
        &placeholder_part("Cybersecurity Applications"),
    )
}
