//! About Page Handler

use axum::response::IntoResponse;

use crate::components::Section;
use crate::fragment::{card, external_link, h, link_button, p, strong, text, Inline};
use crate::templates::{PageConfig, PageTemplate, SITE_NAME};

fn bullet(term: &str, detail: &str) -> Vec<Inline> {
    vec![strong(term), text(format!(": {detail}"))]
}

/// Handler for the about page.
pub async fn about() -> impl IntoResponse {
    let body = vec![
        h(1, "About This Blog"),
        card(
            None,
            vec![
                h(2, "The Author"),
                p(vec![text(
                    "I'm passionate about AI, cybersecurity, and software engineering. This \
                     blog serves as my learning laboratory where I explore complex technical \
                     topics through hands-on implementation and rigorous analysis.",
                )]),
                p(vec![text(
                    "While I write these posts primarily to teach myself, I'm sharing them in \
                     case they might be useful to others.",
                )]),
            ],
        ),
        card(
            None,
            vec![
                h(2, "Technology Stack"),
                p(vec![text("This blog is built with a small Rust stack:")]),
                crate::fragment::Node::List(vec![
                    bullet("Axum", "an ergonomic web framework for routing and serving"),
                    bullet("Askama", "compile-time checked layout templates"),
                    bullet(
                        "A typed component library",
                        "pages are fragment trees, rendered by one serializer",
                    ),
                    bullet("Tracing", "structured request logging"),
                ]),
            ],
        ),
        card(
            None,
            vec![
                h(2, "Philosophy"),
                p(vec![text("I believe in:")]),
                crate::fragment::Node::List(vec![
                    bullet("Learning in public", "sharing the journey, not just the destination"),
                    bullet("Rigor with accessibility", "mathematical precision explained clearly"),
                    bullet(
                        "Interactive exploration",
                        "hands-on components that let you experiment",
                    ),
                    bullet("Open source", "all code available for learning and adaptation"),
                ]),
            ],
        ),
        card(
            None,
            vec![
                h(2, "Get in Touch"),
                p(vec![text(
                    "Feel free to reach out if you have questions, suggestions, or just want \
                     to discuss any of the topics covered here:",
                )]),
                p(vec![
                    external_link("GitHub", "https://github.com/example/technical-blog"),
                    text(" \u{00b7} "),
                    external_link("LinkedIn", "https://www.linkedin.com/"),
                    text(" \u{00b7} "),
                    external_link("Twitter", "https://twitter.com/"),
                ]),
            ],
        ),
        link_button("\u{2190} Back to Home", "/", false),
    ];

    PageTemplate::new(
        PageConfig::new(format!("About - {SITE_NAME}")).section(Section::About),
        &body,
    )
}
