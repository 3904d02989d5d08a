//! Home Page Handler

use axum::response::IntoResponse;

use crate::components::{topic_card, Section};
use crate::fragment::{card, container, external_link, h, link, link_button, p, text, TopicStatus};
use crate::templates::{PageConfig, PageTemplate, SITE_NAME};

/// Handler for the landing page.
pub async fn home() -> impl IntoResponse {
    let body = vec![
        card(
            Some("hero"),
            vec![
                h(1, "Welcome to My Technical Blog"),
                p(vec![text(
                    "Welcome to my technical blog where I explore cutting-edge topics in AI, \
                     cybersecurity, and software engineering through interactive demonstrations \
                     and rigorous implementations.",
                )]),
                p(vec![text(
                    "I've written these posts primarily to teach myself about complex topics, \
                     but I'm sharing them in case someone else might find them interesting.",
                )]),
                p(vec![
                    text("This blog is built with "),
                    external_link("Axum", "https://github.com/tokio-rs/axum"),
                    text(" and a small typed component library. Feel free to explore the "),
                    link("components demo", "/demo/"),
                    text(" to see how the pages are assembled."),
                ]),
            ],
        ),
        card(
            Some("featured"),
            vec![
                h(2, "Featured Topic: Recursive Bayesian Estimators"),
                h(3, "RBE in Cybersecurity"),
                p(vec![text(
                    "A comprehensive guide to understanding and implementing Recursive \
                     Bayesian Estimators.",
                )]),
                p(vec![text(
                    "Learn the mathematical foundations, practical implementations, and \
                     real-world applications of this powerful probabilistic method.",
                )]),
                link_button("Start the Series \u{2192}", "/rbe/", true),
            ],
        ),
        card(
            None,
            vec![
                h(2, "Coming Soon"),
                container(
                    Some("topic-grid"),
                    vec![
                        topic_card(
                            "Advanced Neural Networks",
                            "Deep dive into transformer architectures and attention mechanisms",
                            "/neural/",
                            TopicStatus::ComingSoon,
                        ),
                        topic_card(
                            "Cryptographic Protocols",
                            "Modern cryptography and zero-knowledge proofs",
                            "/crypto/",
                            TopicStatus::ComingSoon,
                        ),
                        topic_card(
                            "Components Demo",
                            "See all blog components in action",
                            "/demo/",
                            TopicStatus::Available,
                        ),
                    ],
                ),
            ],
        ),
        card(
            Some("footer-card"),
            vec![p(vec![
                external_link("GitHub", "https://github.com/example/technical-blog"),
                text(" \u{00b7} "),
                external_link("LinkedIn", "https://www.linkedin.com/"),
                text(" \u{00b7} "),
                external_link("Twitter", "https://twitter.com/"),
            ])],
        ),
    ];

    PageTemplate::new(
        PageConfig::new(format!("{SITE_NAME} - Ramblings on AI & Cybersecurity"))
            .section(Section::Home),
        &body,
    )
}
