//! Topic Index Handler

use axum::response::IntoResponse;

use crate::components::{topic_card, Section};
use crate::fragment::{container, h, link_button, p, text, Node, TopicStatus};
use crate::templates::{PageConfig, PageTemplate, SITE_NAME};

/// Planned future topics; all placeholders until their series exist.
const FUTURE_TOPICS: [(&str, &str, &str); 6] = [
    (
        "Advanced Neural Networks",
        "Deep dive into transformer architectures, attention mechanisms, and modern deep \
         learning techniques",
        "/neural/",
    ),
    (
        "Cryptographic Protocols",
        "Modern cryptography, zero-knowledge proofs, and blockchain security",
        "/crypto/",
    ),
    (
        "Distributed Systems",
        "Consensus algorithms, fault tolerance, and scalable architecture patterns",
        "/distributed/",
    ),
    (
        "Quantum Computing",
        "Quantum algorithms, error correction, and near-term quantum applications",
        "/quantum/",
    ),
    (
        "Adversarial AI",
        "Attack vectors, defensive strategies, and AI safety considerations",
        "/adversarial/",
    ),
    (
        "Network Security",
        "Protocol analysis, intrusion detection, and network forensics",
        "/network-security/",
    ),
];

/// Handler for the future-topics overview page.
pub async fn topics_index() -> impl IntoResponse {
    let cards: Vec<Node> = FUTURE_TOPICS
        .iter()
        .map(|(title, description, href)| {
            topic_card(*title, *description, *href, TopicStatus::ComingSoon)
        })
        .collect();

    let body = vec![
        h(1, "Future Topics"),
        p(vec![text(
            "Upcoming topics I plan to explore in depth on this blog.",
        )]),
        container(Some("topic-grid"), cards),
        link_button("\u{2190} Back to Home", "/", false),
    ];

    PageTemplate::new(
        PageConfig::new(format!("Future Topics - {SITE_NAME}")).section(Section::Topics),
        &body,
    )
}
