//! Component Showcase Handler

use axum::response::IntoResponse;

use crate::components::{
    code_block, code_highlight_head, math_block, math_typeset_head, topic_card, Section,
};
use crate::fragment::{container, h, link_button, p, text, TopicStatus};
use crate::templates::{PageConfig, PageTemplate};

const SAMPLE_CODE: &str = r#"def recursive_bayesian_update(prior, likelihood, evidence):
    """Update belief using Bayes' theorem"""
    posterior = (likelihood * prior) / evidence
    return posterior

# Example usage
prior_belief = 0.3
likelihood = 0.8
evidence = 0.6
updated_belief = recursive_bayesian_update(prior_belief, likelihood, evidence)
print(f"Updated belief: {updated_belief:.3f}")"#;

const SAMPLE_MATH: &str = r"P(H|E) = \frac{P(E|H) \cdot P(H)}{P(E)}";

/// Handler for the page demonstrating every component once.
pub async fn components_demo() -> impl IntoResponse {
    let body = vec![
        h(1, "Blog Components Demo"),
        h(2, "Navigation Component"),
        p(vec![text(
            "The navigation bar above is generated by the navigation component; the Demo \
             entry is marked active on this page.",
        )]),
        h(2, "Code Block Component"),
        p(vec![text("Syntax-highlighted code with copy functionality:")]),
        code_block(SAMPLE_CODE, "python", Some("Recursive Bayesian Update")),
        h(2, "Math Block Component"),
        p(vec![text("LaTeX math rendered client-side:")]),
        math_block(SAMPLE_MATH, true),
        p(vec![
            text("And here's inline math: "),
            // Inline math sits inside the paragraph flow.
        ]),
        math_block(r"x = \frac{-b \pm \sqrt{b^2 - 4ac}}{2a}", false),
        h(2, "Topic Cards Component"),
        p(vec![text("Cards for displaying topics:")]),
        container(
            Some("topic-grid"),
            vec![
                topic_card(
                    "Recursive Bayesian Estimators",
                    "Learn the mathematical foundations and practical applications",
                    "/rbe/",
                    TopicStatus::Available,
                ),
                topic_card(
                    "Advanced Neural Networks",
                    "Deep dive into transformer architectures and attention mechanisms",
                    "/neural/",
                    TopicStatus::ComingSoon,
                ),
            ],
        ),
        link_button("\u{2190} Back to Home", "/", false),
    ];

    PageTemplate::new(
        PageConfig::new("Blog Components Demo")
            .section(Section::Demo)
            .head(code_highlight_head())
            .head(math_typeset_head()),
        &body,
    )
}
