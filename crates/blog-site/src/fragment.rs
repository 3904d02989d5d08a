//! Typed page-fragment tree and its HTML serializer.
//!
//! Pages are described as a tree of [`Node`] values built by pure component
//! constructors, then turned into markup by a single [`render`] pass. All
//! user-visible text is escaped here and nowhere else, so handlers never
//! concatenate raw HTML.

use html_escape::{encode_double_quoted_attribute, encode_text};

/// Inline (phrasing) content inside a paragraph or list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Strong(String),
    Code(String),
    Link {
        label: String,
        href: String,
        /// External links open in a new tab with `rel="noopener noreferrer"`.
        external: bool,
    },
}

/// Availability of a topic card's target content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicStatus {
    Available,
    ComingSoon,
}

/// Rendering input for a topic summary tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicCard {
    pub title: String,
    pub description: String,
    pub href: String,
    pub status: TopicStatus,
}

/// Inline vs. display math rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathMode {
    Inline,
    Display,
}

/// Block-level page fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Heading {
        level: u8,
        text: String,
    },
    Paragraph(Vec<Inline>),
    /// Unordered list; each item is inline content.
    List(Vec<Vec<Inline>>),
    Container {
        class: Option<&'static str>,
        children: Vec<Node>,
    },
    Card {
        class: Option<&'static str>,
        children: Vec<Node>,
    },
    /// Link styled as a button (navigation action, not a form submit).
    LinkButton {
        label: String,
        href: String,
        primary: bool,
    },
    TopicCard(TopicCard),
    CodeBlock {
        source: String,
        language: String,
        caption: Option<String>,
    },
    MathBlock {
        expr: String,
        mode: MathMode,
    },
}

/// Heading node; level is clamped to the h1..h6 range.
pub fn h(level: u8, text: impl Into<String>) -> Node {
    Node::Heading {
        level: level.clamp(1, 6),
        text: text.into(),
    }
}

pub fn p(inlines: Vec<Inline>) -> Node {
    Node::Paragraph(inlines)
}

pub fn text(s: impl Into<String>) -> Inline {
    Inline::Text(s.into())
}

pub fn strong(s: impl Into<String>) -> Inline {
    Inline::Strong(s.into())
}

pub fn link(label: impl Into<String>, href: impl Into<String>) -> Inline {
    Inline::Link {
        label: label.into(),
        href: href.into(),
        external: false,
    }
}

pub fn external_link(label: impl Into<String>, href: impl Into<String>) -> Inline {
    Inline::Link {
        label: label.into(),
        href: href.into(),
        external: true,
    }
}

pub fn card(class: Option<&'static str>, children: Vec<Node>) -> Node {
    Node::Card { class, children }
}

pub fn container(class: Option<&'static str>, children: Vec<Node>) -> Node {
    Node::Container { class, children }
}

pub fn link_button(label: impl Into<String>, href: impl Into<String>, primary: bool) -> Node {
    Node::LinkButton {
        label: label.into(),
        href: href.into(),
        primary,
    }
}

/// Serializes a fragment tree to HTML.
///
/// Pure: equal trees produce byte-identical output.
pub fn render(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        render_node(node, &mut out);
    }
    out
}

fn render_node(node: &Node, out: &mut String) {
    match node {
        Node::Heading { level, text } => {
            out.push_str(&format!("<h{level}>{}</h{level}>", encode_text(text)));
        }
        Node::Paragraph(inlines) => {
            out.push_str("<p>");
            for inline in inlines {
                render_inline(inline, out);
            }
            out.push_str("</p>");
        }
        Node::List(items) => {
            out.push_str("<ul>");
            for item in items {
                out.push_str("<li>");
                for inline in item {
                    render_inline(inline, out);
                }
                out.push_str("</li>");
            }
            out.push_str("</ul>");
        }
        Node::Container { class, children } => {
            render_block("div", "block", *class, children, out);
        }
        Node::Card { class, children } => {
            render_block("section", "card", *class, children, out);
        }
        Node::LinkButton {
            label,
            href,
            primary,
        } => {
            let variant = if *primary { "primary" } else { "secondary" };
            out.push_str(&format!(
                "<a class=\"button button--{variant}\" href=\"{}\">{}</a>",
                encode_double_quoted_attribute(href),
                encode_text(label)
            ));
        }
        Node::TopicCard(topic) => render_topic_card(topic, out),
        Node::CodeBlock {
            source,
            language,
            caption,
        } => render_code_block(source, language, caption.as_deref(), out),
        Node::MathBlock { expr, mode } => render_math_block(expr, *mode, out),
    }
}

fn render_inline(inline: &Inline, out: &mut String) {
    match inline {
        Inline::Text(s) => out.push_str(&encode_text(s)),
        Inline::Strong(s) => out.push_str(&format!("<strong>{}</strong>", encode_text(s))),
        Inline::Code(s) => out.push_str(&format!("<code>{}</code>", encode_text(s))),
        Inline::Link {
            label,
            href,
            external,
        } => {
            let target = if *external {
                " target=\"_blank\" rel=\"noopener noreferrer\""
            } else {
                ""
            };
            out.push_str(&format!(
                "<a href=\"{}\"{target}>{}</a>",
                encode_double_quoted_attribute(href),
                encode_text(label)
            ));
        }
    }
}

fn render_block(
    tag: &str,
    base_class: &str,
    class: Option<&'static str>,
    children: &[Node],
    out: &mut String,
) {
    match class {
        Some(class) => out.push_str(&format!(
            "<{tag} class=\"{base_class} {}\">",
            encode_double_quoted_attribute(class)
        )),
        None => out.push_str(&format!("<{tag} class=\"{base_class}\">")),
    }
    for child in children {
        render_node(child, out);
    }
    out.push_str(&format!("</{tag}>"));
}

fn render_topic_card(topic: &TopicCard, out: &mut String) {
    let title = encode_text(&topic.title);
    let description = encode_text(&topic.description);
    match topic.status {
        // Available topics are a single clickable tile.
        TopicStatus::Available => out.push_str(&format!(
            "<a class=\"topic-card\" href=\"{}\">\
                <h3>{title}</h3>\
                <p>{description}</p>\
                <span class=\"topic-status topic-status--available\">Available</span>\
            </a>",
            encode_double_quoted_attribute(&topic.href)
        )),
        // Coming-soon topics render muted and without any link target.
        TopicStatus::ComingSoon => out.push_str(&format!(
            "<div class=\"topic-card topic-card--coming-soon\">\
                <h3>{title}</h3>\
                <p>{description}</p>\
                <span class=\"topic-status topic-status--coming-soon\">Coming Soon</span>\
            </div>"
        )),
    }
}

fn render_code_block(source: &str, language: &str, caption: Option<&str>, out: &mut String) {
    let header = caption.unwrap_or(language);
    out.push_str(&format!(
        "<figure class=\"code-block\">\
            <figcaption class=\"code-block__header\">\
                <span class=\"code-block__title\">{}</span>\
                <button type=\"button\" class=\"code-block__copy\" data-copy>Copy</button>\
            </figcaption>\
            <pre><code class=\"language-{}\">{}</code></pre>\
        </figure>",
        encode_text(header),
        encode_double_quoted_attribute(language),
        encode_text(source)
    ));
}

fn render_math_block(expr: &str, mode: MathMode, out: &mut String) {
    // The server emits the raw expression only; a client-side renderer
    // typesets any [data-math] element at display time.
    let expr = encode_text(expr);
    match mode {
        MathMode::Display => out.push_str(&format!(
            "<div class=\"math math--display\" data-math=\"display\">{expr}</div>"
        )),
        MathMode::Inline => out.push_str(&format!(
            "<span class=\"math math--inline\" data-math=\"inline\">{expr}</span>"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_escaped() {
        let html = render(&[p(vec![text("<script>alert(1)</script> & friends")])]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&amp; friends"));
    }

    #[test]
    fn heading_level_is_clamped() {
        assert_eq!(render(&[h(9, "deep")]), "<h6>deep</h6>");
        assert_eq!(render(&[h(0, "top")]), "<h1>top</h1>");
    }

    #[test]
    fn link_attributes_are_escaped() {
        let html = render(&[p(vec![link("x", "/a\"b")])]);
        assert!(html.contains("href=\"/a&quot;b\""));
    }

    #[test]
    fn external_link_gets_rel_noopener() {
        let html = render(&[p(vec![external_link("GitHub", "https://github.com")])]);
        assert!(html.contains("rel=\"noopener noreferrer\""));
        let html = render(&[p(vec![link("Home", "/")])]);
        assert!(!html.contains("noopener"));
    }

    #[test]
    fn available_topic_card_is_a_link() {
        let html = render(&[Node::TopicCard(TopicCard {
            title: "RBE".into(),
            description: "Estimators".into(),
            href: "/rbe/".into(),
            status: TopicStatus::Available,
        })]);
        assert!(html.starts_with("<a class=\"topic-card\" href=\"/rbe/\">"));
        assert!(html.contains("Available"));
    }

    #[test]
    fn coming_soon_topic_card_is_not_clickable() {
        let html = render(&[Node::TopicCard(TopicCard {
            title: "Quantum".into(),
            description: "Qubits".into(),
            href: "/quantum/".into(),
            status: TopicStatus::ComingSoon,
        })]);
        assert!(!html.contains("<a "));
        assert!(!html.contains("/quantum/"));
        assert!(html.contains("topic-card--coming-soon"));
        assert!(html.contains("Coming Soon"));
    }

    #[test]
    fn code_block_escapes_source_and_keeps_caption() {
        let html = render(&[Node::CodeBlock {
            source: "if a < b { swap() }".into(),
            language: "rust".into(),
            caption: Some("Swap".into()),
        }]);
        assert!(html.contains("a &lt; b"));
        assert!(html.contains("language-rust"));
        assert!(html.contains("<span class=\"code-block__title\">Swap</span>"));
        assert!(html.contains("data-copy"));
    }

    #[test]
    fn code_block_header_falls_back_to_language() {
        let html = render(&[Node::CodeBlock {
            source: "x = 1".into(),
            language: "python".into(),
            caption: None,
        }]);
        assert!(html.contains("<span class=\"code-block__title\">python</span>"));
    }

    #[test]
    fn math_modes_render_distinct_containers() {
        let display = render(&[Node::MathBlock {
            expr: r"P(H|E) = \frac{P(E|H) P(H)}{P(E)}".into(),
            mode: MathMode::Display,
        }]);
        assert!(display.starts_with("<div class=\"math math--display\""));
        let inline = render(&[Node::MathBlock {
            expr: "x^2".into(),
            mode: MathMode::Inline,
        }]);
        assert!(inline.starts_with("<span class=\"math math--inline\""));
    }

    #[test]
    fn render_is_deterministic() {
        let tree = vec![
            h(1, "Title"),
            card(Some("hero"), vec![p(vec![text("Body")])]),
            Node::TopicCard(TopicCard {
                title: "T".into(),
                description: "D".into(),
                href: "/t/".into(),
                status: TopicStatus::Available,
            }),
        ];
        assert_eq!(render(&tree), render(&tree));
    }
}
