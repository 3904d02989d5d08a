//! Component library: pure constructors for reusable page fragments.
//!
//! Every function here is a pure mapping from inputs to a fragment tree (or
//! navigation data); there is no state and no I/O.

use crate::fragment::{MathMode, Node, TopicCard, TopicStatus};
use crate::templates::HeadEntry;
use crate::BUILD_VERSION;

/// Site sections a route can belong to, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Rbe,
    Topics,
    Demo,
    About,
}

impl Section {
    /// Fixed navigation order.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Rbe,
        Section::Topics,
        Section::Demo,
        Section::About,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Rbe => "RBE Series",
            Section::Topics => "Topics",
            Section::Demo => "Demo",
            Section::About => "About",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Section::Home => "/",
            Section::Rbe => "/rbe/",
            Section::Topics => "/topics/",
            Section::Demo => "/demo/",
            Section::About => "/about/",
        }
    }
}

/// One entry of the navigation bar, rendered by the base shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

/// Builds the fixed navigation bar, marking at most one section active.
///
/// Error pages pass `None` so no section is highlighted.
pub fn nav_links(active: Option<Section>) -> Vec<NavLink> {
    Section::ALL
        .into_iter()
        .map(|section| NavLink {
            label: section.label(),
            href: section.href(),
            active: active == Some(section),
        })
        .collect()
}

/// Clickable (or muted, when coming soon) topic summary tile.
pub fn topic_card(
    title: impl Into<String>,
    description: impl Into<String>,
    href: impl Into<String>,
    status: TopicStatus,
) -> Node {
    Node::TopicCard(TopicCard {
        title: title.into(),
        description: description.into(),
        href: href.into(),
        status,
    })
}

/// Preformatted code with a caption/language header and a copy button.
///
/// Highlighting itself happens client-side; pages using this component must
/// also load [`code_highlight_head`].
pub fn code_block(
    source: impl Into<String>,
    language: impl Into<String>,
    caption: Option<&str>,
) -> Node {
    Node::CodeBlock {
        source: source.into(),
        language: language.into(),
        caption: caption.map(str::to_owned),
    }
}

/// Math placeholder typeset client-side; `display` selects block vs. inline.
///
/// Pages using this component must also load [`math_typeset_head`].
pub fn math_block(expr: impl Into<String>, display: bool) -> Node {
    Node::MathBlock {
        expr: expr.into(),
        mode: if display {
            MathMode::Display
        } else {
            MathMode::Inline
        },
    }
}

const HIGHLIGHT_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/styles/github-dark.min.css";
const HIGHLIGHT_JS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/highlight.min.js";
const KATEX_CSS: &str = "https://cdn.jsdelivr.net/npm/katex@0.16.10/dist/katex.min.css";
const KATEX_JS: &str = "https://cdn.jsdelivr.net/npm/katex@0.16.10/dist/katex.min.js";

fn components_script() -> HeadEntry {
    HeadEntry::Script {
        src: format!("/static/js/components.js?v={BUILD_VERSION}"),
        defer: true,
    }
}

/// Head entries for client-side syntax highlighting.
///
/// Loaded once per page; duplicate entries are deduplicated by the page
/// configuration, so a page may request these alongside [`math_typeset_head`].
pub fn code_highlight_head() -> Vec<HeadEntry> {
    vec![
        HeadEntry::Stylesheet {
            href: HIGHLIGHT_CSS.to_owned(),
        },
        HeadEntry::Script {
            src: HIGHLIGHT_JS.to_owned(),
            defer: true,
        },
        components_script(),
    ]
}

/// Head entries for client-side math typesetting.
pub fn math_typeset_head() -> Vec<HeadEntry> {
    vec![
        HeadEntry::Stylesheet {
            href: KATEX_CSS.to_owned(),
        },
        HeadEntry::Script {
            src: KATEX_JS.to_owned(),
            defer: true,
        },
        components_script(),
    ]
}
