//! Askama layout shells and the page head configuration.
//!
//! Page bodies arrive as a pre-rendered fragment tree; the shells only add
//! the document head, navigation bar, container and footer around them.

use askama::Template;
use askama_web::WebTemplate;
use html_escape::encode_double_quoted_attribute;

use crate::components::{nav_links, NavLink, Section};
use crate::fragment::{self, Node};
use crate::BUILD_VERSION;

/// Site name used in titles and the health payload.
pub const SITE_NAME: &str = "Technical Blog";

/// A single supported extra head entry; a closed set instead of free-form
/// header tuples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadEntry {
    Stylesheet { href: String },
    Script { src: String, defer: bool },
}

impl HeadEntry {
    fn render(&self, out: &mut String) {
        match self {
            HeadEntry::Stylesheet { href } => out.push_str(&format!(
                "<link rel=\"stylesheet\" href=\"{}\">\n",
                encode_double_quoted_attribute(href)
            )),
            HeadEntry::Script { src, defer } => {
                let defer = if *defer { " defer" } else { "" };
                out.push_str(&format!(
                    "<script src=\"{}\"{defer}></script>\n",
                    encode_double_quoted_attribute(src)
                ));
            }
        }
    }
}

/// Explicit page options: title, active section, extra head entries.
///
/// Duplicate head entries are dropped at insertion, so a page that uses both
/// the code and math components still loads their shared script once.
#[derive(Debug, Clone)]
pub struct PageConfig {
    title: String,
    section: Option<Section>,
    extra_head: Vec<HeadEntry>,
}

impl PageConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            section: None,
            extra_head: Vec::new(),
        }
    }

    pub fn section(mut self, section: Section) -> Self {
        self.section = Some(section);
        self
    }

    pub fn head(mut self, entries: Vec<HeadEntry>) -> Self {
        for entry in entries {
            if !self.extra_head.contains(&entry) {
                self.extra_head.push(entry);
            }
        }
        self
    }

    fn rendered_head(&self) -> String {
        let mut out = String::new();
        for entry in &self.extra_head {
            entry.render(&mut out);
        }
        out
    }
}

/// Content shell: base shell plus a centered, width-constrained container.
#[derive(Template, WebTemplate)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub title: String,
    pub nav: Vec<NavLink>,
    pub extra_head: String,
    pub content_html: String,
    /// Build version for cache busting static assets.
    pub v: &'static str,
}

impl PageTemplate {
    pub fn new(config: PageConfig, body: &[Node]) -> Self {
        Self {
            nav: nav_links(config.section),
            extra_head: config.rendered_head(),
            content_html: fragment::render(body),
            title: config.title,
            v: BUILD_VERSION,
        }
    }
}

/// Error shell: status code, message and fixed recovery links. Carries no
/// active section and never inspects the failing request.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub nav: Vec<NavLink>,
    pub extra_head: String,
    pub code: u16,
    pub message: String,
    pub detail: String,
    /// Build version for cache busting static assets.
    pub v: &'static str,
}

impl ErrorTemplate {
    pub fn new(code: u16, message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: format!("Error {code} - {SITE_NAME}"),
            nav: nav_links(None),
            extra_head: String::new(),
            code,
            message: message.into(),
            detail: detail.into(),
            v: BUILD_VERSION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::{h, p, text};

    #[test]
    fn page_renders_body_inside_container() {
        let page = PageTemplate::new(
            PageConfig::new("Test Page").section(Section::Home),
            &[h(1, "Hello"), p(vec![text("World")])],
        );
        let html = page.render().expect("template renders");
        assert!(html.contains("<title>Test Page</title>"));
        assert!(html.contains("<main class=\"container\">"));
        assert!(html.contains("<h1>Hello</h1>"));
    }

    #[test]
    fn page_has_exactly_one_navigation_bar() {
        let page = PageTemplate::new(PageConfig::new("Test").section(Section::About), &[]);
        let html = page.render().expect("template renders");
        assert_eq!(html.matches("class=\"main-navigation\"").count(), 1);
        assert_eq!(html.matches("nav-link active").count(), 1);
        assert!(html.contains("class=\"nav-link active\" href=\"/about/\""));
    }

    #[test]
    fn duplicate_head_entries_load_once() {
        let script = HeadEntry::Script {
            src: "/static/js/components.js".into(),
            defer: true,
        };
        let config = PageConfig::new("Test")
            .head(vec![script.clone()])
            .head(vec![script]);
        let page = PageTemplate::new(config, &[]);
        let html = page.render().expect("template renders");
        assert_eq!(html.matches("/static/js/components.js").count(), 1);
    }

    #[test]
    fn error_shell_has_no_active_section() {
        let error = ErrorTemplate::new(404, "Page Not Found", "No such page.");
        let html = error.render().expect("template renders");
        assert!(html.contains("Error 404"));
        assert!(!html.contains("nav-link active"));
        for href in ["/", "/topics/", "/rbe/", "/demo/"] {
            assert!(html.contains(&format!("href=\"{href}\"")), "missing {href}");
        }
    }
}
