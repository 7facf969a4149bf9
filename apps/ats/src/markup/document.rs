//! Markup query capability.
//!
//! Markup checks never look at raw HTML. They ask a [`MarkupQuery`] for
//! elements by tag, attribute values, descendant counts and extracted text.
//! [`HtmlDocument`] answers those questions from a `scraper` parse tree.

use std::collections::BTreeMap;

use scraper::{ElementRef, Html};

/// Snapshot of one element as the checks see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Lowercase tag name.
    pub tag: String,
    /// Text content with whitespace runs collapsed and ends trimmed.
    pub text: String,
    pub attributes: BTreeMap<String, String>,
}

impl Element {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// `1..=6` for `h1`..`h6`, `None` for anything else.
    pub fn heading_level(&self) -> Option<u8> {
        let level = self.tag.strip_prefix('h')?.parse::<u8>().ok()?;
        (1..=6).contains(&level).then_some(level)
    }
}

pub const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

pub trait MarkupQuery {
    /// Elements whose tag is in `tags`, in document order.
    fn elements(&self, tags: &[&str]) -> Vec<Element>;

    /// For every `tag` element, the number of `descendant` elements beneath it.
    fn descendant_counts(&self, tag: &str, descendant: &str) -> Vec<usize>;

    /// Every `<style>` body plus every inline `style` attribute, newline separated.
    fn style_text(&self) -> String;

    /// Visible text of `<body>`, whitespace collapsed.
    fn body_text(&self) -> String;

    fn count(&self, tag: &str) -> usize {
        self.elements(&[tag]).len()
    }

    fn exists(&self, tag: &str) -> bool {
        self.count(tag) > 0
    }

    /// The `attr` value of every `tag` element, `None` where it is absent.
    fn attribute_values(&self, tag: &str, attr: &str) -> Vec<Option<String>> {
        self.elements(&[tag])
            .into_iter()
            .map(|e| e.attributes.get(attr).cloned())
            .collect()
    }
}

/// A parsed HTML document.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parses leniently; malformed markup is repaired the way browsers do.
    pub fn parse(markup: &str) -> Self {
        let html = Html::parse_document(markup);
        if !html.errors.is_empty() {
            tracing::debug!(parse_errors = html.errors.len(), "HTML parsed with recoverable errors");
        }
        Self { html }
    }

    fn all_elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html.tree.root().descendants().filter_map(ElementRef::wrap)
    }
}

impl MarkupQuery for HtmlDocument {
    fn elements(&self, tags: &[&str]) -> Vec<Element> {
        self.all_elements()
            .filter(|el| tags.contains(&el.value().name()))
            .map(snapshot)
            .collect()
    }

    fn descendant_counts(&self, tag: &str, descendant: &str) -> Vec<usize> {
        self.all_elements()
            .filter(|el| el.value().name() == tag)
            .map(|el| {
                el.descendants()
                    .skip(1)
                    .filter_map(ElementRef::wrap)
                    .filter(|d| d.value().name() == descendant)
                    .count()
            })
            .collect()
    }

    fn style_text(&self) -> String {
        let mut blocks = Vec::new();
        for el in self.all_elements() {
            if el.value().name() == "style" {
                blocks.push(el.text().collect::<String>());
            }
            if let Some(inline) = el.value().attr("style") {
                blocks.push(inline.to_string());
            }
        }
        blocks.join("\n")
    }

    fn body_text(&self) -> String {
        self.all_elements()
            .filter(|el| el.value().name() == "body")
            .map(collapse_text)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn count(&self, tag: &str) -> usize {
        self.all_elements().filter(|el| el.value().name() == tag).count()
    }
}

fn snapshot(el: ElementRef<'_>) -> Element {
    Element {
        tag: el.value().name().to_string(),
        text: collapse_text(el),
        attributes: el
            .value()
            .attrs()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    }
}

fn collapse_text(el: ElementRef<'_>) -> String {
    el.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
