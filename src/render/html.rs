//! Minimal HTML element builder
//!
//! The widget produces markup strings the embedder injects into its page,
//! so element construction is plain string assembly: a tag, a set of
//! attributes, and child content that is either escaped text or markup a
//! caller explicitly vouched for.

use std::fmt::Write;

/// Tags that take no content and no closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input"];

/// Escapes text for safe injection into HTML content or attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Builder for one HTML element. Pure, no state beyond what it is given.
///
/// # Example
///
/// ```
/// use datagrid::render::html::Element;
///
/// let markup = Element::new("button")
///     .class("btn-delete")
///     .text("Delete")
///     .build();
/// assert_eq!(markup, "<button class=\"btn-delete\">Delete</button>");
/// ```
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    content: String,
}

impl Element {
    /// Creates a builder for the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            content: String::new(),
        }
    }

    /// Sets an attribute. Values are escaped.
    pub fn attr(mut self, key: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        self.attrs
            .push((key.as_ref().to_string(), value.as_ref().to_string()));
        self
    }

    /// Sets the `class` attribute.
    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    /// Sets a boolean attribute (rendered without a value).
    pub fn flag(mut self, key: impl AsRef<str>) -> Self {
        self.attrs.push((key.as_ref().to_string(), String::new()));
        self
    }

    /// Appends escaped text content.
    pub fn text(mut self, text: &str) -> Self {
        self.content.push_str(&escape(text));
        self
    }

    /// Appends markup verbatim. The caller vouches for its safety.
    pub fn raw(mut self, markup: &str) -> Self {
        self.content.push_str(markup);
        self
    }

    /// Appends a child element.
    pub fn child(self, child: Element) -> Self {
        let markup = child.build();
        self.raw(&markup)
    }

    /// Renders the element to markup.
    pub fn build(self) -> String {
        let mut out = String::new();
        out.push('<');
        out.push_str(&self.tag);
        for (key, value) in &self.attrs {
            if value.is_empty() {
                let _ = write!(out, " {key}");
            } else {
                let _ = write!(out, " {key}=\"{}\"", escape(value));
            }
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag.as_str()) {
            return out;
        }
        out.push_str(&self.content);
        let _ = write!(out, "</{}>", self.tag);
        out
    }
}
