//! Rendered cell content

use crate::render::html::escape;

/// Content produced for one table cell.
///
/// Columns opt into unescaped markup explicitly: a computed column that
/// builds an `<img>` tag or a color swatch returns [`RenderedCell::Html`],
/// while plain field columns and text-producing computations return
/// [`RenderedCell::Text`] and get escaped at render time. Raw cell
/// assignment by convention is deliberately not supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedCell {
    /// Plain text, HTML-escaped when injected into markup.
    Text(String),
    /// Markup injected verbatim. The producer vouches for its safety.
    Html(String),
}

impl RenderedCell {
    /// Creates a text cell.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Creates a raw markup cell.
    pub fn html(content: impl Into<String>) -> Self {
        Self::Html(content.into())
    }

    /// Returns the markup to inject into the cell.
    pub fn to_markup(&self) -> String {
        match self {
            Self::Text(t) => escape(t),
            Self::Html(h) => h.clone(),
        }
    }

    /// Returns the underlying content as entered edit mode sees it.
    ///
    /// This is what the in-place editor converts back into a raw input value
    /// (hex code extraction, age inversion, URL extraction).
    pub fn source_text(&self) -> &str {
        match self {
            Self::Text(t) => t,
            Self::Html(h) => h,
        }
    }
}

impl From<String> for RenderedCell {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for RenderedCell {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_escaped() {
        let cell = RenderedCell::text("a < b & c");
        assert_eq!(cell.to_markup(), "a &lt; b &amp; c");
    }

    #[test]
    fn test_html_is_verbatim() {
        let cell = RenderedCell::html("<img src=\"x.png\"/>");
        assert_eq!(cell.to_markup(), "<img src=\"x.png\"/>");
    }
}
