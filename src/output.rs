//! Output kinds and displayable values
//!
//! `OutputKind` names the renderer a caller wants; `DisplayValue` is the
//! payload that flows through the adapter and the conversion registry.

use crate::mime::MimeContainer;
use crate::mosaic::Image;
use crate::table::Row;

// =============================================================================
// OutputKind
// =============================================================================

/// The renderable format a caller requests from the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKind {
    /// An HTML fragment
    Html,
    /// Markdown source
    Markdown,
    /// LaTeX source
    Latex,
    /// Generic notebook output: any MIME-tagged payload is acceptable
    Notebook,
}

impl OutputKind {
    /// Name for logging and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            OutputKind::Html => "html",
            OutputKind::Markdown => "markdown",
            OutputKind::Latex => "latex",
            OutputKind::Notebook => "notebook",
        }
    }
}

// =============================================================================
// DisplayValue
// =============================================================================

/// A value on its way to being displayed.
///
/// Inputs and outputs share this type: the adapter's fallback contract is to
/// hand back the input variant unchanged when no converter is registered, so
/// callers always get a `DisplayValue` whether or not conversion happened.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayValue {
    /// Plain text, not yet rendered
    Text(String),
    /// A decoded raster image
    Image(Image),
    /// Tabular rows
    Table(Vec<Row>),
    /// Already-rendered MIME output
    Output(MimeContainer),
}

impl DisplayValue {
    /// Create a text value.
    pub fn text(content: impl Into<String>) -> Self {
        DisplayValue::Text(content.into())
    }

    /// Check if this is a text value
    pub fn is_text(&self) -> bool {
        matches!(self, DisplayValue::Text(_))
    }

    /// Check if this is an already-rendered output
    pub fn is_output(&self) -> bool {
        matches!(self, DisplayValue::Output(_))
    }

    /// Get the text content, if any
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DisplayValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the rendered output, if any
    pub fn as_output(&self) -> Option<&MimeContainer> {
        match self {
            DisplayValue::Output(c) => Some(c),
            _ => None,
        }
    }
}

impl From<MimeContainer> for DisplayValue {
    fn from(container: MimeContainer) -> Self {
        DisplayValue::Output(container)
    }
}

impl From<Image> for DisplayValue {
    fn from(image: Image) -> Self {
        DisplayValue::Image(image)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mime::MimeType;

    #[test]
    fn test_kind_names() {
        assert_eq!(OutputKind::Html.name(), "html");
        assert_eq!(OutputKind::Notebook.name(), "notebook");
    }

    #[test]
    fn test_value_accessors() {
        let v = DisplayValue::text("hello");
        assert!(v.is_text());
        assert!(!v.is_output());
        assert_eq!(v.as_text(), Some("hello"));
        assert_eq!(v.as_output(), None);

        let v: DisplayValue = MimeContainer::plain("x").into();
        assert!(v.is_output());
        assert_eq!(v.as_output().map(|c| c.mime), Some(MimeType::TextPlain));
    }
}
