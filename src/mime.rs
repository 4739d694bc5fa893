//! MIME types and MIME-tagged payloads
//!
//! The frontend renders outputs keyed by MIME type, so the set of types is
//! closed: every variant here corresponds to a renderer the frontend ships.

use std::fmt;

// =============================================================================
// MimeType
// =============================================================================

/// A MIME type the notebook frontend knows how to render.
///
/// The set is closed by construction; unknown tags are rejected at the
/// [`MimeType::from_tag`] boundary rather than carried as free-form strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MimeType {
    TextPlain,
    TextHtml,
    TextLatex,
    TextMarkdown,
    ApplicationJavascript,
    ApplicationJson,
    ImagePng,
    ImageJpeg,
    ImageGif,
    ImageSvg,
}

impl MimeType {
    /// Every known MIME type, in declaration order.
    pub const ALL: &'static [MimeType] = &[
        MimeType::TextPlain,
        MimeType::TextHtml,
        MimeType::TextLatex,
        MimeType::TextMarkdown,
        MimeType::ApplicationJavascript,
        MimeType::ApplicationJson,
        MimeType::ImagePng,
        MimeType::ImageJpeg,
        MimeType::ImageGif,
        MimeType::ImageSvg,
    ];

    /// The wire tag for this MIME type.
    pub fn tag(self) -> &'static str {
        match self {
            MimeType::TextPlain => "text/plain",
            MimeType::TextHtml => "text/html",
            MimeType::TextLatex => "text/latex",
            MimeType::TextMarkdown => "text/markdown",
            MimeType::ApplicationJavascript => "application/javascript",
            MimeType::ApplicationJson => "application/json",
            MimeType::ImagePng => "image/png",
            MimeType::ImageJpeg => "image/jpeg",
            MimeType::ImageGif => "image/gif",
            MimeType::ImageSvg => "image/svg+xml",
        }
    }

    /// Look up a MIME type by exact tag match.
    ///
    /// Linear scan over [`MimeType::ALL`]; tags are unique by construction.
    pub fn from_tag(tag: &str) -> Option<MimeType> {
        Self::ALL.iter().copied().find(|m| m.tag() == tag)
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// =============================================================================
// MimeContainer
// =============================================================================

/// Rendered content tagged with the MIME type the frontend should use.
///
/// This is the terminal payload shape: once a value has been converted into
/// a `MimeContainer`, no further conversion applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MimeContainer {
    /// MIME type for frontend dispatch
    pub mime: MimeType,
    /// Literal content, already rendered
    pub content: String,
}

impl MimeContainer {
    /// Create a container with an explicit MIME type.
    pub fn new(mime: MimeType, content: impl Into<String>) -> Self {
        Self {
            mime,
            content: content.into(),
        }
    }

    /// An HTML fragment payload.
    pub fn html(content: impl Into<String>) -> Self {
        Self::new(MimeType::TextHtml, content)
    }

    /// A Markdown payload.
    pub fn markdown(content: impl Into<String>) -> Self {
        Self::new(MimeType::TextMarkdown, content)
    }

    /// A LaTeX payload.
    pub fn latex(content: impl Into<String>) -> Self {
        Self::new(MimeType::TextLatex, content)
    }

    /// A plain-text payload.
    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(MimeType::TextPlain, content)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        for mime in MimeType::ALL {
            assert_eq!(MimeType::from_tag(mime.tag()), Some(*mime));
        }
    }

    #[test]
    fn test_unknown_tag_rejected() {
        assert_eq!(MimeType::from_tag("bogus/type"), None);
        assert_eq!(MimeType::from_tag(""), None);
        // Prefix and case must match exactly
        assert_eq!(MimeType::from_tag("text/plai"), None);
        assert_eq!(MimeType::from_tag("Text/Plain"), None);
    }

    #[test]
    fn test_display_uses_tag() {
        assert_eq!(MimeType::TextHtml.to_string(), "text/html");
        assert_eq!(MimeType::ImageSvg.to_string(), "image/svg+xml");
    }

    #[test]
    fn test_container_constructors() {
        let c = MimeContainer::html("<b>x</b>");
        assert_eq!(c.mime, MimeType::TextHtml);
        assert_eq!(c.content, "<b>x</b>");

        assert_eq!(MimeContainer::markdown("# h").mime, MimeType::TextMarkdown);
        assert_eq!(MimeContainer::latex("\\frac{1}{2}").mime, MimeType::TextLatex);
        assert_eq!(MimeContainer::plain("x").mime, MimeType::TextPlain);
    }

    #[test]
    fn test_all_tags_unique() {
        for (i, a) in MimeType::ALL.iter().enumerate() {
            for b in &MimeType::ALL[i + 1..] {
                assert_ne!(a.tag(), b.tag());
            }
        }
    }
}
