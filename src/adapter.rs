//! The notebook display adapter
//!
//! Thin orchestration over the conversion registry and the mosaic service:
//! check whether a converter exists, invoke it, otherwise hand the value
//! back unchanged. The HTML table path is the one operation rendered
//! locally (see [`crate::table`]); everything else delegates.

use tracing::warn;

use crate::error::DisplayResult;
use crate::mime::{MimeContainer, MimeType};
use crate::mosaic::{GridLayout, Image, MosaicService};
use crate::output::{DisplayValue, OutputKind};
use crate::registry::ConvertRegistry;
use crate::table::{self, Row};

// =============================================================================
// NotebookDisplay
// =============================================================================

/// Adapter that turns in-memory values into notebook-displayable payloads.
///
/// Holds no state of its own beyond the injected registry, so concurrent
/// calls are safe whenever the registry is. All operations are synchronous
/// and side-effect-free apart from logging.
///
/// # Example
///
/// ```ignore
/// use notebook_display::{NotebookDisplay, NoopRegistry, OutputKind};
///
/// let display = NotebookDisplay::new(NoopRegistry);
/// // No converter registered: the value comes back unchanged.
/// let out = display.html("<b>bold</b>");
/// assert_eq!(out.as_text(), Some("<b>bold</b>"));
/// ```
#[derive(Debug, Clone)]
pub struct NotebookDisplay<R> {
    registry: R,
}

impl<R: ConvertRegistry> NotebookDisplay<R> {
    /// Create an adapter backed by the given conversion registry.
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Borrow the underlying registry.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Convert `value` to `kind` if a converter is registered.
    ///
    /// Unsupported conversions are not an error: the value is returned
    /// unchanged and the caller decides what to do with it.
    pub fn display(&self, value: DisplayValue, kind: OutputKind) -> DisplayValue {
        if self.registry.supports(&value, kind) {
            return self.registry.convert(value, kind);
        }
        value
    }

    /// Wrap `content` in a MIME container for a known MIME tag.
    ///
    /// Unknown tags log one warning and return the content unwrapped as
    /// plain text.
    pub fn display_mimetype(&self, mimetype: &str, content: impl Into<String>) -> DisplayValue {
        match MimeType::from_tag(mimetype) {
            Some(mime) => DisplayValue::Output(MimeContainer::new(mime, content)),
            None => {
                warn!(mimetype, "mime type not in the supported set");
                DisplayValue::Text(content.into())
            }
        }
    }

    /// Display text as an HTML fragment, falling back to the raw text.
    pub fn html(&self, content: impl Into<String>) -> DisplayValue {
        self.convert_text(content.into(), OutputKind::Html)
    }

    /// Display text as Markdown, falling back to the raw text.
    pub fn markdown(&self, content: impl Into<String>) -> DisplayValue {
        self.convert_text(content.into(), OutputKind::Markdown)
    }

    /// Display text as LaTeX, falling back to the raw text.
    pub fn latex(&self, content: impl Into<String>) -> DisplayValue {
        self.convert_text(content.into(), OutputKind::Latex)
    }

    // html/markdown/latex differ only in the target kind.
    fn convert_text(&self, content: String, kind: OutputKind) -> DisplayValue {
        self.display(DisplayValue::Text(content), kind)
    }

    /// Render rows as an HTML table payload.
    ///
    /// Purely local string construction, no registry involvement. Fails with
    /// [`DisplayError::EmptyTable`](crate::error::DisplayError::EmptyTable)
    /// when there is no first row to derive headers from.
    pub fn table(&self, rows: &[Row]) -> DisplayResult<DisplayValue> {
        let html = table::render_rows(rows)?;
        Ok(DisplayValue::Output(MimeContainer::html(html)))
    }

    /// Tile images into a grid and display the combined image.
    ///
    /// Arrangement is the mosaic service's job, including any validation of
    /// grid dimensions against the image count. The combined image then goes
    /// through the registry as a generic notebook output; with no image
    /// converter registered it comes back as [`DisplayValue::Image`].
    pub fn tiles<M: MosaicService>(
        &self,
        mosaic: &M,
        grid: GridLayout,
        images: Vec<Image>,
    ) -> DisplayValue {
        let combined = mosaic.mosaic(grid, images);
        self.display(DisplayValue::Image(combined), OutputKind::Notebook)
    }
}

// =============================================================================
// Tests
// =============================================================================
