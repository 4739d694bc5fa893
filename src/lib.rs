//! notebook-display - Notebook Display Adapter
//!
//! Converts in-memory values (text, images, tables) into notebook-displayable
//! representations (HTML, Markdown, LaTeX, MIME-tagged payloads) for a
//! Jupyter-style frontend. Real conversion logic lives behind the pluggable
//! [`ConvertRegistry`]; image tiling lives behind [`MosaicService`]. When no
//! converter is registered, values pass through unchanged.
//!
//! ## Modules
//! - `adapter`: The [`NotebookDisplay`] adapter and its operations
//! - `mime`: Closed MIME type set and [`MimeContainer`] payloads
//! - `output`: [`OutputKind`] tags and [`DisplayValue`] payloads
//! - `registry`: Conversion registry seam
//! - `mosaic`: Image tiling seam
//! - `table`: Ordered rows and the HTML table renderer
//! - `error`: Error types
//!
//! ## Usage
//!
//! ```ignore
//! use notebook_display::prelude::*;
//!
//! let display = NotebookDisplay::new(my_registry);
//!
//! // Converted if a text->html converter is registered, raw text otherwise.
//! let out = display.html("<b>hello</b>");
//!
//! // Deterministic local rendering, no registry involved.
//! let table = display.table(&rows)?;
//! ```

// =============================================================================
// Modules
// =============================================================================

/// The notebook display adapter
pub mod adapter;

/// Error types
pub mod error;

/// MIME types and MIME-tagged payloads
pub mod mime;

/// Image tiling seam
pub mod mosaic;

/// Output kinds and displayable values
pub mod output;

/// Prelude for common imports
pub mod prelude;

/// Conversion registry seam
pub mod registry;

/// Tabular rows and HTML table rendering
pub mod table;

// =============================================================================
// Re-exports
// =============================================================================

pub use adapter::NotebookDisplay;
pub use error::{DisplayError, DisplayResult};
pub use mime::{MimeContainer, MimeType};
pub use mosaic::{GridLayout, Image, MosaicService};
pub use output::{DisplayValue, OutputKind};
pub use registry::{ConvertRegistry, NoopRegistry};
pub use table::{Row, RowExt, render_rows, row};
