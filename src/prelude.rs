//! Prelude module for common imports.
//!
//! ```ignore
//! use notebook_display::prelude::*;
//! ```

// Adapter
pub use crate::adapter::NotebookDisplay;

// Payloads
pub use crate::mime::{MimeContainer, MimeType};
pub use crate::output::{DisplayValue, OutputKind};

// Collaborator seams
pub use crate::mosaic::{GridLayout, Image, MosaicService};
pub use crate::registry::{ConvertRegistry, NoopRegistry};

// Tables
pub use crate::table::{Row, RowExt, render_rows, row};

// Error
pub use crate::error::{DisplayError, DisplayResult};
