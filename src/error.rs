//! Error types for the display adapter.
//!
//! Unsupported conversions are not errors (the adapter passes the value
//! through unchanged), so the error surface stays small.

use thiserror::Error;

/// Errors that can occur while building display output.
#[derive(Debug, Error)]
pub enum DisplayError {
    /// Table rendering needs at least one row to derive headers from.
    #[error("cannot render table: no rows to derive headers from")]
    EmptyTable,
}

/// Result type alias for display operations.
pub type DisplayResult<T> = Result<T, DisplayError>;

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(DisplayError: Send, Sync);

    #[test]
    fn test_error_display() {
        let err = DisplayError::EmptyTable;
        assert_eq!(
            err.to_string(),
            "cannot render table: no rows to derive headers from"
        );
    }
}
