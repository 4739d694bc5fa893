//! Tabular rows and the HTML table renderer
//!
//! Rows are ordered key-value pairs: a plain `Vec<(String, String)>` with an
//! extension trait, so column order is exactly insertion order.

use smallvec::SmallVec;

use crate::error::{DisplayError, DisplayResult};

// =============================================================================
// Row
// =============================================================================

/// One table row as ordered column-key/value pairs.
pub type Row = Vec<(String, String)>;

/// Extension trait for cell operations on a [`Row`].
pub trait RowExt {
    /// Get the cell value for a column key
    fn get_cell(&self, key: &str) -> Option<&str>;

    /// Check if a column key is present
    fn has_cell(&self, key: &str) -> bool;

    /// Set a cell value (insert or update)
    fn set_cell(&mut self, key: impl Into<String>, value: impl Into<String>);
}

impl RowExt for Row {
    fn get_cell(&self, key: &str) -> Option<&str> {
        self.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    fn has_cell(&self, key: &str) -> bool {
        self.iter().any(|(k, _)| k == key)
    }

    fn set_cell(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(cell) = self.iter_mut().find(|(k, _)| k == &key) {
            cell.1 = value;
        } else {
            self.push((key, value));
        }
    }
}

/// Build a row from key-value pairs.
pub fn row<K, V>(cells: impl IntoIterator<Item = (K, V)>) -> Row
where
    K: Into<String>,
    V: Into<String>,
{
    cells
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

// =============================================================================
// HTML rendering
// =============================================================================

/// Render rows to an HTML `<table>` string.
///
/// Headers are the column keys of the *first* row, in that row's insertion
/// order. Later rows contribute one `<td>` per header: the cell value when
/// the key is present, an empty cell when it is not. Keys outside the header
/// set are dropped. This first-row-only header derivation is load-bearing
/// for output compatibility; do not widen it to a union of keys.
pub fn render_rows(rows: &[Row]) -> DisplayResult<String> {
    let first = rows.first().ok_or(DisplayError::EmptyTable)?;
    let headers: SmallVec<[&str; 8]> = first.iter().map(|(k, _)| k.as_str()).collect();

    let mut output = String::from("<table>");

    output.push_str("<tr>");
    for header in &headers {
        output.push_str("<th>");
        output.push_str(header);
        output.push_str("</th>");
    }
    output.push_str("</tr>");

    for row in rows {
        output.push_str("<tr>");
        for header in &headers {
            output.push_str("<td>");
            if let Some(value) = row.get_cell(header) {
                output.push_str(value);
            }
            output.push_str("</td>");
        }
        output.push_str("</tr>");
    }

    output.push_str("</table>");
    Ok(output)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_ext() {
        let mut r = row([("a", "1")]);
        assert_eq!(r.get_cell("a"), Some("1"));
        assert!(r.has_cell("a"));
        assert!(!r.has_cell("b"));

        r.set_cell("b", "2");
        r.set_cell("a", "9");
        assert_eq!(r.get_cell("a"), Some("9"));
        assert_eq!(r.get_cell("b"), Some("2"));
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn test_render_two_by_two() {
        let rows = vec![row([("a", "1"), ("b", "2")]), row([("a", "3"), ("b", "4")])];
        assert_eq!(
            render_rows(&rows).unwrap(),
            "<table>\
             <tr><th>a</th><th>b</th></tr>\
             <tr><td>1</td><td>2</td></tr>\
             <tr><td>3</td><td>4</td></tr>\
             </table>"
        );
    }

    #[test]
    fn test_headers_from_first_row_only() {
        // Second row has no `a` and an extra `b`: the header set stays {a},
        // so row two renders a single blank cell and `b` is dropped.
        let rows = vec![row([("a", "1")]), row([("b", "2")])];
        assert_eq!(
            render_rows(&rows).unwrap(),
            "<table>\
             <tr><th>a</th></tr>\
             <tr><td>1</td></tr>\
             <tr><td></td></tr>\
             </table>"
        );
    }

    #[test]
    fn test_column_order_is_insertion_order() {
        let rows = vec![row([("z", "1"), ("a", "2"), ("m", "3")])];
        let html = render_rows(&rows).unwrap();
        assert!(html.starts_with("<table><tr><th>z</th><th>a</th><th>m</th></tr>"));
    }

    #[test]
    fn test_empty_rows_is_an_error() {
        let err = render_rows(&[]).unwrap_err();
        assert!(matches!(err, DisplayError::EmptyTable));
    }
}
