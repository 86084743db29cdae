//! Structural validation of table data.

use tracing::debug;

use crate::Row;

/// Message recorded for a table without rows.
pub const NO_ROWS: &str = "There are no rows in the table";

/// Checks that every row has the columns of the first row.
///
/// Returns every problem found, in row order. An empty table yields a
/// single [`NO_ROWS`] error and nothing else.
pub fn validate_rows(rows: &[Row]) -> Vec<String> {
    let Some(first) = rows.first() else {
        return vec![NO_ROWS.to_string()];
    };

    let expected = first.len();
    let mut errors = Vec::new();

    for (position, row) in rows.iter().enumerate().skip(1) {
        let found = row.len();

        if found != expected {
            let first_column = row.keys().next().map(String::as_str).unwrap_or("");
            errors.push(format!(
                "The number of columns mismatches. First row has {expected} columns \
                 while row {position} (starting at column '{first_column}') has {found}."
            ));
        } else if !row.keys().all(|name| first.contains_key(name)) {
            errors.push(format!(
                "The columns of row {position} do not match the columns of the first row."
            ));
        }
    }

    if !errors.is_empty() {
        debug!(errors = errors.len(), rows = rows.len(), "Table failed validation");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row;

    fn sample() -> Vec<Row> {
        vec![
            row([("a", "a1"), ("b", "b1"), ("c", "c1")]),
            row([("a", "a2"), ("b", "b2"), ("c", "c2")]),
            row([("a", "a3"), ("b", "b3"), ("c", "c3")]),
        ]
    }

    #[test]
    fn test_valid_table() {
        assert!(validate_rows(&sample()).is_empty());
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(validate_rows(&[]), vec![NO_ROWS.to_string()]);
    }

    #[test]
    fn test_single_row_is_valid() {
        assert!(validate_rows(&[row([("a", "only")])]).is_empty());
    }

    #[test]
    fn test_collects_every_mismatch() {
        let mut rows = sample();
        rows[1].shift_remove("b");
        rows[2].insert("d".to_string(), "d3".to_string());

        let errors = validate_rows(&rows);
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("The number of columns mismatches"));
        assert!(errors[0].contains("First row has 3 columns while row 1"));
        assert!(errors[0].ends_with("has 2."));
        assert!(errors[1].contains("row 2"));
        assert!(errors[1].ends_with("has 4."));
    }

    #[test]
    fn test_same_count_different_names() {
        let mut rows = sample();
        rows[2] = row([("a", "a3"), ("b", "b3"), ("x", "x3")]);

        let errors = validate_rows(&rows);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("columns of row 2 do not match"));
    }

    #[test]
    fn test_reordered_columns_are_accepted() {
        let mut rows = sample();
        rows[1] = row([("c", "c2"), ("a", "a2"), ("b", "b2")]);
        assert!(validate_rows(&rows).is_empty());
    }
}
