//! # TextMatrix
//!
//! Renders tabular data as a plain-text grid with:
//! - Configurable body and header separators
//! - CSS-style cell padding
//! - Per-column word wrapping, with optional hard cuts
//! - Left or right alignment
//! - Character-aware width calculation
//!
//! ## Example Output
//!
//! ```text
//! #========#========#
//! #Column A#Column B#
//! #========#========#
//! |a1      |b1      |
//! +--------+--------+
//! |a2      |b2      |
//! +--------+--------+
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use textmatrix::{RenderOptions, TextMatrix, row};
//!
//! let mut matrix = TextMatrix::new([
//!     row([("a", "Column A"), ("b", "Column B")]),
//!     row([("a", "a1"), ("b", "b1")]),
//! ]);
//!
//! let table = matrix
//!     .render(&RenderOptions::new().with_header(true))
//!     .unwrap();
//!
//! assert!(table.starts_with("#========#========#"));
//! assert_eq!(matrix.table_width(), 19);
//! ```
//!
//! A render runs in four stages, each consuming the previous one's output:
//! options are resolved into a [`RenderConfig`], the rows are validated,
//! every cell is split into display lines, and the grid is measured and
//! drawn.

pub mod error;
mod layout;
mod matrix;
pub mod options;
mod render;
mod split;
pub mod types;
pub mod utils;
mod validate;


use indexmap::IndexMap;

pub use error::{ConfigError, ConfigResult, RenderError, Result};
pub use layout::Layout;
pub use matrix::TextMatrix;
pub use options::{ColumnOptions, PaddingSpec, RenderOptions};
pub use render::LINE_ENDING;
pub use split::{Grid, GridColumn, SplitCell, split_cell, wrap_line};
pub use types::{Alignment, ColumnConfig, Padding, RenderConfig, Separators};
pub use validate::{NO_ROWS, validate_rows};

/// One table row: column name to raw cell text, in column order.
pub type Row = IndexMap<String, String>;

/// Builds a [`Row`] from `(column, text)` pairs.
pub fn row<K, V>(cells: impl IntoIterator<Item = (K, V)>) -> Row
where
    K: Into<String>,
    V: Into<String>,
{
    cells
        .into_iter()
        .map(|(name, text)| (name.into(), text.into()))
        .collect()
}
