//! The table renderer.

use tracing::debug;

use crate::Row;
use crate::error::{RenderError, Result};
use crate::layout::Layout;
use crate::options::RenderOptions;
use crate::render::draw_table;
use crate::split::Grid;
use crate::types::RenderConfig;
use crate::validate::validate_rows;

/// Renders an owned table of rows as plain text.
///
/// The rows are never modified: every call to [`render`](Self::render)
/// splits and measures them from scratch, so one matrix can be rendered
/// with different options any number of times.
#[derive(Debug, Clone, Default)]
pub struct TextMatrix {
    rows: Vec<Row>,
    errors: Vec<String>,
    table_width: usize,
}

impl TextMatrix {
    /// Creates a matrix over `rows`.
    pub fn new(rows: impl IntoIterator<Item = Row>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
            errors: Vec::new(),
            table_width: 0,
        }
    }

    /// The rows this matrix renders.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Renders the table with `options`.
    ///
    /// # Errors
    /// * [`RenderError::Config`] if the options do not resolve; the table
    ///   is not inspected.
    /// * [`RenderError::Validation`] if the table is empty or its rows do
    ///   not share the first row's columns. The same messages are kept in
    ///   [`errors`](Self::errors).
    pub fn render(&mut self, options: &RenderOptions) -> Result<String> {
        let config = options.resolve()?;
        self.render_with(&config)
    }

    /// Renders the table with an already resolved configuration.
    pub fn render_with(&mut self, config: &RenderConfig) -> Result<String> {
        self.table_width = 0;

        if !self.validate() {
            return Err(RenderError::Validation(self.errors.clone()));
        }

        let grid = Grid::split(&self.rows, config);
        let layout = Layout::compute(&grid);
        let table = draw_table(&grid, &layout, config);

        self.table_width = layout.table_width(&config.padding);

        debug!(
            rows = layout.row_heights.len(),
            columns = layout.num_columns(),
            table_width = self.table_width,
            "Rendered table"
        );

        Ok(table)
    }

    /// Checks that the table has rows and that they all share the first
    /// row's columns.
    ///
    /// Returns `false` if any problem was found; the problems are then
    /// available from [`errors`](Self::errors).
    pub fn validate(&mut self) -> bool {
        self.errors = validate_rows(&self.rows);
        self.errors.is_empty()
    }

    /// Problems found by the last validation.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Total width of the last successfully rendered table, 0 otherwise.
    pub fn table_width(&self) -> usize {
        self.table_width
    }
}

impl FromIterator<Row> for TextMatrix {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self::new(iter)
    }
}
