//! Column widths and row heights.

use crate::split::Grid;
use crate::types::Padding;
use crate::utils::char_width;

/// Sizes derived from a split grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    /// Content width of each column, excluding padding and separators.
    pub column_widths: Vec<usize>,
    /// Number of physical lines of each row.
    pub row_heights: Vec<usize>,
}

impl Layout {
    /// Measures `grid`.
    ///
    /// A column is as wide as its longest line, but never narrower than
    /// its `min_width`. A row is as tall as its tallest cell.
    pub fn compute(grid: &Grid) -> Self {
        let mut column_widths: Vec<usize> = grid
            .columns
            .iter()
            .map(|column| column.config.min_width.unwrap_or(0))
            .collect();

        let mut row_heights = Vec::with_capacity(grid.rows.len());

        for row in &grid.rows {
            let mut height = 0;
            for (idx, cell) in row.iter().enumerate() {
                height = height.max(cell.len());

                let longest = cell.iter().map(|line| char_width(line)).max().unwrap_or(0);
                if let Some(width) = column_widths.get_mut(idx) {
                    *width = (*width).max(longest);
                }
            }
            row_heights.push(height);
        }

        Self {
            column_widths,
            row_heights,
        }
    }

    /// Number of columns.
    #[inline]
    pub fn num_columns(&self) -> usize {
        self.column_widths.len()
    }

    /// Total width of the table in separator positions and characters.
    ///
    /// Counts one position per column boundary, so multi-character
    /// separators are not reflected.
    pub fn table_width(&self, padding: &Padding) -> usize {
        let content: usize = self.column_widths.iter().sum();
        let padding_overhead = padding.horizontal() * self.num_columns();
        let border_overhead = self.num_columns() + 1;

        content + padding_overhead + border_overhead
    }
}
