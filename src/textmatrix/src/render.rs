//! Table drawing functions.
//!
//! Turns a split grid and its layout into the final text block.

use crate::layout::Layout;
use crate::split::{Grid, SplitCell};
use crate::types::{Alignment, Padding, RenderConfig, Separators};
use crate::utils::align_text;

/// Line terminator appended to every drawn line.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Line terminator appended to every drawn line.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Draws the whole table.
///
/// The output opens with a divider (a header divider when the first row is
/// a header band, unless `show_head_top_sep` is off) and every row is
/// followed by one.
pub fn draw_table(grid: &Grid, layout: &Layout, config: &RenderConfig) -> String {
    let mut table = String::new();

    if !config.has_header {
        table.push_str(&draw_divider(&layout.column_widths, &config.padding, &config.body));
    } else if config.show_head_top_sep {
        table.push_str(&draw_divider(&layout.column_widths, &config.padding, &config.header));
    }

    let alignments: Vec<Alignment> = grid.columns.iter().map(|c| c.config.align).collect();

    for (position, (cells, &height)) in grid.rows.iter().zip(&layout.row_heights).enumerate() {
        let separators = config.separators_for_row(position);

        table.push_str(&draw_row(
            cells,
            height,
            &layout.column_widths,
            &alignments,
            &config.padding,
            separators,
        ));
        table.push_str(&draw_divider(&layout.column_widths, &config.padding, separators));
    }

    table
}

/// Renders a horizontal divider line.
///
/// Format: `+----+----+` with the separators' cross and horizontal fill.
/// Each column segment covers the content width plus left and right padding.
pub fn draw_divider(widths: &[usize], padding: &Padding, separators: &Separators) -> String {
    let mut divider = String::new();

    for &width in widths {
        divider.push_str(&separators.cross);
        divider.push_str(&separators.horizontal.repeat(width + padding.horizontal()));
    }

    divider.push_str(&separators.cross);
    divider.push_str(LINE_ENDING);
    divider
}

/// Renders every physical line of one row.
///
/// Cells shorter than `height` are filled with blank lines.
pub fn draw_row(
    cells: &[SplitCell],
    height: usize,
    widths: &[usize],
    alignments: &[Alignment],
    padding: &Padding,
    separators: &Separators,
) -> String {
    (0..height)
        .map(|line| draw_line(line, cells, widths, alignments, padding, separators))
        .collect()
}

fn draw_line(
    line: usize,
    cells: &[SplitCell],
    widths: &[usize],
    alignments: &[Alignment],
    padding: &Padding,
    separators: &Separators,
) -> String {
    let mut output = String::new();

    for (idx, &width) in widths.iter().enumerate() {
        let content = cells
            .get(idx)
            .and_then(|cell| cell.get(line))
            .map(|text| text.trim())
            .unwrap_or("");
        let alignment = alignments.get(idx).copied().unwrap_or_default();

        output.push_str(&separators.vertical);
        output.push_str(&" ".repeat(padding.left));
        output.push_str(&align_text(content, width, alignment));
        output.push_str(&" ".repeat(padding.right));
    }

    output.push_str(&separators.vertical);
    output.push_str(LINE_ENDING);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(lines: &[&[&str]]) -> Vec<SplitCell> {
        lines
            .iter()
            .map(|cell| cell.iter().map(|line| line.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_divider() {
        let divider = draw_divider(&[2, 2, 2], &Padding::default(), &Separators::body());
        assert_eq!(divider, format!("+--+--+--+{LINE_ENDING}"));

        let divider = draw_divider(&[1, 3], &Padding::uniform(1), &Separators::header());
        assert_eq!(divider, format!("#===#=====#{LINE_ENDING}"));
    }

    #[test]
    fn test_divider_with_multi_character_and_empty_separators() {
        let separators = Separators::new("~-", "", "<>");
        let divider = draw_divider(&[1, 2], &Padding::default(), &separators);
        assert_eq!(divider, format!("<>~-<>~-~-<>{LINE_ENDING}"));

        let separators = Separators::new("", "|", "");
        let divider = draw_divider(&[3], &Padding::default(), &separators);
        assert_eq!(divider, LINE_ENDING);
    }

    #[test]
    fn test_row_fills_short_cells() {
        let row = draw_row(
            &cells(&[&["a1"], &["b1", "b2"]]),
            2,
            &[2, 2],
            &[Alignment::Left, Alignment::Left],
            &Padding::default(),
            &Separators::body(),
        );
        assert_eq!(row, format!("|a1|b1|{LINE_ENDING}|  |b2|{LINE_ENDING}"));
    }

    #[test]
    fn test_row_alignment_and_padding() {
        let padding = Padding {
            top: 0,
            right: 1,
            bottom: 0,
            left: 2,
        };
        let row = draw_row(
            &cells(&[&["x"], &["y"]]),
            1,
            &[3, 3],
            &[Alignment::Left, Alignment::Right],
            &padding,
            &Separators::body(),
        );
        assert_eq!(row, format!("|  x   |    y |{LINE_ENDING}"));
    }

    #[test]
    fn test_row_trims_content() {
        let row = draw_row(
            &cells(&[&[" a "]]),
            1,
            &[3],
            &[Alignment::Right],
            &Padding::default(),
            &Separators::body(),
        );
        assert_eq!(row, format!("|  a|{LINE_ENDING}"));
    }

    #[test]
    fn test_zero_height_row_draws_nothing() {
        let row = draw_row(
            &[],
            0,
            &[],
            &[],
            &Padding::default(),
            &Separators::body(),
        );
        assert!(row.is_empty());
    }
}
