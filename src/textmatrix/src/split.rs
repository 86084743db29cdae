//! Cell splitting.
//!
//! Turns each raw cell into the lines it is drawn with: runs of spaces are
//! collapsed, explicit line breaks are kept, each line is word-wrapped to
//! the column's `max_width`, and the cell's vertical padding is added as
//! blank lines.

use textwrap::core::Fragment;
use textwrap::wrap_algorithms::wrap_first_fit;
use tracing::trace;

use crate::Row;
use crate::types::{ColumnConfig, Padding, RenderConfig};
use crate::utils::{char_width, collapse_spaces, split_lines};

/// The display lines of one cell, vertical padding included.
pub type SplitCell = Vec<String>;

/// A column of the grid with its resolved settings.
#[derive(Debug, Clone)]
pub struct GridColumn {
    pub name: String,
    pub config: ColumnConfig,
}

/// Every cell of a table, split into display lines.
///
/// Columns follow the order of the first row. Built fresh for each render.
#[derive(Debug, Clone)]
pub struct Grid {
    pub columns: Vec<GridColumn>,
    pub rows: Vec<Vec<SplitCell>>,
}

impl Grid {
    /// Splits every cell of `rows` according to `config`.
    pub fn split(rows: &[Row], config: &RenderConfig) -> Self {
        let columns: Vec<GridColumn> = rows
            .first()
            .map(|first| {
                first
                    .keys()
                    .map(|name| GridColumn {
                        name: name.clone(),
                        config: config.column(name),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let rows = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|column| {
                        let text = row.get(&column.name).map(String::as_str).unwrap_or("");
                        split_cell(text, &column.config, &config.padding)
                    })
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }
}

/// Splits one cell into its display lines.
pub fn split_cell(text: &str, column: &ColumnConfig, padding: &Padding) -> SplitCell {
    let collapsed = collapse_spaces(text);

    let mut lines = vec![String::new(); padding.top];
    for line in split_lines(&collapsed) {
        match column.max_width {
            Some(width) => lines.extend(wrap_line(line, width, column.cut)),
            None => lines.push(line.to_string()),
        }
    }
    lines.extend(std::iter::repeat_n(String::new(), padding.bottom));

    lines
}

/// A word, or a piece of a word broken by `cut`.
#[derive(Debug)]
struct Piece<'a> {
    text: &'a str,
    width: usize,
    /// Whether a space separates this piece from the next one.
    space_after: bool,
}

impl Fragment for Piece<'_> {
    fn width(&self) -> f64 {
        self.width as f64
    }

    fn whitespace_width(&self) -> f64 {
        if self.space_after { 1.0 } else { 0.0 }
    }

    fn penalty_width(&self) -> f64 {
        0.0
    }
}

/// Word-wraps a single line at `width` characters.
///
/// Words are separated by ASCII spaces. A word wider than `width` is
/// broken into `width`-sized pieces when `cut` is set and kept whole on
/// its own line otherwise.
pub fn wrap_line(line: &str, width: usize, cut: bool) -> Vec<String> {
    let width = width.max(1);
    let pieces = pieces(line, width, cut);
    if pieces.is_empty() {
        return vec![String::new()];
    }

    wrap_first_fit(&pieces, &[width as f64])
        .into_iter()
        .map(join_pieces)
        .collect()
}

fn pieces(line: &str, width: usize, cut: bool) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();

    for word in line.split(' ').filter(|word| !word.is_empty()) {
        let word_width = char_width(word);

        if word_width <= width {
            pieces.push(Piece {
                text: word,
                width: word_width,
                space_after: true,
            });
        } else if cut {
            let chunks = break_word(word, width);
            let last = chunks.len() - 1;
            pieces.extend(chunks.into_iter().enumerate().map(|(idx, chunk)| Piece {
                text: chunk,
                width: char_width(chunk),
                space_after: idx == last,
            }));
        } else {
            trace!(word, width, "Word is wider than the column, keeping it intact");
            pieces.push(Piece {
                text: word,
                width: word_width,
                space_after: true,
            });
        }
    }

    pieces
}

/// Breaks `word` into pieces of at most `width` characters.
fn break_word(word: &str, width: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;

    for (count, (idx, _)) in word.char_indices().enumerate() {
        if count > 0 && count % width == 0 {
            chunks.push(&word[start..idx]);
            start = idx;
        }
    }
    chunks.push(&word[start..]);

    chunks
}

fn join_pieces(pieces: &[Piece<'_>]) -> String {
    let mut line = String::new();
    for (idx, piece) in pieces.iter().enumerate() {
        line.push_str(piece.text);
        if piece.space_after && idx + 1 < pieces.len() {
            line.push(' ');
        }
    }
    line
}
