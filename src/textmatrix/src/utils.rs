//! Utility functions for table rendering.
//!
//! Contains width measurement, alignment and whitespace helpers.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::Alignment;

static SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\x20{2,}").unwrap());

/// Width of `text` in characters.
///
/// Counts Unicode scalar values, so multi-byte text is measured by what
/// it shows rather than by its UTF-8 length.
#[inline]
pub fn char_width(text: &str) -> usize {
    text.chars().count()
}

/// Collapses runs of ASCII spaces into one space.
///
/// Tabs and line breaks are left untouched.
pub fn collapse_spaces(text: &str) -> Cow<'_, str> {
    SPACE_RUNS.replace_all(text, " ")
}

/// Aligns text within a given width.
///
/// Text already as wide as `width` (or wider) is returned unchanged.
///
/// # Arguments
/// * `text` - The text to align
/// * `width` - The target width
/// * `alignment` - The alignment type
pub fn align_text(text: &str, width: usize, alignment: Alignment) -> String {
    let padding = width.saturating_sub(char_width(text));

    match alignment {
        Alignment::Left => format!("{}{}", text, " ".repeat(padding)),
        Alignment::Right => format!("{}{}", " ".repeat(padding), text),
    }
}

/// Splits text on line breaks, accepting both `\n` and `\r\n`.
///
/// Unlike [`str::lines`], a trailing line break yields a trailing empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_width_counts_characters() {
        assert_eq!(char_width(""), 0);
        assert_eq!(char_width("abc"), 3);
        assert_eq!(char_width("perché"), 6);
        assert_eq!("perché".len(), 7);
        assert_eq!(char_width("こんにちは"), 5);
    }

    #[test]
    fn test_collapse_spaces() {
        assert_eq!(collapse_spaces("TrustBack.Me:       Base plan"), "TrustBack.Me: Base plan");
        assert_eq!(collapse_spaces("  a  b "), " a b ");
        assert_eq!(collapse_spaces("a\t\tb"), "a\t\tb");
        assert_eq!(collapse_spaces("a \n  b"), "a \n b");
        assert!(matches!(collapse_spaces("no runs"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_alignment() {
        assert_eq!(align_text("Hi", 6, Alignment::Left), "Hi    ");
        assert_eq!(align_text("Hi", 6, Alignment::Right), "    Hi");
        assert_eq!(align_text("già", 5, Alignment::Right), "  già");
        assert_eq!(align_text("longer", 5, Alignment::Right), "longer");
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("a\nb").collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(split_lines("a\r\nb").collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(split_lines("a\n").collect::<Vec<_>>(), vec!["a", ""]);
        assert_eq!(split_lines("").collect::<Vec<_>>(), vec![""]);
    }
}
