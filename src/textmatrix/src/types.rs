//! Resolved configuration types.
//!
//! Contains the `Alignment`, `Padding`, `Separators`, `ColumnConfig` and
//! `RenderConfig` types. Values of these types are always complete; the
//! sparse, caller-facing counterparts live in [`crate::options`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================
// ALIGNMENT ENUM
// ============================================================

/// Horizontal alignment of cell content within its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left-align content (default)
    #[default]
    Left,
    /// Right-align content
    Right,
}

// ============================================================
// PADDING
// ============================================================

/// Cell padding, in lines (top/bottom) and spaces (left/right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

impl Padding {
    /// Same padding on every side.
    pub const fn uniform(value: usize) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Expands CSS-style shorthand into the four sides.
    ///
    /// One value applies to all sides; two are `vertical, horizontal`;
    /// three are `top, horizontal, bottom`; four are
    /// `top, right, bottom, left`. Any other arity yields `None`.
    pub fn from_shorthand(values: &[usize]) -> Option<Self> {
        match *values {
            [all] => Some(Self::uniform(all)),
            [vertical, horizontal] => Some(Self {
                top: vertical,
                right: horizontal,
                bottom: vertical,
                left: horizontal,
            }),
            [top, horizontal, bottom] => Some(Self {
                top,
                right: horizontal,
                bottom,
                left: horizontal,
            }),
            [top, right, bottom, left] => Some(Self {
                top,
                right,
                bottom,
                left,
            }),
            _ => None,
        }
    }

    /// Left plus right padding.
    #[inline]
    pub fn horizontal(&self) -> usize {
        self.left + self.right
    }
}

// ============================================================
// SEPARATORS
// ============================================================

/// The three strings a grid is drawn with.
///
/// Each may be empty or longer than one character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Separators {
    /// Fill of a divider line.
    pub horizontal: String,
    /// Column boundary on content lines.
    pub vertical: String,
    /// Column boundary on divider lines.
    pub cross: String,
}

impl Separators {
    pub fn new(
        horizontal: impl Into<String>,
        vertical: impl Into<String>,
        cross: impl Into<String>,
    ) -> Self {
        Self {
            horizontal: horizontal.into(),
            vertical: vertical.into(),
            cross: cross.into(),
        }
    }

    /// `-`, `|` and `+`.
    pub fn body() -> Self {
        Self::new("-", "|", "+")
    }

    /// `=`, `#` and `#`.
    pub fn header() -> Self {
        Self::new("=", "#", "#")
    }
}

// ============================================================
// COLUMN CONFIG
// ============================================================

/// Resolved settings for one column.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Wrap width for the column's content. `None` disables wrapping.
    pub max_width: Option<usize>,
    /// Hard-break words longer than `max_width`.
    pub cut: bool,
    pub align: Alignment,
    /// Floor for the computed column width.
    pub min_width: Option<usize>,
}

impl ColumnConfig {
    /// A column with no wrapping and the given alignment.
    pub fn aligned(align: Alignment) -> Self {
        Self {
            align,
            ..Self::default()
        }
    }
}

// ============================================================
// RENDER CONFIG
// ============================================================

/// Fully resolved configuration for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Draw the first row as a header band.
    pub has_header: bool,
    /// Draw the divider above the header band.
    pub show_head_top_sep: bool,
    pub padding: Padding,
    pub default_align: Alignment,
    pub body: Separators,
    pub header: Separators,
    /// Per-column settings, keyed by column name.
    pub columns: IndexMap<String, ColumnConfig>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            has_header: false,
            show_head_top_sep: true,
            padding: Padding::default(),
            default_align: Alignment::Left,
            body: Separators::body(),
            header: Separators::header(),
            columns: IndexMap::new(),
        }
    }
}

impl RenderConfig {
    /// Settings for `name`, falling back to an all-default column aligned
    /// with `default_align`.
    pub fn column(&self, name: &str) -> ColumnConfig {
        self.columns
            .get(name)
            .cloned()
            .unwrap_or_else(|| ColumnConfig::aligned(self.default_align))
    }

    /// Separators for the row at `position`.
    pub fn separators_for_row(&self, position: usize) -> &Separators {
        if self.is_header_row(position) {
            &self.header
        } else {
            &self.body
        }
    }

    #[inline]
    pub fn is_header_row(&self, position: usize) -> bool {
        self.has_header && position == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_shorthand() {
        assert_eq!(Padding::from_shorthand(&[1]), Some(Padding::uniform(1)));
        assert_eq!(
            Padding::from_shorthand(&[1, 2]),
            Some(Padding {
                top: 1,
                right: 2,
                bottom: 1,
                left: 2
            })
        );
        assert_eq!(
            Padding::from_shorthand(&[1, 2, 3]),
            Some(Padding {
                top: 1,
                right: 2,
                bottom: 3,
                left: 2
            })
        );
        assert_eq!(
            Padding::from_shorthand(&[1, 2, 3, 4]),
            Some(Padding {
                top: 1,
                right: 2,
                bottom: 3,
                left: 4
            })
        );
        assert_eq!(Padding::from_shorthand(&[]), None);
        assert_eq!(Padding::from_shorthand(&[1, 2, 3, 4, 5]), None);
    }

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert!(!config.has_header);
        assert!(config.show_head_top_sep);
        assert_eq!(config.padding, Padding::uniform(0));
        assert_eq!(config.body, Separators::new("-", "|", "+"));
        assert_eq!(config.header, Separators::new("=", "#", "#"));
    }

    #[test]
    fn test_column_falls_back_to_default_align() {
        let config = RenderConfig {
            default_align: Alignment::Right,
            ..RenderConfig::default()
        };
        let column = config.column("missing");
        assert_eq!(column.align, Alignment::Right);
        assert_eq!(column.max_width, None);
        assert!(!column.cut);
    }

    #[test]
    fn test_header_row_separators() {
        let config = RenderConfig {
            has_header: true,
            ..RenderConfig::default()
        };
        assert_eq!(config.separators_for_row(0).vertical, "#");
        assert_eq!(config.separators_for_row(1).vertical, "|");

        let config = RenderConfig::default();
        assert_eq!(config.separators_for_row(0).vertical, "|");
    }
}
