//! Caller-facing render options.
//!
//! [`RenderOptions`] is sparse: every field may be left out and falls back
//! to its default when the options are resolved into a
//! [`RenderConfig`](crate::RenderConfig). Options can be built in code or
//! loaded from TOML or JSON:
//!
//! ```toml
//! has_header = true
//! cells_padding = [0, 1]
//!
//! [columns.description]
//! max_width = 40
//! cut = true
//!
//! [columns.price]
//! align = "right"
//! min_width = 10
//! ```
//!
//! Unknown keys are rejected.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::types::{Alignment, ColumnConfig, Padding, RenderConfig, Separators};

/// Padding as written by the caller: one number, or a list of one to four.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaddingSpec {
    Uniform(usize),
    Sides(Vec<usize>),
}

impl PaddingSpec {
    /// Expands the shorthand into explicit sides.
    pub fn expand(&self) -> ConfigResult<Padding> {
        match self {
            Self::Uniform(value) => Ok(Padding::uniform(*value)),
            Self::Sides(values) => Padding::from_shorthand(values).ok_or_else(|| {
                ConfigError::invalid(
                    "cells_padding",
                    values,
                    "expected between 1 and 4 values",
                )
            }),
        }
    }
}

impl From<usize> for PaddingSpec {
    fn from(value: usize) -> Self {
        Self::Uniform(value)
    }
}

impl From<Vec<usize>> for PaddingSpec {
    fn from(values: Vec<usize>) -> Self {
        Self::Sides(values)
    }
}

impl<const N: usize> From<[usize; N]> for PaddingSpec {
    fn from(values: [usize; N]) -> Self {
        Self::Sides(values.to_vec())
    }
}

/// Sparse settings for one column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cut: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Alignment>,
}

impl ColumnOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap the column's content at `width` characters.
    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Never draw the column narrower than `width` characters.
    pub fn with_min_width(mut self, width: usize) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Hard-break words longer than the wrap width.
    pub fn with_cut(mut self, cut: bool) -> Self {
        self.cut = Some(cut);
        self
    }

    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = Some(align);
        self
    }

    fn resolve(&self, name: &str, default_align: Alignment) -> ConfigResult<ColumnConfig> {
        if self.max_width == Some(0) {
            return Err(ConfigError::invalid(
                format!("columns.{name}.max_width"),
                0,
                "must be greater than zero",
            ));
        }

        Ok(ColumnConfig {
            max_width: self.max_width,
            cut: self.cut.unwrap_or(false),
            align: self.align.unwrap_or(default_align),
            min_width: self.min_width,
        })
    }
}

/// Sparse render options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_header: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_head_top_sep: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cells_padding: Option<PaddingSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_cell_align: Option<Alignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sep_h: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sep_v: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sep_x: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sep_head_h: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sep_head_v: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sep_head_x: Option<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub columns: IndexMap<String, ColumnOptions>,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from TOML text.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse options from JSON text.
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Convert an already-parsed JSON value.
    pub fn from_json_value(value: serde_json::Value) -> ConfigResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Load options from a `.toml` or `.json` file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = Some(has_header);
        self
    }

    pub fn with_header_top_separator(mut self, show: bool) -> Self {
        self.show_head_top_sep = Some(show);
        self
    }

    pub fn with_padding(mut self, padding: impl Into<PaddingSpec>) -> Self {
        self.cells_padding = Some(padding.into());
        self
    }

    pub fn with_default_align(mut self, align: Alignment) -> Self {
        self.default_cell_align = Some(align);
        self
    }

    /// Body separators: horizontal fill, vertical boundary, cross.
    pub fn with_separators(
        mut self,
        horizontal: impl Into<String>,
        vertical: impl Into<String>,
        cross: impl Into<String>,
    ) -> Self {
        self.sep_h = Some(horizontal.into());
        self.sep_v = Some(vertical.into());
        self.sep_x = Some(cross.into());
        self
    }

    /// Header separators: horizontal fill, vertical boundary, cross.
    pub fn with_header_separators(
        mut self,
        horizontal: impl Into<String>,
        vertical: impl Into<String>,
        cross: impl Into<String>,
    ) -> Self {
        self.sep_head_h = Some(horizontal.into());
        self.sep_head_v = Some(vertical.into());
        self.sep_head_x = Some(cross.into());
        self
    }

    pub fn with_column(mut self, name: impl Into<String>, column: ColumnOptions) -> Self {
        self.columns.insert(name.into(), column);
        self
    }

    /// Merge with the defaults and validate.
    pub fn resolve(&self) -> ConfigResult<RenderConfig> {
        let defaults = RenderConfig::default();

        let padding = match &self.cells_padding {
            Some(spec) => spec.expand()?,
            None => defaults.padding,
        };
        let default_align = self.default_cell_align.unwrap_or(defaults.default_align);

        let body = Separators {
            horizontal: separator("sep_h", &self.sep_h, defaults.body.horizontal)?,
            vertical: separator("sep_v", &self.sep_v, defaults.body.vertical)?,
            cross: separator("sep_x", &self.sep_x, defaults.body.cross)?,
        };
        let header = Separators {
            horizontal: separator("sep_head_h", &self.sep_head_h, defaults.header.horizontal)?,
            vertical: separator("sep_head_v", &self.sep_head_v, defaults.header.vertical)?,
            cross: separator("sep_head_x", &self.sep_head_x, defaults.header.cross)?,
        };

        let columns = self
            .columns
            .iter()
            .map(|(name, column)| Ok((name.clone(), column.resolve(name, default_align)?)))
            .collect::<ConfigResult<IndexMap<_, _>>>()?;

        let config = RenderConfig {
            has_header: self.has_header.unwrap_or(defaults.has_header),
            show_head_top_sep: self.show_head_top_sep.unwrap_or(defaults.show_head_top_sep),
            padding,
            default_align,
            body,
            header,
            columns,
        };

        debug!(
            has_header = config.has_header,
            padding = ?config.padding,
            columns = config.columns.len(),
            "Resolved render options"
        );

        Ok(config)
    }
}

fn separator(option: &str, value: &Option<String>, default: String) -> ConfigResult<String> {
    match value {
        Some(sep) if sep.contains(['\n', '\r']) => Err(ConfigError::invalid(
            option,
            sep,
            "must not contain line breaks",
        )),
        Some(sep) => Ok(sep.clone()),
        None => Ok(default),
    }
}
