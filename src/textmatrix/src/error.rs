//! Error types for textmatrix.
//!
//! Configuration problems are programmer errors and surface immediately as
//! [`ConfigError`]. Table-shape problems are collected by the validator and
//! reported through [`RenderError::Validation`].

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or resolving render options.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An option has a value outside of what it accepts.
    #[error("Invalid value {value} for option '{option}': {constraint}")]
    InvalidOption {
        /// Dotted path of the option, e.g. `columns.price.max_width`.
        option: String,
        /// The received value, rendered for display.
        value: String,
        /// The constraint the value violates.
        constraint: String,
    },

    /// Failed to parse TOML options.
    #[error("Failed to parse TOML options: {0}")]
    Toml(#[from] toml::de::Error),

    /// Failed to parse JSON options.
    #[error("Failed to parse JSON options: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to read an options file.
    #[error("Failed to read options file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The options file extension is neither `.toml` nor `.json`.
    #[error("Unsupported options file format: {0}")]
    UnsupportedFormat(PathBuf),
}

impl ConfigError {
    pub(crate) fn invalid(
        option: impl Into<String>,
        value: impl std::fmt::Debug,
        constraint: impl Into<String>,
    ) -> Self {
        Self::InvalidOption {
            option: option.into(),
            value: format!("{value:?}"),
            constraint: constraint.into(),
        }
    }
}

/// Errors returned by [`TextMatrix::render`](crate::TextMatrix::render).
#[derive(Debug, Error)]
pub enum RenderError {
    /// The options could not be resolved; the table was not inspected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The table failed structural validation; nothing was drawn.
    #[error("Table validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Result type for option resolution.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type for rendering.
pub type Result<T> = std::result::Result<T, RenderError>;
