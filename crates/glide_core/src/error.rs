//! Error types for glide_core

use thiserror::Error;

/// Errors produced while loading or parsing slider configuration
///
/// Geometry and input handling never fail; only the configuration surface
/// (files, CSS length tokens) can report errors.
#[derive(Error, Debug)]
pub enum SliderError {
    /// A CSS length token could not be parsed
    #[error("Invalid length '{0}': expected a number with px, rem, em or % suffix")]
    InvalidLength(String),

    /// The configuration document is not valid TOML or has the wrong shape
    #[error("Failed to parse slider config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The configuration could not be serialized
    #[error("Failed to serialize slider config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Failed to read a configuration file
    #[error("Failed to read slider config: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for glide_core operations
pub type Result<T> = std::result::Result<T, SliderError>;
