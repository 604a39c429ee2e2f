//! Error types for bento page configuration

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a page configuration.
///
/// Rendering itself has no error domain: broken images and bad links are
/// left to the platform.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON configuration did not parse
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML configuration did not parse
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// File extension is neither .json nor .toml
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    /// Column or row span outside {1, 2}
    #[error("Invalid span: {0} (expected 1 or 2)")]
    InvalidSpan(u8),

    /// A card or cell names a palette token the theme does not define
    #[error("Card {card}: unknown style token '{token}'")]
    UnknownStyleToken { card: usize, token: String },

    /// The page has nothing to show
    #[error("Page has no cards")]
    NoCards,

    /// Profile display name is blank
    #[error("Profile display name is empty")]
    EmptyDisplayName,
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
