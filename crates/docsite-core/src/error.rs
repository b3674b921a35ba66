//! Error types for the docsite core library.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for docsite.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration loading or parsing error.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Site data file (sidebars, landing page) could not be loaded.
    #[error("Site data error in {path}: {message}")]
    SiteData { path: PathBuf, message: String },

    /// The same document identifier appears twice in one sidebar.
    #[error("Duplicate document '{id}' in sidebar '{sidebar}'")]
    DuplicateDocument { sidebar: String, id: String },

    /// File system I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Generic configuration crate error.
    #[error("Config crate error: {0}")]
    ConfigCrate(#[from] config::ConfigError),
}

impl CoreError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new site data error.
    pub fn site_data(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::SiteData {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new duplicate document error.
    pub fn duplicate_document(sidebar: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateDocument {
            sidebar: sidebar.into(),
            id: id.into(),
        }
    }
}
