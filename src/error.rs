//! Error types for wsbuild
//!
//! Uses `thiserror` for library errors; the CLI binary wraps these in
//! `anyhow` at the edge.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for wsbuild operations
pub type WsBuildResult<T> = Result<T, WsBuildError>;

/// Main error type for wsbuild operations
#[derive(Error, Debug)]
pub enum WsBuildError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory could not be listed during file discovery
    #[error("directory not found or unreadable: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// External tool could not be launched
    #[error("failed to launch '{tool}': {source}")]
    Launch {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error in a settings file
    #[error("invalid settings in {file}: {source}")]
    InvalidSettings {
        file: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
