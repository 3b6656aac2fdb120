//! Error types for the directory server binary.
//!
//! [`AppError`] is the top-level error type that wraps every failure mode
//! during startup and serving.

use colitas_directory::LoadError;
use colitas_web::{RenderError, ServerError};

use crate::config::ConfigError;

/// Top-level error for the directory server binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// The shelter or veterinary data could not be loaded.
    #[error("data load error: {source}")]
    Load {
        /// The underlying load error.
        #[from]
        source: LoadError,
    },

    /// The page templates failed to compile.
    #[error("template error: {source}")]
    Render {
        /// The underlying render error.
        #[from]
        source: RenderError,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: ServerError,
    },
}
