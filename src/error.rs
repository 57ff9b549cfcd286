//! Error types for Guardsmith
//!
//! Uses `thiserror` for library errors; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Guardsmith operations
pub type GuardsmithResult<T> = Result<T, GuardsmithError>;

/// Main error type for Guardsmith operations
#[derive(Error, Debug)]
pub enum GuardsmithError {
    /// Requested guard or password broker is not defined in the auth config
    #[error("no config found for guard '{guard}' or password broker '{broker}'")]
    MissingGuardOrBroker { guard: String, broker: String },

    /// The guard's provider does not declare a model (non-Eloquent provider)
    #[error("provider '{provider}' for guard '{guard}' does not declare a model")]
    UnsupportedProvider { guard: String, provider: String },

    /// Auth configuration file could not be read or parsed
    #[error("invalid auth config {path}: {message}")]
    InvalidAuthConfig { path: PathBuf, message: String },

    /// Named stub is not part of the template library
    #[error("stub not found: {name}")]
    TemplateNotFound { name: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
