//! Error types for the model crate.

use thiserror::Error;

/// Errors produced while assembling a QNN model circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModelError {
    /// A layer prefix was used twice on a builder that requires unique prefixes.
    #[error("Layer prefix '{prefix}' was already used; its parameter symbols would collide")]
    PrefixReused {
        /// The reused prefix.
        prefix: String,
    },

    /// The model configuration is inconsistent.
    #[error("Invalid model configuration: {0}")]
    InvalidConfig(String),

    /// The configuration file could not be read.
    #[error("Failed to read config file '{path}': {source}")]
    ConfigIo {
        /// Path of the file.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration file could not be parsed.
    #[error("Failed to parse config file '{path}': {message}")]
    ConfigParse {
        /// Path of the file.
        path: String,
        /// Parser message.
        message: String,
    },

    /// Circuit builder returned an error.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] hqnn_ir::IrError),
}

/// Result type for model assembly.
pub type ModelResult<T> = Result<T, ModelError>;
