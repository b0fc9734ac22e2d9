//! Configuration error types.

use kepler_math::OrbitError;

/// Errors that can occur when loading, saving, parsing, or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to write the config file to disk.
    #[error("failed to write config: {0}")]
    WriteError(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse config: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// Failed to serialize config to RON.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),

    /// An orbit parameter is outside what the solver accepts.
    #[error("invalid orbit parameter: {0}")]
    Orbit(#[from] OrbitError),

    /// A setting is outside its allowed range.
    #[error("invalid setting {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
