//! Error types for the effects engine
//!
//! Only genuine misuse or environment failures surface as errors. A missing
//! render capability is a degrade-gracefully condition, not an error, and
//! never appears here.

use thiserror::Error;

/// Errors surfaced by the effects engine
#[derive(Debug, Error)]
pub enum EffectsError {
    /// Configuration file could not be read
    #[error("failed to read config file '{path}': {source}")]
    ConfigIo {
        /// Path that was attempted
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed
    #[error("failed to parse config file '{path}': {source}")]
    ConfigParse {
        /// Path that was attempted
        path: String,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },
}
