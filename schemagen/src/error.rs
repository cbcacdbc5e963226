//! Fatal errors of a generation run.

use thiserror::Error;

use oas_ontology::AccessError;

/// An error that aborts schema generation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The ontology could not resolve a class the run depends on.
    #[error(transparent)]
    Access(#[from] AccessError),
    /// The configuration file could not be read.
    #[error("failed to read config {path}")]
    ConfigRead {
        /// Path of the configuration file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The configuration is not valid TOML or has wrongly typed keys.
    #[error("invalid config {path}")]
    ConfigParse {
        /// Path of the configuration file, or `<inline>`.
        path: String,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },
}
