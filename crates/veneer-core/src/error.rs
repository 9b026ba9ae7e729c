use thiserror::Error;

/// Core error type for veneer operations.
///
/// Import scanning itself never fails: malformed or irrelevant input
/// degrades to a no-op and at worst under-populates the registry. These
/// variants cover the configuration boundary.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to parse config: {source}")]
    ConfigParse {
        #[from]
        source: serde_json::Error,
    },

    #[error("importSources must contain at least one module specifier")]
    EmptyImportSources,

    #[error("Invalid import source {value:?}: specifiers must be non-blank")]
    InvalidImportSource { value: String },

    #[error("{0}")]
    Other(String),
}

impl Error {
    #[must_use]
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
