use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Module specifiers recognized as the styling library when none are
/// configured: the published package and its shorthand.
pub const DEFAULT_IMPORT_SOURCES: [&str; 2] = ["@veneer/css", "veneer"];

/// Analysis configuration for one veneer compilation.
///
/// Shared read-only by every per-module scan; a scan never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Module specifiers recognized as the styling library.
    ///
    /// Matching is exact string equality: no normalization, no partial
    /// matching, no resolution of relative paths.
    pub import_sources: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            import_sources: DEFAULT_IMPORT_SOURCES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the recognized import sources.
    #[must_use]
    pub fn with_import_sources<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.import_sources = sources.into_iter().map(Into::into).collect();
        self
    }

    /// Parse and validate a config from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the config is usable for a scan.
    pub fn validate(&self) -> Result<(), Error> {
        if self.import_sources.is_empty() {
            return Err(Error::EmptyImportSources);
        }
        if let Some(bad) = self.import_sources.iter().find(|s| s.trim().is_empty()) {
            return Err(Error::InvalidImportSource { value: bad.clone() });
        }
        Ok(())
    }

    /// Whether `path` names the styling library.
    #[must_use]
    pub fn recognizes_source(&self, path: &str) -> bool {
        self.import_sources.iter().any(|source| source == path)
    }
}
