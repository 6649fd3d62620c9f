//! Version manifest support.
//!
//! The manifest (`versions.json`) is the external version registry: it names
//! the latest release and every published documentation version. It drives
//! which version resolves by default and whether the outdated-version
//! banner shows.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Parsed `versions.json` manifest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionManifest {
    /// The current/latest version identifier.
    pub latest_version: String,
    /// All published version identifiers, newest first.
    #[serde(default)]
    pub all_versions: Vec<String>,
}

impl VersionManifest {
    /// Load a manifest from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if the file doesn't exist,
    /// [`ConfigError::Io`] on read failure, or [`ConfigError::Manifest`]
    /// on malformed JSON.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content).map_err(|message| ConfigError::Manifest {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse a manifest from JSON content.
    ///
    /// # Errors
    ///
    /// Returns a message describing the parse failure.
    pub fn from_json(content: &str) -> Result<Self, String> {
        let manifest: Self = serde_json::from_str(content).map_err(|e| e.to_string())?;
        if manifest.latest_version.is_empty() {
            return Err("latestVersion cannot be empty".to_owned());
        }
        Ok(manifest)
    }

    /// True if `version` is older than the latest release.
    #[must_use]
    pub fn is_outdated(&self, version: &str) -> bool {
        version != self.latest_version
    }

    /// True if `version` is published in this manifest.
    ///
    /// The latest version is always considered published, even when
    /// `allVersions` omits it.
    #[must_use]
    pub fn contains(&self, version: &str) -> bool {
        version == self.latest_version || self.all_versions.iter().any(|v| v == version)
    }
}
