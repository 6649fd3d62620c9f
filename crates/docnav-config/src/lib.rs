//! Configuration management for DocNav.
//!
//! Parses `docnav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories, the version
//! manifest (`versions.json`), and loading of per-version navigation
//! declarations into a [`NavRegistry`](docnav_tree::NavRegistry).
//!
//! # Layout
//!
//! ```text
//! docnav.toml                    # site settings
//! versions.json                  # version manifest (latest + all versions)
//! docs/
//!   5.37.x/navigation.yaml       # one declaration per version directory
//!   5.38.x/navigation.yaml
//! ```

mod loader;
mod manifest;

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use loader::{load_registry, validate_registry};
pub use manifest::VersionManifest;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docnav.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site configuration.
    pub site: SiteConfig,
    /// Documentation source configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Version manifest configuration.
    versions: VersionsConfigRaw,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Resolved path to the version manifest (set after loading).
    #[serde(skip)]
    pub manifest_path: PathBuf,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// URL prefix under which versioned docs are served (e.g., "/docs").
    pub base_url: String,
    /// Link target for the outdated-version banner.
    pub upgrade_link: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "/docs".to_owned(),
            upgrade_link: "/docs/get-started/install".to_owned(),
        }
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    root_dir: Option<String>,
    nav_filename: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Root directory holding one subdirectory per version.
    pub root_dir: PathBuf,
    /// Navigation declaration filename inside each version directory.
    pub nav_filename: String,
}

/// Raw versions configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct VersionsConfigRaw {
    manifest: Option<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Version manifest parsing error.
    #[error("Version manifest error in {}: {message}", .path.display())]
    Manifest {
        /// Manifest file path.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },
    /// Navigation declaration parsing error.
    #[error("Navigation declaration error in {}: {message}", .path.display())]
    Nav {
        /// Declaration file path.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `docnav.toml` in the current directory and parents,
    /// falling back to defaults rooted at the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist or
    /// parsing/validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)
        } else {
            Ok(Self::default_with_cwd())
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            docs: DocsConfigRaw::default(),
            versions: VersionsConfigRaw::default(),
            docs_resolved: DocsConfig {
                root_dir: base.join("docs"),
                nav_filename: "navigation.yaml".to_owned(),
            },
            manifest_path: base.join("versions.json"),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded configuration");

        Ok(config)
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.docs_resolved = DocsConfig {
            root_dir: config_dir.join(self.docs.root_dir.as_deref().unwrap_or("docs")),
            nav_filename: self
                .docs
                .nav_filename
                .clone()
                .unwrap_or_else(|| "navigation.yaml".to_owned()),
        };
        self.manifest_path =
            config_dir.join(self.versions.manifest.as_deref().unwrap_or("versions.json"));
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field has an invalid value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.docs_resolved.nav_filename.is_empty() {
            return Err(ConfigError::Validation(
                "docs.nav_filename cannot be empty".to_owned(),
            ));
        }
        if !self.site.base_url.is_empty() && !self.site.base_url.starts_with('/') {
            return Err(ConfigError::Validation(
                "site.base_url must start with /".to_owned(),
            ));
        }
        Ok(())
    }
}
