//! Navigation declaration loading.
//!
//! Scans the docs root for version directories and parses each one's
//! navigation declaration file into a [`NavRegistry`]. The version
//! identifier is the directory name; the file declares the optional base
//! version and the version's own root nodes:
//!
//! ```yaml
//! base: 5.37.x
//! nodes:
//!   - kind: group
//!     title: File Manager
//!     children:
//!       - kind: page
//!         link: file-manager/essentials/upload-file
//! ```

use std::path::Path;

use serde::Deserialize;

use docnav_tree::{NavNode, NavRegistry, VersionNavigation};

use crate::ConfigError;

/// Declaration file contents (version comes from the directory name).
#[derive(Debug, Deserialize)]
struct NavFile {
    #[serde(default)]
    base: Option<String>,
    #[serde(default)]
    nodes: Vec<NavNode>,
}

/// Load all version declarations under `root_dir` into a registry.
///
/// Each subdirectory of `root_dir` containing `nav_filename` contributes one
/// declaration; subdirectories without one are skipped with a debug log.
/// Loading is deterministic (directories visited in name order).
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] if `root_dir` doesn't exist,
/// [`ConfigError::Io`] on read failures, or [`ConfigError::Nav`] with file
/// context on malformed YAML.
pub fn load_registry(root_dir: &Path, nav_filename: &str) -> Result<NavRegistry, ConfigError> {
    if !root_dir.is_dir() {
        return Err(ConfigError::NotFound(root_dir.to_path_buf()));
    }

    let mut version_dirs: Vec<_> = std::fs::read_dir(root_dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .filter(|entry| entry.path().is_dir())
        .collect();
    version_dirs.sort_by_key(std::fs::DirEntry::file_name);

    let mut registry = NavRegistry::new();
    for entry in version_dirs {
        let version = entry.file_name().to_string_lossy().into_owned();
        let nav_path = entry.path().join(nav_filename);
        if !nav_path.exists() {
            tracing::debug!(version, "No navigation declaration, skipping directory");
            continue;
        }

        let content = std::fs::read_to_string(&nav_path)?;
        let file: NavFile =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::Nav {
                path: nav_path.clone(),
                message: e.to_string(),
            })?;

        registry.insert(VersionNavigation {
            version: version.clone(),
            base: file.base,
            nodes: file.nodes,
        });
        tracing::debug!(version, path = %nav_path.display(), "Loaded navigation declaration");
    }

    tracing::info!(
        root_dir = %root_dir.display(),
        versions = registry.len(),
        "Navigation registry loaded"
    );
    Ok(registry)
}

/// Validate every declared version against the resolved trees it produces.
///
/// Resolves each declared version once, surfacing the first structural error.
/// Intended to run at build time so a broken tree fails the build rather
/// than shipping a misleading sidebar.
///
/// # Errors
///
/// Returns the resolution error message wrapped as [`ConfigError::Validation`].
pub fn validate_registry(registry: &NavRegistry) -> Result<(), ConfigError> {
    let mut versions: Vec<_> = registry.versions().collect();
    versions.sort_unstable();
    for version in versions {
        registry
            .resolve(version)
            .map_err(|e| ConfigError::Validation(e.to_string()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    fn write_nav(dir: &Path, version: &str, content: &str) {
        let version_dir = dir.join(version);
        fs::create_dir_all(&version_dir).unwrap();
        fs::write(version_dir.join("navigation.yaml"), content).unwrap();
    }

    #[test]
    fn test_load_registry_and_resolve_chain() {
        let dir = tempfile::tempdir().unwrap();
        write_nav(
            dir.path(),
            "5.37.x",
            r"
nodes:
  - kind: group
    title: Headless CMS
    children:
      - kind: page
        link: headless-cms/users/role-creation
",
        );
        write_nav(
            dir.path(),
            "5.38.x",
            r"
base: 5.37.x
nodes:
  - kind: group
    title: File Manager
    children:
      - kind: page
        link: file-manager/essentials/upload-file
",
        );

        let registry = load_registry(dir.path(), "navigation.yaml").unwrap();
        assert_eq!(registry.len(), 2);

        let tree = registry.resolve("5.38.x").unwrap();
        assert_eq!(
            tree,
            vec![
                NavNode::group(
                    "Headless CMS",
                    vec![NavNode::page("headless-cms/users/role-creation")],
                ),
                NavNode::group(
                    "File Manager",
                    vec![NavNode::page("file-manager/essentials/upload-file")],
                ),
            ]
        );
    }

    #[test]
    fn test_load_registry_skips_directories_without_declaration() {
        let dir = tempfile::tempdir().unwrap();
        write_nav(dir.path(), "1.0.x", "nodes: []\n");
        fs::create_dir_all(dir.path().join("assets")).unwrap();

        let registry = load_registry(dir.path(), "navigation.yaml").unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.get("1.0.x").is_some());
    }

    #[test]
    fn test_load_registry_missing_root() {
        let err = load_registry(Path::new("/nonexistent/docs"), "navigation.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_registry_malformed_yaml_names_file() {
        let dir = tempfile::tempdir().unwrap();
        write_nav(dir.path(), "1.0.x", "nodes: [not: [valid\n");

        let err = load_registry(dir.path(), "navigation.yaml").unwrap_err();
        match err {
            ConfigError::Nav { path, .. } => {
                assert!(path.ends_with("1.0.x/navigation.yaml"));
            }
            other => panic!("expected Nav error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_registry_reports_broken_chain() {
        let dir = tempfile::tempdir().unwrap();
        write_nav(dir.path(), "2.0.x", "base: 1.9.x\nnodes: []\n");

        let registry = load_registry(dir.path(), "navigation.yaml").unwrap();
        let err = validate_registry(&registry).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_validate_registry_passes_for_valid_chain() {
        let dir = tempfile::tempdir().unwrap();
        write_nav(dir.path(), "1.0.x", "nodes:\n  - kind: page\n    link: a\n");
        write_nav(
            dir.path(),
            "1.1.x",
            "base: 1.0.x\nnodes:\n  - kind: page\n    link: b\n",
        );

        let registry = load_registry(dir.path(), "navigation.yaml").unwrap();
        assert!(validate_registry(&registry).is_ok());
    }
}
