//! Version declarations and tree resolution.
//!
//! Provides [`VersionNavigation`], one version's static declaration, and
//! [`NavRegistry`], the immutable declaration set that [`NavRegistry::resolve`]
//! operates on.
//!
//! # Resolution
//!
//! A version's resolved tree is the resolved tree of its `base` version
//! (recursively) followed by its own root nodes. Base content is never
//! mutated or reordered; derived versions only append after it.
//!
//! All resolution failures are configuration errors intended to fail the
//! documentation build. No partial tree is ever produced.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::node::{self, NavNode};

/// One documentation version's navigation declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionNavigation {
    /// Version identifier (e.g., "5.38.x").
    pub version: String,
    /// Immediately preceding version whose resolved tree this one extends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    /// Root nodes declared by this version, appended after the base tree.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<NavNode>,
}

/// Error returned when tree resolution fails.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Base-version references form a cycle.
    #[error("Cyclic navigation inheritance: {}", .chain.join(" -> "))]
    CyclicInheritance {
        /// Versions visited, in order, ending with the repeated one.
        chain: Vec<String>,
    },
    /// A referenced version has no declaration.
    #[error("Unknown navigation version: {version}{}", referenced_by_suffix(.referenced_by))]
    UnknownVersion {
        /// The version with no declaration.
        version: String,
        /// The version whose `base` referenced it, if any.
        referenced_by: Option<String>,
    },
    /// The same content link appears twice in one resolved tree.
    #[error("Duplicate link \"{link}\" in resolved navigation for {version}")]
    DuplicateLink {
        /// The duplicated content link.
        link: String,
        /// The version being resolved.
        version: String,
    },
}

fn referenced_by_suffix(referenced_by: &Option<String>) -> String {
    match referenced_by {
        Some(version) => format!(" (base of {version})"),
        None => String::new(),
    }
}

/// Immutable set of version navigation declarations.
///
/// Built once at site-build time, read-only afterwards. [`resolve`](Self::resolve)
/// takes `&self` and keeps no state between calls, so concurrent resolution
/// (e.g., server-side rendering of many pages at once) is safe without locks.
#[derive(Clone, Debug, Default)]
pub struct NavRegistry {
    declarations: HashMap<String, VersionNavigation>,
}

impl NavRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a version declaration.
    ///
    /// Returns the previous declaration for the same version, if any.
    pub fn insert(&mut self, declaration: VersionNavigation) -> Option<VersionNavigation> {
        self.declarations
            .insert(declaration.version.clone(), declaration)
    }

    /// Get a version's declaration.
    #[must_use]
    pub fn get(&self, version: &str) -> Option<&VersionNavigation> {
        self.declarations.get(version)
    }

    /// Number of declared versions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// True if no versions are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Iterate over declared version identifiers, in no particular order.
    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.declarations.keys().map(String::as_str)
    }

    /// Resolve a version's full navigation tree.
    ///
    /// Resolves the declared `base` chain depth-first, then concatenates:
    /// base tree first, own nodes after, relative order preserved within each
    /// contributing version. The result has no remaining dependency on prior
    /// versions and resolving the same version twice yields structurally
    /// identical output.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::CyclicInheritance`] if the base chain revisits a version.
    /// - [`ResolveError::UnknownVersion`] if a referenced version has no declaration.
    /// - [`ResolveError::DuplicateLink`] if a content link appears twice in the
    ///   resolved tree.
    pub fn resolve(&self, version: &str) -> Result<Vec<NavNode>, ResolveError> {
        let mut chain = Vec::new();
        let mut resolved = Vec::new();
        self.resolve_into(version, None, &mut chain, &mut resolved)?;

        let mut seen = HashSet::new();
        for link in node::links(&resolved) {
            if !seen.insert(link) {
                return Err(ResolveError::DuplicateLink {
                    link: link.to_owned(),
                    version: version.to_owned(),
                });
            }
        }

        warn_duplicate_titles(&resolved, version);

        tracing::debug!(
            version,
            root_nodes = resolved.len(),
            links = seen.len(),
            "Resolved navigation tree"
        );
        Ok(resolved)
    }

    /// Append `version`'s resolved nodes to `out`, base chain first.
    fn resolve_into(
        &self,
        version: &str,
        referenced_by: Option<&str>,
        chain: &mut Vec<String>,
        out: &mut Vec<NavNode>,
    ) -> Result<(), ResolveError> {
        if chain.iter().any(|visited| visited == version) {
            chain.push(version.to_owned());
            return Err(ResolveError::CyclicInheritance {
                chain: std::mem::take(chain),
            });
        }

        let declaration =
            self.declarations
                .get(version)
                .ok_or_else(|| ResolveError::UnknownVersion {
                    version: version.to_owned(),
                    referenced_by: referenced_by.map(str::to_owned),
                })?;

        chain.push(version.to_owned());
        if let Some(base) = &declaration.base {
            self.resolve_into(base, Some(version), chain, out)?;
        }

        out.extend(declaration.nodes.iter().cloned());
        Ok(())
    }
}

impl FromIterator<VersionNavigation> for NavRegistry {
    fn from_iter<I: IntoIterator<Item = VersionNavigation>>(iter: I) -> Self {
        let mut registry = Self::new();
        for declaration in iter {
            registry.insert(declaration);
        }
        registry
    }
}

/// Warn about duplicate group titles among siblings.
///
/// Duplicate titles at one nesting level are an authoring smell, not a
/// structural error, so resolution continues.
fn warn_duplicate_titles(nodes: &[NavNode], version: &str) {
    let mut seen = HashSet::new();
    for node in nodes {
        if let NavNode::Group { title, children } = node {
            if !seen.insert(title.as_str()) {
                tracing::warn!(version, title, "Duplicate group title at one nesting level");
            }
            warn_duplicate_titles(children, version);
        }
    }
}
