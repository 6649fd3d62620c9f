//! Versioned navigation tree model and resolution for DocNav.
//!
//! This crate provides:
//! - [`NavNode`]: the navigation tree node (page, group, or separator)
//! - [`VersionNavigation`]: one version's static navigation declaration
//! - [`NavRegistry`]: the immutable set of declarations, with [`NavRegistry::resolve`]
//!
//! # Architecture
//!
//! Navigation is declared per documentation version. A version may name the
//! immediately preceding version as its `base`; resolution concatenates the
//! base version's resolved nodes with the version's own nodes, base first.
//! The merge rule is concatenation, never an overlay or patch.
//!
//! Resolution is a pure function over the registry: no I/O, no global state,
//! structurally identical output for identical input. The registry is built
//! once at load time and is read-only afterwards, so concurrent resolution
//! from multiple threads needs no synchronization.
//!
//! # Example
//!
//! ```
//! use docnav_tree::{NavNode, NavRegistry, VersionNavigation};
//!
//! let mut registry = NavRegistry::new();
//! registry.insert(VersionNavigation {
//!     version: "5.37.x".to_owned(),
//!     base: None,
//!     nodes: vec![NavNode::group(
//!         "Headless CMS",
//!         vec![NavNode::page("headless-cms/users/role-creation")],
//!     )],
//! });
//! registry.insert(VersionNavigation {
//!     version: "5.38.x".to_owned(),
//!     base: Some("5.37.x".to_owned()),
//!     nodes: vec![NavNode::group(
//!         "File Manager",
//!         vec![NavNode::page("file-manager/essentials/upload-file")],
//!     )],
//! });
//!
//! let tree = registry.resolve("5.38.x")?;
//! assert_eq!(tree.len(), 2);
//! # Ok::<(), docnav_tree::ResolveError>(())
//! ```

pub(crate) mod node;
pub(crate) mod registry;

pub use node::{NavNode, derived_title, links};
pub use registry::{NavRegistry, ResolveError, VersionNavigation};
