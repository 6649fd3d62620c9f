//! Navigation tree nodes.
//!
//! Provides [`NavNode`], the tagged union over pages, groups, and separators
//! that makes up a navigation tree. Nodes are plain data: ordering within a
//! sibling list is significant, groups nest to arbitrary depth, and nothing
//! here knows about rendering.
//!
//! In YAML declarations a node is tagged by `kind`:
//!
//! ```yaml
//! - kind: group
//!   title: File Manager
//!   children:
//!     - kind: page
//!       link: file-manager/essentials/upload-file
//! - kind: separator
//! ```

use serde::{Deserialize, Serialize};

/// One entry in a navigation tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NavNode {
    /// A leaf linking to a content page.
    Page {
        /// Display title. When `None`, a title is derived from the link
        /// (see [`derived_title`]).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        /// Relative content path, unique within one resolved tree.
        link: String,
    },
    /// A named, collapsible section of child nodes.
    Group {
        /// Section heading. Not required to be unique.
        title: String,
        /// Ordered children, rendered top to bottom.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<NavNode>,
    },
    /// A visual divider. Position-significant, no semantic content.
    Separator,
}

impl NavNode {
    /// Create a page node without an explicit title.
    #[must_use]
    pub fn page(link: impl Into<String>) -> Self {
        Self::Page {
            title: None,
            link: link.into(),
        }
    }

    /// Create a page node with an explicit display title.
    #[must_use]
    pub fn titled_page(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self::Page {
            title: Some(title.into()),
            link: link.into(),
        }
    }

    /// Create a group node with ordered children.
    #[must_use]
    pub fn group(title: impl Into<String>, children: Vec<NavNode>) -> Self {
        Self::Group {
            title: title.into(),
            children,
        }
    }

    /// Create a separator node.
    #[must_use]
    pub fn separator() -> Self {
        Self::Separator
    }

    /// Display title for this node, if it has one.
    ///
    /// Pages without an explicit title fall back to [`derived_title`];
    /// separators have no title.
    #[must_use]
    pub fn display_title(&self) -> Option<String> {
        match self {
            Self::Page { title, link } => Some(
                title
                    .clone()
                    .unwrap_or_else(|| derived_title(link)),
            ),
            Self::Group { title, .. } => Some(title.clone()),
            Self::Separator => None,
        }
    }
}

/// Derive a display title from a content link.
///
/// Uses the last path segment, replaces dashes and underscores with spaces,
/// and capitalizes each word: `"file-manager/essentials/upload-file"`
/// becomes `"Upload File"`.
#[must_use]
pub fn derived_title(link: &str) -> String {
    let segment = link
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(link);

    segment
        .split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Capitalize the first character of a word.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Collect all page links in a node sequence, depth-first.
///
/// Order matches rendering order. Used for duplicate-link detection during
/// resolution and available to external builds for dangling-link validation.
#[must_use]
pub fn links(nodes: &[NavNode]) -> Vec<&str> {
    let mut out = Vec::new();
    collect_links(nodes, &mut out);
    out
}

fn collect_links<'a>(nodes: &'a [NavNode], out: &mut Vec<&'a str>) {
    for node in nodes {
        match node {
            NavNode::Page { link, .. } => out.push(link.as_str()),
            NavNode::Group { children, .. } => collect_links(children, out),
            NavNode::Separator => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_derived_title_from_last_segment() {
        assert_eq!(
            derived_title("file-manager/essentials/upload-file"),
            "Upload File"
        );
    }

    #[test]
    fn test_derived_title_single_segment() {
        assert_eq!(derived_title("introduction"), "Introduction");
    }

    #[test]
    fn test_derived_title_underscores() {
        assert_eq!(derived_title("guide/getting_started"), "Getting Started");
    }

    #[test]
    fn test_derived_title_trailing_slash() {
        assert_eq!(derived_title("guide/setup/"), "Setup");
    }

    #[test]
    fn test_display_title_explicit_wins() {
        let node = NavNode::titled_page("Introduction", "apw/essentials/introduction-to-apw");
        assert_eq!(node.display_title(), Some("Introduction".to_owned()));
    }

    #[test]
    fn test_display_title_page_fallback() {
        let node = NavNode::page("headless-cms/users/role-creation");
        assert_eq!(node.display_title(), Some("Role Creation".to_owned()));
    }

    #[test]
    fn test_display_title_separator_none() {
        assert_eq!(NavNode::separator().display_title(), None);
    }

    #[test]
    fn test_links_depth_first_order() {
        let nodes = vec![
            NavNode::group(
                "Headless CMS",
                vec![
                    NavNode::group("Users", vec![NavNode::page("a"), NavNode::page("b")]),
                    NavNode::page("c"),
                ],
            ),
            NavNode::separator(),
            NavNode::page("d"),
        ];
        assert_eq!(links(&nodes), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_links_empty() {
        assert_eq!(links(&[]), Vec::<&str>::new());
    }

    #[test]
    fn test_yaml_round_trip_tagged_nodes() {
        let yaml = r"
- kind: group
  title: File Manager
  children:
    - kind: page
      link: file-manager/essentials/upload-file
    - kind: page
      title: Aliases
      link: file-manager/essentials/file-aliases
- kind: separator
";
        let nodes: Vec<NavNode> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            nodes,
            vec![
                NavNode::group(
                    "File Manager",
                    vec![
                        NavNode::page("file-manager/essentials/upload-file"),
                        NavNode::titled_page("Aliases", "file-manager/essentials/file-aliases"),
                    ],
                ),
                NavNode::separator(),
            ]
        );
    }
}
