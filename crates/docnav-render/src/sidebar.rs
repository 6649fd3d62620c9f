//! Sidebar tree rendering.
//!
//! Maps a resolved node sequence to a nested `<nav>`/`<ul>` tree:
//! - `Group` → `<details>`/`<summary>` collapsible section
//! - `Page` → `<a>` labeled by its title or the derived fallback
//! - `Separator` → `<hr>` list item

use std::fmt::Write;

use docnav_tree::{NavNode, derived_title};

use crate::escape::escape_html;

/// Options for [`render_sidebar`].
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// URL prefix for page links (e.g., "/docs/5.38.x"). Trailing slashes
    /// are ignored; an empty prefix produces root-relative links.
    pub base_url: String,
    /// Group nesting levels rendered pre-expanded. Level 1 is the root.
    pub open_depth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            open_depth: 1,
        }
    }
}

/// Render a resolved navigation tree as a sidebar HTML fragment.
///
/// Pure with respect to the tree: same input, same output, input untouched.
#[must_use]
pub fn render_sidebar(nodes: &[NavNode], options: &RenderOptions) -> String {
    let base = options.base_url.trim_end_matches('/');

    let mut out = String::new();
    out.push_str(r#"<nav class="docnav">"#);
    render_level(nodes, base, options.open_depth, 1, &mut out);
    out.push_str("</nav>");
    out
}

fn render_level(nodes: &[NavNode], base: &str, open_depth: usize, depth: usize, out: &mut String) {
    out.push_str("<ul>");
    for node in nodes {
        match node {
            NavNode::Page { title, link } => {
                let label = match title {
                    Some(title) => escape_html(title).into_owned(),
                    None => escape_html(&derived_title(link)).into_owned(),
                };
                write!(
                    out,
                    r#"<li class="docnav-page"><a href="{base}/{}">{label}</a></li>"#,
                    escape_html(link)
                )
                .unwrap();
            }
            NavNode::Group { title, children } => {
                let open = if depth <= open_depth { " open" } else { "" };
                write!(
                    out,
                    r#"<li class="docnav-group"><details{open}><summary>{}</summary>"#,
                    escape_html(title)
                )
                .unwrap();
                render_level(children, base, open_depth, depth + 1, out);
                out.push_str("</details></li>");
            }
            NavNode::Separator => {
                out.push_str(r#"<li class="docnav-separator" role="separator"><hr></li>"#);
            }
        }
    }
    out.push_str("</ul>");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_page_with_explicit_title() {
        let nodes = vec![NavNode::titled_page("Introduction", "apw/intro")];
        let html = render_sidebar(&nodes, &RenderOptions::default());
        assert_eq!(
            html,
            r#"<nav class="docnav"><ul><li class="docnav-page"><a href="/apw/intro">Introduction</a></li></ul></nav>"#
        );
    }

    #[test]
    fn test_render_page_derived_title() {
        let nodes = vec![NavNode::page("file-manager/essentials/upload-file")];
        let html = render_sidebar(&nodes, &RenderOptions::default());
        assert!(html.contains(">Upload File</a>"));
    }

    #[test]
    fn test_render_base_url_prefix() {
        let nodes = vec![NavNode::page("guide/setup")];
        let options = RenderOptions {
            base_url: "/docs/5.38.x/".to_owned(),
            ..RenderOptions::default()
        };
        let html = render_sidebar(&nodes, &options);
        assert!(html.contains(r#"href="/docs/5.38.x/guide/setup""#));
    }

    #[test]
    fn test_render_group_nesting_and_open_depth() {
        let nodes = vec![NavNode::group(
            "Headless CMS",
            vec![NavNode::group("Users", vec![NavNode::page("u")])],
        )];
        let html = render_sidebar(&nodes, &RenderOptions::default());

        // Root group expanded, nested group collapsed.
        assert!(html.contains("<details open><summary>Headless CMS</summary>"));
        assert!(html.contains("<details><summary>Users</summary>"));
    }

    #[test]
    fn test_render_separator() {
        let nodes = vec![
            NavNode::page("a"),
            NavNode::separator(),
            NavNode::page("b"),
        ];
        let html = render_sidebar(&nodes, &RenderOptions::default());
        let separator = r#"<li class="docnav-separator" role="separator"><hr></li>"#;
        assert!(html.contains(separator));

        let a = html.find(r#"href="/a""#).unwrap();
        let sep = html.find(separator).unwrap();
        let b = html.find(r#"href="/b""#).unwrap();
        assert!(a < sep && sep < b);
    }

    #[test]
    fn test_render_escapes_titles_and_links() {
        let nodes = vec![NavNode::titled_page("Q&A <guide>", "faq/\"q\"")];
        let html = render_sidebar(&nodes, &RenderOptions::default());
        assert!(html.contains("Q&amp;A &lt;guide&gt;"));
        assert!(html.contains(r#"href="/faq/&quot;q&quot;""#));
    }

    #[test]
    fn test_render_does_not_mutate_input() {
        let nodes = vec![NavNode::group("G", vec![NavNode::page("a")])];
        let before = nodes.clone();
        let _ = render_sidebar(&nodes, &RenderOptions::default());
        assert_eq!(nodes, before);
    }

    #[test]
    fn test_render_empty_tree() {
        let html = render_sidebar(&[], &RenderOptions::default());
        assert_eq!(html, r#"<nav class="docnav"><ul></ul></nav>"#);
    }
}
