//! Outdated-version warning banner.

use std::fmt::Write;

use crate::escape::escape_html;

/// Render the warning shown when viewing docs for an old version.
///
/// Returns `None` when `current` already is the latest version. Otherwise
/// produces a warning alert linking to the latest version's upgrade page.
#[must_use]
pub fn render_version_banner(current: &str, latest: &str, upgrade_link: &str) -> Option<String> {
    if current == latest {
        return None;
    }

    let mut out = String::new();
    out.push_str(r#"<div class="alert alert-warning"><div class="alert-title">Warning</div>"#);
    write!(
        out,
        r#"<div class="alert-content">You&#39;re browsing the documentation for an old version. Consider upgrading your project to <a href="{}">{}</a>.</div></div>"#,
        escape_html(upgrade_link),
        escape_html(latest)
    )
    .unwrap();
    Some(out)
}
