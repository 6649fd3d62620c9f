//! Centered content images.
//!
//! Produces the markup for a centered documentation image. Lightbox opening
//! is a client-side concern; this only emits the `data-lightbox` hook.

use std::fmt::Write;

use crate::escape::escape_html;

/// Options for [`render_figure`].
#[derive(Clone, Debug)]
pub struct FigureOptions {
    /// Tooltip title. Falls back to the alt text when `None`.
    pub title: Option<String>,
    /// Emit the `data-lightbox` attribute so the client can open a viewer.
    pub lightbox: bool,
    /// Apply the default drop shadow. When false, adds the `no-shadow` class.
    pub shadow: bool,
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            title: None,
            lightbox: true,
            shadow: true,
        }
    }
}

/// Render a centered content image.
#[must_use]
pub fn render_figure(src: &str, alt: &str, options: &FigureOptions) -> String {
    let title = options.title.as_deref().unwrap_or(alt);
    let class = if options.shadow {
        "docnav-image"
    } else {
        "docnav-image no-shadow"
    };
    let lightbox = if options.lightbox {
        r#" data-lightbox="true""#
    } else {
        ""
    };

    let mut out = String::new();
    write!(
        out,
        r#"<figure class="docnav-figure"><img class="{class}" src="{}" alt="{}" title="{}"{lightbox}></figure>"#,
        escape_html(src),
        escape_html(alt),
        escape_html(title)
    )
    .unwrap();
    out
}
