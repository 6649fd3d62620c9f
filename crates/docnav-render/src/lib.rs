//! HTML rendering of resolved navigation trees for DocNav.
//!
//! This crate provides pure functions from resolved [`NavNode`] sequences to
//! semantic HTML5 strings:
//! - [`render_sidebar`]: the nested, clickable sidebar tree
//! - [`render_version_banner`]: the "outdated documentation version" warning
//! - [`render_figure`]: a centered content image with optional lightbox markup
//!
//! Rendering never mutates its input and performs no I/O; where the output
//! lands on a page (sidebar region, article body) is the layout's concern.
//!
//! [`NavNode`]: docnav_tree::NavNode

mod banner;
mod escape;
mod figure;
mod sidebar;

pub use banner::render_version_banner;
pub use escape::escape_html;
pub use figure::{FigureOptions, render_figure};
pub use sidebar::{RenderOptions, render_sidebar};
