//! linkmap command-line interface.

pub mod options;
pub mod pipeline;

pub use options::{DotOptions, LinksOptions};
pub use pipeline::{build_links, load_pages, render_dot};
