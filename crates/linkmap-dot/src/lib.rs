//! Graph rendering module for producing DOT format output.
//!
//! This module transforms a contracted link graph into DOT text for
//! Graphviz. Layout and rasterization are left to Graphviz itself.
//!
//! # Module Structure
//!
//! - [`dot`]: DOT format utilities and helpers
//! - [`render`]: Node/edge rendering with colors, shapes and focus title

mod dot;
mod render;

use linkmap_collect::{FocusSpec, contract};
use linkmap_core::{LinkTable, Palette, Result};

pub use dot::{DotBuilder, blend_edge_color, escape_label, with_alpha};
pub use render::{DOCS_BASE_URL, RenderMode, RenderOptions, Renderer, focus_title};

// ============================================================================
// Public API
// ============================================================================

/// Contract `table` under `focus` and render the result to DOT.
///
/// Rendering is all-or-nothing: a route the palette cannot classify or a
/// kind without a shape fails the whole call.
pub fn render_links(
    table: &LinkTable,
    focus: &FocusSpec,
    palette: &Palette,
    options: &RenderOptions,
) -> Result<String> {
    let graph = contract(table, focus, palette)?;
    Renderer::new(table, palette, options).render(&graph, focus)
}
