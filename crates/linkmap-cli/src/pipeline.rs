//! The two pipeline stages: page tree → link table, link table → DOT.

use std::fs;
use std::path::Path;
use std::time::Instant;

use tracing::info;

use linkmap_collect::FocusSpec;
use linkmap_core::{Catalog, Error, LinkTable, Page, Palette, Result, build_catalog};
use linkmap_dot::render_links;

use crate::options::{DotOptions, LinksOptions};

/// Read the docs page tree: a JSON array of root pages.
pub fn load_pages(path: &Path) -> Result<Vec<Page>> {
    let text = fs::read_to_string(path)
        .map_err(|e| Error::from(e).with_context("path", path.display().to_string()))?;
    serde_json::from_str(&text).map_err(|e| {
        Error::deserialization_failed(e.to_string())
            .with_operation("pipeline::load_pages")
            .with_context("path", path.display().to_string())
            .set_source(e)
    })
}

/// Build the catalog from `opts.docs` and write the link table to `opts.out`.
pub fn build_links(opts: &LinksOptions) -> Result<Catalog> {
    let load_start = Instant::now();
    let pages = load_pages(&opts.docs)?;
    info!(
        "Loading pages: {:.2}s ({} roots)",
        load_start.elapsed().as_secs_f64(),
        pages.len()
    );

    let catalog = build_catalog(&pages, &opts.catalog_options())?;

    if let Some(parent) = opts.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    catalog.table.save(&opts.out)?;
    Ok(catalog)
}

/// Load the link table from `opts.links` and render it under the
/// requested focus.
pub fn render_dot(opts: &DotOptions) -> Result<String> {
    let focus = FocusSpec::from_args(&opts.focus);
    let table = LinkTable::load(&opts.links)?;
    let palette = Palette::default();
    render_links(&table, &focus, &palette, &opts.render_options())
}
