//! Page tree model, link extraction, catalog building and route
//! classification for documentation link graphs.
//!
//! The pipeline entry points are [`build_catalog`], which flattens a page
//! tree into a [`LinkTable`], and [`Palette`] / [`should_ignore`] /
//! [`shape_for_kind`], which classify routes for contraction and rendering.

pub mod catalog;
pub mod classify;
pub mod extract;
pub mod page;
pub mod table;

pub use catalog::{Catalog, CatalogOptions, CollisionPolicy, RouteCollision, build_catalog};
pub use classify::{Classification, PageKind, Palette, Swatch, shape_for_kind, should_ignore};
pub use extract::{extract_links, extract_markup_links};
pub use linkmap_error::{Error, ErrorKind, Result};
pub use page::{Body, ContentFragment, ContentRecord, ListingItem, Page};
pub use table::{LinkEntry, LinkTable};
