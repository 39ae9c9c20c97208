//! Route classification: palette colors, ignore rules and shapes.

use std::str::FromStr;

use strum_macros::{AsRefStr, Display, EnumString};

use crate::{Error, Result};

/// Content kinds that can appear in a link table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum PageKind {
    Html,
    Func,
    Type,
    Group,
    Category,
    Symbols,
    Page,
}

impl PageKind {
    /// DOT shape for this kind.
    pub fn shape(self) -> &'static str {
        match self {
            // Prose pages
            PageKind::Page => "note",
            PageKind::Html => "tab",
            // Callables
            PageKind::Func => "ellipse",
            // Types
            PageKind::Type => "box",
            // Collections
            PageKind::Group => "box3d",
            PageKind::Category => "folder",
            PageKind::Symbols => "hexagon",
        }
    }
}

/// Map a content kind string to a DOT shape.
///
/// A kind outside the vocabulary means the link table does not match the
/// schema it was built with, so it is an error rather than a default shape.
pub fn shape_for_kind(kind: &str) -> Result<&'static str> {
    PageKind::from_str(kind)
        .map(PageKind::shape)
        .map_err(|_| Error::unknown_kind(kind).with_operation("classify::shape_for_kind"))
}

/// Whether a route is left out of the graph entirely.
///
/// HTML element reference pages have one sub-page per attribute; only the
/// section roots and the `elem`/`frame` namespaces are kept. Changelog pages
/// are always dropped.
pub fn should_ignore(route: &str) -> bool {
    let html_fragment = route.contains("/html/")
        && !route.ends_with("/html/")
        && !route.ends_with("/html/html/")
        && !route.contains("/html/elem/")
        && !route.contains("/html/frame/");
    html_fragment || route.contains("/changelog/")
}

/// One palette entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    pub prefix: String,
    /// `#RRGGBB`
    pub color: String,
}

/// Outcome of looking a route up in the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'a> {
    Resolved(&'a Swatch),
    Unclassified,
}

impl<'a> Classification<'a> {
    pub fn color(self) -> Option<&'a str> {
        match self {
            Classification::Resolved(swatch) => Some(swatch.color.as_str()),
            Classification::Unclassified => None,
        }
    }
}

/// Ordered prefix → color table. The first matching prefix wins, so more
/// specific prefixes must come before broader ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    swatches: Vec<Swatch>,
}

const DOCS_PALETTE: &[(&str, &str)] = &[
    ("/tutorial/", "#dd1fcd"),
    ("/guides/", "#F4442E"),
    // Language
    ("/reference/syntax/", "#CACA00"),
    ("/reference/styling/", "#CACA00"),
    ("/reference/scripting/", "#CACA00"),
    ("/reference/context/", "#CACA00"),
    // Export
    ("/reference/pdf/", "#D999B9"),
    ("/reference/html/", "#D999B9"),
    ("/reference/png/", "#D999B9"),
    ("/reference/svg/", "#D999B9"),
    // Library
    ("/reference/foundations/", "#FE8A15"),
    ("/reference/model/", "#E5B25D"),
    ("/reference/text/", "#585858"),
    ("/reference/math/", "#3ECAED"),
    ("/reference/symbols/", "#239dad"),
    ("/reference/layout/", "#94CF0B"),
    ("/reference/visualize/", "#1691EF"),
    ("/reference/introspection/", "#5E55FF"),
    ("/reference/data-loading/", "#AD30EC"),
    // Everything else
    ("/", "#808080"),
];

impl Default for Palette {
    fn default() -> Self {
        Self::new(DOCS_PALETTE.iter().copied())
    }
}

impl Palette {
    pub fn new<P, C>(entries: impl IntoIterator<Item = (P, C)>) -> Self
    where
        P: Into<String>,
        C: Into<String>,
    {
        let swatches = entries
            .into_iter()
            .map(|(prefix, color)| Swatch {
                prefix: prefix.into(),
                color: color.into(),
            })
            .collect();
        Self { swatches }
    }

    pub fn classify(&self, route: &str) -> Classification<'_> {
        self.swatches
            .iter()
            .find(|swatch| route.starts_with(swatch.prefix.as_str()))
            .map_or(Classification::Unclassified, Classification::Resolved)
    }

    /// Color of the first prefix `route` starts with.
    pub fn decide_color(&self, route: &str) -> Result<&str> {
        self.classify(route)
            .color()
            .ok_or_else(|| Error::no_matching_prefix(route).with_operation("classify::decide_color"))
    }

    /// Category prefix that owns `route`, used as its folding target.
    pub fn category_of(&self, route: &str) -> Result<&str> {
        match self.classify(route) {
            Classification::Resolved(swatch) => Ok(swatch.prefix.as_str()),
            Classification::Unclassified => {
                Err(Error::no_matching_prefix(route).with_operation("classify::category_of"))
            }
        }
    }
}
