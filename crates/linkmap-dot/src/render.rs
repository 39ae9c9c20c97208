//! Rendering of a contracted link graph to DOT.

use std::time::Instant;

use strum_macros::{Display, EnumString};
use tracing::info;

use linkmap_collect::{ContractedGraph, FocusSpec, NodeRole};
use linkmap_core::{LinkTable, Palette, PageKind, Result, shape_for_kind};

use crate::dot::{DotBuilder, blend_edge_color};

/// Documentation site every route is appended to.
pub const DOCS_BASE_URL: &str = "https://typst.app/docs";

/// Default node and edge attributes.
const NODE_DEFAULTS: &str = "style=filled, fontcolor=white, fillcolor=black, color=transparent";
const EDGE_DEFAULTS: &str = "color=gray";

/// How much presentation the renderer attaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum RenderMode {
    /// Labels, tooltips and links only
    Plain,
    /// Adds palette fill colors and blended edge colors
    Colored,
    /// Colors plus a shape per content kind
    #[default]
    Shaped,
}

impl RenderMode {
    pub fn colors(self) -> bool {
        matches!(self, Self::Colored | Self::Shaped)
    }

    pub fn shapes(self) -> bool {
        matches!(self, Self::Shaped)
    }
}

/// Options for graph rendering.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub mode: RenderMode,
    /// Prefix for node `href`s
    pub base_url: String,
    /// Graphviz layout engine, e.g. `sfdp`
    pub layout: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            mode: RenderMode::default(),
            base_url: DOCS_BASE_URL.to_string(),
            layout: None,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_layout(mut self, layout: Option<String>) -> Self {
        self.layout = layout;
        self
    }
}

/// Human-readable description of the focus, used as the graph title.
pub fn focus_title(focus: &FocusSpec, table: &LinkTable) -> String {
    match focus.prefixes() {
        None => "All links".to_string(),
        Some(prefixes) => {
            let titles: Vec<&str> = prefixes
                .iter()
                .map(|&p| table.title_of(p).unwrap_or(p))
                .collect();
            format!("Focus: {}", titles.join(", "))
        }
    }
}

/// Renders contracted graphs against the table they were built from.
pub struct Renderer<'a> {
    table: &'a LinkTable,
    palette: &'a Palette,
    options: &'a RenderOptions,
}

impl<'a> Renderer<'a> {
    pub fn new(table: &'a LinkTable, palette: &'a Palette, options: &'a RenderOptions) -> Self {
        Self {
            table,
            palette,
            options,
        }
    }

    /// Display title of a node: the page title, else the raw route.
    fn label<'n>(&self, node: &'n str) -> &'n str
    where
        'a: 'n,
    {
        self.table.title_of(node).unwrap_or(node)
    }

    fn shape(&self, node: &str, role: NodeRole) -> Result<&'static str> {
        match (role, self.table.get(node)) {
            (NodeRole::Page, Some(entry)) => shape_for_kind(&entry.kind),
            _ => Ok(PageKind::Category.shape()),
        }
    }

    /// Every entry must carry a known kind, including entries that end up
    /// folded, ignored or drawn without shapes.
    fn check_kinds(&self) -> Result<()> {
        for (route, entry) in self.table {
            shape_for_kind(&entry.kind).map_err(|e| {
                e.with_operation("render::check_kinds")
                    .with_context("route", route.as_str())
            })?;
        }
        Ok(())
    }

    /// Render the whole graph. Fails without partial output if the table
    /// has an unknown kind or any node cannot be colored.
    pub fn render(&self, graph: &ContractedGraph, focus: &FocusSpec) -> Result<String> {
        let start = Instant::now();
        let mode = self.options.mode;
        self.check_kinds()?;

        let mut dot = DotBuilder::new("links");
        dot.attr("label", &focus_title(focus, self.table))
            .attr("labelloc", "t");
        if let Some(layout) = &self.options.layout {
            dot.attr("layout", layout);
        }
        dot.node_style(NODE_DEFAULTS).edge_style(EDGE_DEFAULTS).blank();

        for (node, role) in graph.nodes() {
            let href = format!("{}{}", self.options.base_url, node);
            let mut attrs = vec![
                ("label", self.label(node)),
                ("tooltip", node),
                ("href", href.as_str()),
            ];
            if mode.colors() {
                attrs.push(("fillcolor", self.palette.decide_color(node)?));
            }
            if mode.shapes() {
                attrs.push(("shape", self.shape(node, role)?));
            }
            dot.node(node, &attrs);
        }

        dot.blank();

        for (from, to) in graph.edges() {
            let tooltip = format!("{} → {}", self.label(from), self.label(to));
            let color = if mode.colors() {
                Some(blend_edge_color(
                    self.palette.decide_color(from)?,
                    self.palette.decide_color(to)?,
                ))
            } else {
                None
            };
            let mut attrs = vec![("tooltip", tooltip.as_str())];
            if let Some(color) = &color {
                attrs.push(("color", color.as_str()));
            }
            dot.edge(from, to, &attrs);
        }

        info!(
            "Graph rendering: {:.2}s ({} nodes, {} edges, mode {})",
            start.elapsed().as_secs_f64(),
            graph.node_count(),
            graph.edge_count(),
            mode
        );

        Ok(dot.build())
    }
}
