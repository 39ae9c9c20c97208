//! Core types for graph contraction.

use std::collections::{BTreeMap, BTreeSet};

/// Prefixes rendered at full resolution in overview mode.
pub const OVERVIEW_PREFIXES: [&str; 2] = ["/tutorial/", "/guides/"];

// Focus Spec

/// Which routes are drawn at full resolution.
///
/// Routes outside the focus are folded onto their palette category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FocusSpec {
    /// No folding at all
    #[default]
    All,
    /// Focus on the tutorial and guides
    Overview,
    /// Focus on an explicit list of prefixes
    Prefixes(Vec<String>),
}

impl FocusSpec {
    /// Interpret positional command-line arguments.
    ///
    /// No arguments or the single token `all` select [`FocusSpec::All`],
    /// the single token `overview` selects [`FocusSpec::Overview`], and
    /// anything else is taken verbatim as a list of route prefixes.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        let args: Vec<&str> = args.iter().map(|a| a.as_ref()).collect();
        match args.as_slice() {
            [] | ["all"] => Self::All,
            ["overview"] => Self::Overview,
            prefixes => Self::Prefixes(prefixes.iter().map(|p| p.to_string()).collect()),
        }
    }

    /// Focus prefixes, or `None` when nothing is folded.
    pub fn prefixes(&self) -> Option<Vec<&str>> {
        match self {
            Self::All => None,
            Self::Overview => Some(OVERVIEW_PREFIXES.to_vec()),
            Self::Prefixes(prefixes) => Some(prefixes.iter().map(String::as_str).collect()),
        }
    }

    /// Whether `route` is rendered at full resolution.
    pub fn is_focused(&self, route: &str) -> bool {
        match self {
            Self::All => true,
            Self::Overview => OVERVIEW_PREFIXES.iter().any(|p| route.starts_with(p)),
            Self::Prefixes(prefixes) => prefixes.iter().any(|p| route.starts_with(p.as_str())),
        }
    }

    /// Whether edges with no focused endpoint are suppressed.
    ///
    /// Only an explicit prefix list does this; overview keeps them.
    pub fn drops_background_edges(&self) -> bool {
        matches!(self, Self::Prefixes(_))
    }
}

// Contracted Graph

/// How a node came to be in the contracted graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    /// A route drawn as itself
    Page,
    /// A category prefix that other routes were folded onto
    Category,
}

/// Reduced graph: unique nodes and deduplicated edges without self-loops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractedGraph {
    pub(crate) nodes: BTreeMap<String, NodeRole>,
    pub(crate) edges: BTreeSet<(String, String)>,
}

impl ContractedGraph {
    pub fn nodes(&self) -> impl Iterator<Item = (&str, NodeRole)> {
        self.nodes.iter().map(|(id, role)| (id.as_str(), *role))
    }

    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.edges.iter().map(|(from, to)| (from.as_str(), to.as_str()))
    }

    pub fn contains_node(&self, node: &str) -> bool {
        self.nodes.contains_key(node)
    }

    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.edges.contains(&(from.to_string(), to.to_string()))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
