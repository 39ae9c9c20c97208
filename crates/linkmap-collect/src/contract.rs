//! Graph contraction: fold unfocused routes onto their category prefix.

use std::collections::btree_map::Entry;
use std::time::Instant;

use tracing::{debug, info};

use linkmap_core::{LinkTable, Palette, Result, should_ignore};

use crate::types::{ContractedGraph, FocusSpec, NodeRole};

/// Folds routes according to a focus and a palette.
pub struct Contractor<'a> {
    focus: &'a FocusSpec,
    palette: &'a Palette,
}

impl<'a> Contractor<'a> {
    pub fn new(focus: &'a FocusSpec, palette: &'a Palette) -> Self {
        Self { focus, palette }
    }

    /// Node a route is drawn as: itself when focused, otherwise the first
    /// palette prefix it matches.
    pub fn fold(&self, route: &str) -> Result<String> {
        if self.focus.is_focused(route) {
            return Ok(route.to_string());
        }
        self.palette
            .category_of(route)
            .map(str::to_string)
            .map_err(|e| e.with_operation("contract::fold"))
    }

    /// Fold `route`, or `None` when it or its folded form is ignored.
    ///
    /// The unfolded route is checked first, so an ignored page never
    /// reaches the graph through its category.
    fn visible_fold(&self, route: &str) -> Result<Option<String>> {
        if should_ignore(route) {
            return Ok(None);
        }
        let folded = self.fold(route)?;
        if should_ignore(&folded) {
            return Ok(None);
        }
        Ok(Some(folded))
    }

    pub fn contract(&self, table: &LinkTable) -> Result<ContractedGraph> {
        let start = Instant::now();
        let mut graph = ContractedGraph::default();

        for (route, _) in table {
            let Some(folded) = self.visible_fold(route)? else {
                continue;
            };
            let role = if folded == *route {
                NodeRole::Page
            } else {
                NodeRole::Category
            };
            match graph.nodes.entry(folded) {
                Entry::Vacant(slot) => {
                    slot.insert(role);
                }
                Entry::Occupied(mut slot) => {
                    if role == NodeRole::Category {
                        slot.insert(NodeRole::Category);
                    }
                }
            }
        }

        let mut dangling = 0usize;
        let mut background = 0usize;
        for (src, entry) in table {
            let Some(from) = self.visible_fold(src)? else {
                continue;
            };
            for dst in &entry.out_links {
                if !table.contains(dst) {
                    dangling += 1;
                    continue;
                }
                let Some(to) = self.visible_fold(dst)? else {
                    continue;
                };
                if from == to {
                    continue;
                }
                if self.focus.drops_background_edges()
                    && !self.focus.is_focused(src)
                    && !self.focus.is_focused(dst)
                {
                    background += 1;
                    continue;
                }
                graph.edges.insert((from.clone(), to));
            }
        }

        if dangling > 0 {
            debug!(dangling, "dropped links to routes missing from the table");
        }
        if background > 0 {
            debug!(background, "dropped links between unfocused routes");
        }

        info!(
            "Contraction: {:.2}s ({} nodes, {} edges)",
            start.elapsed().as_secs_f64(),
            graph.node_count(),
            graph.edge_count()
        );

        Ok(graph)
    }
}

/// Contract a link table under `focus`.
pub fn contract(table: &LinkTable, focus: &FocusSpec, palette: &Palette) -> Result<ContractedGraph> {
    Contractor::new(focus, palette).contract(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkmap_core::{ErrorKind, LinkEntry};
    use pretty_assertions::assert_eq;

    fn table(entries: &[(&str, &str, &[&str])]) -> LinkTable {
        entries
            .iter()
            .map(|(route, kind, links)| {
                (
                    route.to_string(),
                    LinkEntry::new(
                        route,
                        route.trim_matches('/'),
                        *kind,
                        links.iter().map(|l| l.to_string()),
                    ),
                )
            })
            .collect()
    }

    fn docs_table() -> LinkTable {
        table(&[
            ("/tutorial/", "page", &["/tutorial/writing/", "/reference/math/sin/"]),
            ("/tutorial/writing/", "page", &["/reference/math/cos/", "/reference/text/"]),
            ("/reference/math/", "category", &["/reference/math/sin/", "/reference/math/cos/"]),
            ("/reference/math/sin/", "func", &["/reference/math/cos/", "/reference/text/"]),
            ("/reference/math/cos/", "func", &["/reference/math/sin/"]),
            ("/reference/text/", "category", &["/reference/math/"]),
        ])
    }

    fn edges(graph: &ContractedGraph) -> Vec<(&str, &str)> {
        graph.edges().collect()
    }

    #[test]
    fn test_all_mode_keeps_every_route() {
        let graph = contract(&docs_table(), &FocusSpec::All, &Palette::default()).unwrap();
        assert_eq!(graph.node_count(), 6);
        assert!(graph.nodes().all(|(_, role)| role == NodeRole::Page));
        assert!(graph.contains_edge("/reference/math/sin/", "/reference/math/cos/"));
        assert!(graph.contains_edge("/reference/text/", "/reference/math/"));
    }

    #[test]
    fn test_focus_folds_to_category_prefix() {
        let focus = FocusSpec::from_args(&["/tutorial/"]);
        let graph = contract(&docs_table(), &focus, &Palette::default()).unwrap();

        let nodes: Vec<(&str, NodeRole)> = graph.nodes().collect();
        assert_eq!(
            nodes,
            vec![
                ("/reference/math/", NodeRole::Category),
                ("/reference/text/", NodeRole::Page),
                ("/tutorial/", NodeRole::Page),
                ("/tutorial/writing/", NodeRole::Page),
            ]
        );
        assert_eq!(
            edges(&graph),
            vec![
                ("/tutorial/", "/reference/math/"),
                ("/tutorial/", "/tutorial/writing/"),
                ("/tutorial/writing/", "/reference/math/"),
                ("/tutorial/writing/", "/reference/text/"),
            ]
        );
        assert!(graph.edges().all(|(from, to)| from != to));
    }

    #[test]
    fn test_focus_drops_background_edges() {
        let focus = FocusSpec::from_args(&["/tutorial/"]);
        let focused = contract(&docs_table(), &focus, &Palette::default()).unwrap();
        // math ⇄ text only involves unfocused routes
        assert!(!focused.contains_edge("/reference/math/", "/reference/text/"));
        assert!(!focused.contains_edge("/reference/text/", "/reference/math/"));

        let all = contract(&docs_table(), &FocusSpec::All, &Palette::default()).unwrap();
        assert!(all.contains_edge("/reference/math/sin/", "/reference/text/"));
        assert!(all.contains_edge("/reference/text/", "/reference/math/"));
    }

    #[test]
    fn test_overview_keeps_background_edges() {
        let graph = contract(&docs_table(), &FocusSpec::Overview, &Palette::default()).unwrap();
        assert!(graph.contains_node("/tutorial/writing/"));
        assert!(graph.contains_edge("/reference/math/", "/reference/text/"));
        assert!(graph.contains_edge("/reference/text/", "/reference/math/"));
        // sin → cos folds onto a single node and disappears
        assert!(!graph.contains_edge("/reference/math/", "/reference/math/"));
    }

    #[test]
    fn test_ignored_routes_excluded() {
        let table = table(&[
            ("/reference/html/", "category", &["/reference/html/div/attr/", "/reference/html/elem/div/"]),
            ("/reference/html/div/attr/", "html", &["/reference/html/"]),
            ("/reference/html/elem/div/", "html", &["/reference/html/"]),
            ("/changelog/0.1/", "page", &["/reference/html/"]),
        ]);
        let graph = contract(&table, &FocusSpec::All, &Palette::default()).unwrap();

        assert!(!graph.contains_node("/reference/html/div/attr/"));
        assert!(!graph.contains_node("/changelog/0.1/"));
        assert!(graph.contains_node("/reference/html/elem/div/"));
        assert_eq!(
            edges(&graph),
            vec![
                ("/reference/html/", "/reference/html/elem/div/"),
                ("/reference/html/elem/div/", "/reference/html/"),
            ]
        );
    }

    #[test]
    fn test_ignored_source_dropped_before_folding() {
        let table = table(&[
            ("/changelog/0.1/", "page", &["/tutorial/"]),
            ("/tutorial/", "page", &[]),
        ]);
        // The changelog page would fold to "/" under this focus.
        let focus = FocusSpec::from_args(&["/tutorial/"]);
        let graph = contract(&table, &focus, &Palette::default()).unwrap();
        assert!(!graph.contains_node("/"));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_two_node_cycle() {
        let table = table(&[("/a/", "func", &["/b/"]), ("/b/", "func", &["/a/"])]);
        let palette = Palette::new([("/", "#808080")]);
        let graph = contract(&table, &FocusSpec::All, &palette).unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(edges(&graph), vec![("/a/", "/b/"), ("/b/", "/a/")]);
    }

    #[test]
    fn test_dangling_links_dropped() {
        let table = table(&[("/a/", "func", &["/missing/"])]);
        let graph = contract(&table, &FocusSpec::All, &Palette::default()).unwrap();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_dangling_links_dropped_under_every_focus() {
        let table = table(&[
            ("/tutorial/", "page", &["/reference/math/missing/", "/reference/math/"]),
            ("/reference/math/", "category", &[]),
        ]);
        let focus = FocusSpec::from_args(&["/tutorial/"]);
        for focus in [FocusSpec::All, FocusSpec::Overview, focus] {
            let graph = contract(&table, &focus, &Palette::default()).unwrap();
            assert_eq!(
                edges(&graph),
                vec![("/tutorial/", "/reference/math/")],
                "focus {focus:?}"
            );
        }
    }

    #[test]
    fn test_unclassifiable_route_fails() {
        let table = table(&[("/a/", "func", &[]), ("/b/", "func", &[])]);
        let palette = Palette::new([("/a/", "#ffffff")]);
        let focus = FocusSpec::from_args(&["/a/"]);
        let err = contract(&table, &focus, &palette).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoMatchingPrefix);
        assert_eq!(err.operation(), "contract::fold");
    }
}
