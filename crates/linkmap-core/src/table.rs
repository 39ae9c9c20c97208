//! The link table: the persisted contract between catalog building and
//! graph rendering.

use std::collections::btree_map::{self, BTreeMap};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{Error, Result};

/// Catalog record for one route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    pub title: String,
    pub kind: String,
    /// Outbound routes, serialized as a sorted list
    pub out_links: BTreeSet<String>,
}

impl LinkEntry {
    /// Build an entry, dropping any link back to `route` itself.
    pub fn new(
        route: &str,
        title: impl Into<String>,
        kind: impl Into<String>,
        links: impl IntoIterator<Item = String>,
    ) -> Self {
        let mut out_links: BTreeSet<String> = links.into_iter().collect();
        out_links.remove(route);
        Self {
            title: title.into(),
            kind: kind.into(),
            out_links,
        }
    }
}

/// Route → entry map, iterated in route order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkTable {
    entries: BTreeMap<String, LinkEntry>,
}

impl LinkTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the one previously stored under `route`.
    pub fn insert(&mut self, route: impl Into<String>, entry: LinkEntry) -> Option<LinkEntry> {
        self.entries.insert(route.into(), entry)
    }

    pub fn get(&self, route: &str) -> Option<&LinkEntry> {
        self.entries.get(route)
    }

    pub fn contains(&self, route: &str) -> bool {
        self.entries.contains_key(route)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, LinkEntry> {
        self.entries.iter()
    }

    /// Title for a route, if the route has an entry.
    pub fn title_of(&self, route: &str) -> Option<&str> {
        self.get(route).map(|entry| entry.title.as_str())
    }

    /// Total number of outbound links across all entries.
    pub fn link_count(&self) -> usize {
        self.entries.values().map(|e| e.out_links.len()).sum()
    }

    /// Pretty JSON with two-space indentation; non-ASCII is written as-is.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            Error::serialization_failed(e.to_string())
                .with_operation("table::to_json")
                .set_source(e)
        })
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| {
            Error::deserialization_failed(e.to_string())
                .with_operation("table::from_json")
                .set_source(e)
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| Error::from(e).with_context("path", path.display().to_string()))?;
        let table = Self::from_json(&text)
            .map_err(|e| e.with_context("path", path.display().to_string()))?;
        info!(
            path = %path.display(),
            routes = table.len(),
            links = table.link_count(),
            "link table loaded"
        );
        Ok(table)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let text = self.to_json()?;
        fs::write(path, text)
            .map_err(|e| Error::from(e).with_context("path", path.display().to_string()))?;
        info!(path = %path.display(), routes = self.len(), "link table written");
        Ok(())
    }
}

impl<'a> IntoIterator for &'a LinkTable {
    type Item = (&'a String, &'a LinkEntry);
    type IntoIter = btree_map::Iter<'a, String, LinkEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(String, LinkEntry)> for LinkTable {
    fn from_iter<I: IntoIterator<Item = (String, LinkEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
