//! Catalog building: flatten the page tree into a link table.

use std::time::Instant;

use tracing::{info, warn};

use crate::extract::extract_links;
use crate::page::Page;
use crate::table::{LinkEntry, LinkTable};
use crate::{Error, Result};

/// Kind of listing pages whose items count as outbound links.
const CATEGORY_KIND: &str = "category";

/// What to do when two pages claim the same route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Keep the later page, log a warning and record the collision.
    #[default]
    Warn,
    /// Abort with `RouteCollision`.
    Fail,
}

/// Options for catalog building.
#[derive(Debug, Clone, Default)]
pub struct CatalogOptions {
    pub collision_policy: CollisionPolicy,
}

impl CatalogOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }
}

/// A route claimed by more than one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteCollision {
    pub route: String,
    /// Title of the entry that was overwritten
    pub replaced_title: String,
    /// Title of the entry now in the table
    pub kept_title: String,
}

/// Result of a catalog build.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub table: LinkTable,
    pub collisions: Vec<RouteCollision>,
}

impl Catalog {
    pub fn into_table(self) -> LinkTable {
        self.table
    }
}

/// Outbound links of a single page, self-reference removed.
fn page_entry(page: &Page) -> LinkEntry {
    let content = &page.body.content;
    let mut links = extract_links(content);
    if page.body.kind == CATEGORY_KIND {
        links.extend(content.items().iter().map(|item| item.route.clone()));
    }
    LinkEntry::new(&page.route, page.title.clone(), page.body.kind.clone(), links)
}

/// Flatten every root page and its descendants into a link table.
///
/// Each page contributes exactly one entry, regardless of depth.
pub fn build_catalog(pages: &[Page], options: &CatalogOptions) -> Result<Catalog> {
    let start = Instant::now();
    let mut catalog = Catalog::default();

    for root in pages {
        for page in root.flatten() {
            let entry = page_entry(page);
            let kept_title = entry.title.clone();

            let Some(previous) = catalog.table.insert(page.route.clone(), entry) else {
                continue;
            };

            match options.collision_policy {
                CollisionPolicy::Fail => {
                    return Err(Error::route_collision(&page.route)
                        .with_operation("catalog::build_catalog")
                        .with_context("replaced", previous.title)
                        .with_context("kept", kept_title));
                }
                CollisionPolicy::Warn => {
                    warn!(
                        route = %page.route,
                        replaced = %previous.title,
                        kept = %kept_title,
                        "route claimed by more than one page"
                    );
                    catalog.collisions.push(RouteCollision {
                        route: page.route.clone(),
                        replaced_title: previous.title,
                        kept_title,
                    });
                }
            }
        }
    }

    info!(
        "Catalog: {:.2}s ({} routes, {} links, {} collisions)",
        start.elapsed().as_secs_f64(),
        catalog.table.len(),
        catalog.table.link_count(),
        catalog.collisions.len()
    );

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Body, ContentFragment, ContentRecord, ListingItem};
    use linkmap_error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn html_page(route: &str, title: &str, html: &str) -> Page {
        Page {
            route: route.to_string(),
            title: title.to_string(),
            body: Body {
                kind: "html".to_string(),
                content: html.into(),
            },
            children: Vec::new(),
        }
    }

    fn category_page(route: &str, items: &[&str], details: &str) -> Page {
        Page {
            route: route.to_string(),
            title: "Category".to_string(),
            body: Body {
                kind: "category".to_string(),
                content: ContentFragment::Record(ContentRecord {
                    details: details.to_string(),
                    items: items
                        .iter()
                        .map(|r| ListingItem {
                            route: r.to_string(),
                        })
                        .collect(),
                    ..Default::default()
                }),
            },
            children: Vec::new(),
        }
    }

    fn links_of<'a>(table: &'a LinkTable, route: &str) -> Vec<&'a str> {
        table
            .get(route)
            .map(|e| e.out_links.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_every_page_contributes_one_entry() {
        let mut root = html_page("/", "Home", r#"<a href="/a/">a</a>"#);
        let mut a = html_page("/a/", "A", "");
        a.children.push(html_page("/a/deep/", "Deep", r#"<a href="/">home</a>"#));
        root.children.push(a);
        let other = html_page("/other/", "Other", "");

        let catalog = build_catalog(&[root, other], &CatalogOptions::new()).unwrap();
        assert_eq!(catalog.table.len(), 4);
        assert!(catalog.collisions.is_empty());
        assert_eq!(links_of(&catalog.table, "/"), vec!["/a/"]);
        assert_eq!(links_of(&catalog.table, "/a/deep/"), vec!["/"]);
        assert_eq!(catalog.table.get("/a/deep/").unwrap().kind, "html");
    }

    #[test]
    fn test_category_items_are_links() {
        let page = category_page(
            "/reference/math/",
            &["/reference/math/sin/", "/reference/math/cos/"],
            r#"<a href="/reference/math/sin/#x">sin</a>"#,
        );
        let table = build_catalog(&[page], &CatalogOptions::new())
            .unwrap()
            .into_table();
        assert_eq!(
            links_of(&table, "/reference/math/"),
            vec!["/reference/math/cos/", "/reference/math/sin/"]
        );
    }

    #[test]
    fn test_items_ignored_on_non_category_pages() {
        let mut page = category_page("/g/", &["/g/x/"], "");
        page.body.kind = "group".to_string();
        let table = build_catalog(&[page], &CatalogOptions::new())
            .unwrap()
            .into_table();
        assert!(links_of(&table, "/g/").is_empty());
    }

    #[test]
    fn test_self_links_removed() {
        let page = category_page(
            "/cat/",
            &["/cat/", "/cat/child/"],
            r#"<a href="/cat/">me</a><a href="/cat/#top">me again</a>"#,
        );
        let table = build_catalog(&[page], &CatalogOptions::new())
            .unwrap()
            .into_table();
        assert_eq!(links_of(&table, "/cat/"), vec!["/cat/child/"]);
    }

    #[test]
    fn test_collision_is_recorded_and_later_page_wins() {
        let first = html_page("/dup/", "First", "");
        let second = html_page("/dup/", "Second", "");
        let catalog = build_catalog(&[first, second], &CatalogOptions::new()).unwrap();

        assert_eq!(catalog.table.title_of("/dup/"), Some("Second"));
        assert_eq!(
            catalog.collisions,
            vec![RouteCollision {
                route: "/dup/".to_string(),
                replaced_title: "First".to_string(),
                kept_title: "Second".to_string(),
            }]
        );
    }

    #[test]
    fn test_collision_fails_when_strict() {
        let first = html_page("/dup/", "First", "");
        let second = html_page("/dup/", "Second", "");
        let options = CatalogOptions::new().with_collision_policy(CollisionPolicy::Fail);
        let err = build_catalog(&[first, second], &options).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RouteCollision);
        assert_eq!(err.context_value("route"), Some("/dup/"));
    }

    #[test]
    fn test_rebuild_is_byte_identical() {
        let build = || {
            let mut root = category_page("/r/", &["/r/b/", "/r/a/"], "");
            root.children.push(html_page("/r/a/", "A", r#"<a href="/r/b/">b</a>"#));
            root.children.push(html_page("/r/b/", "B", r#"<a href="/r/a/">a</a>"#));
            build_catalog(&[root], &CatalogOptions::new())
                .unwrap()
                .table
                .to_json()
                .unwrap()
        };
        assert_eq!(build(), build());
    }
}
