//! Documentation page tree as produced by the docs build.

use serde::{Deserialize, Serialize};

/// A node in the documentation tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Site-relative route, e.g. `/reference/math/sin/`
    pub route: String,
    pub title: String,
    pub body: Body,
    #[serde(default)]
    pub children: Vec<Page>,
}

/// Page body: a `kind` tag plus a payload whose shape depends on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub kind: String,
    pub content: ContentFragment,
}

/// One piece of rendered documentation content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentFragment {
    /// Raw HTML markup
    Markup(String),
    /// Structured documentation record with nested fragments
    Record(ContentRecord),
}

/// Structured content of function, type, group and category pages.
///
/// Unknown fields in the input are ignored; missing collections are empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<ContentFragment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scope: Vec<ContentFragment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<ContentFragment>,
    /// Listing entries of a category page
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ListingItem>,
}

/// Entry of a category listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingItem {
    pub route: String,
}

impl Page {
    /// Collect this page and all of its descendants.
    ///
    /// Only membership is meaningful; the order siblings come out in is not.
    pub fn flatten(&self) -> Vec<&Page> {
        let mut pages = Vec::new();
        let mut stack = vec![self];
        while let Some(page) = stack.pop() {
            pages.push(page);
            stack.extend(page.children.iter());
        }
        pages
    }
}

impl ContentFragment {
    /// Collect every markup string reachable from this fragment.
    ///
    /// A missing `description` contributes nothing. Strings may be empty.
    pub fn markups(&self) -> Vec<&str> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(fragment) = stack.pop() {
            match fragment {
                ContentFragment::Markup(html) => out.push(html.as_str()),
                ContentFragment::Record(record) => {
                    out.push(record.details.as_str());
                    if let Some(description) = &record.description {
                        out.push(description.as_str());
                    }
                    for nested in [&record.params, &record.scope, &record.functions] {
                        stack.extend(nested.iter());
                    }
                }
            }
        }
        out
    }

    /// Listing entries, present only on category records.
    pub fn items(&self) -> &[ListingItem] {
        match self {
            ContentFragment::Record(record) => &record.items,
            ContentFragment::Markup(_) => &[],
        }
    }
}

impl From<&str> for ContentFragment {
    fn from(html: &str) -> Self {
        ContentFragment::Markup(html.to_string())
    }
}
