//! Link extraction from rendered documentation content.
//!
//! Extraction is a regex match over anchor tags, not an HTML parser. Only
//! `<a ... href="/...">` targets are recognized; a malformed or unterminated
//! anchor yields no match for that occurrence. Changing this to a real
//! parser would change which links are discovered.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::page::ContentFragment;

/// `<a href="/xxx/">` with an optional `#fragment`, which is not captured.
static ANCHOR_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a[^>]+href=["'](/[^"'#]+)(?:#[^"']+)?["']"#)
        .unwrap_or_else(|e| panic!("invalid anchor pattern: {e}"))
});

/// Site-relative link targets in one markup string.
pub fn extract_markup_links(html: &str) -> BTreeSet<String> {
    ANCHOR_HREF
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Site-relative link targets anywhere in a fragment, nested records included.
pub fn extract_links(fragment: &ContentFragment) -> BTreeSet<String> {
    fragment
        .markups()
        .into_iter()
        .flat_map(extract_markup_links)
        .collect()
}
