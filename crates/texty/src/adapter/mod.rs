//! Site adapters.
//!
//! A [`SiteAdapter`] supplies the source-document semantics the converter
//! cannot infer from markup alone. One adapter exists per source; the
//! converter never knows which one it was handed.

mod generic;
mod google_docs;

pub use generic::GenericAdapter;
pub use google_docs::GoogleDocsAdapter;

use scraper::ElementRef;

use crate::html::tag_name;
use crate::utilities::is_list_container;

/// Source-document capabilities consulted during conversion
pub trait SiteAdapter: Send + Sync {
    /// 1-based nesting level of a list item
    fn list_level(&self, element: &ElementRef) -> u32;

    /// Final target of a hyperlink, unwrapping redirect wrappers
    fn resolve_link(&self, href: &str) -> String;

    /// True for elements that look formatted in markup but are not
    /// author-intended formatting
    fn is_non_semantic_wrapper(&self, element: &ElementRef, style: &str) -> bool;
}

/// Number of `ul`/`ol` ancestors of an element, at least 1
pub fn count_list_ancestors(element: &ElementRef) -> u32 {
    let depth = element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .filter(|ancestor| is_list_container(tag_name(ancestor)))
        .count();
    u32::try_from(depth).unwrap_or(u32::MAX).max(1)
}
