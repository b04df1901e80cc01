//! Adapter for plain HTML without source-specific conventions.

use scraper::ElementRef;

use super::{count_list_ancestors, SiteAdapter};

/// Nesting from list-container ancestry, links verbatim, no wrappers
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericAdapter;

impl SiteAdapter for GenericAdapter {
    fn list_level(&self, element: &ElementRef) -> u32 {
        count_list_ancestors(element)
    }

    fn resolve_link(&self, href: &str) -> String {
        href.trim().to_string()
    }

    fn is_non_semantic_wrapper(&self, _element: &ElementRef, _style: &str) -> bool {
        false
    }
}
