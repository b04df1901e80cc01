//! Adapter for HTML copied out of Google Docs.
//!
//! Docs marks list depth with `aria-level` on every `<li>`, routes outbound
//! links through `https://www.google.com/url?q=...`, and wraps the whole
//! clipboard fragment in `<b id="docs-internal-guid-..." style="font-weight:normal">`.

use percent_encoding::percent_decode_str;
use scraper::ElementRef;

use super::{count_list_ancestors, SiteAdapter};
use crate::html::tag_name;

const REDIRECT_PREFIXES: &[&str] = &[
    "https://www.google.com/url?",
    "http://www.google.com/url?",
    "https://google.com/url?",
];

const WRAPPER_ID_PREFIX: &str = "docs-internal-guid";

#[derive(Debug, Clone, Copy, Default)]
pub struct GoogleDocsAdapter;

impl SiteAdapter for GoogleDocsAdapter {
    fn list_level(&self, element: &ElementRef) -> u32 {
        element
            .value()
            .attr("aria-level")
            .and_then(|level| level.trim().parse::<u32>().ok())
            .filter(|level| *level >= 1)
            .unwrap_or_else(|| count_list_ancestors(element))
    }

    fn resolve_link(&self, href: &str) -> String {
        let href = href.trim();
        let Some(query) = REDIRECT_PREFIXES
            .iter()
            .find_map(|prefix| href.strip_prefix(prefix))
        else {
            return href.to_string();
        };

        query
            .split('&')
            .find_map(|pair| pair.strip_prefix("q="))
            .map(decode_query_value)
            .filter(|target| !target.is_empty())
            .unwrap_or_else(|| href.to_string())
    }

    fn is_non_semantic_wrapper(&self, element: &ElementRef, _style: &str) -> bool {
        tag_name(element) == "b"
            && element
                .value()
                .id()
                .is_some_and(|id| id.starts_with(WRAPPER_ID_PREFIX))
    }
}

fn decode_query_value(value: &str) -> String {
    let value = value.replace('+', " ");
    percent_decode_str(&value).decode_utf8_lossy().into_owned()
}
