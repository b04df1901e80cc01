//! # texty
//!
//! Convert copied HTML into Delta-style rich-text operations.
//!
//! Chat clients import pasted HTML poorly: nested lists flatten, quotes and
//! code blocks vanish. This crate rebuilds the clipboard payload in the
//! client's own rich-text format so that structure survives the paste.
//!
//! ## Design
//!
//! ```text
//! HTML ──parse──▶ element cursor ──▶ block handlers ──▶ Delta
//!                                     │        ▲
//!                                     ▼        │
//!                              inline formatter ◀── site adapter
//! ```
//!
//! - **Block handlers** claim block elements (quote, code, list item,
//!   paragraph, heading, container) in a fixed order; the first match wins.
//! - **The inline formatter** flattens a block's content into text runs,
//!   inheriting formatting from tags and inline styles.
//! - **A site adapter** supplies source-specific facts such as list depth and
//!   redirect-wrapped links.
//!
//! Conversion is a pure function of the HTML and the adapter. Nothing is
//! cached between calls.
//!
//! ## Example
//!
//! ```rust
//! use texty::{TextyService, Op, Attributes, ListKind};
//!
//! let service = TextyService::new();
//! let delta = service.convert("<ul><li>Item 1</li></ul>");
//!
//! assert_eq!(
//!     delta.ops,
//!     vec![
//!         Op::insert("Item 1"),
//!         Op::block_newline(Attributes::list(ListKind::Bullet, 1)),
//!     ]
//! );
//! assert_eq!(service.to_plain_text("<ul><li>Item 1</li></ul>"), "• Item 1\n");
//! ```

pub mod adapter;
mod extract;
pub mod html;
mod handlers;
mod inline;
mod plain;
mod service;
mod utilities;

pub use adapter::{GenericAdapter, GoogleDocsAdapter, SiteAdapter};
pub use extract::{cancels_bold, style_attributes, tag_attributes};
pub use handlers::{builtin_handlers, Context, Filter, Handler, Handlers, ProduceFn};
pub use html::{parse_html, ElementCursor};
pub use inline::{format as format_inline, TextMode};
pub use service::{
    contains_list_item, dispatch, ClipboardPayload, Prefilter, TextyOptions, TextyService,
};
pub use texty_core::{
    from_json, to_json, to_json_pretty, Attributes, Delta, DeltaError, ListKind, Op,
};
pub use utilities::*;

/// Convert HTML to rich-text operations with default options
pub fn convert_to_texty(html: &str, adapter: &dyn SiteAdapter) -> Delta {
    dispatch(html, adapter, &Handlers::new(), &TextyOptions::default())
}

/// Convert HTML to the plain-text fallback with default options
pub fn convert_to_plain_text(html: &str) -> String {
    plain::to_plain_text(html, &TextyOptions::default())
}

/// Error type for texty operations
#[derive(Debug, thiserror::Error)]
pub enum TextyError {
    #[error("Delta error: {0}")]
    Delta(#[from] DeltaError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, TextyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_to_texty_uses_adapter() {
        let html = r#"<ul><li aria-level="2">deep</li></ul>"#;
        let generic = convert_to_texty(html, &GenericAdapter);
        let docs = convert_to_texty(html, &GoogleDocsAdapter);
        assert_eq!(generic.ops[1].attributes_or_default().indent, 0);
        assert_eq!(docs.ops[1].attributes_or_default().indent, 1);
    }

    #[test]
    fn test_convert_to_plain_text() {
        assert_eq!(convert_to_plain_text("<p>a</p><ol><li>b</li></ol>"), "a\n• b\n");
    }

    #[test]
    fn test_structural_invariant_holds() {
        let html = concat!(
            "<h1>T</h1><blockquote>q <b>b</b>\nr</blockquote>",
            "<pre><code>x\n\ny</code></pre>",
            "<ol><li><i>a</i><ul><li><a href=\"https://e.x\">b</a></li></ul></li></ol>",
            "<div><s>gone</s></div>"
        );
        let delta = convert_to_texty(html, &GenericAdapter);
        assert!(!delta.is_empty());
        for op in &delta {
            let attributes = op.attributes_or_default();
            if attributes.has_block() {
                assert_eq!(op.text, "\n");
            }
            if let Some(attributes) = &op.attributes {
                assert!(!attributes.is_empty());
            }
        }
    }
}
