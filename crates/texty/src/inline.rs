//! Inline formatter.
//!
//! Flattens an element's descendants into text operations, carrying the
//! formatting of every ancestor tag and style down to each text run.

use scraper::{ElementRef, Node};
use texty_core::{Attributes, Op};
use tracing::trace;

use crate::adapter::SiteAdapter;
use crate::extract::{style_attributes, tag_attributes};
use crate::html::{style_of, tag_name};
use crate::utilities::{is_block, is_list_container, is_non_content};

/// How text nodes are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextMode {
    /// Drop whitespace-only runs and trim the rest
    #[default]
    Trimmed,
    /// Emit text verbatim; `<br>` and block boundaries become `"\n"` runs
    Preserved,
}

/// Format the children of `element` into inline operations.
///
/// Nested `ul`/`ol` are skipped: list items are always produced by the
/// list-item handler.
pub fn format(
    element: &ElementRef,
    adapter: &dyn SiteAdapter,
    inherited: &Attributes,
    mode: TextMode,
) -> Vec<Op> {
    let mut ops = Vec::new();
    format_into(element, adapter, inherited, mode, &mut ops);
    ops
}

fn format_into(
    element: &ElementRef,
    adapter: &dyn SiteAdapter,
    inherited: &Attributes,
    mode: TextMode,
    ops: &mut Vec<Op>,
) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => push_text(text, inherited, mode, ops),
            Node::Element(_) => {
                let Some(child) = ElementRef::wrap(child) else {
                    continue;
                };
                let tag = tag_name(&child);

                if is_list_container(tag) {
                    trace!(tag, "skipping nested list in inline content");
                    continue;
                }
                if is_non_content(tag) {
                    continue;
                }
                if tag == "br" {
                    if mode == TextMode::Preserved {
                        ops.push(Op::newline());
                    }
                    continue;
                }

                let style = style_of(&child);
                let attributes = inherited
                    .clone()
                    .merged(&tag_attributes(tag, &child, style, adapter))
                    .merged(&style_attributes(style));

                let block = mode == TextMode::Preserved && is_block(tag);
                if block {
                    ops.push(Op::newline());
                }
                format_into(&child, adapter, &attributes, mode, ops);
                if block {
                    ops.push(Op::newline());
                }
            }
            _ => {}
        }
    }
}

fn push_text(text: &str, attributes: &Attributes, mode: TextMode, ops: &mut Vec<Op>) {
    let text = match mode {
        TextMode::Trimmed => text.trim(),
        TextMode::Preserved => text,
    };
    if text.is_empty() {
        return;
    }
    ops.push(Op::insert_with(text, attributes.clone()));
}
