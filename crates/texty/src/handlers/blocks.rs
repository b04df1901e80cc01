//! Built-in block handlers.
//!
//! Order matters: the dispatcher uses the first match, so quotes and code
//! blocks are registered before the generic paragraph and container cases.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Node};
use texty_core::{Attributes, ListKind, Op};

use super::blockquote::quote_lines;
use super::{Filter, Handler};
use crate::html::{has_ancestor, has_direct_text, parent_element, style_of, tag_name, text_content};
use crate::inline::TextMode;
use crate::utilities::HEADINGS;

static ORDERED_LIST_STYLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)list-style(?:-type)?\s*:\s*(?:decimal|decimal-leading-zero|lower-alpha|upper-alpha|lower-latin|upper-latin|lower-roman|upper-roman|lower-greek|armenian|georgian|hebrew|cjk-ideographic|hiragana|katakana)\b",
    )
    .expect("valid ordered list-style pattern")
});

/// Create all built-in handlers, keyed by name, in match order
pub fn builtin_handlers() -> Vec<(&'static str, Handler)> {
    vec![
        ("blockquote", blockquote_handler()),
        ("code_block", code_block_handler()),
        ("list_item", list_item_handler()),
        ("paragraph", paragraph_handler()),
        ("heading", heading_handler()),
        ("container", container_handler()),
    ]
}

/// Content operations followed by a plain newline, or nothing when empty
fn terminated(mut content: Vec<Op>) -> Vec<Op> {
    if content.is_empty() {
        return content;
    }
    content.push(Op::newline());
    content
}

fn blockquote_handler() -> Handler {
    Handler::new(
        Filter::predicate(|tag, element, _| tag == "blockquote" && !has_ancestor(element, &["li"])),
        |element, ctx| {
            ctx.skip_subtree();
            quote_lines(&ctx.format(element, TextMode::Preserved))
        },
    )
}

// A `pre` inside a list item is already part of the item's text.
fn code_block_handler() -> Handler {
    Handler::new(
        Filter::predicate(|tag, element, _| tag == "pre" && !has_ancestor(element, &["li"])),
        |element, ctx| {
            ctx.skip_subtree();

            let source = element
                .descendants()
                .filter_map(ElementRef::wrap)
                .find(|e| tag_name(e) == "code")
                .unwrap_or(*element);
            let code = text_content(&source);
            let code = code.trim_end();
            if code.trim().is_empty() {
                return Vec::new();
            }

            let mut ops = Vec::new();
            for line in code.split('\n') {
                let line = line.trim_end_matches('\r');
                if !line.is_empty() {
                    ops.push(Op::insert(line));
                }
                ops.push(Op::block_newline(Attributes::code_block()));
            }
            ops
        },
    )
}

fn list_item_handler() -> Handler {
    Handler::for_tag("li", |element, ctx| {
        // Nested lists stay visible to the dispatcher; no skip here.
        let content = ctx.format(element, TextMode::Trimmed);
        if content.is_empty() {
            return content;
        }

        let level = ctx.adapter().list_level(element).max(1);
        let mut ops = content;
        ops.push(Op::block_newline(Attributes::list(list_kind(element), level)));
        ops
    })
}

fn list_kind(element: &ElementRef) -> ListKind {
    let parent = parent_element(element);
    let ordered = parent.is_some_and(|p| tag_name(&p) == "ol")
        || ORDERED_LIST_STYLE.is_match(style_of(element))
        || parent.is_some_and(|p| ORDERED_LIST_STYLE.is_match(style_of(&p)));

    if ordered {
        ListKind::Ordered
    } else {
        ListKind::Bullet
    }
}

fn paragraph_handler() -> Handler {
    Handler::new(
        Filter::predicate(|tag, element, _| tag == "p" && !has_ancestor(element, &["li"])),
        |element, ctx| {
            ctx.skip_subtree();
            terminated(ctx.format(element, TextMode::Trimmed))
        },
    )
}

// Heading levels are dropped; the destination has no heading concept.
fn heading_handler() -> Handler {
    Handler::new(
        Filter::predicate(|tag, element, _| {
            HEADINGS.contains(&tag) && !has_ancestor(element, &["li"])
        }),
        |element, ctx| {
            ctx.skip_subtree();
            terminated(ctx.format(element, TextMode::Trimmed))
        },
    )
}

fn container_handler() -> Handler {
    Handler::new(
        Filter::predicate(|tag, element, options| {
            options.container_tags.iter().any(|t| t == tag)
                && !has_ancestor(element, &["li", "p"])
                && (has_direct_text(element) || has_inline_child(element, &options.inline_tags))
        }),
        |element, ctx| {
            ctx.skip_subtree();
            terminated(ctx.format(element, TextMode::Trimmed))
        },
    )
}

fn has_inline_child(element: &ElementRef, inline_tags: &[String]) -> bool {
    element.children().any(|child| match child.value() {
        Node::Element(e) => inline_tags.iter().any(|t| t == e.name()),
        _ => false,
    })
}
