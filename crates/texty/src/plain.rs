//! Plain-text fallback.
//!
//! A structure-only rendering for destinations that cannot read the rich-text
//! payload: bulleted, indented list items and one line per paragraph.

use scraper::ElementRef;

use crate::html::{parse_html, tag_name};
use crate::service::TextyOptions;
use crate::utilities::{is_heading, is_list_container, is_non_content};

/// Render HTML as indented bullets and paragraphs
pub fn to_plain_text(html: &str, options: &TextyOptions) -> String {
    let document = parse_html(html);
    let mut out = String::new();
    walk(&document.root_element(), 0, options, &mut out);
    out
}

/// `depth` counts the list containers entered so far
fn walk(element: &ElementRef, depth: usize, options: &TextyOptions, out: &mut String) {
    for child in element.children().filter_map(ElementRef::wrap) {
        let tag = tag_name(&child);
        match tag {
            _ if is_list_container(tag) => walk(&child, depth + 1, options, out),
            "li" => {
                // the outermost list sits at column zero
                out.push_str(&options.plain_indent.repeat(depth.saturating_sub(1)));
                out.push_str(&options.plain_bullet);
                out.push_str(item_text(&child).trim());
                out.push('\n');
                walk_nested_lists(&child, depth, options, out);
            }
            "p" => push_line(&child, out),
            _ if is_heading(tag) => push_line(&child, out),
            "br" => out.push('\n'),
            _ if is_non_content(tag) => {}
            _ => walk(&child, depth, options, out),
        }
    }
}

fn push_line(element: &ElementRef, out: &mut String) {
    let text: String = element.text().collect();
    out.push_str(text.trim());
    out.push('\n');
}

/// Visit only the list containers below a list item
fn walk_nested_lists(element: &ElementRef, depth: usize, options: &TextyOptions, out: &mut String) {
    for child in element.children().filter_map(ElementRef::wrap) {
        if is_list_container(tag_name(&child)) {
            walk(&child, depth + 1, options, out);
        } else {
            walk_nested_lists(&child, depth, options, out);
        }
    }
}

/// Text of a list item, excluding its nested lists
fn item_text(element: &ElementRef) -> String {
    let mut text = String::new();
    collect_item_text(element, &mut text);
    text
}

fn collect_item_text(element: &ElementRef, text: &mut String) {
    for child in element.children() {
        if let Some(child) = ElementRef::wrap(child) {
            let tag = tag_name(&child);
            if !is_list_container(tag) && !is_non_content(tag) {
                collect_item_text(&child, text);
            }
        } else if let Some(fragment) = child.value().as_text() {
            text.push_str(fragment);
        }
    }
}
