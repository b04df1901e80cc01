//! HTML parsing and traversal support.
//!
//! Clipboard HTML is parsed as a fragment; the returned document's root
//! element plays the role of `<body>`. [`ElementCursor`] walks every element
//! below it in document order and can be told to jump past the subtree of
//! the element it last returned.

use scraper::{ElementRef, Html, Node};

/// Parse an HTML string as a fragment.
///
/// # Example
///
/// ```rust
/// use texty::parse_html;
///
/// let document = parse_html("<p>Hello <em>World</em></p>");
/// assert_eq!(document.root_element().value().name(), "html");
/// ```
pub fn parse_html(html: &str) -> Html {
    Html::parse_fragment(html)
}

/// Forward-only cursor over element nodes in document order.
///
/// Text and comment nodes are stepped over. Calling
/// [`ElementCursor::skip_subtree`] after [`Iterator::next`] makes the cursor
/// continue after the descendants of the element just returned.
#[derive(Debug, Clone)]
pub struct ElementCursor<'a> {
    root: ElementRef<'a>,
    next: Option<ElementRef<'a>>,
    last: Option<ElementRef<'a>>,
}

impl<'a> ElementCursor<'a> {
    /// Start a walk at `root` (which is itself visited first)
    pub fn new(root: ElementRef<'a>) -> Self {
        Self {
            root,
            next: Some(root),
            last: None,
        }
    }

    /// Do not descend into the element most recently returned
    pub fn skip_subtree(&mut self) {
        if let Some(last) = self.last {
            self.next = self.following(last);
        }
    }

    /// Next element in document order that is not a descendant of `element`
    fn following(&self, element: ElementRef<'a>) -> Option<ElementRef<'a>> {
        let mut current = element;
        loop {
            if current == self.root {
                return None;
            }
            if let Some(sibling) = current.next_siblings().find_map(ElementRef::wrap) {
                return Some(sibling);
            }
            current = current.parent().and_then(ElementRef::wrap)?;
        }
    }

    fn first_child(element: ElementRef<'a>) -> Option<ElementRef<'a>> {
        element.children().find_map(ElementRef::wrap)
    }
}

impl<'a> Iterator for ElementCursor<'a> {
    type Item = ElementRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = Self::first_child(current).or_else(|| self.following(current));
        self.last = Some(current);
        Some(current)
    }
}

/// Lowercase tag name of an element
pub fn tag_name<'a>(element: &ElementRef<'a>) -> &'a str {
    element.value().name()
}

/// The element's `style` attribute, or an empty string
pub fn style_of<'a>(element: &ElementRef<'a>) -> &'a str {
    element.value().attr("style").unwrap_or("")
}

/// Parent element, if the parent is an element
pub fn parent_element<'a>(element: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    element.parent().and_then(ElementRef::wrap)
}

/// True when any ancestor element has one of `tags`
pub fn has_ancestor(element: &ElementRef, tags: &[&str]) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| tags.contains(&ancestor.value().name()))
}

/// Concatenated text of all descendant text nodes
pub fn text_content(element: &ElementRef) -> String {
    element.text().collect()
}

/// True when a direct child text node holds non-whitespace text
pub fn has_direct_text(element: &ElementRef) -> bool {
    element.children().any(|child| match child.value() {
        Node::Text(text) => !text.trim().is_empty(),
        _ => false,
    })
}
