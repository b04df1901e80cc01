//! TextyService - the main entry point for HTML to rich-text conversion.

use once_cell::sync::Lazy;
use regex::Regex;
use texty_core::{to_json, Delta};
use tracing::{debug, info};

use crate::adapter::{GenericAdapter, SiteAdapter};
use crate::handlers::{Context, Handler, Handlers};
use crate::html::{parse_html, tag_name, ElementCursor};
use crate::plain;
use crate::utilities::DEFAULT_INLINE_TAGS;
use crate::Result;

static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<li[\s>/]").expect("valid list item pattern"));

/// Caller-side gate deciding whether HTML is worth converting
pub type Prefilter = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// Default gate: the HTML contains at least one list item
pub fn contains_list_item(html: &str) -> bool {
    LIST_ITEM.is_match(html)
}

/// Options for TextyService
#[derive(Debug, Clone)]
pub struct TextyOptions {
    /// Tags handled by the generic container handler
    pub container_tags: Vec<String>,

    /// Inline tags that make a container count as having content
    pub inline_tags: Vec<String>,

    /// Indentation per nesting level in the plain-text fallback
    pub plain_indent: String,

    /// Bullet prefix for list items in the plain-text fallback
    pub plain_bullet: String,
}

impl Default for TextyOptions {
    fn default() -> Self {
        Self {
            container_tags: vec!["div".to_string()],
            inline_tags: DEFAULT_INLINE_TAGS.iter().map(|t| t.to_string()).collect(),
            plain_indent: "    ".to_string(),
            plain_bullet: "• ".to_string(),
        }
    }
}

/// Both clipboard representations of one copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardPayload {
    pub delta: Delta,
    pub plain_text: String,
}

impl ClipboardPayload {
    /// Serialized rich-text flavour
    pub fn to_json(&self) -> Result<String> {
        Ok(to_json(&self.delta)?)
    }
}

/// Walk every element of `html` and apply the first matching handler.
///
/// Handlers that claim their subtree stop the walk from descending into it;
/// elements no handler matches contribute nothing.
pub fn dispatch(
    html: &str,
    adapter: &dyn SiteAdapter,
    handlers: &Handlers,
    options: &TextyOptions,
) -> Delta {
    let document = parse_html(html);
    let mut cursor = ElementCursor::new(document.root_element());
    let mut delta = Delta::new();

    while let Some(element) = cursor.next() {
        let Some((key, handler)) = handlers.for_element(&element, options) else {
            continue;
        };
        debug!(handler = key, tag = tag_name(&element), "block handler matched");

        let mut ctx = Context::new(adapter, options);
        delta.extend(handler.produce(&element, &mut ctx));
        if ctx.skips_subtree() {
            cursor.skip_subtree();
        }
    }

    debug!(bytes = html.len(), ops = delta.len(), "converted html");
    delta
}

/// The main service for converting clipboard HTML
pub struct TextyService {
    options: TextyOptions,
    handlers: Handlers,
    adapter: Box<dyn SiteAdapter>,
    prefilter: Prefilter,
}

impl TextyService {
    /// Create a new TextyService with default options and the generic adapter
    pub fn new() -> Self {
        Self::with_adapter(GenericAdapter)
    }

    /// Create a TextyService for a specific source document type
    pub fn with_adapter<A: SiteAdapter + 'static>(adapter: A) -> Self {
        Self {
            options: TextyOptions::default(),
            handlers: Handlers::new(),
            adapter: Box::new(adapter),
            prefilter: Box::new(contains_list_item),
        }
    }

    /// Replace the options
    pub fn with_options(mut self, options: TextyOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the clipboard gate used by [`TextyService::rewrite`]
    pub fn with_prefilter<F>(mut self, prefilter: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.prefilter = Box::new(prefilter);
        self
    }

    /// Convert HTML to rich-text operations
    pub fn convert(&self, html: &str) -> Delta {
        dispatch(html, self.adapter.as_ref(), &self.handlers, &self.options)
    }

    /// Convert HTML to the plain-text fallback
    pub fn to_plain_text(&self, html: &str) -> String {
        plain::to_plain_text(html, &self.options)
    }

    /// Build the replacement clipboard payload.
    ///
    /// Returns `None` when the gate rejects the HTML or nothing convertible
    /// was found; the caller then leaves the clipboard alone.
    pub fn rewrite(&self, html: &str) -> Option<ClipboardPayload> {
        if !(self.prefilter)(html) {
            debug!("prefilter rejected clipboard html");
            return None;
        }

        let delta = self.convert(html);
        if delta.is_empty() {
            debug!("no convertible content");
            return None;
        }

        info!(ops = delta.len(), "rewrote clipboard payload");
        Some(ClipboardPayload {
            delta,
            plain_text: self.to_plain_text(html),
        })
    }

    /// Add a custom handler, checked before the built-ins
    pub fn add_handler(&mut self, key: &str, handler: Handler) -> &mut Self {
        self.handlers.add(key, handler);
        self
    }

    /// Remove a handler by key
    pub fn remove_handler(&mut self, key: &str) -> &mut Self {
        self.handlers.remove(key);
        self
    }

    /// Get the current options
    pub fn options(&self) -> &TextyOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut TextyOptions {
        &mut self.options
    }
}

impl Default for TextyService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::GoogleDocsAdapter;
    use texty_core::{Attributes, ListKind, Op};

    fn bullet(level: u32) -> Op {
        Op::block_newline(Attributes::list(ListKind::Bullet, level))
    }

    fn ordered(level: u32) -> Op {
        Op::block_newline(Attributes::list(ListKind::Ordered, level))
    }

    fn bold() -> Attributes {
        Attributes {
            bold: true,
            ..Default::default()
        }
    }

    fn convert(html: &str) -> Vec<Op> {
        let delta = TextyService::new().convert(html);
        assert!(delta.validate().is_ok(), "invalid delta: {delta:?}");
        delta.ops
    }

    #[test]
    fn test_simple_bullet_list() {
        assert_eq!(
            convert("<ul><li>Item 1</li><li>Item 2</li></ul>"),
            vec![Op::insert("Item 1"), bullet(1), Op::insert("Item 2"), bullet(1)]
        );
    }

    #[test]
    fn test_nested_ordered_list() {
        let html = "<ol><li>one<ol><li>two<ol><li>three</li></ol></li></ol></li></ol>";
        let ops = convert(html);
        assert_eq!(
            ops,
            vec![
                Op::insert("one"),
                ordered(1),
                Op::insert("two"),
                ordered(2),
                Op::insert("three"),
                ordered(3),
            ]
        );
        let indents: Vec<u32> = ops
            .iter()
            .filter_map(|op| op.attributes.as_ref())
            .map(|a| a.indent)
            .collect();
        assert_eq!(indents, vec![0, 1, 2]);
    }

    #[test]
    fn test_list_item_after_nested_list() {
        let html = "<ul><li>a<ul><li>b</li></ul></li><li>c</li></ul>";
        assert_eq!(
            convert(html),
            vec![Op::insert("a"), bullet(1), Op::insert("b"), bullet(2), Op::insert("c"), bullet(1)]
        );
    }

    #[test]
    fn test_code_block() {
        assert_eq!(
            convert("<pre><code>line1\nline2\n</code></pre>"),
            vec![
                Op::insert("line1"),
                Op::block_newline(Attributes::code_block()),
                Op::insert("line2"),
                Op::block_newline(Attributes::code_block()),
            ]
        );
    }

    #[test]
    fn test_code_block_interior_blank_line() {
        assert_eq!(
            convert("<pre>a\n\n<b>b</b></pre>"),
            vec![
                Op::insert("a"),
                Op::block_newline(Attributes::code_block()),
                Op::block_newline(Attributes::code_block()),
                Op::insert("b"),
                Op::block_newline(Attributes::code_block()),
            ]
        );
    }

    #[test]
    fn test_blockquote_resegmented() {
        let ops = convert("<blockquote>bold<strong>bold</strong>bold\nplain</blockquote>");
        assert_eq!(
            ops,
            vec![
                Op::insert("bold"),
                Op::insert_with("bold", bold()),
                Op::insert("bold"),
                Op::block_newline(Attributes::blockquote()),
                Op::insert("plain"),
                Op::block_newline(Attributes::blockquote()),
            ]
        );
    }

    #[test]
    fn test_blockquote_paragraphs_become_lines() {
        assert_eq!(
            convert("<blockquote><p>first</p><p>second</p></blockquote>"),
            vec![
                Op::insert("first"),
                Op::block_newline(Attributes::blockquote()),
                Op::insert("second"),
                Op::block_newline(Attributes::blockquote()),
            ]
        );
    }

    #[test]
    fn test_bold_cancelled_by_style() {
        let ops = convert(r#"<p><b style="font-weight: normal;">x</b></p>"#);
        assert_eq!(ops, vec![Op::insert("x"), Op::newline()]);
    }

    #[test]
    fn test_paragraph_and_heading() {
        assert_eq!(
            convert("<h2>Title</h2><p>Hello <em>there</em></p>"),
            vec![
                Op::insert("Title"),
                Op::newline(),
                Op::insert("Hello"),
                Op::insert_with(
                    "there",
                    Attributes {
                        italic: true,
                        ..Default::default()
                    }
                ),
                Op::newline(),
            ]
        );
    }

    #[test]
    fn test_paragraph_inside_list_item_not_repeated() {
        assert_eq!(
            convert("<ul><li><p>wrapped</p></li></ul>"),
            vec![Op::insert("wrapped"), bullet(1)]
        );
    }

    #[test]
    fn test_preformatted_inside_list_item_not_repeated() {
        let delta = TextyService::new().convert("<ul><li><pre>x</pre></li></ul>");
        assert_eq!(delta.ops, vec![Op::insert("x"), bullet(1)]);
        assert_eq!(delta.plain_text(), "x\n");
    }

    #[test]
    fn test_generic_container() {
        assert_eq!(
            convert("<div>loose <u>text</u></div><div><p>para</p></div>"),
            vec![
                Op::insert("loose"),
                Op::insert_with(
                    "text",
                    Attributes {
                        underline: true,
                        ..Default::default()
                    }
                ),
                Op::newline(),
                Op::insert("para"),
                Op::newline(),
            ]
        );
    }

    #[test]
    fn test_empty_elements_emit_nothing() {
        assert!(convert("").is_empty());
        assert!(convert("   \n ").is_empty());
        assert!(convert("<blockquote>  </blockquote><p> </p><ul><li> </li></ul><pre>\n</pre>").is_empty());
    }

    #[test]
    fn test_unrecognized_markup_skipped() {
        assert!(convert("<span>orphan</span><table><tr><td>cell</td></tr></table>").is_empty());
    }

    #[test]
    fn test_idempotent() {
        let service = TextyService::new();
        let html = "<ul><li>a <b>b</b><ol><li>c</li></ol></li></ul><blockquote>q</blockquote>";
        assert_eq!(service.convert(html), service.convert(html));
    }

    #[test]
    fn test_round_trip_text() {
        let delta = TextyService::new().convert("<p>one</p><ul><li>two</li></ul><pre>three</pre>");
        assert_eq!(delta.plain_text(), "one\ntwo\nthree\n");
    }

    #[test]
    fn test_google_docs_clipboard() {
        let html = concat!(
            r#"<meta charset="utf-8"><b style="font-weight:normal;" id="docs-internal-guid-abc">"#,
            r#"<ul style="list-style-type:disc;">"#,
            r#"<li aria-level="1" style="list-style-type:disc;"><p><span style="font-weight:700;">Bold</span><span> item</span></p></li>"#,
            r#"<li aria-level="2" style="list-style-type:circle;"><p><a href="https://www.google.com/url?q=https://example.com&amp;sa=D"><span>link</span></a></p></li>"#,
            r#"</ul></b>"#
        );
        let delta = TextyService::with_adapter(GoogleDocsAdapter).convert(html);
        assert_eq!(
            delta.ops,
            vec![
                Op::insert_with("Bold", bold()),
                Op::insert("item"),
                bullet(1),
                Op::insert_with(
                    "link",
                    Attributes {
                        link: Some("https://example.com".to_string()),
                        ..Default::default()
                    }
                ),
                bullet(2),
            ]
        );
    }

    #[test]
    fn test_google_docs_list_nested_in_list_container() {
        // Docs nests the sub-list directly under the outer <ol>, not inside an <li>
        let html = concat!(
            r#"<ol style="margin-top:0;">"#,
            r#"<li aria-level="1" style="list-style-type:decimal;font-weight:400;font-style:italic;"><p role="presentation">"#,
            r#"<span style="font-weight:400;font-style:italic;">Italic</span></p></li>"#,
            r#"<ul><li aria-level="2" style="list-style-type:circle;"><p role="presentation"><span style="text-decoration:line-through;">Nested</span></p></li></ul>"#,
            r#"</ol>"#
        );
        let delta = TextyService::with_adapter(GoogleDocsAdapter).convert(html);
        assert_eq!(
            delta.ops,
            vec![
                Op::insert_with(
                    "Italic",
                    Attributes {
                        italic: true,
                        ..Default::default()
                    }
                ),
                ordered(1),
                Op::insert_with(
                    "Nested",
                    Attributes {
                        strike: true,
                        ..Default::default()
                    }
                ),
                bullet(2),
            ]
        );
    }

    #[test]
    fn test_rewrite_gate() {
        let service = TextyService::new();
        assert!(service.rewrite("<p>no list here</p>").is_none());
        assert!(service.rewrite("<ul><li> </li></ul>").is_none());

        let payload = service.rewrite("<ul><li>x</li></ul>").unwrap();
        assert_eq!(payload.plain_text, "• x\n");
        assert_eq!(
            payload.to_json().unwrap(),
            r#"{"ops":[{"insert":"x"},{"insert":"\n","attributes":{"list":"bullet"}}]}"#
        );
    }

    #[test]
    fn test_rewrite_custom_prefilter() {
        let service = TextyService::new().with_prefilter(|_| true);
        assert!(service.rewrite("<p>any</p>").is_some());
    }

    #[test]
    fn test_custom_handler() {
        let mut service = TextyService::new();
        service.add_handler(
            "rule",
            Handler::for_tag("hr", |_, ctx| {
                ctx.skip_subtree();
                vec![Op::insert("---"), Op::newline()]
            }),
        );
        assert_eq!(
            service.convert("<p>a</p><hr><p>b</p>"),
            vec![
                Op::insert("a"),
                Op::newline(),
                Op::insert("---"),
                Op::newline(),
                Op::insert("b"),
                Op::newline(),
            ]
            .into_iter()
            .collect::<Delta>()
        );
    }

    #[test]
    fn test_contains_list_item() {
        assert!(contains_list_item("<UL><LI>x</LI></UL>"));
        assert!(contains_list_item("<li class=\"a\">"));
        assert!(!contains_list_item("<link rel=\"x\"><p>y</p>"));
    }
}
