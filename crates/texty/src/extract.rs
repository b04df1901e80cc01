//! Attribute extractors for inline CSS and semantic tags.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::ElementRef;
use texty_core::Attributes;

use crate::adapter::SiteAdapter;

static BOLD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)font-weight\s*:\s*(?:bold|700|800|900)\b").expect("valid bold pattern")
});

static BOLD_CANCEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)font-weight\s*:\s*(?:normal|400)\b").expect("valid bold-cancel pattern")
});

static ITALIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)font-style\s*:\s*italic\b").expect("valid italic pattern")
});

// Some editors draw underlines as a bottom border.
static UNDERLINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)text-decoration(?:-line)?\s*:[^;]*\bunderline\b|\bborder-bottom\s*:")
        .expect("valid underline pattern")
});

static STRIKE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)text-decoration(?:-line)?\s*:[^;]*\bline-through\b")
        .expect("valid strike pattern")
});

/// Inline attributes implied by a CSS `style` string
pub fn style_attributes(style: &str) -> Attributes {
    Attributes {
        bold: BOLD.is_match(style),
        italic: ITALIC.is_match(style),
        underline: UNDERLINE.is_match(style),
        strike: STRIKE.is_match(style),
        ..Default::default()
    }
}

/// True when the style explicitly resets the font weight
pub fn cancels_bold(style: &str) -> bool {
    BOLD_CANCEL.is_match(style)
}

/// Inline attributes implied by a semantic tag.
///
/// `b`/`strong` lose their bold when the adapter calls the element a
/// non-semantic wrapper or its own style resets the weight.
pub fn tag_attributes(
    tag: &str,
    element: &ElementRef,
    style: &str,
    adapter: &dyn SiteAdapter,
) -> Attributes {
    let mut attributes = Attributes::default();
    match tag {
        "b" | "strong" => {
            attributes.bold =
                !adapter.is_non_semantic_wrapper(element, style) && !cancels_bold(style);
        }
        "i" | "em" => attributes.italic = true,
        "u" => attributes.underline = true,
        "s" | "strike" | "del" => attributes.strike = true,
        "code" => attributes.code = true,
        "a" => {
            attributes.link = element
                .value()
                .attr("href")
                .map(|href| adapter.resolve_link(href));
        }
        _ => {}
    }
    attributes
}
