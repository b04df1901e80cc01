//! Tag classification shared by the converters.

/// Block-level HTML elements
pub const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "center", "dd", "div", "dl",
    "dt", "figcaption", "figure", "footer", "h1", "h2", "h3", "h4", "h5", "h6",
    "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section", "table",
    "tr", "ul",
];

/// Containers whose items are handled by the list-item handler
pub const LIST_CONTAINERS: &[&str] = &["ul", "ol"];

/// Heading tags, levels 1 to 6
pub const HEADINGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// Elements that never contribute visible text
pub const NON_CONTENT: &[&str] = &["script", "style", "template", "noscript"];

/// Inline formatting tags counted as content by the generic container handler
pub const DEFAULT_INLINE_TAGS: &[&str] = &[
    "b", "strong", "i", "em", "u", "s", "strike", "del", "code", "a", "span",
];

/// Check if a tag is a block-level element
pub fn is_block(tag: &str) -> bool {
    BLOCK_ELEMENTS.contains(&tag.to_lowercase().as_str())
}

/// Check if a tag is a list container (`ul`/`ol`)
pub fn is_list_container(tag: &str) -> bool {
    LIST_CONTAINERS.contains(&tag.to_lowercase().as_str())
}

/// Check if a tag is a heading
pub fn is_heading(tag: &str) -> bool {
    HEADINGS.contains(&tag.to_lowercase().as_str())
}

/// Check if a tag never carries visible text
pub fn is_non_content(tag: &str) -> bool {
    NON_CONTENT.contains(&tag.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_block() {
        assert!(is_block("div"));
        assert!(is_block("p"));
        assert!(is_block("BLOCKQUOTE"));
        assert!(!is_block("span"));
        assert!(!is_block("a"));
    }

    #[test]
    fn test_is_list_container() {
        assert!(is_list_container("ul"));
        assert!(is_list_container("OL"));
        assert!(!is_list_container("li"));
    }

    #[test]
    fn test_is_heading() {
        assert!(is_heading("h1"));
        assert!(is_heading("H6"));
        assert!(!is_heading("h7"));
        assert!(!is_heading("header"));
    }
}
