//! Rich-text operations
//!
//! A [`Delta`] is a flat, ordered list of [`Op`]s. Concatenating every
//! `insert` reproduces the visible text; formatting rides along on each
//! operation's [`Attributes`].

use serde::{Deserialize, Serialize};

use crate::{DeltaError, Result};

/// Kind of list a list-item newline belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Bullet,
    Ordered,
}

/// Sparse formatting record attached to an operation.
///
/// Flags that are `false` (or `None`/zero) are absent from the serialized
/// form, so a default `Attributes` serializes to `{}` and is never attached
/// to an [`Op`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attributes {
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub strike: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub code: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Block: list kind of the terminated line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<ListKind>,

    /// Block: list indentation, 0 means top level
    #[serde(default, skip_serializing_if = "is_zero")]
    pub indent: u32,

    /// Block: the terminated line is quoted
    #[serde(default, skip_serializing_if = "is_false")]
    pub blockquote: bool,

    /// Block: the terminated line is preformatted code
    #[serde(default, skip_serializing_if = "is_false")]
    pub code_block: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

impl Attributes {
    /// Block attributes for a list item at the given 1-based nesting level
    pub fn list(kind: ListKind, level: u32) -> Self {
        Self {
            list: Some(kind),
            indent: level.saturating_sub(1),
            ..Default::default()
        }
    }

    /// Block attributes for a quoted line
    pub fn blockquote() -> Self {
        Self {
            blockquote: true,
            ..Default::default()
        }
    }

    /// Block attributes for a line of preformatted code
    pub fn code_block() -> Self {
        Self {
            code_block: true,
            ..Default::default()
        }
    }

    /// True when no flag is set
    pub fn is_empty(&self) -> bool {
        !self.has_inline() && !self.has_block()
    }

    /// True when any inline flag (bold, italic, underline, strike, code, link) is set
    pub fn has_inline(&self) -> bool {
        self.bold || self.italic || self.underline || self.strike || self.code || self.link.is_some()
    }

    /// True when any block flag (list, indent, blockquote, codeBlock) is set
    pub fn has_block(&self) -> bool {
        self.list.is_some() || self.indent > 0 || self.blockquote || self.code_block
    }

    /// Overlay `other` onto `self`.
    ///
    /// Set flags in `other` win; unset flags leave `self` untouched, so
    /// merging is associative and an ancestor's formatting survives unless a
    /// descendant sets the same key.
    pub fn merge(&mut self, other: &Attributes) {
        self.bold |= other.bold;
        self.italic |= other.italic;
        self.underline |= other.underline;
        self.strike |= other.strike;
        self.code |= other.code;
        if other.link.is_some() {
            self.link.clone_from(&other.link);
        }
        if other.list.is_some() {
            self.list = other.list;
        }
        if other.indent > 0 {
            self.indent = other.indent;
        }
        self.blockquote |= other.blockquote;
        self.code_block |= other.code_block;
    }

    /// Owned variant of [`Attributes::merge`]
    pub fn merged(mut self, other: &Attributes) -> Self {
        self.merge(other);
        self
    }
}

/// A single `insert` with optional formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Op {
    #[serde(rename = "insert")]
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

impl Op {
    /// Plain text run
    pub fn insert(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attributes: None,
        }
    }

    /// Text run with formatting; empty attributes are dropped
    pub fn insert_with(text: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            text: text.into(),
            attributes: (!attributes.is_empty()).then_some(attributes),
        }
    }

    /// Unformatted line terminator
    pub fn newline() -> Self {
        Self::insert("\n")
    }

    /// Line terminator carrying block attributes
    pub fn block_newline(attributes: Attributes) -> Self {
        Self::insert_with("\n", attributes)
    }

    /// True when the insert is exactly one newline
    pub fn is_newline(&self) -> bool {
        self.text == "\n"
    }

    /// Attributes, treating an absent set as empty
    pub fn attributes_or_default(&self) -> Attributes {
        self.attributes.clone().unwrap_or_default()
    }
}

/// An ordered sequence of operations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delta {
    pub ops: Vec<Op>,
}

impl Delta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Op> {
        self.ops.iter()
    }

    /// Concatenation of every insert
    pub fn plain_text(&self) -> String {
        self.ops.iter().map(|op| op.text.as_str()).collect()
    }

    /// Check the destination format's hard invariants.
    ///
    /// Block attributes may only appear on a lone `"\n"` and an attached
    /// attribute set must not be empty.
    pub fn validate(&self) -> Result<()> {
        for (index, op) in self.ops.iter().enumerate() {
            let Some(attributes) = &op.attributes else {
                continue;
            };
            if attributes.is_empty() {
                return Err(DeltaError::InvalidOperation {
                    index,
                    reason: "attributes present but empty".to_string(),
                });
            }
            if attributes.has_block() && !op.is_newline() {
                return Err(DeltaError::InvalidOperation {
                    index,
                    reason: format!("block attributes on non-newline text {:?}", op.text),
                });
            }
        }
        Ok(())
    }
}

impl FromIterator<Op> for Delta {
    fn from_iter<I: IntoIterator<Item = Op>>(iter: I) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl Extend<Op> for Delta {
    fn extend<I: IntoIterator<Item = Op>>(&mut self, iter: I) {
        self.ops.extend(iter);
    }
}

impl IntoIterator for Delta {
    type Item = Op;
    type IntoIter = std::vec::IntoIter<Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'a> IntoIterator for &'a Delta {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}
