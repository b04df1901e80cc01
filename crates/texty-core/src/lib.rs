//! texty-core - Delta-style rich-text operations
//!
//! This crate provides the data model produced by the `texty` converter and
//! its serialization into the clipboard transport understood by the chat
//! client (`{"ops": [{"insert": ..., "attributes": {...}}]}`).
//!
//! # Format rules
//!
//! ```text
//! inline attributes (bold, italic, underline, strike, code, link)
//!     live on the text run they format
//! block attributes (list, indent, blockquote, codeBlock)
//!     live only on the "\n" that terminates the block
//! ```
//!
//! # Example
//!
//! ```rust
//! use texty_core::{to_json, Attributes, Delta, ListKind, Op};
//!
//! let delta: Delta = vec![
//!     Op::insert("Item 1"),
//!     Op::block_newline(Attributes::list(ListKind::Bullet, 1)),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert!(delta.validate().is_ok());
//! let json = to_json(&delta).unwrap();
//! assert!(json.contains("\"list\":\"bullet\""));
//! ```

mod delta;
mod serialize;

pub use delta::{Attributes, Delta, ListKind, Op};
pub use serialize::{from_json, to_json, to_json_pretty};

/// Error type for delta operations
#[derive(Debug, thiserror::Error)]
pub enum DeltaError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid operation at index {index}: {reason}")]
    InvalidOperation { index: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, DeltaError>;
