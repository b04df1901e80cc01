//! Block handler system for HTML to rich-text conversion.

mod blockquote;
mod blocks;
mod handler;

pub use blocks::builtin_handlers;
pub use handler::{Context, Filter, Handler, ProduceFn};

use indexmap::IndexMap;
use scraper::ElementRef;

use crate::html::tag_name;
use crate::service::TextyOptions;

/// Ordered collection of block handlers
pub struct Handlers {
    /// Custom handlers added by the user (checked first)
    custom_handlers: IndexMap<String, Handler>,
    /// Built-in handlers, in fixed match order
    builtin_handlers: IndexMap<String, Handler>,
}

impl Handlers {
    /// Create a new Handlers instance with the built-in handlers
    pub fn new() -> Self {
        Self {
            custom_handlers: IndexMap::new(),
            builtin_handlers: builtin_handlers()
                .into_iter()
                .map(|(key, handler)| (key.to_string(), handler))
                .collect(),
        }
    }

    /// Add a custom handler, checked before the built-ins
    pub fn add(&mut self, key: &str, handler: Handler) {
        self.custom_handlers.insert(key.to_string(), handler);
    }

    /// Remove a custom or built-in handler by key, preserving the order of the rest
    pub fn remove(&mut self, key: &str) -> Option<Handler> {
        self.custom_handlers
            .shift_remove(key)
            .or_else(|| self.builtin_handlers.shift_remove(key))
    }

    /// Handler keys in match order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.custom_handlers
            .keys()
            .chain(self.builtin_handlers.keys())
            .map(String::as_str)
    }

    /// Find the first handler matching an element
    pub fn for_element<'a>(
        &'a self,
        element: &ElementRef,
        options: &TextyOptions,
    ) -> Option<(&'a str, &'a Handler)> {
        let tag = tag_name(element);
        self.custom_handlers
            .iter()
            .chain(self.builtin_handlers.iter())
            .find(|(_, handler)| handler.matches(tag, element, options))
            .map(|(key, handler)| (key.as_str(), handler))
    }
}

impl Default for Handlers {
    fn default() -> Self {
        Self::new()
    }
}
