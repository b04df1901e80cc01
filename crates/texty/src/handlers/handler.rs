//! Handler and Filter types for block conversion.

use scraper::ElementRef;
use texty_core::{Attributes, Op};

use crate::adapter::SiteAdapter;
use crate::inline::{self, TextMode};
use crate::service::TextyOptions;

/// Type alias for production functions
pub type ProduceFn = Box<dyn Fn(&ElementRef, &mut Context) -> Vec<Op> + Send + Sync>;

/// A filter determines which elements a handler applies to
pub enum Filter {
    /// Match a single tag name
    TagName(String),
    /// Match using a predicate function
    Predicate(Box<dyn Fn(&str, &ElementRef, &TextyOptions) -> bool + Send + Sync>),
}

impl Filter {
    /// Create a filter for a single tag
    pub fn tag(name: &str) -> Self {
        Filter::TagName(name.to_lowercase())
    }

    /// Create a filter with a predicate
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&str, &ElementRef, &TextyOptions) -> bool + Send + Sync + 'static,
    {
        Filter::Predicate(Box::new(f))
    }

    /// Check if this filter matches an element
    pub fn matches(&self, tag: &str, element: &ElementRef, options: &TextyOptions) -> bool {
        let tag_lower = tag.to_lowercase();
        match self {
            Filter::TagName(t) => tag_lower == *t,
            Filter::Predicate(f) => f(&tag_lower, element, options),
        }
    }
}

/// What a handler sees while producing operations for one element
pub struct Context<'c> {
    adapter: &'c dyn SiteAdapter,
    options: &'c TextyOptions,
    skip_subtree: bool,
}

impl<'c> Context<'c> {
    pub fn new(adapter: &'c dyn SiteAdapter, options: &'c TextyOptions) -> Self {
        Self {
            adapter,
            options,
            skip_subtree: false,
        }
    }

    pub fn adapter(&self) -> &dyn SiteAdapter {
        self.adapter
    }

    pub fn options(&self) -> &TextyOptions {
        self.options
    }

    /// Run the inline formatter over the element's children
    pub fn format(&self, element: &ElementRef, mode: TextMode) -> Vec<Op> {
        inline::format(element, self.adapter, &Attributes::default(), mode)
    }

    /// Keep the dispatcher out of this element's descendants
    pub fn skip_subtree(&mut self) {
        self.skip_subtree = true;
    }

    pub fn skips_subtree(&self) -> bool {
        self.skip_subtree
    }
}

/// A handler turns one matched block element into operations
pub struct Handler {
    /// Filter to determine which elements this handler applies to
    pub filter: Filter,
    /// Production function that generates operations
    pub production: ProduceFn,
}

impl Handler {
    /// Create a new handler
    pub fn new<F>(filter: Filter, production: F) -> Self
    where
        F: Fn(&ElementRef, &mut Context) -> Vec<Op> + Send + Sync + 'static,
    {
        Self {
            filter,
            production: Box::new(production),
        }
    }

    /// Create a handler that matches a single tag
    pub fn for_tag<F>(tag: &str, production: F) -> Self
    where
        F: Fn(&ElementRef, &mut Context) -> Vec<Op> + Send + Sync + 'static,
    {
        Self::new(Filter::tag(tag), production)
    }

    /// Check this handler's filter
    pub fn matches(&self, tag: &str, element: &ElementRef, options: &TextyOptions) -> bool {
        self.filter.matches(tag, element, options)
    }

    /// Apply this handler's production
    pub fn produce(&self, element: &ElementRef, context: &mut Context) -> Vec<Op> {
        (self.production)(element, context)
    }
}
