//! Lectern Page Model
//!
//! The host-side stand-in for the live document: a small element tree with
//! id lookup, class queries, and subtree traversal. The navigation layer
//! reads and mutates this tree; nothing here persists beyond the page.

mod element;
mod error;
mod page;

pub use element::Element;
pub use error::PageError;
pub use page::{NodeId, Page};

pub type Result<T> = std::result::Result<T, PageError>;
