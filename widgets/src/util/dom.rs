//! Window and document access helpers.
//!
//! Every accessor returns `Option` so a missing browser API degrades the
//! calling widget to a no-op instead of crashing the module.

use web_sys::{Document, Element, Window};

#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[must_use]
pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// First element matching `selector`, or `None` when the page has no match
/// (or the selector fails to parse).
#[must_use]
pub fn query(selector: &str) -> Option<Element> {
    document().and_then(|doc| doc.query_selector(selector).ok().flatten())
}
