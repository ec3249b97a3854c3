#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::HEADER_CLEARANCE_PX;

/// Absolute document position to scroll to for a heading.
///
/// `viewport_top` is the heading's position relative to the viewport
/// (`getBoundingClientRect().top`), `scroll_offset` the current vertical
/// scroll position. The fixed header clearance is subtracted so the heading
/// stops below the page header rather than underneath it.
///
/// The result can be negative for headings near the top of the document;
/// the browser clamps scroll commands to the document bounds.
#[must_use]
pub fn scroll_target(viewport_top: f64, scroll_offset: f64) -> f64 {
    viewport_top + scroll_offset - HEADER_CLEARANCE_PX
}
