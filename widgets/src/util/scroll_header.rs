//! Navigation header restyle on scroll.
//!
//! The theme's fixed header starts transparent (`start-style`) and gains a
//! solid background (`scroll-on`) once the page scrolls past a small
//! threshold.

#[cfg(test)]
#[path = "scroll_header_test.rs"]
mod scroll_header_test;

/// Scroll offset in CSS pixels at which the header switches style.
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

/// Class the header carries at the top of the page.
pub const START_CLASS: &str = "start-style";

/// Class the header carries once the page is scrolled.
pub const SCROLLED_CLASS: &str = "scroll-on";

/// Whether the header should show its scrolled style at `scroll_y`.
#[must_use]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y >= SCROLL_THRESHOLD_PX
}

/// Attach the scroll listener that swaps the header classes.
///
/// No-op on pages without a `start-style` header. The listener stays
/// registered for the page's lifetime.
#[cfg(feature = "csr")]
pub fn wire() {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = crate::util::dom::window() else {
        return;
    };
    let Some(header) = crate::util::dom::query(&format!(".{START_CLASS}")) else {
        log::debug!("no scroll-styled header on this page");
        return;
    };

    let on_scroll = Closure::<dyn FnMut()>::new(move || {
        let Some(window) = crate::util::dom::window() else {
            return;
        };
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let classes = header.class_list();
        if is_scrolled(scroll_y) {
            let _ = classes.remove_1(START_CLASS);
            let _ = classes.add_1(SCROLLED_CLASS);
        } else {
            let _ = classes.remove_1(SCROLLED_CLASS);
            let _ = classes.add_1(START_CLASS);
        }
    });
    if window
        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("could not attach the header scroll listener");
    }
    on_scroll.forget();
}
