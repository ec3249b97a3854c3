//! Module entry point: logging setup and widget mounting.
//!
//! The pages are static HTML from the site generator; this runs once after
//! the module loads and attaches behavior to whatever hosts the current
//! page carries. Every mount is independently optional, so the same bundle
//! serves every page of the site.

#[cfg(feature = "csr")]
use leptos::mount::mount_to;
#[cfg(feature = "csr")]
use leptos::prelude::*;
#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;
#[cfg(feature = "csr")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(feature = "csr")]
use crate::components::search_filter::SearchFilter;
#[cfg(feature = "csr")]
use crate::components::theme_toggle::{self, ThemeToggle};
#[cfg(feature = "csr")]
use crate::components::toc::{self, Toc};
#[cfg(feature = "csr")]
use crate::util;

/// Destination list for the post outline.
#[cfg(feature = "csr")]
const TOC_CONTAINER: &str = ".post__toc ol";

/// Host element for the theme toggle control.
#[cfg(feature = "csr")]
const THEME_TOGGLE_HOST: &str = "#theme-toggle";

/// Host element for the post search input.
#[cfg(feature = "csr")]
const SEARCH_HOST: &str = "#post-search";

/// Entry point, called by the generated JS glue once the module loads.
#[cfg(feature = "csr")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    // Restyle before anything mounts so a stored dark preference does not
    // flash the light palette.
    theme_toggle::apply(theme_toggle::initial_theme());

    mount_toc();
    mount_into(THEME_TOGGLE_HOST, || view! { <ThemeToggle/> });
    mount_into(SEARCH_HOST, || view! { <SearchFilter/> });

    util::scroll_header::wire();
    util::links::mark_external();
}

/// Build and mount the outline into the page's TOC list, when it has one.
#[cfg(feature = "csr")]
fn mount_toc() {
    let Some(container) = host_element(TOC_CONTAINER) else {
        log::debug!("no outline container on this page");
        return;
    };
    let headings = toc::collect_headings();
    log::debug!("building the outline from {} headings", headings.len());
    let nodes = outline::tree::build(&headings);
    mount_to(container, move || view! { <Toc nodes=nodes/> }).forget();
}

/// Mount a component into the element at `selector`, when present.
#[cfg(feature = "csr")]
fn mount_into<F, V>(selector: &str, component: F)
where
    F: FnOnce() -> V + 'static,
    V: IntoView + 'static,
{
    let Some(host) = host_element(selector) else {
        log::debug!("no {selector} host on this page");
        return;
    };
    mount_to(host, component).forget();
}

#[cfg(feature = "csr")]
fn host_element(selector: &str) -> Option<web_sys::HtmlElement> {
    util::dom::query(selector)
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
}
