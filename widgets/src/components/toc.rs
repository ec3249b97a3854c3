//! Table-of-contents widget.
//!
//! Scans the post body for `h2`–`h6` headings, assigns each its
//! `heading-{i}` anchor id, and renders the nested outline into the
//! theme's TOC list. Activating an entry scrolls smoothly to its heading,
//! stopping below the fixed page header instead of underneath it.

use leptos::prelude::*;
use outline::tree::OutlineNode;

#[cfg(feature = "csr")]
use outline::heading::{Heading, anchor_id};
#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

/// Heading ranks inside the post body that participate in the outline.
/// `h1` is the post title and stays out.
#[cfg(feature = "csr")]
const HEADING_QUERY: &str =
    ".article-post h2, .article-post h3, .article-post h4, .article-post h5, .article-post h6";

/// Collect the post's headings in document order, assigning each its
/// anchor id. Mutates the heading elements so the fragment links the
/// outline renders will resolve.
#[cfg(feature = "csr")]
#[must_use]
pub fn collect_headings() -> Vec<Heading> {
    let Some(document) = crate::util::dom::document() else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(HEADING_QUERY) else {
        return Vec::new();
    };

    let mut headings = Vec::new();
    for index in 0..nodes.length() {
        let Some(node) = nodes.get(index) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<web_sys::Element>() else {
            continue;
        };
        let text = element.text_content().unwrap_or_default();
        let Some(heading) = Heading::from_tag(&element.tag_name(), text) else {
            continue;
        };
        element.set_id(&anchor_id(headings.len()));
        headings.push(heading);
    }
    headings
}

/// Smooth-scroll the viewport so the heading with `anchor` stops below the
/// fixed header.
///
/// The heading's position is resolved at activation time, not at build
/// time, so entries stay accurate when content above them changes height.
#[cfg(feature = "csr")]
pub fn scroll_to_anchor(anchor: &str) {
    let Some(window) = crate::util::dom::window() else {
        return;
    };
    let Some(target) = crate::util::dom::document().and_then(|doc| doc.get_element_by_id(anchor))
    else {
        log::warn!("outline target #{anchor} is missing from the page");
        return;
    };

    let viewport_top = target.get_bounding_client_rect().top();
    let scroll_offset = window.page_y_offset().unwrap_or(0.0);

    let options = web_sys::ScrollToOptions::new();
    options.set_top(outline::scroll::scroll_target(viewport_top, scroll_offset));
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Nested outline entries for a post.
///
/// Renders only the `<li>` entries: the destination `<ol>` is the theme's
/// existing TOC container this component mounts into. An empty `nodes`
/// leaves the container empty.
#[component]
pub fn Toc(nodes: Vec<OutlineNode>) -> impl IntoView {
    nodes.into_iter().map(entry).collect::<Vec<_>>()
}

/// One outline entry with its nested child list, if any.
fn entry(node: OutlineNode) -> AnyView {
    let href = node.href();
    let OutlineNode { anchor, text, children } = node;
    let nested = (!children.is_empty()).then(|| {
        view! { <ol>{children.into_iter().map(entry).collect::<Vec<_>>()}</ol> }
    });

    let on_click = move |ev: leptos::ev::MouseEvent| {
        // Replace the default fragment jump with the offset smooth scroll.
        ev.prevent_default();
        #[cfg(feature = "csr")]
        scroll_to_anchor(&anchor);
        #[cfg(not(feature = "csr"))]
        let _ = &anchor;
    };

    view! {
        <li>
            <a href=href on:click=on_click>
                {text}
            </a>
            {nested}
        </li>
    }
    .into_any()
}
