//! Post search filter.
//!
//! A search input that narrows the archive page as the reader types. Posts
//! stay visible while the query is contained in their title or tag line;
//! a category heading hides once its group has no visible post left.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

#[cfg(feature = "csr")]
use crate::state::filter;

/// Wrapper holding one category's post items.
#[cfg(feature = "csr")]
const GROUP_QUERY: &str = ".category-group";
#[cfg(feature = "csr")]
const POST_QUERY: &str = ".post-item";
#[cfg(feature = "csr")]
const TITLE_QUERY: &str = ".post-title";
#[cfg(feature = "csr")]
const TAGS_QUERY: &str = ".tags";

/// Search input for the archive page.
#[component]
pub fn SearchFilter() -> impl IntoView {
    let on_input = move |ev| {
        let query = event_target_value(&ev);
        #[cfg(feature = "csr")]
        apply_filter(&query);
        #[cfg(not(feature = "csr"))]
        let _ = query;
    };

    view! {
        <input
            type="search"
            class="post-search__input"
            placeholder="Search posts"
            on:input=on_input
        />
    }
}

/// Re-evaluate visibility for every category group and its posts.
#[cfg(feature = "csr")]
fn apply_filter(query: &str) {
    log::debug!("filtering posts for {query:?}");

    let Some(document) = crate::util::dom::document() else {
        return;
    };
    let Ok(groups) = document.query_selector_all(GROUP_QUERY) else {
        return;
    };

    for group_index in 0..groups.length() {
        let Some(group) = groups
            .get(group_index)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };

        let mut any_visible = false;
        if let Ok(posts) = group.query_selector_all(POST_QUERY) {
            for post_index in 0..posts.length() {
                let Some(post) = posts
                    .get(post_index)
                    .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
                else {
                    continue;
                };
                // Posts without a title or tag line keep their current
                // visibility and never count toward the group.
                let (Some(title), Some(tags)) = (
                    child_text(&post, TITLE_QUERY),
                    child_text(&post, TAGS_QUERY),
                ) else {
                    continue;
                };

                let visible = filter::matches(query, &title, &tags);
                any_visible |= visible;
                set_visible(&post, visible);
            }
        }

        // The category heading sits just before its group.
        if let Some(label) = group
            .previous_element_sibling()
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        {
            set_visible(&label, any_visible);
        }
    }
}

/// Text of the first `selector` match inside `root`; `None` when absent.
#[cfg(feature = "csr")]
fn child_text(root: &web_sys::Element, selector: &str) -> Option<String> {
    let element = root.query_selector(selector).ok().flatten()?;
    Some(element.text_content().unwrap_or_default())
}

/// Show or hide an element through its inline `display` property.
#[cfg(feature = "csr")]
fn set_visible(element: &web_sys::HtmlElement, visible: bool) {
    let style = element.style();
    if visible {
        let _ = style.remove_property("display");
    } else {
        let _ = style.set_property("display", "none");
    }
}
