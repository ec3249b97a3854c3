//! Open off-site links in a new tab.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

/// Whether a link with `link_host` leaves the page hosted at `page_host`.
///
/// Hosts compare verbatim, so subdomains count as external. An anchor
/// without a host (`mailto:`, `javascript:`, pure fragments) stays
/// internal.
#[must_use]
pub fn is_external(link_host: &str, page_host: &str) -> bool {
    !link_host.is_empty() && link_host != page_host
}

/// Set `target="_blank"` on every link pointing off-site.
#[cfg(feature = "csr")]
pub fn mark_external() {
    use wasm_bindgen::JsCast;

    let Some(document) = crate::util::dom::document() else {
        return;
    };
    let Some(page_host) = crate::util::dom::window().and_then(|w| w.location().hostname().ok())
    else {
        return;
    };

    let links = document.links();
    for index in 0..links.length() {
        let Some(element) = links.item(index) else {
            continue;
        };
        let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() else {
            continue;
        };
        if is_external(&anchor.hostname(), &page_host) {
            anchor.set_target("_blank");
        }
    }
}
