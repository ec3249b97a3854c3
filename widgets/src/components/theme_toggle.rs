//! Light/dark theme toggle.
//!
//! The preference lives in `localStorage` under a fixed key and applies as
//! the `data-theme` attribute on the document element, which the theme's
//! stylesheet keys its palettes off. First visits without a stored
//! preference follow the system color scheme.

use leptos::prelude::*;

use crate::state::theme::Theme;

#[cfg(feature = "csr")]
use crate::state::theme::STORAGE_KEY;
#[cfg(feature = "csr")]
use crate::util::storage;

/// Write `data-theme` on the document element.
#[cfg(feature = "csr")]
pub fn apply(theme: Theme) {
    let Some(root) = crate::util::dom::document().and_then(|doc| doc.document_element()) else {
        return;
    };
    if root.set_attribute("data-theme", theme.as_str()).is_err() {
        log::warn!("could not set data-theme on the document element");
    }
}

/// Theme to show before any interaction: the stored preference when one
/// exists, else the system color scheme, else light.
#[cfg(feature = "csr")]
#[must_use]
pub fn initial_theme() -> Theme {
    if let Some(theme) = storage::get(STORAGE_KEY).and_then(|value| Theme::from_stored(&value)) {
        return theme;
    }
    if system_prefers_dark() { Theme::Dark } else { Theme::Light }
}

#[cfg(feature = "csr")]
fn system_prefers_dark() -> bool {
    crate::util::dom::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|query| query.matches())
}

/// Checkbox switch controlling the theme, checked while dark mode is on.
///
/// Toggling applies the new theme immediately and persists it.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    #[cfg(feature = "csr")]
    let start_dark = initial_theme() == Theme::Dark;
    #[cfg(not(feature = "csr"))]
    let start_dark = false;

    let is_dark = RwSignal::new(start_dark);

    let on_change = move |_| {
        let current = if is_dark.get_untracked() { Theme::Dark } else { Theme::Light };
        let next = current.toggled();
        #[cfg(feature = "csr")]
        {
            apply(next);
            storage::set(STORAGE_KEY, next.as_str());
        }
        is_dark.set(next == Theme::Dark);
    };

    view! {
        <label class="theme-toggle__switch" title="Toggle dark mode">
            <input
                type="checkbox"
                class="theme-toggle__checkbox"
                prop:checked=move || is_dark.get()
                on:change=on_change
            />
            <span class="theme-toggle__slider"></span>
        </label>
    }
}
