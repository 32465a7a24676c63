//! Theme preference persistence.
//!
//! Reads the stored preference from `localStorage`, falling back to the
//! `prefers-color-scheme` media query, and reflects the active theme as a
//! `data-theme` attribute on `<html>`. Server rendering always starts light and
//! every browser call is a no-op outside the `hydrate` build.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::ThemeState;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "mindmarks.theme";

/// Interpret a stored preference value.
pub fn parse_stored(value: Option<&str>) -> Option<bool> {
    match value? {
        "dark" => Some(true),
        "light" => Some(false),
        _ => None,
    }
}

pub fn stored_value(theme: ThemeState) -> &'static str {
    if theme.dark_mode { "dark" } else { "light" }
}

/// Read the user's theme preference.
pub fn read_preference() -> ThemeState {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return ThemeState::default();
        };

        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        if let Some(dark_mode) = parse_stored(stored.as_deref()) {
            return ThemeState { dark_mode };
        }

        let dark_mode = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        ThemeState { dark_mode }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ThemeState::default()
    }
}

/// Reflect `theme` on the `<html>` element.
pub fn apply(theme: ThemeState) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", stored_value(theme));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it and persist the new preference.
pub fn toggle(current: ThemeState) -> ThemeState {
    let next = ThemeState { dark_mode: !current.dark_mode };
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            if storage.set_item(STORAGE_KEY, stored_value(next)).is_err() {
                log::warn!("theme preference not persisted");
            }
        }
    }
    next
}
