//! Cross-cutting context providers wrapped around every page.

use leptos::prelude::*;

use crate::state::theme::ThemeState;
use crate::util::dark_mode;

/// Installs the shared `RwSignal<ThemeState>` and keeps `<html>` in sync with
/// it. Server rendering always starts from the light theme; the browser swaps
/// in the stored preference once hydrated.
#[component]
pub fn Providers(children: Children) -> impl IntoView {
    let theme = RwSignal::new(ThemeState::default());
    provide_context(theme);

    Effect::new(move || theme.set(dark_mode::read_preference()));
    Effect::new(move || dark_mode::apply(theme.get()));

    children()
}

#[cfg(test)]
#[path = "providers_test.rs"]
mod providers_test;
