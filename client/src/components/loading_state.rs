//! Centered spinner with a caption, used while page data is pending.

#[cfg(test)]
#[path = "loading_state_test.rs"]
mod loading_state_test;

use leptos::prelude::*;

pub const DEFAULT_LOADING_MESSAGE: &str = "Loading...";
/// Fills the viewport below the header and centers its content.
pub const DEFAULT_LOADING_CLASS: &str = "loading-state loading-state--viewport";

fn resolve_message(message: Option<String>) -> String {
    message.unwrap_or_else(|| DEFAULT_LOADING_MESSAGE.to_owned())
}

fn resolve_class(class: Option<String>) -> String {
    class.unwrap_or_else(|| DEFAULT_LOADING_CLASS.to_owned())
}

/// Spinner plus caption. Both inputs fall back to fixed defaults.
#[component]
pub fn LoadingState(
    #[prop(optional, into)] message: Option<String>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    view! {
        <div class=resolve_class(class) role="status" aria-live="polite">
            <span class="loading-state__spinner" aria-hidden="true"></span>
            <p class="loading-state__message">{resolve_message(message)}</p>
        </div>
    }
}
