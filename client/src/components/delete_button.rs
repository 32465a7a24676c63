//! Delete control for items rendered inside draggable cards.
//!
//! DESIGN
//! ======
//! The button must never start a drag on its ancestor card or submit an
//! enclosing form. Every press stops propagation; only a completed click also
//! prevents the default action and then runs the callback. Attributes the
//! caller spreads with `{..}` land on the `<button>` itself.
//!
//! The button writes no `aria-label` or `title` of its own unless asked to
//! through props: its default accessible name is visually hidden text. A
//! caller-spread `aria-label` or `title` is therefore the only copy on the
//! element and takes effect.

#[cfg(test)]
#[path = "delete_button_test.rs"]
mod delete_button_test;

use leptos::prelude::*;

pub const DEFAULT_DELETE_CLASS: &str = "delete-button";
pub const DEFAULT_DELETE_LABEL: &str = "Delete";

/// Interaction kinds the button listens for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Press {
    /// Primary activation (`click`).
    Activate,
    PointerDown,
    TouchStart,
}

/// What the handler does with an event before (maybe) deleting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Containment {
    pub prevent_default: bool,
    pub stop_propagation: bool,
    pub invoke: bool,
}

impl Press {
    pub fn containment(self) -> Containment {
        match self {
            Self::Activate => Containment { prevent_default: true, stop_propagation: true, invoke: true },
            Self::PointerDown | Self::TouchStart => {
                Containment { prevent_default: false, stop_propagation: true, invoke: false }
            }
        }
    }
}

/// DOM event operations the containment policy needs.
pub trait Containable {
    fn prevent_default(&self);
    fn stop_propagation(&self);
}

macro_rules! containable {
    ($($ty:ty),*) => {
        $(impl Containable for $ty {
            fn prevent_default(&self) {
                leptos::ev::Event::prevent_default(self);
            }

            fn stop_propagation(&self) {
                leptos::ev::Event::stop_propagation(self);
            }
        })*
    };
}

containable!(leptos::ev::MouseEvent, leptos::ev::PointerEvent, leptos::ev::TouchEvent);

/// Contain `ev` according to `press`, then run `on_delete` if the press
/// activates the button.
pub fn handle_press(press: Press, ev: &impl Containable, on_delete: impl FnOnce()) {
    let policy = press.containment();
    if policy.prevent_default {
        ev.prevent_default();
    }
    if policy.stop_propagation {
        ev.stop_propagation();
    }
    if policy.invoke {
        on_delete();
    }
}

/// Icon button that deletes without disturbing its container.
///
/// Extra attributes (`data-*`, `id`, `aria-label`, ...) are forwarded with
/// attribute spreading: `<DeleteButton on_delete=cb {..} data-testid="x"/>`.
/// Set a label either through the `aria_label` prop or by spreading
/// `aria-label`, not both.
#[component]
pub fn DeleteButton(
    #[prop(into)] on_delete: Callback<()>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    let class = class.unwrap_or_else(|| DEFAULT_DELETE_CLASS.to_owned());

    view! {
        <button
            type="button"
            class=class
            aria-label=aria_label
            title=title
            on:click=move |ev: leptos::ev::MouseEvent| {
                handle_press(Press::Activate, &ev, || on_delete.run(()));
            }
            on:pointerdown=move |ev: leptos::ev::PointerEvent| {
                handle_press(Press::PointerDown, &ev, || on_delete.run(()));
            }
            on:touchstart=move |ev: leptos::ev::TouchEvent| {
                handle_press(Press::TouchStart, &ev, || on_delete.run(()));
            }
        >
            <svg class="delete-button__icon" viewBox="0 0 24 24" width="16" height="16" aria-hidden="true">
                <path
                    d="M3 6h18M8 6V4h8v2m-9 0 1 14h8l1-14"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                ></path>
            </svg>
            <span class="visually-hidden">{DEFAULT_DELETE_LABEL}</span>
        </button>
    }
}
