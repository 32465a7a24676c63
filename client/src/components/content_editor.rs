//! Controlled content editor.
//!
//! The surface never owns the document: it renders `content`, and each user
//! edit is reported through `on_change` as the full next value. Callers write
//! that value back into whatever signal feeds `content`.

#[cfg(test)]
#[path = "content_editor_test.rs"]
mod content_editor_test;

use leptos::prelude::*;

use crate::state::editor::{EditorContent, apply_edit, content_to_text, is_empty};

pub const DEFAULT_PLACEHOLDER: &str = "Start writing...";

/// Editable surface bound to `content`.
///
/// With `read_only` set the surface is `readonly` and edits never reach
/// `on_change`.
#[component]
pub fn ContentEditor(
    #[prop(into)] content: Signal<EditorContent>,
    #[prop(into)] on_change: Callback<EditorContent>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] read_only: bool,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_owned());
    let text = move || content.with(|value| content_to_text(value));
    let empty = move || content.with(|value| is_empty(value));

    let on_input = move |ev: leptos::ev::Event| {
        let edited = event_target_value(&ev);
        if let Some(next) = content.with_untracked(|previous| apply_edit(read_only, &edited, previous)) {
            on_change.run(next);
        }
    };

    view! {
        <div
            class="content-editor"
            class:content-editor--read-only=read_only
            class:content-editor--empty=empty
        >
            <textarea
                class="content-editor__surface"
                placeholder=placeholder
                readonly=read_only
                aria-readonly=if read_only { "true" } else { "false" }
                spellcheck="true"
                prop:value=text
                on:input=on_input
            >
                {content.with_untracked(|value| content_to_text(value))}
            </textarea>
        </div>
    }
}
