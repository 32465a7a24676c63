//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are stateless renderers of their props. The only shared state
//! they touch is what `Providers` installs in Leptos context.

pub mod content_editor;
pub mod delete_button;
pub mod dot_pattern;
pub mod loading_state;
pub mod providers;
