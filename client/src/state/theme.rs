//! Theme state installed by the `Providers` component.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Presentation theme shared through context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub dark_mode: bool,
}

impl ThemeState {
    pub fn toggle_label(self) -> &'static str {
        if self.dark_mode { "Light mode" } else { "Dark mode" }
    }
}
