#![cfg(feature = "ssr")]

use super::*;

#[component]
fn ThemeProbe() -> impl IntoView {
    let theme = use_context::<RwSignal<ThemeState>>();
    let label = if theme.is_some() { "theme-provided" } else { "theme-missing" };
    view! { <span>{label}</span> }
}

#[test]
fn children_see_theme_context() {
    let owner = Owner::new();
    owner.set();
    let html = view! {
        <Providers>
            <ThemeProbe/>
        </Providers>
    }
    .to_html();
    assert!(html.contains("theme-provided"));
}
