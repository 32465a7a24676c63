//! Document shell, root layout and routing.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Link, Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::providers::Providers;
use crate::pages::home::HomePage;
use crate::site::{self, FONTS, FontFamily, SiteMetadata, font_variables_style};

/// Classes on `<body>`: vertical flex column at full height.
pub const BODY_CLASS: &str = "app-body";
/// Classes on `<html>`: full height with smooth scrolling.
pub const ROOT_CLASS: &str = "app-root";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class=ROOT_CLASS>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class=BODY_CLASS style=font_variables_style(&FONTS)>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/mindmarks.css"/>
        <RootLayout>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </Router>
        </RootLayout>
    }
}

/// One `<head>` entry contributed by [`RootLayout`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeadTag {
    Title(String),
    Meta { name: &'static str, content: String },
    Link { rel: &'static str, href: String },
}

/// Head entries for `meta`, in document order: title, description, robots,
/// icon, canonical URL, then one stylesheet per font family.
pub fn head_tags(meta: &SiteMetadata, fonts: &[FontFamily]) -> Vec<HeadTag> {
    let mut tags = vec![
        HeadTag::Title(meta.title.clone()),
        HeadTag::Meta { name: "description", content: meta.description.clone() },
        HeadTag::Meta { name: "robots", content: meta.robots.directive() },
        HeadTag::Link { rel: "icon", href: meta.resolve(&meta.icon) },
        HeadTag::Link { rel: "canonical", href: meta.canonical_url() },
    ];
    tags.extend(fonts.iter().map(|font| HeadTag::Link { rel: "stylesheet", href: font.stylesheet.to_owned() }));
    tags
}

/// Page metadata plus the `ErrorBoundary > Providers > children` nesting.
///
/// Render errors below the boundary are replaced by a fallback listing their
/// messages; the layout itself never handles errors.
#[component]
pub fn RootLayout(children: Children) -> impl IntoView {
    let head = head_tags(site::current(), &FONTS)
        .into_iter()
        .map(|tag| match tag {
            HeadTag::Title(text) => view! { <Title text=text/> }.into_any(),
            HeadTag::Meta { name, content } => view! { <Meta name=name content=content/> }.into_any(),
            HeadTag::Link { rel, href } => view! { <Link rel=rel href=href/> }.into_any(),
        })
        .collect_view();

    view! {
        {head}
        <ErrorBoundary fallback=|errors| {
            view! {
                <div class="error-fallback" role="alert">
                    <h2 class="error-fallback__title">"Something went wrong."</h2>
                    <ul class="error-fallback__list">
                        {move || {
                            errors
                                .get()
                                .into_iter()
                                .map(|(_, err)| {
                                    #[cfg(feature = "hydrate")]
                                    log::error!("render error: {err}");
                                    view! { <li>{err.to_string()}</li> }
                                })
                                .collect_view()
                        }}
                    </ul>
                </div>
            }
        }>
            <Providers>{children()}</Providers>
        </ErrorBoundary>
    }
}
