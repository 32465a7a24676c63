use super::*;

#[test]
fn shell_classes_are_distinct() {
    assert_eq!(ROOT_CLASS, "app-root");
    assert_eq!(BODY_CLASS, "app-body");
}

#[test]
fn body_style_exposes_both_font_variables() {
    let style = font_variables_style(&FONTS);
    assert!(style.contains("--font-geist-sans"));
    assert!(style.contains("--font-geist-mono"));
}

#[test]
fn layout_metadata_defaults_to_local_base_url() {
    let meta = site::SiteMetadata::default();
    assert_eq!(meta.canonical_url(), "http://localhost:3000/");
    assert_eq!(meta.resolve(&meta.icon), "http://localhost:3000/favicon.ico");
    assert_eq!(meta.robots.directive(), "index, follow");
}

// =============================================================
// Head metadata
// =============================================================

#[test]
fn head_tags_cover_metadata_and_fonts_in_order() {
    let meta = site::SiteMetadata::with_base_url("https://mindmarks.app");
    let tags = head_tags(&meta, &FONTS);
    assert_eq!(tags[0], HeadTag::Title(site::SITE_TITLE.to_owned()));
    assert_eq!(tags[1], HeadTag::Meta { name: "description", content: site::SITE_DESCRIPTION.to_owned() });
    assert_eq!(tags[2], HeadTag::Meta { name: "robots", content: "index, follow".to_owned() });
    assert_eq!(tags[3], HeadTag::Link { rel: "icon", href: "https://mindmarks.app/favicon.ico".to_owned() });
    assert_eq!(tags[4], HeadTag::Link { rel: "canonical", href: "https://mindmarks.app/".to_owned() });
    let fonts: Vec<_> = tags[5..].to_vec();
    assert_eq!(
        fonts,
        FONTS
            .iter()
            .map(|font| HeadTag::Link { rel: "stylesheet", href: font.stylesheet.to_owned() })
            .collect::<Vec<_>>()
    );
}

#[test]
fn head_tags_follow_robots_directive() {
    let mut meta = site::SiteMetadata::default();
    meta.robots = site::Robots { index: false, follow: true };
    let tags = head_tags(&meta, &[]);
    assert_eq!(tags.len(), 5);
    assert!(tags.contains(&HeadTag::Meta { name: "robots", content: "noindex, follow".to_owned() }));
}

// =============================================================
// Layout nesting
// =============================================================

#[cfg(feature = "ssr")]
#[component]
fn ThemeReader() -> impl IntoView {
    let theme = use_context::<RwSignal<crate::state::theme::ThemeState>>();
    let label = if theme.is_some() { "theme-provided" } else { "theme-missing" };
    view! { <span>{label}</span> }
}

#[cfg(feature = "ssr")]
#[test]
fn layout_children_render_inside_providers() {
    let owner = Owner::new();
    owner.set();
    provide_meta_context();
    let html = view! {
        <RootLayout>
            <ThemeReader/>
        </RootLayout>
    }
    .to_html();
    assert!(html.contains("theme-provided"));
    assert!(!html.contains("Something went wrong."));
}

#[cfg(feature = "ssr")]
#[test]
fn layout_replaces_failed_children_with_fallback() {
    let owner = Owner::new();
    owner.set();
    provide_meta_context();
    let failure = site::SiteConfigError::InvalidBaseUrl { var: site::BASE_URL_ENV, value: "nope".to_owned() };
    let html = view! {
        <RootLayout>
            {Err::<String, _>(failure)}
        </RootLayout>
    }
    .to_html();
    assert!(html.contains("error-fallback"));
    assert!(html.contains("Something went wrong."));
    assert!(html.contains("PUBLIC_APP_URL must be an absolute http(s) URL"));
}
