use super::*;

fn lookup_with(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
    move |key| if key == BASE_URL_ENV { value.map(str::to_owned) } else { None }
}

// =============================================================
// Base URL resolution
// =============================================================

#[test]
fn from_lookup_without_override_uses_local_default() {
    let meta = SiteMetadata::from_lookup(lookup_with(None)).unwrap();
    assert_eq!(meta.base_url, DEFAULT_BASE_URL);
    assert_eq!(meta.base_url, "http://localhost:3000");
}

#[test]
fn from_lookup_with_override_uses_override() {
    let meta = SiteMetadata::from_lookup(lookup_with(Some("https://mindmarks.example.com"))).unwrap();
    assert_eq!(meta.base_url, "https://mindmarks.example.com");
}

#[test]
fn from_lookup_blank_override_falls_back() {
    let meta = SiteMetadata::from_lookup(lookup_with(Some("   "))).unwrap();
    assert_eq!(meta.base_url, DEFAULT_BASE_URL);
}

#[test]
fn from_lookup_rejects_non_http_override() {
    let err = SiteMetadata::from_lookup(lookup_with(Some("ftp://files.example.com"))).unwrap_err();
    assert_eq!(
        err,
        SiteConfigError::InvalidBaseUrl { var: BASE_URL_ENV, value: "ftp://files.example.com".to_owned() }
    );
    assert!(err.to_string().contains("PUBLIC_APP_URL"));
}

#[test]
fn from_lookup_rejects_scheme_without_host() {
    assert!(SiteMetadata::from_lookup(lookup_with(Some("https://"))).is_err());
    assert!(SiteMetadata::from_lookup(lookup_with(Some("localhost:3000"))).is_err());
}

#[test]
fn invalid_override_falls_back_to_defaults() {
    let loaded = SiteMetadata::from_lookup(lookup_with(Some("not a url")));
    assert_eq!(metadata_or_default(loaded), SiteMetadata::default());
}

#[test]
fn valid_override_is_kept_by_fallback() {
    let loaded = SiteMetadata::from_lookup(lookup_with(Some("https://mindmarks.app")));
    assert_eq!(metadata_or_default(loaded).base_url, "https://mindmarks.app");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn from_env_reads_public_app_url() {
    unsafe { std::env::set_var(BASE_URL_ENV, "https://env.example.com") };
    let meta = SiteMetadata::from_env().unwrap();
    unsafe { std::env::remove_var(BASE_URL_ENV) };
    assert_eq!(meta.base_url, "https://env.example.com");
}

// =============================================================
// Static fields
// =============================================================

#[test]
fn default_metadata_carries_static_fields() {
    let meta = SiteMetadata::default();
    assert_eq!(meta.title, "Mindmarks");
    assert_eq!(meta.icon, "/favicon.ico");
    assert!(!meta.description.is_empty());
    assert_eq!(meta.robots, Robots { index: true, follow: true });
}

#[test]
fn robots_directive_permits_index_and_follow() {
    assert_eq!(Robots::default().directive(), "index, follow");
    assert_eq!(Robots { index: false, follow: true }.directive(), "noindex, follow");
    assert_eq!(Robots { index: true, follow: false }.directive(), "index, nofollow");
}

#[test]
fn resolve_joins_relative_paths_against_base() {
    let meta = SiteMetadata::with_base_url("https://mindmarks.example.com/");
    assert_eq!(meta.resolve("/favicon.ico"), "https://mindmarks.example.com/favicon.ico");
    assert_eq!(meta.resolve("og.png"), "https://mindmarks.example.com/og.png");
    assert_eq!(meta.canonical_url(), "https://mindmarks.example.com/");
}

#[test]
fn resolve_keeps_absolute_urls() {
    let meta = SiteMetadata::default();
    assert_eq!(meta.resolve("https://cdn.example.com/x.png"), "https://cdn.example.com/x.png");
}

#[test]
fn metadata_serializes_for_api() {
    let value = serde_json::to_value(SiteMetadata::default()).unwrap();
    assert_eq!(value["base_url"], "http://localhost:3000");
    assert_eq!(value["robots"]["index"], true);
}

// =============================================================
// Fonts
// =============================================================

#[test]
fn font_variables_style_declares_both_families() {
    let style = font_variables_style(&FONTS);
    assert_eq!(
        style,
        "--font-geist-sans: 'Geist', ui-sans-serif, system-ui, sans-serif; \
         --font-geist-mono: 'Geist Mono', ui-monospace, SFMono-Regular, monospace"
    );
}

#[test]
fn font_variables_are_distinct() {
    assert_ne!(GEIST_SANS.variable, GEIST_MONO.variable);
}
