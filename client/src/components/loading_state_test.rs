use super::*;

#[test]
fn resolve_message_defaults_to_loading() {
    assert_eq!(resolve_message(None), "Loading...");
    assert_eq!(resolve_message(Some("Fetching".to_owned())), "Fetching");
}

#[test]
fn resolve_class_defaults_to_viewport_layout() {
    assert_eq!(resolve_class(None), DEFAULT_LOADING_CLASS);
    assert_eq!(resolve_class(Some("inline-loader".to_owned())), "inline-loader");
}

#[cfg(feature = "ssr")]
#[test]
fn renders_default_message_and_class() {
    let html = view! { <LoadingState/> }.to_html();
    assert!(html.contains("Loading..."));
    assert!(html.contains(DEFAULT_LOADING_CLASS));
}

#[cfg(feature = "ssr")]
#[test]
fn renders_only_the_custom_message() {
    let html = view! { <LoadingState message="Fetching"/> }.to_html();
    assert!(html.contains("Fetching"));
    assert!(!html.contains(DEFAULT_LOADING_MESSAGE));
}
