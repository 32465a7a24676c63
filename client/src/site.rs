//! Site metadata and font configuration.
//!
//! DESIGN
//! ======
//! Metadata is process-wide configuration: the server builds it once at
//! startup from `PUBLIC_APP_URL` and installs it with [`install`]; every render
//! reads the same value through [`current`]. The browser bundle has no process
//! environment, so the hydrate build bakes the variable in at compile time.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use std::sync::OnceLock;

use serde::Serialize;

pub const BASE_URL_ENV: &str = "PUBLIC_APP_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const SITE_TITLE: &str = "Mindmarks";
pub const SITE_DESCRIPTION: &str = "Keep track of the books, articles, videos and courses you learn from.";
pub const ICON_PATH: &str = "/favicon.ico";

static SITE: OnceLock<SiteMetadata> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SiteConfigError {
    #[error("{var} must be an absolute http(s) URL, got '{value}'")]
    InvalidBaseUrl { var: &'static str, value: String },
}

/// Crawler directives emitted as `<meta name="robots">`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
}

impl Default for Robots {
    fn default() -> Self {
        Self { index: true, follow: true }
    }
}

impl Robots {
    pub fn directive(self) -> String {
        let index = if self.index { "index" } else { "noindex" };
        let follow = if self.follow { "follow" } else { "nofollow" };
        format!("{index}, {follow}")
    }
}

/// Static document metadata for every page of the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteMetadata {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub base_url: String,
    pub robots: Robots,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

impl SiteMetadata {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            title: SITE_TITLE.to_owned(),
            description: SITE_DESCRIPTION.to_owned(),
            icon: ICON_PATH.to_owned(),
            base_url: base_url.into(),
            robots: Robots::default(),
        }
    }

    /// Build metadata from an arbitrary variable lookup.
    ///
    /// A missing or blank `PUBLIC_APP_URL` falls back to [`DEFAULT_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Returns [`SiteConfigError::InvalidBaseUrl`] when the override is not an
    /// absolute `http://` or `https://` URL.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SiteConfigError> {
        let Some(raw) = lookup(BASE_URL_ENV) else {
            return Ok(Self::default());
        };
        let value = raw.trim();
        if value.is_empty() {
            return Ok(Self::default());
        }
        if !is_absolute_http_url(value) {
            return Err(SiteConfigError::InvalidBaseUrl { var: BASE_URL_ENV, value: value.to_owned() });
        }
        Ok(Self::with_base_url(value))
    }

    /// Build metadata from the process environment (server) or from the value
    /// baked in at compile time (browser).
    ///
    /// # Errors
    ///
    /// See [`SiteMetadata::from_lookup`].
    pub fn from_env() -> Result<Self, SiteConfigError> {
        #[cfg(not(feature = "hydrate"))]
        {
            Self::from_lookup(|key| std::env::var(key).ok())
        }
        #[cfg(feature = "hydrate")]
        {
            Self::from_lookup(|key| {
                if key == BASE_URL_ENV { option_env!("PUBLIC_APP_URL").map(str::to_owned) } else { None }
            })
        }
    }

    /// Resolve a metadata path against the base URL. Absolute URLs pass through.
    pub fn resolve(&self, path: &str) -> String {
        if is_absolute_http_url(path) {
            return path.to_owned();
        }
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    pub fn canonical_url(&self) -> String {
        self.resolve("/")
    }
}

fn is_absolute_http_url(value: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|scheme| value.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty() && !rest.starts_with('/')))
}

/// Store the startup metadata. The first installed value wins.
pub fn install(meta: SiteMetadata) -> &'static SiteMetadata {
    SITE.get_or_init(|| meta)
}

/// Metadata for the current process, loading it from the environment if
/// nothing was installed. An invalid override is logged and replaced by the
/// defaults.
pub fn current() -> &'static SiteMetadata {
    SITE.get_or_init(|| metadata_or_default(SiteMetadata::from_env()))
}

fn metadata_or_default(loaded: Result<SiteMetadata, SiteConfigError>) -> SiteMetadata {
    loaded.unwrap_or_else(|err| {
        leptos::logging::warn!("falling back to default site metadata: {err}");
        SiteMetadata::default()
    })
}

// =============================================================================
// FONTS
// =============================================================================

/// A web font family exposed to stylesheets through a CSS custom property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontFamily {
    pub family: &'static str,
    pub variable: &'static str,
    pub fallback: &'static str,
    pub stylesheet: &'static str,
}

pub const GEIST_SANS: FontFamily = FontFamily {
    family: "Geist",
    variable: "--font-geist-sans",
    fallback: "ui-sans-serif, system-ui, sans-serif",
    stylesheet: "https://fonts.googleapis.com/css2?family=Geist:wght@100..900&display=swap",
};

pub const GEIST_MONO: FontFamily = FontFamily {
    family: "Geist Mono",
    variable: "--font-geist-mono",
    fallback: "ui-monospace, SFMono-Regular, monospace",
    stylesheet: "https://fonts.googleapis.com/css2?family=Geist+Mono:wght@100..900&display=swap",
};

pub const FONTS: [FontFamily; 2] = [GEIST_SANS, GEIST_MONO];

impl FontFamily {
    pub fn declaration(&self) -> String {
        format!("{}: '{}', {}", self.variable, self.family, self.fallback)
    }
}

/// Inline `style` value declaring one custom property per font family.
pub fn font_variables_style(fonts: &[FontFamily]) -> String {
    fonts
        .iter()
        .map(FontFamily::declaration)
        .collect::<Vec<_>>()
        .join("; ")
}
