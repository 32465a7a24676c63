//! Decorative dotted background drawn as a repeating SVG pattern.
//!
//! The dot is filled with `currentColor`, so the pattern follows the inherited
//! text color (and the theme) without re-rendering. No geometry is validated:
//! a radius larger than half the tile just makes neighbouring dots overlap.

#[cfg(test)]
#[path = "dot_pattern_test.rs"]
mod dot_pattern_test;

use leptos::prelude::*;

pub const DEFAULT_DOT_CLASS: &str = "dot-pattern";

/// Geometry of one pattern tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotTile {
    pub width: f64,
    pub height: f64,
    pub cx: f64,
    pub cy: f64,
    pub cr: f64,
}

impl Default for DotTile {
    fn default() -> Self {
        Self { width: 16.0, height: 16.0, cx: 1.0, cy: 1.0, cr: 1.0 }
    }
}

impl DotTile {
    /// Attribute values for `<pattern width height>`.
    pub fn tile_size(&self) -> (String, String) {
        (self.width.to_string(), self.height.to_string())
    }

    /// Attribute values for `<circle cx cy r>`.
    pub fn dot(&self) -> (String, String, String) {
        (self.cx.to_string(), self.cy.to_string(), self.cr.to_string())
    }
}

/// Fresh id so several patterns can share a document.
pub fn pattern_id() -> String {
    format!("dot-pattern-{}", uuid::Uuid::new_v4().simple())
}

pub fn fill_url(id: &str) -> String {
    format!("url(#{id})")
}

/// Full-size SVG background tiled with dots.
#[component]
pub fn DotPattern(
    #[prop(default = DotTile::default().width)] width: f64,
    #[prop(default = DotTile::default().height)] height: f64,
    #[prop(default = DotTile::default().cx)] cx: f64,
    #[prop(default = DotTile::default().cy)] cy: f64,
    #[prop(default = DotTile::default().cr)] cr: f64,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let tile = DotTile { width, height, cx, cy, cr };
    let id = pattern_id();
    let fill = fill_url(&id);
    let (tile_w, tile_h) = tile.tile_size();
    let (dot_x, dot_y, dot_r) = tile.dot();
    let class = match class {
        Some(extra) => format!("{DEFAULT_DOT_CLASS} {extra}"),
        None => DEFAULT_DOT_CLASS.to_owned(),
    };

    view! {
        <svg class=class width="100%" height="100%" aria-hidden="true">
            <defs>
                <pattern
                    id=id
                    width=tile_w
                    height=tile_h
                    patternUnits="userSpaceOnUse"
                    patternContentUnits="userSpaceOnUse"
                    x="0"
                    y="0"
                >
                    <circle cx=dot_x cy=dot_y r=dot_r fill="currentColor"></circle>
                </pattern>
            </defs>
            <rect width="100%" height="100%" stroke-width="0" fill=fill></rect>
        </svg>
    }
}
