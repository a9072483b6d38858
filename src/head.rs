//! `<head>` links injected ahead of the page content.

use maud::{Markup, html};

use crate::app::DsfrParams;
use crate::assets::AssetUrls;
use crate::context::BuildMode;
use crate::fonts::Font;

/// Fonts to preload, in table order. Empty in development builds.
#[must_use]
pub fn preloaded_fonts(params: &DsfrParams, mode: BuildMode) -> Vec<Font> {
    if mode == BuildMode::Development {
        return Vec::new();
    }
    Font::ALL.into_iter().filter(|font| params.preload_fonts.contains(font)).collect()
}

#[must_use]
pub fn render_head(params: &DsfrParams, mode: BuildMode, assets: &AssetUrls) -> Markup {
    html! {
        @for font in preloaded_fonts(params, mode) {
            link rel="preload" href=(assets.font_url(font)) as="font" crossorigin="anonymous";
        }
        link rel="apple-touch-icon" href=(assets.apple_touch_icon());
        link rel="icon" href=(assets.favicon_svg()) type="image/svg+xml";
        link rel="shortcut icon" href=(assets.favicon_ico()) type="image/x-icon";
        link rel="manifest" href=(assets.webmanifest()) crossorigin="use-credentials";
    }
}

#[cfg(test)]
#[path = "head_test.rs"]
mod tests;
