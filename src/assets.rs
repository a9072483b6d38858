//! Static asset URLs for DSFR fonts and favicons.

use crate::fonts::Font;

pub const DEFAULT_ASSETS_BASE: &str = "/dsfr";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetUrls {
    base: String,
}

impl AssetUrls {
    /// Trailing slashes on `base` are dropped.
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self { base: base.trim_end_matches('/').to_owned() }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn font_url(&self, font: Font) -> String {
        format!("{}/fonts/{}.woff2", self.base, font.file_basename())
    }

    #[must_use]
    pub fn apple_touch_icon(&self) -> String {
        self.favicon("apple-touch-icon.png")
    }

    #[must_use]
    pub fn favicon_svg(&self) -> String {
        self.favicon("favicon.svg")
    }

    #[must_use]
    pub fn favicon_ico(&self) -> String {
        self.favicon("favicon.ico")
    }

    #[must_use]
    pub fn webmanifest(&self) -> String {
        self.favicon("manifest.webmanifest")
    }

    fn favicon(&self, file: &str) -> String {
        format!("{}/favicon/{file}", self.base)
    }
}

impl Default for AssetUrls {
    fn default() -> Self {
        Self::new(DEFAULT_ASSETS_BASE)
    }
}

#[cfg(test)]
#[path = "assets_test.rs"]
mod tests;
