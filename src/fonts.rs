//! Known DSFR web fonts that may be preloaded.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Font {
    MarianneLight,
    MarianneLightItalic,
    MarianneRegular,
    MarianneRegularItalic,
    MarianneMedium,
    MarianneMediumItalic,
    MarianneBold,
    MarianneBoldItalic,
    SpectralRegular,
    SpectralExtraBold,
}

impl Font {
    /// Table order; preload links are emitted in this order.
    pub const ALL: [Font; 10] = [
        Font::MarianneLight,
        Font::MarianneLightItalic,
        Font::MarianneRegular,
        Font::MarianneRegularItalic,
        Font::MarianneMedium,
        Font::MarianneMediumItalic,
        Font::MarianneBold,
        Font::MarianneBoldItalic,
        Font::SpectralRegular,
        Font::SpectralExtraBold,
    ];

    /// File name without the `.woff2` extension.
    #[must_use]
    pub fn file_basename(self) -> &'static str {
        match self {
            Self::MarianneLight => "Marianne-Light",
            Self::MarianneLightItalic => "Marianne-Light_Italic",
            Self::MarianneRegular => "Marianne-Regular",
            Self::MarianneRegularItalic => "Marianne-Regular_Italic",
            Self::MarianneMedium => "Marianne-Medium",
            Self::MarianneMediumItalic => "Marianne-Medium_Italic",
            Self::MarianneBold => "Marianne-Bold",
            Self::MarianneBoldItalic => "Marianne-Bold_Italic",
            Self::SpectralRegular => "Spectral-Regular",
            Self::SpectralExtraBold => "Spectral-ExtraBold",
        }
    }

    #[must_use]
    pub fn from_basename(basename: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|font| font.file_basename() == basename)
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_basename())
    }
}

impl From<Font> for &'static str {
    fn from(font: Font) -> Self {
        font.file_basename()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown font '{0}'")]
pub struct UnknownFontError(pub String);

impl FromStr for Font {
    type Err = UnknownFontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_basename(s).ok_or_else(|| UnknownFontError(s.to_owned()))
    }
}

impl TryFrom<String> for Font {
    type Error = UnknownFontError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Parse a comma-separated list of font basenames. Unknown names are dropped.
#[must_use]
pub fn parse_font_list(raw: &str) -> Vec<Font> {
    known_fonts(raw.split(',').map(str::trim).filter(|name| !name.is_empty()))
}

/// Serde counterpart of [`parse_font_list`] for a JSON array of basenames.
pub fn deserialize_font_list<'de, D>(deserializer: D) -> Result<Vec<Font>, D::Error>
where
    D: Deserializer<'de>,
{
    let names = Vec::<String>::deserialize(deserializer)?;
    Ok(known_fonts(names.iter().map(String::as_str)))
}

fn known_fonts<'a>(names: impl Iterator<Item = &'a str>) -> Vec<Font> {
    names
        .filter_map(|name| match name.parse::<Font>() {
            Ok(font) => Some(font),
            Err(e) => {
                tracing::debug!(error = %e, "ignoring font in preload list");
                None
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "fonts_test.rs"]
mod tests;
