//! Light/dark color-scheme preference.
//!
//! DESIGN
//! ======
//! A preference is either `Light` or `Dark`. "No preference" is modelled as
//! `Option<ColorScheme>::None` rather than a third variant, so callers are
//! forced to pick a fallback explicitly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Attribute stamped on `<html>` carrying the scheme.
pub const DATA_FR_SCHEME: &str = "data-fr-scheme";
/// Attribute stamped on `<html>` carrying the theme. Also the cookie key.
pub const DATA_FR_THEME: &str = "data-fr-theme";
/// Cookie holding the persisted preference.
pub const THEME_COOKIE_NAME: &str = DATA_FR_THEME;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color scheme '{0}' (expected 'light' or 'dark')")]
pub struct ParseColorSchemeError(pub String);

impl FromStr for ColorScheme {
    type Err = ParseColorSchemeError;

    /// Only the exact literals are accepted; no trimming or case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseColorSchemeError(other.to_owned())),
        }
    }
}

/// Default scheme handed to the browser runtime at start-up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSchemeSetting {
    Light,
    Dark,
    #[default]
    System,
}

impl ColorSchemeSetting {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

impl From<ColorScheme> for ColorSchemeSetting {
    fn from(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::Light,
            ColorScheme::Dark => Self::Dark,
        }
    }
}

impl FromStr for ColorSchemeSetting {
    type Err = ParseColorSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(Self::System),
            other => other.parse::<ColorScheme>().map(Self::from),
        }
    }
}

#[cfg(test)]
#[path = "color_scheme_test.rs"]
mod tests;
