//! Document-template helpers stamping the color scheme on `<html>`.
//!
//! `get_document_dsfr_initial_props` reads the preference from the request;
//! `get_dsfr_html_attributes` turns it into attributes for the root element so
//! the first paint already uses the stored theme.

use std::fmt;

use maud::{DOCTYPE, Markup, html};
use serde::{Deserialize, Serialize};

use crate::color_scheme::{ColorScheme, DATA_FR_SCHEME, DATA_FR_THEME};
use crate::context::{DocumentContext, ThemeState};
use crate::cookie::read_color_scheme_in_headers;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInitialProps {
    pub color_scheme: Option<ColorScheme>,
}

#[must_use]
pub fn get_document_dsfr_initial_props(ctx: &DocumentContext) -> DocumentInitialProps {
    let color_scheme = ctx.headers.as_ref().and_then(read_color_scheme_in_headers);
    DocumentInitialProps { color_scheme }
}

/// Attributes for the root element. Empty when there is no preference, in
/// which case `theme` is left untouched.
#[must_use]
pub fn get_dsfr_html_attributes(props: &DocumentInitialProps, theme: &ThemeState) -> HtmlAttributes {
    let Some(color_scheme) = props.color_scheme else {
        return HtmlAttributes::default();
    };

    theme.set(color_scheme);

    HtmlAttributes { entries: vec![(DATA_FR_SCHEME, color_scheme), (DATA_FR_THEME, color_scheme)] }
}

// =============================================================================
// HTML ATTRIBUTES
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlAttributes {
    entries: Vec<(&'static str, ColorScheme)>,
}

impl HtmlAttributes {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<ColorScheme> {
        self.entries.iter().find(|(key, _)| *key == name).map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, ColorScheme)> + '_ {
        self.entries.iter().copied()
    }
}

/// Renders as ` name="value"` pairs, ready to splice into an opening tag.
/// Names are fixed constants and values are `light`/`dark`, so no escaping
/// is needed.
impl fmt::Display for HtmlAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.entries {
            write!(f, r#" {name}="{value}""#)?;
        }
        Ok(())
    }
}

/// Full HTML document with `attrs` spread onto `<html>`.
#[must_use]
pub fn render_document(lang: &str, attrs: &HtmlAttributes, head: Markup, body: Markup) -> Markup {
    let scheme = attrs.get(DATA_FR_SCHEME).map(ColorScheme::as_str);
    let theme = attrs.get(DATA_FR_THEME).map(ColorScheme::as_str);
    html! {
        (DOCTYPE)
        html lang=(lang) data-fr-scheme=[scheme] data-fr-theme=[theme] {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                (head)
            }
            body { (body) }
        }
    }
}

#[cfg(test)]
#[path = "document_test.rs"]
mod tests;
