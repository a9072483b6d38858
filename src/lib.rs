//! DSFR theming for axum server-side rendering.
//!
//! Injects the DSFR `<head>` links (font preloads, favicons, manifest) and
//! keeps the light/dark preference stored in the `data-fr-theme` cookie in
//! sync with the markup rendered on the server, so the first paint already
//! uses the right theme.

pub mod app;
pub mod assets;
pub mod color_scheme;
pub mod config;
pub mod context;
pub mod cookie;
pub mod document;
pub mod extract;
pub mod fonts;
pub mod head;
pub mod routes;
pub mod state;

pub use app::{AppWithDsfr, DsfrParams, DsfrRuntime, RootComponent, StartParams, with_app_dsfr};
pub use color_scheme::{ColorScheme, DATA_FR_SCHEME, DATA_FR_THEME, THEME_COOKIE_NAME};
pub use context::{AppContext, BuildMode, DocumentContext, RenderTarget, ThemeState};
pub use cookie::read_color_scheme_in_cookie;
pub use document::{DocumentInitialProps, HtmlAttributes, get_document_dsfr_initial_props, get_dsfr_html_attributes};
pub use fonts::Font;
