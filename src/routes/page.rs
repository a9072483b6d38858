//! Server-rendered landing page.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Html;
use maud::{Markup, html};

use crate::app::RootComponent;
use crate::color_scheme::ColorScheme;
use crate::context::{AppContext, DocumentContext, ThemeState};
use crate::document::{get_document_dsfr_initial_props, get_dsfr_html_attributes, render_document};
use crate::state::AppState;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeProps {
    pub server_scheme: Option<ColorScheme>,
}

/// Root component of the demo site.
pub struct HomePage;

#[async_trait::async_trait]
impl RootComponent for HomePage {
    type Props = HomeProps;

    fn name(&self) -> &str {
        "HomePage"
    }

    async fn initial_props(&self, ctx: &AppContext) -> HomeProps {
        HomeProps { server_scheme: ctx.theme.get() }
    }

    fn head(&self) -> Markup {
        html! { title { "DSFR" } }
    }

    fn render(&self, props: &HomeProps, theme: Option<ColorScheme>) -> Markup {
        let current = theme.or(props.server_scheme).unwrap_or_default();
        html! {
            main.fr-container {
                h1 { "Système de design de l'État" }
                p id="color-scheme" { "Thème actuel : " (current.as_str()) }
                form method="post" action="/api/color-scheme/dark" {
                    button.fr-btn type="submit" { "Sombre" }
                }
                form method="post" action="/api/color-scheme/light" {
                    button.fr-btn type="submit" { "Clair" }
                }
            }
        }
    }
}

/// `GET /` — render the full document with the stored theme applied.
pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Html<String> {
    let theme = ThemeState::new();

    let ctx = AppContext::server(headers.clone(), theme.clone());
    let props = state.app.initial_props(&ctx).await;

    let doc_props = get_document_dsfr_initial_props(&DocumentContext::new(Some(headers)));
    let attrs = get_dsfr_html_attributes(&doc_props, &theme);

    let body = state.app.render(&props, theme.get());

    Html(render_document("fr", &attrs, state.app.head(), body).into_string())
}
