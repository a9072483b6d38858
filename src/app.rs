//! Root component wrapper adding DSFR head links and theme seeding.
//!
//! SYSTEM CONTEXT
//! ==============
//! A host application exposes its root component through [`RootComponent`].
//! [`with_app_dsfr`] wraps it so that its head markup is preceded by the DSFR
//! links and, on the server, the initial-data-fetch step seeds the
//! request's [`ThemeState`](crate::context::ThemeState) from the theme cookie
//! before the wrapped component fetches its own data.

use async_trait::async_trait;
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

use crate::assets::AssetUrls;
use crate::color_scheme::{ColorScheme, ColorSchemeSetting};
use crate::context::{AppContext, BuildMode, RenderTarget};
use crate::cookie::read_color_scheme_in_headers;
use crate::fonts::Font;
use crate::head::render_head;

// =============================================================================
// PARAMETERS
// =============================================================================

/// Parameters forwarded untouched to the browser runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartParams {
    pub default_color_scheme: ColorSchemeSetting,
    #[serde(default)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DsfrParams {
    #[serde(flatten)]
    pub start: StartParams,
    /// Fonts to preload. Only honoured in production builds; unknown names
    /// are dropped.
    #[serde(default, deserialize_with = "crate::fonts::deserialize_font_list")]
    pub preload_fonts: Vec<Font>,
}

// =============================================================================
// COLLABORATORS
// =============================================================================

/// Capability every wrappable root component provides.
#[async_trait]
pub trait RootComponent: Send + Sync {
    type Props: Default + Send;

    fn name(&self) -> &str;

    /// Data fetched before the first render. Defaults to empty props.
    async fn initial_props(&self, _ctx: &AppContext) -> Self::Props {
        Self::Props::default()
    }

    /// Markup hoisted into `<head>`. Empty by default.
    fn head(&self) -> Markup {
        html! {}
    }

    /// Markup placed in `<body>`.
    fn render(&self, props: &Self::Props, theme: Option<ColorScheme>) -> Markup;
}

/// Hook that wires the DSFR runtime into a browser document.
pub trait DsfrRuntime {
    fn start(&self, params: &StartParams);
}

/// Runtime for hosts that never render on the client.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRuntime;

impl DsfrRuntime for NoopRuntime {
    fn start(&self, params: &StartParams) {
        tracing::debug!(default_color_scheme = params.default_color_scheme.as_str(), "dsfr runtime start skipped");
    }
}

// =============================================================================
// WRAPPER
// =============================================================================

pub struct AppWithDsfr<A> {
    app: A,
    params: DsfrParams,
    mode: BuildMode,
    assets: AssetUrls,
    name: String,
}

/// Wrap `app`. The runtime is started immediately when `target` is the client.
pub fn with_app_dsfr<A: RootComponent>(
    app: A,
    params: DsfrParams,
    mode: BuildMode,
    target: RenderTarget,
    runtime: &dyn DsfrRuntime,
) -> AppWithDsfr<A> {
    if target == RenderTarget::Client {
        runtime.start(&params.start);
    }
    let name = format!("AppWithDsfr({})", app.name());
    AppWithDsfr { app, params, mode, assets: AssetUrls::default(), name }
}

impl<A: RootComponent> AppWithDsfr<A> {
    #[must_use]
    pub fn with_assets(mut self, assets: AssetUrls) -> Self {
        self.assets = assets;
        self
    }

    #[must_use]
    pub fn inner(&self) -> &A {
        &self.app
    }

    #[must_use]
    pub fn assets(&self) -> &AssetUrls {
        &self.assets
    }

    #[must_use]
    pub fn params(&self) -> &DsfrParams {
        &self.params
    }

}

#[async_trait]
impl<A: RootComponent> RootComponent for AppWithDsfr<A> {
    type Props = A::Props;

    fn name(&self) -> &str {
        &self.name
    }

    async fn initial_props(&self, ctx: &AppContext) -> Self::Props {
        if ctx.target == RenderTarget::Server {
            let color_scheme = ctx.headers.as_ref().and_then(read_color_scheme_in_headers);
            tracing::debug!(app = %self.name, color_scheme = ?color_scheme, "seeding color scheme from cookie");
            ctx.theme.set(color_scheme.unwrap_or_default());
        }

        self.app.initial_props(ctx).await
    }

    /// DSFR links first, then whatever the wrapped component hoists.
    fn head(&self) -> Markup {
        html! {
            (render_head(&self.params, self.mode, &self.assets))
            (self.app.head())
        }
    }

    fn render(&self, props: &Self::Props, theme: Option<ColorScheme>) -> Markup {
        self.app.render(props, theme)
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
