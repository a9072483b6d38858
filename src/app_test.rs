use std::sync::atomic::{AtomicUsize, Ordering};

use axum::http::header::COOKIE;
use axum::http::{HeaderMap, HeaderValue};

use super::*;
use crate::context::ThemeState;

#[derive(Debug, Default, PartialEq)]
struct PageProps {
    title: String,
    theme_at_fetch: Option<ColorScheme>,
}

/// Records the theme it observes while fetching.
struct Page;

#[async_trait]
impl RootComponent for Page {
    type Props = PageProps;

    fn name(&self) -> &str {
        "Page"
    }

    async fn initial_props(&self, ctx: &AppContext) -> PageProps {
        PageProps { title: "hello".into(), theme_at_fetch: ctx.theme.get() }
    }

    fn head(&self) -> Markup {
        html! { title { (self.name()) } }
    }

    fn render(&self, props: &PageProps, theme: Option<ColorScheme>) -> Markup {
        html! { main data-theme=(theme.map_or("unset", ColorScheme::as_str)) { (props.title) } }
    }
}

/// Relies on the default data-fetch hook.
struct Bare;

impl RootComponent for Bare {
    type Props = Vec<String>;

    fn name(&self) -> &str {
        "Bare"
    }

    fn render(&self, _props: &Vec<String>, _theme: Option<ColorScheme>) -> Markup {
        html! { p { "bare" } }
    }
}

#[derive(Default)]
struct CountingRuntime {
    starts: AtomicUsize,
}

impl DsfrRuntime for CountingRuntime {
    fn start(&self, _params: &StartParams) {
        self.starts.fetch_add(1, Ordering::SeqCst);
    }
}

fn cookie_headers(raw: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, HeaderValue::from_static(raw));
    headers
}

fn server_app<A: RootComponent>(app: A) -> AppWithDsfr<A> {
    with_app_dsfr(app, DsfrParams::default(), BuildMode::Production, RenderTarget::Server, &NoopRuntime)
}

#[tokio::test]
async fn server_fetch_seeds_theme_before_delegating() {
    let app = server_app(Page);
    let ctx = AppContext::server(cookie_headers("foo=bar; data-fr-theme=dark"), ThemeState::new());

    let props = app.initial_props(&ctx).await;

    assert_eq!(ctx.theme.get(), Some(ColorScheme::Dark));
    assert_eq!(props, PageProps { title: "hello".into(), theme_at_fetch: Some(ColorScheme::Dark) });
}

#[tokio::test]
async fn server_fetch_defaults_to_light_without_cookie() {
    let app = server_app(Page);
    let ctx = AppContext::server(HeaderMap::new(), ThemeState::new());

    app.initial_props(&ctx).await;

    assert_eq!(ctx.theme.get(), Some(ColorScheme::Light));
}

#[tokio::test]
async fn server_fetch_defaults_to_light_on_invalid_cookie() {
    let app = server_app(Page);
    let ctx = AppContext::server(cookie_headers("data-fr-theme=purple"), ThemeState::new());

    app.initial_props(&ctx).await;

    assert_eq!(ctx.theme.get(), Some(ColorScheme::Light));
}

#[tokio::test]
async fn client_fetch_never_reads_cookie() {
    let runtime = CountingRuntime::default();
    let app = with_app_dsfr(Page, DsfrParams::default(), BuildMode::Production, RenderTarget::Client, &runtime);
    let ctx = AppContext::client(ThemeState::new());

    let props = app.initial_props(&ctx).await;

    assert_eq!(ctx.theme.get(), None);
    assert_eq!(props.title, "hello");
}

#[tokio::test]
async fn default_hook_is_used_when_component_has_none() {
    let app = server_app(Bare);
    let ctx = AppContext::server(cookie_headers("data-fr-theme=dark"), ThemeState::new());

    let props = app.initial_props(&ctx).await;

    assert!(props.is_empty());
    assert_eq!(ctx.theme.get(), Some(ColorScheme::Dark));
}

#[test]
fn runtime_starts_only_on_client() {
    let runtime = CountingRuntime::default();
    let _server = with_app_dsfr(Page, DsfrParams::default(), BuildMode::Production, RenderTarget::Server, &runtime);
    assert_eq!(runtime.starts.load(Ordering::SeqCst), 0);

    let _client = with_app_dsfr(Page, DsfrParams::default(), BuildMode::Production, RenderTarget::Client, &runtime);
    assert_eq!(runtime.starts.load(Ordering::SeqCst), 1);
}

#[test]
fn wrapper_exposes_inner_surface() {
    let app = server_app(Page);
    assert_eq!(app.name(), "AppWithDsfr(Page)");
    assert_eq!(app.inner().name(), "Page");
}

#[test]
fn head_puts_dsfr_links_before_component_head() {
    let params = DsfrParams { preload_fonts: vec![Font::SpectralRegular], ..DsfrParams::default() };
    let app = with_app_dsfr(Page, params, BuildMode::Production, RenderTarget::Server, &NoopRuntime);

    let head = app.head().into_string();

    let preload_at = head.find("Spectral-Regular.woff2").expect("preload link");
    let title_at = head.find("<title>Page</title>").expect("component head");
    assert!(preload_at < title_at);
}

#[test]
fn render_is_body_only() {
    let app = server_app(Page);

    let body = app.render(&PageProps { title: "t".into(), theme_at_fetch: None }, Some(ColorScheme::Dark)).into_string();

    assert_eq!(body, r#"<main data-theme="dark">t</main>"#);
}

#[test]
fn default_component_head_is_empty() {
    assert_eq!(Bare.head().into_string(), "");
}

#[test]
fn params_drop_unknown_preload_fonts() {
    let params: DsfrParams =
        serde_json::from_str(r#"{"defaultColorScheme":"dark","preloadFonts":["Marianne-Bold","Comic-Sans"]}"#)
            .unwrap();
    assert_eq!(params.preload_fonts, vec![Font::MarianneBold]);
}

#[test]
fn custom_asset_base_is_used() {
    let app = server_app(Bare).with_assets(AssetUrls::new("/static/dsfr"));
    assert!(app.head().into_string().contains("/static/dsfr/favicon/favicon.svg"));
}

#[test]
fn params_deserialize_from_camel_case() {
    let params: DsfrParams = serde_json::from_str(
        r#"{"defaultColorScheme":"dark","verbose":true,"preloadFonts":["Marianne-Bold"]}"#,
    )
    .unwrap();
    assert_eq!(params.start.default_color_scheme, ColorSchemeSetting::Dark);
    assert!(params.start.verbose);
    assert_eq!(params.preload_fonts, vec![Font::MarianneBold]);
}
