//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the wrapped root component and asset settings, all immutable after
//! start-up. Per-request theme data never lives here; each request builds its
//! own `ThemeState`.

use std::path::PathBuf;
use std::sync::Arc;

use crate::app::{AppWithDsfr, NoopRuntime, with_app_dsfr};
use crate::assets::AssetUrls;
use crate::config::DsfrConfig;
use crate::context::RenderTarget;
use crate::routes::page::HomePage;

/// Clone is required by Axum; inner fields are Arc-wrapped or cheap.
#[derive(Clone)]
pub struct AppState {
    pub app: Arc<AppWithDsfr<HomePage>>,
    pub assets_dir: PathBuf,
}

impl AppState {
    #[must_use]
    pub fn new(config: &DsfrConfig) -> Self {
        let app = with_app_dsfr(HomePage, config.params.clone(), config.mode, RenderTarget::Server, &NoopRuntime)
            .with_assets(AssetUrls::new(config.assets_base.clone()));
        Self { app: Arc::new(app), assets_dir: config.assets_dir.clone() }
    }

    #[must_use]
    pub fn assets(&self) -> &AssetUrls {
        self.app.assets()
    }
}
