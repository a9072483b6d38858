//! Per-request render context.
//!
//! DESIGN
//! ======
//! The color scheme observed while rendering lives in a `ThemeState` owned by
//! the request, never in a global. The same handle is shared by the app's
//! initial-data-fetch step and the document-attribute step, so concurrent
//! requests cannot observe each other's preference.

use std::sync::{Arc, Mutex, PoisonError};

use axum::http::HeaderMap;

use crate::color_scheme::ColorScheme;

/// Build flavour. Font preloading is disabled in development.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuildMode {
    Development,
    #[default]
    Production,
}

/// Where the current render runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    Server,
    Client,
}

/// Shared cell holding the color scheme of one request.
#[derive(Debug, Clone, Default)]
pub struct ThemeState {
    inner: Arc<Mutex<Option<ColorScheme>>>,
}

impl ThemeState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self) -> Option<ColorScheme> {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set(&self, scheme: ColorScheme) {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = Some(scheme);
    }

    #[must_use]
    pub fn current_or_default(&self) -> ColorScheme {
        self.get().unwrap_or_default()
    }
}

/// Input of the app-level initial-data-fetch hook.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Request headers; only present when rendering on the server.
    pub headers: Option<HeaderMap>,
    pub target: RenderTarget,
    pub theme: ThemeState,
}

impl AppContext {
    #[must_use]
    pub fn server(headers: HeaderMap, theme: ThemeState) -> Self {
        Self { headers: Some(headers), target: RenderTarget::Server, theme }
    }

    #[must_use]
    pub fn client(theme: ThemeState) -> Self {
        Self { headers: None, target: RenderTarget::Client, theme }
    }
}

/// Input of the document-template hooks.
#[derive(Debug, Clone, Default)]
pub struct DocumentContext {
    pub headers: Option<HeaderMap>,
}

impl DocumentContext {
    #[must_use]
    pub fn new(headers: Option<HeaderMap>) -> Self {
        Self { headers }
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod tests;
