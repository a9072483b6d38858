//! Server configuration parsed from environment variables.

use std::path::PathBuf;

use crate::app::{DsfrParams, StartParams};
use crate::assets::DEFAULT_ASSETS_BASE;
use crate::color_scheme::ColorSchemeSetting;
use crate::context::BuildMode;
use crate::fonts::parse_font_list;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ASSETS_DIR: &str = "./dsfr";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown DSFR_BUILD_MODE: {0} (expected 'development' or 'production')")]
    BuildMode(String),
    #[error("invalid DSFR_DEFAULT_COLOR_SCHEME: {0}")]
    ColorScheme(#[from] crate::color_scheme::ParseColorSchemeError),
    #[error("invalid PORT: {0}")]
    Port(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DsfrConfig {
    pub mode: BuildMode,
    pub params: DsfrParams,
    pub assets_base: String,
    pub assets_dir: PathBuf,
    pub port: u16,
}

impl DsfrConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `DSFR_BUILD_MODE`: `production` (default) or `development`
    /// - `DSFR_PRELOAD_FONTS`: comma-separated font basenames
    /// - `DSFR_ASSETS_BASE`: URL prefix for fonts/favicons, default `/dsfr`
    /// - `DSFR_ASSETS_DIR`: directory served under that prefix, default `./dsfr`
    /// - `DSFR_DEFAULT_COLOR_SCHEME`: `light`, `dark` or `system` (default)
    /// - `DSFR_VERBOSE`: boolean, default false
    /// - `PORT`: default 3000
    pub fn from_env() -> Result<Self, ConfigError> {
        let mode = parse_build_mode(std::env::var("DSFR_BUILD_MODE").ok().as_deref())?;
        let default_color_scheme = match std::env::var("DSFR_DEFAULT_COLOR_SCHEME") {
            Ok(raw) => raw.trim().parse::<ColorSchemeSetting>()?,
            Err(_) => ColorSchemeSetting::default(),
        };
        let preload_fonts = std::env::var("DSFR_PRELOAD_FONTS").map(|raw| parse_font_list(&raw)).unwrap_or_default();
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Port(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            mode,
            params: DsfrParams {
                start: StartParams { default_color_scheme, verbose: env_bool("DSFR_VERBOSE").unwrap_or(false) },
                preload_fonts,
            },
            assets_base: std::env::var("DSFR_ASSETS_BASE").unwrap_or_else(|_| DEFAULT_ASSETS_BASE.to_string()),
            assets_dir: std::env::var("DSFR_ASSETS_DIR")
                .map_or_else(|_| PathBuf::from(DEFAULT_ASSETS_DIR), PathBuf::from),
            port,
        })
    }
}

/// `None` when the variable is unset or not a recognised boolean.
fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key).ok().as_deref().and_then(parse_bool)
}

fn parse_bool(raw: &str) -> Option<bool> {
    const TRUTHY: [&str; 4] = ["1", "true", "yes", "on"];
    const FALSY: [&str; 4] = ["0", "false", "no", "off"];

    let raw = raw.trim();
    if TRUTHY.iter().any(|t| raw.eq_ignore_ascii_case(t)) {
        Some(true)
    } else if FALSY.iter().any(|f| raw.eq_ignore_ascii_case(f)) {
        Some(false)
    } else {
        None
    }
}

fn parse_build_mode(raw: Option<&str>) -> Result<BuildMode, ConfigError> {
    match raw.map(str::trim).unwrap_or("production") {
        "production" => Ok(BuildMode::Production),
        "development" => Ok(BuildMode::Development),
        other => Err(ConfigError::BuildMode(other.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
