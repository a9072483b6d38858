use super::*;
use std::sync::{Mutex, MutexGuard};

use crate::fonts::Font;

/// Serialises tests that touch the `DSFR_*` variables.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Callers must hold `env_guard()`.
unsafe fn clear_dsfr_env() {
    unsafe {
        std::env::remove_var("DSFR_BUILD_MODE");
        std::env::remove_var("DSFR_PRELOAD_FONTS");
        std::env::remove_var("DSFR_ASSETS_BASE");
        std::env::remove_var("DSFR_ASSETS_DIR");
        std::env::remove_var("DSFR_DEFAULT_COLOR_SCHEME");
        std::env::remove_var("DSFR_VERBOSE");
        std::env::remove_var("PORT");
    }
}

#[test]
fn from_env_defaults() {
    let _guard = env_guard();
    unsafe { clear_dsfr_env() };

    let cfg = DsfrConfig::from_env().unwrap();
    assert_eq!(cfg.mode, BuildMode::Production);
    assert_eq!(cfg.params, DsfrParams::default());
    assert_eq!(cfg.assets_base, "/dsfr");
    assert_eq!(cfg.assets_dir, PathBuf::from(DEFAULT_ASSETS_DIR));
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn from_env_parses_overrides() {
    let _guard = env_guard();
    unsafe {
        clear_dsfr_env();
        std::env::set_var("DSFR_BUILD_MODE", "development");
        std::env::set_var("DSFR_PRELOAD_FONTS", "Marianne-Regular,Unknown,Marianne-Bold");
        std::env::set_var("DSFR_ASSETS_BASE", "/static/dsfr");
        std::env::set_var("DSFR_DEFAULT_COLOR_SCHEME", "dark");
        std::env::set_var("DSFR_VERBOSE", "yes");
        std::env::set_var("PORT", "8080");
    }

    let cfg = DsfrConfig::from_env().unwrap();
    assert_eq!(cfg.mode, BuildMode::Development);
    assert_eq!(cfg.params.preload_fonts, vec![Font::MarianneRegular, Font::MarianneBold]);
    assert_eq!(cfg.params.start.default_color_scheme, ColorSchemeSetting::Dark);
    assert!(cfg.params.start.verbose);
    assert_eq!(cfg.assets_base, "/static/dsfr");
    assert_eq!(cfg.port, 8080);

    unsafe { clear_dsfr_env() };
}

#[test]
fn from_env_rejects_bad_values() {
    let _guard = env_guard();
    unsafe {
        clear_dsfr_env();
        std::env::set_var("DSFR_DEFAULT_COLOR_SCHEME", "sepia");
    }
    assert!(matches!(DsfrConfig::from_env(), Err(ConfigError::ColorScheme(_))));

    unsafe {
        clear_dsfr_env();
        std::env::set_var("PORT", "nope");
    }
    assert!(matches!(DsfrConfig::from_env(), Err(ConfigError::Port(p)) if p == "nope"));

    unsafe { clear_dsfr_env() };
}

#[test]
fn parse_build_mode_rejects_unknown() {
    assert!(matches!(parse_build_mode(Some("staging")), Err(ConfigError::BuildMode(m)) if m == "staging"));
    assert_eq!(parse_build_mode(None).unwrap(), BuildMode::Production);
}

#[test]
fn env_bool_variants() {
    for (i, (val, expected)) in [("1", Some(true)), ("Off", Some(false)), ("maybe", None)].iter().enumerate() {
        let key = format!("__TEST_DSFR_EB_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), *expected, "value {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn parse_bool_is_case_and_whitespace_tolerant() {
    for raw in ["TRUE", " yes ", "On", "1"] {
        assert_eq!(parse_bool(raw), Some(true), "value {raw:?}");
    }
    for raw in ["False", "\tno", "OFF ", "0"] {
        assert_eq!(parse_bool(raw), Some(false), "value {raw:?}");
    }
    for raw in ["", "2", "maybe", "truthy"] {
        assert_eq!(parse_bool(raw), None, "value {raw:?}");
    }
}

#[test]
fn verbose_falls_back_to_false_on_garbage() {
    let _guard = env_guard();
    unsafe {
        clear_dsfr_env();
        std::env::set_var("DSFR_VERBOSE", "sometimes");
    }
    assert!(!DsfrConfig::from_env().unwrap().params.start.verbose);
    unsafe { clear_dsfr_env() };
}

#[test]
fn env_bool_unset_returns_none() {
    assert_eq!(env_bool("__TEST_DSFR_EB_SURELY_UNSET__"), None);
}
