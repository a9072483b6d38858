//! Color-scheme cookie routes.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::color_scheme::{ColorScheme, THEME_COOKIE_NAME};
use crate::document::DocumentInitialProps;
use crate::extract::ColorSchemeCookie;

const COOKIE_MAX_AGE_DAYS: i64 = 365;

/// Not HttpOnly: the browser runtime reads and rewrites it.
fn theme_cookie(scheme: ColorScheme) -> Cookie<'static> {
    Cookie::build((THEME_COOKIE_NAME, scheme.as_str()))
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(Duration::days(COOKIE_MAX_AGE_DAYS))
        .build()
}

fn parse_scheme(raw: &str) -> Result<ColorScheme, StatusCode> {
    raw.parse::<ColorScheme>().map_err(|e| {
        tracing::debug!(error = %e, "rejecting color scheme");
        StatusCode::BAD_REQUEST
    })
}

/// `GET /api/color-scheme` — the preference the server sees for this request.
pub async fn current(ColorSchemeCookie(color_scheme): ColorSchemeCookie) -> Json<DocumentInitialProps> {
    Json(DocumentInitialProps { color_scheme })
}

/// `PUT /api/color-scheme/{scheme}` — persist the preference.
pub async fn set(jar: CookieJar, Path(raw): Path<String>) -> Result<(CookieJar, StatusCode), StatusCode> {
    let scheme = parse_scheme(&raw)?;
    tracing::info!(color_scheme = %scheme, "color scheme stored");
    Ok((jar.add(theme_cookie(scheme)), StatusCode::NO_CONTENT))
}

/// `POST /api/color-scheme/{scheme}` — form variant of `set`, redirects home.
pub async fn set_and_redirect(jar: CookieJar, Path(raw): Path<String>) -> Response {
    match parse_scheme(&raw) {
        Ok(scheme) => (jar.add(theme_cookie(scheme)), Redirect::to("/")).into_response(),
        Err(status) => status.into_response(),
    }
}

/// `DELETE /api/color-scheme` — forget the preference.
pub async fn clear(jar: CookieJar) -> (CookieJar, StatusCode) {
    let cookie = Cookie::build((THEME_COOKIE_NAME, ""))
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(Duration::ZERO);
    (jar.add(cookie), StatusCode::NO_CONTENT)
}
