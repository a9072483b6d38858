//! Axum extractor for the theme cookie.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::color_scheme::ColorScheme;
use crate::cookie::read_color_scheme_in_headers;

/// Color-scheme preference carried by the request, if any.
/// Never rejects: a missing or malformed cookie yields `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSchemeCookie(pub Option<ColorScheme>);

impl<S> FromRequestParts<S> for ColorSchemeCookie
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(read_color_scheme_in_headers(&parts.headers)))
    }
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
