//! Theme cookie parsing.
//!
//! The header is split the way browsers serialise it (`name=value; name=value`),
//! tolerating any run of spaces after each `;`. Malformed input never fails:
//! an entry without `=`, or whose value is not valid percent-encoded UTF-8,
//! simply has no value.

use std::borrow::Cow;
use std::collections::HashMap;

use axum::http::HeaderMap;
use axum::http::header::COOKIE;
use percent_encoding::percent_decode_str;

use crate::color_scheme::{ColorScheme, THEME_COOKIE_NAME};

/// Extract the color-scheme preference from a raw `Cookie` header value.
///
/// Returns `None` when the header is absent, the theme cookie is missing, or
/// its value is anything other than exactly `light` or `dark`.
#[must_use]
pub fn read_color_scheme_in_cookie(header: Option<&str>) -> Option<ColorScheme> {
    let header = header?;
    let cookies = parse_cookie_header(header);

    let scheme = cookies
        .get(THEME_COOKIE_NAME)
        .and_then(Option::as_deref)
        .and_then(|value| value.parse::<ColorScheme>().ok());

    tracing::trace!(color_scheme = ?scheme, "read theme cookie");
    scheme
}

/// Same as [`read_color_scheme_in_cookie`] but reads every `Cookie` field of
/// a request. HTTP/2 clients may split cookies across several fields; they
/// are rejoined with `"; "` before parsing. Non-ASCII bytes are decoded
/// lossily so a foreign cookie only spoils its own entry.
#[must_use]
pub fn read_color_scheme_in_headers(headers: &HeaderMap) -> Option<ColorScheme> {
    let fields: Vec<Cow<'_, str>> =
        headers.get_all(COOKIE).iter().map(|v| String::from_utf8_lossy(v.as_bytes())).collect();

    if fields.is_empty() {
        return read_color_scheme_in_cookie(None);
    }
    read_color_scheme_in_cookie(Some(&fields.join("; ")))
}

/// Name → decoded value. Later duplicates overwrite earlier ones.
fn parse_cookie_header(header: &str) -> HashMap<&str, Option<String>> {
    header
        .split(';')
        .map(|entry| entry.trim_start_matches(' '))
        .map(|entry| match entry.split_once('=') {
            Some((name, value)) => (name, decode(value)),
            None => (entry, None),
        })
        .collect()
}

fn decode(value: &str) -> Option<String> {
    percent_decode_str(value).decode_utf8().ok().map(|v| v.into_owned())
}

#[cfg(test)]
#[path = "cookie_test.rs"]
mod tests;
