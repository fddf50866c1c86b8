//! Construction-time invariant checks.
//!
//! Every check is generic over the error kind it raises, so models choose the
//! failure type at the call site:
//!
//! ```ignore
//! guard::for_string_length::<InvalidCarAd>(model, MIN_MODEL_LENGTH, MAX_MODEL_LENGTH, "Model")?;
//! ```
//!
//! Range checks are inclusive on both ends.

use core::fmt::Display;

use regex::Regex;
use url::Url;

use crate::error::{GuardFailure, InvalidPhoneNumber};

/// Default upper bound for URL length.
pub const MAX_URL_LENGTH: usize = 2048;

/// Fails when `value` is empty or whitespace-only.
pub fn against_empty_string<E: GuardFailure>(value: &str, name: &str) -> Result<(), E> {
    if !value.trim().is_empty() {
        return Ok(());
    }

    Err(E::with_message(format!("{name} cannot be null or empty.")))
}

/// Fails when `value` is empty or its length (in characters) is outside `[min, max]`.
pub fn for_string_length<E: GuardFailure>(
    value: &str,
    min: usize,
    max: usize,
    name: &str,
) -> Result<(), E> {
    against_empty_string::<E>(value, name)?;

    let length = value.chars().count();
    if (min..=max).contains(&length) {
        return Ok(());
    }

    Err(E::with_message(format!(
        "{name} must have between {min} and {max} symbols."
    )))
}

/// Fails when `value` is outside `[min, max]`.
///
/// Works for any ordered number: seat counts (`i32`), prices in minor units
/// (`i64`), or fractional amounts (`f64`).
pub fn against_out_of_range<E, N>(value: N, min: N, max: N, name: &str) -> Result<(), E>
where
    E: GuardFailure,
    N: PartialOrd + Display,
{
    if min <= value && value <= max {
        return Ok(());
    }

    Err(E::with_message(format!("{name} must be between {min} and {max}.")))
}

/// Fails when `value` is not a well-formed URL or is longer than [`MAX_URL_LENGTH`].
pub fn for_valid_url<E: GuardFailure>(value: &str, name: &str) -> Result<(), E> {
    for_valid_url_with_max_length::<E>(value, MAX_URL_LENGTH, name)
}

/// Fails when `value` is not a well-formed URL or is longer than `max_length`.
///
/// Accepted forms are absolute URLs with a host (`https://cdn.example.com/a.png`)
/// and root-relative paths (`/images/a.png`).
pub fn for_valid_url_with_max_length<E: GuardFailure>(
    value: &str,
    max_length: usize,
    name: &str,
) -> Result<(), E> {
    if value.len() <= max_length && is_well_formed_url(value) {
        return Ok(());
    }

    Err(E::with_message(format!("{name} must be a valid URL.")))
}

fn is_well_formed_url(value: &str) -> bool {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }

    if value.starts_with('/') && !value.starts_with("//") {
        return Url::parse(&format!("http://localhost{value}")).is_ok();
    }

    matches!(Url::parse(value), Ok(url) if url.has_host())
}

/// Fails with [`InvalidPhoneNumber`] when `value` does not fully match `pattern`.
///
/// Compiles `pattern` on every call; hot paths should keep an anchored
/// [`Regex`] around and use [`matches_regex`].
pub fn validate_regex(value: &str, pattern: &str, message: &str) -> Result<(), InvalidPhoneNumber> {
    let anchored = anchored_regex(pattern)
        .map_err(|e| InvalidPhoneNumber::with_message(format!("invalid pattern: {e}")))?;

    matches_regex(value, &anchored, message)
}

/// Fails with [`InvalidPhoneNumber`] when `regex` does not match `value`.
pub fn matches_regex(value: &str, regex: &Regex, message: &str) -> Result<(), InvalidPhoneNumber> {
    if regex.is_match(value) {
        return Ok(());
    }

    Err(InvalidPhoneNumber::with_message(message))
}

/// `pattern` wrapped so that it must match the whole input.
pub fn anchored_regex(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{pattern})$"))
}

/// Fails when `actual` equals the forbidden `unexpected` value.
pub fn against<E, V>(actual: &V, unexpected: &V, name: &str) -> Result<(), E>
where
    E: GuardFailure,
    V: PartialEq + Display + ?Sized,
{
    if actual != unexpected {
        return Ok(());
    }

    Err(E::with_message(format!("{name} must not be {unexpected}.")))
}
