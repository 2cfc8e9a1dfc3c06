//! Validation rules for checksums and release tags.
//!
//! Pure functions with no I/O or side effects.

use crate::field::Field;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// `major.minor.patch` with an optional leading `v`, nothing else.
static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v?[0-9]+\.[0-9]+\.[0-9]+$").expect("tag pattern must compile")
});

/// Reason a candidate value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("must be alphanumeric")]
    NotAlphanumeric,

    #[error("must be lowercase")]
    NotLowercase,

    #[error("must be hexadecimal")]
    NotHexadecimal,

    #[error("must not contain any whitespace")]
    ContainsWhitespace,

    #[error("must adhere to x.x.x or vx.x.x major/minor/patch format")]
    MalformedTag,
}

/// Validates a value for the given declaration.
pub fn validate(field: Field, value: &str) -> Result<(), Rejection> {
    match field {
        Field::Checksum => validate_checksum(value),
        Field::Tag => validate_tag(value),
    }
}

/// Validates a release artifact checksum.
///
/// ## Rules (first failure wins)
/// 1. Non-empty, ASCII letters and digits only
/// 2. No uppercase letters
/// 3. Hexadecimal digits, optionally after a `0x` prefix
pub fn validate_checksum(value: &str) -> Result<(), Rejection> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(Rejection::NotAlphanumeric);
    }

    if value.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(Rejection::NotLowercase);
    }

    let digits = value.strip_prefix("0x").unwrap_or(value);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Rejection::NotHexadecimal);
    }

    Ok(())
}

/// Validates a release tag.
///
/// Any whitespace is rejected first, wherever it appears. The remaining value
/// must be `x.y.z` or `vx.y.z` with ASCII digit components.
pub fn validate_tag(value: &str) -> Result<(), Rejection> {
    if value.chars().any(char::is_whitespace) {
        return Err(Rejection::ContainsWhitespace);
    }

    if !TAG_PATTERN.is_match(value) {
        return Err(Rejection::MalformedTag);
    }

    Ok(())
}
