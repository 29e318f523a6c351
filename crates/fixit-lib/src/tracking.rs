//! Tracking-code issuance.
//!
//! Codes follow the public format `PSU-<year>-<serial>` with a six-digit
//! serial, e.g. `PSU-2026-483920`. The generator itself does not check
//! uniqueness; the store passes an existence predicate and minting
//! retries on collision, bounded, then fails fast.

use chrono::{DateTime, Datelike, Utc};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

use crate::error::{FixitError, Result};

/// Public code prefix.
pub const CODE_PREFIX: &str = "PSU";

/// Inclusive serial range; six digits so codes read like ticket numbers.
const SERIAL_RANGE: std::ops::RangeInclusive<u32> = 100_000..=999_999;

/// Minting attempts before giving up on a unique code.
const MAX_ATTEMPTS: u32 = 32;

static CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^PSU-\d{4}-\d{6}$").expect("tracking-code pattern is valid"));

/// Check whether a string is a well-formed tracking code.
#[must_use]
pub fn is_valid_code(code: &str) -> bool {
    CODE_RE.is_match(code)
}

/// Canonical form for lookup display: trimmed, upper-cased.
#[must_use]
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

/// Mint one candidate code for the year of `now`.
#[must_use]
pub fn generate_candidate(now: DateTime<Utc>) -> String {
    let serial = rand::rng().random_range(SERIAL_RANGE);
    format!("{CODE_PREFIX}-{:04}-{serial}", now.year())
}

/// Mint a code that is unique per the `exists` check.
///
/// # Errors
///
/// Returns `TrackingCodeExhausted` if every attempt collided.
pub fn generate<F>(now: DateTime<Utc>, exists: F) -> Result<String>
where
    F: Fn(&str) -> bool,
{
    for _ in 0..MAX_ATTEMPTS {
        let code = generate_candidate(now);
        if !exists(&code) {
            return Ok(code);
        }
    }
    Err(FixitError::TrackingCodeExhausted {
        attempts: MAX_ATTEMPTS,
    })
}
