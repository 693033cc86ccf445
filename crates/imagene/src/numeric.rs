//! Numeric coercion for settings input
//!
//! The reducer never rejects a settings edit. Raw field text goes through
//! [`parse_int_or_default`], which always produces a value. [`parse_strict`]
//! is the validating counterpart used at the UI boundary to report input
//! that had to be coerced.

use crate::error::InputError;

/// Value used when settings input has no usable number
pub const COERCED_DEFAULT: u32 = 0;

/// Parse the leading integer of `text`, or return `default`.
///
/// Follows the usual parseInt reading: surrounding whitespace is ignored, an
/// optional `+` is accepted, then the longest run of ASCII digits is used and
/// anything after it is dropped (`"12px"` is 12). No digits yields `default`.
/// A negative number is outside the settings domain and also yields
/// `default`. Values above `u32::MAX` saturate.
pub fn parse_int_or_default(text: &str, default: u32) -> u32 {
    let text = text.trim();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };

    if digits.is_empty() {
        return default;
    }
    if negative && digits.bytes().any(|b| b != b'0') {
        return default;
    }

    digits.bytes().fold(0u32, |acc, b| {
        acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
    })
}

/// Parse `text` as a whole non-negative decimal number
pub fn parse_strict(text: &str) -> Result<u32, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }
    let digits = text.strip_prefix('+').unwrap_or(text);
    if let Some(magnitude) = digits.strip_prefix('-') {
        if !magnitude.is_empty() && magnitude.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InputError::Negative);
        }
    }
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber(text.to_string()));
    }
    digits.parse::<u32>().map_err(|_| InputError::OutOfRange)
}
