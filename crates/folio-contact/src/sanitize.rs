//! Input sanitizer and email shape check.
//!
//! Pure functions, no failure cases. Lengths are counted in characters
//! (Unicode scalar values), never bytes, so truncation can't split a code point.

use lazy_static::lazy_static;
use regex::Regex;

/// Bound applied when a caller has no field-specific limit.
pub const DEFAULT_MAX_LENGTH: usize = 1000;
pub const NAME_MAX_LENGTH: usize = 100;
pub const EMAIL_MAX_LENGTH: usize = 100;
pub const MESSAGE_MAX_LENGTH: usize = 5000;

lazy_static! {
    /// `local@domain.tld`, where each part is one or more non-whitespace, non-`@` chars.
    static ref EMAIL_SHAPE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Strip `<` and `>`, trim surrounding whitespace and bound to `max_length` characters.
///
/// The output is a fixed point: `sanitize(&sanitize(s, n), n) == sanitize(s, n)`.
/// Whitespace exposed at the end by truncation is trimmed too.
pub fn sanitize(raw: &str, max_length: usize) -> String {
    let stripped: String = raw.chars().filter(|c| !matches!(c, '<' | '>')).collect();
    let bounded: String = stripped.trim().chars().take(max_length).collect();
    bounded.trim_end().to_string()
}

/// Sanitize with [`DEFAULT_MAX_LENGTH`].
pub fn sanitize_default(raw: &str) -> String {
    sanitize(raw, DEFAULT_MAX_LENGTH)
}

/// Permissive email shape check. Not RFC 5322.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_SHAPE.is_match(s)
}
