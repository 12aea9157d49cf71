//! Character-class predicates applied before any parsing.

use crate::constants::EXCLUDED_CHARS;

/// Returns true if the character may never appear in a URI or IRI reference.
///
/// Covers control characters, whitespace, and the delimiters
/// `< > " { } | \ ^` and backtick.
#[must_use]
pub fn is_excluded_char(c: char) -> bool {
    c.is_control() || c.is_whitespace() || EXCLUDED_CHARS.contains(&c)
}

/// Finds the first excluded character, returning it with its character
/// position.
#[must_use]
pub fn find_excluded(input: &str) -> Option<(char, usize)> {
    input
        .chars()
        .enumerate()
        .find(|&(_, c)| is_excluded_char(c))
        .map(|(i, c)| (c, i))
}

/// Finds the first character outside the ASCII range, returning it with its
/// character position.
#[must_use]
pub fn find_non_ascii(input: &str) -> Option<(char, usize)> {
    input
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii())
        .map(|(i, c)| (c, i))
}

/// Returns true if the character may continue a scheme after its first letter.
#[must_use]
pub const fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')
}

/// Returns the length of the scheme if the input begins with
/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"`.
///
/// The returned length excludes the colon.
#[must_use]
pub fn scheme_len(input: &str) -> Option<usize> {
    let mut chars = input.char_indices();
    match chars.next() {
        Some((_, c)) if c.is_ascii_alphabetic() => {}
        _ => return None,
    }
    for (i, c) in chars {
        if c == ':' {
            return Some(i);
        }
        if !is_scheme_char(c) {
            return None;
        }
    }
    None
}

/// Returns true if the input begins with a scheme token.
#[must_use]
pub fn has_scheme(input: &str) -> bool {
    scheme_len(input).is_some()
}
