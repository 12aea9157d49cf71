//! URI references (RFC 3986): the ASCII-only identifier.

use crate::error::ParseError;
use crate::identifier::{Identifier, impl_identifier};
use crate::variant::Variant;

/// A validated, normalized URI reference.
///
/// Only ASCII characters are accepted; anything outside the ASCII range is
/// rejected before normalization. Every valid `Uri` is a valid
/// [`Iri`](crate::Iri).
///
/// # Examples
///
/// ```
/// use iri_namespace::{Identifier, Uri, Variant};
///
/// let uri = Uri::parse("http://example.com/a/./b/../c").unwrap();
/// assert_eq!(uri.as_str(), "http://example.com/a/c");
/// assert!(uri.is_hierarchical());
///
/// let path = Uri::parse_as("/a/../../path", Variant::Internal).unwrap();
/// assert_eq!(path.as_str(), "/path");
///
/// assert!(Uri::parse("http://example.com/ü").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uri(String);

impl Uri {
    /// Parses an absolute URI.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the input is not a valid absolute URI.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_as(input, Variant::Absolute)
    }

    /// Parses a URI reference of the given variant.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - The input contains a non-ASCII character
    /// - The input contains an excluded character
    /// - The input is not a reference of `variant`
    pub fn parse_as(input: &str, variant: Variant) -> Result<Self, ParseError> {
        <Self as Identifier>::parse_as(input, variant)
    }

    /// Returns the URI as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the URI, returning its string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl_identifier!(Uri, ascii_only: true);

/// Returns true if `value` is a valid URI reference of `variant`.
///
/// # Examples
///
/// ```
/// use iri_namespace::{is_uri, Variant};
///
/// assert!(is_uri("urn:example:a", Variant::Absolute));
/// assert!(!is_uri("/a", Variant::Absolute));
/// assert!(is_uri("/a", Variant::Internal));
/// ```
#[must_use]
pub fn is_uri(value: &str, variant: Variant) -> bool {
    Uri::is_valid(value, variant)
}

/// Validates `value` as a URI reference of `variant` and returns its
/// normalized form.
///
/// # Errors
///
/// Returns `ParseError` carrying `value` and `variant` if validation fails.
///
/// # Examples
///
/// ```
/// use iri_namespace::{as_uri, Variant};
///
/// assert_eq!(as_uri("/a/../../path", Variant::Internal).unwrap().as_str(), "/path");
/// assert_eq!(as_uri("../path", Variant::Relative).unwrap().as_str(), "../path");
/// ```
pub fn as_uri(value: &str, variant: Variant) -> Result<Uri, ParseError> {
    Uri::parse_as(value, variant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;

    #[test]
    fn parse_absolute_by_default() {
        assert!(Uri::parse("http://example.com").is_ok());
        assert!(Uri::parse("urn:isbn:0451450523").is_ok());
        assert!(Uri::parse("/a/b").is_err());
        assert!(Uri::parse("a/b").is_err());
    }

    #[test]
    fn non_ascii_rejected_before_normalization() {
        let result = Uri::parse("http://example.com/caf\u{e9}");
        assert!(matches!(
            result,
            Err(ParseError {
                kind: ParseErrorKind::NonAscii {
                    char: '\u{e9}',
                    position: 22
                },
                variant: Variant::Absolute,
                ..
            })
        ));
    }

    #[test]
    fn predicate_and_constructor_agree() {
        for (input, variant) in [
            ("http://example.com/", Variant::Hierarchical),
            ("mailto:a@example.com", Variant::Hierarchical),
            ("mailto:a@example.com", Variant::Absolute),
            ("/x", Variant::Internal),
            ("x", Variant::Internal),
            ("x", Variant::Relative),
            ("http:", Variant::Relative),
        ] {
            assert_eq!(is_uri(input, variant), as_uri(input, variant).is_ok(), "{input}");
        }
    }

    #[test]
    fn structural_accessors() {
        let uri = Uri::parse("http://example.com/a?q#f").unwrap();
        assert_eq!(uri.scheme(), Some("http"));
        assert_eq!(uri.authority(), Some("example.com"));
        assert_eq!(uri.path(), "/a");
        assert_eq!(uri.query(), Some("q"));
        assert_eq!(uri.fragment(), Some("f"));
        assert_eq!(uri.variant(), Variant::Hierarchical);

        let urn = Uri::parse("urn:example:a").unwrap();
        assert!(urn.is_opaque());
        assert!(!urn.is_hierarchical());
        assert_eq!(urn.variant(), Variant::Absolute);
    }

    #[test]
    fn display_and_from_str() {
        let uri: Uri = "http://example.com/a/../b".parse().unwrap();
        assert_eq!(uri.to_string(), "http://example.com/b");
        assert_eq!(Uri::try_from("urn:x:y").unwrap().as_str(), "urn:x:y");
    }

    #[test]
    fn ordering_follows_string() {
        let a = Uri::parse("http://a.example/").unwrap();
        let b = Uri::parse("http://b.example/").unwrap();
        assert!(a < b);
    }

    #[test]
    fn derefs_to_str() {
        let uri = Uri::parse("http://example.com/a").unwrap();
        assert!(uri.starts_with("http:"));
        assert_eq!(String::from(uri), "http://example.com/a");
    }
}
