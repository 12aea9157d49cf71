//! IRI references (RFC 3987).

use crate::error::ParseError;
use crate::identifier::{Identifier, impl_identifier};
use crate::uri::Uri;
use crate::variant::Variant;

/// A validated, normalized IRI reference.
///
/// Unlike [`Uri`], characters outside the ASCII range are permitted. No
/// percent-encoding or IDNA conversion is applied.
///
/// # Examples
///
/// ```
/// use iri_namespace::{Iri, Variant};
///
/// let iri = Iri::parse("http://例え.jp/a/../café").unwrap();
/// assert_eq!(iri.as_str(), "http://例え.jp/café");
///
/// let relative = Iri::parse_as("../été", Variant::Relative).unwrap();
/// assert_eq!(relative.as_str(), "../été");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iri(String);

impl Iri {
    /// Parses an absolute IRI.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the input is not a valid absolute IRI.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_as(input, Variant::Absolute)
    }

    /// Parses an IRI reference of the given variant.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the input contains an excluded character or
    /// is not a reference of `variant`.
    pub fn parse_as(input: &str, variant: Variant) -> Result<Self, ParseError> {
        <Self as Identifier>::parse_as(input, variant)
    }

    /// Returns the IRI as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the IRI, returning its string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns true if the IRI is made of ASCII characters only, and so is
    /// also a valid URI.
    #[must_use]
    pub fn is_ascii(&self) -> bool {
        self.0.is_ascii()
    }
}

impl_identifier!(Iri, ascii_only: false);

/// Returns true if `value` is a valid IRI reference of `variant`.
///
/// # Examples
///
/// ```
/// use iri_namespace::{is_iri, Variant};
///
/// assert!(is_iri("http://example.com/ü", Variant::Hierarchical));
/// assert!(!is_iri("http://example.com/a b", Variant::Hierarchical));
/// ```
#[must_use]
pub fn is_iri(value: &str, variant: Variant) -> bool {
    Iri::is_valid(value, variant)
}

/// Validates `value` as an IRI reference of `variant` and returns its
/// normalized form.
///
/// # Errors
///
/// Returns `ParseError` carrying `value` and `variant` if validation fails.
pub fn as_iri(value: &str, variant: Variant) -> Result<Iri, ParseError> {
    Iri::parse_as(value, variant)
}

impl From<Uri> for Iri {
    fn from(uri: Uri) -> Self {
        Self(uri.into_string())
    }
}

impl TryFrom<Iri> for Uri {
    type Error = ParseError;

    fn try_from(iri: Iri) -> Result<Self, Self::Error> {
        Self::parse_as(iri.as_str(), Variant::Relative)
    }
}
