//! Behavior shared by [`Uri`](crate::Uri) and [`Iri`](crate::Iri).

use std::fmt;
use std::hash::Hash;

use crate::components::Components;
use crate::error::{ParseError, ResolveError};
use crate::normalize::normalize_checked;
use crate::resolve;
use crate::variant::Variant;

mod sealed {
    /// Restricts [`Identifier`](super::Identifier) to this crate's types and
    /// hides the unchecked constructor.
    pub trait Sealed {
        /// Wraps a string that has already been normalized.
        fn from_normalized(normalized: String) -> Self;
    }
}

pub(crate) use sealed::Sealed;

/// A validated, dot-segment-normalized URI or IRI reference.
///
/// Structural facts (scheme, authority, variant, ...) are recomputed from the
/// string on every call; nothing is cached.
///
/// This trait is sealed. It is implemented by [`Uri`](crate::Uri), which is
/// restricted to ASCII, and [`Iri`](crate::Iri), which is not.
pub trait Identifier:
    Sealed + AsRef<str> + Clone + fmt::Debug + fmt::Display + Eq + Ord + Hash + Send + Sync
{
    /// Whether characters outside the ASCII range are rejected.
    const ASCII_ONLY: bool;

    /// Validates and normalizes `input` against `variant`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` carrying the input and the requested variant if
    /// the input is not a valid reference of that variant.
    fn parse_as(input: &str, variant: Variant) -> Result<Self, ParseError> {
        normalize_checked(input, variant, Self::ASCII_ONLY).map(Self::from_normalized)
    }

    /// Returns true if `input` is a valid reference of `variant`.
    ///
    /// The normalized form is discarded.
    #[must_use]
    fn is_valid(input: &str, variant: Variant) -> bool {
        normalize_checked(input, variant, Self::ASCII_ONLY).is_ok()
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    fn as_str(&self) -> &str {
        self.as_ref()
    }

    /// Returns the narrowest variant this identifier satisfies.
    #[must_use]
    fn variant(&self) -> Variant {
        Variant::of(self.as_str())
    }

    /// Returns the scheme, without its trailing colon.
    #[must_use]
    fn scheme(&self) -> Option<&str> {
        Components::parse(self.as_str()).scheme
    }

    /// Returns the authority, without its leading `//`.
    #[must_use]
    fn authority(&self) -> Option<&str> {
        Components::parse(self.as_str()).authority
    }

    /// Returns the path. May be empty.
    #[must_use]
    fn path(&self) -> &str {
        Components::parse(self.as_str()).path
    }

    /// Returns the query, without its leading `?`.
    #[must_use]
    fn query(&self) -> Option<&str> {
        Components::parse(self.as_str()).query
    }

    /// Returns the fragment, without its leading `#`.
    #[must_use]
    fn fragment(&self) -> Option<&str> {
        Components::parse(self.as_str()).fragment
    }

    /// Returns true if this identifier has a scheme and an authority.
    #[must_use]
    fn is_hierarchical(&self) -> bool {
        Components::parse(self.as_str()).is_hierarchical()
    }

    /// Returns true if this identifier has a scheme but no authority, like
    /// `urn:` or `mailto:` identifiers.
    #[must_use]
    fn is_opaque(&self) -> bool {
        Components::parse(self.as_str()).is_opaque()
    }

    /// Resolves `reference` against this identifier as base.
    ///
    /// # Errors
    ///
    /// See [`resolve`](crate::resolve()).
    fn resolve(&self, reference: &str) -> Result<Self, ResolveError> {
        resolve::resolve(self.as_str(), reference)
    }

    /// Expresses `reference` as root-relative to this identifier when both
    /// share an origin.
    ///
    /// # Errors
    ///
    /// See [`internalize`](crate::internalize()).
    fn internalize(&self, reference: &str) -> Result<Self, ResolveError> {
        resolve::internalize(self.as_str(), reference)
    }

    /// Expresses `reference` as the shortest path-relative reference from
    /// this identifier when both share an origin.
    ///
    /// # Errors
    ///
    /// See [`relativize`](crate::relativize()).
    fn relativize(&self, reference: &str) -> Result<Self, ResolveError> {
        resolve::relativize(self.as_str(), reference)
    }
}

/// Implements the string-newtype traits shared by [`Uri`](crate::Uri) and
/// [`Iri`](crate::Iri): the sealed constructor, [`Identifier`], `Display`,
/// `FromStr` (absolute), `AsRef<str>`, `TryFrom<&str>`, `Deref<Target = str>`,
/// `From<_> for String` and, behind the `serde` feature, string
/// (de)serialization validated at [`Variant::Relative`].
macro_rules! impl_identifier {
    ($ty:ident, ascii_only: $ascii_only:literal) => {
        impl $crate::identifier::Sealed for $ty {
            fn from_normalized(normalized: String) -> Self {
                Self(normalized)
            }
        }

        impl $crate::identifier::Identifier for $ty {
            const ASCII_ONLY: bool = $ascii_only;
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::error::ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = $crate::error::ParseError;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                Self::parse(s)
            }
        }

        impl std::ops::Deref for $ty {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl From<$ty> for String {
            fn from(identifier: $ty) -> Self {
                identifier.0
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::parse_as(&s, $crate::variant::Variant::Relative)
                    .map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use impl_identifier;
