//! Error types for reference validation, resolution and namespaces.

use std::error::Error;
use std::fmt;

use crate::variant::Variant;

/// A candidate string failed to validate as a reference of the requested
/// variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to validate
    pub input: String,
    /// The variant that was requested
    pub variant: Variant,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific validation error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Control character, whitespace, or one of `< > " { } | \ ^` and backtick
    ExcludedChar {
        /// The excluded character
        char: char,
        /// Character position in the input
        position: usize,
    },
    /// Non-ASCII character in a URI
    NonAscii {
        /// The offending character
        char: char,
        /// Character position in the input
        position: usize,
    },
    /// Nothing follows the scheme, as in `http:`
    EmptySchemeSpecificPart {
        /// The scheme that was found
        scheme: String,
    },
    /// The first segment of a scheme-less relative path contains a colon
    ColonInFirstSegment {
        /// The offending segment
        segment: String,
    },
    /// Well-formed, but narrower than the requested variant allows
    VariantMismatch {
        /// The narrowest variant the normalized reference satisfies
        found: Variant,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} reference '{}': ", self.variant, self.input)?;
        match &self.kind {
            ParseErrorKind::ExcludedChar { char, position } => {
                write!(f, "excluded character {char:?} at position {position}")
            }
            ParseErrorKind::NonAscii { char, position } => {
                write!(
                    f,
                    "non-ASCII character {char:?} at position {position}; use an IRI instead"
                )
            }
            ParseErrorKind::EmptySchemeSpecificPart { scheme } => {
                write!(f, "nothing follows scheme '{scheme}:'")
            }
            ParseErrorKind::ColonInFirstSegment { segment } => {
                write!(
                    f,
                    "first path segment '{segment}' contains a colon; prefix it with './'"
                )
            }
            ParseErrorKind::VariantMismatch { found } => {
                write!(f, "reference is {found}, expected {}", self.variant)
            }
        }
    }
}

impl Error for ParseError {}

/// Errors for the reference algebra (`resolve`, `internalize`,
/// `relativize`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The base is not a valid absolute reference
    InvalidBase(ParseError),
    /// The reference is not a valid relative reference
    InvalidReference(ParseError),
    /// A scheme-less reference was resolved against a base without an
    /// authority, where no hierarchical merge is defined
    OpaqueBase {
        /// The opaque base
        base: String,
        /// The reference that could not be resolved
        reference: String,
    },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBase(e) => write!(f, "invalid base: {e}"),
            Self::InvalidReference(e) => write!(f, "invalid reference: {e}"),
            Self::OpaqueBase { base, reference } => {
                write!(
                    f,
                    "cannot resolve '{reference}' against opaque base '{base}'; only references with a scheme resolve against a base without authority"
                )
            }
        }
    }
}

impl Error for ResolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidBase(e) | Self::InvalidReference(e) => Some(e),
            Self::OpaqueBase { .. } => None,
        }
    }
}

/// Errors for namespace construction and term lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamespaceError {
    /// The namespace base is not a valid absolute reference
    InvalidBase(ParseError),
    /// Base and term do not concatenate into a valid absolute reference
    InvalidTerm {
        /// The term that was appended to the base
        term: String,
        /// Validation failure of the concatenation
        source: ParseError,
    },
    /// The term is not part of a closed namespace
    UnknownTerm {
        /// The requested term
        term: String,
        /// The terms the namespace was declared with
        known: Vec<String>,
    },
}

impl fmt::Display for NamespaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBase(e) => write!(f, "invalid namespace base: {e}"),
            Self::InvalidTerm { term, source } => {
                write!(f, "invalid namespace term '{term}': {source}")
            }
            Self::UnknownTerm { term, known } => {
                write!(
                    f,
                    "unknown term '{term}' in closed namespace; expected one of: {}",
                    known.join(", ")
                )
            }
        }
    }
}

impl Error for NamespaceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidBase(e) | Self::InvalidTerm { source: e, .. } => Some(e),
            Self::UnknownTerm { .. } => None,
        }
    }
}
