//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use iri_namespace::prelude::*;
//!
//! let uri = Uri::parse("http://example.com/a/").unwrap();
//! assert!(uri.is_hierarchical());
//! ```
//!
//! The [`Identifier`](crate::Identifier) trait is included so its structural
//! accessors and algebra methods are callable on `Uri` and `Iri`.

pub use crate::{
    // Core types
    Identifier, Iri, IriNamespace, Namespace, Uri, UriNamespace, Variant,
    // Functions
    as_iri, as_uri, internalize, is_iri, is_uri, normalize, relativize, resolve,
    // Errors
    NamespaceError, ParseError, ParseErrorKind, ResolveError,
};
