//! Validation, normalization and reference algebra for URIs and IRIs.
//!
//! This crate validates URI (RFC 3986) and IRI (RFC 3987) references,
//! removes dot segments, and resolves, internalizes and relativizes
//! references against a base. Namespaces build member identifiers from a
//! validated base.
//!
//! # Overview
//!
//! References are validated against a [`Variant`]:
//!
//! | Variant | Requires | Example |
//! |---------|----------|---------|
//! | `Hierarchical` | scheme and authority | `http://example.com/a` |
//! | `Absolute` | scheme | `urn:example:a` |
//! | `Internal` | scheme, or a leading `/` | `/a/b` |
//! | `Relative` | nothing beyond well-formedness | `../a` |
//!
//! Each variant admits everything the variants above it admit.
//!
//! # Quick Start
//!
//! ```rust
//! use iri_namespace::{as_uri, is_uri, Uri, Variant};
//!
//! // Dot segments are removed, excess `..` clipped at the root
//! let uri = as_uri("/a/../../path", Variant::Internal).unwrap();
//! assert_eq!(uri.as_str(), "/path");
//!
//! // Relative paths keep their dot segments
//! let uri = as_uri("../path", Variant::Relative).unwrap();
//! assert_eq!(uri.as_str(), "../path");
//!
//! assert!(is_uri("urn:example:a", Variant::Absolute));
//! assert!(!is_uri("urn:example:a", Variant::Hierarchical));
//! ```
//!
//! # Reference Algebra
//!
//! ```rust
//! use iri_namespace::{internalize, relativize, resolve, Uri};
//!
//! let base = "http://example.com/a/b/c";
//!
//! let target: Uri = resolve(base, "../d").unwrap();
//! assert_eq!(target.as_str(), "http://example.com/a/d");
//!
//! let relative: Uri = relativize(base, &target).unwrap();
//! assert_eq!(relative.as_str(), "../d");
//!
//! let internal: Uri = internalize(base, "http://example.com/x/y").unwrap();
//! assert_eq!(internal.as_str(), "/x/y");
//! ```
//!
//! Opaque bases (no authority, like `urn:` or `mailto:`) only resolve
//! references that carry their own scheme.
//!
//! # Namespaces
//!
//! ```rust
//! use iri_namespace::{Identifier, IriNamespace};
//!
//! let ns = IriNamespace::with_terms("http://example.com/vocab#", ["label", "comment"]).unwrap();
//! assert_eq!(ns.get("label").unwrap().as_str(), "http://example.com/vocab#label");
//! assert!(ns.term("seeAlso").is_err());
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod components;
mod constants;
mod error;
mod grammar;
mod identifier;
mod iri;
mod namespace;
mod normalize;
mod path;
pub mod prelude;
mod resolve;
mod uri;
mod variant;

pub use constants::{CURRENT_SEGMENT, EXCLUDED_CHARS, PARENT_SEGMENT};
pub use error::{NamespaceError, ParseError, ParseErrorKind, ResolveError};
pub use grammar::{find_excluded, has_scheme, is_excluded_char, scheme_len};
pub use identifier::Identifier;
pub use iri::{Iri, as_iri, is_iri};
pub use namespace::{IriNamespace, Namespace, UriNamespace};
pub use normalize::normalize;
pub use path::remove_dot_segments;
pub use resolve::{internalize, relativize, resolve};
pub use uri::{Uri, as_uri, is_uri};
pub use variant::Variant;
