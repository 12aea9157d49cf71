//! Namespaces: member identifiers generated from a validated base.

use std::collections::BTreeMap;

use crate::error::NamespaceError;
use crate::identifier::Identifier;
use crate::iri::Iri;
use crate::uri::Uri;
use crate::variant::Variant;

/// A namespace of URIs.
pub type UriNamespace = Namespace<Uri>;

/// A namespace of IRIs.
pub type IriNamespace = Namespace<Iri>;

/// A validated base identifier that generates member identifiers by
/// appending term names.
///
/// A namespace is either:
/// - **closed**: built from a non-empty term list. Every `base + term` is
///   computed and validated when the namespace is created, and lookups of
///   any other term fail.
/// - **open**: built without terms. `base + term` is computed and validated
///   on every lookup.
///
/// Closed namespaces therefore fail at construction while open ones fail
/// per lookup; callers handling untrusted term names should expect
/// [`NamespaceError::InvalidTerm`] from [`Namespace::term`] only on open
/// namespaces.
///
/// Namespaces are immutable after construction.
///
/// # Examples
///
/// ```
/// use iri_namespace::{Identifier, UriNamespace};
///
/// let rdfs = UriNamespace::with_terms(
///     "http://www.w3.org/2000/01/rdf-schema#",
///     ["label", "comment"],
/// )
/// .unwrap();
/// assert_eq!(
///     rdfs.term("label").unwrap().as_str(),
///     "http://www.w3.org/2000/01/rdf-schema#label"
/// );
/// assert!(rdfs.term("seeAlso").is_err());
///
/// let ex = UriNamespace::new("http://example.com/terms/").unwrap();
/// assert_eq!(ex.term("anything").unwrap().as_str(), "http://example.com/terms/anything");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace<I> {
    base: I,
    terms: BTreeMap<String, I>,
}

impl<I: Identifier> Namespace<I> {
    /// Creates an open namespace.
    ///
    /// # Errors
    ///
    /// Returns `NamespaceError::InvalidBase` if `base` is not a valid
    /// absolute identifier.
    pub fn new(base: &str) -> Result<Self, NamespaceError> {
        let base = I::parse_as(base, Variant::Absolute).map_err(NamespaceError::InvalidBase)?;
        tracing::debug!(base = base.as_str(), "created open namespace");
        Ok(Self {
            base,
            terms: BTreeMap::new(),
        })
    }

    /// Creates a namespace with the given terms.
    ///
    /// A non-empty term list produces a closed namespace; an empty one
    /// produces an open namespace, like [`Namespace::new`]. Repeated terms
    /// collapse into one.
    ///
    /// # Errors
    ///
    /// Returns `NamespaceError` if:
    /// - `base` is not a valid absolute identifier
    /// - Any `base + term` is not a valid absolute identifier
    pub fn with_terms<T>(base: &str, terms: T) -> Result<Self, NamespaceError>
    where
        T: IntoIterator,
        T::Item: AsRef<str>,
    {
        let base = I::parse_as(base, Variant::Absolute).map_err(NamespaceError::InvalidBase)?;
        let mut members = BTreeMap::new();
        for term in terms {
            let term = term.as_ref();
            let member = concat(&base, term)?;
            members.insert(term.to_string(), member);
        }
        tracing::debug!(
            base = base.as_str(),
            terms = members.len(),
            "created namespace"
        );
        Ok(Self {
            base,
            terms: members,
        })
    }

    /// Returns the namespace base.
    #[must_use]
    pub const fn base(&self) -> &I {
        &self.base
    }

    /// Returns the identifier for `term`.
    ///
    /// # Errors
    ///
    /// Returns `NamespaceError` if:
    /// - The namespace is closed and `term` is not one of its terms
    /// - The namespace is open and `base + term` is not a valid absolute
    ///   identifier
    pub fn term(&self, term: &str) -> Result<I, NamespaceError> {
        if self.terms.is_empty() {
            return concat(&self.base, term);
        }
        self.terms
            .get(term)
            .cloned()
            .ok_or_else(|| NamespaceError::UnknownTerm {
                term: term.to_string(),
                known: self.terms.keys().cloned().collect(),
            })
    }

    /// Returns the precomputed identifier of a closed-set term.
    ///
    /// Always `None` for open namespaces.
    #[must_use]
    pub fn get(&self, term: &str) -> Option<&I> {
        self.terms.get(term)
    }

    /// Returns true if the namespace was declared with a fixed term set.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        !self.terms.is_empty()
    }

    /// Returns true if `term` belongs to the closed term set.
    #[must_use]
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// Returns the number of closed-set terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if the namespace has no closed-set terms, i.e. is open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterates over the closed-set terms and their identifiers, sorted by
    /// term.
    pub fn terms(&self) -> impl Iterator<Item = (&str, &I)> {
        self.terms.iter().map(|(term, member)| (term.as_str(), member))
    }
}

fn concat<I: Identifier>(base: &I, term: &str) -> Result<I, NamespaceError> {
    let candidate = format!("{}{term}", base.as_str());
    I::parse_as(&candidate, Variant::Absolute).map_err(|source| NamespaceError::InvalidTerm {
        term: term.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";

    #[test]
    fn closed_namespace_precomputes_terms() {
        let ns = UriNamespace::with_terms(RDFS, ["label", "comment"]).unwrap();
        assert!(ns.is_closed());
        assert_eq!(ns.len(), 2);
        assert_eq!(ns.base().as_str(), RDFS);
        assert_eq!(ns.get("label").unwrap().as_str(), format!("{RDFS}label"));
        assert_eq!(ns.term("comment").unwrap().as_str(), format!("{RDFS}comment"));
    }

    #[test]
    fn closed_namespace_rejects_unknown_term() {
        let ns = UriNamespace::with_terms(RDFS, ["label", "comment"]).unwrap();
        let err = ns.term("seeAlso").unwrap_err();
        assert_eq!(
            err,
            NamespaceError::UnknownTerm {
                term: "seeAlso".to_string(),
                known: vec!["comment".to_string(), "label".to_string()],
            }
        );
        assert!(ns.get("seeAlso").is_none());
        assert!(!ns.contains("seeAlso"));
    }

    #[test]
    fn closed_namespace_fails_eagerly() {
        let result = UriNamespace::with_terms(RDFS, ["label", "bad term"]);
        assert!(matches!(
            result,
            Err(NamespaceError::InvalidTerm { ref term, .. }) if term == "bad term"
        ));
    }

    #[test]
    fn open_namespace_fails_per_lookup() {
        let ns = UriNamespace::new("http://example.com/").unwrap();
        assert!(!ns.is_closed());
        assert!(ns.is_empty());
        assert_eq!(ns.term("a").unwrap().as_str(), "http://example.com/a");
        assert!(matches!(
            ns.term("a b"),
            Err(NamespaceError::InvalidTerm { .. })
        ));
        assert!(ns.get("a").is_none());
    }

    #[test]
    fn empty_term_list_is_open() {
        let ns = UriNamespace::with_terms("http://example.com/", Vec::<String>::new()).unwrap();
        assert!(!ns.is_closed());
        assert_eq!(ns.term("x").unwrap().as_str(), "http://example.com/x");
    }

    #[test]
    fn invalid_base_fails() {
        assert!(matches!(
            UriNamespace::new("/relative/"),
            Err(NamespaceError::InvalidBase(_))
        ));
        assert!(matches!(
            UriNamespace::with_terms("http:", ["a"]),
            Err(NamespaceError::InvalidBase(_))
        ));
    }

    #[test]
    fn terms_are_normalized() {
        let ns = UriNamespace::new("http://example.com/a/").unwrap();
        assert_eq!(ns.term("../b").unwrap().as_str(), "http://example.com/b");
    }

    #[test]
    fn iri_namespace_allows_unicode_terms() {
        let ns = IriNamespace::with_terms("http://example.com/", ["café"]).unwrap();
        assert_eq!(ns.get("café").unwrap().as_str(), "http://example.com/café");
        assert!(UriNamespace::with_terms("http://example.com/", ["café"]).is_err());
    }

    #[test]
    fn duplicate_terms_collapse() {
        let ns = UriNamespace::with_terms(RDFS, ["label", "label"]).unwrap();
        assert_eq!(ns.len(), 1);
        let terms: Vec<_> = ns.terms().map(|(term, _)| term).collect();
        assert_eq!(terms, vec!["label"]);
    }

    #[test]
    fn namespace_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<UriNamespace>();
        assert_send_sync::<IriNamespace>();
    }
}
