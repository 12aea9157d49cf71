//! The variant lattice of URI/IRI references.

use std::fmt;
use std::str::FromStr;

use crate::components::Components;

/// The structural variant a reference is validated against.
///
/// Variants form an inclusion lattice: every hierarchical reference is
/// absolute, every absolute reference is internal, and every internal
/// reference is a (degenerate) relative reference. Variants are declared
/// narrowest first, so the derived ordering follows inclusion:
/// `a <= b` means every reference admitted by `a` is admitted by `b`.
///
/// # Examples
///
/// ```
/// use iri_namespace::Variant;
///
/// assert!(Variant::Hierarchical.admits("http://example.com/a"));
/// assert!(!Variant::Hierarchical.admits("urn:example:a"));
/// assert!(Variant::Internal.admits("/a/b"));
/// assert!(Variant::Relative.admits("../a"));
///
/// assert_eq!(Variant::of("urn:example:a"), Variant::Absolute);
/// assert!(Variant::Relative.includes(Variant::Hierarchical));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Variant {
    /// Scheme and authority: `scheme://authority/path`
    Hierarchical,
    /// Scheme, with or without authority: `urn:example:a`
    #[default]
    Absolute,
    /// Absolute, or a root-relative path: `/a/b`
    Internal,
    /// Any well-formed reference: `../a`, `?q`, `#f`
    Relative,
}

impl Variant {
    /// All variants, narrowest first.
    pub const ALL: [Self; 4] = [
        Self::Hierarchical,
        Self::Absolute,
        Self::Internal,
        Self::Relative,
    ];

    /// Returns the lowercase name of this variant.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hierarchical => "hierarchical",
            Self::Absolute => "absolute",
            Self::Internal => "internal",
            Self::Relative => "relative",
        }
    }

    /// Returns true if the reference satisfies this variant's structural
    /// predicate.
    ///
    /// Only structure is checked here; syntax (excluded characters and the
    /// like) is the normalizer's concern.
    #[must_use]
    pub fn admits(self, reference: &str) -> bool {
        self.admits_components(&Components::parse(reference))
    }

    pub(crate) fn admits_components(self, components: &Components<'_>) -> bool {
        match self {
            Self::Hierarchical => components.is_hierarchical(),
            Self::Absolute => components.scheme.is_some(),
            Self::Internal => components.scheme.is_some() || components.is_root_relative(),
            Self::Relative => true,
        }
    }

    /// Returns the narrowest variant admitting the reference.
    #[must_use]
    pub fn of(reference: &str) -> Self {
        let components = Components::parse(reference);
        Self::ALL
            .into_iter()
            .find(|variant| variant.admits_components(&components))
            .unwrap_or(Self::Relative)
    }

    /// Returns true if every reference admitted by `other` is admitted by
    /// `self`.
    #[must_use]
    pub fn includes(self, other: Self) -> bool {
        other <= self
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Variant {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hierarchical" => Ok(Self::Hierarchical),
            "absolute" => Ok(Self::Absolute),
            "internal" => Ok(Self::Internal),
            "relative" => Ok(Self::Relative),
            _ => Err("variant must be one of hierarchical, absolute, internal, relative"),
        }
    }
}
