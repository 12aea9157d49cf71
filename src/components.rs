//! Borrowed decomposition of a reference into its five components.
//!
//! Follows the regular expression in RFC 3986 appendix B, with the scheme
//! restricted to the scheme grammar. The caller is expected to have run the
//! syntax gate first; decomposition itself never fails.

use crate::grammar::scheme_len;

/// Components of a URI or IRI reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Components<'a> {
    /// Scheme, without the trailing colon.
    pub(crate) scheme: Option<&'a str>,
    /// Authority, without the leading `//`. May be `Some("")`.
    pub(crate) authority: Option<&'a str>,
    /// Path. Possibly empty.
    pub(crate) path: &'a str,
    /// Query, without the leading `?`.
    pub(crate) query: Option<&'a str>,
    /// Fragment, without the leading `#`.
    pub(crate) fragment: Option<&'a str>,
}

impl<'a> Components<'a> {
    /// Splits a reference into its components.
    pub(crate) fn parse(input: &'a str) -> Self {
        let (scheme, rest) = match scheme_len(input) {
            Some(len) => (Some(&input[..len]), &input[len + 1..]),
            None => (None, input),
        };

        let (rest, fragment) = match rest.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (rest, None),
        };

        let (rest, query) = match rest.split_once('?') {
            Some((rest, query)) => (rest, Some(query)),
            None => (rest, None),
        };

        let (authority, path) = match rest.strip_prefix("//") {
            Some(after) => {
                let end = after.find('/').unwrap_or(after.len());
                (Some(&after[..end]), &after[end..])
            }
            None => (None, rest),
        };

        Self {
            scheme,
            authority,
            path,
            query,
            fragment,
        }
    }

    /// Returns true if the reference has both a scheme and an authority.
    pub(crate) const fn is_hierarchical(&self) -> bool {
        self.scheme.is_some() && self.authority.is_some()
    }

    /// Returns true if the reference has a scheme but no authority.
    pub(crate) const fn is_opaque(&self) -> bool {
        self.scheme.is_some() && self.authority.is_none()
    }

    /// Returns true if the path is the whole relative part and starts with
    /// a single `/`.
    pub(crate) fn is_root_relative(&self) -> bool {
        self.scheme.is_none() && self.authority.is_none() && self.path.starts_with('/')
    }

    /// Returns true if the scheme-specific part is empty, as in `http:`.
    pub(crate) fn has_empty_scheme_specific_part(&self) -> bool {
        self.scheme.is_some()
            && self.authority.is_none()
            && self.path.is_empty()
            && self.query.is_none()
            && self.fragment.is_none()
    }

    /// Returns true if both references share scheme and authority.
    ///
    /// Schemes compare ASCII case-insensitively, authorities exactly.
    pub(crate) fn same_origin(&self, other: &Components<'_>) -> bool {
        let same_scheme = match (self.scheme, other.scheme) {
            (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
            (None, None) => true,
            _ => false,
        };
        same_scheme && self.authority == other.authority
    }

    /// Serializes everything after `scheme:`.
    pub(crate) fn scheme_specific_part(&self) -> String {
        Self {
            scheme: None,
            ..*self
        }
        .recompose()
    }

    /// Serializes the components back into a reference string.
    ///
    /// A path that would otherwise be mistaken for an authority (no
    /// authority, path starting with `//`) is prefixed with `/.`.
    pub(crate) fn recompose(&self) -> String {
        let mut out = String::with_capacity(
            self.scheme.map_or(0, str::len)
                + self.authority.map_or(0, str::len)
                + self.path.len()
                + self.query.map_or(0, str::len)
                + self.fragment.map_or(0, str::len)
                + 6,
        );
        if let Some(scheme) = self.scheme {
            out.push_str(scheme);
            out.push(':');
        }
        match self.authority {
            Some(authority) => {
                out.push_str("//");
                out.push_str(authority);
            }
            None if self.path.starts_with("//") => out.push_str("/."),
            None => {}
        }
        out.push_str(self.path);
        if let Some(query) = self.query {
            out.push('?');
            out.push_str(query);
        }
        if let Some(fragment) = self.fragment {
            out.push('#');
            out.push_str(fragment);
        }
        out
    }
}
