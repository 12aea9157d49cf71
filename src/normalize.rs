//! Reference validation and dot-segment normalization.

use crate::components::Components;
use crate::error::{ParseError, ParseErrorKind};
use crate::grammar::{find_excluded, find_non_ascii};
use crate::path::remove_dot_segments;
use crate::variant::Variant;

/// Validates an IRI reference against a variant and returns its canonical
/// form.
///
/// The syntax gate runs first and rejects control characters, whitespace and
/// `< > " { } | \ ^` plus backtick. Dot segments are then removed from
/// absolute paths, clipping excess `..` at the root instead of failing.
/// Relative paths (no scheme, no leading `/`) are returned unchanged, since
/// their dot segments only mean something once resolved against a base.
/// Finally the normalized string must satisfy `variant`.
///
/// # Errors
///
/// Returns `ParseError` if:
/// - The input contains an excluded character
/// - The input is a scheme with nothing after it, such as `http:`
/// - The first segment of a scheme-less relative path contains a colon
/// - The normalized reference does not satisfy `variant`
///
/// # Examples
///
/// ```
/// use iri_namespace::{normalize, Variant};
///
/// assert_eq!(normalize("/a/../../path", Variant::Internal).unwrap(), "/path");
/// assert_eq!(normalize("../path", Variant::Relative).unwrap(), "../path");
/// assert_eq!(
///     normalize("http://example.com/a/./b/../c", Variant::Hierarchical).unwrap(),
///     "http://example.com/a/c"
/// );
/// assert!(normalize("/path", Variant::Absolute).is_err());
/// ```
pub fn normalize(candidate: &str, variant: Variant) -> Result<String, ParseError> {
    normalize_checked(candidate, variant, false)
}

/// Like [`normalize`], optionally rejecting anything outside the ASCII range
/// before normalizing.
pub(crate) fn normalize_checked(
    candidate: &str,
    variant: Variant,
    ascii_only: bool,
) -> Result<String, ParseError> {
    let result = if ascii_only {
        check_ascii(candidate).and_then(|()| normalize_inner(candidate, variant))
    } else {
        normalize_inner(candidate, variant)
    };
    result.map_err(|kind| {
        tracing::trace!(input = candidate, %variant, error = ?kind, "rejected reference");
        ParseError {
            input: candidate.to_string(),
            variant,
            kind,
        }
    })
}

fn check_ascii(candidate: &str) -> Result<(), ParseErrorKind> {
    match find_non_ascii(candidate) {
        Some((char, position)) => Err(ParseErrorKind::NonAscii { char, position }),
        None => Ok(()),
    }
}

fn normalize_inner(candidate: &str, variant: Variant) -> Result<String, ParseErrorKind> {
    if let Some((char, position)) = find_excluded(candidate) {
        return Err(ParseErrorKind::ExcludedChar { char, position });
    }

    let components = Components::parse(candidate);
    let normalized = match components.scheme {
        Some(scheme) if components.has_empty_scheme_specific_part() => {
            return Err(ParseErrorKind::EmptySchemeSpecificPart {
                scheme: scheme.to_string(),
            });
        }
        // Scheme-less, authority-less and not rooted: a relative path.
        None if components.authority.is_none() && !components.path.starts_with('/') => {
            check_first_segment(components.path)?;
            candidate.to_string()
        }
        _ => normalize_path(&components),
    };

    let found = Variant::of(&normalized);
    if variant.includes(found) {
        Ok(normalized)
    } else {
        Err(ParseErrorKind::VariantMismatch { found })
    }
}

/// Recomposes the reference with dot segments removed from its path.
///
/// Rootless paths (opaque identifiers such as `urn:a:b`) are kept as-is.
pub(crate) fn normalize_path(components: &Components<'_>) -> String {
    let path = remove_dot_segments(components.path);
    Components {
        path: &path,
        ..*components
    }
    .recompose()
}

fn check_first_segment(path: &str) -> Result<(), ParseErrorKind> {
    let first = path.split('/').next().unwrap_or_default();
    if first.contains(':') {
        return Err(ParseErrorKind::ColonInFirstSegment {
            segment: first.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clips_root_relative() {
        assert_eq!(normalize("/a/../../path", Variant::Internal).unwrap(), "/path");
        assert_eq!(normalize("/./a/b/..", Variant::Internal).unwrap(), "/a/");
    }

    #[test]
    fn keeps_relative_dot_segments() {
        assert_eq!(normalize("../path", Variant::Relative).unwrap(), "../path");
        assert_eq!(normalize("./a/../b", Variant::Relative).unwrap(), "./a/../b");
        assert_eq!(normalize("", Variant::Relative).unwrap(), "");
    }

    #[test]
    fn normalizes_hierarchical_path() {
        assert_eq!(
            normalize("http://example.com/a/b/../../../c?x=../y#../z", Variant::Absolute).unwrap(),
            "http://example.com/c?x=../y#../z"
        );
        assert_eq!(
            normalize("http://example.com", Variant::Hierarchical).unwrap(),
            "http://example.com"
        );
    }

    #[test]
    fn keeps_opaque_path() {
        assert_eq!(
            normalize("urn:example:a/../b", Variant::Absolute).unwrap(),
            "urn:example:a/../b"
        );
        assert_eq!(normalize("file:/a/../b", Variant::Absolute).unwrap(), "file:/b");
    }

    #[test]
    fn network_path_reference_is_relative() {
        assert_eq!(
            normalize("//host/a/../b", Variant::Relative).unwrap(),
            "//host/b"
        );
        assert!(matches!(
            normalize("//host/a", Variant::Internal),
            Err(ParseError {
                kind: ParseErrorKind::VariantMismatch {
                    found: Variant::Relative
                },
                ..
            })
        ));
    }

    #[test]
    fn guards_double_slash_after_clipping() {
        let normalized = normalize("/a/..//b", Variant::Internal).unwrap();
        assert_eq!(normalized, "/.//b");
        assert_eq!(normalize(&normalized, Variant::Internal).unwrap(), normalized);
    }

    #[test]
    fn empty_segment_survives_trailing_dot() {
        assert_eq!(
            normalize("http://h/a//.", Variant::Hierarchical).unwrap(),
            "http://h/a//"
        );
        let normalized = normalize("/.//.", Variant::Internal).unwrap();
        assert_eq!(normalized, "/.//");
        assert_eq!(normalize(&normalized, Variant::Internal).unwrap(), normalized);
    }

    #[test]
    fn empty_scheme_specific_part_fails() {
        for variant in Variant::ALL {
            let result = normalize("http:", variant);
            assert!(matches!(
                result,
                Err(ParseError {
                    kind: ParseErrorKind::EmptySchemeSpecificPart { .. },
                    ..
                })
            ));
        }
    }

    #[test]
    fn excluded_char_fails() {
        let result = normalize("http://example.com/a b", Variant::Absolute);
        assert!(matches!(
            result,
            Err(ParseError {
                kind: ParseErrorKind::ExcludedChar {
                    char: ' ',
                    position: 20
                },
                ..
            })
        ));
        assert!(normalize("a<b", Variant::Relative).is_err());
        assert!(normalize("a\tb", Variant::Relative).is_err());
    }

    #[test]
    fn colon_in_first_segment_fails() {
        assert!(matches!(
            normalize("1a:b/c", Variant::Relative),
            Err(ParseError {
                kind: ParseErrorKind::ColonInFirstSegment { .. },
                ..
            })
        ));
        assert_eq!(normalize("./1a:b", Variant::Relative).unwrap(), "./1a:b");
        assert_eq!(normalize("a/b:c", Variant::Relative).unwrap(), "a/b:c");
    }

    #[test]
    fn variant_mismatch_reports_found() {
        let err = normalize("/a", Variant::Absolute).unwrap_err();
        assert_eq!(err.variant, Variant::Absolute);
        assert_eq!(err.input, "/a");
        assert_eq!(
            err.kind,
            ParseErrorKind::VariantMismatch {
                found: Variant::Internal
            }
        );
    }

    #[test]
    fn unicode_allowed_without_ascii_check() {
        assert!(normalize("http://example.com/ü", Variant::Absolute).is_ok());
        assert!(matches!(
            normalize_checked("http://example.com/ü", Variant::Absolute, true),
            Err(ParseError {
                kind: ParseErrorKind::NonAscii { char: 'ü', .. },
                ..
            })
        ));
    }

    #[test]
    fn idempotent() {
        for (input, variant) in [
            ("http://example.com/a/./b/../c/", Variant::Hierarchical),
            ("urn:example:x", Variant::Absolute),
            ("/a/../../b?q#f", Variant::Internal),
            ("../a/./b", Variant::Relative),
        ] {
            let once = normalize(input, variant).unwrap();
            assert_eq!(normalize(&once, variant).unwrap(), once);
        }
    }
}
