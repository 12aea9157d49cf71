//! Reference algebra: resolution, internalization and relativization.
//!
//! Every operation validates `base` as an absolute reference and `reference`
//! as a relative one, then branches on whether the base is hierarchical (has
//! an authority) or opaque (`urn:`, `mailto:`, ...).
//!
//! Two identifiers share an origin when:
//! - the base is hierarchical and scheme (ignoring ASCII case) and authority
//!   of the base and the resolved target are equal, or
//! - the base is opaque and the schemes are equal. Opaque identifiers have
//!   no authority to compare, so only the scheme is checked.

use crate::components::Components;
use crate::error::ResolveError;
use crate::identifier::Identifier;
use crate::normalize::normalize_path;
use crate::path::{directory_segments, merge, segments};
use crate::variant::Variant;

/// Resolves `reference` against `base` per [RFC 3986 section 5.2].
///
/// Dot segments are removed from the merged path and excess `..` segments
/// are clipped at the root. A reference carrying its own scheme is already
/// absolute and is returned as-is.
///
/// [RFC 3986 section 5.2]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2
///
/// # Errors
///
/// Returns `ResolveError` if:
/// - `base` is not a valid absolute reference
/// - `reference` is not a valid reference
/// - `base` is opaque and `reference` has no scheme
///
/// # Examples
///
/// ```
/// use iri_namespace::{resolve, Uri};
///
/// let target: Uri = resolve("http://example.com/a/b/c", "../d").unwrap();
/// assert_eq!(target.as_str(), "http://example.com/a/d");
///
/// let target: Uri = resolve("urn:example:base", "urn:example:other").unwrap();
/// assert_eq!(target.as_str(), "urn:example:other");
///
/// assert!(resolve::<Uri>("urn:example:base", "relative-ref").is_err());
/// ```
pub fn resolve<I: Identifier>(base: &str, reference: &str) -> Result<I, ResolveError> {
    let (base, reference) = validate::<I>(base, reference)?;
    resolve_validated(&base, &reference)
}

/// Resolves `reference` against `base`, then strips scheme and authority if
/// the target shares the base's origin.
///
/// For a hierarchical base the result is the target's path, query and
/// fragment; an empty path becomes `/`. For an opaque base the result is the
/// target's scheme-specific part, prefixed with `./` when its first segment
/// holds a colon. A target of a different origin is returned absolute.
///
/// # Errors
///
/// Same as [`resolve`].
///
/// # Examples
///
/// ```
/// use iri_namespace::{internalize, Uri};
///
/// let internal: Uri = internalize("http://example.com/a/b/c", "http://example.com/x/y").unwrap();
/// assert_eq!(internal.as_str(), "/x/y");
///
/// let external: Uri = internalize("http://example.com/a", "https://example.com/x").unwrap();
/// assert_eq!(external.as_str(), "https://example.com/x");
/// ```
pub fn internalize<I: Identifier>(base: &str, reference: &str) -> Result<I, ResolveError> {
    let (base, reference) = validate::<I>(base, reference)?;
    let target: I = resolve_validated(&base, &reference)?;

    let base_parts = Components::parse(base.as_str());
    let target_parts = Components::parse(target.as_str());

    if base_parts.is_opaque() {
        return Ok(opaque_relative(&base_parts, &target_parts)?.unwrap_or(target));
    }
    if !base_parts.same_origin(&target_parts) {
        return Ok(target);
    }

    let path = if target_parts.path.is_empty() {
        "/"
    } else {
        target_parts.path
    };
    let internal = Components {
        scheme: None,
        authority: None,
        path,
        ..target_parts
    }
    .recompose();
    I::parse_as(&internal, Variant::Internal).map_err(ResolveError::InvalidReference)
}

/// Resolves `reference` against `base`, then computes the shortest
/// path-relative reference that resolves back to the same target.
///
/// The base's directory segments (its path without the final segment) are
/// compared with the target's segments. After the longest common prefix,
/// one `..` is emitted per remaining base directory, followed by the
/// remaining target segments. An empty result is written as `.`. Query and
/// fragment of the target are appended.
///
/// For an opaque base the result is the target's scheme-specific part, as
/// for [`internalize`]. A target of a different origin is returned absolute.
///
/// # Errors
///
/// Same as [`resolve`].
///
/// # Examples
///
/// ```
/// use iri_namespace::{relativize, Uri};
///
/// let base = "http://example.com/a/b/c";
/// let relative: Uri = relativize(base, "http://example.com/a/d").unwrap();
/// assert_eq!(relative.as_str(), "../d");
///
/// let relative: Uri = relativize(base, "http://example.com/a/b/").unwrap();
/// assert_eq!(relative.as_str(), ".");
/// ```
pub fn relativize<I: Identifier>(base: &str, reference: &str) -> Result<I, ResolveError> {
    let (base, reference) = validate::<I>(base, reference)?;
    let target: I = resolve_validated(&base, &reference)?;

    let base_parts = Components::parse(base.as_str());
    let target_parts = Components::parse(target.as_str());

    if base_parts.is_opaque() {
        return Ok(opaque_relative(&base_parts, &target_parts)?.unwrap_or(target));
    }
    if !base_parts.same_origin(&target_parts) {
        return Ok(target);
    }

    let relative = if target_parts.path.is_empty() {
        // No path-relative reference reaches an empty path, whatever the
        // base path; fall back to a network-path reference.
        Components {
            scheme: None,
            ..target_parts
        }
        .recompose()
    } else {
        let path = relative_path(base_parts.path, target_parts.path);
        Components {
            scheme: None,
            authority: None,
            path: &path,
            ..target_parts
        }
        .recompose()
    };
    I::parse_as(&relative, Variant::Relative).map_err(ResolveError::InvalidReference)
}

fn validate<I: Identifier>(base: &str, reference: &str) -> Result<(I, I), ResolveError> {
    let base = I::parse_as(base, Variant::Absolute).map_err(ResolveError::InvalidBase)?;
    let reference =
        I::parse_as(reference, Variant::Relative).map_err(ResolveError::InvalidReference)?;
    Ok((base, reference))
}

fn resolve_validated<I: Identifier>(base: &I, reference: &I) -> Result<I, ResolveError> {
    let base_parts = Components::parse(base.as_str());
    let reference_parts = Components::parse(reference.as_str());

    if reference_parts.scheme.is_some() {
        return Ok(reference.clone());
    }
    if base_parts.authority.is_none() {
        tracing::debug!(
            base = base.as_str(),
            reference = reference.as_str(),
            "relative reference against opaque base"
        );
        return Err(ResolveError::OpaqueBase {
            base: base.as_str().to_string(),
            reference: reference.as_str().to_string(),
        });
    }

    let (authority, path, query) = if reference_parts.authority.is_some() {
        (
            reference_parts.authority,
            reference_parts.path.to_string(),
            reference_parts.query,
        )
    } else if reference_parts.path.is_empty() {
        (
            base_parts.authority,
            base_parts.path.to_string(),
            reference_parts.query.or(base_parts.query),
        )
    } else if reference_parts.path.starts_with('/') {
        (
            base_parts.authority,
            reference_parts.path.to_string(),
            reference_parts.query,
        )
    } else {
        (
            base_parts.authority,
            merge(base_parts.path, true, reference_parts.path),
            reference_parts.query,
        )
    };

    // Dot segments of the merged path are removed here, clipping at the root.
    let target = normalize_path(&Components {
        scheme: base_parts.scheme,
        authority,
        path: &path,
        query,
        fragment: reference_parts.fragment,
    });
    I::parse_as(&target, Variant::Absolute).map_err(ResolveError::InvalidReference)
}

/// Returns the scheme-specific part of the target as a relative reference
/// if it shares the opaque base's scheme.
///
/// A first segment containing a colon (`example:other`) would re-parse as a
/// scheme, so it is written as `./example:other`.
fn opaque_relative<I: Identifier>(
    base: &Components<'_>,
    target: &Components<'_>,
) -> Result<Option<I>, ResolveError> {
    let same_scheme = match (base.scheme, target.scheme) {
        (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
        _ => false,
    };
    if !same_scheme {
        return Ok(None);
    }
    let mut relative = target.scheme_specific_part();
    let first = relative.split(['/', '?', '#']).next().unwrap_or_default();
    if first.contains(':') {
        relative.insert_str(0, "./");
    }
    I::parse_as(&relative, Variant::Relative)
        .map(Some)
        .map_err(ResolveError::InvalidReference)
}

/// Computes the path-relative reference from the base's directory to an
/// absolute target path.
fn relative_path(base_path: &str, target_path: &str) -> String {
    let base_dirs = directory_segments(base_path);
    let target_segments = segments(target_path);

    // The final target segment is always emitted, even when it equals the
    // corresponding base directory.
    let comparable = &target_segments[..target_segments.len() - 1];
    let common = base_dirs
        .iter()
        .zip(comparable)
        .take_while(|(a, b)| a == b)
        .count();

    let mut tokens = vec![".."; base_dirs.len() - common];
    tokens.extend_from_slice(&target_segments[common..]);
    let relative = tokens.join("/");

    let first = relative.split('/').next().unwrap_or_default();
    if relative.is_empty() {
        ".".to_string()
    } else if relative.starts_with('/') || first.contains(':') {
        format!("./{relative}")
    } else {
        relative
    }
}
