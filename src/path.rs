//! Path-segment normalization.
//!
//! Dot-segment removal as described in [RFC 3986 section 5.2.4], restricted
//! to absolute paths. Parent segments that would climb above the root are
//! dropped rather than reported, so `/a/../../b` becomes `/b`. Relative paths
//! are never passed through here: without a base their dot segments carry
//! meaning and are kept verbatim by the normalizer.
//!
//! [RFC 3986 section 5.2.4]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.4

use crate::constants::{CURRENT_SEGMENT, PARENT_SEGMENT};

/// Removes `.` and `..` segments from an absolute path, clipping at the root.
///
/// A path that ends in a dot segment keeps a trailing slash, so `/a/b/..`
/// normalizes to `/a/`. Paths not starting with `/` are returned unchanged.
#[must_use]
pub fn remove_dot_segments(path: &str) -> String {
    let Some(rest) = path.strip_prefix('/') else {
        return path.to_string();
    };

    let mut output: Vec<&str> = Vec::new();
    let mut trailing_slash = false;
    for segment in rest.split('/') {
        match segment {
            CURRENT_SEGMENT => trailing_slash = true,
            PARENT_SEGMENT => {
                output.pop();
                trailing_slash = true;
            }
            _ => {
                output.push(segment);
                trailing_slash = false;
            }
        }
    }

    let mut normalized = String::with_capacity(path.len());
    normalized.push('/');
    normalized.push_str(&output.join("/"));
    if trailing_slash && !output.is_empty() {
        normalized.push('/');
    }
    normalized
}

/// Merges a relative-path reference with a base path.
///
/// See [RFC 3986 section 5.2.3]: with an authority and an empty base path
/// the result is `/` followed by the reference, otherwise the reference
/// replaces everything after the last `/` of the base path.
///
/// [RFC 3986 section 5.2.3]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.3
#[must_use]
pub fn merge(base_path: &str, base_has_authority: bool, reference_path: &str) -> String {
    if base_has_authority && base_path.is_empty() {
        return format!("/{reference_path}");
    }
    match base_path.rfind('/') {
        Some(last_slash) => format!("{}{reference_path}", &base_path[..=last_slash]),
        None => reference_path.to_string(),
    }
}

/// Returns the directory segments of an absolute path: the path minus its
/// leading `/` and its final segment.
///
/// An empty path is treated as `/`.
#[must_use]
pub fn directory_segments(path: &str) -> Vec<&str> {
    let rest = path.strip_prefix('/').unwrap_or(path);
    let mut segments: Vec<&str> = rest.split('/').collect();
    segments.pop();
    segments
}

/// Returns the segments of an absolute path, without its leading `/`.
#[must_use]
pub fn segments(path: &str) -> Vec<&str> {
    path.strip_prefix('/').unwrap_or(path).split('/').collect()
}
