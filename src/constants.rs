//! Constants for reference validation and normalization.

/// Characters rejected anywhere in a reference, in addition to control
/// characters and whitespace.
pub const EXCLUDED_CHARS: &[char] = &['<', '>', '"', '{', '}', '|', '\\', '^', '`'];

/// The current-directory path segment.
pub const CURRENT_SEGMENT: &str = ".";

/// The parent-directory path segment.
pub const PARENT_SEGMENT: &str = "..";
