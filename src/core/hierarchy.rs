//! Dotted-path logger names and the ancestor walk
//!
//! Logger names form a hierarchy by dot-segments: `"org.foo.bar"` is a
//! child of `"org.foo"`, which is a child of `"org"`, which is a child of
//! the root (the empty string). The parent relation is computed from the
//! name on demand; nothing stores back-references, so cycles are
//! impossible and the walk always terminates.

use super::error::{LoggerError, Result};

/// Name of the root logger.
pub const ROOT_NAME: &str = "";

/// Validate a logger name.
///
/// The empty string is the root and is always valid. Any other name must
/// consist of non-empty segments separated by single dots, so `".x"`,
/// `"x."` and `"a..b"` are all rejected. Malformed names fail here, at the
/// boundary; they are never silently coerced.
pub fn validate_name(name: &str) -> Result<()> {
    if name == ROOT_NAME {
        return Ok(());
    }

    if name.split('.').any(str::is_empty) {
        return Err(LoggerError::invalid_name(
            name,
            "empty dot-segment (leading, trailing, or doubled dot)",
        ));
    }

    Ok(())
}

/// Parent of a logger name, obtained by stripping the last dot-segment.
///
/// A single-segment name's parent is the root; the root has no parent.
pub fn parent_of(name: &str) -> Option<&str> {
    if name == ROOT_NAME {
        return None;
    }

    match name.rfind('.') {
        Some(idx) => Some(&name[..idx]),
        None => Some(ROOT_NAME),
    }
}

/// Iterator over a name and its ancestors, ending at the root.
///
/// For `"org.foo.bar"` the items are `"org.foo.bar"`, `"org.foo"`,
/// `"org"`, `""`. Each item borrows from the input, no allocation.
pub fn self_and_ancestors(name: &str) -> SelfAndAncestors<'_> {
    SelfAndAncestors { next: Some(name) }
}

pub struct SelfAndAncestors<'a> {
    next: Option<&'a str>,
}

impl<'a> Iterator for SelfAndAncestors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let current = self.next?;
        self.next = parent_of(current);
        Some(current)
    }
}
