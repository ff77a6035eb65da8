//! Path canonicalization functions.
//!
//! This module provides functionality to canonicalize paths by following
//! symlinks to their real paths, with support for:
//! - Full canonicalization of existing paths
//! - Best-effort canonicalization of paths that do not exist yet
//!
//! Best-effort resolution climbs from the deepest existing ancestor and
//! re-appends the nonexistent remainder literally, which lets callers
//! compute a stable absolute form for a file before creating it.

use std::borrow::Cow;
use std::fs;
use std::io::ErrorKind;
use std::path::{is_separator, Component, Path, PathBuf, MAIN_SEPARATOR_STR};

use crate::error::{Error, Result};

/// Attempt to canonicalize a path by following symlinks.
///
/// This function uses the standard library's `canonicalize` to resolve
/// all symlinks in the path. The path must exist for canonicalization
/// to succeed.
///
/// # Errors
///
/// Returns an error if:
/// - The path does not exist (`PathNotFound`)
/// - Permission is denied (`PermissionDenied`)
/// - An I/O error occurs
///
/// # Examples
///
/// ```no_run
/// use trawl::canonicalize;
///
/// let canonical = canonicalize("/tmp").unwrap();
/// assert!(canonical.is_absolute());
/// ```
pub fn canonicalize<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    fs::canonicalize(path).map_err(|error| Error::from_path_io(path, error))
}

/// Canonicalize as much of a path as exists on disk.
///
/// The whole path is resolved when it exists. Otherwise the deepest
/// existing ancestor is resolved and the remainder is appended to it
/// verbatim, separator for separator. An empty path yields `Ok(None)`,
/// the escape hatch for callers threading an optional path through.
///
/// Only the existing ancestor is normalized: `.` and `..` components
/// inside the nonexistent remainder are preserved literally rather
/// than collapsed. Callers that need a fully lexical form should
/// normalize the result themselves.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] for a path that is not valid UTF-8,
/// and propagates [`Error::PermissionDenied`] or [`Error::Io`] when an
/// ancestor exists but cannot be resolved. Mere nonexistence is never
/// an error.
///
/// # Examples
///
/// ```
/// use trawl::canonicalize_partial;
///
/// assert!(canonicalize_partial("").unwrap().is_none());
/// ```
///
/// ```no_run
/// use trawl::canonicalize_partial;
///
/// // /tmp exists; the rest is appended unresolved.
/// let resolved = canonicalize_partial("/tmp/not/yet/created").unwrap().unwrap();
/// assert!(resolved.is_absolute());
/// assert!(resolved.ends_with("not/yet/created"));
/// ```
pub fn canonicalize_partial<P: AsRef<Path>>(path: P) -> Result<Option<PathBuf>> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Ok(None);
    }

    match canonicalize(path) {
        Ok(resolved) => return Ok(Some(resolved)),
        Err(error) if absent(&error) => {}
        Err(error) => return Err(error),
    }

    let text = path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "path is not valid UTF-8".to_string(),
    })?;
    let rooted = rooted_form(text);

    // Truncate at each separator, last first, until a prefix resolves.
    let mut cut = rooted.len();
    while let Some(separator) = rooted[..cut].rfind(is_separator) {
        let prefix = if separator == 0 {
            MAIN_SEPARATOR_STR
        } else {
            &rooted[..separator]
        };
        match canonicalize(prefix) {
            Ok(resolved) => {
                // Doubled separators leave the suffix separator-led;
                // joining an absolute suffix would replace the resolved
                // ancestor, so strip the leading run first.
                let suffix = rooted[separator + 1..].trim_start_matches(is_separator);
                if suffix.is_empty() {
                    return Ok(Some(resolved));
                }
                log::debug!("resolved existing ancestor {prefix}, keeping suffix {suffix}");
                return Ok(Some(resolved.join(suffix)));
            }
            Err(error) if absent(&error) => cut = separator,
            Err(error) => return Err(error),
        }
    }

    Ok(None)
}

/// True when resolution failed only because nothing exists at the path.
///
/// A prefix component that turns out to be a regular file surfaces as
/// `NotADirectory`; for ancestor climbing that is the same situation as
/// plain nonexistence.
fn absent(error: &Error) -> bool {
    match error {
        Error::PathNotFound { .. } => true,
        Error::Io(io) => io.kind() == ErrorKind::NotADirectory,
        _ => false,
    }
}

/// Anchors a path string so prefix truncation is well-defined: absolute
/// paths and paths already led by `.` or `..` pass through, anything
/// else gains a `./` prefix.
fn rooted_form(text: &str) -> Cow<'_, str> {
    let path = Path::new(text);
    let anchored = path.is_absolute()
        || matches!(
            path.components().next(),
            Some(Component::CurDir | Component::ParentDir)
        );
    if anchored {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(format!("./{text}"))
    }
}
