//! Lexical path normalization.
//!
//! This module provides functionality to normalize paths by:
//! - Converting relative paths to absolute paths
//! - Resolving `.` and `..` components
//!
//! Normalization is purely lexical: it never touches the filesystem
//! for absolute inputs and never follows symlinks. Use
//! [`canonicalize`](crate::canonicalize) or
//! [`canonicalize_partial`](crate::canonicalize_partial) when symlink
//! resolution matters.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Resolve `.` and `..` components in a path without touching the
/// filesystem.
///
/// `.` components disappear; each `..` removes the nearest preceding
/// normal component.
///
/// # Errors
///
/// Returns an error if `..` components would climb past the root (or
/// past the start of a relative path).
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use trawl::resolve_components;
///
/// let resolved = resolve_components("/a/./b/../c").unwrap();
/// assert_eq!(resolved, PathBuf::from("/a/c"));
///
/// let resolved = resolve_components("/a/b/../../c").unwrap();
/// assert_eq!(resolved, PathBuf::from("/c"));
/// ```
pub fn resolve_components<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let mut stack: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                stack.push(component);
            }
            Component::CurDir => {}
            Component::ParentDir => match stack.last() {
                Some(Component::Normal(_)) => {
                    stack.pop();
                }
                _ => {
                    return Err(Error::InvalidPath {
                        path: path.to_path_buf(),
                        reason: "too many '..' components escape the root".to_string(),
                    });
                }
            },
        }
    }

    Ok(stack.iter().map(|component| component.as_os_str()).collect())
}

/// Normalize a path to absolute, dot-free form.
///
/// Relative paths are joined onto the current working directory first,
/// then `.` and `..` components are resolved lexically.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined for
/// a relative input, or if `..` components escape the root.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use trawl::normalize;
///
/// let normalized = normalize("/var/log/../tmp/./cache").unwrap();
/// assert_eq!(normalized, Path::new("/var/tmp/cache"));
/// ```
pub fn normalize<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = env::current_dir().map_err(|error| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("cannot determine current directory: {error}"),
        })?;
        cwd.join(path)
    };

    resolve_components(absolute)
}
