//! Environment variable handling for scanner defaults.
//!
//! This module provides support for TRAWL_* environment variables that
//! override built-in defaults.

use std::env;

use crate::error::{Error, Result};

/// Built-in upper bound on bytes buffered per scanner refill.
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// Environment variable overriding [`DEFAULT_CHUNK_SIZE`].
const CHUNK_SIZE_VAR: &str = "TRAWL_CHUNK_SIZE";

/// Resolve the default chunk size, honoring the `TRAWL_CHUNK_SIZE`
/// environment variable when set.
///
/// # Errors
///
/// Returns [`Error::Validation`] if the variable is set but is not a
/// positive integer.
///
/// # Examples
///
/// ```
/// let size = trawl::default_chunk_size().unwrap();
/// assert!(size > 0);
/// ```
pub fn default_chunk_size() -> Result<usize> {
    match env::var(CHUNK_SIZE_VAR) {
        Ok(raw) => {
            let size: usize = raw.parse().map_err(|_| Error::Validation {
                field: CHUNK_SIZE_VAR.into(),
                message: format!("Must be a positive integer, got '{raw}'"),
            })?;
            if size == 0 {
                return Err(Error::Validation {
                    field: CHUNK_SIZE_VAR.into(),
                    message: "Must be a positive integer, got '0'".into(),
                });
            }
            Ok(size)
        }
        Err(_) => Ok(DEFAULT_CHUNK_SIZE),
    }
}

/// Like [`default_chunk_size`], but falls back to the built-in default
/// when the override is unset or unparseable.
pub(crate) fn effective_chunk_size() -> usize {
    default_chunk_size().unwrap_or(DEFAULT_CHUNK_SIZE)
}
