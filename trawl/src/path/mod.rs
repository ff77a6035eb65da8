//! Path queries: normalization and best-effort canonicalization.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Normalization is lexical: relative paths are anchored to the
//! current working directory and `.`/`..` components are resolved
//! without consulting the filesystem, so symlinks are preserved.
//!
//! ## Canonicalization
//!
//! Canonicalization follows symlinks to the "real" path on the
//! filesystem, so it requires the path to exist. The partial variant
//! relaxes that: it resolves the deepest existing ancestor and appends
//! the nonexistent remainder literally, which is the form callers want
//! when computing where a file will live before creating it.
//!
//! # Examples
//!
//! ```no_run
//! use trawl::path::{canonicalize_partial, normalize};
//!
//! // Lexical only: symlinks survive, dots do not.
//! let planned = normalize("reports/../staging/out.csv").unwrap();
//! assert!(planned.is_absolute());
//!
//! // Resolves the existing ancestor, keeps the new remainder.
//! let landing = canonicalize_partial("/var/data/2026/08/batch.bin").unwrap();
//! ```

pub mod canonicalize;
pub mod normalize;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key functions
pub use canonicalize::{canonicalize, canonicalize_partial};
pub use normalize::{normalize, resolve_components};
