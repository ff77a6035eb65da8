#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # trawl
//!
//! A small filesystem access layer: resumable delimiter-based chunk
//! scanning for bounded-memory file reading, best-effort path
//! canonicalization, and directory iteration with classified entry
//! kinds.
//!
//! The scanner reads a seekable stream in fixed-size buffers and
//! splits it at runs of delimiter bytes, threading all progress
//! through an explicit resume token so sessions over different
//! streams never share state. The path side resolves as much of a
//! path as exists on disk and keeps the rest literal.
//!
//! ## Core Types
//!
//! - [`ChunkScanner`], [`ScanState`], and [`ScanOutcome`]: resumable
//!   segment scanning over seekable streams
//! - [`DelimiterSet`]: separator bytes with run coalescing
//! - [`EntryKind`] and [`DirEntry`]: classified directory entries
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use std::io::Cursor;
//! use trawl::{ChunkScanner, DelimiterSet, ScanOutcome, ScanState};
//!
//! let scanner = ChunkScanner::new()
//!     .with_delimiters(DelimiterSet::new(",").unwrap());
//! let mut stream = Cursor::new(b"alpha,beta".to_vec());
//!
//! let mut state = ScanState::new();
//! let mut segments = Vec::new();
//! loop {
//!     match scanner.scan(&mut stream, state).unwrap() {
//!         ScanOutcome::Segment(next) => {
//!             segments.push(next.segment().to_vec());
//!             state = next;
//!         }
//!         ScanOutcome::Exhausted => break,
//!     }
//! }
//! assert_eq!(segments, vec![b"alpha".to_vec(), b"beta".to_vec()]);
//! ```

pub mod config;
pub mod dir;
pub mod error;
pub mod file;
pub mod logging;
pub mod path;
pub mod scan;

// Re-export key types at crate root for convenience
pub use config::{default_chunk_size, DEFAULT_CHUNK_SIZE};
pub use dir::{entries, DirEntry, Entries, EntryKind};
pub use error::{Error, Result};
pub use file::{open, touch};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{canonicalize, canonicalize_partial, normalize, resolve_components};
pub use scan::{lines, ChunkScanner, DelimiterSet, Lines, ScanOutcome, ScanState, Segments};
