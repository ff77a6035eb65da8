//! Resumable delimiter-based chunk scanning.
//!
//! # Key Concepts
//!
//! ## Segments and delimiter runs
//!
//! A [`ChunkScanner`] splits a byte stream at runs of delimiter bytes.
//! Consecutive delimiters coalesce into one boundary, so adjacent
//! separators produce no empty segments; a stream that opens with a
//! delimiter still yields one empty first segment, keeping the
//! reassembly law exact: segments and runs concatenated in emission
//! order reproduce the stream.
//!
//! ## Resume tokens
//!
//! Scanning is a pure pull: each [`ChunkScanner::scan`] call consumes
//! a [`ScanState`] and returns the next one inside [`ScanOutcome`].
//! No session object holds hidden progress, so independent streams can
//! be interleaved freely by threading their states separately.
//!
//! ## Bounded buffering
//!
//! At most `max_chunk_size` bytes are buffered per refill. A segment
//! longer than one buffer is recovered by rewinding the stream to the
//! segment boundary and re-reading; a segment longer than the whole
//! buffer fails with [`Error`](crate::Error)`::ChunkTooLarge` instead
//! of silently truncating the token.
//!
//! # Examples
//!
//! ```
//! use std::io::Cursor;
//! use trawl::{ChunkScanner, DelimiterSet};
//!
//! let scanner = ChunkScanner::new()
//!     .with_delimiters(DelimiterSet::new(",").unwrap())
//!     .with_max_chunk_size(16);
//! let mut stream = Cursor::new(b"ready,,set,go".to_vec());
//!
//! let segments: Vec<Vec<u8>> = scanner
//!     .segments(&mut stream)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(segments, vec![b"ready".to_vec(), b"set".to_vec(), b"go".to_vec()]);
//! ```

mod delimiters;
mod reader;
mod scanner;
mod state;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use delimiters::DelimiterSet;
pub use reader::{lines, Lines, Segments};
pub use scanner::ChunkScanner;
pub use state::{ScanOutcome, ScanState};
