//! The resumable delimiter chunk scanner.

use std::io::{ErrorKind, Read, Seek, SeekFrom};

use bstr::ByteSlice;

use crate::config;
use crate::error::{Error, Result};
use crate::scan::delimiters::DelimiterSet;
use crate::scan::reader::Segments;
use crate::scan::state::{Repr, ScanOutcome, ScanState};

/// A configured, resumable chunk scanner.
///
/// The scanner reads a seekable byte stream in buffered chunks of at
/// most [`max_chunk_size`](Self::max_chunk_size) bytes and splits it at
/// runs of delimiter bytes. It holds configuration only; all progress
/// lives in the [`ScanState`] the caller threads through
/// [`scan`](Self::scan), so one scanner can drive any number of
/// independent streams.
///
/// Without a delimiter set the scanner degenerates to raw mode and
/// yields each buffered chunk as one segment.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use trawl::{ChunkScanner, DelimiterSet};
///
/// let scanner = ChunkScanner::new()
///     .with_delimiters(DelimiterSet::new(",").unwrap());
/// let mut stream = Cursor::new(b"alpha,beta,gamma".to_vec());
///
/// let segments: Vec<Vec<u8>> = scanner
///     .segments(&mut stream)
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(segments, vec![b"alpha".to_vec(), b"beta".to_vec(), b"gamma".to_vec()]);
/// ```
#[derive(Debug, Clone)]
pub struct ChunkScanner {
    delimiters: Option<DelimiterSet>,
    max_chunk_size: usize,
}

impl ChunkScanner {
    /// Creates a raw-mode scanner with the default chunk limit.
    ///
    /// The default honors the `TRAWL_CHUNK_SIZE` environment variable
    /// when it holds a valid positive integer, and is
    /// [`DEFAULT_CHUNK_SIZE`](crate::DEFAULT_CHUNK_SIZE) otherwise.
    #[must_use]
    pub fn new() -> Self {
        Self {
            delimiters: None,
            max_chunk_size: config::effective_chunk_size(),
        }
    }

    /// Sets the delimiter set that splits the stream into segments.
    #[must_use]
    pub fn with_delimiters(mut self, delimiters: DelimiterSet) -> Self {
        self.delimiters = Some(delimiters);
        self
    }

    /// Sets the upper bound on bytes buffered per refill.
    ///
    /// A zero bound is rejected by [`scan`](Self::scan), not here.
    #[must_use]
    pub fn with_max_chunk_size(mut self, max_chunk_size: usize) -> Self {
        self.max_chunk_size = max_chunk_size;
        self
    }

    /// The configured chunk limit.
    #[must_use]
    pub fn max_chunk_size(&self) -> usize {
        self.max_chunk_size
    }

    /// The configured delimiter set, if any.
    #[must_use]
    pub fn delimiters(&self) -> Option<&DelimiterSet> {
        self.delimiters.as_ref()
    }

    /// Produces the next segment of `stream`, resuming from `state`.
    ///
    /// The first call passes [`ScanState::new`]; each later call passes
    /// the state carried by the previous [`ScanOutcome::Segment`]. A
    /// state must only ever be paired with the stream that produced it,
    /// and a single stream must not be driven by two sessions at once,
    /// since realignment moves the stream cursor backward.
    ///
    /// Segments arrive in strictly increasing stream order with no gaps
    /// or duplication. Concatenating every segment and delimiter run in
    /// emission order reproduces the stream bytes exactly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the chunk limit is zero,
    /// [`Error::ChunkTooLarge`] if a segment exceeds the chunk limit
    /// before any delimiter appears while the stream still has data,
    /// and [`Error::Io`] for read or seek failures.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::Cursor;
    /// use trawl::{ChunkScanner, DelimiterSet, ScanOutcome, ScanState};
    ///
    /// let scanner = ChunkScanner::new()
    ///     .with_delimiters(DelimiterSet::new(";").unwrap());
    /// let mut stream = Cursor::new(b"one;two".to_vec());
    ///
    /// let mut state = ScanState::new();
    /// let mut collected = Vec::new();
    /// loop {
    ///     match scanner.scan(&mut stream, state).unwrap() {
    ///         ScanOutcome::Segment(next) => {
    ///             collected.push(next.segment().to_vec());
    ///             state = next;
    ///         }
    ///         ScanOutcome::Exhausted => break,
    ///     }
    /// }
    /// assert_eq!(collected, vec![b"one".to_vec(), b"two".to_vec()]);
    /// ```
    pub fn scan<R: Read + Seek>(&self, stream: &mut R, state: ScanState) -> Result<ScanOutcome> {
        if self.max_chunk_size == 0 {
            return Err(Error::Validation {
                field: "max_chunk_size".into(),
                message: "chunk limit must be a positive number of bytes".into(),
            });
        }

        let mut phase = Phase::resume(state);
        loop {
            phase = match phase {
                Phase::Finished => return Ok(ScanOutcome::Exhausted),
                Phase::NeedRefill => {
                    let (chunk, saw_eof) = refill(stream, self.max_chunk_size)?;
                    if chunk.is_empty() {
                        Phase::Finished
                    } else {
                        Phase::Scanning {
                            chunk,
                            start: 0,
                            fresh: true,
                            saw_eof,
                        }
                    }
                }
                Phase::Scanning {
                    chunk,
                    start,
                    fresh,
                    saw_eof,
                } => match self.split_at_delimiter(stream, chunk, start, fresh, saw_eof)? {
                    Split::Segment(next) => return Ok(ScanOutcome::Segment(next)),
                    Split::Realign => Phase::NeedRefill,
                },
            };
        }
    }

    /// Iterator adapter over [`scan`](Self::scan) yielding owned
    /// segment bytes.
    pub fn segments<'a, R: Read + Seek>(&'a self, stream: &'a mut R) -> Segments<'a, R> {
        Segments::new(self, stream)
    }

    /// Locates the next segment inside `chunk` starting at `start`, or
    /// decides that the stream must be realigned and re-read.
    fn split_at_delimiter<R: Read + Seek>(
        &self,
        stream: &mut R,
        chunk: Vec<u8>,
        start: usize,
        fresh: bool,
        saw_eof: bool,
    ) -> Result<Split> {
        let Some(delimiters) = &self.delimiters else {
            // Raw mode: the whole remainder is one segment.
            let len = chunk.len();
            return Ok(Split::Segment(ScanState::loaded(
                chunk, start, len, len, len, saw_eof,
            )));
        };

        if let Some(found) = chunk[start..].find_byteset(delimiters.as_bytes()) {
            let delimiter_start = start + found;
            let delimiter_end = chunk[delimiter_start..]
                .find_not_byteset(delimiters.as_bytes())
                .map_or(chunk.len(), |run| delimiter_start + run);
            return Ok(Split::Segment(ScanState::loaded(
                chunk,
                start,
                delimiter_start,
                delimiter_start,
                delimiter_end,
                saw_eof,
            )));
        }

        // No delimiter in the remainder. At end of stream the trailing
        // delimiter is optional and the remainder is the final segment.
        if saw_eof || (fresh && at_end(stream)?) {
            let len = chunk.len();
            return Ok(Split::Segment(ScanState::loaded(
                chunk, start, len, len, len, true,
            )));
        }

        if fresh {
            // The whole buffer was searched from its origin, so the
            // token cannot fit: report the searched stream window.
            let end_offset = stream.stream_position()?;
            let start_offset = end_offset - (chunk.len() - start) as u64;
            return Err(Error::ChunkTooLarge {
                start_offset,
                end_offset,
            });
        }

        // Mid-chunk miss: rewind by the unconsumed tail so the next
        // refill starts exactly at the segment boundary.
        let tail = chunk.len() - start;
        log::debug!("no delimiter in {tail}-byte tail, rewinding stream to realign");
        // In-memory chunk lengths always fit in i64.
        stream.seek(SeekFrom::Current(-(tail as i64)))?;
        Ok(Split::Realign)
    }
}

impl Default for ChunkScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of searching one buffered chunk.
enum Split {
    /// A segment was delimited; return it to the caller.
    Segment(ScanState),
    /// The tail must be re-read from a realigned stream position.
    Realign,
}

/// Control state for one scan call.
///
/// `fresh` records whether the chunk under search came from the refill
/// in this same call. Only a fresh chunk may fail with
/// [`Error::ChunkTooLarge`]; a stale chunk gets realigned and re-read
/// first.
#[derive(Debug)]
enum Phase {
    /// Load the next chunk from the stream.
    NeedRefill,
    /// Search the loaded chunk for the next delimiter run.
    Scanning {
        chunk: Vec<u8>,
        start: usize,
        fresh: bool,
        saw_eof: bool,
    },
    /// The stream is exhausted.
    Finished,
}

impl Phase {
    fn resume(state: ScanState) -> Self {
        match state.into_repr() {
            Repr::Start => Self::NeedRefill,
            Repr::Loaded {
                chunk,
                delimiter_end,
                saw_eof,
                ..
            } => {
                if delimiter_end >= chunk.len() {
                    // Previous segment consumed the whole buffer.
                    if saw_eof {
                        Self::Finished
                    } else {
                        Self::NeedRefill
                    }
                } else {
                    Self::Scanning {
                        chunk,
                        start: delimiter_end,
                        fresh: false,
                        saw_eof,
                    }
                }
            }
        }
    }
}

/// Reads from `stream` until `max_chunk_size` bytes are buffered or the
/// stream ends. Returns the buffer and whether end of stream was
/// observed.
fn refill<R: Read>(stream: &mut R, max_chunk_size: usize) -> Result<(Vec<u8>, bool)> {
    let mut chunk = vec![0_u8; max_chunk_size];
    let mut filled = 0;
    let mut saw_eof = false;
    while filled < max_chunk_size {
        match stream.read(&mut chunk[filled..]) {
            Ok(0) => {
                saw_eof = true;
                break;
            }
            Ok(count) => filled += count,
            Err(error) if error.kind() == ErrorKind::Interrupted => {}
            Err(error) => return Err(error.into()),
        }
    }
    chunk.truncate(filled);
    Ok((chunk, saw_eof))
}

/// Probes whether `stream` is at end of stream, restoring the cursor
/// when it is not.
fn at_end<R: Read + Seek>(stream: &mut R) -> Result<bool> {
    let mut probe = [0_u8; 1];
    loop {
        match stream.read(&mut probe) {
            Ok(0) => return Ok(true),
            Ok(_) => {
                stream.seek(SeekFrom::Current(-1))?;
                return Ok(false);
            }
            Err(error) if error.kind() == ErrorKind::Interrupted => {}
            Err(error) => return Err(error.into()),
        }
    }
}
