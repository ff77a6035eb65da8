//! Iterator adapters over the chunk scanner.

use std::fs::File;
use std::io::{ErrorKind, Read, Seek};
use std::path::Path;

use crate::error::{Error, Result};
use crate::scan::delimiters::DelimiterSet;
use crate::scan::scanner::ChunkScanner;
use crate::scan::state::{ScanOutcome, ScanState};

/// Iterator over the segments of a borrowed stream.
///
/// Created by [`ChunkScanner::segments`]. Yields each segment as owned
/// bytes; delimiter runs are dropped. After yielding an error the
/// iterator is fused and returns `None`.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use trawl::{ChunkScanner, DelimiterSet};
///
/// let scanner = ChunkScanner::new()
///     .with_delimiters(DelimiterSet::new(" ").unwrap());
/// let mut stream = Cursor::new(b"pattern matched twice".to_vec());
/// let words: Vec<Vec<u8>> = scanner
///     .segments(&mut stream)
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(words.len(), 3);
/// ```
#[derive(Debug)]
pub struct Segments<'a, R> {
    scanner: &'a ChunkScanner,
    stream: &'a mut R,
    state: Option<ScanState>,
}

impl<'a, R: Read + Seek> Segments<'a, R> {
    pub(crate) fn new(scanner: &'a ChunkScanner, stream: &'a mut R) -> Self {
        Self {
            scanner,
            stream,
            state: Some(ScanState::new()),
        }
    }
}

impl<R: Read + Seek> Iterator for Segments<'_, R> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        let state = self.state.take()?;
        match self.scanner.scan(self.stream, state) {
            Ok(ScanOutcome::Segment(next)) => {
                let segment = next.segment().to_vec();
                self.state = Some(next);
                Some(Ok(segment))
            }
            Ok(ScanOutcome::Exhausted) => None,
            Err(error) => Some(Err(error)),
        }
    }
}

/// Iterator over the lines of a file, created by [`lines`].
#[derive(Debug)]
pub struct Lines {
    scanner: ChunkScanner,
    file: File,
    state: Option<ScanState>,
}

impl Iterator for Lines {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let state = self.state.take()?;
        match self.scanner.scan(&mut self.file, state) {
            Ok(ScanOutcome::Segment(next)) => {
                let mut bytes = next.segment().to_vec();
                self.state = Some(next);
                if bytes.last() == Some(&b'\r') {
                    bytes.pop();
                }
                match String::from_utf8(bytes) {
                    Ok(line) => Some(Ok(line)),
                    Err(_) => {
                        self.state = None;
                        Some(Err(Error::Io(std::io::Error::new(
                            ErrorKind::InvalidData,
                            "stream did not contain valid UTF-8",
                        ))))
                    }
                }
            }
            Ok(ScanOutcome::Exhausted) => None,
            Err(error) => Some(Err(error)),
        }
    }
}

/// Opens `path` and iterates its newline-separated lines.
///
/// Splits at `\n` and trims one trailing `\r` from each line, so both
/// Unix and Windows line endings read cleanly. Newline runs coalesce
/// into a single boundary, so consecutive `\n` bytes yield no empty
/// lines. Lines must be valid UTF-8 and fit within the scanner's
/// default chunk limit.
///
/// # Errors
///
/// Returns [`Error::PathNotFound`] or [`Error::PermissionDenied`] when
/// the file cannot be opened, with [`Error::Io`] for other open
/// failures. Iteration yields [`Error::ChunkTooLarge`] for an
/// over-long line and [`Error::Io`] for read failures or invalid
/// UTF-8.
///
/// # Examples
///
/// ```no_run
/// let mut names = Vec::new();
/// for line in trawl::lines("/etc/hostname").unwrap() {
///     names.push(line.unwrap());
/// }
/// ```
pub fn lines<P: AsRef<Path>>(path: P) -> Result<Lines> {
    let file = crate::file::open(path)?;
    Ok(Lines {
        scanner: ChunkScanner::new().with_delimiters(DelimiterSet::new("\n")?),
        file,
        state: Some(ScanState::new()),
    })
}
