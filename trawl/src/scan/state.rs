//! Resume tokens threaded through the chunk scanner.
//!
//! A scan session owns no hidden cursor. Every call to
//! [`ChunkScanner::scan`](crate::ChunkScanner::scan) consumes the
//! previous [`ScanState`] and, when a segment is produced, hands back
//! the successor state inside [`ScanOutcome::Segment`]. Holding a state
//! is holding the session; dropping it abandons the session with no
//! cleanup required.

/// Outcome of a single scan call.
#[derive(Debug)]
pub enum ScanOutcome {
    /// A segment is available. The carried state exposes the segment
    /// bytes and must be passed back in to continue the session.
    Segment(ScanState),
    /// The stream is exhausted; no further segment exists.
    Exhausted,
}

impl ScanOutcome {
    /// Returns true if the stream was exhausted.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }

    /// Unwraps the successor state, or `None` when exhausted.
    #[must_use]
    pub fn into_state(self) -> Option<ScanState> {
        match self {
            Self::Segment(state) => Some(state),
            Self::Exhausted => None,
        }
    }
}

/// Caller-held resume token for a scan session.
///
/// States are plain values: cloning one checkpoints the session, and
/// two sessions over different streams never interfere as long as each
/// state is only ever paired with the stream it came from.
///
/// # Examples
///
/// ```
/// use trawl::ScanState;
///
/// let state = ScanState::new();
/// assert!(state.is_start());
/// assert!(state.segment().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ScanState {
    repr: Repr,
}

/// Internal representation of a scan state.
///
/// Offsets index into `chunk` and are half-open window bounds obeying
/// `segment_start <= segment_end <= delimiter_start <= delimiter_end
/// <= chunk.len()`. Scanning resumes at `delimiter_end`.
#[derive(Debug, Clone)]
pub(crate) enum Repr {
    /// No bytes consumed yet; the first scan call performs the first
    /// refill.
    Start,
    /// A chunk is loaded and a segment within it has been delimited.
    Loaded {
        /// The buffered bytes the windows index into.
        chunk: Vec<u8>,
        /// Start of the segment window.
        segment_start: usize,
        /// End of the segment window (exclusive).
        segment_end: usize,
        /// Start of the delimiter run window.
        delimiter_start: usize,
        /// End of the delimiter run window (exclusive).
        delimiter_end: usize,
        /// Whether the refill that produced `chunk` observed end of
        /// stream.
        saw_eof: bool,
    },
}

impl ScanState {
    /// Creates the initial state for a fresh scan session.
    #[must_use]
    pub fn new() -> Self {
        Self { repr: Repr::Start }
    }

    /// Returns true if no scan call has consumed this state's session
    /// yet.
    #[must_use]
    pub fn is_start(&self) -> bool {
        matches!(self.repr, Repr::Start)
    }

    /// The bytes of the segment this state delimits.
    ///
    /// Empty for the initial state. Also empty when the stream opened
    /// with a delimiter, since the bytes before the first separator
    /// form an empty segment.
    #[must_use]
    pub fn segment(&self) -> &[u8] {
        match &self.repr {
            Repr::Start => &[],
            Repr::Loaded {
                chunk,
                segment_start,
                segment_end,
                ..
            } => &chunk[*segment_start..*segment_end],
        }
    }

    /// The delimiter run that terminated the segment.
    ///
    /// Empty for the initial state, for raw-mode chunks, and for a
    /// final segment that ended at end of stream.
    #[must_use]
    pub fn delimiter_run(&self) -> &[u8] {
        match &self.repr {
            Repr::Start => &[],
            Repr::Loaded {
                chunk,
                delimiter_start,
                delimiter_end,
                ..
            } => &chunk[*delimiter_start..*delimiter_end],
        }
    }

    pub(crate) fn loaded(
        chunk: Vec<u8>,
        segment_start: usize,
        segment_end: usize,
        delimiter_start: usize,
        delimiter_end: usize,
        saw_eof: bool,
    ) -> Self {
        debug_assert!(segment_start <= segment_end);
        debug_assert!(segment_end <= delimiter_start);
        debug_assert!(delimiter_start <= delimiter_end);
        debug_assert!(delimiter_end <= chunk.len());
        Self {
            repr: Repr::Loaded {
                chunk,
                segment_start,
                segment_end,
                delimiter_start,
                delimiter_end,
                saw_eof,
            },
        }
    }

    pub(crate) fn into_repr(self) -> Repr {
        self.repr
    }
}

impl Default for ScanState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_empty() {
        let state = ScanState::new();
        assert!(state.is_start());
        assert!(state.segment().is_empty());
        assert!(state.delimiter_run().is_empty());
    }

    #[test]
    fn test_default_matches_new() {
        assert!(ScanState::default().is_start());
    }

    #[test]
    fn test_loaded_state_windows() {
        let state = ScanState::loaded(b"alpha,,beta".to_vec(), 0, 5, 5, 7, false);
        assert!(!state.is_start());
        assert_eq!(state.segment(), b"alpha");
        assert_eq!(state.delimiter_run(), b",,");
    }

    #[test]
    fn test_loaded_state_empty_segment() {
        let state = ScanState::loaded(b",data".to_vec(), 0, 0, 0, 1, false);
        assert_eq!(state.segment(), b"");
        assert_eq!(state.delimiter_run(), b",");
    }

    #[test]
    fn test_loaded_state_final_segment_has_no_run() {
        let state = ScanState::loaded(b"tail".to_vec(), 0, 4, 4, 4, true);
        assert_eq!(state.segment(), b"tail");
        assert!(state.delimiter_run().is_empty());
    }

    #[test]
    fn test_clone_checkpoints_session() {
        let state = ScanState::loaded(b"a,b".to_vec(), 0, 1, 1, 2, false);
        let checkpoint = state.clone();
        drop(state);
        assert_eq!(checkpoint.segment(), b"a");
    }

    #[test]
    fn test_outcome_accessors() {
        assert!(ScanOutcome::Exhausted.is_exhausted());
        assert!(ScanOutcome::Exhausted.into_state().is_none());

        let outcome = ScanOutcome::Segment(ScanState::new());
        assert!(!outcome.is_exhausted());
        assert!(outcome.into_state().is_some());
    }
}
