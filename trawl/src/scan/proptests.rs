//! Property-based tests for the chunk scanner.
//!
//! These drive whole scan sessions over arbitrary byte streams,
//! delimiter sets, and chunk limits, checking the reassembly law and
//! the failure contract.

use std::io::Cursor;

use proptest::prelude::*;

use super::delimiters::DelimiterSet;
use super::scanner::ChunkScanner;
use super::state::{ScanOutcome, ScanState};
use crate::error::Error;

fn data_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..200)
}

fn delimiter_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::hash_set(any::<u8>(), 1..=3)
        .prop_map(|set| set.into_iter().collect())
}

/// Drives a session to completion, returning (segment, run) pairs, or
/// the error that ended it.
fn run_session(
    scanner: &ChunkScanner,
    data: &[u8],
) -> std::result::Result<Vec<(Vec<u8>, Vec<u8>)>, Error> {
    let mut stream = Cursor::new(data.to_vec());
    let mut state = ScanState::new();
    let mut pairs = Vec::new();
    loop {
        match scanner.scan(&mut stream, state)? {
            ScanOutcome::Segment(next) => {
                pairs.push((next.segment().to_vec(), next.delimiter_run().to_vec()));
                state = next;
            }
            ScanOutcome::Exhausted => return Ok(pairs),
        }
    }
}

fn reassemble(pairs: &[(Vec<u8>, Vec<u8>)]) -> Vec<u8> {
    let mut bytes = Vec::new();
    for (segment, run) in pairs {
        bytes.extend_from_slice(segment);
        bytes.extend_from_slice(run);
    }
    bytes
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // With a buffer that holds the whole stream, every session
    // completes and reassembles exactly
    #[test]
    fn ample_buffer_round_trips(data in data_strategy(), delims in delimiter_strategy()) {
        let scanner = ChunkScanner::new()
            .with_delimiters(DelimiterSet::new(&delims[..]).unwrap())
            .with_max_chunk_size(data.len() + 1);

        let pairs = run_session(&scanner, &data).unwrap();
        prop_assert_eq!(reassemble(&pairs), data);
    }

    // Segments never contain delimiter bytes, and every run is made of
    // them exclusively
    #[test]
    fn segments_and_runs_partition_bytes(data in data_strategy(), delims in delimiter_strategy()) {
        let set = DelimiterSet::new(&delims[..]).unwrap();
        let scanner = ChunkScanner::new()
            .with_delimiters(set.clone())
            .with_max_chunk_size(data.len() + 1);

        for (segment, run) in run_session(&scanner, &data).unwrap() {
            prop_assert!(segment.iter().all(|&b| !set.contains(b)));
            prop_assert!(run.iter().all(|&b| set.contains(b)));
        }
    }

    // A small buffer either completes with exact reassembly or fails
    // with a delimiter-free searched window no larger than the limit
    #[test]
    fn small_buffer_round_trips_or_overflows(
        data in data_strategy(),
        delims in delimiter_strategy(),
        max in 1_usize..16,
    ) {
        let set = DelimiterSet::new(&delims[..]).unwrap();
        let scanner = ChunkScanner::new()
            .with_delimiters(set.clone())
            .with_max_chunk_size(max);

        match run_session(&scanner, &data) {
            Ok(pairs) => prop_assert_eq!(reassemble(&pairs), data),
            Err(Error::ChunkTooLarge { start_offset, end_offset }) => {
                prop_assert!(start_offset < end_offset);
                let window = usize::try_from(end_offset - start_offset).unwrap();
                prop_assert!(window <= max);
                let start = usize::try_from(start_offset).unwrap();
                let searched = &data[start..start + window];
                prop_assert!(searched.iter().all(|&b| !set.contains(b)));
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    // Raw mode yields maximal chunks that concatenate to the stream
    #[test]
    fn raw_mode_chunks_reassemble(data in data_strategy(), max in 1_usize..16) {
        let scanner = ChunkScanner::new().with_max_chunk_size(max);

        let pairs = run_session(&scanner, &data).unwrap();
        prop_assert_eq!(reassemble(&pairs), data.clone());
        for (index, (chunk, run)) in pairs.iter().enumerate() {
            prop_assert!(run.is_empty());
            if index + 1 < pairs.len() {
                prop_assert_eq!(chunk.len(), max);
            } else {
                prop_assert!(chunk.len() <= max);
            }
        }
    }
}
