//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for
//! testing the trawl library against real files on disk.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use trawl::{ChunkScanner, Result, ScanOutcome, ScanState};

/// Creates a temporary directory for testing.
///
/// The directory is cleaned up when the returned `TempDir` is dropped.
#[allow(dead_code)]
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Writes `contents` to a fresh file under `dir` and returns its path.
#[allow(dead_code)]
pub fn write_fixture(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = File::create(&path).expect("failed to create fixture");
    file.write_all(contents).expect("failed to write fixture");
    path
}

/// Drives a full scan session over the file at `path`, collecting
/// (segment, delimiter run) pairs in emission order.
#[allow(dead_code)]
pub fn scan_file(scanner: &ChunkScanner, path: &Path) -> Result<Vec<(Vec<u8>, Vec<u8>)>> {
    let mut file = trawl::open(path)?;
    let mut state = ScanState::new();
    let mut pairs = Vec::new();
    loop {
        match scanner.scan(&mut file, state)? {
            ScanOutcome::Segment(next) => {
                pairs.push((next.segment().to_vec(), next.delimiter_run().to_vec()));
                state = next;
            }
            ScanOutcome::Exhausted => return Ok(pairs),
        }
    }
}

/// Like [`scan_file`], keeping only the segments.
#[allow(dead_code)]
pub fn scan_file_segments(scanner: &ChunkScanner, path: &Path) -> Result<Vec<Vec<u8>>> {
    Ok(scan_file(scanner, path)?
        .into_iter()
        .map(|(segment, _)| segment)
        .collect())
}
