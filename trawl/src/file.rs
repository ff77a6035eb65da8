//! File helpers: opening with mapped errors, and `touch`.

use std::fs::{File, FileTimes, OpenOptions};
use std::path::Path;
use std::time::SystemTime;

use crate::error::{Error, Result};

/// Opens a file read-only.
///
/// The handle is suitable for [`ChunkScanner::scan`], which requires
/// seeking.
///
/// [`ChunkScanner::scan`]: crate::ChunkScanner::scan
///
/// # Errors
///
/// Returns [`Error::PathNotFound`] or [`Error::PermissionDenied`] for
/// the matching open failures, and [`Error::Io`] otherwise.
///
/// # Examples
///
/// ```no_run
/// let file = trawl::open("/etc/hosts").unwrap();
/// ```
pub fn open<P: AsRef<Path>>(path: P) -> Result<File> {
    let path = path.as_ref();
    File::open(path).map_err(|error| Error::from_path_io(path, error))
}

/// Creates `path` if missing and sets its access and modification
/// times to now.
///
/// Existing contents are left untouched.
///
/// # Errors
///
/// Returns [`Error::PathNotFound`] when a parent directory is missing,
/// [`Error::PermissionDenied`] when the file cannot be created or
/// written, and [`Error::Io`] for other failures.
///
/// # Examples
///
/// ```no_run
/// trawl::touch("/tmp/build.stamp").unwrap();
/// ```
pub fn touch<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .map_err(|error| Error::from_path_io(path, error))?;

    let now = SystemTime::now();
    let times = FileTimes::new().set_accessed(now).set_modified(now);
    file.set_times(times)
        .map_err(|error| Error::from_path_io(path, error))?;
    Ok(())
}
