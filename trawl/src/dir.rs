//! Directory iteration with classified entry kinds.
//!
//! Every entry yielded by [`entries`] carries an [`EntryKind`]
//! classifying its file type. A type outside the known set is surfaced
//! as [`Error::UnknownEntryKind`] rather than silently defaulted, so
//! callers notice platform drift instead of misfiling entries.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The classified kind of a directory entry.
///
/// The string forms (`"file"`, `"directory"`, `"link"`, ...) are part
/// of the public vocabulary and round-trip through serde and
/// [`FromStr`].
///
/// # Examples
///
/// ```
/// use trawl::EntryKind;
///
/// assert_eq!(EntryKind::Directory.as_str(), "directory");
/// assert_eq!("link".parse::<EntryKind>().unwrap(), EntryKind::Symlink);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Block device.
    Block,
    /// Character device.
    Character,
    /// Directory.
    Directory,
    /// FIFO (named pipe).
    Fifo,
    /// Regular file.
    File,
    /// Socket.
    Socket,
    /// Symbolic link.
    #[serde(rename = "link")]
    Symlink,
}

impl EntryKind {
    /// Classify a raw file type, or `None` when it matches no known
    /// kind.
    #[must_use]
    pub fn classify(file_type: fs::FileType) -> Option<Self> {
        if file_type.is_symlink() {
            return Some(Self::Symlink);
        }
        if file_type.is_dir() {
            return Some(Self::Directory);
        }
        if file_type.is_file() {
            return Some(Self::File);
        }
        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;
            if file_type.is_block_device() {
                return Some(Self::Block);
            }
            if file_type.is_char_device() {
                return Some(Self::Character);
            }
            if file_type.is_fifo() {
                return Some(Self::Fifo);
            }
            if file_type.is_socket() {
                return Some(Self::Socket);
            }
        }
        None
    }

    /// The canonical string form of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Character => "character",
            Self::Directory => "directory",
            Self::Fifo => "fifo",
            Self::File => "file",
            Self::Socket => "socket",
            Self::Symlink => "link",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "block" => Ok(Self::Block),
            "character" => Ok(Self::Character),
            "directory" => Ok(Self::Directory),
            "fifo" => Ok(Self::Fifo),
            "file" => Ok(Self::File),
            "socket" => Ok(Self::Socket),
            "link" => Ok(Self::Symlink),
            _ => Err(Error::Validation {
                field: "entry kind".to_string(),
                message: format!("unrecognized kind '{s}'"),
            }),
        }
    }
}

/// A directory entry with its kind classified at read time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    name: OsString,
    kind: EntryKind,
}

impl DirEntry {
    /// The entry's file name within its directory.
    #[must_use]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// The entry's classified kind.
    #[must_use]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Consumes the entry, returning its file name.
    #[must_use]
    pub fn into_name(self) -> OsString {
        self.name
    }
}

/// Iterator over the classified entries of a directory, created by
/// [`entries`].
#[derive(Debug)]
pub struct Entries {
    inner: fs::ReadDir,
    dir: PathBuf,
}

impl Iterator for Entries {
    type Item = Result<DirEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = match self.inner.next()? {
            Ok(entry) => entry,
            Err(error) => return Some(Err(Error::Io(error))),
        };
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(error) => return Some(Err(Error::from_path_io(&entry.path(), error))),
        };
        match EntryKind::classify(file_type) {
            Some(kind) => Some(Ok(DirEntry {
                name: entry.file_name(),
                kind,
            })),
            None => Some(Err(Error::UnknownEntryKind {
                path: self.dir.join(entry.file_name()),
            })),
        }
    }
}

/// Iterates the entries of `path`, classifying each one.
///
/// The `.` and `..` entries are not yielded. Symlinks are reported as
/// [`EntryKind::Symlink`], not followed.
///
/// # Errors
///
/// Returns [`Error::PathNotFound`] or [`Error::PermissionDenied`] when
/// the directory cannot be opened, and [`Error::Io`] for other open
/// failures. Iteration yields [`Error::UnknownEntryKind`] for an entry
/// whose type falls outside the known set.
///
/// # Examples
///
/// ```no_run
/// use trawl::{entries, EntryKind};
///
/// for entry in entries("/tmp").unwrap() {
///     let entry = entry.unwrap();
///     if entry.kind() == EntryKind::Directory {
///         println!("{}/", entry.name().to_string_lossy());
///     }
/// }
/// ```
pub fn entries<P: AsRef<Path>>(path: P) -> Result<Entries> {
    let path = path.as_ref();
    let inner = fs::read_dir(path).map_err(|error| Error::from_path_io(path, error))?;
    Ok(Entries {
        inner,
        dir: path.to_path_buf(),
    })
}
