//! Delimiter sets for segment scanning.

use std::fmt;

use bstr::ByteSlice;

use crate::error::{Error, Result};

/// An immutable set of separator bytes for a scan session.
///
/// Any byte in the set splits the stream; consecutive delimiter bytes
/// (in any mixture) coalesce into a single separator run. A set always
/// holds at least one byte. Scanning without separators at all is raw
/// chunk mode, expressed by not attaching a set to the scanner rather
/// than by an empty set.
///
/// # Examples
///
/// ```
/// use trawl::DelimiterSet;
///
/// let set = DelimiterSet::new(",;").unwrap();
/// assert!(set.contains(b','));
/// assert!(set.contains(b';'));
/// assert!(!set.contains(b'x'));
/// ```
#[derive(Clone)]
pub struct DelimiterSet {
    /// Member bytes, deduplicated, in first-seen order.
    bytes: Vec<u8>,
    /// Membership table indexed by byte value.
    table: [bool; 256],
}

impl DelimiterSet {
    /// Creates a delimiter set from the given bytes.
    ///
    /// Duplicate bytes are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `bytes` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use trawl::DelimiterSet;
    ///
    /// let newline = DelimiterSet::new("\n").unwrap();
    /// assert_eq!(newline.as_bytes(), b"\n");
    ///
    /// assert!(DelimiterSet::new("").is_err());
    /// ```
    pub fn new(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let raw = bytes.as_ref();
        if raw.is_empty() {
            return Err(Error::Validation {
                field: "delimiters".into(),
                message: "delimiter set must contain at least one byte".into(),
            });
        }

        let mut table = [false; 256];
        let mut members = Vec::with_capacity(raw.len());
        for &byte in raw {
            if !table[usize::from(byte)] {
                table[usize::from(byte)] = true;
                members.push(byte);
            }
        }

        Ok(Self {
            bytes: members,
            table,
        })
    }

    /// Returns true if `byte` is a member of the set.
    #[must_use]
    pub fn contains(&self, byte: u8) -> bool {
        self.table[usize::from(byte)]
    }

    /// The member bytes, deduplicated, in the order first given.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for DelimiterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DelimiterSet")
            .field(&self.bytes.as_bstr())
            .finish()
    }
}

impl PartialEq for DelimiterSet {
    fn eq(&self, other: &Self) -> bool {
        self.table == other.table
    }
}

impl Eq for DelimiterSet {}
