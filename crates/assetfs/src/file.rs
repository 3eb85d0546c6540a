//! Readable, seekable handle over one embedded file.
//!
//! # Examples
//!
//! ```
//! use assetfs::{AssetFile, ModTime};
//! use chrono::Utc;
//! use std::io::Read;
//!
//! let mut file = AssetFile::new("a.txt", b"hello".as_slice(), ModTime::Fixed(Utc::now()));
//!
//! let mut content = String::new();
//! file.read_to_string(&mut content).unwrap();
//! assert_eq!(content, "hello");
//! ```

use crate::error::{AssetFsError, Result};
use crate::traits::HttpFile;
use crate::types::{AssetData, FileInfo, ModTime};
use std::borrow::Cow;
use std::io::{self, Read, Seek, SeekFrom};

/// An open embedded file.
///
/// Owns its buffer and read position; created fresh by every
/// [`AssetFs::open`](crate::AssetFs::open) call.
#[derive(Debug, Clone)]
pub struct AssetFile {
    content: Cow<'static, [u8]>,
    position: u64,
    info: FileInfo,
}

impl AssetFile {
    /// Wraps `content` as the file at `path`.
    #[must_use]
    pub fn new(
        path: impl Into<String>,
        content: impl Into<AssetData>,
        mod_time: ModTime,
    ) -> Self {
        let content = content.into().into_inner();
        let info = FileInfo::file(path, content.len() as u64, mod_time);
        Self {
            content,
            position: 0,
            info,
        }
    }

    /// Returns the full file content regardless of the read position.
    #[must_use]
    pub fn contents(&self) -> &[u8] {
        &self.content
    }

    /// Returns the content length in bytes.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.content.len() as u64
    }

    /// Returns `true` if the file has no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the current read position.
    #[must_use]
    pub const fn position(&self) -> u64 {
        self.position
    }

    /// Returns the file metadata.
    #[must_use]
    pub const fn info(&self) -> &FileInfo {
        &self.info
    }

    /// Moves the read position, reporting failures as [`AssetFsError`].
    ///
    /// The target may be anywhere in `0..=len`; the position is unchanged
    /// when the target is out of range.
    ///
    /// # Errors
    ///
    /// Returns [`AssetFsError::OutOfRange`] if the target is negative or
    /// past the end of the content.
    ///
    /// # Examples
    ///
    /// ```
    /// use assetfs::{AssetFile, ModTime};
    /// use std::io::SeekFrom;
    ///
    /// let mut file = AssetFile::new("a.txt", b"hello".as_slice(), ModTime::Live);
    /// assert_eq!(file.seek_to(SeekFrom::End(-2)).unwrap(), 3);
    /// assert!(file.seek_to(SeekFrom::Start(6)).unwrap_err().is_out_of_range());
    /// ```
    pub fn seek_to(&mut self, pos: SeekFrom) -> Result<u64> {
        self.position = checked_seek(self.position, self.len(), pos)?;
        Ok(self.position)
    }
}

/// Resolves a seek against a buffer of `len` bytes.
pub(crate) fn checked_seek(current: u64, len: u64, pos: SeekFrom) -> Result<u64> {
    let (base, delta) = match pos {
        SeekFrom::Start(offset) => (0_i128, i128::from(offset)),
        SeekFrom::End(offset) => (i128::from(len), i128::from(offset)),
        SeekFrom::Current(offset) => (i128::from(current), i128::from(offset)),
    };
    let target = base + delta;

    match u64::try_from(target) {
        Ok(position) if position <= len => Ok(position),
        _ => Err(AssetFsError::OutOfRange {
            offset: i64::try_from(target).unwrap_or(if target < 0 { i64::MIN } else { i64::MAX }),
            len,
        }),
    }
}

impl Read for AssetFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        // position never exceeds len, so it always fits in usize
        let start = usize::try_from(self.position).unwrap_or(self.content.len());
        let remaining = &self.content[start..];
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        self.position += n as u64;
        Ok(n)
    }
}

impl Seek for AssetFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.seek_to(pos).map_err(io::Error::from)
    }
}

impl HttpFile for AssetFile {
    fn readdir(&mut self, _count: isize) -> Result<Vec<FileInfo>> {
        Err(AssetFsError::NotADirectory {
            path: self.info.path().to_string(),
        })
    }

    fn stat(&self) -> Result<FileInfo> {
        Ok(self.info.clone())
    }
}
