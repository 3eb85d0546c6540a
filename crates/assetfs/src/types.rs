//! Entry metadata shared by asset files and directories.
//!
//! [`FileInfo`] is the stat-like descriptor attached to every handle the
//! filesystem hands out: logical path, directory flag, size and a
//! modification-time policy.
//!
//! # Examples
//!
//! ```
//! use assetfs::{FileInfo, ModTime};
//! use chrono::Utc;
//!
//! let info = FileInfo::file("css/site.css", 120, ModTime::Fixed(Utc::now()));
//! assert_eq!(info.name(), "site.css");
//! assert_eq!(info.size(), 120);
//! assert!(!info.is_dir());
//! assert_eq!(info.mode().to_string(), "-rw-r--r--");
//! ```

use crate::path::base_name;
use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::borrow::Cow;
use std::fmt;

/// Modification-time policy of an entry.
///
/// Embedded assets have no real mtime. Entries either report one fixed
/// instant (captured when the filesystem was built) or, in debug mode,
/// the current time on every query so HTTP caches never consider a
/// response fresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModTime {
    /// Always report this instant
    Fixed(DateTime<Utc>),
    /// Report `Utc::now()` on every query
    Live,
}

impl ModTime {
    /// Returns the timestamp this policy reports right now.
    #[must_use]
    pub fn resolve(&self) -> DateTime<Utc> {
        match self {
            Self::Fixed(at) => *at,
            Self::Live => Utc::now(),
        }
    }

    /// Returns `true` for [`ModTime::Live`].
    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self, Self::Live)
    }
}

/// Unix-style mode bits of an entry.
///
/// Every asset is `0o644`; directories additionally carry
/// [`FileMode::DIR`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileMode(u32);

impl FileMode {
    /// Directory type bit.
    pub const DIR: u32 = 0o040_000;

    /// Permission bits reported for every asset.
    pub const DEFAULT_PERMISSIONS: u32 = 0o644;

    const fn for_entry(is_dir: bool) -> Self {
        if is_dir {
            Self(Self::DIR | Self::DEFAULT_PERMISSIONS)
        } else {
            Self(Self::DEFAULT_PERMISSIONS)
        }
    }

    /// Returns the raw mode bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns only the permission bits.
    #[must_use]
    pub const fn permissions(self) -> u32 {
        self.0 & 0o777
    }

    /// Returns `true` if the directory bit is set.
    #[must_use]
    pub const fn is_dir(self) -> bool {
        self.0 & Self::DIR != 0
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const RWX: [char; 3] = ['r', 'w', 'x'];

        write!(f, "{}", if self.is_dir() { 'd' } else { '-' })?;
        for shift in (0..9).rev() {
            let c = if self.0 & (1 << shift) == 0 {
                '-'
            } else {
                RWX[2 - shift % 3]
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Content of an embedded file.
///
/// Static data (`include_bytes!`, string literals) is kept borrowed;
/// runtime data is owned.
///
/// # Examples
///
/// ```
/// use assetfs::AssetData;
///
/// let from_literal = AssetData::from("body {}");
/// let from_bytes = AssetData::from(b"body {}");
/// assert_eq!(from_literal, from_bytes);
/// assert_eq!(from_literal.as_bytes(), b"body {}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetData(Cow<'static, [u8]>);

impl AssetData {
    /// Returns the content bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Unwraps the underlying buffer.
    #[must_use]
    pub fn into_inner(self) -> Cow<'static, [u8]> {
        self.0
    }
}

impl From<Cow<'static, [u8]>> for AssetData {
    fn from(content: Cow<'static, [u8]>) -> Self {
        Self(content)
    }
}

impl From<&'static [u8]> for AssetData {
    fn from(content: &'static [u8]) -> Self {
        Self(Cow::Borrowed(content))
    }
}

impl<const N: usize> From<&'static [u8; N]> for AssetData {
    fn from(content: &'static [u8; N]) -> Self {
        Self(Cow::Borrowed(content.as_slice()))
    }
}

impl From<&'static str> for AssetData {
    fn from(content: &'static str) -> Self {
        Self(Cow::Borrowed(content.as_bytes()))
    }
}

impl From<Vec<u8>> for AssetData {
    fn from(content: Vec<u8>) -> Self {
        Self(Cow::Owned(content))
    }
}

impl From<String> for AssetData {
    fn from(content: String) -> Self {
        Self(Cow::Owned(content.into_bytes()))
    }
}

/// Metadata of a single file or directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    path: String,
    is_dir: bool,
    size: u64,
    mod_time: ModTime,
}

impl FileInfo {
    /// Creates metadata for a plain file of `size` bytes.
    #[must_use]
    pub fn file(path: impl Into<String>, size: u64, mod_time: ModTime) -> Self {
        Self {
            path: path.into(),
            is_dir: false,
            size,
            mod_time,
        }
    }

    /// Creates metadata for a directory. Directories always have size zero.
    #[must_use]
    pub fn directory(path: impl Into<String>, mod_time: ModTime) -> Self {
        Self {
            path: path.into(),
            is_dir: true,
            size: 0,
            mod_time,
        }
    }

    /// Returns the full logical path of the entry.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the last path segment, empty for the root.
    #[must_use]
    pub fn name(&self) -> &str {
        base_name(&self.path)
    }

    /// Returns `true` if the entry is a directory.
    #[must_use]
    pub const fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Returns the size in bytes, zero for directories.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Returns the mode bits of the entry.
    #[must_use]
    pub const fn mode(&self) -> FileMode {
        FileMode::for_entry(self.is_dir)
    }

    /// Returns the modification time.
    ///
    /// Live entries report the current time on every call.
    #[must_use]
    pub fn mod_time(&self) -> DateTime<Utc> {
        self.mod_time.resolve()
    }

    /// Returns the modification-time policy itself.
    #[must_use]
    pub const fn mod_time_policy(&self) -> ModTime {
        self.mod_time
    }
}

impl Serialize for FileInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FileInfo", 6)?;
        state.serialize_field("path", self.path())?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("is_dir", &self.is_dir)?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("mode", &self.mode().to_string())?;
        state.serialize_field("mod_time", &self.mod_time())?;
        state.end()
    }
}
