//! Directory handle with a paginated listing.
//!
//! Children are classified once, when the handle is built: each child
//! path is probed with [`AssetSource::asset_dir`] and tagged a directory
//! if the probe succeeds. Listing calls afterwards only move a cursor.

use crate::error::Result;
use crate::file::checked_seek;
use crate::path::join;
use crate::traits::{AssetSource, HttpFile};
use crate::types::{FileInfo, ModTime};
use std::io::{self, Read, Seek, SeekFrom};

/// An open embedded directory.
///
/// # Examples
///
/// ```
/// use assetfs::{AssetDirectory, EmbeddedAssets, HttpFile, ModTime};
///
/// let assets = EmbeddedAssets::builder()
///     .add_file("dir/a.txt", "a")
///     .add_file("dir/sub/b.txt", "b")
///     .build()
///     .unwrap();
///
/// let children = vec!["a.txt".to_string(), "sub".to_string()];
/// let mut dir = AssetDirectory::new("dir", children, &assets, ModTime::Live);
///
/// let listing = dir.readdir(0).unwrap();
/// assert!(!listing[0].is_dir());
/// assert!(listing[1].is_dir());
/// ```
#[derive(Debug, Clone)]
pub struct AssetDirectory {
    info: FileInfo,
    children: Vec<FileInfo>,
    cursor: usize,
}

impl AssetDirectory {
    /// Builds a directory handle, classifying every child through `source`.
    ///
    /// Child order is kept exactly as given.
    #[must_use]
    pub fn new<S: AssetSource + ?Sized>(
        path: impl Into<String>,
        children: Vec<String>,
        source: &S,
        mod_time: ModTime,
    ) -> Self {
        let path = path.into();
        let children = children
            .into_iter()
            .map(|child| {
                let child_path = join(&path, &child);
                let is_dir = source.asset_dir(&child_path).is_ok();
                tracing::trace!(path = %child_path, is_dir, "Classified directory child");
                if is_dir {
                    FileInfo::directory(child_path, mod_time)
                } else {
                    FileInfo::file(child_path, 0, mod_time)
                }
            })
            .collect();

        Self {
            info: FileInfo::directory(path, mod_time),
            children,
            cursor: 0,
        }
    }

    /// Returns every child in listing order, ignoring the cursor.
    #[must_use]
    pub fn entries(&self) -> &[FileInfo] {
        &self.children
    }

    /// Returns how many children have not been listed yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.children.len() - self.cursor
    }

    /// Returns the directory metadata.
    #[must_use]
    pub const fn info(&self) -> &FileInfo {
        &self.info
    }
}

impl Read for AssetDirectory {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Ok(0)
    }
}

impl Seek for AssetDirectory {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        checked_seek(0, 0, pos).map_err(io::Error::from)
    }
}

impl HttpFile for AssetDirectory {
    fn readdir(&mut self, count: isize) -> Result<Vec<FileInfo>> {
        let remaining = self.remaining();
        let take = match usize::try_from(count) {
            Ok(n) if n > 0 => n.min(remaining),
            _ => remaining,
        };

        let batch = self.children[self.cursor..self.cursor + take].to_vec();
        self.cursor += take;
        Ok(batch)
    }

    fn stat(&self) -> Result<FileInfo> {
        Ok(self.info.clone())
    }
}
