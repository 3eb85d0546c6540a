//! Asset source backed by a directory on disk.
//!
//! Serves the same logical paths as an embedded bundle, but reads the
//! files fresh on every lookup. Useful during development, where edits
//! to assets should show up without rebuilding the binary.
//!
//! # Examples
//!
//! ```
//! use assetfs::{AssetFs, DiskSource};
//! # use tempfile::TempDir;
//!
//! # let temp_dir = TempDir::new().unwrap();
//! # std::fs::write(temp_dir.path().join("a.txt"), "hello").unwrap();
//! let fs = AssetFs::new(DiskSource::new(temp_dir.path()));
//! assert_eq!(fs.read("/a.txt").unwrap(), b"hello");
//! ```

use crate::error::{AssetFsError, Result};
use crate::traits::AssetSource;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Reads assets from files under a root directory.
#[derive(Debug, Clone)]
pub struct DiskSource {
    root: PathBuf,
}

impl DiskSource {
    /// Creates a source rooted at `root`.
    ///
    /// The directory is not checked here; missing roots surface as
    /// [`AssetFsError::NotFound`] on lookup.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a logical asset path onto the disk.
    ///
    /// Paths may not climb out of the root; `..` segments are reported as
    /// not found.
    fn resolve(&self, path: &str) -> Result<PathBuf> {
        let mut disk_path = self.root.clone();
        for segment in path.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    tracing::warn!(path = %path, "Rejected asset path escaping the root");
                    return Err(AssetFsError::NotFound {
                        path: path.to_string(),
                    });
                }
                _ => disk_path.push(segment),
            }
        }
        Ok(disk_path)
    }
}

fn lookup_error(path: &str, err: io::Error) -> AssetFsError {
    match err.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory => AssetFsError::NotFound {
            path: path.to_string(),
        },
        _ => AssetFsError::Io {
            path: path.to_string(),
            source: err,
        },
    }
}

impl AssetSource for DiskSource {
    fn asset(&self, path: &str) -> Result<Cow<'static, [u8]>> {
        let disk_path = self.resolve(path)?;

        let metadata = fs::metadata(&disk_path).map_err(|e| lookup_error(path, e))?;
        if !metadata.is_file() {
            return Err(AssetFsError::NotFound {
                path: path.to_string(),
            });
        }

        let content = fs::read(&disk_path).map_err(|e| lookup_error(path, e))?;
        tracing::debug!(path = %path, size = content.len(), "Read asset from disk");
        Ok(Cow::Owned(content))
    }

    fn asset_dir(&self, path: &str) -> Result<Vec<String>> {
        let not_a_directory = || AssetFsError::NotADirectory {
            path: path.to_string(),
        };

        let disk_path = self.resolve(path).map_err(|_| not_a_directory())?;
        let entries = match fs::read_dir(&disk_path) {
            Ok(entries) => entries,
            Err(e) if matches!(
                e.kind(),
                io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
            ) =>
            {
                return Err(not_a_directory());
            }
            Err(e) => {
                return Err(AssetFsError::Io {
                    path: path.to_string(),
                    source: e,
                });
            }
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| AssetFsError::Io {
                path: path.to_string(),
                source: e,
            })?;
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(name) => {
                    tracing::warn!(path = %path, name = ?name, "Skipping non-UTF-8 directory entry");
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("b.txt"), "bee").unwrap();
        fs::write(root.join("a.txt"), "hello").unwrap();
        fs::create_dir(root.join("dir")).unwrap();
        fs::write(root.join("dir/c.txt"), "world").unwrap();
        temp_dir
    }

    #[test]
    fn test_asset_reads_file() {
        let temp_dir = fixture();
        let source = DiskSource::new(temp_dir.path());
        assert_eq!(&*source.asset("a.txt").unwrap(), b"hello");
        assert_eq!(&*source.asset("dir/c.txt").unwrap(), b"world");
    }

    #[test]
    fn test_asset_missing_or_directory() {
        let temp_dir = fixture();
        let source = DiskSource::new(temp_dir.path());
        assert!(source.asset("nope.txt").unwrap_err().is_not_found());
        assert!(source.asset("dir").unwrap_err().is_not_found());
        assert!(source.asset("a.txt/inner").unwrap_err().is_not_found());
    }

    #[test]
    fn test_asset_dir_sorted() {
        let temp_dir = fixture();
        let source = DiskSource::new(temp_dir.path());
        assert_eq!(source.asset_dir("").unwrap(), ["a.txt", "b.txt", "dir"]);
        assert_eq!(source.asset_dir("dir").unwrap(), ["c.txt"]);
    }

    #[test]
    fn test_asset_dir_on_file() {
        let temp_dir = fixture();
        let source = DiskSource::new(temp_dir.path());
        assert!(source.asset_dir("a.txt").unwrap_err().is_not_directory());
        assert!(source.asset_dir("missing").unwrap_err().is_not_directory());
    }

    #[test]
    fn test_parent_segments_rejected() {
        let temp_dir = fixture();
        let source = DiskSource::new(temp_dir.path().join("dir"));
        assert!(source.asset("../a.txt").unwrap_err().is_not_found());
        assert!(source.asset_dir("..").unwrap_err().is_not_directory());
    }

    #[test]
    fn test_reads_are_fresh() {
        let temp_dir = fixture();
        let source = DiskSource::new(temp_dir.path());
        assert_eq!(&*source.asset("a.txt").unwrap(), b"hello");

        fs::write(temp_dir.path().join("a.txt"), "changed").unwrap();
        assert_eq!(&*source.asset("a.txt").unwrap(), b"changed");
    }

    #[test]
    fn test_other_io_failures_are_io_errors() {
        let temp_dir = fixture();
        let long = "x".repeat(300);

        let source = DiskSource::new(temp_dir.path());
        assert!(source.asset(&long).unwrap_err().is_io());
        assert!(source.asset_dir(&long).unwrap_err().is_io());

        let asset_fs = crate::AssetFs::new(source);
        assert!(asset_fs.open(&long).unwrap_err().is_io());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_names_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = fixture();
        let raw = OsStr::from_bytes(b"bad\xFFname.txt");
        if fs::write(temp_dir.path().join(raw), "x").is_err() {
            // filesystem refuses non-UTF-8 names
            return;
        }

        let source = DiskSource::new(temp_dir.path());
        assert_eq!(source.asset_dir("").unwrap(), ["a.txt", "b.txt", "dir"]);
    }

    #[test]
    fn test_missing_root() {
        let source = DiskSource::new("/definitely/not/a/real/root");
        assert!(source.asset("a.txt").unwrap_err().is_not_found());
        assert!(source.asset_dir("").unwrap_err().is_not_directory());
    }
}
