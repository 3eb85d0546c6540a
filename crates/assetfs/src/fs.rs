//! The asset filesystem: resolves request paths to file or directory handles.
//!
//! # Examples
//!
//! ```
//! use assetfs::{AssetFs, EmbeddedAssets, HttpFile};
//! use std::io::Read;
//!
//! let assets = EmbeddedAssets::builder()
//!     .add_file("a.txt", "hello")
//!     .add_file("dir/b.txt", "world")
//!     .build()
//!     .unwrap();
//! let fs = AssetFs::new(assets);
//!
//! let mut root = fs.open("/").unwrap();
//! let names: Vec<_> = root.readdir(0).unwrap().iter().map(|e| e.name().to_string()).collect();
//! assert_eq!(names, ["a.txt", "dir"]);
//!
//! let mut content = String::new();
//! fs.open("/a.txt").unwrap().read_to_string(&mut content).unwrap();
//! assert_eq!(content, "hello");
//! ```

use crate::config::AssetFsConfig;
use crate::dir::AssetDirectory;
use crate::error::{AssetFsError, Result};
use crate::file::AssetFile;
use crate::path::normalize_request;
use crate::traits::{AssetSource, HttpFile, HttpFileSystem};
use crate::types::{FileInfo, ModTime};
use chrono::{DateTime, Utc};
use std::io::{self, Read, Seek, SeekFrom};

/// Read-only filesystem over an [`AssetSource`].
///
/// Holds no state besides its configuration and the timestamp captured
/// at construction, so one instance can serve any number of concurrent
/// `open` calls. Nothing is cached between calls.
///
/// # Thread Safety
///
/// `AssetFs<S>` is `Send + Sync` whenever `S` is; every [`AssetSource`]
/// is required to be.
#[derive(Debug, Clone)]
pub struct AssetFs<S> {
    source: S,
    config: AssetFsConfig,
    mod_time: DateTime<Utc>,
}

impl<S: AssetSource> AssetFs<S> {
    /// Creates a filesystem over `source` with the default configuration.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_config(source, AssetFsConfig::default())
    }

    /// Creates a filesystem over `source` scoped to `prefix`.
    ///
    /// # Examples
    ///
    /// ```
    /// use assetfs::{AssetFs, EmbeddedAssets};
    ///
    /// let assets = EmbeddedAssets::builder()
    ///     .add_file("static/x.css", "body {}")
    ///     .build()
    ///     .unwrap();
    /// let fs = AssetFs::with_prefix(assets, "static");
    ///
    /// assert!(fs.exists("/x.css"));
    /// assert!(!fs.exists("/static/x.css"));
    /// ```
    #[must_use]
    pub fn with_prefix(source: S, prefix: impl Into<String>) -> Self {
        Self::with_config(source, AssetFsConfig::builder().prefix(prefix).build())
    }

    /// Creates a filesystem over `source` with an explicit configuration.
    ///
    /// The fixed modification time is taken from `config.mod_time`, or
    /// captured now if unset.
    #[must_use]
    pub fn with_config(source: S, config: AssetFsConfig) -> Self {
        let mod_time = config.mod_time.unwrap_or_else(Utc::now);
        tracing::debug!(
            prefix = %config.prefix,
            debug = config.debug,
            "Created asset filesystem"
        );
        Self {
            source,
            config,
            mod_time,
        }
    }

    /// Opens the directory or file at `name`.
    ///
    /// The prefix is joined in front of `name` and one leading `/` is
    /// stripped. Directory resolution is tried first; if the source does
    /// not know a directory at that path, file resolution follows.
    ///
    /// # Errors
    ///
    /// Returns the source's file lookup error unchanged, which for the
    /// bundled sources is [`AssetFsError::NotFound`].
    pub fn open(&self, name: &str) -> Result<AssetHandle> {
        let path = normalize_request(&self.config.prefix, name);

        if let Ok(children) = self.source.asset_dir(&path) {
            tracing::debug!(path = %path, children = children.len(), "Opened asset directory");
            let dir = AssetDirectory::new(path, children, &self.source, self.fixed_mod_time());
            return Ok(AssetHandle::Directory(dir));
        }

        let content = self.source.asset(&path)?;
        tracing::debug!(path = %path, size = content.len(), "Opened asset file");

        let mod_time = if self.config.debug {
            ModTime::Live
        } else {
            self.fixed_mod_time()
        };
        Ok(AssetHandle::File(AssetFile::new(path, content, mod_time)))
    }

    /// Returns `true` if `name` resolves to a file or directory.
    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        let path = normalize_request(&self.config.prefix, name);
        self.source.asset_dir(&path).is_ok() || self.source.asset(&path).is_ok()
    }

    /// Reads the whole file at `name`.
    ///
    /// # Errors
    ///
    /// Returns [`AssetFsError::IsADirectory`] if `name` is a directory and
    /// the lookup error from [`AssetFs::open`] if it does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use assetfs::{AssetFs, EmbeddedAssets};
    ///
    /// let fs = AssetFs::new(
    ///     EmbeddedAssets::builder().add_file("dir/b.txt", "world").build().unwrap(),
    /// );
    ///
    /// assert_eq!(fs.read("dir/b.txt").unwrap(), b"world");
    /// assert!(fs.read("dir").unwrap_err().is_directory());
    /// ```
    pub fn read(&self, name: &str) -> Result<Vec<u8>> {
        match self.open(name)? {
            AssetHandle::File(file) => Ok(file.contents().to_vec()),
            AssetHandle::Directory(dir) => Err(AssetFsError::IsADirectory {
                path: dir.info().path().to_string(),
            }),
        }
    }

    /// Returns the underlying asset source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &AssetFsConfig {
        &self.config
    }

    /// Returns the lookup prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.config.prefix
    }

    /// Returns `true` if opened files report live modification times.
    #[must_use]
    pub const fn is_debug(&self) -> bool {
        self.config.debug
    }

    /// Returns the fixed modification time reported by non-debug entries.
    #[must_use]
    pub const fn mod_time(&self) -> DateTime<Utc> {
        self.mod_time
    }

    const fn fixed_mod_time(&self) -> ModTime {
        ModTime::Fixed(self.mod_time)
    }
}

impl<S: AssetSource> HttpFileSystem for AssetFs<S> {
    type File = AssetHandle;

    fn open(&self, name: &str) -> Result<AssetHandle> {
        Self::open(self, name)
    }
}

/// Handle returned by [`AssetFs::open`].
#[derive(Debug, Clone)]
pub enum AssetHandle {
    /// An embedded file
    File(AssetFile),
    /// An embedded directory
    Directory(AssetDirectory),
}

impl AssetHandle {
    /// Returns `true` for directory handles.
    #[must_use]
    pub const fn is_dir(&self) -> bool {
        matches!(self, Self::Directory(_))
    }

    /// Returns the entry metadata.
    #[must_use]
    pub const fn info(&self) -> &FileInfo {
        match self {
            Self::File(file) => file.info(),
            Self::Directory(dir) => dir.info(),
        }
    }

    /// Returns the file handle, if this is one.
    #[must_use]
    pub fn into_file(self) -> Option<AssetFile> {
        match self {
            Self::File(file) => Some(file),
            Self::Directory(_) => None,
        }
    }

    /// Returns the directory handle, if this is one.
    #[must_use]
    pub fn into_directory(self) -> Option<AssetDirectory> {
        match self {
            Self::Directory(dir) => Some(dir),
            Self::File(_) => None,
        }
    }
}

impl Read for AssetHandle {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::File(file) => file.read(buf),
            Self::Directory(dir) => dir.read(buf),
        }
    }
}

impl Seek for AssetHandle {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        match self {
            Self::File(file) => file.seek(pos),
            Self::Directory(dir) => dir.seek(pos),
        }
    }
}

impl HttpFile for AssetHandle {
    fn readdir(&mut self, count: isize) -> Result<Vec<FileInfo>> {
        match self {
            Self::File(file) => file.readdir(count),
            Self::Directory(dir) => dir.readdir(count),
        }
    }

    fn stat(&self) -> Result<FileInfo> {
        Ok(self.info().clone())
    }

    fn close(&mut self) -> Result<()> {
        match self {
            Self::File(file) => file.close(),
            Self::Directory(dir) => dir.close(),
        }
    }
}
