//! Traits at the seams of the asset filesystem.
//!
//! - [`AssetSource`]: the two lookups the filesystem consumes
//! - [`HttpFile`]: what a static-file server needs from an open handle
//! - [`HttpFileSystem`]: what a static-file server needs to open paths

use crate::error::Result;
use crate::types::FileInfo;
use std::borrow::Cow;
use std::fmt;
use std::io::{Read, Seek};
use std::sync::Arc;

/// Lookup functions over a set of embedded assets.
///
/// Paths are relative to the asset root, use `/` separators and never
/// start with `/`; the empty path names the root directory.
///
/// # Examples
///
/// ```
/// use assetfs::{AssetFsError, AssetSource, Result};
/// use std::borrow::Cow;
///
/// struct Single;
///
/// impl AssetSource for Single {
///     fn asset(&self, path: &str) -> Result<Cow<'static, [u8]>> {
///         match path {
///             "index.html" => Ok(Cow::Borrowed(b"<h1>hi</h1>".as_slice())),
///             _ => Err(AssetFsError::NotFound { path: path.to_string() }),
///         }
///     }
///
///     fn asset_dir(&self, path: &str) -> Result<Vec<String>> {
///         match path {
///             "" => Ok(vec!["index.html".to_string()]),
///             _ => Err(AssetFsError::NotADirectory { path: path.to_string() }),
///         }
///     }
/// }
///
/// assert!(Single.asset("index.html").is_ok());
/// assert!(Single.asset_dir("index.html").is_err());
/// ```
pub trait AssetSource: Send + Sync {
    /// Returns the content of the embedded file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error (normally [`AssetFsError::NotFound`]) if no file
    /// is embedded at `path`.
    ///
    /// [`AssetFsError::NotFound`]: crate::AssetFsError::NotFound
    fn asset(&self, path: &str) -> Result<Cow<'static, [u8]>>;

    /// Returns the names of the immediate children of the directory at
    /// `path`, in listing order.
    ///
    /// # Errors
    ///
    /// Returns an error (normally [`AssetFsError::NotADirectory`]) if
    /// `path` is a file or does not exist.
    ///
    /// [`AssetFsError::NotADirectory`]: crate::AssetFsError::NotADirectory
    fn asset_dir(&self, path: &str) -> Result<Vec<String>>;
}

impl<T: AssetSource + ?Sized> AssetSource for &T {
    fn asset(&self, path: &str) -> Result<Cow<'static, [u8]>> {
        (**self).asset(path)
    }

    fn asset_dir(&self, path: &str) -> Result<Vec<String>> {
        (**self).asset_dir(path)
    }
}

impl<T: AssetSource + ?Sized> AssetSource for Box<T> {
    fn asset(&self, path: &str) -> Result<Cow<'static, [u8]>> {
        (**self).asset(path)
    }

    fn asset_dir(&self, path: &str) -> Result<Vec<String>> {
        (**self).asset_dir(path)
    }
}

impl<T: AssetSource + ?Sized> AssetSource for Arc<T> {
    fn asset(&self, path: &str) -> Result<Cow<'static, [u8]>> {
        (**self).asset(path)
    }

    fn asset_dir(&self, path: &str) -> Result<Vec<String>> {
        (**self).asset_dir(path)
    }
}

/// An open file or directory as seen by a static-file server.
///
/// Handles are independent and carry their own cursors; they are `Send`
/// but every cursor-moving operation takes `&mut self`.
pub trait HttpFile: Read + Seek + Send + fmt::Debug {
    /// Lists directory children.
    ///
    /// `count <= 0` returns every child not yet returned; `count > 0`
    /// returns at most `count` of them and advances the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`AssetFsError::NotADirectory`] when called on a file.
    ///
    /// [`AssetFsError::NotADirectory`]: crate::AssetFsError::NotADirectory
    fn readdir(&mut self, count: isize) -> Result<Vec<FileInfo>>;

    /// Returns the entry metadata.
    ///
    /// # Errors
    ///
    /// The bundled handles never fail; the signature leaves room for
    /// implementations backed by real files.
    fn stat(&self) -> Result<FileInfo>;

    /// Releases the handle. A no-op for in-memory handles.
    ///
    /// # Errors
    ///
    /// The bundled handles never fail.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

/// A filesystem a static-file server can open paths on.
pub trait HttpFileSystem: Send + Sync {
    /// Handle type returned by [`HttpFileSystem::open`].
    type File: HttpFile;

    /// Opens the file or directory at `name`.
    ///
    /// # Errors
    ///
    /// Returns [`AssetFsError::NotFound`] if nothing exists at `name`.
    ///
    /// [`AssetFsError::NotFound`]: crate::AssetFsError::NotFound
    fn open(&self, name: &str) -> Result<Self::File>;
}
