//! Error types for asset filesystem operations.
//!
//! Every failure in this crate is a permanent classification mismatch or
//! absence: nothing here performs I/O that can transiently fail (apart from
//! the opt-in disk passthrough), so no error is retried internally.
//!
//! # Examples
//!
//! ```
//! use assetfs::AssetFsError;
//!
//! let error = AssetFsError::NotFound {
//!     path: "missing.txt".to_string(),
//! };
//!
//! assert!(error.is_not_found());
//! assert_eq!(error.to_string(), "Asset not found: missing.txt");
//! ```

use std::io;
use thiserror::Error;

/// Errors that can occur while resolving or reading embedded assets.
///
/// All variants carry the path (or position) involved and expose an
/// `is_xxx()` classifier for callers that only care about the category.
#[derive(Error, Debug)]
pub enum AssetFsError {
    /// Path names neither an embedded directory nor an embedded file
    #[error("Asset not found: {path}")]
    NotFound {
        /// The path that was not found
        path: String,
    },

    /// Directory semantics were requested on something that is not a directory
    #[error("Not a directory: {path}")]
    NotADirectory {
        /// The path that is not a directory
        path: String,
    },

    /// File content was requested from a directory
    #[error("Is a directory: {path}")]
    IsADirectory {
        /// The directory path
        path: String,
    },

    /// Seek target lies outside the buffer
    #[error("Seek position {offset} out of range for {len}-byte buffer")]
    OutOfRange {
        /// The requested absolute position
        offset: i64,
        /// Length of the buffer being seeked
        len: u64,
    },

    /// Path is empty or contains `.`/`..` segments
    #[error("Invalid asset path: {path:?}")]
    InvalidPath {
        /// The invalid path
        path: String,
    },

    /// A file and a directory were registered under the same path
    #[error("Asset path conflicts with an existing entry: {path}")]
    PathConflict {
        /// The conflicting path
        path: String,
    },

    /// Underlying disk access failed (disk passthrough only)
    #[error("I/O error for {path}: {source}")]
    Io {
        /// The path being accessed
        path: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl AssetFsError {
    /// Returns `true` if this is a not-found error.
    ///
    /// # Examples
    ///
    /// ```
    /// use assetfs::AssetFsError;
    ///
    /// let error = AssetFsError::NotFound {
    ///     path: "a.txt".to_string(),
    /// };
    ///
    /// assert!(error.is_not_found());
    /// assert!(!error.is_not_directory());
    /// ```
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` if this is a not-a-directory error.
    #[must_use]
    pub const fn is_not_directory(&self) -> bool {
        matches!(self, Self::NotADirectory { .. })
    }

    /// Returns `true` if this is an is-a-directory error.
    #[must_use]
    pub const fn is_directory(&self) -> bool {
        matches!(self, Self::IsADirectory { .. })
    }

    /// Returns `true` if this is an out-of-range seek error.
    ///
    /// # Examples
    ///
    /// ```
    /// use assetfs::AssetFsError;
    ///
    /// let error = AssetFsError::OutOfRange { offset: -1, len: 5 };
    /// assert!(error.is_out_of_range());
    /// ```
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// Returns `true` if this error was raised while registering a path.
    #[must_use]
    pub const fn is_invalid_path(&self) -> bool {
        matches!(self, Self::InvalidPath { .. } | Self::PathConflict { .. })
    }

    /// Returns `true` if this wraps a disk I/O failure.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Extracts an `AssetFsError` carried inside an [`io::Error`], if any.
    ///
    /// `Read` and `Seek` implementations report failures through
    /// `io::Error`; this recovers the typed error they wrap.
    ///
    /// # Examples
    ///
    /// ```
    /// use assetfs::AssetFsError;
    /// use std::io;
    ///
    /// let io_err: io::Error = AssetFsError::OutOfRange { offset: 9, len: 3 }.into();
    /// let typed = AssetFsError::from_io(&io_err).unwrap();
    /// assert!(typed.is_out_of_range());
    /// ```
    #[must_use]
    pub fn from_io(error: &io::Error) -> Option<&Self> {
        error.get_ref().and_then(|inner| inner.downcast_ref::<Self>())
    }

    const fn io_kind(&self) -> io::ErrorKind {
        match self {
            Self::NotFound { .. } => io::ErrorKind::NotFound,
            Self::NotADirectory { .. } => io::ErrorKind::NotADirectory,
            Self::IsADirectory { .. } => io::ErrorKind::IsADirectory,
            Self::OutOfRange { .. } | Self::InvalidPath { .. } => io::ErrorKind::InvalidInput,
            Self::PathConflict { .. } => io::ErrorKind::AlreadyExists,
            Self::Io { .. } => io::ErrorKind::Other,
        }
    }
}

impl From<AssetFsError> for io::Error {
    fn from(error: AssetFsError) -> Self {
        let kind = match &error {
            AssetFsError::Io { source, .. } => source.kind(),
            other => other.io_kind(),
        };
        Self::new(kind, error)
    }
}

/// Type alias for asset filesystem results.
pub type Result<T> = std::result::Result<T, AssetFsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_not_found() {
        let error = AssetFsError::NotFound {
            path: "x".to_string(),
        };
        assert!(error.is_not_found());
        assert!(!error.is_not_directory());
        assert!(!error.is_out_of_range());
        assert!(!error.is_invalid_path());
    }

    #[test]
    fn test_error_is_not_directory() {
        let error = AssetFsError::NotADirectory {
            path: "a.txt".to_string(),
        };
        assert!(error.is_not_directory());
        assert!(!error.is_not_found());
        assert_eq!(error.to_string(), "Not a directory: a.txt");
    }

    #[test]
    fn test_error_is_invalid_path() {
        let error = AssetFsError::InvalidPath {
            path: String::new(),
        };
        assert!(error.is_invalid_path());

        let error = AssetFsError::PathConflict {
            path: "dir".to_string(),
        };
        assert!(error.is_invalid_path());
    }

    #[test]
    fn test_out_of_range_message() {
        let error = AssetFsError::OutOfRange { offset: 12, len: 5 };
        assert_eq!(
            error.to_string(),
            "Seek position 12 out of range for 5-byte buffer"
        );
    }

    #[test]
    fn test_into_io_error_kind() {
        let io_err: io::Error = AssetFsError::NotFound {
            path: "x".to_string(),
        }
        .into();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);

        let io_err: io::Error = AssetFsError::OutOfRange { offset: -1, len: 0 }.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);

        let io_err: io::Error = AssetFsError::NotADirectory {
            path: "f".to_string(),
        }
        .into();
        assert_eq!(io_err.kind(), io::ErrorKind::NotADirectory);
    }

    #[test]
    fn test_into_io_error_keeps_source_kind() {
        let io_err: io::Error = AssetFsError::Io {
            path: "x".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();
        assert_eq!(io_err.kind(), io::ErrorKind::PermissionDenied);
        assert!(AssetFsError::from_io(&io_err).unwrap().is_io());
    }

    #[test]
    fn test_from_io_foreign_error() {
        let io_err = io::Error::other("plain");
        assert!(AssetFsError::from_io(&io_err).is_none());
    }
}
