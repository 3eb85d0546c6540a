//! Asset source built from two plain lookup functions.

use crate::error::Result;
use crate::traits::AssetSource;
use std::borrow::Cow;
use std::fmt;

/// Adapts an `asset` function and an `asset_dir` function into an
/// [`AssetSource`].
///
/// Useful when the lookups already exist as free functions, for example
/// ones emitted by an asset code generator.
///
/// # Examples
///
/// ```
/// use assetfs::{AssetFs, AssetFsError, FnSource, Result};
/// use std::borrow::Cow;
///
/// fn asset(path: &str) -> Result<Cow<'static, [u8]>> {
///     match path {
///         "robots.txt" => Ok(Cow::Borrowed(b"User-agent: *".as_slice())),
///         _ => Err(AssetFsError::NotFound { path: path.to_string() }),
///     }
/// }
///
/// fn asset_dir(path: &str) -> Result<Vec<String>> {
///     match path {
///         "" => Ok(vec!["robots.txt".to_string()]),
///         _ => Err(AssetFsError::NotADirectory { path: path.to_string() }),
///     }
/// }
///
/// let fs = AssetFs::new(FnSource::new(asset, asset_dir));
/// assert_eq!(fs.read("/robots.txt").unwrap(), b"User-agent: *");
/// ```
pub struct FnSource<A, D> {
    asset: A,
    asset_dir: D,
}

impl<A, D> FnSource<A, D>
where
    A: Fn(&str) -> Result<Cow<'static, [u8]>> + Send + Sync,
    D: Fn(&str) -> Result<Vec<String>> + Send + Sync,
{
    /// Wraps the two lookups.
    #[must_use]
    pub const fn new(asset: A, asset_dir: D) -> Self {
        Self { asset, asset_dir }
    }
}

impl<A, D> AssetSource for FnSource<A, D>
where
    A: Fn(&str) -> Result<Cow<'static, [u8]>> + Send + Sync,
    D: Fn(&str) -> Result<Vec<String>> + Send + Sync,
{
    fn asset(&self, path: &str) -> Result<Cow<'static, [u8]>> {
        (self.asset)(path)
    }

    fn asset_dir(&self, path: &str) -> Result<Vec<String>> {
        (self.asset_dir)(path)
    }
}

impl<A, D> fmt::Debug for FnSource<A, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSource").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssetFsError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_closures_as_source() {
        let source = FnSource::new(
            |path: &str| match path {
                "a.txt" => Ok(Cow::Borrowed(b"hello".as_slice())),
                _ => Err(AssetFsError::NotFound {
                    path: path.to_string(),
                }),
            },
            |path: &str| match path {
                "" => Ok(vec!["a.txt".to_string()]),
                _ => Err(AssetFsError::NotADirectory {
                    path: path.to_string(),
                }),
            },
        );

        assert_eq!(&*source.asset("a.txt").unwrap(), b"hello");
        assert!(source.asset("b.txt").unwrap_err().is_not_found());
        assert_eq!(source.asset_dir("").unwrap(), ["a.txt"]);
        assert!(source.asset_dir("a.txt").unwrap_err().is_not_directory());
    }

    #[test]
    fn test_lookups_are_not_cached() {
        let calls = AtomicUsize::new(0);
        let source = FnSource::new(
            |path: &str| {
                Err(AssetFsError::NotFound {
                    path: path.to_string(),
                })
            },
            |_: &str| {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(Vec::new())
            },
        );

        source.asset_dir("").unwrap();
        source.asset_dir("").unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_debug_output() {
        let source = FnSource::new(
            |p: &str| Err(AssetFsError::NotFound { path: p.to_string() }),
            |p: &str| Err(AssetFsError::NotADirectory { path: p.to_string() }),
        );
        assert_eq!(format!("{source:?}"), "FnSource { .. }");
    }
}
