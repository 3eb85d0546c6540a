//! In-memory asset tree.
//!
//! `EmbeddedAssets` holds named blobs (typically `include_bytes!` data) and
//! the synthetic directory tree implied by their names. Directory listings
//! keep the order in which names first appeared.
//!
//! # Examples
//!
//! ```
//! use assetfs::{AssetSource, EmbeddedAssets};
//!
//! let assets = EmbeddedAssets::builder()
//!     .add_file("index.html", "<h1>hi</h1>")
//!     .add_file("css/site.css", "body {}")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(assets.asset_dir("").unwrap(), ["index.html", "css"]);
//! assert_eq!(&*assets.asset("css/site.css").unwrap(), b"body {}");
//! ```

use crate::error::{AssetFsError, Result};
use crate::traits::AssetSource;
use crate::types::AssetData;
use std::borrow::Cow;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum Node {
    File,
    Dir(DirNode),
}

#[derive(Debug, Clone, Default)]
struct DirNode {
    children: Vec<(String, Node)>,
}

impl DirNode {
    fn get(&self, name: &str) -> Option<&Node> {
        self.children
            .iter()
            .find(|(child, _)| child == name)
            .map(|(_, node)| node)
    }

    /// Returns the child directory `name`, creating it if absent.
    /// `None` if a file already occupies the name.
    fn child_dir_mut(&mut self, name: &str) -> Option<&mut Self> {
        let idx = self
            .children
            .iter()
            .position(|(child, _)| child == name)
            .unwrap_or_else(|| {
                self.children
                    .push((name.to_string(), Node::Dir(Self::default())));
                self.children.len() - 1
            });

        match &mut self.children[idx].1 {
            Node::Dir(dir) => Some(dir),
            Node::File => None,
        }
    }

    fn names(&self) -> Vec<String> {
        self.children.iter().map(|(name, _)| name.clone()).collect()
    }
}

/// Validates an asset path and returns its lookup key.
///
/// One leading `/` is accepted and dropped; empty, `.` and `..` segments
/// are rejected.
fn asset_key(path: &str) -> Result<String> {
    let key = path.strip_prefix('/').unwrap_or(path);
    let valid = !key.is_empty()
        && key
            .split('/')
            .all(|segment| !matches!(segment, "" | "." | ".."));

    if valid {
        Ok(key.to_string())
    } else {
        Err(AssetFsError::InvalidPath {
            path: path.to_string(),
        })
    }
}

/// An in-memory set of embedded assets.
///
/// Paths are relative, `/`-separated keys such as `static/css/site.css`.
/// Every prefix of a file path is a directory; the empty path is the root.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, making it safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedAssets {
    files: HashMap<String, Cow<'static, [u8]>>,
    root: DirNode,
}

impl EmbeddedAssets {
    /// Creates an empty asset set.
    ///
    /// # Examples
    ///
    /// ```
    /// use assetfs::EmbeddedAssets;
    ///
    /// let assets = EmbeddedAssets::new();
    /// assert_eq!(assets.file_count(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder.
    #[must_use]
    pub fn builder() -> EmbeddedAssetsBuilder {
        EmbeddedAssetsBuilder::new()
    }

    /// Adds a file, creating its parent directories.
    ///
    /// If a file already exists at the path, its content is replaced and
    /// its listing position is kept.
    ///
    /// # Errors
    ///
    /// Returns [`AssetFsError::InvalidPath`] if the path is empty or has
    /// empty, `.` or `..` segments, and [`AssetFsError::PathConflict`] if
    /// the path or one of its parents is already used by the other kind of
    /// entry. Nothing is modified on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use assetfs::EmbeddedAssets;
    ///
    /// let mut assets = EmbeddedAssets::new();
    /// assets.add_file("dir/b.txt", "world").unwrap();
    ///
    /// assert!(assets.add_file("dir", "oops").unwrap_err().is_invalid_path());
    /// assert!(assets.add_file("../b.txt", "").is_err());
    /// ```
    pub fn add_file(
        &mut self,
        path: impl AsRef<str>,
        content: impl Into<AssetData>,
    ) -> Result<()> {
        let key = asset_key(path.as_ref())?;
        let conflict = || AssetFsError::PathConflict { path: key.clone() };

        let (leaf, parents) = match key.rsplit_once('/') {
            Some((parents, leaf)) => (leaf, Some(parents)),
            None => (key.as_str(), None),
        };

        let mut dir = &mut self.root;
        for segment in parents.into_iter().flat_map(|p| p.split('/')) {
            dir = dir.child_dir_mut(segment).ok_or_else(conflict)?;
        }

        match dir.get(leaf).map(|node| matches!(node, Node::Dir(_))) {
            Some(true) => return Err(conflict()),
            Some(false) => {}
            None => dir.children.push((leaf.to_string(), Node::File)),
        }

        self.files.insert(key, content.into().into_inner());
        Ok(())
    }

    /// Returns the number of files.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Returns all file paths in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use assetfs::EmbeddedAssets;
    ///
    /// let assets = EmbeddedAssets::builder()
    ///     .add_file("b.txt", "")
    ///     .add_file("a/c.txt", "")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(assets.paths(), ["a/c.txt", "b.txt"]);
    /// ```
    #[must_use]
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<_> = self.files.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }

    /// Returns the names at the top of the tree, in insertion order.
    ///
    /// Generated asset tables commonly nest everything under a single
    /// top-level directory; its name is the natural prefix for an
    /// [`AssetFs`](crate::AssetFs).
    #[must_use]
    pub fn root_names(&self) -> Vec<String> {
        self.root.names()
    }

    /// Removes every file and directory.
    pub fn clear(&mut self) {
        self.files.clear();
        self.root = DirNode::default();
    }

    fn find_dir(&self, path: &str) -> Option<&DirNode> {
        if path.is_empty() {
            return Some(&self.root);
        }

        let mut dir = &self.root;
        for segment in path.split('/') {
            match dir.get(segment)? {
                Node::Dir(child) => dir = child,
                Node::File => return None,
            }
        }
        Some(dir)
    }
}

impl AssetSource for EmbeddedAssets {
    /// Borrowed content is handed out without copying; owned content is
    /// cloned per call.
    fn asset(&self, path: &str) -> Result<Cow<'static, [u8]>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| AssetFsError::NotFound {
                path: path.to_string(),
            })
    }

    fn asset_dir(&self, path: &str) -> Result<Vec<String>> {
        self.find_dir(path)
            .map(DirNode::names)
            .ok_or_else(|| AssetFsError::NotADirectory {
                path: path.to_string(),
            })
    }
}

/// Builder for [`EmbeddedAssets`].
///
/// Invalid paths are collected and the first one is reported by
/// [`EmbeddedAssetsBuilder::build`].
///
/// # Examples
///
/// ```
/// use assetfs::EmbeddedAssets;
///
/// let assets = EmbeddedAssets::builder()
///     .add_file("a.txt", "hello")
///     .add_files([("dir/b.txt", "world"), ("dir/c.txt", "!")])
///     .build()
///     .unwrap();
///
/// assert_eq!(assets.file_count(), 3);
///
/// let result = EmbeddedAssets::builder().add_file("", "empty").build();
/// assert!(result.is_err());
/// ```
#[derive(Debug, Default)]
pub struct EmbeddedAssetsBuilder {
    assets: EmbeddedAssets,
    errors: Vec<AssetFsError>,
}

impl EmbeddedAssetsBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file. Errors are deferred to [`build`](Self::build).
    #[must_use]
    pub fn add_file(
        mut self,
        path: impl AsRef<str>,
        content: impl Into<AssetData>,
    ) -> Self {
        if let Err(e) = self.assets.add_file(path, content) {
            tracing::warn!("Skipping embedded asset: {e}");
            self.errors.push(e);
        }
        self
    }

    /// Adds several files at once.
    #[must_use]
    pub fn add_files<P, C>(mut self, files: impl IntoIterator<Item = (P, C)>) -> Self
    where
        P: AsRef<str>,
        C: Into<AssetData>,
    {
        for (path, content) in files {
            self = self.add_file(path, content);
        }
        self
    }

    /// Returns the number of files added so far.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.assets.file_count()
    }

    /// Consumes the builder and returns the assets.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered while adding files, if any.
    pub fn build(self) -> Result<EmbeddedAssets> {
        if let Some(error) = self.errors.into_iter().next() {
            return Err(error);
        }
        Ok(self.assets)
    }
}
