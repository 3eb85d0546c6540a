//! Read-only virtual filesystem over embedded assets.
//!
//! Exposes a bundle of binary assets (files compiled into the program,
//! plus the directory tree implied by their names) through the
//! open/read/seek/readdir/stat interface an HTTP static-file handler
//! expects.
//!
//! # Features
//!
//! - **Pluggable sources**: anything implementing [`AssetSource`] can back
//!   the filesystem; [`EmbeddedAssets`], [`FnSource`] and [`DiskSource`]
//!   are bundled
//! - **Prefix scoping**: serve only a subtree of the bundle
//! - **Debug mode**: opened files report the current time as their
//!   modification time, defeating HTTP caching during development
//! - **Thread-safe**: `AssetFs` is `Send + Sync`; every handle is
//!   independent
//!
//! # Examples
//!
//! ## Serving a bundle
//!
//! ```
//! use assetfs::{AssetFs, EmbeddedAssets, HttpFile};
//! use std::io::Read;
//!
//! let assets = EmbeddedAssets::builder()
//!     .add_file("static/index.html", "<h1>hi</h1>")
//!     .add_file("static/css/site.css", "body {}")
//!     .build()
//!     .unwrap();
//!
//! let fs = AssetFs::with_prefix(assets, "static");
//!
//! let mut index = fs.open("/index.html").unwrap();
//! let mut html = String::new();
//! index.read_to_string(&mut html).unwrap();
//! assert_eq!(html, "<h1>hi</h1>");
//!
//! let mut root = fs.open("/").unwrap();
//! let entries = root.readdir(0).unwrap();
//! assert_eq!(entries.len(), 2);
//! assert!(entries[1].is_dir());
//! ```
//!
//! ## Error handling
//!
//! ```
//! use assetfs::{AssetFs, EmbeddedAssets, HttpFile};
//!
//! let fs = AssetFs::new(EmbeddedAssets::builder().add_file("a.txt", "x").build().unwrap());
//!
//! assert!(fs.open("/missing").unwrap_err().is_not_found());
//!
//! let mut file = fs.open("/a.txt").unwrap();
//! assert!(file.readdir(0).unwrap_err().is_not_directory());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod dir;
mod error;
mod file;
mod fs;
pub mod path;
pub mod source;
mod traits;
mod types;

// Re-export main types
pub use config::{AssetFsConfig, AssetFsConfigBuilder};
pub use dir::AssetDirectory;
pub use error::{AssetFsError, Result};
pub use file::AssetFile;
pub use fs::{AssetFs, AssetHandle};
pub use source::{DiskSource, EmbeddedAssets, EmbeddedAssetsBuilder, FnSource};
pub use traits::{AssetSource, HttpFile, HttpFileSystem};
pub use types::{AssetData, FileInfo, FileMode, ModTime};
