//! Bundled [`AssetSource`](crate::AssetSource) implementations.
//!
//! - [`EmbeddedAssets`]: in-memory tree of named blobs
//! - [`FnSource`]: adapter over two lookup functions
//! - [`DiskSource`]: passthrough to a directory on disk

mod disk;
mod embedded;
mod func;

pub use disk::DiskSource;
pub use embedded::{EmbeddedAssets, EmbeddedAssetsBuilder};
pub use func::FnSource;
