//! Tests to verify that all public types are Send + Sync as required.

use assetfs::*;

const fn assert_send_sync<T: Send + Sync>() {}

const fn assert_send<T: Send>() {}

#[test]
fn test_filesystem_is_send_sync() {
    // Shared across request handlers
    assert_send_sync::<AssetFs<EmbeddedAssets>>();
    assert_send_sync::<AssetFs<DiskSource>>();
    assert_send_sync::<AssetFs<&'static EmbeddedAssets>>();
    assert_send_sync::<AssetFs<std::sync::Arc<dyn AssetSource>>>();
}

#[test]
fn test_handles_are_send() {
    // Handles move into the task that streams the response
    assert_send::<AssetHandle>();
    assert_send::<AssetFile>();
    assert_send::<AssetDirectory>();
}

#[test]
fn test_metadata_types_are_send_sync() {
    assert_send_sync::<FileInfo>();
    assert_send_sync::<FileMode>();
    assert_send_sync::<ModTime>();
    assert_send_sync::<AssetData>();
    assert_send_sync::<AssetFsConfig>();
}

#[test]
fn test_error_is_send_sync() {
    // Error type must be Send + Sync
    assert_send_sync::<AssetFsError>();
}
