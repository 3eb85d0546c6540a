//! Integration tests for serving assets straight from disk.
//!
//! Mirrors the embedded scenarios against a real directory tree created
//! with `tempfile`.

use assetfs::{AssetFs, AssetFsConfig, DiskSource, HttpFile};
use std::fs;
use std::io::Read;
use tempfile::TempDir;

fn site() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("static/css")).unwrap();
    fs::write(root.join("static/index.html"), "<h1>home</h1>").unwrap();
    fs::write(root.join("static/css/site.css"), "body {}").unwrap();
    fs::write(root.join("README.md"), "not served").unwrap();
    temp_dir
}

/// Test prefix-scoped serving from a real directory
#[test]
fn test_serve_prefixed_tree() {
    let temp_dir = site();
    let fs = AssetFs::with_prefix(DiskSource::new(temp_dir.path()), "static");

    let mut index = fs.open("/index.html").unwrap();
    let mut html = String::new();
    index.read_to_string(&mut html).unwrap();
    assert_eq!(html, "<h1>home</h1>");

    let entries = fs.open("/").unwrap().readdir(0).unwrap();
    let names: Vec<_> = entries.iter().map(|e| e.name()).collect();
    assert_eq!(names, ["css", "index.html"]);
    assert!(entries[0].is_dir());
    assert!(!entries[1].is_dir());
}

#[test]
fn test_parent_escape_is_not_found() {
    let temp_dir = site();
    let fs = AssetFs::with_prefix(DiskSource::new(temp_dir.path().join("static")), "");

    // lexical cleaning keeps the request inside the root
    assert!(fs.open("/../README.md").unwrap_err().is_not_found());
    assert!(fs.exists("/css/../index.html"));
}

#[test]
fn test_edits_visible_without_reopen_of_fs() {
    let temp_dir = site();
    let config = AssetFsConfig::builder().prefix("static").debug(true).build();
    let fs = AssetFs::with_config(DiskSource::new(temp_dir.path()), config);

    assert_eq!(fs.read("css/site.css").unwrap(), b"body {}");
    fs::write(temp_dir.path().join("static/css/site.css"), "body { margin: 0 }").unwrap();
    assert_eq!(fs.read("css/site.css").unwrap(), b"body { margin: 0 }");

    let info = fs.open("css/site.css").unwrap().stat().unwrap();
    assert!(info.mod_time_policy().is_live());
    assert_eq!(info.size(), 18);
}

#[test]
fn test_missing_file() {
    let temp_dir = site();
    let fs = AssetFs::new(DiskSource::new(temp_dir.path()));
    assert!(fs.open("static/nope.js").unwrap_err().is_not_found());
    assert!(fs.open("README.md/x").unwrap_err().is_not_found());
}
