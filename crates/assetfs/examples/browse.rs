//! Walks an embedded asset tree and prints a listing.
//!
//! Run with `RUST_LOG=assetfs=trace` to see lookups as they happen, and
//! pass `--json` to print entry metadata as JSON lines.
//!
//! ```bash
//! RUST_LOG=assetfs=debug cargo run --example browse -- --json
//! ```

use assetfs::{AssetFs, AssetFsConfig, AssetFsError, AssetSource, EmbeddedAssets, HttpFile, Result};
use std::io::Read;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn bundle() -> Result<EmbeddedAssets> {
    EmbeddedAssets::builder()
        .add_file("public/index.html", "<!doctype html><h1>assetfs</h1>")
        .add_file("public/css/site.css", "body { font-family: sans-serif }")
        .add_file("public/js/app.js", "console.log('ready');")
        .add_file("public/img/logo.svg", "<svg xmlns=\"http://www.w3.org/2000/svg\"/>")
        .add_file("templates/mail.txt", "not served")
        .build()
}

fn walk<S: AssetSource>(fs: &AssetFs<S>, path: &str, depth: usize, json: bool) -> Result<()> {
    let mut dir = fs.open(path)?;
    for entry in dir.readdir(0)? {
        let child = format!("{}/{}", path.trim_end_matches('/'), entry.name());
        if json {
            match serde_json::to_string(&entry) {
                Ok(line) => println!("{line}"),
                Err(e) => tracing::error!("Failed to encode entry: {e}"),
            }
        } else {
            println!(
                "{}{} {:>6}  {}",
                "  ".repeat(depth),
                entry.mode(),
                entry.size(),
                entry.name()
            );
        }

        if entry.is_dir() {
            walk(fs, &child, depth + 1, json)?;
        }
    }
    dir.close()
}

fn main() -> Result<()> {
    init_logging();
    let json = std::env::args().any(|arg| arg == "--json");

    let config = AssetFsConfig::builder().prefix("public").build();
    let fs = AssetFs::with_config(bundle()?, config);

    walk(&fs, "/", 0, json)?;

    let mut index = fs.open("/index.html")?;
    let mut html = String::new();
    index
        .read_to_string(&mut html)
        .map_err(|e| AssetFsError::Io {
            path: "/index.html".to_string(),
            source: e,
        })?;
    tracing::info!(bytes = html.len(), "Read /index.html");

    Ok(())
}
