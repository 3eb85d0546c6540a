//! Benchmarks for opening and reading embedded assets.
//!
//! Directory opens probe every child once, so their cost grows with the
//! listing size; file opens should stay flat.
//!
//! # Run Benchmarks
//!
//! ```bash
//! cargo bench --bench open_benchmark
//! ```

use assetfs::{AssetFs, EmbeddedAssets, HttpFile};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use std::io::Read;

fn site(children: usize) -> EmbeddedAssets {
    let mut builder = EmbeddedAssets::builder();
    for i in 0..children {
        if i % 4 == 0 {
            builder = builder.add_file(format!("www/dir{i}/index.html"), "<html></html>");
        } else {
            builder = builder.add_file(format!("www/file{i}.js"), format!("console.log({i});"));
        }
    }
    builder.build().unwrap()
}

/// Directory open plus full listing, by number of children.
fn bench_open_directory(c: &mut Criterion) {
    let mut group = c.benchmark_group("open_directory");

    for children in [1, 10, 100, 1000] {
        let fs = AssetFs::new(site(children));
        group.throughput(Throughput::Elements(children as u64));
        group.bench_with_input(BenchmarkId::from_parameter(children), &fs, |b, fs| {
            b.iter(|| {
                let mut dir = fs.open(black_box("/www")).unwrap();
                black_box(dir.readdir(0).unwrap())
            });
        });
    }

    group.finish();
}

/// File open plus full read, by content size.
fn bench_read_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_file");

    for size in [64, 4096, 65_536, 1_048_576] {
        let assets = EmbeddedAssets::builder()
            .add_file("blob.bin", vec![0xAB_u8; size])
            .build()
            .unwrap();
        let fs = AssetFs::new(assets);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &fs, |b, fs| {
            let mut buf = Vec::with_capacity(size);
            b.iter(|| {
                buf.clear();
                let mut file = fs.open(black_box("/blob.bin")).unwrap();
                file.read_to_end(&mut buf).unwrap();
                black_box(buf.len())
            });
        });
    }

    group.finish();
}

/// Paged listing against one-shot listing.
fn bench_readdir_paging(c: &mut Criterion) {
    let fs = AssetFs::new(site(200));
    let mut group = c.benchmark_group("readdir_paging");

    for page in [0_isize, 1, 16, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(page), &page, |b, &page| {
            b.iter(|| {
                let mut dir = fs.open("/www").unwrap();
                let mut total = 0;
                loop {
                    let batch = dir.readdir(page).unwrap();
                    if batch.is_empty() {
                        break;
                    }
                    total += batch.len();
                    if page == 0 {
                        break;
                    }
                }
                black_box(total)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_open_directory,
    bench_read_file,
    bench_readdir_paging
);
criterion_main!(benches);
