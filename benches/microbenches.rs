//! Criterion microbenches for catalog parsing and consistency checking.
//!
//! Run with: `cargo bench`
//!
//! The inputs are synthetic: a catalog of a few thousand icons and a label
//! file defining every label they use, some of them through references.

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::fmt::Write as _;
use std::hint::black_box;
use std::path::Path;

use iconkit::catalog::{from_catalog_str, CatalogKind};
use iconkit::check::{check_catalog, check_labels};
use iconkit::labels::from_label_str;

const ICONS: usize = 4000;
const LABELS: usize = 1500;

fn synthetic_catalog() -> String {
    let mut xml = String::from("<list>\n");
    for category in 0..10 {
        writeln!(xml, "<category id=\"{category}\" name=\"c{category}\">").unwrap();
        for i in (category..ICONS).step_by(10) {
            writeln!(
                xml,
                "<icon id=\"{i}\" labels=\"l{},l{},_p{i}\" path=\"M0 0h{i}\"/>",
                i % LABELS,
                (i * 7) % LABELS
            )
            .unwrap();
        }
        writeln!(xml, "</category>").unwrap();
    }
    xml.push_str("</list>\n");
    xml
}

fn synthetic_labels() -> String {
    let mut xml = String::from("<list>\n");
    for i in 0..LABELS {
        if i % 5 == 0 && i > 0 {
            writeln!(xml, "<label name=\"l{i}\">@label/l{}</label>", i - 1).unwrap();
        } else {
            writeln!(xml, "<label name=\"l{i}\">Label {}</label>", i % 700).unwrap();
        }
    }
    xml.push_str("</list>\n");
    xml
}

/// Benchmark catalog parsing.
fn bench_catalog_parse(c: &mut Criterion) {
    let xml = synthetic_catalog();
    let mut group = c.benchmark_group("catalog_parse");
    group.throughput(Throughput::Bytes(xml.len() as u64));

    group.bench_function("from_catalog_str", |b| {
        b.iter(|| {
            let catalog = from_catalog_str(black_box(&xml), CatalogKind::Default).unwrap();
            black_box(catalog)
        })
    });

    group.finish();
}

/// Benchmark both check passes on pre-parsed inputs.
fn bench_check(c: &mut Criterion) {
    let catalog = from_catalog_str(&synthetic_catalog(), CatalogKind::Default)
        .expect("Failed to parse synthetic catalog");
    let labels = from_label_str(&synthetic_labels()).expect("Failed to parse synthetic labels");
    let path = Path::new("bench.xml");

    let mut group = c.benchmark_group("check");
    group.throughput(Throughput::Elements(ICONS as u64));

    group.bench_function("check_catalog", |b| {
        b.iter(|| black_box(check_catalog(path, black_box(&catalog), None)))
    });

    let (_, vocabulary) = check_catalog(path, &catalog, None);
    group.bench_function("check_labels", |b| {
        b.iter(|| black_box(check_labels(path, black_box(&labels), &vocabulary, None)))
    });

    group.finish();
}

criterion_group!(benches, bench_catalog_parse, bench_check);
criterion_main!(benches);
