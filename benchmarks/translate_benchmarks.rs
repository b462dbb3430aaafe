#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Resolution benchmarks: relurl vs url crate
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use relurl::{BaseUrl, UrlComponents};
use url::Url as UrlCrate;

const BASE: &str = "https://www.example.com/docs/guide/index.html?lang=en";

/// A page's worth of typical links
const LINKS: &[&str] = &[
    "intro.html",
    "../api/",
    "/static/app.css",
    "//cdn.example.net/lib.js",
    "https://other.example.org/a/b?c=d#e",
    "#section-2",
    "?lang=fr",
    "images/logo small.png",
    "./a/../b/./c.html",
    "mailto:docs@example.com",
];

fn bench_translate(c: &mut Criterion) {
    let mut group = c.benchmark_group("translate");

    let base = BaseUrl::parse(BASE).unwrap();
    group.bench_function("relurl", |b| {
        b.iter(|| {
            for link in LINKS {
                let _ = black_box(base.translate(black_box(link)));
            }
        });
    });

    let base = UrlCrate::parse(BASE).unwrap();
    group.bench_function("url_crate", |b| {
        b.iter(|| {
            for link in LINKS {
                let _ = black_box(base.join(black_box(link)));
            }
        });
    });

    group.finish();
}

fn bench_parse_components(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_components");

    group.bench_function("reference", |b| {
        b.iter(|| {
            for link in LINKS {
                let _ = black_box(UrlComponents::parse(black_box(link)));
            }
        });
    });

    group.bench_function("document", |b| {
        b.iter(|| UrlComponents::parse_document(black_box(BASE)));
    });

    group.finish();
}

fn bench_base_url(c: &mut Criterion) {
    c.bench_function("base_url_first_access", |b| {
        b.iter(|| {
            let url = BaseUrl::parse(black_box(BASE)).unwrap();
            black_box(url.path().len())
        });
    });
}

criterion_group!(
    benches,
    bench_translate,
    bench_parse_components,
    bench_base_url
);
criterion_main!(benches);
