use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::path::Path;
use trawl::{canonicalize_partial, normalize, resolve_components};

fn bench_resolve_components(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_components");

    group.bench_function("clean_path", |b| {
        b.iter(|| resolve_components(black_box(Path::new("/var/lib/app/data/file"))));
    });

    group.bench_function("with_dots", |b| {
        b.iter(|| resolve_components(black_box(Path::new("/a/b/../c/./d"))));
    });

    group.bench_function("many_dots", |b| {
        b.iter(|| resolve_components(black_box(Path::new("/a/b/c/d/../../e/./f/.."))));
    });

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("absolute", |b| {
        b.iter(|| normalize(black_box(Path::new("/absolute/path/to/file"))));
    });

    // Relative input adds a current-directory lookup.
    group.bench_function("relative", |b| {
        b.iter(|| normalize(black_box(Path::new("relative/path"))));
    });

    group.finish();
}

fn bench_canonicalize_partial(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonicalize_partial");

    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let existing = dir.path().to_path_buf();
    let shallow_miss = existing.join("pending.txt");
    let deep_miss = existing.join("a").join("b").join("c").join("d");

    group.bench_function("existing", |b| {
        b.iter(|| canonicalize_partial(black_box(&existing)));
    });

    group.bench_function("shallow_miss", |b| {
        b.iter(|| canonicalize_partial(black_box(&shallow_miss)));
    });

    // Each missing component costs one failed resolution attempt.
    group.bench_function("deep_miss", |b| {
        b.iter(|| canonicalize_partial(black_box(&deep_miss)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_resolve_components,
    bench_normalize,
    bench_canonicalize_partial
);
criterion_main!(benches);
