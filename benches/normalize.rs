//! Criterion benchmarks for normalization, the reference algebra and
//! namespace lookups.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use iri_namespace::{Iri, IriNamespace, Uri, UriNamespace, Variant, relativize, resolve};

const BASE: &str = "http://example.com/a/b/c/d;p?q";

/// Benchmark: normalization of references of varying shape
fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    let test_cases = [
        ("plain", "http://example.com/a/b/c", Variant::Absolute),
        ("opaque", "urn:example:animal:ferret:nose", Variant::Absolute),
        (
            "dot_segments",
            "http://example.com/a/./b/../c/./d/../../e/f",
            Variant::Absolute,
        ),
        ("clipped", "/a/../../../../path", Variant::Internal),
        ("relative", "../../a/./b?x=1#frag", Variant::Relative),
        (
            "full",
            "https://user@example.com:8443/a/b/../c/./d?version=2.0&ttl=300#summary",
            Variant::Hierarchical,
        ),
    ];

    for (name, reference, variant) in test_cases {
        group.throughput(Throughput::Bytes(reference.len() as u64));
        group.bench_with_input(BenchmarkId::new("uri", name), &reference, |b, reference| {
            b.iter(|| Uri::parse_as(black_box(reference), variant));
        });
        group.bench_with_input(BenchmarkId::new("iri", name), &reference, |b, reference| {
            b.iter(|| Iri::parse_as(black_box(reference), variant));
        });
    }

    group.finish();
}

/// Benchmark: resolution against a hierarchical base
fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    let references = [
        ("sibling", "g"),
        ("parent", "../g"),
        ("grandparent", "../../g"),
        ("root", "/g"),
        ("query", "?y"),
        ("fragment", "#s"),
        ("network", "//g"),
        ("absolute", "urn:example:g"),
    ];

    for (name, reference) in references {
        group.bench_with_input(BenchmarkId::from_parameter(name), &reference, |b, reference| {
            b.iter(|| resolve::<Uri>(black_box(BASE), black_box(reference)));
        });
    }

    group.finish();
}

/// Benchmark: relativization at increasing directory distance
fn bench_relativize(c: &mut Criterion) {
    let mut group = c.benchmark_group("relativize");

    for depth in [0, 1, 2, 4, 8] {
        let base = format!("http://example.com/{}leaf", "x/".repeat(depth));
        let target = "http://example.com/y/z";
        group.bench_with_input(BenchmarkId::new("depth", depth), &base, |b, base| {
            b.iter(|| relativize::<Uri>(black_box(base), black_box(target)));
        });
    }

    group.finish();
}

/// Benchmark: closed lookups against open per-call validation
fn bench_namespace(c: &mut Criterion) {
    let mut group = c.benchmark_group("namespace");

    let terms: Vec<String> = (0..64).map(|i| format!("term{i}")).collect();
    let Ok(closed) = UriNamespace::with_terms("http://example.com/vocab#", &terms) else {
        return;
    };
    let Ok(open) = IriNamespace::new("http://example.com/vocab#") else {
        return;
    };

    group.bench_function("closed_term", |b| {
        b.iter(|| closed.term(black_box("term42")));
    });
    group.bench_function("closed_get", |b| {
        b.iter(|| closed.get(black_box("term42")).is_some());
    });
    group.bench_function("open_term", |b| {
        b.iter(|| open.term(black_box("term42")));
    });
    group.bench_function("construct_closed", |b| {
        b.iter(|| UriNamespace::with_terms(black_box("http://example.com/vocab#"), &terms));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_normalize,
    bench_resolve,
    bench_relativize,
    bench_namespace,
);

criterion_main!(benches);
