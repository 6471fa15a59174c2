//! Benchmarks for classification and phrase resolution

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use elapsed::prelude::*;
use elapsed::{Bucket, classify_seconds};

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    for (name, seconds) in [
        ("just_now", 5_i64),
        ("hours", 5 * 3_600),
        ("weeks", 20 * 86_400),
        ("years", 900 * 86_400),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &seconds, |b, &s| {
            b.iter(|| classify_seconds(black_box(s)))
        });
    }

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let registry = LocaleRegistry::with_builtins();
    let mut group = c.benchmark_group("resolve");

    group.bench_function("known_locale", |b| {
        b.iter(|| registry.resolve(black_box(Bucket::Days), black_box(3), black_box("fr")))
    });

    group.bench_function("fallback_locale", |b| {
        b.iter(|| registry.resolve(black_box(Bucket::Days), black_box(3), black_box("zz")))
    });

    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let now = Utc::now();
    let formatter = ElapsedFormatter::with_builtins().with_clock(FixedClock(now));
    let then = now - Duration::hours(72);

    c.bench_function("format_elapsed_localized", |b| {
        b.iter(|| formatter.format_elapsed_localized(black_box(then), black_box("de")))
    });
}

criterion_group!(benches, bench_classify, bench_resolve, bench_format);
criterion_main!(benches);
