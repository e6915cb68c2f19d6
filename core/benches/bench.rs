use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::{io, sync::Arc};
use verdict_core::prelude::*;

fn bench_queries(c: &mut Criterion) {
    let ok = ValueErrorResult::<u64, io::ErrorKind>::from_value(42);
    let err = ValueResult::<u64>::from_error(Arc::new(io::Error::other("bench")));

    c.bench_function("value-error-result-joint-query", |b| b.iter(|| black_box(black_box(&ok).value_or_error().is_ok())));

    c.bench_function("value-result-error-query", |b| b.iter(|| black_box(black_box(&err).error().is_some())));
}

fn bench_unwrap(c: &mut Criterion) {
    c.bench_function("bool-result-unwrap-value", |b| b.iter(|| black_box(BoolResult::from_value(black_box(true)).try_unwrap())));

    let error: DynError = Arc::new(io::Error::other("bench"));
    c.bench_function("value-result-unwrap-error", |b| {
        b.iter(|| black_box(ValueResult::<u64>::from_error(black_box(error.clone())).try_unwrap()))
    });
}

criterion_group!(benches, bench_queries, bench_unwrap);
criterion_main!(benches);
